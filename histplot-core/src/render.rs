use crate::histogram::HistogramBin;
use histplot_common::{HistplotError, Result};
use plotters::prelude::*;

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    pub caption: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            caption: "Histogram".into(),
        }
    }
}

/// In-memory SVG document produced by the renderer, consumed by the exporters.
#[derive(Debug, Clone)]
pub struct HistogramChart {
    pub svg: String,
    pub width: u32,
    pub height: u32,
}

/// Draw one filled bar per bin, spanning [lower, upper] at height `count`.
pub fn render_histogram(bins: &[HistogramBin], opts: &RenderOptions) -> Result<HistogramChart> {
    if bins.is_empty() {
        return Err(HistplotError::EmptyInput);
    }
    let x_min = bins[0].lower;
    let x_max = bins[bins.len() - 1].upper;
    let tallest = bins.iter().map(|b| b.count).max().unwrap_or(0);
    let y_max = (tallest as f64 * 1.05).max(1.0); // headroom above the tallest bar

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (opts.width, opts.height)).into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| HistplotError::Render(e.to_string()))?;
        let mut chart = ChartBuilder::on(&root)
            .caption(&opts.caption, ("sans-serif", 24))
            .margin(12)
            .x_label_area_size(36)
            .y_label_area_size(48)
            .build_cartesian_2d(x_min..x_max, 0.0f64..y_max)
            .map_err(|e| HistplotError::Render(e.to_string()))?;
        chart
            .configure_mesh()
            .x_desc("value")
            .y_desc("count")
            .draw()
            .map_err(|e| HistplotError::Render(e.to_string()))?;
        chart
            .draw_series(bins.iter().map(|b| {
                Rectangle::new(
                    [(b.lower, 0.0), (b.upper, b.count as f64)],
                    BLUE.mix(0.6).filled(),
                )
            }))
            .map_err(|e| HistplotError::Render(e.to_string()))?;
        root.present()
            .map_err(|e| HistplotError::Render(e.to_string()))?;
    }

    Ok(HistogramChart {
        svg,
        width: opts.width,
        height: opts.height,
    })
}
