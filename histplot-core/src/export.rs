use crate::histogram::HistogramBin;
use crate::reader::SampleFileInfo;
use crate::render::HistogramChart;
use crate::stats::SampleSummary;
use histplot_common::{HistplotError, Result};
use std::io::Write;
use std::path::Path;

/// Convert the SVG artifact to a single-page vector PDF and write it,
/// overwriting any existing file. The document is fully materialized in
/// memory before the output path is touched.
pub fn export_pdf(chart: &HistogramChart, path: &Path) -> Result<()> {
    let mut options = svg2pdf::usvg::Options::default();
    options.fontdb_mut().load_system_fonts();
    let tree = svg2pdf::usvg::Tree::from_str(&chart.svg, &options)
        .map_err(|e| HistplotError::Render(e.to_string()))?;
    let pdf = svg2pdf::to_pdf(
        &tree,
        svg2pdf::ConversionOptions::default(),
        svg2pdf::PageOptions::default(),
    )
    .map_err(|e| HistplotError::Render(e.to_string()))?;
    std::fs::write(path, pdf)?;
    Ok(())
}

pub fn export_svg(chart: &HistogramChart, path: &Path) -> Result<()> {
    std::fs::write(path, chart.svg.as_bytes())?;
    Ok(())
}

pub fn export_json(
    path: &Path,
    info: &SampleFileInfo,
    summary: &SampleSummary,
    bins: &[HistogramBin],
) -> Result<()> {
    let doc = serde_json::json!({
        "file": info,
        "summary": summary,
        "histogram": bins,
    });
    let mut file = std::fs::File::create(path)?;
    serde_json::to_writer_pretty(&mut file, &doc)
        .map_err(|e| HistplotError::Other(e.to_string()))?;
    Ok(())
}

pub fn export_csv(path: &Path, bins: &[HistogramBin]) -> Result<()> {
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "lower,upper,count")?;
    for bin in bins {
        writeln!(file, "{},{},{}", bin.lower, bin.upper, bin.count)?;
    }
    Ok(())
}

pub fn print_summary(info: &SampleFileInfo, summary: &SampleSummary, bins: &[HistogramBin]) {
    println!("{:<16} {}", "File:", info.path.display());
    println!("{:<16} {} bytes", "Size:", info.file_size);
    println!("{:<16} {}", "Lines:", info.line_count);
    if info.skipped_blank > 0 {
        println!("{:<16} {}", "Blank skipped:", info.skipped_blank);
    }
    println!("{:<16} {}", "Samples:", summary.count);
    println!("{:<16} {}", "Min:", summary.min);
    println!("{:<16} {}", "Max:", summary.max);
    println!("{:<16} {:.6}", "Mean:", summary.mean);
    println!("{:<16} {:.6}", "Stddev:", summary.stddev);
    println!("{:<16} {}", "Median:", summary.median);
    println!("{:<16} {}", "Bins:", bins.len());
    for (i, bin) in bins.iter().enumerate() {
        // last bin is closed on both ends
        let close = if i + 1 == bins.len() { ']' } else { ')' };
        println!("  [{:.6}, {:.6}{close}  {}", bin.lower, bin.upper, bin.count);
    }
}
