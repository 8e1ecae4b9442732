use clap::{Parser, Subcommand};
use histplot_common::Config;
use histplot_core::{
    build_histogram, export_csv, export_json, export_pdf, export_svg, load_samples, print_summary,
    render_histogram, summarize_samples, BlankLinePolicy, RenderOptions,
};
use std::path::{Path, PathBuf};

const DEFAULT_INPUT: &str = "out.csv";
const DEFAULT_OUTPUT: &str = "out.pdf";

fn parse_bins(s: &str) -> Result<usize, String> {
    // validate bin count at CLI parse time
    let v: usize = s.parse().map_err(|_| format!("not an integer: {s}"))?;
    if v > 0 {
        Ok(v)
    } else {
        Err(format!("bin count must be positive, got {v}"))
    }
}

#[derive(Parser)]
#[command(
    name = "histplot",
    version,
    about = "Histogram exporter for newline-delimited samples"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse samples, bin them, and write a rendered histogram PDF
    Plot {
        input: Option<String>,
        #[arg(long)]
        output: Option<String>,
        #[arg(long, value_parser = parse_bins)]
        bins: Option<usize>,
        #[arg(long)]
        caption: Option<String>,
        #[arg(long)]
        skip_blank_lines: bool,
    },
    /// Print sample and bin statistics without rendering
    Summary {
        input: Option<String>,
        #[arg(long)]
        skip_blank_lines: bool,
        #[arg(long)]
        save: bool,
    },
    /// Write the histogram in an auxiliary format (json, csv, or svg)
    Export {
        input: Option<String>,
        #[arg(long, default_value = "json")]
        format: String,
        #[arg(long)]
        output: Option<String>,
        #[arg(long, value_parser = parse_bins)]
        bins: Option<usize>,
        #[arg(long)]
        skip_blank_lines: bool,
    },
}

fn blank_policy(config: &Config, skip_flag: bool) -> anyhow::Result<BlankLinePolicy> {
    if skip_flag {
        return Ok(BlankLinePolicy::Skip);
    }
    BlankLinePolicy::from_name(&config.input.blank_lines).map_err(|e| anyhow::anyhow!("{e}"))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load().unwrap_or_default();
    match cli.command {
        // bare invocation: out.csv -> out.pdf
        None => run_plot(None, None, None, None, false, &config),
        Some(Commands::Plot {
            input,
            output,
            bins,
            caption,
            skip_blank_lines,
        }) => run_plot(input, output, bins, caption, skip_blank_lines, &config),
        Some(Commands::Summary {
            input,
            skip_blank_lines,
            save,
        }) => run_summary(input, skip_blank_lines, save, &config),
        Some(Commands::Export {
            input,
            format,
            output,
            bins,
            skip_blank_lines,
        }) => run_export(input, format, output, bins, skip_blank_lines, &config),
    }
}

fn run_plot(
    input: Option<String>,
    output: Option<String>,
    bins: Option<usize>,
    caption: Option<String>,
    skip_blank_lines: bool,
    config: &Config,
) -> anyhow::Result<()> {
    let input = input.unwrap_or_else(|| DEFAULT_INPUT.to_string());
    let output = output.unwrap_or_else(|| DEFAULT_OUTPUT.to_string());
    let policy = blank_policy(config, skip_blank_lines)?;
    let bins = bins.unwrap_or(config.histogram.bins);
    let (info, samples) =
        load_samples(Path::new(&input), policy).map_err(|e| anyhow::anyhow!("{e}"))?;
    let histogram = build_histogram(&samples, bins).map_err(|e| anyhow::anyhow!("{e}"))?;
    let opts = RenderOptions {
        width: config.render.width,
        height: config.render.height,
        caption: caption.unwrap_or_else(|| config.render.caption.clone()),
    };
    let chart = render_histogram(&histogram, &opts).map_err(|e| anyhow::anyhow!("{e}"))?;
    export_pdf(&chart, Path::new(&output)).map_err(|e| anyhow::anyhow!("{e}"))?;
    println!(
        "Wrote {} ({} samples, {} bins)",
        output,
        info.sample_count,
        histogram.len()
    );
    Ok(())
}

fn run_summary(
    input: Option<String>,
    skip_blank_lines: bool,
    save: bool,
    config: &Config,
) -> anyhow::Result<()> {
    let input = input.unwrap_or_else(|| DEFAULT_INPUT.to_string());
    let policy = blank_policy(config, skip_blank_lines)?;
    let (info, samples) =
        load_samples(Path::new(&input), policy).map_err(|e| anyhow::anyhow!("{e}"))?;
    let summary = summarize_samples(&samples).map_err(|e| anyhow::anyhow!("{e}"))?;
    let histogram =
        build_histogram(&samples, config.histogram.bins).map_err(|e| anyhow::anyhow!("{e}"))?;
    print_summary(&info, &summary, &histogram);
    if save {
        let out_dir = Path::new(&config.export.output_dir);
        std::fs::create_dir_all(out_dir)?;
        let out_path = out_dir.join("summary.json");
        let doc = serde_json::json!({ "file": info, "summary": summary });
        std::fs::write(&out_path, serde_json::to_string_pretty(&doc)?)?;
        println!("Summary saved to {}", out_path.display());
    }
    Ok(())
}

fn run_export(
    input: Option<String>,
    format: String,
    output: Option<String>,
    bins: Option<usize>,
    skip_blank_lines: bool,
    config: &Config,
) -> anyhow::Result<()> {
    let input = input.unwrap_or_else(|| DEFAULT_INPUT.to_string());
    let policy = blank_policy(config, skip_blank_lines)?;
    let bins = bins.unwrap_or(config.histogram.bins);
    let (info, samples) =
        load_samples(Path::new(&input), policy).map_err(|e| anyhow::anyhow!("{e}"))?;
    let summary = summarize_samples(&samples).map_err(|e| anyhow::anyhow!("{e}"))?;
    let histogram = build_histogram(&samples, bins).map_err(|e| anyhow::anyhow!("{e}"))?;
    let default_name = format!("histogram.{format}");
    let out_path: PathBuf = if let Some(ref o) = output {
        PathBuf::from(o)
    } else {
        Path::new(&config.export.output_dir).join(&default_name)
    };
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    match format.as_str() {
        "json" => {
            export_json(&out_path, &info, &summary, &histogram)
                .map_err(|e| anyhow::anyhow!("{e}"))?;
        }
        "csv" => {
            export_csv(&out_path, &histogram).map_err(|e| anyhow::anyhow!("{e}"))?;
        }
        "svg" => {
            let opts = RenderOptions {
                width: config.render.width,
                height: config.render.height,
                caption: config.render.caption.clone(),
            };
            let chart = render_histogram(&histogram, &opts).map_err(|e| anyhow::anyhow!("{e}"))?;
            export_svg(&chart, &out_path).map_err(|e| anyhow::anyhow!("{e}"))?;
        }
        _ => anyhow::bail!("Unknown format: {format} (use json, csv, or svg)"),
    }
    println!("Exported to {}", out_path.display());
    Ok(())
}
