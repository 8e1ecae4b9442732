pub mod export;
pub mod histogram;
pub mod reader;
pub mod render;
pub mod stats;

pub use histplot_common::{Config, HistplotError, Result};

pub use export::{export_csv, export_json, export_pdf, export_svg, print_summary};
pub use histogram::{build_histogram, HistogramBin};
pub use reader::{load_samples, BlankLinePolicy, SampleFileInfo};
pub use render::{render_histogram, HistogramChart, RenderOptions};
pub use stats::{summarize_samples, SampleSummary};
