pub mod config;
pub use config::Config;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HistplotError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid sample at line {line}: {text:?}")]
    Parse { line: usize, text: String },
    #[error("input contains no samples; histogram is undefined")]
    EmptyInput,
    #[error("render error: {0}")]
    Render(String),
    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, HistplotError>;
