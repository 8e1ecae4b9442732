use histplot_common::{HistplotError, Result};
use serde::{Deserialize, Serialize};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlankLinePolicy {
    #[default]
    Error,
    Skip,
}

impl BlankLinePolicy {
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "error" => Ok(Self::Error),
            "skip" => Ok(Self::Skip),
            other => Err(HistplotError::Other(format!(
                "unknown blank_lines policy: {other} (use error or skip)"
            ))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleFileInfo {
    pub path: PathBuf,
    pub file_size: u64,
    pub line_count: usize,
    pub sample_count: usize,
    pub skipped_blank: usize,
}

/// Parse a file of newline-delimited float literals, preserving file order.
/// The file handle is scoped to this call and released on every exit path.
pub fn load_samples(path: &Path, policy: BlankLinePolicy) -> Result<(SampleFileInfo, Vec<f64>)> {
    let file = std::fs::File::open(path)?;
    let file_size = file.metadata()?.len();
    let reader = BufReader::new(file);

    let mut samples = Vec::new();
    let mut line_count = 0usize;
    let mut skipped_blank = 0usize;
    for (idx, entry) in reader.lines().enumerate() {
        let raw = entry?;
        line_count += 1;
        let text = raw.trim(); // tolerate surrounding whitespace and CRLF
        if text.is_empty() {
            match policy {
                BlankLinePolicy::Skip => {
                    skipped_blank += 1;
                    continue;
                }
                BlankLinePolicy::Error => {
                    return Err(HistplotError::Parse {
                        line: idx + 1,
                        text: text.to_owned(),
                    });
                }
            }
        }
        let value: f64 = text.parse().map_err(|_| HistplotError::Parse {
            line: idx + 1,
            text: text.to_owned(),
        })?;
        // NaN/inf parse as f64 but cannot be assigned to a bin
        if !value.is_finite() {
            return Err(HistplotError::Parse {
                line: idx + 1,
                text: text.to_owned(),
            });
        }
        samples.push(value);
    }

    let info = SampleFileInfo {
        path: path.to_path_buf(),
        file_size,
        line_count,
        sample_count: samples.len(),
        skipped_blank,
    };
    Ok((info, samples))
}
