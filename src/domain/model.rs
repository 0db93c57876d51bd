use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Which converter adapter the loop delegates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// In-process conversion via the markdownify crate.
    Native,
    /// One `python -m markitdown` subprocess per file.
    Markitdown,
}

/// Counts accumulated over one run of the conversion loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub converted: usize,
    pub failed: usize,
}
