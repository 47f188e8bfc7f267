// File: crates/chartrun-core/src/output.rs
// Summary: Where finished charts go: an interactive viewer or numbered PNG files.

use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::canvas::RgbaFrame;
use crate::error::Result;

/// File naming for saved charts: `{directory}/{prefix}_{run_id}_{n}.png`, or
/// `{directory}/{prefix}_{n}.png` without a run id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileNaming {
    pub directory: PathBuf,
    pub prefix: String,
    pub run_id: Option<i64>,
}

impl FileNaming {
    pub fn new(directory: impl Into<PathBuf>, prefix: impl Into<String>, run_id: Option<i64>) -> Self {
        Self { directory: directory.into(), prefix: prefix.into(), run_id }
    }

    /// `plots/plot_{now}_{n}.png`, with the run id taken from the current time in whole seconds.
    pub fn timestamped(directory: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self::new(directory, prefix, Some(Utc::now().timestamp()))
    }

    /// `plot_{n}.png` in the working directory.
    pub fn flat(prefix: impl Into<String>) -> Self {
        Self::new(".", prefix, None)
    }

    pub fn directory(&self) -> &Path { &self.directory }

    pub fn path_for(&self, counter: u32) -> PathBuf {
        let name = match self.run_id {
            Some(id) => format!("{}_{}_{}.png", self.prefix, id, counter),
            None => format!("{}_{}.png", self.prefix, counter),
        };
        self.directory.join(name)
    }
}

impl Default for FileNaming {
    fn default() -> Self { Self::timestamped("plots", "plot") }
}

#[derive(Clone, Debug)]
pub enum OutputTarget {
    /// Show each chart in a window and block until it is closed.
    Display,
    File(FileNaming),
}

/// Interactive display backend. `present` blocks until the viewer is dismissed.
pub trait Presenter {
    fn present(&mut self, frame: &RgbaFrame, title: &str) -> Result<()>;
}
