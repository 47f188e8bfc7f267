// File: crates/chartrun-window/src/error.rs
// Summary: Window backend errors and their mapping onto the core error type.

use chartrun_core::ChartError;

#[derive(Debug, thiserror::Error)]
pub enum WindowError {
    #[error("failed to open window: {0}")]
    Os(#[from] winit::error::OsError),

    #[error("softbuffer: {0}")]
    Softbuffer(#[from] softbuffer::SoftBufferError),
}

impl From<WindowError> for ChartError {
    fn from(e: WindowError) -> Self {
        ChartError::Display(e.to_string())
    }
}
