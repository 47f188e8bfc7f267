// File: crates/chartrun-window/src/lib.rs
// Summary: Window backend entry point; a blocking viewer behind the core `Presenter` seam.

pub mod blit;
pub mod error;
pub mod viewer;

pub use blit::blit_scaled;
pub use error::WindowError;
pub use viewer::Viewer;
