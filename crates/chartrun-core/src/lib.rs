// File: crates/chartrun-core/src/lib.rs
// Summary: Core library entry point; exports the chart request model, rendering, and the script runner.

pub mod error;
pub mod series;
pub mod table;
pub mod style;
pub mod request;
pub mod types;
pub mod geometry;
pub mod grid;
pub mod scale;
pub mod axis;
pub mod theme;
pub mod text;
pub mod canvas;
pub mod stats;
pub mod render;
pub mod output;
pub mod runner;

pub use error::{ChartError, Result};
pub use series::{Matrix, Series};
pub use table::{load_table, load_table_with, CategoryTable};
pub use style::{GridMode, Rgba};
pub use request::{ChartData, ChartKind, ChartRequest, ResolvedStyle, Style};
pub use canvas::{Canvas, RenderOptions, RgbaFrame};
pub use theme::Theme;
pub use render::render;
pub use output::{FileNaming, OutputTarget, Presenter};
pub use runner::Runner;
