// File: crates/chartrun-core/src/runner.rs
// Summary: Chart script runner: render requests in order, then show or save each one.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::canvas::{Canvas, RenderOptions};
use crate::error::{ChartError, Result};
use crate::output::{OutputTarget, Presenter};
use crate::request::ChartRequest;
use crate::table::CategoryTable;

/// Owns the canvas and the save counter for one execution.
pub struct Runner {
    canvas: Canvas,
    presenter: Option<Box<dyn Presenter>>,
    /// Number of charts saved so far; the next file gets `saved + 1`.
    saved: u32,
    title: String,
}

impl Runner {
    pub fn new(opts: RenderOptions) -> Result<Self> {
        Ok(Self { canvas: Canvas::new(opts)?, presenter: None, saved: 0, title: String::new() })
    }

    pub fn with_presenter(mut self, presenter: Box<dyn Presenter>) -> Self {
        self.presenter = Some(presenter);
        self
    }

    pub fn canvas(&self) -> &Canvas { &self.canvas }

    pub fn canvas_mut(&mut self) -> &mut Canvas { &mut self.canvas }

    pub fn saved_count(&self) -> u32 { self.saved }

    pub fn render(&mut self, req: &ChartRequest) -> Result<()> {
        crate::render::render(&mut self.canvas, req)?;
        self.title = req.resolved_title().to_string();
        Ok(())
    }

    /// Show or save the current canvas, then clear it. Returns the written
    /// path for file targets.
    pub fn present_or_save(&mut self, target: &OutputTarget) -> Result<Option<PathBuf>> {
        let written = match target {
            OutputTarget::Display => {
                let presenter = self.presenter.as_mut().ok_or_else(|| {
                    ChartError::DisplayUnavailable("no window backend in this build".into())
                })?;
                let frame = self.canvas.to_rgba8()?;
                debug!(title = %self.title, "presenting");
                presenter.present(&frame, &self.title)?;
                None
            }
            OutputTarget::File(naming) => {
                let path = naming.path_for(self.saved + 1);
                self.canvas.save_png(&path)?;
                self.saved += 1;
                info!(path = %path.display(), "saved chart");
                Some(path)
            }
        };
        self.canvas.clear();
        self.title.clear();
        Ok(written)
    }

    /// Render then show or save, for each request in order.
    pub fn run_all(&mut self, requests: &[ChartRequest], target: &OutputTarget) -> Result<Vec<PathBuf>> {
        let mut paths = Vec::new();
        for req in requests {
            self.render(req)?;
            paths.extend(self.present_or_save(target)?);
        }
        Ok(paths)
    }

    pub fn load_table(&self, path: impl AsRef<Path>) -> Result<CategoryTable> {
        crate::table::load_table(path)
    }
}
