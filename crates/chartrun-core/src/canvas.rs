// File: crates/chartrun-core/src/canvas.rs
// Summary: Reusable Skia CPU raster canvas: clear, track drawn marks, export PNG/RGBA.

use std::path::Path;

use skia_safe as skia;
use tracing::debug;

use crate::error::{ChartError, Result};
use crate::geometry::RectI32;
use crate::text::{Align, TextShaper};
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Titles, axis labels, tick labels, legends. Off for pixel-exact tests.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::classic(),
            draw_labels: true,
        }
    }
}

/// Raw RGBA8 pixels (unpremultiplied), row-major, `width * 4` bytes per row.
#[derive(Clone, Debug)]
pub struct RgbaFrame {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

pub struct Canvas {
    surface: skia::Surface,
    opts: RenderOptions,
    text: TextShaper,
    marks: usize,
}

impl Canvas {
    pub fn new(opts: RenderOptions) -> Result<Self> {
        let surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or(ChartError::Surface { width: opts.width, height: opts.height })?;
        let mut canvas = Self { surface, opts, text: TextShaper::new(), marks: 0 };
        canvas.clear();
        Ok(canvas)
    }

    pub fn options(&self) -> &RenderOptions { &self.opts }

    /// Reset to the theme background; the canvas is blank afterwards.
    pub fn clear(&mut self) {
        let bg = self.opts.theme.background;
        self.surface.canvas().clear(bg);
        self.marks = 0;
    }

    /// True until a data mark (line, marker, bar, wedge, cell, box) is drawn.
    pub fn is_blank(&self) -> bool { self.marks == 0 }

    pub fn mark_count(&self) -> usize { self.marks }

    /// Plot area inside the insets.
    pub fn plot_rect(&self) -> RectI32 {
        let i = self.opts.insets;
        RectI32::from_ltrb(
            i.left as i32,
            i.top as i32,
            (self.opts.width - i.right as i32).max(i.left as i32 + 1),
            (self.opts.height - i.bottom as i32).max(i.top as i32 + 1),
        )
    }

    pub(crate) fn painter(&mut self) -> Painter<'_> {
        Painter {
            canvas: self.surface.canvas(),
            text: &self.text,
            opts: &self.opts,
            marks: &mut self.marks,
        }
    }

    pub fn to_png_bytes(&mut self) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        let data = image
            .encode(None, skia::EncodedImageFormat::PNG, None)
            .ok_or(ChartError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    pub fn to_rgba8(&mut self) -> Result<RgbaFrame> {
        let (w, h) = (self.opts.width, self.opts.height);
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let row_bytes = w as usize * 4;
        let mut pixels = vec![0u8; row_bytes * h as usize];
        if !self.surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            return Err(ChartError::Encode);
        }
        Ok(RgbaFrame { pixels, width: w as u32, height: h as u32 })
    }

    /// Write the canvas as PNG, creating parent directories.
    pub fn save_png(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.to_png_bytes()?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| ChartError::io(parent, e))?;
        }
        std::fs::write(path, &bytes).map_err(|e| ChartError::io(path, e))?;
        debug!(path = %path.display(), bytes = bytes.len(), "wrote png");
        Ok(())
    }
}

/// Borrowed drawing context handed to the per-kind renderers.
pub(crate) struct Painter<'a> {
    pub canvas: &'a skia::Canvas,
    pub text: &'a TextShaper,
    pub opts: &'a RenderOptions,
    marks: &'a mut usize,
}

impl Painter<'_> {
    pub fn theme(&self) -> &Theme { &self.opts.theme }

    pub fn add_marks(&mut self, n: usize) { *self.marks += n; }

    pub fn text(&self, s: &str, x: f32, y: f32, size: f32, color: skia::Color, align: Align) {
        if self.opts.draw_labels && !s.is_empty() {
            self.text.draw(self.canvas, s, x, y, size, color, align, false);
        }
    }

    pub fn title(&self, s: &str, x: f32, y: f32) {
        if self.opts.draw_labels && !s.is_empty() {
            self.text.draw(self.canvas, s, x, y, 18.0, self.opts.theme.title, Align::Center, true);
        }
    }

    pub fn vertical_text(&self, s: &str, x: f32, y: f32, size: f32, color: skia::Color) {
        if self.opts.draw_labels && !s.is_empty() {
            self.text.draw_vertical(self.canvas, s, x, y, size, color);
        }
    }

    pub fn measure(&self, s: &str, size: f32) -> f32 {
        if self.opts.draw_labels { self.text.measure_width(s, size) } else { 0.0 }
    }
}

pub(crate) fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut p = skia::Paint::default();
    p.set_anti_alias(true);
    p.set_style(skia::paint::Style::Fill);
    p.set_color(color);
    p
}

pub(crate) fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut p = skia::Paint::default();
    p.set_anti_alias(true);
    p.set_style(skia::paint::Style::Stroke);
    p.set_stroke_width(width);
    p.set_color(color);
    p
}
