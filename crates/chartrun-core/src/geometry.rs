// File: crates/chartrun-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }

    pub fn center(&self) -> (f32, f32) {
        (
            (self.left + self.right) as f32 * 0.5,
            (self.top + self.bottom) as f32 * 0.5,
        )
    }

    /// Shrink the right edge, e.g. to make room for a colorbar.
    pub fn trim_right(self, px: i32) -> Self {
        Self { right: (self.right - px).max(self.left + 1), ..self }
    }

    pub fn to_skia(self) -> skia::Rect {
        skia::Rect::from_ltrb(self.left as f32, self.top as f32, self.right as f32, self.bottom as f32)
    }
}

/// Rect from two corners in any order; keeps at least one pixel of height so
/// zero-height bars still show as a hairline.
pub fn rect_between(x0: f32, y0: f32, x1: f32, y1: f32) -> skia::Rect {
    let (l, r) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
    let (t, b) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
    skia::Rect::from_ltrb(l, t, r.max(l + 1.0), b.max(t + 1.0))
}
