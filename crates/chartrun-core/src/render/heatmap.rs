// File: crates/chartrun-core/src/render/heatmap.rs
// Summary: Heatmap (image-style matrix) rendering with an optional colorbar.

use super::{draw_frame, labeled_axes, TICK_FONT};
use crate::axis::{Axis, Tick};
use crate::canvas::{fill_paint, stroke_paint, Painter};
use crate::error::Result;
use crate::geometry::{rect_between, RectI32};
use crate::grid::{format_tick, nice_step, nice_ticks};
use crate::request::{ChartRequest, ResolvedStyle};
use crate::series::Matrix;
use crate::style::{Aspect, Colormap, Interpolation};
use crate::text::Align;

const COLORBAR_SPACE: i32 = 80;
const COLORBAR_WIDTH: f32 = 18.0;
const COLORBAR_GAP: f32 = 16.0;
const COLORBAR_STEPS: usize = 64;
/// Target size of one interpolated sub-cell in pixels.
const BILINEAR_PX: f32 = 4.0;

/// Integer ticks for row/column indices, thinned when there are many.
fn index_axis(label: &str, n: usize) -> Axis {
    let step = nice_step(n as f64, 8).max(1.0).round() as usize;
    let ticks = (0..n)
        .step_by(step)
        .map(|i| Tick { value: i as f64, label: i.to_string() })
        .collect();
    Axis { label: label.to_string(), min: -0.5, max: n as f64 - 0.5, ticks }
}

/// Square cells centred in `rect`.
fn equal_aspect(rect: RectI32, rows: usize, cols: usize) -> RectI32 {
    let cell = (rect.width() as f32 / cols as f32).min(rect.height() as f32 / rows as f32);
    let w = (cell * cols as f32).round() as i32;
    let h = (cell * rows as f32).round() as i32;
    let left = rect.left + (rect.width() - w) / 2;
    let top = rect.top + (rect.height() - h) / 2;
    RectI32::from_ltrb(left, top, left + w.max(1), top + h.max(1))
}

fn normalizer(lo: f64, hi: f64) -> impl Fn(f64) -> f64 {
    let span = hi - lo;
    move |v| if span.abs() < 1e-12 { 0.5 } else { (v - lo) / span }
}

/// Value at fractional cell coordinates (row, col), blending the four nearest centres.
fn bilinear(m: &Matrix, r: f64, c: f64) -> f64 {
    let max_r = (m.n_rows() - 1) as f64;
    let max_c = (m.n_cols() - 1) as f64;
    let r = r.clamp(0.0, max_r);
    let c = c.clamp(0.0, max_c);
    let (r0, c0) = (r.floor() as usize, c.floor() as usize);
    let (r1, c1) = ((r0 + 1).min(m.n_rows() - 1), (c0 + 1).min(m.n_cols() - 1));
    let (fr, fc) = (r - r0 as f64, c - c0 as f64);
    let rows = m.rows();
    let top = rows[r0][c0] + (rows[r0][c1] - rows[r0][c0]) * fc;
    let bottom = rows[r1][c0] + (rows[r1][c1] - rows[r1][c0]) * fc;
    top + (bottom - top) * fr
}

pub(super) fn heatmap(
    p: &mut Painter,
    rect: RectI32,
    req: &ChartRequest,
    rows: &[Vec<f64>],
    style: &ResolvedStyle,
) -> Result<()> {
    let m = Matrix::try_new(rows.to_vec())?;
    let (n_rows, n_cols) = (m.n_rows(), m.n_cols());
    let (lo, hi) = m.extent().unwrap_or((0.0, 1.0));
    let norm = normalizer(lo, hi);

    let mut plot = if style.colorbar { rect.trim_right(COLORBAR_SPACE) } else { rect };
    if style.aspect == Aspect::Equal {
        plot = equal_aspect(plot, n_rows, n_cols);
    }

    let (ax, ay) = labeled_axes(req, (0.0, 1.0), (0.0, 1.0));
    let ax = index_axis(&ax.label, n_cols);
    let ay = index_axis(&ay.label, n_rows);
    // Row 0 at the top, as an image.
    let frame = draw_frame(p, plot, &ax, &ay, style.grid, req.resolved_title(), true);

    p.canvas.save();
    p.canvas.clip_rect(plot.to_skia(), None, Some(true));
    match style.interpolation {
        Interpolation::Nearest => {
            for (r, row) in m.rows().iter().enumerate() {
                for (c, &v) in row.iter().enumerate() {
                    let cell = rect_between(
                        frame.x.to_px(c as f64 - 0.5),
                        frame.y.to_px(r as f64 - 0.5),
                        frame.x.to_px(c as f64 + 0.5),
                        frame.y.to_px(r as f64 + 0.5),
                    );
                    p.canvas.draw_rect(cell, &fill_paint(style.cmap.sample(norm(v)).to_skia()));
                }
            }
        }
        Interpolation::Bilinear => {
            let sub_x = ((frame.x.px_per_unit() / BILINEAR_PX).ceil() as usize).max(1);
            let sub_y = ((frame.y.px_per_unit() / BILINEAR_PX).ceil() as usize).max(1);
            let nx = n_cols * sub_x;
            let ny = n_rows * sub_y;
            for j in 0..ny {
                let r0 = j as f64 / sub_y as f64 - 0.5;
                let r1 = (j + 1) as f64 / sub_y as f64 - 0.5;
                for i in 0..nx {
                    let c0 = i as f64 / sub_x as f64 - 0.5;
                    let c1 = (i + 1) as f64 / sub_x as f64 - 0.5;
                    let v = bilinear(&m, (r0 + r1) * 0.5, (c0 + c1) * 0.5);
                    let cell = rect_between(
                        frame.x.to_px(c0),
                        frame.y.to_px(r0),
                        frame.x.to_px(c1),
                        frame.y.to_px(r1),
                    );
                    p.canvas.draw_rect(cell, &fill_paint(style.cmap.sample(norm(v)).to_skia()));
                }
            }
        }
    }
    p.canvas.restore();
    p.add_marks(n_rows * n_cols);

    if style.colorbar {
        draw_colorbar(p, plot, style.cmap, lo, hi);
    }
    Ok(())
}

fn draw_colorbar(p: &Painter, plot: RectI32, cmap: Colormap, lo: f64, hi: f64) {
    let theme = *p.theme();
    let left = plot.right as f32 + COLORBAR_GAP;
    let right = left + COLORBAR_WIDTH;
    let (top, bottom) = (plot.top as f32, plot.bottom as f32);
    let slice = (bottom - top) / COLORBAR_STEPS as f32;

    for k in 0..COLORBAR_STEPS {
        let t = (k as f64 + 0.5) / COLORBAR_STEPS as f64;
        let y1 = bottom - slice * k as f32;
        let r = rect_between(left, y1 - slice, right, y1);
        p.canvas.draw_rect(r, &fill_paint(cmap.sample(t).to_skia()));
    }
    let spine = stroke_paint(theme.axis_line, 1.0);
    p.canvas.draw_rect(rect_between(left, top, right, bottom), &spine);

    let span = if (hi - lo).abs() < 1e-12 { 1.0 } else { hi - lo };
    let step = nice_step(span, 6);
    for v in nice_ticks(lo, lo + span, 6) {
        let y = bottom - ((v - lo) / span) as f32 * (bottom - top);
        p.canvas.draw_line((right, y), (right + 4.0, y), &spine);
        p.text(&format_tick(v, step), right + 6.0, y + TICK_FONT * 0.35, TICK_FONT, theme.tick, Align::Left);
    }
}
