// File: crates/chartrun-core/src/render/xy.rs
// Summary: Line, timeline and scatter rendering over paired x/y series.

use chrono::DateTime;
use skia_safe as skia;

use super::{draw_frame, draw_legend, draw_marker, labeled_axes, PX_PER_PT};
use crate::axis::{Axis, Tick};
use crate::canvas::{fill_paint, stroke_paint, Painter};
use crate::geometry::RectI32;
use crate::grid::{nice_step, tick_range};
use crate::request::{ChartRequest, ResolvedStyle};
use crate::series::Series;

const DAY: f64 = 86_400.0;
const HOUR: f64 = 3_600.0;

fn xy_extents(x: &Series, y: &Series) -> ((f64, f64), (f64, f64)) {
    (x.extent().unwrap_or((0.0, 1.0)), y.extent().unwrap_or((0.0, 1.0)))
}

fn fitted_axes(req: &ChartRequest, x: &Series, y: &Series) -> (Axis, Axis) {
    let ((x0, x1), (y0, y1)) = xy_extents(x, y);
    let (ax, ay) = labeled_axes(req, (0.0, 1.0), (0.0, 1.0));
    let mut ax = Axis::fit(ax.label, x0, x1);
    let ay = Axis::fit(ay.label, y0, y1);
    if let Some(labels) = &req.tick_labels {
        ax = ax.with_ticks(
            x.values()
                .iter()
                .zip(labels)
                .map(|(&value, l)| Tick { value, label: l.clone() })
                .collect(),
        );
    }
    (ax, ay)
}

/// Date ticks at whole days (or hours for short spans), aligned to UTC midnight.
fn date_axis(label: String, min: f64, max: f64) -> Axis {
    let span = max - min;
    let (unit, fmt) = if span >= 2.0 * DAY { (DAY, "%Y-%m-%d") } else { (HOUR, "%m-%d %H:%M") };
    let step = (nice_step(span / unit, 6).max(1.0)).round() * unit;
    let ticks = tick_range(min, max, step)
        .into_iter()
        .flatten()
        .filter_map(|k| {
            let value = k as f64 * step;
            let dt = DateTime::from_timestamp(value as i64, 0)?;
            Some(Tick { value, label: dt.format(fmt).to_string() })
        })
        .collect();
    Axis { label, min, max, ticks }
}

pub(super) fn line(
    p: &mut Painter,
    rect: RectI32,
    req: &ChartRequest,
    x: &Series,
    y: &Series,
    style: &ResolvedStyle,
    dates: bool,
) {
    let (mut ax, ay) = fitted_axes(req, x, y);
    if dates && req.tick_labels.is_none() {
        ax = date_axis(ax.label, ax.min, ax.max);
    }
    let frame = draw_frame(p, rect, &ax, &ay, style.grid, req.resolved_title(), false);

    let color = style.color.with_alpha(style.alpha);
    let width = style.line_width * PX_PER_PT;
    let pts: Vec<(f32, f32)> = x
        .values()
        .iter()
        .zip(y.values())
        .filter(|(a, b)| a.is_finite() && b.is_finite())
        .map(|(&a, &b)| frame.pt(a, b))
        .collect();

    p.canvas.save();
    p.canvas.clip_rect(rect.to_skia(), None, Some(true));
    if pts.len() >= 2 && width > 0.0 {
        let mut path = skia::Path::new();
        path.move_to(pts[0]);
        for &pt in pts.iter().skip(1) {
            path.line_to(pt);
        }
        let mut stroke = stroke_paint(color.to_skia(), width);
        stroke.set_stroke_join(skia::paint::Join::Round);
        if let Some(intervals) = style.line_style.intervals() {
            let scaled: Vec<f32> = intervals.iter().map(|v| v * width.max(1.0)).collect();
            stroke.set_path_effect(skia::PathEffect::dash(&scaled, 0.0));
        }
        p.canvas.draw_path(&path, &stroke);
        p.add_marks(1);
    } else if pts.len() == 1 && style.marker == crate::style::Marker::None {
        // a lone point has no segment to stroke
        let (px, py) = pts[0];
        p.canvas.draw_circle((px, py), width.max(1.0), &fill_paint(color.to_skia()));
        p.add_marks(1);
    }
    let radius = style.marker_size * 0.5 * PX_PER_PT;
    for &(px, py) in &pts {
        draw_marker(p.canvas, style.marker, px, py, radius, color, color);
    }
    if style.marker != crate::style::Marker::None {
        p.add_marks(pts.len());
    }
    p.canvas.restore();

    if let Some(label) = &style.label {
        draw_legend(p, rect, label, color, width, style.marker);
    }
}

pub(super) fn scatter(
    p: &mut Painter,
    rect: RectI32,
    req: &ChartRequest,
    x: &Series,
    y: &Series,
    style: &ResolvedStyle,
) {
    let (ax, ay) = fitted_axes(req, x, y);
    let frame = draw_frame(p, rect, &ax, &ay, style.grid, req.resolved_title(), false);

    let fill = style.color.with_alpha(style.alpha);
    // `s` is the marker area in points^2.
    let radius = style.size.sqrt() * 0.5 * PX_PER_PT;

    p.canvas.save();
    p.canvas.clip_rect(rect.to_skia(), None, Some(true));
    let mut drawn = 0;
    for (&a, &b) in x.values().iter().zip(y.values()) {
        if !(a.is_finite() && b.is_finite()) {
            continue;
        }
        let (px, py) = frame.pt(a, b);
        draw_marker(p.canvas, style.marker, px, py, radius, fill, fill);
        drawn += 1;
    }
    p.canvas.restore();
    if style.marker != crate::style::Marker::None {
        p.add_marks(drawn);
    }

    if let Some(label) = &style.label {
        draw_legend(p, rect, label, fill, 0.0, style.marker);
    }
}
