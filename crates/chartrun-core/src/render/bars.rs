// File: crates/chartrun-core/src/render/bars.rs
// Summary: Bar chart and histogram rendering.

use super::{draw_frame, draw_legend, labeled_axes, PX_PER_PT};
use crate::axis::{Axis, Tick};
use crate::canvas::{fill_paint, stroke_paint, Painter};
use crate::geometry::{rect_between, RectI32};
use crate::request::{ChartRequest, ResolvedStyle};
use crate::series::Series;
use crate::stats::Histogram;
use crate::style::Marker;

/// Bar width in data units, shrunk when positions are closer than one unit.
const BAR_WIDTH: f64 = 0.8;

/// Smallest distance between distinct positions, capped at 1.
fn min_gap(x: &[f64]) -> f64 {
    let mut sorted: Vec<f64> = x.iter().copied().filter(|v| v.is_finite()).collect();
    sorted.sort_by(f64::total_cmp);
    sorted
        .windows(2)
        .map(|w| w[1] - w[0])
        .filter(|d| *d > 1e-12)
        .fold(1.0, f64::min)
}

pub(super) fn bar(
    p: &mut Painter,
    rect: RectI32,
    req: &ChartRequest,
    x: &Series,
    heights: &Series,
    style: &ResolvedStyle,
) {
    let half = min_gap(x.values()) * BAR_WIDTH * 0.5;
    let (x0, x1) = x.extent().unwrap_or((0.0, 1.0));
    let (h0, h1) = heights.extent().unwrap_or((0.0, 1.0));

    let (ax, ay) = labeled_axes(req, (0.0, 1.0), (0.0, 1.0));
    let mut ax = Axis::fit(ax.label, x0 - half, x1 + half);
    if let Some(labels) = &req.tick_labels {
        ax = ax.with_ticks(
            x.values()
                .iter()
                .zip(labels)
                .map(|(&value, l)| Tick { value, label: l.clone() })
                .collect(),
        );
    }
    let ay = Axis::fit_including(ay.label, h0, h1, 0.0);
    let frame = draw_frame(p, rect, &ax, &ay, style.grid, req.resolved_title(), false);

    let fill = fill_paint(style.color.with_alpha(style.alpha).to_skia());
    let edge = (style.line_width > 0.0 && style.edge_color.a > 0)
        .then(|| stroke_paint(style.edge_color.to_skia(), 0.5 * PX_PER_PT));
    let base = frame.y.to_px(0.0);

    p.canvas.save();
    p.canvas.clip_rect(rect.to_skia(), None, Some(true));
    let mut drawn = 0;
    for (&xv, &h) in x.values().iter().zip(heights.values()) {
        if !(xv.is_finite() && h.is_finite()) {
            continue;
        }
        let r = rect_between(frame.x.to_px(xv - half), base, frame.x.to_px(xv + half), frame.y.to_px(h));
        p.canvas.draw_rect(r, &fill);
        if let Some(edge) = &edge {
            p.canvas.draw_rect(r, edge);
        }
        drawn += 1;
    }
    p.canvas.restore();
    p.add_marks(drawn);

    if let Some(label) = &style.label {
        draw_legend(p, rect, label, style.color, 8.0, Marker::None);
    }
}

pub(super) fn histogram(
    p: &mut Painter,
    rect: RectI32,
    req: &ChartRequest,
    samples: &Series,
    style: &ResolvedStyle,
) {
    let hist = Histogram::compute(samples.values(), style.bins, style.density);
    let lo = hist.edges.first().copied().unwrap_or(0.0);
    let hi = hist.edges.last().copied().unwrap_or(1.0);

    let (ax, ay) = labeled_axes(req, (0.0, 1.0), (0.0, 1.0));
    let ax = Axis::fit(ax.label, lo, hi);
    let ay = Axis::fit_including(ay.label, 0.0, hist.max_height(), 0.0);
    let frame = draw_frame(p, rect, &ax, &ay, style.grid, req.resolved_title(), false);

    let fill = fill_paint(style.color.with_alpha(style.alpha).to_skia());
    let edge = stroke_paint(style.edge_color.to_skia(), 0.8 * PX_PER_PT);
    let base = frame.y.to_px(0.0);

    p.canvas.save();
    p.canvas.clip_rect(rect.to_skia(), None, Some(true));
    for (i, &h) in hist.heights.iter().enumerate() {
        let r = rect_between(
            frame.x.to_px(hist.edges[i]),
            base,
            frame.x.to_px(hist.edges[i + 1]),
            frame.y.to_px(h),
        );
        p.canvas.draw_rect(r, &fill);
        p.canvas.draw_rect(r, &edge);
    }
    p.canvas.restore();
    p.add_marks(hist.heights.len());

    if let Some(label) = &style.label {
        draw_legend(p, rect, label, style.color, 8.0, Marker::None);
    }
}
