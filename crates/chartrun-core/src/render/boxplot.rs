// File: crates/chartrun-core/src/render/boxplot.rs
// Summary: Box-and-whisker rendering (vertical or horizontal, optional notches).

use skia_safe as skia;

use super::{draw_frame, draw_marker, labeled_axes, Frame, PX_PER_PT};
use crate::axis::Axis;
use crate::canvas::{fill_paint, stroke_paint, Painter};
use crate::geometry::RectI32;
use crate::request::{ChartRequest, ResolvedStyle};
use crate::series::Series;
use crate::stats::BoxStats;
use crate::style::{Marker, Rgba};

const BOX_WIDTH: f64 = 0.5;
const CAP_WIDTH: f64 = 0.25;
const NOTCH_INSET: f64 = 0.25;
const MEDIAN_COLOR: Rgba = Rgba::rgb(255, 127, 14);

/// Maps (position, value) to pixels for either orientation.
struct Placer<'a> {
    frame: &'a Frame,
    vertical: bool,
}

impl Placer<'_> {
    fn pt(&self, pos: f64, value: f64) -> (f32, f32) {
        if self.vertical { self.frame.pt(pos, value) } else { self.frame.pt(value, pos) }
    }

    fn polygon(&self, pts: &[(f64, f64)]) -> skia::Path {
        let mut path = skia::Path::new();
        if let Some((first, rest)) = pts.split_first() {
            path.move_to(self.pt(first.0, first.1));
            for &(pos, v) in rest {
                path.line_to(self.pt(pos, v));
            }
            path.close();
        }
        path
    }
}

/// Outline of one box, as (position, value) pairs; notched boxes pinch at the median.
fn box_outline(pos: f64, s: &BoxStats, notch: bool) -> Vec<(f64, f64)> {
    let half = BOX_WIDTH * 0.5;
    let (l, r) = (pos - half, pos + half);
    if !notch {
        return vec![(l, s.q1), (r, s.q1), (r, s.q3), (l, s.q3)];
    }
    let inset = half * NOTCH_INSET * 2.0;
    let lo = s.notch_low.max(s.q1.min(s.median));
    let hi = s.notch_high.min(s.q3.max(s.median));
    vec![
        (l, s.q1),
        (r, s.q1),
        (r, lo),
        (r - inset, s.median),
        (r, hi),
        (r, s.q3),
        (l, s.q3),
        (l, hi),
        (l + inset, s.median),
        (l, lo),
    ]
}

pub(super) fn boxplot(
    p: &mut Painter,
    rect: RectI32,
    req: &ChartRequest,
    groups: &[Series],
    style: &ResolvedStyle,
) {
    let stats: Vec<Option<BoxStats>> = groups.iter().map(|g| BoxStats::compute(g.values())).collect();
    let (lo, hi) = stats
        .iter()
        .flatten()
        .map(BoxStats::extent)
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(a, b), (l, h)| (a.min(l), b.max(h)));
    let (lo, hi) = if lo.is_finite() { (lo, hi) } else { (0.0, 1.0) };

    let n = groups.len();
    let tick_labels: Vec<String> = match &req.tick_labels {
        Some(t) => t.clone(),
        None => (1..=n).map(|i| format!("Data {i}")).collect(),
    };
    let (group_label, value_label) = {
        let (gx, vy) = labeled_axes(req, (0.0, 1.0), (0.0, 1.0));
        (gx.label, vy.label)
    };
    let positions = Axis::new(group_label, 0.5, n as f64 + 0.5).with_labeled_positions(1.0, &tick_labels);
    let values = Axis::fit(value_label, lo, hi);
    let (ax, ay) = if style.vertical { (positions, values) } else { (values, positions) };
    let frame = draw_frame(p, rect, &ax, &ay, style.grid, req.resolved_title(), false);
    let place = Placer { frame: &frame, vertical: style.vertical };

    let line_w = style.line_width.max(1.0) * 0.5 * PX_PER_PT;
    let edge = stroke_paint(style.edge_color.to_skia(), line_w);
    let median_pen = stroke_paint(MEDIAN_COLOR.to_skia(), line_w * 1.5);

    p.canvas.save();
    p.canvas.clip_rect(rect.to_skia(), None, Some(true));
    let mut drawn = 0;
    for (i, s) in stats.iter().enumerate() {
        let Some(s) = s else { continue };
        let pos = (i + 1) as f64;

        let outline = place.polygon(&box_outline(pos, s, style.notch));
        if style.patch_artist {
            let fill = if style.colors.is_empty() { style.color } else { style.cycle_color(i) };
            p.canvas.draw_path(&outline, &fill_paint(fill.with_alpha(style.alpha).to_skia()));
        }
        p.canvas.draw_path(&outline, &edge);

        let half_cap = CAP_WIDTH * 0.5;
        for (from, to) in [(s.q1, s.whisker_low), (s.q3, s.whisker_high)] {
            p.canvas.draw_line(place.pt(pos, from), place.pt(pos, to), &edge);
            p.canvas.draw_line(place.pt(pos - half_cap, to), place.pt(pos + half_cap, to), &edge);
        }

        let inset = if style.notch { BOX_WIDTH * 0.5 * NOTCH_INSET * 2.0 } else { 0.0 };
        let half = BOX_WIDTH * 0.5 - inset;
        p.canvas.draw_line(place.pt(pos - half, s.median), place.pt(pos + half, s.median), &median_pen);

        let transparent = Rgba { a: 0, ..style.edge_color };
        for &f in &s.fliers {
            let (x, y) = place.pt(pos, f);
            draw_marker(p.canvas, Marker::Circle, x, y, 3.0 * PX_PER_PT, transparent, style.edge_color);
        }
        drawn += 1;
    }
    p.canvas.restore();
    p.add_marks(drawn);
}
