// File: crates/chartrun-core/src/render/pie.rs
// Summary: Pie chart rendering: counter-clockwise wedges, outer labels, inner percentages.

use skia_safe as skia;

use super::{draw_legend, LABEL_FONT, TICK_FONT};
use crate::canvas::{fill_paint, Painter};
use crate::geometry::RectI32;
use crate::request::{ChartRequest, ResolvedStyle};
use crate::series::Series;
use crate::style::Marker;
use crate::text::Align;

const LABEL_DISTANCE: f32 = 1.1;
const PCT_DISTANCE: f32 = 0.6;

pub(super) fn pie(
    p: &mut Painter,
    rect: RectI32,
    req: &ChartRequest,
    values: &Series,
    labels: &[String],
    style: &ResolvedStyle,
) {
    let theme = *p.theme();
    let total = values.sum();
    let (cx, cy) = rect.center();
    // Leave room for the outer labels.
    let radius = (rect.width().min(rect.height()) as f32 * 0.5 / (LABEL_DISTANCE + 0.15)).max(1.0);
    let oval = skia::Rect::from_ltrb(cx - radius, cy - radius, cx + radius, cy + radius);

    let mut angle = style.start_angle as f32;
    let mut drawn = 0;
    for (i, &v) in values.values().iter().enumerate() {
        let frac = (v / total) as f32;
        let sweep = frac * 360.0;
        let color = style.cycle_color(i).with_alpha(style.alpha);
        let paint = fill_paint(color.to_skia());

        if frac >= 1.0 - 1e-6 {
            p.canvas.draw_circle((cx, cy), radius, &paint);
            drawn += 1;
        } else if frac > 0.0 {
            // Angles grow counter-clockwise; Skia's grow clockwise with y down.
            p.canvas.draw_arc(oval, -angle, -sweep, true, &paint);
            drawn += 1;
        }

        let mid = (angle + sweep * 0.5).to_radians();
        let (dx, dy) = (mid.cos(), -mid.sin());
        if let Some(label) = labels.get(i) {
            let lx = cx + dx * radius * LABEL_DISTANCE;
            let ly = cy + dy * radius * LABEL_DISTANCE + LABEL_FONT * 0.35;
            let align = if dx > 0.05 {
                Align::Left
            } else if dx < -0.05 {
                Align::Right
            } else {
                Align::Center
            };
            p.text(label, lx, ly, LABEL_FONT, theme.axis_label, align);
        }
        if let Some(decimals) = style.autopct {
            let pct = format!("{:.*}%", decimals, frac as f64 * 100.0);
            let px = cx + dx * radius * PCT_DISTANCE;
            let py = cy + dy * radius * PCT_DISTANCE + TICK_FONT * 0.35;
            p.text(&pct, px, py, TICK_FONT, theme.inner_text, Align::Center);
        }
        angle += sweep;
    }
    p.add_marks(drawn);

    p.title(req.resolved_title(), cx, rect.top as f32 - 14.0);
    if let Some(label) = &style.label {
        draw_legend(p, rect, label, style.cycle_color(0), 8.0, Marker::None);
    }
}
