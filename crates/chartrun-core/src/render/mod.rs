// File: crates/chartrun-core/src/render/mod.rs
// Summary: Request dispatch plus shared chart chrome (grid, spines, ticks, labels, title, legend, markers).

mod bars;
mod boxplot;
mod heatmap;
mod pie;
mod xy;

use skia_safe as skia;
use tracing::debug;

use crate::axis::Axis;
use crate::canvas::{fill_paint, stroke_paint, Canvas, Painter};
use crate::error::{ChartError, Result};
use crate::geometry::RectI32;
use crate::request::{ChartData, ChartKind, ChartRequest};
use crate::scale::LinearScale;
use crate::style::{GridMode, Marker, Rgba};
use crate::text::Align;

/// Output resolution: 100 px per inch, 72 points per inch.
pub(crate) const PX_PER_PT: f32 = 100.0 / 72.0;

const TICK_FONT: f32 = 12.0;
const LABEL_FONT: f32 = 14.0;

/// Draw `req` onto `canvas`. Shape and style are validated first; nothing is
/// drawn when validation fails.
pub fn render(canvas: &mut Canvas, req: &ChartRequest) -> Result<()> {
    req.validate()?;
    let style = req.style.resolve()?;
    let rect = canvas.plot_rect();
    debug!(kind = %req.kind, "render");

    let mut p = canvas.painter();
    match (&req.data, req.kind) {
        (ChartData::Xy { x, y }, ChartKind::Line) => xy::line(&mut p, rect, req, x, y, &style, false),
        (ChartData::Xy { x, y }, ChartKind::Timeline) => xy::line(&mut p, rect, req, x, y, &style, true),
        (ChartData::Xy { x, y }, ChartKind::Scatter) => xy::scatter(&mut p, rect, req, x, y, &style),
        (ChartData::Xy { x, y }, ChartKind::Bar) => bars::bar(&mut p, rect, req, x, y, &style),
        (ChartData::Samples(s), ChartKind::Histogram) => bars::histogram(&mut p, rect, req, s, &style),
        (ChartData::Grid(rows), ChartKind::Heatmap) => heatmap::heatmap(&mut p, rect, req, rows, &style)?,
        (ChartData::Wedges { values, labels }, ChartKind::Pie) => pie::pie(&mut p, rect, req, values, labels, &style),
        (ChartData::Groups(groups), ChartKind::Box) => boxplot::boxplot(&mut p, rect, req, groups, &style),
        (_, kind) => return Err(ChartError::DataShape { kind, expected: "matching" }),
    }
    Ok(())
}

/// Pixel mapping for one plot area.
pub(crate) struct Frame {
    pub rect: RectI32,
    pub x: LinearScale,
    pub y: LinearScale,
}

impl Frame {
    pub fn new(rect: RectI32, x_axis: &Axis, y_axis: &Axis, y_down: bool) -> Self {
        let x = LinearScale::new(x_axis.min, x_axis.max, rect.left as f32, rect.right as f32);
        let y = if y_down {
            LinearScale::new(y_axis.min, y_axis.max, rect.top as f32, rect.bottom as f32)
        } else {
            LinearScale::new(y_axis.min, y_axis.max, rect.bottom as f32, rect.top as f32)
        };
        Self { rect, x, y }
    }

    #[inline]
    pub fn pt(&self, x: f64, y: f64) -> (f32, f32) {
        (self.x.to_px(x), self.y.to_px(y))
    }
}

/// Background, grid, spines, ticks, axis labels and title. Marks go on top afterwards.
pub(crate) fn draw_frame(
    p: &Painter,
    rect: RectI32,
    x_axis: &Axis,
    y_axis: &Axis,
    grid: GridMode,
    title: &str,
    y_down: bool,
) -> Frame {
    let frame = Frame::new(rect, x_axis, y_axis, y_down);
    let theme = *p.theme();
    let (l, t, r, b) = (rect.left as f32, rect.top as f32, rect.right as f32, rect.bottom as f32);

    p.canvas.draw_rect(rect.to_skia(), &fill_paint(theme.plot_background));

    let grid_paint = stroke_paint(theme.grid, 0.8 * PX_PER_PT);
    if grid.vertical() {
        for tick in &x_axis.ticks {
            let x = frame.x.to_px(tick.value);
            p.canvas.draw_line((x, t), (x, b), &grid_paint);
        }
    }
    if grid.horizontal() {
        for tick in &y_axis.ticks {
            let y = frame.y.to_px(tick.value);
            p.canvas.draw_line((l, y), (r, y), &grid_paint);
        }
    }

    let spine = stroke_paint(theme.axis_line, 0.8 * PX_PER_PT);
    p.canvas.draw_rect(rect.to_skia(), &spine);

    let tick_len = 3.5 * PX_PER_PT;
    let mut widest_y_tick = 0.0f32;
    for tick in &x_axis.ticks {
        let x = frame.x.to_px(tick.value);
        p.canvas.draw_line((x, b), (x, b + tick_len), &spine);
        p.text(&tick.label, x, b + tick_len + TICK_FONT + 2.0, TICK_FONT, theme.tick, Align::Center);
    }
    for tick in &y_axis.ticks {
        let y = frame.y.to_px(tick.value);
        p.canvas.draw_line((l - tick_len, y), (l, y), &spine);
        p.text(&tick.label, l - tick_len - 3.0, y + TICK_FONT * 0.35, TICK_FONT, theme.tick, Align::Right);
        widest_y_tick = widest_y_tick.max(p.measure(&tick.label, TICK_FONT));
    }

    let (cx, cy) = rect.center();
    p.text(&x_axis.label, cx, b + tick_len + TICK_FONT + LABEL_FONT + 12.0, LABEL_FONT, theme.axis_label, Align::Center);
    let y_label_x = (l - tick_len - widest_y_tick - LABEL_FONT).max(LABEL_FONT * 0.6);
    p.vertical_text(&y_axis.label, y_label_x, cy, LABEL_FONT, theme.axis_label);
    p.title(title, cx, t - 14.0);

    frame
}

/// Axes for requests with an x/y frame (labels resolved with per-kind defaults).
pub(crate) fn labeled_axes(req: &ChartRequest, x: (f64, f64), y: (f64, f64)) -> (Axis, Axis) {
    let (xl, yl) = req.resolved_axis_labels().unwrap_or(("", ""));
    (Axis::new(xl, x.0, x.1), Axis::new(yl, y.0, y.1))
}

/// A single legend entry in the upper-right corner of the plot area.
pub(crate) fn draw_legend(p: &Painter, rect: RectI32, label: &str, color: Rgba, width: f32, marker: Marker) {
    if !p.opts.draw_labels || label.is_empty() {
        return;
    }
    let theme = *p.theme();
    let text_w = p.measure(label, TICK_FONT);
    let box_w = 40.0 + text_w + 18.0;
    let box_h = 26.0;
    let right = rect.right as f32 - 10.0;
    let top = rect.top as f32 + 10.0;
    let frame_rect = skia::Rect::from_ltrb(right - box_w, top, right, top + box_h);

    p.canvas.draw_rect(frame_rect, &fill_paint(theme.plot_background));
    p.canvas.draw_rect(frame_rect, &stroke_paint(theme.grid, 1.0));
    let y = top + box_h * 0.5;
    let x0 = frame_rect.left + 8.0;
    p.canvas.draw_line((x0, y), (x0 + 26.0, y), &stroke_paint(color.to_skia(), width));
    if marker != Marker::None {
        draw_marker(p.canvas, marker, x0 + 13.0, y, 4.0, color, color);
    }
    p.text(label, x0 + 32.0, y + TICK_FONT * 0.35, TICK_FONT, theme.axis_label, Align::Left);
}

/// One marker centred at (x, y) with the given radius in pixels.
pub(crate) fn draw_marker(canvas: &skia::Canvas, marker: Marker, x: f32, y: f32, radius: f32, fill: Rgba, edge: Rgba) {
    let fill_p = fill_paint(fill.to_skia());
    let edge_p = stroke_paint(edge.to_skia(), 1.0);
    let r = radius.max(0.5);
    match marker {
        Marker::None => {}
        Marker::Circle => {
            canvas.draw_circle((x, y), r, &fill_p);
        }
        Marker::Point => {
            canvas.draw_circle((x, y), (r * 0.5).max(1.0), &fill_p);
        }
        Marker::Square => {
            let rect = skia::Rect::from_ltrb(x - r, y - r, x + r, y + r);
            canvas.draw_rect(rect, &fill_p);
        }
        Marker::Triangle | Marker::Diamond => {
            let pts: Vec<(f32, f32)> = if marker == Marker::Triangle {
                vec![(x, y - r), (x + r, y + r * 0.8), (x - r, y + r * 0.8)]
            } else {
                vec![(x, y - r), (x + r, y), (x, y + r), (x - r, y)]
            };
            let mut path = skia::Path::new();
            path.move_to(pts[0]);
            for pt in &pts[1..] {
                path.line_to(*pt);
            }
            path.close();
            canvas.draw_path(&path, &fill_p);
        }
        Marker::Cross => {
            let pen = stroke_paint(edge.to_skia(), (r * 0.35).max(1.0));
            canvas.draw_line((x - r, y - r), (x + r, y + r), &pen);
            canvas.draw_line((x - r, y + r), (x + r, y - r), &pen);
        }
        Marker::Plus => {
            let pen = stroke_paint(edge.to_skia(), (r * 0.35).max(1.0));
            canvas.draw_line((x - r, y), (x + r, y), &pen);
            canvas.draw_line((x, y - r), (x, y + r), &pen);
        }
    }
    if matches!(marker, Marker::Circle | Marker::Square) && fill != edge {
        match marker {
            Marker::Circle => {
                canvas.draw_circle((x, y), r, &edge_p);
            }
            _ => {
                canvas.draw_rect(skia::Rect::from_ltrb(x - r, y - r, x + r, y + r), &edge_p);
            }
        }
    }
}
