// File: crates/chartrun-core/tests/rgba.rs
// Purpose: Validate the RGBA export buffer shape and a few pixels.

use chartrun_core::{Canvas, ChartRequest, RenderOptions, Theme};

fn opts() -> RenderOptions {
    RenderOptions { draw_labels: false, ..RenderOptions::default() }
}

#[test]
fn rgba_buffer_shape_and_background() {
    let mut canvas = Canvas::new(opts()).unwrap();
    chartrun_core::render(&mut canvas, &ChartRequest::line([0.0, 4.0], [0.0, 4.0])).unwrap();
    let frame = canvas.to_rgba8().unwrap();
    assert_eq!(frame.pixels.len(), frame.width as usize * frame.height as usize * 4);
    assert_eq!((frame.width, frame.height), (1024, 640));
    // Top-left corner is figure background: opaque white in the classic theme.
    assert_eq!(&frame.pixels[..4], &[255, 255, 255, 255]);
}

#[test]
fn dark_theme_background() {
    let mut canvas = Canvas::new(RenderOptions { theme: Theme::dark(), ..opts() }).unwrap();
    let frame = canvas.to_rgba8().unwrap();
    assert_eq!(&frame.pixels[..4], &[18, 18, 20, 255]);
}

#[test]
fn bar_fill_color_lands_inside_the_bar() {
    let mut canvas = Canvas::new(opts()).unwrap();
    // One wide bar from 0 to 10; its middle sits at the plot center column.
    let req = ChartRequest::bar([0.0], [10.0]).color("#ff0000").edgecolor("#ff0000");
    chartrun_core::render(&mut canvas, &req).unwrap();
    let rect = canvas.plot_rect();
    let frame = canvas.to_rgba8().unwrap();
    let (cx, cy) = rect.center();
    let i = ((cy as usize + 40) * frame.width as usize + cx as usize) * 4;
    assert_eq!(&frame.pixels[i..i + 4], &[255, 0, 0, 255]);
}

#[test]
fn heatmap_corner_cells_use_colormap_ends() {
    let mut canvas = Canvas::new(opts()).unwrap();
    let req = ChartRequest::heatmap(vec![vec![0.0, 1.0], vec![1.0, 2.0]]).cmap("gray").colorbar(false);
    chartrun_core::render(&mut canvas, &req).unwrap();
    let rect = canvas.plot_rect();
    let frame = canvas.to_rgba8().unwrap();
    let px = |x: i32, y: i32| {
        let i = (y as usize * frame.width as usize + x as usize) * 4;
        frame.pixels[i..i + 4].to_vec()
    };
    // Row 0 is at the top: its first cell holds the minimum (black).
    assert_eq!(px(rect.left + 20, rect.top + 20), vec![0, 0, 0, 255]);
    // Bottom-right cell holds the maximum (white).
    assert_eq!(px(rect.right - 20, rect.bottom - 20), vec![255, 255, 255, 255]);
}
