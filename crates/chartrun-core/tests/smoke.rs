// File: crates/chartrun-core/tests/smoke.rs
// Purpose: Every chart kind renders end to end and leaves marks on the canvas.

use chartrun_core::{Canvas, ChartRequest, RenderOptions, Series};

fn render_ok(req: ChartRequest) -> Canvas {
    let mut canvas = Canvas::new(RenderOptions::default()).expect("canvas");
    assert!(canvas.is_blank());
    chartrun_core::render(&mut canvas, &req).expect("render should succeed");
    assert!(!canvas.is_blank(), "{} left the canvas blank", req.kind);
    canvas
}

fn xy() -> (Series, Series) {
    (Series::range(1, 10), Series::from([2.5, 4.0, 5.5, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.5]))
}

#[test]
fn line_renders_and_saves_png() {
    let (x, y) = xy();
    let mut canvas = render_ok(ChartRequest::line(x, y).title("Line Plot"));
    let out = std::path::PathBuf::from("target/test_out/smoke_line.png");
    canvas.save_png(&out).expect("save");
    assert!(std::fs::metadata(&out).expect("output exists").len() > 0);

    let bytes = canvas.to_png_bytes().expect("png bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn each_kind_renders() {
    let (x, y) = xy();
    render_ok(ChartRequest::histogram(y.clone()).bins(10));
    render_ok(ChartRequest::heatmap(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0], vec![7.0, 8.0, 9.0]]));
    render_ok(ChartRequest::bar(x.clone(), y.clone()));
    render_ok(ChartRequest::pie([4.0, 2.5, 2.0, 10.0], ["Apples", "Bananas", "Cherries", "Dates"]));
    render_ok(ChartRequest::scatter(x.clone(), y.clone()).size(100.0).alpha(0.6));
    render_ok(ChartRequest::boxplot(vec![x.clone(), y.clone(), Series::range(3, 14)]));
    render_ok(ChartRequest::timeline([1_704_067_200.0, 1_704_153_600.0, 1_704_412_800.0], [1.0, 3.0, 2.0]));
}

#[test]
fn style_variants_render() {
    let (x, y) = xy();
    render_ok(ChartRequest::line(x.clone(), y.clone()).linestyle("--").marker("s").label("series"));
    render_ok(ChartRequest::line(x.clone(), y.clone()).linestyle(":").marker("^"));
    render_ok(ChartRequest::line(x.clone(), y.clone()).linestyle("-.").marker("x"));
    render_ok(ChartRequest::histogram(y.clone()).density(true).bins(4));
    render_ok(
        ChartRequest::heatmap(vec![vec![0.0, 1.0], vec![2.0, 3.0]])
            .cmap("plasma")
            .interpolation("bilinear")
            .aspect("equal")
            .colorbar(false),
    );
    render_ok(ChartRequest::boxplot(vec![x.clone(), y.clone()]).notch(true).vert(false).patch_artist(false));
    render_ok(
        ChartRequest::pie([30.0, 20.0, 25.0, 15.0, 10.0], Vec::<String>::new())
            .colors(["gold", "skyblue", "lightgreen"])
            .autopct("%.1f%%")
            .startangle(140.0),
    );
}

#[test]
fn single_wedge_pie_is_a_full_disc() {
    render_ok(ChartRequest::pie([5.0], ["All"]));
}

#[test]
fn flat_data_still_renders() {
    render_ok(ChartRequest::line([1.0, 2.0, 3.0], [5.0, 5.0, 5.0]));
    render_ok(ChartRequest::histogram([2.0, 2.0, 2.0]));
    render_ok(ChartRequest::heatmap(vec![vec![7.0, 7.0]]));
    render_ok(ChartRequest::boxplot(vec![Series::from([1.0])]));
}

#[test]
fn clear_resets_to_blank() {
    let (x, y) = xy();
    let mut canvas = render_ok(ChartRequest::scatter(x, y));
    assert!(canvas.mark_count() >= 10);
    canvas.clear();
    assert!(canvas.is_blank());
}

#[test]
fn short_xy_series_still_mark_the_canvas() {
    for n in 1..=5i64 {
        let x = Series::range(1, n);
        let y: Series = (1..=n).map(|v| (v * v) as f64).collect();
        let days: Series = (0..n).map(|d| 1_704_067_200.0 + d as f64 * 86_400.0).collect();
        render_ok(ChartRequest::line(x.clone(), y.clone()));
        render_ok(ChartRequest::timeline(days, y.clone()));
        render_ok(ChartRequest::scatter(x, y));
    }
}

#[test]
fn spans_past_f64_max_render_without_ticks_overflowing() {
    let wide = [-1e308, 1e308];
    render_ok(ChartRequest::scatter(wide, [0.0, 1.0]));
    render_ok(ChartRequest::line(wide, [0.0, 1.0]));
    render_ok(ChartRequest::line([0.0, 1.0], wide));
    render_ok(ChartRequest::bar([1.0, 2.0], wide));
    render_ok(ChartRequest::timeline(wide, [0.0, 1.0]));
}
