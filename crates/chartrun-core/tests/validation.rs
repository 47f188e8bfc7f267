// File: crates/chartrun-core/tests/validation.rs
// Purpose: Malformed requests fail before anything is drawn.

use chartrun_core::{Canvas, ChartError, ChartKind, ChartRequest, RenderOptions, Series};

fn render(req: &ChartRequest) -> (Canvas, chartrun_core::Result<()>) {
    let mut canvas = Canvas::new(RenderOptions::default()).unwrap();
    let res = chartrun_core::render(&mut canvas, req);
    (canvas, res)
}

#[test]
fn scatter_and_line_length_mismatch_fail() {
    for req in [
        ChartRequest::scatter([1.0, 2.0, 3.0], [1.0, 2.0]),
        ChartRequest::line([1.0, 2.0, 3.0], [1.0, 2.0]),
    ] {
        let (canvas, res) = render(&req);
        match res {
            Err(ChartError::LengthMismatch { left: 3, right: 2, .. }) => {}
            other => panic!("expected length mismatch, got {other:?}"),
        }
        assert!(canvas.is_blank());
    }
}

#[test]
fn bar_mismatch_names_height() {
    let (_, res) = render(&ChartRequest::bar([1.0, 2.0], [1.0]));
    match res {
        Err(ChartError::LengthMismatch { kind: ChartKind::Bar, right_name: "height", .. }) => {}
        other => panic!("expected bar mismatch, got {other:?}"),
    }
}

#[test]
fn box_groups_may_differ_in_length() {
    let req = ChartRequest::boxplot(vec![
        Series::range(1, 10),
        Series::from([2.0, 4.0, 6.0]),
        Series::from([3.0, 5.0, 7.0, 9.0, 11.0]),
    ]);
    let (canvas, res) = render(&req);
    res.expect("unequal box groups are fine");
    assert!(!canvas.is_blank());
}

#[test]
fn ragged_heatmap_names_first_bad_row() {
    let req = ChartRequest::heatmap(vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0]]);
    match render(&req).1 {
        Err(ChartError::RaggedMatrix { row: 2, expected: 2, found: 1 }) => {}
        other => panic!("expected ragged matrix, got {other:?}"),
    }
}

#[test]
fn empty_inputs_fail() {
    assert!(matches!(render(&ChartRequest::heatmap(vec![])).1, Err(ChartError::Empty { .. })));
    assert!(matches!(render(&ChartRequest::histogram(Vec::<f64>::new())).1, Err(ChartError::Empty { .. })));
    assert!(matches!(render(&ChartRequest::boxplot(vec![])).1, Err(ChartError::Empty { .. })));
    assert!(matches!(
        render(&ChartRequest::boxplot(vec![Series::from([1.0]), Series::default()])).1,
        Err(ChartError::Empty { what: "group", .. })
    ));
    let all_nan = ChartRequest::boxplot(vec![Series::from([1.0]), Series::from([f64::NAN, f64::NAN])]);
    let (canvas, res) = render(&all_nan);
    assert!(matches!(res, Err(ChartError::Empty { what: "group", .. })));
    assert!(canvas.is_blank());
}

#[test]
fn pie_labels_must_match_values() {
    let ok = ChartRequest::pie([4.0, 2.5, 2.0, 10.0], ["Apples", "Bananas", "Cherries", "Dates"]);
    render(&ok).1.expect("four values, four labels");

    let bad = ChartRequest::pie([4.0, 2.5, 2.0, 10.0], ["Apples", "Bananas", "Cherries"]);
    match render(&bad).1 {
        Err(ChartError::LengthMismatch { kind: ChartKind::Pie, left: 4, right: 3, .. }) => {}
        other => panic!("expected pie mismatch, got {other:?}"),
    }
}

#[test]
fn pie_values_must_be_non_negative_with_positive_sum() {
    let none: Vec<String> = Vec::new();
    for values in [vec![1.0, -1.0], vec![0.0, 0.0], vec![f64::NAN], vec![]] {
        let req = ChartRequest::pie(values, none.clone());
        assert!(matches!(render(&req).1, Err(ChartError::InvalidPieValues)));
    }
}

#[test]
fn invalid_style_codes_fail() {
    let x = [1.0, 2.0];
    let cases = [
        (ChartRequest::line(x, x).color("blurple"), "color"),
        (ChartRequest::line(x, x).marker("@"), "marker"),
        (ChartRequest::line(x, x).linestyle("~"), "linestyle"),
        (ChartRequest::scatter(x, x).alpha(1.5), "alpha"),
        (ChartRequest::histogram(x).bins(0), "bins"),
        (ChartRequest::heatmap(vec![vec![1.0]]).cmap("rainbowish"), "cmap"),
        (ChartRequest::heatmap(vec![vec![1.0]]).interpolation("cubic"), "interpolation"),
        (ChartRequest::pie([1.0], ["a"]).autopct("%d"), "autopct"),
    ];
    for (req, want) in cases {
        let (canvas, res) = render(&req);
        match res {
            Err(ChartError::InvalidStyle { option, .. }) => assert_eq!(option, want),
            other => panic!("expected invalid {want}, got {other:?}"),
        }
        assert!(canvas.is_blank());
    }
}

#[test]
fn tick_labels_must_match_positions() {
    let req = ChartRequest::boxplot(vec![Series::from([1.0]), Series::from([2.0])]).tick_labels(["only one"]);
    assert!(matches!(render(&req).1, Err(ChartError::LengthMismatch { .. })));
}

#[test]
fn mismatched_kind_and_data_fail() {
    let mut req = ChartRequest::line([1.0], [1.0]);
    req.kind = ChartKind::Pie;
    assert!(matches!(render(&req).1, Err(ChartError::DataShape { kind: ChartKind::Pie, .. })));
}
