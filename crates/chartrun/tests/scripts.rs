// File: crates/chartrun/tests/scripts.rs
// Purpose: Built-in scripts produce valid requests and save numbered PNGs end to end.

use std::path::PathBuf;

use chartrun::cli::{Cli, ScriptCmd, TableArgs};
use chartrun::scripts::{format_values, scatter_box, showcase, table, table_requests};
use chartrun_core::{load_table, ChartKind, FileNaming, OutputTarget, RenderOptions, Runner};
use clap::Parser;

fn out_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target/test_out").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn showcase_has_one_chart_of_each_basic_kind() {
    let kinds: Vec<ChartKind> = showcase().iter().map(|r| r.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ChartKind::Line,
            ChartKind::Histogram,
            ChartKind::Heatmap,
            ChartKind::Bar,
            ChartKind::Pie,
            ChartKind::Scatter,
            ChartKind::Box,
        ]
    );
    for req in showcase().iter().chain(scatter_box().iter()) {
        req.validate().expect("built-in requests are well formed");
        req.style.resolve().expect("built-in styles resolve");
    }
}

#[test]
fn showcase_saves_seven_numbered_files() {
    let dir = out_dir("showcase_flat");
    let mut runner = Runner::new(RenderOptions::default()).unwrap();
    let target = OutputTarget::File(FileNaming::new(&dir, "plot", None));
    let paths = runner.run_all(&showcase(), &target).unwrap();

    let expected: Vec<PathBuf> = (1..=7).map(|n| dir.join(format!("plot_{n}.png"))).collect();
    assert_eq!(paths, expected);
    for p in &expected {
        let img = image::open(p).expect("decodable png").to_rgba8();
        assert_eq!((img.width(), img.height()), (1024, 640));
    }
}

#[test]
fn scatter_box_pie_uses_run_id_naming() {
    let dir = out_dir("scatter_box");
    let mut runner = Runner::new(RenderOptions::default()).unwrap();
    let target = OutputTarget::File(FileNaming::new(&dir, "plot", Some(42)));
    let paths = runner.run_all(&scatter_box(), &target).unwrap();
    assert_eq!(paths.last().unwrap(), &dir.join("plot_42_3.png"));
    assert_eq!(runner.saved_count(), 3);
}

#[test]
fn slice_prints_like_a_list() {
    assert_eq!(format_values(&[4.0, 5.0, 6.0, 7.0]), "[4, 5, 6, 7]");
    assert_eq!(format_values(&[2.5, 4.0]), "[2.5, 4]");
}

#[test]
fn cli_defaults_show_interactively() {
    let cli = Cli::try_parse_from(["chartrun", "showcase"]).unwrap();
    assert!(matches!(cli.script, ScriptCmd::Showcase));
    assert!(matches!(cli.run_config().target, OutputTarget::Display));
}

#[test]
fn cli_save_defaults_to_plots_dir_with_run_id() {
    let cli = Cli::try_parse_from(["chartrun", "--save", "scatter-box"]).unwrap();
    match cli.run_config().target {
        OutputTarget::File(naming) => {
            assert_eq!(naming.directory, PathBuf::from("plots"));
            assert_eq!(naming.prefix, "plot");
            assert!(naming.run_id.is_some());
        }
        other => panic!("expected file target, got {other:?}"),
    }
}

#[test]
fn cli_flat_drops_run_id() {
    let cli = Cli::try_parse_from(["chartrun", "showcase", "--save", "--flat"]).unwrap();
    match cli.run_config().target {
        OutputTarget::File(naming) => {
            assert_eq!(naming.path_for(1), PathBuf::from(".").join("plot_1.png"));
        }
        other => panic!("expected file target, got {other:?}"),
    }
}

#[test]
fn cli_rejects_unknown_theme() {
    assert!(Cli::try_parse_from(["chartrun", "--theme", "neon", "showcase"]).is_err());
}

#[test]
fn table_script_numeric_and_category_columns() {
    let dir = out_dir("table_script");
    let csv = dir.join("fruit.csv");
    std::fs::write(&csv, "name,day,count\napple,1,3\npear,2,5\nplum,3,4\n").unwrap();

    let numeric = TableArgs { input: csv.clone(), x: "day".into(), y: "count".into(), dates: false };
    let kinds: Vec<ChartKind> = table(&numeric).unwrap().iter().map(|r| r.kind).collect();
    assert_eq!(kinds, vec![ChartKind::Line, ChartKind::Scatter, ChartKind::Histogram, ChartKind::Line]);

    let loaded = load_table(&csv).unwrap();
    let categories = TableArgs { input: csv, x: "name".into(), y: "count".into(), dates: false };
    let reqs = table_requests(&loaded, &categories).unwrap();
    assert_eq!(reqs[0].kind, ChartKind::Bar);
    assert_eq!(
        reqs[0].tick_labels.as_deref(),
        Some(&["apple".to_string(), "pear".to_string(), "plum".to_string()][..])
    );
}

#[test]
fn table_script_dates_become_a_timeline() {
    let dir = out_dir("table_dates");
    let csv = dir.join("series.csv");
    std::fs::write(&csv, "date,value\n2024-01-01,1\n2024-01-02,3\n2024-01-05,2\n").unwrap();
    let args = TableArgs { input: csv, x: "date".into(), y: "value".into(), dates: true };
    let reqs = table(&args).unwrap();
    assert_eq!(reqs[0].kind, ChartKind::Timeline);

    let mut runner = Runner::new(RenderOptions::default()).unwrap();
    runner.render(&reqs[0]).unwrap();
    assert!(!runner.canvas().is_blank());
}

#[test]
fn table_script_unknown_column_fails() {
    let dir = out_dir("table_missing");
    let csv = dir.join("t.csv");
    std::fs::write(&csv, "a,b\n1,2\n").unwrap();
    let args = TableArgs { input: csv, x: "a".into(), y: "nope".into(), dates: false };
    assert!(table(&args).is_err());
}
