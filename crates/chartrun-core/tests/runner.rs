// File: crates/chartrun-core/tests/runner.rs
// Purpose: Output naming, the save counter, and the presenter seam.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use chartrun_core::{
    ChartError, ChartRequest, FileNaming, OutputTarget, Presenter, RenderOptions, RgbaFrame, Runner,
};

fn fresh_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target/test_out/runner").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

#[test]
fn naming_variants() {
    let with_id = FileNaming::new("plots", "plot", Some(1_700_000_000));
    assert_eq!(with_id.path_for(1), PathBuf::from("plots/plot_1700000000_1.png"));
    let flat = FileNaming::flat("plot");
    assert_eq!(flat.path_for(2), PathBuf::from("./plot_2.png"));
    assert!(FileNaming::default().run_id.is_some());
}

#[test]
fn counter_starts_at_one_and_only_goes_up() {
    let dir = fresh_dir("counter");
    let target = OutputTarget::File(FileNaming::new(&dir, "plot", Some(7)));
    let mut runner = Runner::new(RenderOptions::default()).unwrap();

    let mut written = Vec::new();
    for i in 0..3 {
        runner.render(&ChartRequest::line([0.0, 1.0], [i as f64, 1.0])).unwrap();
        written.push(runner.present_or_save(&target).unwrap().unwrap());
        assert!(runner.canvas().is_blank(), "canvas is cleared after each save");
    }
    assert_eq!(
        written,
        vec![dir.join("plot_7_1.png"), dir.join("plot_7_2.png"), dir.join("plot_7_3.png")]
    );
    // The parent directory was created on first save.
    assert!(written.iter().all(|p| p.exists()));
    assert_eq!(runner.saved_count(), 3);
}

#[test]
fn failed_render_does_not_advance_counter() {
    let dir = fresh_dir("failed");
    let target = OutputTarget::File(FileNaming::new(&dir, "plot", None));
    let mut runner = Runner::new(RenderOptions::default()).unwrap();

    assert!(runner.render(&ChartRequest::scatter([1.0, 2.0], [1.0])).is_err());
    assert_eq!(runner.saved_count(), 0);

    runner.render(&ChartRequest::scatter([1.0, 2.0], [1.0, 2.0])).unwrap();
    let path = runner.present_or_save(&target).unwrap();
    assert_eq!(path, Some(dir.join("plot_1.png")));
}

#[test]
fn display_without_backend_is_unavailable() {
    let mut runner = Runner::new(RenderOptions::default()).unwrap();
    runner.render(&ChartRequest::histogram([1.0, 2.0, 2.0])).unwrap();
    let err = runner.present_or_save(&OutputTarget::Display).unwrap_err();
    assert!(matches!(err, ChartError::DisplayUnavailable(_)));
}

#[derive(Clone, Default)]
struct Recorder {
    shown: Arc<Mutex<Vec<(String, u32, u32)>>>,
}

impl Presenter for Recorder {
    fn present(&mut self, frame: &RgbaFrame, title: &str) -> chartrun_core::Result<()> {
        self.shown.lock().unwrap().push((title.to_string(), frame.width, frame.height));
        Ok(())
    }
}

#[test]
fn display_hands_frames_to_presenter_in_order() {
    let recorder = Recorder::default();
    let mut runner = Runner::new(RenderOptions::default()).unwrap().with_presenter(Box::new(recorder.clone()));
    let requests = vec![
        ChartRequest::bar([1.0, 2.0], [3.0, 4.0]).title("first"),
        ChartRequest::pie([1.0, 1.0], ["a", "b"]),
    ];
    let saved = runner.run_all(&requests, &OutputTarget::Display).unwrap();
    assert!(saved.is_empty());
    assert_eq!(runner.saved_count(), 0);
    assert!(runner.canvas().is_blank());

    let shown = recorder.shown.lock().unwrap().clone();
    assert_eq!(shown, vec![(String::from("first"), 1024, 640), (String::from("Pie Chart"), 1024, 640)]);
}

#[test]
fn runner_loads_tables() {
    let path = PathBuf::from("target/test_out/runner/cols.csv");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "x,y\n1,2\n3,4\n").unwrap();
    let runner = Runner::new(RenderOptions::default()).unwrap();
    let table = runner.load_table(&path).unwrap();
    let req = ChartRequest::line(table.numeric("x").unwrap(), table.numeric("y").unwrap());
    assert!(req.validate().is_ok());
}
