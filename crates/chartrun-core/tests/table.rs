// File: crates/chartrun-core/tests/table.rs
// Purpose: Category table loading keeps cells as strings and converts on request.

use std::path::PathBuf;

use chartrun_core::{load_table, load_table_with, ChartError};

fn write(name: &str, contents: &str) -> PathBuf {
    let path = PathBuf::from("target/test_out/tables").join(name);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn header_and_one_row() {
    let t = load_table(write("ab.csv", "a,b\n1,2\n")).unwrap();
    assert_eq!(t.names().collect::<Vec<_>>(), vec!["a", "b"]);
    assert_eq!(t.column("a").unwrap(), &["1".to_string()]);
    assert_eq!(t.column("b").unwrap(), &["2".to_string()]);
    assert_eq!(t.len(), 1);
    assert_eq!(t.numeric("b").unwrap().values(), &[2.0]);
}

#[test]
fn header_only_is_empty_with_names() {
    let t = load_table(write("header_only.csv", "x,y,z\n")).unwrap();
    assert!(t.is_empty());
    assert_eq!(t.names().count(), 3);
    assert!(t.column("y").unwrap().is_empty());
}

#[test]
fn cells_stay_strings_until_converted() {
    let t = load_table(write("mixed.csv", "name,score\nann, 3.5\nbo,x\n")).unwrap();
    assert_eq!(t.column("name").unwrap(), &["ann".to_string(), "bo".to_string()]);
    match t.numeric("score") {
        Err(ChartError::ParseValue { column, row, value }) => {
            assert_eq!(column, "score");
            assert_eq!(row, 2);
            assert_eq!(value, "x");
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn unknown_column() {
    let t = load_table(write("one.csv", "a\n1\n")).unwrap();
    assert!(matches!(t.column("b"), Err(ChartError::UnknownColumn(name)) if name == "b"));
}

#[test]
fn missing_file_is_a_csv_error() {
    let res = load_table("target/test_out/tables/does_not_exist.csv");
    assert!(matches!(res, Err(ChartError::Csv { .. })));
}

#[test]
fn other_delimiters() {
    let t = load_table_with(write("semi.csv", "a;b\n1;2\n3;4\n"), b';').unwrap();
    assert_eq!(t.numeric("a").unwrap().values(), &[1.0, 3.0]);
}
