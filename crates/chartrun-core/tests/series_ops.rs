// File: crates/chartrun-core/tests/series_ops.rs
// Purpose: Built-in list functions over Series and Matrix.

use chartrun_core::{ChartError, Matrix, Series};

#[test]
fn slice_is_half_open() {
    let x = Series::range(1, 10);
    assert_eq!(x.slice(3, 7).values(), &[4.0, 5.0, 6.0, 7.0]);
    assert_eq!(x.slice(8, 100).values(), &[9.0, 10.0]);
    assert!(x.slice(7, 3).is_empty());
}

#[test]
fn avg_sort_reverse() {
    let s = Series::from([3.0, 1.0, 2.0]);
    assert_eq!(s.avg().unwrap(), 2.0);
    assert_eq!(s.sort().values(), &[1.0, 2.0, 3.0]);
    assert_eq!(s.reverse().values(), &[2.0, 1.0, 3.0]);
    // Transforms never touch the original.
    assert_eq!(s.values(), &[3.0, 1.0, 2.0]);
    assert!(matches!(Series::default().avg(), Err(ChartError::SeriesOp { op: "avg", .. })));
}

#[test]
fn running_sum_and_pairwise_compare() {
    let s = Series::from([1.0, 2.0, 3.0, 4.0]);
    assert_eq!(s.running_sum().values(), &[1.0, 3.0, 6.0, 10.0]);
    assert_eq!(Series::from([1.0, 4.0, 2.0]).pairwise_compare().values(), &[3.0, -2.0]);
    assert!(Series::from([1.0]).pairwise_compare().is_empty());
}

#[test]
fn pareto_set_is_distinct_ascending() {
    let s = Series::from([3.0, 1.0, 3.0, 2.0, 1.0]);
    assert_eq!(s.pareto_set().values(), &[1.0, 2.0, 3.0]);
}

#[test]
fn transpose_truncates_to_shortest() {
    let cols = Series::transpose(&[Series::from([1.0, 2.0, 3.0]), Series::from([4.0, 5.0])]);
    assert_eq!(cols, vec![Series::from([1.0, 4.0]), Series::from([2.0, 5.0])]);
    assert!(Series::transpose(&[]).is_empty());
}

#[test]
fn matrix_shape_and_transpose() {
    let m = Matrix::try_new(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
    assert_eq!((m.n_rows(), m.n_cols()), (2, 3));
    assert_eq!(m.extent(), Some((1.0, 6.0)));
    let t = m.transpose();
    assert_eq!(t.rows(), &[vec![1.0, 4.0], vec![2.0, 5.0], vec![3.0, 6.0]]);
    assert!(matches!(
        Matrix::try_new(vec![vec![1.0], vec![]]),
        Err(ChartError::RaggedMatrix { row: 1, expected: 1, found: 0 })
    ));
}

#[test]
fn extent_skips_non_finite() {
    let s = Series::from([f64::NAN, 2.0, -1.0, f64::INFINITY]);
    assert_eq!(s.extent(), Some((-1.0, 2.0)));
    assert_eq!(Series::from([f64::NAN]).extent(), None);
}
