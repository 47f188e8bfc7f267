// File: crates/chartrun-core/src/series.rs
// Summary: Series (ordered numeric values) and Matrix (rectangular rows) plus the built-in list functions.
// Notes:
// - Integers are stored as f64; every value a script writes inline is exact.
// - All transforms return new series; a Series is never mutated once built.

use crate::error::{ChartError, Result};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    values: Vec<f64>,
}

impl Series {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// `start..=end_inclusive` as a series; handy for index axes.
    pub fn range(start: i64, end_inclusive: i64) -> Self {
        Self::new((start..=end_inclusive).map(|v| v as f64).collect())
    }

    pub fn values(&self) -> &[f64] { &self.values }
    pub fn len(&self) -> usize { self.values.len() }
    pub fn is_empty(&self) -> bool { self.values.is_empty() }
    pub fn into_inner(self) -> Vec<f64> { self.values }

    /// (min, max) over finite values, or None if there are none.
    pub fn extent(&self) -> Option<(f64, f64)> {
        let mut it = self.values.iter().copied().filter(|v| v.is_finite());
        let first = it.next()?;
        Some(it.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }

    pub fn sum(&self) -> f64 {
        self.values.iter().sum()
    }

    pub fn avg(&self) -> Result<f64> {
        if self.values.is_empty() {
            return Err(ChartError::SeriesOp { op: "avg", reason: "series is empty".into() });
        }
        Ok(self.sum() / self.values.len() as f64)
    }

    pub fn sort(&self) -> Series {
        let mut v = self.values.clone();
        v.sort_by(f64::total_cmp);
        Series::new(v)
    }

    pub fn reverse(&self) -> Series {
        Series::new(self.values.iter().rev().copied().collect())
    }

    /// Half-open `[start, end)`; bounds past the end clamp, an inverted range is empty.
    pub fn slice(&self, start: usize, end: usize) -> Series {
        let n = self.values.len();
        let s = start.min(n);
        let e = end.min(n).max(s);
        Series::new(self.values[s..e].to_vec())
    }

    pub fn running_sum(&self) -> Series {
        let mut acc = 0.0;
        Series::new(
            self.values
                .iter()
                .map(|v| {
                    acc += v;
                    acc
                })
                .collect(),
        )
    }

    /// Differences of consecutive values: `x[i+1] - x[i]`.
    pub fn pairwise_compare(&self) -> Series {
        Series::new(self.values.windows(2).map(|w| w[1] - w[0]).collect())
    }

    /// Distinct values in ascending order.
    pub fn pareto_set(&self) -> Series {
        let mut v = self.sort().into_inner();
        v.dedup_by(|a, b| a.total_cmp(b).is_eq());
        Series::new(v)
    }

    /// Zip series column-wise, truncating to the shortest.
    pub fn transpose(rows: &[Series]) -> Vec<Series> {
        let width = rows.iter().map(Series::len).min().unwrap_or(0);
        (0..width)
            .map(|i| Series::new(rows.iter().map(|r| r.values[i]).collect()))
            .collect()
    }
}

impl From<Vec<f64>> for Series {
    fn from(values: Vec<f64>) -> Self { Self::new(values) }
}

impl From<&[f64]> for Series {
    fn from(values: &[f64]) -> Self { Self::new(values.to_vec()) }
}

impl<const N: usize> From<[f64; N]> for Series {
    fn from(values: [f64; N]) -> Self { Self::new(values.to_vec()) }
}

impl FromIterator<f64> for Series {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Heatmap input. Rectangularity is checked by `try_new`, so a built Matrix is always rectangular.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    rows: Vec<Vec<f64>>,
    cols: usize,
}

impl Matrix {
    pub fn try_new(rows: Vec<Vec<f64>>) -> Result<Self> {
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        for (i, r) in rows.iter().enumerate() {
            if r.len() != cols {
                return Err(ChartError::RaggedMatrix { row: i, expected: cols, found: r.len() });
            }
        }
        Ok(Self { rows, cols })
    }

    pub fn rows(&self) -> &[Vec<f64>] { &self.rows }
    pub fn n_rows(&self) -> usize { self.rows.len() }
    pub fn n_cols(&self) -> usize { self.cols }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() || self.cols == 0 }

    pub fn extent(&self) -> Option<(f64, f64)> {
        let flat: Series = self.rows.iter().flatten().copied().collect();
        flat.extent()
    }

    /// Rows become columns.
    pub fn transpose(&self) -> Matrix {
        let rows = (0..self.cols)
            .map(|c| self.rows.iter().map(|r| r[c]).collect())
            .collect();
        Matrix { rows, cols: self.rows.len() }
    }
}
