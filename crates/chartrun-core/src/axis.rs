// File: crates/chartrun-core/src/axis.rs
// Summary: Axis model with label, range, and tick marks.

use crate::grid::{format_tick, nice_step, nice_ticks};

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub label: String,
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub ticks: Vec<Tick>,
}

/// Fraction of the data span added on each side when fitting an axis.
pub const MARGIN: f64 = 0.05;
const TARGET_TICKS: usize = 8;

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, ticks: Vec::new() }.with_auto_ticks()
    }

    /// Fit data extent `[lo, hi]` with a margin on both sides; a flat extent
    /// widens to +/-0.5 around the value.
    pub fn fit(label: impl Into<String>, lo: f64, hi: f64) -> Self {
        let (lo, hi) = if (hi - lo).abs() < 1e-12 { (lo - 0.5, hi + 0.5) } else { (lo, hi) };
        let pad = (hi - lo) * MARGIN;
        if (hi - lo + 2.0 * pad).is_finite() {
            Self::new(label, lo - pad, hi + pad)
        } else {
            // no margin once the span overflows f64
            Self::new(label, lo, hi)
        }
    }

    /// Like `fit`, but the range always includes `anchor` (bars start at zero).
    pub fn fit_including(label: impl Into<String>, lo: f64, hi: f64, anchor: f64) -> Self {
        let lo2 = lo.min(anchor);
        let hi2 = hi.max(anchor);
        let mut axis = Self::fit(label, lo2, hi2);
        if anchor <= lo {
            axis.min = anchor;
        }
        if anchor >= hi {
            axis.max = anchor;
        }
        axis.with_auto_ticks()
    }

    pub fn with_auto_ticks(mut self) -> Self {
        let step = nice_step(self.max - self.min, TARGET_TICKS);
        self.ticks = nice_ticks(self.min, self.max, TARGET_TICKS)
            .into_iter()
            .map(|v| Tick { value: v, label: format_tick(v, step) })
            .collect();
        self
    }

    pub fn with_ticks(mut self, ticks: Vec<Tick>) -> Self {
        self.ticks = ticks;
        self
    }

    /// Ticks at integer positions `start, start+1, ...` with the given labels.
    pub fn with_labeled_positions<S: AsRef<str>>(self, start: f64, labels: &[S]) -> Self {
        let ticks = labels
            .iter()
            .enumerate()
            .map(|(i, l)| Tick { value: start + i as f64, label: l.as_ref().to_string() })
            .collect();
        self.with_ticks(ticks)
    }
}
