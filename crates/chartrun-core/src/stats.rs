// File: crates/chartrun-core/src/stats.rs
// Summary: Histogram binning and box-plot statistics.

/// Equal-width bins over [min, max]; the last bin is closed on the right.
#[derive(Clone, Debug, PartialEq)]
pub struct Histogram {
    /// `bins + 1` ascending edges.
    pub edges: Vec<f64>,
    /// Height per bin: counts, or densities when normalized.
    pub heights: Vec<f64>,
}

impl Histogram {
    /// Non-finite samples are ignored. A flat sample set spans [v - 0.5, v + 0.5].
    pub fn compute(samples: &[f64], bins: usize, density: bool) -> Self {
        let bins = bins.max(1);
        let finite: Vec<f64> = samples.iter().copied().filter(|v| v.is_finite()).collect();
        let (mut lo, mut hi) = finite
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
        if finite.is_empty() {
            lo = 0.0;
            hi = 1.0;
        } else if hi - lo < 1e-12 {
            lo -= 0.5;
            hi += 0.5;
        }

        let width = (hi - lo) / bins as f64;
        let edges: Vec<f64> = (0..=bins).map(|i| lo + width * i as f64).collect();
        let mut counts = vec![0.0f64; bins];
        for v in &finite {
            let idx = (((v - lo) / width).floor() as usize).min(bins - 1);
            counts[idx] += 1.0;
        }

        if density && !finite.is_empty() {
            let norm = finite.len() as f64 * width;
            for c in &mut counts {
                *c /= norm;
            }
        }
        Self { edges, heights: counts }
    }

    pub fn max_height(&self) -> f64 {
        self.heights.iter().copied().fold(0.0, f64::max)
    }
}

/// Five-number summary plus fliers for one box.
#[derive(Clone, Debug, PartialEq)]
pub struct BoxStats {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    /// Lowest data point within `q1 - 1.5 * IQR`.
    pub whisker_low: f64,
    /// Highest data point within `q3 + 1.5 * IQR`.
    pub whisker_high: f64,
    pub fliers: Vec<f64>,
    /// Median confidence interval `median +/- 1.57 * IQR / sqrt(n)`.
    pub notch_low: f64,
    pub notch_high: f64,
}

impl BoxStats {
    /// None for an empty (or all non-finite) group.
    pub fn compute(values: &[f64]) -> Option<Self> {
        let mut v: Vec<f64> = values.iter().copied().filter(|x| x.is_finite()).collect();
        if v.is_empty() {
            return None;
        }
        v.sort_by(f64::total_cmp);

        let q1 = percentile(&v, 25.0);
        let median = percentile(&v, 50.0);
        let q3 = percentile(&v, 75.0);
        let iqr = q3 - q1;
        let lo_fence = q1 - 1.5 * iqr;
        let hi_fence = q3 + 1.5 * iqr;

        let whisker_low = v.iter().copied().find(|x| *x >= lo_fence).unwrap_or(q1).min(q1);
        let whisker_high = v.iter().rev().copied().find(|x| *x <= hi_fence).unwrap_or(q3).max(q3);
        let fliers = v.iter().copied().filter(|x| *x < whisker_low || *x > whisker_high).collect();

        let half_notch = 1.57 * iqr / (v.len() as f64).sqrt();
        Some(Self {
            q1,
            median,
            q3,
            whisker_low,
            whisker_high,
            fliers,
            notch_low: median - half_notch,
            notch_high: median + half_notch,
        })
    }

    /// Lowest and highest drawn value, fliers included.
    pub fn extent(&self) -> (f64, f64) {
        let lo = self.fliers.iter().copied().fold(self.whisker_low, f64::min);
        let hi = self.fliers.iter().copied().fold(self.whisker_high, f64::max);
        (lo.min(self.notch_low), hi.max(self.notch_high))
    }
}

/// Linear-interpolated percentile of an ascending, non-empty slice (`p` in 0..=100).
pub fn percentile(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let rank = (p / 100.0).clamp(0.0, 1.0) * (n - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}
