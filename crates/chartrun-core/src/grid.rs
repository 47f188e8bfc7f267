// File: crates/chartrun-core/src/grid.rs
// Summary: Tick layout helpers (1-2-2.5-5 "nice" steps and compact labels).

use std::ops::RangeInclusive;

/// Smallest step from {1, 2, 2.5, 5, 10}·10^k giving at most `target` intervals over `span`.
pub fn nice_step(span: f64, target: usize) -> f64 {
    if !(span > 0.0) || !span.is_finite() { return 1.0; }
    let raw = span / target.max(1) as f64;
    let mag = 10f64.powf(raw.log10().floor());
    [1.0, 2.0, 2.5, 5.0, 10.0]
        .into_iter()
        .map(|m| m * mag)
        .find(|s| *s >= raw * (1.0 - 1e-9))
        .unwrap_or(10.0 * mag)
}

/// Upper bound on ticks laid out for one axis.
pub const MAX_TICKS: i64 = 64;

/// Multipliers `k` with `k * step` inside [min, max], or `None` when the range
/// is not finite or would need more than `MAX_TICKS` ticks.
pub fn tick_range(min: f64, max: f64, step: f64) -> Option<RangeInclusive<i64>> {
    if !(max - min).is_finite() || !(step > 0.0) || !step.is_finite() {
        return None;
    }
    let first = (min / step).ceil();
    let last = (max / step).floor();
    if !(last - first < MAX_TICKS as f64) {
        return None;
    }
    Some(first as i64..=last as i64)
}

/// Tick values on multiples of a nice step that fall inside [min, max].
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !(max > min) { return if min.is_finite() { vec![min] } else { Vec::new() }; }
    let step = nice_step(max - min, target);
    let Some(range) = tick_range(min, max, step) else { return Vec::new() };
    // one decimal finer than the step
    let scale = 10f64.powi(1 - step.log10().floor() as i32);
    range
        .map(|k| {
            let v = k as f64 * step;
            // snap -0.0 and float dust like 0.6000000000000001
            let snapped = (v * scale).round() / scale;
            if snapped.abs() < step * 1e-9 { 0.0 } else { snapped }
        })
        .collect()
}

/// Format a tick value compactly: integers without decimals, otherwise trimmed.
pub fn format_tick(v: f64, step: f64) -> String {
    if v == v.trunc() && v.abs() < 1e15 {
        return format!("{}", v as i64);
    }
    let decimals = if step > 0.0 { (-step.log10()).ceil().max(0.0) as usize + 1 } else { 2 };
    let s = format!("{:.*}", decimals.min(8), v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    s.to_string()
}
