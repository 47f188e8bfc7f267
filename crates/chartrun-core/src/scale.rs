// File: crates/chartrun-core/src/scale.rs
// Summary: Linear value-to-pixel scale used for both axes.

/// Maps a data interval onto a pixel interval. The pixel interval may run
/// backwards (bottom -> top for Y, or top -> bottom for image rows).
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub vmin: f64,
    pub vmax: f64,
    pub px_from: f32,
    pub px_to: f32,
}

impl LinearScale {
    pub fn new(vmin: f64, vmax: f64, px_from: f32, px_to: f32) -> Self {
        let mut s = Self { vmin, vmax, px_from, px_to };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let t = (0.5 * v - 0.5 * self.vmin) / self.half_span();
        self.px_from + t as f32 * (self.px_to - self.px_from)
    }

    #[inline]
    pub fn from_px(&self, px: f32) -> f64 {
        let t = ((px - self.px_from) / (self.px_to - self.px_from)) as f64;
        self.vmin + 2.0 * t * self.half_span()
    }

    /// Pixels per data unit (absolute).
    pub fn px_per_unit(&self) -> f32 {
        ((self.px_to - self.px_from) as f64 / self.half_span() * 0.5).abs() as f32
    }

    /// Half the data span; finite for any finite bounds.
    fn half_span(&self) -> f64 {
        0.5 * self.vmax - 0.5 * self.vmin
    }
}
