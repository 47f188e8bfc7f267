// File: crates/chartrun-core/src/style.rs
// Summary: Style vocabulary (colors, markers, line styles, grid, colormaps) parsed from plotting-style codes.

use std::str::FromStr;

use skia_safe as skia;

use crate::error::{ChartError, Result};

/// Named colors understood in requests. Hex `#rrggbb` / `#rrggbbaa` is accepted too.
const NAMED_COLORS: &[(&str, (u8, u8, u8))] = &[
    ("black", (0, 0, 0)),
    ("white", (255, 255, 255)),
    ("red", (255, 0, 0)),
    ("green", (0, 128, 0)),
    ("blue", (0, 0, 255)),
    ("orange", (255, 165, 0)),
    ("purple", (128, 0, 128)),
    ("gold", (255, 215, 0)),
    ("skyblue", (135, 206, 235)),
    ("lightgreen", (144, 238, 144)),
    ("gray", (128, 128, 128)),
    ("grey", (128, 128, 128)),
    ("pink", (255, 192, 203)),
    ("brown", (165, 42, 42)),
    ("cyan", (0, 255, 255)),
    ("magenta", (255, 0, 255)),
    ("yellow", (255, 255, 0)),
    ("navy", (0, 0, 128)),
    ("teal", (0, 128, 128)),
    ("coral", (255, 127, 80)),
    ("salmon", (250, 128, 114)),
    ("tomato", (255, 99, 71)),
    // matplotlib's default cycle, addressable as tab:*
    ("tab:blue", (31, 119, 180)),
    ("tab:orange", (255, 127, 14)),
    ("tab:green", (44, 160, 44)),
    ("tab:red", (214, 39, 40)),
    ("tab:purple", (148, 103, 189)),
    ("tab:brown", (140, 86, 75)),
    ("tab:pink", (227, 119, 194)),
    ("tab:gray", (127, 127, 127)),
    ("tab:olive", (188, 189, 34)),
    ("tab:cyan", (23, 190, 207)),
];

/// Default wedge/box color cycle.
pub const COLOR_CYCLE: [&str; 10] = [
    "tab:blue", "tab:orange", "tab:green", "tab:red", "tab:purple",
    "tab:brown", "tab:pink", "tab:gray", "tab:olive", "tab:cyan",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self { Self { r, g, b, a: 255 } }

    /// Fully transparent; the `"none"` color code.
    pub const NONE: Self = Self { r: 0, g: 0, b: 0, a: 0 };

    pub fn with_alpha(self, alpha: f32) -> Self {
        Self { a: (alpha.clamp(0.0, 1.0) * 255.0).round() as u8, ..self }
    }

    pub fn to_skia(self) -> skia::Color {
        skia::Color::from_argb(self.a, self.r, self.g, self.b)
    }

    pub fn cycle(i: usize) -> Self {
        COLOR_CYCLE[i % COLOR_CYCLE.len()]
            .parse()
            .unwrap_or(Self::rgb(0, 0, 0))
    }
}

impl FromStr for Rgba {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_ascii_lowercase();
        if key == "none" {
            return Ok(Self::NONE);
        }
        if let Some(hex) = key.strip_prefix('#') {
            let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
            return match hex.len() {
                6 => match (byte(0), byte(2), byte(4)) {
                    (Some(r), Some(g), Some(b)) => Ok(Self::rgb(r, g, b)),
                    _ => Err(ChartError::style("color", s)),
                },
                8 => match (byte(0), byte(2), byte(4), byte(6)) {
                    (Some(r), Some(g), Some(b), Some(a)) => Ok(Self { r, g, b, a }),
                    _ => Err(ChartError::style("color", s)),
                },
                _ => Err(ChartError::style("color", s)),
            };
        }
        NAMED_COLORS
            .iter()
            .find(|(name, _)| *name == key)
            .map(|&(_, (r, g, b))| Self::rgb(r, g, b))
            .ok_or_else(|| ChartError::style("color", s))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker {
    None,
    Circle,
    Square,
    Triangle,
    Diamond,
    Cross,
    Plus,
    Point,
}

impl FromStr for Marker {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(match s {
            "" | "None" | "none" => Marker::None,
            "o" => Marker::Circle,
            "s" => Marker::Square,
            "^" => Marker::Triangle,
            "D" | "d" => Marker::Diamond,
            "x" => Marker::Cross,
            "+" => Marker::Plus,
            "." => Marker::Point,
            other => return Err(ChartError::style("marker", other)),
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dashed,
    Dotted,
    DashDot,
}

impl LineStyle {
    /// Dash intervals in line-width units, or None for a solid stroke.
    pub fn intervals(self) -> Option<&'static [f32]> {
        match self {
            LineStyle::Solid => None,
            LineStyle::Dashed => Some(&[3.7, 1.6]),
            LineStyle::Dotted => Some(&[1.0, 1.65]),
            LineStyle::DashDot => Some(&[6.4, 1.6, 1.0, 1.6]),
        }
    }
}

impl FromStr for LineStyle {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(match s {
            "-" | "solid" => LineStyle::Solid,
            "--" | "dashed" => LineStyle::Dashed,
            ":" | "dotted" => LineStyle::Dotted,
            "-." | "dashdot" => LineStyle::DashDot,
            other => return Err(ChartError::style("linestyle", other)),
        })
    }
}

/// Which grid lines to draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridMode {
    Off,
    Both,
    XOnly,
    YOnly,
}

impl GridMode {
    pub fn vertical(self) -> bool { matches!(self, GridMode::Both | GridMode::XOnly) }
    pub fn horizontal(self) -> bool { matches!(self, GridMode::Both | GridMode::YOnly) }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Colormap {
    Viridis,
    Plasma,
    Gray,
    Coolwarm,
}

// Anchors sampled from the published colormaps; linear interpolation in between.
const VIRIDIS: [(u8, u8, u8); 9] = [
    (68, 1, 84), (71, 44, 122), (59, 81, 139), (44, 113, 142), (33, 144, 141),
    (39, 173, 129), (92, 200, 99), (170, 220, 50), (253, 231, 37),
];
const PLASMA: [(u8, u8, u8); 8] = [
    (13, 8, 135), (84, 2, 163), (139, 10, 165), (185, 50, 137), (219, 92, 104),
    (244, 136, 73), (254, 188, 43), (240, 249, 33),
];
const GRAY: [(u8, u8, u8); 2] = [(0, 0, 0), (255, 255, 255)];
const COOLWARM: [(u8, u8, u8); 5] = [
    (59, 76, 192), (141, 176, 254), (221, 221, 221), (244, 154, 123), (180, 4, 38),
];

impl Colormap {
    fn anchors(self) -> &'static [(u8, u8, u8)] {
        match self {
            Colormap::Viridis => &VIRIDIS,
            Colormap::Plasma => &PLASMA,
            Colormap::Gray => &GRAY,
            Colormap::Coolwarm => &COOLWARM,
        }
    }

    /// Map t in [0, 1] (clamped) to a color.
    pub fn sample(self, t: f64) -> Rgba {
        let a = self.anchors();
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        let pos = t * (a.len() - 1) as f64;
        let i = (pos.floor() as usize).min(a.len() - 2);
        let f = pos - i as f64;
        let lerp = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * f).round() as u8;
        let (c0, c1) = (a[i], a[i + 1]);
        Rgba::rgb(lerp(c0.0, c1.0), lerp(c0.1, c1.1), lerp(c0.2, c1.2))
    }
}

impl FromStr for Colormap {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(match s {
            "viridis" => Colormap::Viridis,
            "plasma" => Colormap::Plasma,
            "gray" | "grey" | "Greys_r" => Colormap::Gray,
            "coolwarm" => Colormap::Coolwarm,
            other => return Err(ChartError::style("cmap", other)),
        })
    }
}

/// Heatmap cell interpolation: flat cells, or values blended between cell centres.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interpolation {
    Nearest,
    Bilinear,
}

impl FromStr for Interpolation {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "nearest" | "none" => Ok(Interpolation::Nearest),
            "bilinear" => Ok(Interpolation::Bilinear),
            other => Err(ChartError::style("interpolation", other)),
        }
    }
}

/// Heatmap aspect: `Auto` fills the plot rect, `Equal` keeps square cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Aspect {
    Auto,
    Equal,
}

impl FromStr for Aspect {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "auto" => Ok(Aspect::Auto),
            "equal" => Ok(Aspect::Equal),
            other => Err(ChartError::style("aspect", other)),
        }
    }
}

/// Parse a printf-style percentage pattern such as `%.1f%%` into its precision.
pub fn parse_autopct(pattern: &str) -> Result<usize> {
    let err = || ChartError::style("autopct", pattern);
    let body = pattern.strip_prefix('%').ok_or_else(err)?;
    let body = body.strip_suffix("f%%").ok_or_else(err)?;
    if body.is_empty() {
        return Ok(6);
    }
    body.strip_prefix('.')
        .and_then(|p| p.parse::<usize>().ok())
        .ok_or_else(err)
}
