// File: crates/chartrun-core/src/request.rs
// Summary: Chart request model (kind + data + style + labels) with per-kind defaults and input validation.

use std::fmt;

use crate::error::{ChartError, Result};
use crate::series::{Matrix, Series};
use crate::style::{
    parse_autopct, Aspect, Colormap, GridMode, Interpolation, LineStyle, Marker, Rgba,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Histogram,
    Heatmap,
    Bar,
    Pie,
    Scatter,
    Box,
    Timeline, // line over epoch-second x values, dates on the axis
}

impl ChartKind {
    pub fn default_title(self) -> &'static str {
        match self {
            ChartKind::Line => "Plot",
            ChartKind::Histogram => "Histogram",
            ChartKind::Heatmap => "Heatmap",
            ChartKind::Bar => "Bar Chart",
            ChartKind::Pie => "Pie Chart",
            ChartKind::Scatter => "Scatter Plot",
            ChartKind::Box => "Box Plot",
            ChartKind::Timeline => "Timeline",
        }
    }

    /// Default (x, y) axis labels; pie charts have no axes.
    pub fn default_axis_labels(self) -> Option<(&'static str, &'static str)> {
        match self {
            ChartKind::Line | ChartKind::Scatter | ChartKind::Heatmap => Some(("X-axis", "Y-axis")),
            ChartKind::Histogram => Some(("Value", "Frequency")),
            ChartKind::Bar => Some(("Categories", "Values")),
            ChartKind::Box => Some(("Groups", "Values")),
            ChartKind::Timeline => Some(("Date", "Value")),
            ChartKind::Pie => None,
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ChartKind::Line => "line",
            ChartKind::Histogram => "histogram",
            ChartKind::Heatmap => "heatmap",
            ChartKind::Bar => "bar",
            ChartKind::Pie => "pie",
            ChartKind::Scatter => "scatter",
            ChartKind::Box => "box",
            ChartKind::Timeline => "timeline",
        };
        f.write_str(s)
    }
}

#[derive(Clone, Debug)]
pub enum ChartData {
    /// Paired coordinates (line, scatter, bar, timeline).
    Xy { x: Series, y: Series },
    /// Histogram samples.
    Samples(Series),
    /// Heatmap rows; checked for rectangularity at render time.
    Grid(Vec<Vec<f64>>),
    /// Pie values with optional labels (empty = unlabeled).
    Wedges { values: Series, labels: Vec<String> },
    /// Box plot groups; lengths may differ.
    Groups(Vec<Series>),
}

/// Style options as written in a request. Codes are kept verbatim and resolved
/// at render time, so an invalid code fails the render, not the builder.
#[derive(Clone, Debug)]
pub struct Style {
    pub color: String,
    pub edge_color: String,
    pub colors: Vec<String>,
    pub marker: String,
    pub marker_size: f32,
    pub line_style: String,
    pub line_width: f32,
    pub bins: usize,
    pub density: bool,
    pub alpha: f32,
    /// Scatter marker area in points².
    pub size: f32,
    pub vertical: bool,
    pub notch: bool,
    pub patch_artist: bool,
    pub cmap: String,
    pub interpolation: String,
    pub aspect: String,
    pub colorbar: bool,
    pub start_angle: f64,
    pub autopct: Option<String>,
    pub label: Option<String>,
    pub grid: GridMode,
}

impl Style {
    pub fn for_kind(kind: ChartKind) -> Self {
        let mut s = Self {
            color: "blue".into(),
            edge_color: "black".into(),
            colors: Vec::new(),
            marker: String::new(),
            marker_size: 5.0,
            line_style: "-".into(),
            line_width: 2.0,
            bins: 10,
            density: false,
            alpha: 1.0,
            size: 100.0,
            vertical: true,
            notch: false,
            patch_artist: true,
            cmap: "viridis".into(),
            interpolation: "nearest".into(),
            aspect: "auto".into(),
            colorbar: true,
            start_angle: 0.0,
            autopct: None,
            label: None,
            grid: GridMode::Both,
        };
        match kind {
            ChartKind::Histogram => s.color = "skyblue".into(),
            ChartKind::Bar => {
                s.color = "orange".into();
                s.edge_color = "none".into();
                s.grid = GridMode::YOnly;
            }
            ChartKind::Scatter => {
                s.marker = "o".into();
                s.alpha = 0.6;
            }
            ChartKind::Heatmap | ChartKind::Pie => s.grid = GridMode::Off,
            ChartKind::Timeline => s.color = "purple".into(),
            ChartKind::Box => s.color = "tab:blue".into(),
            ChartKind::Line => {}
        }
        s
    }

    pub fn resolve(&self) -> Result<ResolvedStyle> {
        if self.bins == 0 {
            return Err(ChartError::style("bins", "0"));
        }
        if !(0.0..=1.0).contains(&self.alpha) {
            return Err(ChartError::style("alpha", self.alpha.to_string()));
        }
        if self.line_width.is_nan() || self.line_width < 0.0 {
            return Err(ChartError::style("linewidth", self.line_width.to_string()));
        }
        if self.size.is_nan() || self.size < 0.0 {
            return Err(ChartError::style("s", self.size.to_string()));
        }
        Ok(ResolvedStyle {
            color: self.color.parse()?,
            edge_color: self.edge_color.parse()?,
            colors: self.colors.iter().map(|c| c.parse()).collect::<Result<_>>()?,
            marker: self.marker.parse()?,
            marker_size: self.marker_size,
            line_style: self.line_style.parse()?,
            line_width: self.line_width,
            bins: self.bins,
            density: self.density,
            alpha: self.alpha,
            size: self.size,
            vertical: self.vertical,
            notch: self.notch,
            patch_artist: self.patch_artist,
            cmap: self.cmap.parse()?,
            interpolation: self.interpolation.parse()?,
            aspect: self.aspect.parse()?,
            colorbar: self.colorbar,
            start_angle: self.start_angle,
            autopct: self.autopct.as_deref().map(parse_autopct).transpose()?,
            label: self.label.clone(),
            grid: self.grid,
        })
    }
}

/// Style with every code parsed; what the renderers consume.
#[derive(Clone, Debug)]
pub struct ResolvedStyle {
    pub color: Rgba,
    pub edge_color: Rgba,
    pub colors: Vec<Rgba>,
    pub marker: Marker,
    pub marker_size: f32,
    pub line_style: LineStyle,
    pub line_width: f32,
    pub bins: usize,
    pub density: bool,
    pub alpha: f32,
    pub size: f32,
    pub vertical: bool,
    pub notch: bool,
    pub patch_artist: bool,
    pub cmap: Colormap,
    pub interpolation: Interpolation,
    pub aspect: Aspect,
    pub colorbar: bool,
    pub start_angle: f64,
    /// Decimal places for wedge percentages.
    pub autopct: Option<usize>,
    pub label: Option<String>,
    pub grid: GridMode,
}

impl ResolvedStyle {
    /// i-th color: explicit `colors` cycle first, then the default cycle.
    pub fn cycle_color(&self, i: usize) -> Rgba {
        if self.colors.is_empty() {
            Rgba::cycle(i)
        } else {
            self.colors[i % self.colors.len()]
        }
    }
}

#[derive(Clone, Debug)]
pub struct ChartRequest {
    pub kind: ChartKind,
    pub data: ChartData,
    pub style: Style,
    pub title: Option<String>,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub tick_labels: Option<Vec<String>>,
}

impl ChartRequest {
    fn new(kind: ChartKind, data: ChartData) -> Self {
        Self {
            kind,
            data,
            style: Style::for_kind(kind),
            title: None,
            x_label: None,
            y_label: None,
            tick_labels: None,
        }
    }

    pub fn line(x: impl Into<Series>, y: impl Into<Series>) -> Self {
        Self::new(ChartKind::Line, ChartData::Xy { x: x.into(), y: y.into() })
    }

    pub fn scatter(x: impl Into<Series>, y: impl Into<Series>) -> Self {
        Self::new(ChartKind::Scatter, ChartData::Xy { x: x.into(), y: y.into() })
    }

    pub fn bar(x: impl Into<Series>, heights: impl Into<Series>) -> Self {
        Self::new(ChartKind::Bar, ChartData::Xy { x: x.into(), y: heights.into() })
    }

    /// `x` holds epoch seconds (UTC).
    pub fn timeline(x: impl Into<Series>, y: impl Into<Series>) -> Self {
        Self::new(ChartKind::Timeline, ChartData::Xy { x: x.into(), y: y.into() })
    }

    pub fn histogram(samples: impl Into<Series>) -> Self {
        Self::new(ChartKind::Histogram, ChartData::Samples(samples.into()))
    }

    pub fn heatmap(rows: Vec<Vec<f64>>) -> Self {
        Self::new(ChartKind::Heatmap, ChartData::Grid(rows))
    }

    pub fn pie<S: Into<String>>(values: impl Into<Series>, labels: impl IntoIterator<Item = S>) -> Self {
        let labels = labels.into_iter().map(Into::into).collect();
        Self::new(ChartKind::Pie, ChartData::Wedges { values: values.into(), labels })
    }

    pub fn boxplot(groups: Vec<Series>) -> Self {
        Self::new(ChartKind::Box, ChartData::Groups(groups))
    }

    // ---- labels ------------------------------------------------------------

    pub fn title(mut self, t: impl Into<String>) -> Self { self.title = Some(t.into()); self }
    pub fn xlabel(mut self, t: impl Into<String>) -> Self { self.x_label = Some(t.into()); self }
    pub fn ylabel(mut self, t: impl Into<String>) -> Self { self.y_label = Some(t.into()); self }

    pub fn tick_labels<S: Into<String>>(mut self, labels: impl IntoIterator<Item = S>) -> Self {
        self.tick_labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    pub fn resolved_title(&self) -> &str {
        self.title.as_deref().unwrap_or(self.kind.default_title())
    }

    /// Axis labels with per-kind defaults applied; None for pie charts.
    pub fn resolved_axis_labels(&self) -> Option<(&str, &str)> {
        let (dx, dy) = self.kind.default_axis_labels()?;
        Some((
            self.x_label.as_deref().unwrap_or(dx),
            self.y_label.as_deref().unwrap_or(dy),
        ))
    }

    // ---- style -------------------------------------------------------------

    pub fn color(mut self, c: impl Into<String>) -> Self { self.style.color = c.into(); self }
    pub fn edgecolor(mut self, c: impl Into<String>) -> Self { self.style.edge_color = c.into(); self }
    pub fn marker(mut self, m: impl Into<String>) -> Self { self.style.marker = m.into(); self }
    pub fn markersize(mut self, v: f32) -> Self { self.style.marker_size = v; self }
    pub fn linestyle(mut self, ls: impl Into<String>) -> Self { self.style.line_style = ls.into(); self }
    pub fn linewidth(mut self, v: f32) -> Self { self.style.line_width = v; self }
    pub fn bins(mut self, n: usize) -> Self { self.style.bins = n; self }
    pub fn density(mut self, on: bool) -> Self { self.style.density = on; self }
    pub fn alpha(mut self, a: f32) -> Self { self.style.alpha = a; self }
    pub fn size(mut self, s: f32) -> Self { self.style.size = s; self }
    pub fn vert(mut self, on: bool) -> Self { self.style.vertical = on; self }
    pub fn notch(mut self, on: bool) -> Self { self.style.notch = on; self }
    pub fn patch_artist(mut self, on: bool) -> Self { self.style.patch_artist = on; self }
    pub fn cmap(mut self, name: impl Into<String>) -> Self { self.style.cmap = name.into(); self }
    pub fn interpolation(mut self, name: impl Into<String>) -> Self { self.style.interpolation = name.into(); self }
    pub fn aspect(mut self, name: impl Into<String>) -> Self { self.style.aspect = name.into(); self }
    pub fn colorbar(mut self, on: bool) -> Self { self.style.colorbar = on; self }
    pub fn startangle(mut self, deg: f64) -> Self { self.style.start_angle = deg; self }
    pub fn autopct(mut self, pattern: impl Into<String>) -> Self { self.style.autopct = Some(pattern.into()); self }
    pub fn label(mut self, l: impl Into<String>) -> Self { self.style.label = Some(l.into()); self }
    pub fn grid(mut self, mode: GridMode) -> Self { self.style.grid = mode; self }

    pub fn colors<S: Into<String>>(mut self, colors: impl IntoIterator<Item = S>) -> Self {
        self.style.colors = colors.into_iter().map(Into::into).collect();
        self
    }

    // ---- validation --------------------------------------------------------

    /// Check data shapes for this kind. Style codes are checked by `Style::resolve`.
    pub fn validate(&self) -> Result<()> {
        let kind = self.kind;
        let expected = match kind {
            ChartKind::Line | ChartKind::Scatter | ChartKind::Bar | ChartKind::Timeline => "paired x/y",
            ChartKind::Histogram => "sample",
            ChartKind::Heatmap => "matrix",
            ChartKind::Pie => "wedge",
            ChartKind::Box => "group",
        };
        let shape_ok = matches!(
            (kind, &self.data),
            (ChartKind::Line | ChartKind::Scatter | ChartKind::Bar | ChartKind::Timeline, ChartData::Xy { .. })
                | (ChartKind::Histogram, ChartData::Samples(_))
                | (ChartKind::Heatmap, ChartData::Grid(_))
                | (ChartKind::Pie, ChartData::Wedges { .. })
                | (ChartKind::Box, ChartData::Groups(_))
        );
        if !shape_ok {
            return Err(ChartError::DataShape { kind, expected });
        }
        match &self.data {
            ChartData::Xy { x, y } => {
                if x.len() != y.len() {
                    let right_name = if kind == ChartKind::Bar { "height" } else { "y" };
                    return Err(ChartError::LengthMismatch {
                        kind,
                        left_name: "x",
                        left: x.len(),
                        right_name,
                        right: y.len(),
                    });
                }
            }
            ChartData::Samples(s) => {
                if s.is_empty() {
                    return Err(ChartError::Empty { kind, what: "sample series" });
                }
            }
            ChartData::Grid(rows) => {
                let m = Matrix::try_new(rows.clone())?;
                if m.is_empty() {
                    return Err(ChartError::Empty { kind, what: "matrix" });
                }
            }
            ChartData::Wedges { values, labels } => {
                if !labels.is_empty() && labels.len() != values.len() {
                    return Err(ChartError::LengthMismatch {
                        kind,
                        left_name: "values",
                        left: values.len(),
                        right_name: "labels",
                        right: labels.len(),
                    });
                }
                let bad = values.values().iter().any(|v| !v.is_finite() || *v < 0.0);
                if values.is_empty() || bad || values.sum() <= 0.0 {
                    return Err(ChartError::InvalidPieValues);
                }
            }
            ChartData::Groups(groups) => {
                if groups.is_empty() {
                    return Err(ChartError::Empty { kind, what: "group list" });
                }
                let no_finite = |g: &Series| !g.values().iter().any(|v| v.is_finite());
                if groups.iter().any(no_finite) {
                    return Err(ChartError::Empty { kind, what: "group" });
                }
            }
        }
        if let Some(ticks) = &self.tick_labels {
            let expected = match &self.data {
                ChartData::Groups(g) => g.len(),
                ChartData::Xy { x, .. } => x.len(),
                _ => ticks.len(),
            };
            if ticks.len() != expected {
                return Err(ChartError::LengthMismatch {
                    kind,
                    left_name: "positions",
                    left: expected,
                    right_name: "tick labels",
                    right: ticks.len(),
                });
            }
        }
        Ok(())
    }
}
