// Chart request and render result domain models
use crate::domain::numeric::safe_float;
use crate::domain::theme::ThemeRef;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_CHART_WIDTH: usize = 100;
pub const DEFAULT_CHART_HEIGHT: usize = 28;
pub const DEFAULT_DASHBOARD_WIDTH: usize = 120;
pub const DEFAULT_DASHBOARD_HEIGHT: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
    Scatter,
    Area,
}

impl ChartKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ChartKind::Line => "line",
            ChartKind::Bar => "bar",
            ChartKind::Scatter => "scatter",
            ChartKind::Area => "area",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextMode {
    #[default]
    Auto,
    PlotextStripped,
    Fallback,
}

/// One data series: opaque x values, numeric-ish y values, optional name.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Series {
    #[serde(default)]
    pub x: Vec<Value>,
    #[serde(default)]
    pub y: Vec<Value>,
    #[serde(default)]
    pub name: Option<String>,
}

impl Series {
    pub fn display_name(&self, index: usize) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("Series {}", index + 1))
    }

    /// y values coerced to floats, bad values included as 0.0.
    pub fn y_values(&self) -> Vec<f64> {
        self.y.iter().map(safe_float).collect()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChartRequest {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    #[serde(default)]
    pub data: Vec<Series>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub x_label: Option<String>,
    #[serde(default)]
    pub y_label: Option<String>,
    #[serde(default = "default_chart_width")]
    pub width: usize,
    #[serde(default = "default_chart_height")]
    pub height: usize,
    #[serde(default)]
    pub theme: Option<ThemeRef>,
    #[serde(default)]
    pub use_color: bool,
    #[serde(default)]
    pub force_mono: bool,
    #[serde(default)]
    pub text_mode: TextMode,
}

fn default_chart_width() -> usize {
    DEFAULT_CHART_WIDTH
}

fn default_chart_height() -> usize {
    DEFAULT_CHART_HEIGHT
}

/// One panel of a dashboard; kind defaults to a line chart.
#[derive(Debug, Clone, Deserialize)]
pub struct PanelSpec {
    #[serde(rename = "type", default = "default_panel_kind")]
    pub kind: ChartKind,
    #[serde(default)]
    pub data: Vec<Series>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub x_label: Option<String>,
    #[serde(default)]
    pub y_label: Option<String>,
}

fn default_panel_kind() -> ChartKind {
    ChartKind::Line
}

#[derive(Debug, Clone, Deserialize)]
pub struct DashboardRequest {
    #[serde(default)]
    pub panels: Vec<PanelSpec>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default = "default_dashboard_width")]
    pub width: usize,
    #[serde(default = "default_dashboard_height")]
    pub height: usize,
    #[serde(default)]
    pub theme: Option<ThemeRef>,
    #[serde(default)]
    pub use_color: bool,
    #[serde(default)]
    pub force_mono: bool,
    #[serde(default)]
    pub text_mode: TextMode,
}

fn default_dashboard_width() -> usize {
    DEFAULT_DASHBOARD_WIDTH
}

fn default_dashboard_height() -> usize {
    DEFAULT_DASHBOARD_HEIGHT
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    Ansi,
    Mono,
}

impl RenderMode {
    pub fn as_str(self) -> &'static str {
        match self {
            RenderMode::Ansi => "ansi",
            RenderMode::Mono => "mono",
        }
    }
}

/// The rendering engine tier actually used. Identifiers are part of the tool
/// protocol and stay stable regardless of the backing plot library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RenderEngine {
    #[serde(rename = "plotext")]
    Plotext,
    #[serde(rename = "plotext-stripped")]
    PlotextStripped,
    #[serde(rename = "fallback")]
    Fallback,
}

impl RenderEngine {
    pub fn as_str(self) -> &'static str {
        match self {
            RenderEngine::Plotext => "plotext",
            RenderEngine::PlotextStripped => "plotext-stripped",
            RenderEngine::Fallback => "fallback",
        }
    }

    /// Degradation rank: higher means a weaker tier.
    pub fn rank(self) -> u8 {
        match self {
            RenderEngine::Plotext => 0,
            RenderEngine::PlotextStripped => 1,
            RenderEngine::Fallback => 2,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RenderResult {
    pub mode: RenderMode,
    pub engine: RenderEngine,
    pub theme: String,
    pub chart: String,
    pub fallback_reason: Option<String>,
}

#[derive(Debug, Clone)]
pub struct DashboardResult {
    pub mode: RenderMode,
    pub engine: RenderEngine,
    pub theme: String,
    pub dashboard: String,
    pub fallback_reason: Option<String>,
}
