// Textplots-backed implementation of the plot backend seam
use crate::application::plot_backend::{PlotBackend, PlotBackendError};
use crate::domain::chart::{ChartKind, ChartRequest};
use crate::domain::numeric::synthesize_x;
use rgb::RGB8;
use std::panic::{catch_unwind, AssertUnwindSafe};
use textplots::{Chart, ColorPlot, Shape};

pub struct TextplotsBackend;

impl PlotBackend for TextplotsBackend {
    fn render_chart(
        &self,
        request: &ChartRequest,
        colors: &[String],
    ) -> Result<String, PlotBackendError> {
        let mut plotted: Vec<(Vec<(f32, f32)>, RGB8)> = Vec::new();
        for (idx, series) in request.data.iter().enumerate() {
            let y = series.y_values();
            if y.is_empty() {
                continue;
            }
            let x = synthesize_x(&series.x, y.len());
            let points: Vec<(f32, f32)> = x
                .iter()
                .zip(&y)
                .map(|(x, y)| (*x as f32, *y as f32))
                .collect();
            let token = colors
                .get(idx % colors.len().max(1))
                .map(String::as_str)
                .unwrap_or("white");
            plotted.push((points, color_rgb(token)));
        }
        if plotted.is_empty() {
            return Err(PlotBackendError::NoData);
        }

        let xs = plotted.iter().flat_map(|(points, _)| points).map(|p| p.0);
        let x_min = xs.clone().fold(f32::INFINITY, f32::min);
        let x_max = xs.fold(f32::NEG_INFINITY, f32::max);
        // A zero-width x range makes the canvas degenerate.
        let x_max = if x_max > x_min { x_max } else { x_min + 1.0 };

        // The braille canvas is addressed in dots: 2 per column, 4 per row.
        // Clamped so the dot arithmetic cannot overflow on absurd requests.
        let width = request.width.clamp(40, 1024) as u32 * 2;
        let height = request.height.clamp(12, 512) as u32 * 4;

        let shapes: Vec<Shape> = plotted
            .iter()
            .map(|(points, _)| match request.kind {
                ChartKind::Line | ChartKind::Area => Shape::Lines(points),
                ChartKind::Scatter => Shape::Points(points),
                ChartKind::Bar => Shape::Bars(points),
            })
            .collect();

        // drawille colors through `colored`, which disables itself when
        // stdout is not a tty. Color policy is decided upstream from the
        // injected env probe, so force emission on here.
        colored::control::set_override(true);

        let canvas = catch_unwind(AssertUnwindSafe(|| {
            let mut chart = Chart::new(width, height, x_min, x_max);
            let mut view = &mut chart;
            for (shape, (_, color)) in shapes.iter().zip(&plotted) {
                view = view.linecolorplot(shape, *color);
            }
            view.axis();
            view.figures();
            view.to_string()
        }))
        .map_err(|_| PlotBackendError::Backend("text plot canvas rendering failed".to_string()))?;

        let mut out: Vec<String> = Vec::new();
        if let Some(title) = request.title.as_deref().filter(|t| !t.is_empty()) {
            out.push(title.to_string());
        }
        out.push(canvas.trim_end().to_string());

        let x_label = request.x_label.as_deref().filter(|l| !l.is_empty());
        let y_label = request.y_label.as_deref().filter(|l| !l.is_empty());
        if x_label.is_some() || y_label.is_some() {
            out.push(String::new());
        }
        if let Some(label) = x_label {
            out.push(format!("X: {label}"));
        }
        if let Some(label) = y_label {
            out.push(format!("Y: {label}"));
        }

        Ok(out.join("\n"))
    }
}

/// Map a theme color token (name or `#rrggbb`) to an RGB value.
fn color_rgb(token: &str) -> RGB8 {
    let token = token.trim().to_ascii_lowercase();
    if let Some(hex) = token.strip_prefix('#') {
        if hex.len() == 6 {
            if let (Ok(r), Ok(g), Ok(b)) = (
                u8::from_str_radix(&hex[0..2], 16),
                u8::from_str_radix(&hex[2..4], 16),
                u8::from_str_radix(&hex[4..6], 16),
            ) {
                return RGB8 { r, g, b };
            }
        }
    }
    match token.as_str() {
        "black" => RGB8 { r: 0, g: 0, b: 0 },
        "red" => RGB8 { r: 205, g: 49, b: 49 },
        "green" => RGB8 { r: 13, g: 188, b: 121 },
        "yellow" => RGB8 { r: 229, g: 229, b: 16 },
        "blue" => RGB8 { r: 36, g: 114, b: 200 },
        "magenta" => RGB8 { r: 188, g: 63, b: 188 },
        "cyan" => RGB8 { r: 17, g: 168, b: 205 },
        _ => RGB8 { r: 229, g: 229, b: 229 },
    }
}
