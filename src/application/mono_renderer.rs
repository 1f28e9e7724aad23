// Monochrome fallback renderer - pure text, guaranteed to succeed
use crate::domain::chart::{ChartKind, ChartRequest};
use crate::domain::numeric::sparkline;
use serde_json::Value;

/// Render a chart as plain text with no color and no plotting backend.
pub fn render_mono_chart(request: &ChartRequest, mono_symbol: char) -> String {
    let mut lines: Vec<String> = Vec::new();
    // Clamped so row caps and column padding stay bounded for absurd
    // caller-supplied dimensions.
    let width = request.width.min(4096);
    let height = request.height.min(4096);

    if let Some(title) = non_empty(request.title.as_deref()) {
        lines.push(title.to_string());
        lines.push("-".repeat(title.chars().count().min(width)));
    }

    match request.kind {
        ChartKind::Line | ChartKind::Scatter | ChartKind::Area => {
            for (idx, series) in request.data.iter().enumerate() {
                let name = truncate_chars(&series.display_name(idx), 18);
                let y_values = series.y_values();
                let mut spark = sparkline(&y_values);
                if spark.chars().count() > width.saturating_sub(20) {
                    let keep = 8.max(width.saturating_sub(23));
                    spark = spark.chars().take(keep).collect::<String>() + "...";
                }
                if y_values.is_empty() {
                    lines.push(format!("{name:<18} (no data)"));
                } else {
                    let lo = y_values.iter().copied().fold(f64::INFINITY, f64::min);
                    let hi = y_values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
                    lines.push(format!("{name:<18} {spark}  min={lo:.2} max={hi:.2}"));
                }
            }
        }
        ChartKind::Bar => {
            let mut rows: Vec<(String, f64)> = Vec::new();
            let mut max_val = 0.0_f64;
            for series in &request.data {
                let y_values = series.y_values();
                for (x, y) in series.x.iter().zip(y_values) {
                    rows.push((value_label(x), y));
                    max_val = max_val.max(y);
                }
            }

            let bar_width = 10.max(width.saturating_sub(28));
            for (label, value) in rows.into_iter().take(5.max(height * 2)) {
                let size = if max_val > 0.0 {
                    ((value / max_val) * bar_width as f64).round() as usize
                } else {
                    0
                };
                let len = if value > 0.0 { size.max(1) } else { 0 };
                let bar = mono_symbol.to_string().repeat(len);
                lines.push(format!(
                    "{:<14} | {:<bar_width$} {:.2}",
                    truncate_chars(&label, 14),
                    bar,
                    value,
                ));
            }
        }
    }

    let x_label = non_empty(request.x_label.as_deref());
    let y_label = non_empty(request.y_label.as_deref());
    if x_label.is_some() || y_label.is_some() {
        lines.push(String::new());
    }
    if let Some(label) = x_label {
        lines.push(format!("X: {label}"));
    }
    if let Some(label) = y_label {
        lines.push(format!("Y: {label}"));
    }

    lines.join("\n")
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

fn value_label(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
