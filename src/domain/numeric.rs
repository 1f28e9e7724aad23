// Numeric coercion helpers for caller-supplied values
use serde_json::Value;

const SPARK_TICKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Coerce an arbitrary JSON value to a float; anything non-numeric becomes 0.0.
pub fn safe_float(value: &Value) -> f64 {
    try_float(value).unwrap_or(0.0)
}

fn try_float(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}

/// Build an x-axis for plotting: either every given value coerced to a float,
/// or a 1-based positional index when values are absent or not all numeric.
pub fn synthesize_x(values: &[Value], length: usize) -> Vec<f64> {
    if values.is_empty() {
        return positional(length);
    }
    let mut coerced = Vec::with_capacity(values.len());
    for value in values {
        match try_float(value) {
            Some(v) => coerced.push(v),
            None => return positional(length),
        }
    }
    coerced
}

fn positional(length: usize) -> Vec<f64> {
    (1..=length).map(|i| i as f64).collect()
}

/// Map values onto an 8-level block-glyph ramp scaled between their min and max.
pub fn sparkline(values: &[f64]) -> String {
    if values.is_empty() {
        return String::new();
    }
    let lo = values.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if is_close(lo, hi) {
        return SPARK_TICKS[0].to_string().repeat(values.len());
    }
    values
        .iter()
        .map(|v| {
            let level = ((v - lo) / (hi - lo) * (SPARK_TICKS.len() - 1) as f64) as usize;
            SPARK_TICKS[level.min(SPARK_TICKS.len() - 1)]
        })
        .collect()
}

fn is_close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_safe_float_coercion() {
        assert_eq!(safe_float(&json!(3.5)), 3.5);
        assert_eq!(safe_float(&json!("3.5")), 3.5);
        assert_eq!(safe_float(&json!("abc")), 0.0);
        assert_eq!(safe_float(&json!(null)), 0.0);
        assert_eq!(safe_float(&json!(true)), 1.0);
        assert_eq!(safe_float(&json!([1, 2])), 0.0);
    }

    #[test]
    fn test_synthesize_x_positional_when_empty() {
        assert_eq!(synthesize_x(&[], 3), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_synthesize_x_keeps_numeric_values() {
        let values = vec![json!(10), json!("20"), json!(30.5)];
        assert_eq!(synthesize_x(&values, 3), vec![10.0, 20.0, 30.5]);
    }

    #[test]
    fn test_synthesize_x_all_or_nothing() {
        // One non-numeric value drops the whole axis back to positional.
        let values = vec![json!(10), json!("b")];
        assert_eq!(synthesize_x(&values, 2), vec![1.0, 2.0]);

        let values = vec![json!("a"), json!("b")];
        assert_eq!(synthesize_x(&values, 2), vec![1.0, 2.0]);
    }

    #[test]
    fn test_sparkline_flat_series_uses_lowest_glyph() {
        assert_eq!(sparkline(&[5.0, 5.0, 5.0]), "▁▁▁");
    }

    #[test]
    fn test_sparkline_spans_ramp() {
        let spark = sparkline(&[0.0, 7.0]);
        assert_eq!(spark, "▁█");
    }

    #[test]
    fn test_sparkline_empty() {
        assert_eq!(sparkline(&[]), "");
    }
}
