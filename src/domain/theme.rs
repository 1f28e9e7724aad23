// CLI theme presets and resolution
use serde::Deserialize;
use serde_json::Value;

/// A resolved terminal color theme. `mono_symbol` being a `char` keeps the
/// single-character invariant by construction.
#[derive(Debug, Clone)]
pub struct CliTheme {
    pub name: String,
    pub colors: Vec<String>,
    pub mono_symbol: char,
}

/// A theme reference as supplied by callers: a preset name or an inline theme.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ThemeRef {
    Name(String),
    Custom(CustomTheme),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomTheme {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub colors: Option<Value>,
    #[serde(default)]
    pub mono_symbol: Option<String>,
}

fn preset(name: &str) -> Option<CliTheme> {
    match name {
        "dark_corporate_cli" => Some(dark_corporate()),
        "pastel_startup_cli" => Some(pastel_startup()),
        _ => None,
    }
}

fn dark_corporate() -> CliTheme {
    CliTheme {
        name: "dark_corporate_cli".to_string(),
        colors: color_list(&["blue", "green", "yellow", "magenta", "cyan", "white"]),
        mono_symbol: '#',
    }
}

fn pastel_startup() -> CliTheme {
    CliTheme {
        name: "pastel_startup_cli".to_string(),
        colors: color_list(&["cyan", "magenta", "yellow", "green", "blue", "white"]),
        mono_symbol: '*',
    }
}

fn color_list(colors: &[&str]) -> Vec<String> {
    colors.iter().map(|c| c.to_string()).collect()
}

fn default_theme() -> CliTheme {
    dark_corporate()
}

/// Resolve a theme reference to a concrete theme. Total: unknown names and
/// malformed inline themes degrade to the default instead of failing.
pub fn resolve_cli_theme(theme: Option<&ThemeRef>) -> CliTheme {
    match theme {
        None => default_theme(),
        Some(ThemeRef::Name(name)) => preset(name).unwrap_or_else(default_theme),
        Some(ThemeRef::Custom(custom)) => {
            let colors = match custom.colors.as_ref().and_then(Value::as_array) {
                Some(list) if !list.is_empty() => list
                    .iter()
                    .map(|c| match c {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect(),
                _ => default_theme().colors,
            };
            let mono_symbol = custom
                .mono_symbol
                .as_deref()
                .and_then(|s| s.chars().next())
                .unwrap_or('#');
            CliTheme {
                name: custom
                    .name
                    .clone()
                    .unwrap_or_else(|| "custom_cli_theme".to_string()),
                colors,
                mono_symbol,
            }
        }
    }
}
