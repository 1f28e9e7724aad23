// Tool catalog for the dispatch surface
use serde::Serialize;
use serde_json::{json, Value};

#[derive(Debug, Clone, Serialize)]
pub struct ToolDefinition {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// All tool definitions exposed by the server.
pub fn definitions() -> Vec<ToolDefinition> {
    vec![terminal_chart_tool(), terminal_dashboard_tool()]
}

fn series_schema() -> Value {
    json!({
        "type": "array",
        "description": "Array of data series",
        "items": {
            "type": "object",
            "properties": {
                "x": {"type": "array", "description": "X axis values (numbers or labels)"},
                "y": {"type": "array", "description": "Y axis values"},
                "name": {"type": "string", "description": "Series name"}
            },
            "required": ["y"]
        }
    })
}

fn theme_schema() -> Value {
    json!({
        "description": "Theme preset name or inline theme object",
        "oneOf": [
            {"type": "string"},
            {
                "type": "object",
                "properties": {
                    "name": {"type": "string"},
                    "colors": {"type": "array"},
                    "mono_symbol": {"type": "string"}
                }
            }
        ]
    })
}

fn terminal_chart_tool() -> ToolDefinition {
    ToolDefinition {
        name: "render_terminal_chart",
        description: "Renders a chart as terminal text. Uses a colored text \
                      plot when the environment supports it and degrades to a \
                      monochrome sparkline/bar rendering otherwise.",
        input_schema: json!({
            "type": "object",
            "properties": {
                "type": {
                    "type": "string",
                    "enum": ["line", "bar", "scatter", "area"],
                    "description": "Chart kind"
                },
                "data": series_schema(),
                "title": {"type": "string"},
                "x_label": {"type": "string"},
                "y_label": {"type": "string"},
                "width": {"type": "integer", "default": 100, "description": "Width in character cells"},
                "height": {"type": "integer", "default": 28, "description": "Height in character cells"},
                "theme": theme_schema(),
                "use_color": {"type": "boolean", "default": false},
                "force_mono": {"type": "boolean", "default": false},
                "text_mode": {
                    "type": "string",
                    "enum": ["auto", "plotext_stripped", "fallback"],
                    "default": "auto"
                },
                "raw_output": {
                    "type": "boolean",
                    "default": true,
                    "description": "Return the bare chart text instead of a JSON envelope"
                }
            },
            "required": ["type", "data"]
        }),
    }
}

fn terminal_dashboard_tool() -> ToolDefinition {
    ToolDefinition {
        name: "render_terminal_dashboard",
        description: "Renders several charts as one text dashboard, stacking \
                      panels vertically and reporting the weakest rendering \
                      tier any panel needed.",
        input_schema: json!({
            "type": "object",
            "properties": {
                "panels": {
                    "type": "array",
                    "description": "Panel chart specs",
                    "items": {
                        "type": "object",
                        "properties": {
                            "type": {
                                "type": "string",
                                "enum": ["line", "bar", "scatter", "area"],
                                "default": "line"
                            },
                            "data": series_schema(),
                            "title": {"type": "string"},
                            "x_label": {"type": "string"},
                            "y_label": {"type": "string"}
                        },
                        "required": ["data"]
                    }
                },
                "title": {"type": "string"},
                "width": {"type": "integer", "default": 120},
                "height": {"type": "integer", "default": 32},
                "theme": theme_schema(),
                "use_color": {"type": "boolean", "default": false},
                "force_mono": {"type": "boolean", "default": false},
                "text_mode": {
                    "type": "string",
                    "enum": ["auto", "plotext_stripped", "fallback"],
                    "default": "auto"
                },
                "raw_output": {"type": "boolean", "default": true}
            },
            "required": ["panels"]
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definitions_cover_terminal_tools() {
        let names: Vec<&str> = definitions().iter().map(|t| t.name).collect();
        assert_eq!(
            names,
            vec!["render_terminal_chart", "render_terminal_dashboard"]
        );
    }

    #[test]
    fn test_schemas_are_objects_with_required_fields() {
        for tool in definitions() {
            assert_eq!(tool.input_schema["type"], "object");
            assert!(tool.input_schema["required"].is_array());
        }
    }
}
