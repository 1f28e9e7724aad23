// HTTP request handlers - tool-call dispatch
use crate::application::render_service::RenderError;
use crate::domain::chart::{ChartRequest, DashboardRequest};
use crate::presentation::app_state::AppState;
use crate::presentation::tools::definitions;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use thiserror::Error;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// List the tool catalog
pub async fn list_tools() -> Json<Value> {
    Json(json!({ "tools": definitions() }))
}

/// Invoke a tool by name with a JSON argument map
pub async fn call_tool(
    Path(name): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(arguments): Json<Value>,
) -> Response {
    match dispatch_tool(&state, &name, arguments) {
        Ok(ToolReply::Raw(text)) => text.into_response(),
        Ok(ToolReply::Envelope(body)) => Json(body).into_response(),
        Err(e) => {
            let status = match e {
                DispatchError::UnknownTool(_) => StatusCode::NOT_FOUND,
                _ => StatusCode::BAD_REQUEST,
            };
            (
                status,
                Json(json!({ "success": false, "error": e.to_string() })),
            )
                .into_response()
        }
    }
}

#[derive(Debug)]
pub enum ToolReply {
    Raw(String),
    Envelope(Value),
}

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("unknown tool: {0}")]
    UnknownTool(String),
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Render(#[from] RenderError),
}

#[derive(Debug, Deserialize)]
struct ChartToolArgs {
    #[serde(flatten)]
    request: ChartRequest,
    #[serde(default = "default_raw_output")]
    raw_output: bool,
}

#[derive(Debug, Deserialize)]
struct DashboardToolArgs {
    #[serde(flatten)]
    request: DashboardRequest,
    #[serde(default = "default_raw_output")]
    raw_output: bool,
}

fn default_raw_output() -> bool {
    true
}

/// Route a named tool call to the matching service. Kept synchronous and
/// free of HTTP types so dispatch behavior is testable directly.
pub fn dispatch_tool(
    state: &AppState,
    name: &str,
    arguments: Value,
) -> Result<ToolReply, DispatchError> {
    match name {
        "render_terminal_chart" => {
            let args: ChartToolArgs = parse_args(arguments)?;
            let result = state.render_service.render_chart(&args.request)?;
            if args.raw_output {
                Ok(ToolReply::Raw(result.chart))
            } else {
                Ok(ToolReply::Envelope(envelope(
                    result.mode.as_str(),
                    result.engine.as_str(),
                    result.theme,
                    "chart",
                    result.chart,
                    result.fallback_reason,
                )))
            }
        }
        "render_terminal_dashboard" => {
            let args: DashboardToolArgs = parse_args(arguments)?;
            let result = state.dashboard_service.render_dashboard(&args.request)?;
            if args.raw_output {
                Ok(ToolReply::Raw(result.dashboard))
            } else {
                Ok(ToolReply::Envelope(envelope(
                    result.mode.as_str(),
                    result.engine.as_str(),
                    result.theme,
                    "dashboard",
                    result.dashboard,
                    result.fallback_reason,
                )))
            }
        }
        other => Err(DispatchError::UnknownTool(other.to_string())),
    }
}

fn parse_args<T: serde::de::DeserializeOwned>(arguments: Value) -> Result<T, DispatchError> {
    serde_json::from_value(arguments).map_err(|e| DispatchError::InvalidArguments(e.to_string()))
}

fn envelope(
    render_mode: &str,
    engine: &str,
    theme: String,
    body_key: &str,
    body: String,
    fallback_reason: Option<String>,
) -> Value {
    let mut reply = json!({
        "success": true,
        "render_mode": render_mode,
        "engine": engine,
        "theme": theme,
    });
    reply[body_key] = Value::String(body);
    if let Some(reason) = fallback_reason {
        reply["fallback_reason"] = Value::String(reason);
    }
    reply
}
