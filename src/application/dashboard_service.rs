// Dashboard compositor - lays out independently rendered panels
use crate::application::render_service::{RenderError, TerminalRenderService};
use crate::domain::chart::{
    ChartRequest, DashboardRequest, DashboardResult, RenderEngine, RenderMode,
};
use crate::domain::theme::resolve_cli_theme;

#[derive(Clone)]
pub struct DashboardService {
    render_service: TerminalRenderService,
}

impl DashboardService {
    pub fn new(render_service: TerminalRenderService) -> Self {
        Self { render_service }
    }

    /// Render every panel through the single-chart path and merge the
    /// results, reporting the weakest rendering tier used by any panel.
    pub fn render_dashboard(
        &self,
        request: &DashboardRequest,
    ) -> Result<DashboardResult, RenderError> {
        if request.panels.is_empty() {
            return Err(RenderError::EmptyPanels);
        }

        let panel_width = request.width.max(40);
        let panel_height = (request.height / request.panels.len()).max(10);

        let mut mode = RenderMode::Ansi;
        let mut engine = RenderEngine::Plotext;
        let mut reasons: Vec<String> = Vec::new();
        let mut rendered: Vec<String> = Vec::new();

        for (idx, panel) in request.panels.iter().enumerate() {
            let title = panel
                .title
                .clone()
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| format!("Panel {}", idx + 1));
            let chart_request = ChartRequest {
                kind: panel.kind,
                data: panel.data.clone(),
                title: Some(title),
                x_label: panel.x_label.clone(),
                y_label: panel.y_label.clone(),
                width: panel_width,
                height: panel_height,
                theme: request.theme.clone(),
                use_color: request.use_color,
                force_mono: request.force_mono,
                text_mode: request.text_mode,
            };
            let result = self.render_service.render_chart(&chart_request)?;

            if result.mode == RenderMode::Mono {
                mode = RenderMode::Mono;
            }
            engine = weakest_engine(engine, result.engine);
            if let Some(reason) = result.fallback_reason {
                reasons.push(reason);
            }
            rendered.push(result.chart);
        }

        tracing::debug!(
            panels = request.panels.len(),
            engine = engine.as_str(),
            "dashboard rendered"
        );

        let mut blocks: Vec<String> = Vec::new();
        if let Some(title) = request.title.as_deref().filter(|t| !t.is_empty()) {
            blocks.push(title.to_string());
            blocks.push("=".repeat(title.chars().count().max(12).min(request.width)));
        }
        blocks.push(rendered.join("\n\n"));

        Ok(DashboardResult {
            mode,
            engine,
            theme: resolve_cli_theme(request.theme.as_ref()).name,
            dashboard: blocks.join("\n"),
            fallback_reason: if reasons.is_empty() {
                None
            } else {
                Some(reasons.join("; "))
            },
        })
    }
}

/// The weaker of two engine tiers, by degradation rank.
fn weakest_engine(current: RenderEngine, seen: RenderEngine) -> RenderEngine {
    if seen.rank() > current.rank() {
        seen
    } else {
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::plot_backend::{PlotBackend, PlotBackendError};
    use crate::application::render_service::fakes::OkBackend;
    use crate::application::term_env::fake::FakeEnv;
    use crate::domain::chart::ChartKind;
    use serde_json::json;
    use std::sync::Arc;

    fn request(json: serde_json::Value) -> DashboardRequest {
        serde_json::from_value(json).unwrap()
    }

    fn service(backend: Arc<dyn PlotBackend>, env: FakeEnv) -> DashboardService {
        DashboardService::new(TerminalRenderService::new(backend, Arc::new(env)))
    }

    /// Fails only for bar panels, so mixed dashboards exercise tier mixing.
    struct BarFailBackend;

    impl PlotBackend for BarFailBackend {
        fn render_chart(
            &self,
            request: &ChartRequest,
            _colors: &[String],
        ) -> Result<String, PlotBackendError> {
            match request.kind {
                ChartKind::Bar => Err(PlotBackendError::Backend("bars unsupported".to_string())),
                _ => Ok("\x1b[32m⣤⣤⣤\x1b[0m".to_string()),
            }
        }
    }

    #[test]
    fn test_empty_panels_is_a_validation_error() {
        let svc = service(Arc::new(OkBackend::new()), FakeEnv::default());
        let err = svc
            .render_dashboard(&request(json!({"panels": []})))
            .unwrap_err();
        assert!(matches!(err, RenderError::EmptyPanels));
    }

    #[test]
    fn test_all_ansi_panels_stay_ansi() {
        let svc = service(Arc::new(OkBackend::new()), FakeEnv::default());
        let result = svc
            .render_dashboard(&request(json!({
                "panels": [
                    {"data": [{"y": [1, 2]}]},
                    {"data": [{"y": [3, 4]}]}
                ],
                "use_color": true
            })))
            .unwrap();
        assert_eq!(result.mode, RenderMode::Ansi);
        assert_eq!(result.engine, RenderEngine::Plotext);
        assert!(result.fallback_reason.is_none());
    }

    #[test]
    fn test_weakest_tier_wins() {
        // Line panel renders colored but gets stripped (use_color off),
        // bar panel fails over to the monochrome renderer.
        let svc = service(Arc::new(BarFailBackend), FakeEnv::default());
        let result = svc
            .render_dashboard(&request(json!({
                "panels": [
                    {"data": [{"y": [1, 2]}]},
                    {"type": "bar", "data": [{"x": ["A"], "y": [1]}]}
                ]
            })))
            .unwrap();
        assert_eq!(result.mode, RenderMode::Mono);
        assert_eq!(result.engine, RenderEngine::Fallback);
        assert_eq!(
            result.fallback_reason.as_deref(),
            Some("plot backend failed: bars unsupported")
        );
    }

    #[test]
    fn test_weakest_engine_ranking() {
        let worst = [
            RenderEngine::Plotext,
            RenderEngine::PlotextStripped,
            RenderEngine::Fallback,
        ]
        .into_iter()
        .fold(RenderEngine::Plotext, weakest_engine);
        assert_eq!(worst, RenderEngine::Fallback);

        let worst = [RenderEngine::Plotext, RenderEngine::PlotextStripped]
            .into_iter()
            .fold(RenderEngine::Plotext, weakest_engine);
        assert_eq!(worst, RenderEngine::PlotextStripped);
    }

    #[test]
    fn test_panel_titles_defaulted_and_title_underlined() {
        let svc = service(Arc::new(OkBackend::new()), FakeEnv::default());
        let result = svc
            .render_dashboard(&request(json!({
                "panels": [
                    {"data": [{"y": [1]}]},
                    {"title": "Memory", "data": [{"y": [2]}]}
                ],
                "title": "Ops",
                "force_mono": true,
                "width": 60
            })))
            .unwrap();
        let lines: Vec<&str> = result.dashboard.lines().collect();
        assert_eq!(lines[0], "Ops");
        assert_eq!(lines[1], "============");
        assert!(result.dashboard.contains("Panel 1"));
        assert!(result.dashboard.contains("Memory"));
        // Panels separated by a blank line.
        assert!(result.dashboard.contains("\n\n"));
    }

    #[test]
    fn test_reasons_joined() {
        let svc = service(Arc::new(BarFailBackend), FakeEnv::default());
        let result = svc
            .render_dashboard(&request(json!({
                "panels": [
                    {"type": "bar", "data": [{"x": ["A"], "y": [1]}]},
                    {"type": "bar", "data": [{"x": ["B"], "y": [2]}]}
                ]
            })))
            .unwrap();
        assert_eq!(
            result.fallback_reason.as_deref(),
            Some("plot backend failed: bars unsupported; plot backend failed: bars unsupported")
        );
    }
}
