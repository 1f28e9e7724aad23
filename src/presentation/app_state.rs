// Application state for HTTP handlers
use crate::application::dashboard_service::DashboardService;
use crate::application::render_service::TerminalRenderService;

#[derive(Clone)]
pub struct AppState {
    pub render_service: TerminalRenderService,
    pub dashboard_service: DashboardService,
}
