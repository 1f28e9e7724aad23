// Plot backend seam for the colored text-plot tier
use crate::domain::chart::ChartRequest;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlotBackendError {
    #[error("no plottable points in any series")]
    NoData,
    #[error("plot backend failed: {0}")]
    Backend(String),
}

/// Renders a chart request into colored (ANSI) text, or fails. Failure is an
/// expected outcome here; the render service recovers with the monochrome
/// renderer.
pub trait PlotBackend: Send + Sync {
    fn render_chart(
        &self,
        request: &ChartRequest,
        colors: &[String],
    ) -> Result<String, PlotBackendError>;
}
