// Terminal render service - tier selection policy for a single chart
use crate::application::ansi::strip_ansi;
use crate::application::mono_renderer::render_mono_chart;
use crate::application::plot_backend::PlotBackend;
use crate::application::term_env::{EnvProbe, should_use_color};
use crate::domain::chart::{ChartRequest, RenderEngine, RenderMode, RenderResult, TextMode};
use crate::domain::theme::{resolve_cli_theme, CliTheme};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("'data' must be a non-empty array")]
    EmptyData,
    #[error("'panels' must be a non-empty array")]
    EmptyPanels,
}

/// Renders single charts by trying tiers in order: colored text plot,
/// ANSI-stripped text plot, hand-built monochrome fallback. The monochrome
/// tier cannot fail, so every validated request produces printable output.
#[derive(Clone)]
pub struct TerminalRenderService {
    backend: Arc<dyn PlotBackend>,
    env: Arc<dyn EnvProbe>,
}

impl TerminalRenderService {
    pub fn new(backend: Arc<dyn PlotBackend>, env: Arc<dyn EnvProbe>) -> Self {
        Self { backend, env }
    }

    pub fn render_chart(&self, request: &ChartRequest) -> Result<RenderResult, RenderError> {
        if request.data.is_empty() {
            return Err(RenderError::EmptyData);
        }

        let theme = resolve_cli_theme(request.theme.as_ref());

        // force_mono is a hard override: the plot backend is never attempted.
        if request.text_mode == TextMode::Fallback || request.force_mono {
            return Ok(self.mono_result(request, &theme, None));
        }

        match self.backend.render_chart(request, &theme.colors) {
            Ok(text) => {
                if request.text_mode == TextMode::PlotextStripped
                    || !should_use_color(self.env.as_ref(), request.use_color, request.force_mono)
                {
                    tracing::debug!(kind = request.kind.as_str(), "serving stripped text plot");
                    Ok(RenderResult {
                        mode: RenderMode::Mono,
                        engine: RenderEngine::PlotextStripped,
                        theme: theme.name,
                        chart: strip_ansi(&text),
                        fallback_reason: None,
                    })
                } else {
                    Ok(RenderResult {
                        mode: RenderMode::Ansi,
                        engine: RenderEngine::Plotext,
                        theme: theme.name,
                        chart: text,
                        fallback_reason: None,
                    })
                }
            }
            Err(e) => {
                tracing::warn!("plot backend failed, using monochrome fallback: {}", e);
                Ok(self.mono_result(request, &theme, Some(e.to_string())))
            }
        }
    }

    fn mono_result(
        &self,
        request: &ChartRequest,
        theme: &CliTheme,
        fallback_reason: Option<String>,
    ) -> RenderResult {
        RenderResult {
            mode: RenderMode::Mono,
            engine: RenderEngine::Fallback,
            theme: theme.name.clone(),
            chart: render_mono_chart(request, theme.mono_symbol),
            fallback_reason,
        }
    }
}

#[cfg(test)]
pub(crate) mod fakes {
    use crate::application::plot_backend::{PlotBackend, PlotBackendError};
    use crate::domain::chart::ChartRequest;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Backend returning fixed ANSI-colored text, counting invocations.
    pub struct OkBackend {
        pub calls: AtomicUsize,
    }

    impl OkBackend {
        pub fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl PlotBackend for OkBackend {
        fn render_chart(
            &self,
            _request: &ChartRequest,
            _colors: &[String],
        ) -> Result<String, PlotBackendError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok("\x1b[34m⣿⣿⣿\x1b[0m".to_string())
        }
    }

    pub struct FailBackend;

    impl PlotBackend for FailBackend {
        fn render_chart(
            &self,
            _request: &ChartRequest,
            _colors: &[String],
        ) -> Result<String, PlotBackendError> {
            Err(PlotBackendError::Backend("canvas exploded".to_string()))
        }
    }
}
