// Application layer - Rendering use cases and seams
pub mod ansi;
pub mod dashboard_service;
pub mod mono_renderer;
pub mod plot_backend;
pub mod render_service;
pub mod term_env;
