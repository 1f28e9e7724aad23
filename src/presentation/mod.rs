// Presentation layer - HTTP tool-call surface
pub mod app_state;
pub mod handlers;
pub mod tools;
