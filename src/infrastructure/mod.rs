// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod env;
pub mod textplots_backend;
