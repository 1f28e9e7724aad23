// Process environment probe
use crate::application::term_env::EnvProbe;

/// Reads real process environment variables, sampled at call time.
pub struct ProcessEnv;

impl EnvProbe for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}
