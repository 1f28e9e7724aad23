// Terminal capability detection through an injectable environment probe

/// Read-only view of process environment variables. Injected so color
/// policy stays testable without mutating the real environment.
pub trait EnvProbe: Send + Sync {
    fn var(&self, name: &str) -> Option<String>;
}

/// Decide if ANSI color should be used for a request.
pub fn should_use_color(env: &dyn EnvProbe, use_color: bool, force_mono: bool) -> bool {
    if force_mono || !use_color {
        return false;
    }
    if env.var("NO_COLOR").is_some_and(|v| !v.is_empty()) {
        return false;
    }
    if env
        .var("TERM")
        .is_some_and(|t| t.eq_ignore_ascii_case("dumb"))
    {
        return false;
    }
    true
}

#[cfg(test)]
pub(crate) mod fake {
    use super::EnvProbe;
    use std::collections::HashMap;

    #[derive(Default)]
    pub struct FakeEnv {
        vars: HashMap<String, String>,
    }

    impl FakeEnv {
        pub fn with(pairs: &[(&str, &str)]) -> Self {
            Self {
                vars: pairs
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            }
        }
    }

    impl EnvProbe for FakeEnv {
        fn var(&self, name: &str) -> Option<String> {
            self.vars.get(name).cloned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fake::FakeEnv;
    use super::*;

    #[test]
    fn test_color_enabled_in_plain_environment() {
        let env = FakeEnv::default();
        assert!(should_use_color(&env, true, false));
    }

    #[test]
    fn test_force_mono_wins_over_use_color() {
        let env = FakeEnv::default();
        assert!(!should_use_color(&env, true, true));
    }

    #[test]
    fn test_use_color_false_disables() {
        let env = FakeEnv::default();
        assert!(!should_use_color(&env, false, false));
    }

    #[test]
    fn test_no_color_variable_disables() {
        let env = FakeEnv::with(&[("NO_COLOR", "1")]);
        assert!(!should_use_color(&env, true, false));
        // Empty NO_COLOR counts as unset.
        let env = FakeEnv::with(&[("NO_COLOR", "")]);
        assert!(should_use_color(&env, true, false));
    }

    #[test]
    fn test_dumb_terminal_disables() {
        let env = FakeEnv::with(&[("TERM", "DUMB")]);
        assert!(!should_use_color(&env, true, false));
        let env = FakeEnv::with(&[("TERM", "xterm-256color")]);
        assert!(should_use_color(&env, true, false));
    }
}
