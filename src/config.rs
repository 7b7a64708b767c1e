use crate::error::HarnessError;
use crate::scenario::Scenario;
use std::env;
use std::path::PathBuf;

pub const SCENARIO_VAR: &str = "SOLID_SCENARIO";
pub const VERIFY_VAR: &str = "SOLID_VERIFY";

/// How the `solid` binary runs. Read from the environment since the binary
/// takes no arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Scenario file to load instead of the built-in tour.
    pub scenario: Option<PathBuf>,
    pub verify: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            scenario: None,
            verify: true,
        }
    }
}

impl HarnessConfig {
    pub fn from_env() -> Self {
        Self::from_vars(env::vars())
    }

    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut config = Self::default();
        for (key, value) in vars {
            let value = value.as_ref().trim();
            match key.as_ref() {
                SCENARIO_VAR if !value.is_empty() => config.scenario = Some(PathBuf::from(value)),
                VERIFY_VAR => config.verify = parse_flag(value).unwrap_or(true),
                _ => {}
            }
        }
        config
    }

    pub fn load_scenario(&self) -> Result<Scenario, HarnessError> {
        match &self.scenario {
            Some(path) => Scenario::from_path(path),
            None => Scenario::builtin(),
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
