//! Demo configuration
//!
//! Configuration loaded from .counter-demo.toml. Every field has a default,
//! and the default script replays the four reference scenarios.

use std::path::PathBuf;

use counter_store::{add, reset, subtract, CounterAction, NotifyPolicy};
use serde::{Deserialize, Serialize};

const CONFIG_FILE: &str = ".counter-demo.toml";

/// One titled group of actions in the demo script
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub label: String,
    #[serde(default)]
    pub actions: Vec<CounterAction>,
}

impl Scenario {
    pub fn new(label: impl Into<String>, actions: Vec<CounterAction>) -> Self {
        Self {
            label: label.into(),
            actions,
        }
    }
}

/// Demo configuration loaded from .counter-demo.toml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Count the store starts with
    #[serde(default)]
    pub initial_count: i64,

    /// How the store reacts to failing listeners
    #[serde(default)]
    pub notify_policy: NotifyPolicy,

    /// Scenarios run in order after the initial state is reported
    #[serde(default = "default_scenarios")]
    pub scenarios: Vec<Scenario>,
}

fn default_scenarios() -> Vec<Scenario> {
    vec![
        Scenario::new("Incrementing", vec![add(), add()]),
        Scenario::new("Decrementing", vec![subtract()]),
        Scenario::new("Resetting", vec![reset()]),
    ]
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            initial_count: 0,
            notify_policy: NotifyPolicy::default(),
            scenarios: default_scenarios(),
        }
    }
}

impl DemoConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        Self::load_from(&config_search_paths())
    }

    /// Load config from the first readable file in `paths`, or use defaults
    pub fn load_from(paths: &[PathBuf]) -> Self {
        if let Some(content) = load_config_file(paths) {
            match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded demo config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default demo config");
        Self::default()
    }
}

/// CWD config first, then the home directory
fn config_search_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE)];
    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(CONFIG_FILE));
    }
    paths
}

/// Read the content of the first config file that exists
fn load_config_file(paths: &[PathBuf]) -> Option<String> {
    paths.iter().find_map(|path| {
        let content = std::fs::read_to_string(path).ok()?;
        log::debug!("Loaded config from {}", path.display());
        Some(content)
    })
}
