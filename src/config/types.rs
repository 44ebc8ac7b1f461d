use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub handbrake: HandBrakeConfig,

    #[serde(default)]
    pub tools: ToolsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HandBrakeConfig {
    /// Niceness HandBrakeCLI runs with (-20..=19, higher yields more)
    #[serde(default = "default_nice")]
    pub nice: i32,

    /// Extra HandBrakeCLI arguments, one argument per entry
    #[serde(default)]
    pub args: Vec<String>,
}

fn default_nice() -> i32 {
    15
}

impl Default for HandBrakeConfig {
    fn default() -> Self {
        Self {
            nice: default_nice(),
            args: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ToolsConfig {
    #[serde(default)]
    pub handbrake_path: Option<PathBuf>,

    #[serde(default)]
    pub nice_path: Option<PathBuf>,
}
