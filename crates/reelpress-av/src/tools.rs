//! External tool detection and management.

use crate::{Error, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Executable name of the HandBrake command line encoder.
pub const HANDBRAKE: &str = "HandBrakeCLI";

/// Executable used to lower the encoder's scheduling priority.
pub const NICE: &str = "nice";

/// Information about an external tool.
#[derive(Debug, Clone)]
pub struct ToolInfo {
    /// Name of the tool.
    pub name: String,
    /// Whether the tool is available.
    pub available: bool,
    /// Version string if available.
    pub version: Option<String>,
    /// Path to the tool executable.
    pub path: Option<PathBuf>,
}

/// Check if a tool is available and get its information.
///
/// # Example
///
/// ```no_run
/// use reelpress_av::check_tool;
///
/// let info = check_tool("HandBrakeCLI");
/// if info.available {
///     println!("HandBrakeCLI version: {:?}", info.version);
/// }
/// ```
pub fn check_tool(name: &str) -> ToolInfo {
    check_tool_at(name, Path::new(name))
}

/// Check a tool that may live at a configured path instead of `PATH`.
pub fn check_tool_at(name: &str, program: &Path) -> ToolInfo {
    let result = Command::new(program).arg("--version").output();

    match result {
        Ok(output) if output.status.success() => {
            // HandBrakeCLI prints its banner on stderr on some builds.
            let version = first_line(&output.stdout).or_else(|| first_line(&output.stderr));
            let path = which::which(program).ok();

            ToolInfo {
                name: name.to_string(),
                available: true,
                version,
                path,
            }
        }
        _ => ToolInfo {
            name: name.to_string(),
            available: false,
            version: None,
            path: None,
        },
    }
}

fn first_line(bytes: &[u8]) -> Option<String> {
    String::from_utf8_lossy(bytes)
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .map(|s| s.to_string())
}

/// Check every tool an encode needs.
///
/// `handbrake_path` and `nice_path` are optional overrides from configuration.
pub fn check_tools(handbrake_path: Option<&Path>, nice_path: Option<&Path>) -> Vec<ToolInfo> {
    vec![
        check_tool_at(HANDBRAKE, handbrake_path.unwrap_or(Path::new(HANDBRAKE))),
        check_tool_at(NICE, nice_path.unwrap_or(Path::new(NICE))),
    ]
}

/// Require that a tool is available, returning its path.
///
/// # Errors
///
/// Returns an error if the tool is not found.
pub fn require_tool(name: &str) -> Result<PathBuf> {
    which::which(name).map_err(|_| Error::tool_not_found(name))
}

/// Get the path to a tool, preferring a configured path over PATH lookup.
pub fn get_tool_path(name: &str, config_path: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = config_path {
        if path.exists() {
            return Ok(path.to_path_buf());
        }
        tracing::warn!(
            "Configured path for {} does not exist: {:?}, searching PATH",
            name,
            path
        );
    }

    require_tool(name)
}
