mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Lowest and highest niceness accepted by `nice -n`.
pub const NICE_RANGE: std::ops::RangeInclusive<i32> = -20..=19;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    let default_paths = [
        "./reelpress.toml",
        "./config.toml",
        "~/.config/reelpress/config.toml",
        "/etc/reelpress/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            tracing::debug!("Using config file {:?}", path);
            return load_config(path);
        }
    }

    Ok(Config::default())
}

/// Validate configuration
fn validate_config(config: &Config) -> Result<()> {
    if !NICE_RANGE.contains(&config.handbrake.nice) {
        anyhow::bail!(
            "HandBrake nice value {} is outside {}..={}",
            config.handbrake.nice,
            NICE_RANGE.start(),
            NICE_RANGE.end()
        );
    }

    if config.handbrake.args.iter().any(|a| a.trim().is_empty()) {
        anyhow::bail!("HandBrake args cannot contain empty entries");
    }

    for (name, path) in [
        ("handbrake_path", &config.tools.handbrake_path),
        ("nice_path", &config.tools.nice_path),
    ] {
        if let Some(p) = path {
            if !p.exists() {
                tracing::warn!("Configured {} does not exist: {:?}", name, p);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.handbrake.nice, 15);
        assert!(config.handbrake.args.is_empty());
        assert!(config.tools.handbrake_path.is_none());
        assert!(config.tools.nice_path.is_none());
    }

    #[test]
    fn test_load_full_config() {
        let file = write_config(
            r#"
            [handbrake]
            nice = 19
            args = ["--preset", "HQ 1080p30 Surround", "--all-audio"]

            [tools]
            handbrake_path = "/opt/handbrake/HandBrakeCLI"
            "#,
        );

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.handbrake.nice, 19);
        assert_eq!(
            config.handbrake.args,
            vec!["--preset", "HQ 1080p30 Surround", "--all-audio"]
        );
        assert_eq!(
            config.tools.handbrake_path.as_deref(),
            Some(Path::new("/opt/handbrake/HandBrakeCLI"))
        );
        assert!(config.tools.nice_path.is_none());
    }

    #[test]
    fn test_load_empty_config_uses_defaults() {
        let file = write_config("");
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.handbrake.nice, 15);
    }

    #[test]
    fn test_rejects_out_of_range_nice() {
        let file = write_config("[handbrake]\nnice = 25\n");
        let err = load_config(file.path()).unwrap_err();
        assert!(err.to_string().contains("outside"), "unexpected error: {err}");
    }

    #[test]
    fn test_rejects_empty_arg() {
        let file = write_config("[handbrake]\nargs = [\"-e\", \" \"]\n");
        assert!(load_config(file.path()).is_err());
    }

    #[test]
    fn test_rejects_invalid_toml() {
        let file = write_config("[handbrake\nnice = 1");
        let err = load_config(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_missing_custom_path() {
        let result = load_config_or_default(Some(Path::new("/no/such/reelpress.toml")));
        assert!(result.is_err());
    }
}
