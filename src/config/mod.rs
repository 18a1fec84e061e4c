pub mod init;
pub mod overrides;
mod schema;

pub use overrides::{Overrides, WeightOverride};
pub use schema::Config;

use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Get the config directory path (~/.config/states-ranker/)
pub fn get_config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("states-ranker"))
}

/// Get the default config file path (~/.config/states-ranker/config.yaml)
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("config.yaml"))
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses the default path,
///   and a missing default file means "use defaults".
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let explicit = path.is_some();
    let config_path = match path {
        Some(p) => p,
        None => get_config_path()?,
    };

    if !config_path.exists() {
        if explicit {
            anyhow::bail!("Config file not found at {}", config_path.display());
        }
        tracing::debug!(path = %config_path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config = parse_config(&config_content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", config_path.display()))?;

    tracing::debug!(path = %config_path.display(), "loaded config");
    Ok(config)
}

/// Parse configuration from YAML text. An empty document is the default config.
pub fn parse_config(content: &str) -> Result<Config> {
    if content.trim().is_empty() {
        return Ok(Config::default());
    }
    let config: Config = serde_saphyr::from_str(content)?;
    Ok(config)
}

/// Write configuration as YAML atomically, creating parent directories.
///
/// The file is never left half-written.
pub fn save_config(path: &Path, config: &Config) -> Result<()> {
    let yaml = serde_saphyr::to_string(config)
        .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;
    file.write_all(yaml.as_bytes())
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    file.commit()
        .with_context(|| format!("Failed to save config to {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{AttributeKey, RawNumber, WeightConfig};

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
data: /tmp/states.csv
weights:
  ideal_average_temp: 65
  coastal:
    prioritized: true
  cost:
    weight: 0.5
"#;
        let config = parse_config(yaml).unwrap();
        assert_eq!(config.data, Some(PathBuf::from("/tmp/states.csv")));
        assert_eq!(config.weights.ideal_average_temp, Some(RawNumber::Number(65.0)));

        let weights = WeightConfig::from_raw(&config.weights);
        assert!(weights.is_prioritized(AttributeKey::Coastal));
        assert_eq!(weights.weight(AttributeKey::Cost), 0.5);
    }

    #[test]
    fn test_parse_empty_config() {
        assert_eq!(parse_config("").unwrap(), Config::default());
        assert_eq!(parse_config("{}").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_non_scalar_weights_fall_back() {
        let yaml = r#"
weights:
  ideal_average_temp: [60]
  cost:
    weight: true
  coastal:
    prioritized: [true]
"#;
        let config = parse_config(yaml).unwrap();
        let weights = WeightConfig::from_raw(&config.weights);

        assert_eq!(weights, WeightConfig::default());
        assert!(crate::scoring::validate_weights(&config.weights).is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_top_level() {
        assert!(parse_config("queries: []\n").is_err());
    }

    #[test]
    fn test_load_explicit_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(Some(dir.path().join("nope.yaml"))).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_load_invalid_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "weights: [unclosed").unwrap();

        let err = load_config(Some(path)).unwrap_err();
        assert!(err.to_string().contains("invalid YAML"));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");

        let weights = WeightConfig::default()
            .prioritize(AttributeKey::Education)
            .with_weight(AttributeKey::Beauty, 1.5);
        let config = Config {
            data: None,
            weights: (&weights).into(),
        };

        save_config(&path, &config).unwrap();
        let loaded = load_config(Some(path)).unwrap();

        assert_eq!(loaded, config);
        assert_eq!(WeightConfig::from_raw(&loaded.weights), weights);
    }
}
