use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_SOURCE_URL: &str = "https://api.quicksell.co/v1/internal/frontend-assignment";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub preferences: PreferencesConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_source_url")]
    pub url: String,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Read the board payload from this file instead of the remote endpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

fn default_source_url() -> String {
    DEFAULT_SOURCE_URL.to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: default_source_url(),
            timeout_secs: default_timeout(),
            file: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PreferencesConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

pub fn config_dir() -> Result<PathBuf> {
    let dir = directories::ProjectDirs::from("", "", "ticketboard")
        .context("Could not determine config directory")?
        .config_dir()
        .to_path_buf();
    Ok(dir)
}

pub fn default_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// Where the `groupBy` / `sortBy` preferences live
pub fn preferences_path(config: &Config) -> Result<PathBuf> {
    match &config.preferences.path {
        Some(p) => Ok(p.clone()),
        None => Ok(config_dir()?.join("preferences.json")),
    }
}

/// Load the config file.
///
/// A missing default config yields defaults; an explicit path must exist.
pub fn load(path: Option<&Path>) -> Result<Config> {
    let path = match path {
        Some(p) => {
            if !p.exists() {
                anyhow::bail!("Config file not found at {}", p.display());
            }
            p.to_path_buf()
        }
        None => {
            let p = default_config_path()?;
            if !p.exists() {
                tracing::debug!("No config at {}, using defaults", p.display());
                return Ok(Config::default());
            }
            p
        }
    };

    load_from_path(&path)
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config from {}", path.display()))?;

    Ok(config)
}

pub fn save_to_path(path: &Path, config: &Config) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;

    Ok(())
}

pub fn init_wizard() -> Result<()> {
    use std::io::{self, Write};

    println!("Ticketboard Configuration Wizard");
    println!("================================\n");

    let config_path = default_config_path()?;
    if config_path.exists() {
        print!("Config already exists at {}. Overwrite? [y/N] ", config_path.display());
        io::stdout().flush()?;
        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    print!("Ticket source URL (press Enter for {}): ", DEFAULT_SOURCE_URL);
    io::stdout().flush()?;
    let mut url = String::new();
    io::stdin().read_line(&mut url)?;

    print!("Request timeout in seconds (press Enter for {}): ", default_timeout());
    io::stdout().flush()?;
    let mut timeout = String::new();
    io::stdin().read_line(&mut timeout)?;

    let timeout_secs = match timeout.trim() {
        "" => default_timeout(),
        raw => raw
            .parse()
            .with_context(|| format!("Invalid timeout {:?}", raw))?,
    };

    let config = Config {
        source: SourceConfig {
            url: if url.trim().is_empty() {
                default_source_url()
            } else {
                url.trim().to_string()
            },
            timeout_secs,
            file: None,
        },
        preferences: PreferencesConfig::default(),
    };

    save_to_path(&config_path, &config)?;

    println!("\nConfig saved to {}", config_path.display());
    println!("Run `ticketboard` to open the board.");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.source.url, DEFAULT_SOURCE_URL);
        assert_eq!(config.source.timeout_secs, 30);
        assert!(config.source.file.is_none());
        assert!(config.preferences.path.is_none());
    }

    #[test]
    fn test_partial_source_section() {
        let config: Config = toml::from_str(
            r#"
            [source]
            file = "/tmp/board.json"
            "#,
        )
        .unwrap();
        assert_eq!(config.source.url, DEFAULT_SOURCE_URL);
        assert_eq!(config.source.file, Some(PathBuf::from("/tmp/board.json")));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.source.timeout_secs = 5;
        config.preferences.path = Some(temp_dir.path().join("prefs.json"));
        save_to_path(&path, &config).unwrap();

        let loaded = load(Some(path.as_path())).unwrap();
        assert_eq!(loaded.source.timeout_secs, 5);
        assert_eq!(preferences_path(&loaded).unwrap(), temp_dir.path().join("prefs.json"));
    }

    #[test]
    fn test_explicit_missing_path_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.toml");
        assert!(load(Some(missing.as_path())).is_err());
    }
}
