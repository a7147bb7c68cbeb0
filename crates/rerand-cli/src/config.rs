//! Configuration handling for g16-rerand CLI
//!
//! Priority: CLI flags > environment variables > config file > defaults

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::PathBuf};

const DEFAULT_INPUT: &str = "input.json";
const DEFAULT_OUTPUT: &str = "output.json";

/// Resolved configuration for a run
#[derive(Debug)]
pub struct Config {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub pretty: bool,
    pub quiet: bool,
}

impl Config {
    /// Load configuration from file, environment, and CLI args
    pub fn load(cli: &super::Cli) -> Self {
        let file_config = match ConfigFile::load() {
            Ok(config) => Some(config),
            Err(e) => {
                log::debug!("Config file not used: {:#}", e);
                None
            }
        };
        Self::resolve(cli, file_config.as_ref())
    }

    fn resolve(cli: &super::Cli, file_config: Option<&ConfigFile>) -> Self {
        let defaults = file_config.and_then(|c| c.default.as_ref());

        // clap has already folded G16_INPUT / G16_OUTPUT into the flags
        let input_path = cli
            .input
            .clone()
            .or_else(|| defaults.and_then(|d| d.input.as_deref()).map(expand_tilde))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT));

        let output_path = cli
            .output
            .clone()
            .or_else(|| defaults.and_then(|d| d.output.as_deref()).map(expand_tilde))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

        let pretty = cli.pretty || defaults.and_then(|d| d.pretty).unwrap_or(false);

        Self {
            input_path,
            output_path,
            pretty,
            quiet: cli.quiet,
        }
    }
}

/// Configuration file structure
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    default: Option<DefaultConfig>,
}

#[derive(Debug, Default, Deserialize)]
struct DefaultConfig {
    input: Option<String>,
    output: Option<String>,
    pretty: Option<bool>,
}

impl ConfigFile {
    fn load() -> Result<Self> {
        let path = config_file_path()?;
        if !path.exists() {
            anyhow::bail!("Config file not found");
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        Self::parse(&content)
    }

    fn parse(content: &str) -> Result<Self> {
        let config: ConfigFile = toml::from_str(content)?;
        Ok(config)
    }
}

/// Get config file path
fn config_file_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir().context("Could not find config directory")?;
    Ok(config_dir.join("g16-rerand").join("config.toml"))
}

/// Expand ~ to home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}
