mod init;
mod schema;

pub use init::write_starter_config;
pub use schema::{
    default_facilitators, ColumnsConfig, Config, Facilitator, ProgramInfo, RosterConfig,
    SearchConfig,
};

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::scoring::validate_scoring;

/// Get the config directory path (~/.config/arcade-board/)
pub fn get_config_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Could not determine home directory");
    home.join(".config").join("arcade-board")
}

/// Get the default config file path (~/.config/arcade-board/config.yaml)
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.yaml")
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses default path
///   (~/.config/arcade-board/config.yaml)
///
/// With an explicit path the file must exist. With the default path a
/// missing file simply yields the built-in defaults, so the tool works
/// with no setup at all.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let explicit = path.is_some();
    let config_path = path.unwrap_or_else(get_config_path);

    if !config_path.exists() {
        if explicit {
            anyhow::bail!("Config file not found at {}", config_path.display());
        }
        return Ok(Config::default());
    }

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", config_path.display()))?;

    Ok(config)
}

/// Validate a loaded configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Err(scoring_errors) = validate_scoring(&config.scoring) {
        errors.extend(scoring_errors);
    }

    let columns = &config.roster.columns;
    for (field, value) in [
        ("roster.columns.name", &columns.name),
        ("roster.columns.profile", &columns.profile),
        ("roster.columns.milestone", &columns.milestone),
        ("roster.columns.games", &columns.games),
    ] {
        if value.is_empty() {
            errors.push(format!("{field}: must not be empty"));
        }
    }

    if let Some(max_age) = config.roster.max_age.as_deref() {
        if let Err(e) = humantime::parse_duration(max_age) {
            errors.push(format!("roster.max_age: invalid duration {max_age:?} ({e})"));
        }
    }

    if config.search.facilitator_triggers.iter().any(String::is_empty) {
        errors.push("search.facilitator_triggers: entries must not be empty".to_string());
    }
    if config.search.program_keywords.iter().any(String::is_empty) {
        errors.push("search.program_keywords: entries must not be empty".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
