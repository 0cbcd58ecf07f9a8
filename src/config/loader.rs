//! Configuration file loading with precedence handling.

use crate::model::{Grade, GridStyle, PrintMode, RelationFilter};
use crate::settings::Settings;
use crate::worksheet::OutputFormat;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "KANJI_DRILL_CONFIG";
/// Environment variable overriding the random seed.
pub const SEED_ENV_VAR: &str = "KANJI_DRILL_SEED";
/// Environment variable overriding the worksheet title.
pub const TITLE_ENV_VAR: &str = "KANJI_DRILL_TITLE";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML, or a value outside its domain.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/kanji-drill/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// School grade, 1 to 6.
    #[serde(default)]
    pub grade: Option<Grade>,

    /// Print mode tag (e.g. "writing", "strokeCount").
    #[serde(default)]
    pub mode: Option<PrintMode>,

    #[serde(default)]
    pub page_count: Option<u32>,

    /// Cell size in millimetres.
    #[serde(default)]
    pub cell_size: Option<f64>,

    #[serde(default)]
    pub practice_columns: Option<u32>,

    #[serde(default)]
    pub grid_style: Option<GridStyle>,

    /// Shuffle questions.
    #[serde(default)]
    pub random: Option<bool>,

    #[serde(default)]
    pub show_hint: Option<bool>,

    #[serde(default)]
    pub title: Option<String>,

    /// Characters never asked about.
    #[serde(default)]
    pub excluded_kanji: Option<Vec<String>>,

    /// Relations asked in antonym mode.
    #[serde(default)]
    pub antonym_filter: Option<RelationFilter>,

    /// Fixed seed for reproducible worksheets.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Output format: "text", "json" or "layout".
    #[serde(default)]
    pub format: Option<OutputFormat>,

    /// External kanji table replacing the built-in one.
    #[serde(default)]
    pub dataset_path: Option<PathBuf>,

    /// Persisted settings document.
    #[serde(default)]
    pub settings_path: Option<PathBuf>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

impl ConfigFile {
    /// The worksheet settings this file sets.
    pub fn settings_overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            grade: self.grade,
            mode: self.mode,
            page_count: self.page_count,
            cell_size_mm: self.cell_size,
            practice_columns: self.practice_columns,
            grid_style: self.grid_style,
            random: self.random,
            show_hint: self.show_hint,
            title: self.title.clone(),
            excluded_kanji: self.excluded_kanji.clone(),
            antonym_filter: self.antonym_filter,
        }
    }
}

/// Per-field worksheet setting overrides. `None` leaves a field alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsOverrides {
    pub grade: Option<Grade>,
    pub mode: Option<PrintMode>,
    pub page_count: Option<u32>,
    pub cell_size_mm: Option<f64>,
    pub practice_columns: Option<u32>,
    pub grid_style: Option<GridStyle>,
    pub random: Option<bool>,
    pub show_hint: Option<bool>,
    pub title: Option<String>,
    pub excluded_kanji: Option<Vec<String>>,
    pub antonym_filter: Option<RelationFilter>,
}

impl SettingsOverrides {
    /// Applies the overrides. Cell size goes first so practice columns are
    /// clamped against the final cell size.
    pub fn apply(self, mut settings: Settings) -> Settings {
        if let Some(grade) = self.grade {
            settings.grade = grade;
        }
        if let Some(mode) = self.mode {
            settings.mode = mode;
        }
        if let Some(page_count) = self.page_count {
            settings.page_count = page_count;
        }
        if let Some(cell_size) = self.cell_size_mm {
            settings = settings.with_cell_size(cell_size);
        }
        if let Some(columns) = self.practice_columns {
            settings = settings.with_practice_columns(columns);
        }
        if let Some(grid_style) = self.grid_style {
            settings.grid_style = grid_style;
        }
        if let Some(random) = self.random {
            settings.random = random;
        }
        if let Some(show_hint) = self.show_hint {
            settings.show_hint = show_hint;
        }
        if let Some(title) = self.title {
            settings.title = title;
        }
        if let Some(excluded) = self.excluded_kanji {
            settings.excluded_kanji = excluded;
        }
        if let Some(filter) = self.antonym_filter {
            settings.antonym_filter = filter;
        }
        settings
    }
}

/// Overrides taken from command-line flags.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOverrides {
    pub settings: SettingsOverrides,
    pub seed: Option<u64>,
    pub format: Option<OutputFormat>,
    pub dataset_path: Option<PathBuf>,
    pub settings_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, stored settings, env vars, and
/// CLI args.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Worksheet settings, not yet validated.
    pub settings: Settings,
    /// Seed for the random source; `None` seeds from the clock.
    pub seed: Option<u64>,
    pub format: OutputFormat,
    /// External kanji table; `None` uses the built-in one.
    pub dataset_path: Option<PathBuf>,
    /// Persisted settings document.
    pub settings_path: PathBuf,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            settings: Settings::default(),
            seed: None,
            format: OutputFormat::Text,
            dataset_path: None,
            settings_path: default_settings_path(),
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/kanji-drill/kanji-drill.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("kanji-drill").join("kanji-drill.log")
    } else {
        PathBuf::from("kanji-drill.log")
    }
}

/// Resolve default settings document path.
///
/// Returns `~/.local/share/kanji-drill/settings.json` on Unix-like systems.
/// Falls back to the current directory.
pub fn default_settings_path() -> PathBuf {
    if let Some(data_dir) = dirs::data_dir() {
        data_dir.join("kanji-drill").join("settings.json")
    } else {
        PathBuf::from("kanji-drill-settings.json")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
/// Returns `Err` if file exists but cannot be read or parsed.
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/kanji-drill/config.toml` on Unix, appropriate path on
/// other platforms. Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("kanji-drill").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `KANJI_DRILL_CONFIG` environment variable
/// 3. Default path `~/.config/kanji-drill/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        settings: config.settings_overrides().apply(defaults.settings),
        seed: config.seed.or(defaults.seed),
        format: config.format.unwrap_or(defaults.format),
        dataset_path: config.dataset_path.or(defaults.dataset_path),
        settings_path: config.settings_path.unwrap_or(defaults.settings_path),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Replace the worksheet settings with a stored settings document, if any.
///
/// The stored document is a full snapshot, so it wins over the config file
/// but loses to env vars and CLI flags.
pub fn apply_stored_settings(mut config: ResolvedConfig, stored: Option<Settings>) -> ResolvedConfig {
    if let Some(settings) = stored {
        config.settings = settings;
    }
    config
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `KANJI_DRILL_SEED`: Override seed (ignored unless it parses as `u64`)
/// - `KANJI_DRILL_TITLE`: Override worksheet title
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(raw) = std::env::var(SEED_ENV_VAR) {
        match raw.trim().parse::<u64>() {
            Ok(seed) => config.seed = Some(seed),
            Err(e) => tracing::warn!(value = %raw, error = %e, "Ignoring invalid {SEED_ENV_VAR}"),
        }
    }

    if let Ok(title) = std::env::var(TITLE_ENV_VAR) {
        config.settings.title = title;
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Stored Settings → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, cli: CliOverrides) -> ResolvedConfig {
    config.settings = cli.settings.apply(config.settings);

    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(format) = cli.format {
        config.format = format;
    }
    if let Some(path) = cli.dataset_path {
        config.dataset_path = Some(path);
    }
    if let Some(path) = cli.settings_path {
        config.settings_path = path;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
