//! Configuration module.
//!
//! Precedence: Defaults → Config File → Stored Settings → Env Vars → CLI Args.

mod loader;

pub use loader::{
    apply_cli_overrides, apply_env_overrides, apply_stored_settings, default_config_path,
    default_log_path, default_settings_path, load_config_file, load_config_with_precedence,
    merge_config, CliOverrides, ConfigError, ConfigFile, ResolvedConfig, SettingsOverrides,
    CONFIG_ENV_VAR, SEED_ENV_VAR, TITLE_ENV_VAR,
};
