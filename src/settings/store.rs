//! Versioned settings document on disk.
//!
//! The document is `{"version": 1, "settings": {...}}`. Older documents are
//! migrated in memory when loaded; nothing is written back until
//! [`save_settings`] is called.

use super::Settings;
use serde::Serialize;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Version written by [`save_settings`].
pub const CURRENT_VERSION: u64 = 1;

/// Errors reading or writing the settings document.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Failed to read settings file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to write settings file at {path}: {reason}")]
    WriteError { path: PathBuf, reason: String },

    #[error("Invalid settings document in {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Settings document version {found} is newer than supported version {supported}")]
    UnsupportedVersion { found: u64, supported: u64 },

    #[error("Settings document must be a JSON object")]
    NotAnObject,
}

#[derive(Serialize)]
struct Document<'a> {
    version: u64,
    settings: &'a Settings,
}

/// Loads settings from `path`.
///
/// Returns `Ok(None)` if the file does not exist.
///
/// # Errors
///
/// Returns error if the file exists but cannot be read, is not valid JSON,
/// or carries a version newer than [`CURRENT_VERSION`].
pub fn load_settings(path: impl AsRef<Path>) -> Result<Option<Settings>, StoreError> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(path).map_err(|e| StoreError::ReadError {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let settings = parse_document(&contents).map_err(|e| match e {
        StoreError::ParseError { reason, .. } => StoreError::ParseError {
            path: path.to_path_buf(),
            reason,
        },
        other => other,
    })?;

    tracing::info!(path = %path.display(), "Loaded stored settings");
    Ok(Some(settings))
}

/// Parses a settings document, migrating older versions.
///
/// # Errors
///
/// Same as [`load_settings`], minus I/O. Parse errors carry an empty path.
pub fn parse_document(contents: &str) -> Result<Settings, StoreError> {
    let raw: Value = serde_json::from_str(contents).map_err(|e| StoreError::ParseError {
        path: PathBuf::new(),
        reason: e.to_string(),
    })?;

    let migrated = migrate(raw)?;
    let settings = migrated
        .get("settings")
        .cloned()
        .unwrap_or_else(|| Value::Object(Map::new()));

    serde_json::from_value(settings).map_err(|e| StoreError::ParseError {
        path: PathBuf::new(),
        reason: e.to_string(),
    })
}

/// Brings a raw document up to [`CURRENT_VERSION`].
///
/// A missing `version` counts as 0. Version 0 stored a `grades` array
/// instead of a single `grade`, and a question `count` instead of a page
/// count.
///
/// # Errors
///
/// Returns error for non-object documents and future versions.
pub fn migrate(document: Value) -> Result<Value, StoreError> {
    let Value::Object(mut document) = document else {
        return Err(StoreError::NotAnObject);
    };

    let version = document.get("version").and_then(Value::as_u64).unwrap_or(0);
    if version > CURRENT_VERSION {
        return Err(StoreError::UnsupportedVersion {
            found: version,
            supported: CURRENT_VERSION,
        });
    }

    if version < 1 {
        if let Some(Value::Object(settings)) = document.get_mut("settings") {
            migrate_v0_settings(settings);
        }
        tracing::info!(from = version, to = CURRENT_VERSION, "Migrated settings document");
    }

    document.insert("version".to_string(), Value::from(CURRENT_VERSION));
    Ok(Value::Object(document))
}

fn migrate_v0_settings(settings: &mut Map<String, Value>) {
    if !settings.contains_key("grade") {
        if let Some(grades) = settings.remove("grades") {
            let first = grades
                .as_array()
                .and_then(|g| g.first())
                .and_then(Value::as_u64)
                .filter(|g| *g != 0)
                .unwrap_or(1);
            settings.insert("grade".to_string(), Value::from(first));
        }
    }

    if !settings.contains_key("pageCount") && settings.remove("count").is_some() {
        settings.insert("pageCount".to_string(), Value::from(1));
    }
}

/// Writes `settings` to `path` at [`CURRENT_VERSION`], creating parent
/// directories.
///
/// # Errors
///
/// Returns error if the directory or file cannot be written.
pub fn save_settings(path: impl AsRef<Path>, settings: &Settings) -> Result<(), StoreError> {
    let path = path.as_ref();
    let write_error = |e: &dyn std::fmt::Display| StoreError::WriteError {
        path: path.to_path_buf(),
        reason: e.to_string(),
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| write_error(&e))?;
        }
    }

    let document = Document {
        version: CURRENT_VERSION,
        settings,
    };
    let json = serde_json::to_string_pretty(&document).map_err(|e| write_error(&e))?;
    std::fs::write(path, json).map_err(|e| write_error(&e))?;

    tracing::info!(path = %path.display(), "Saved settings");
    Ok(())
}
