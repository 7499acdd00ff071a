// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Vitrine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Vitrine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::model::Exhibit;
use crate::nav::{validate_exhibit, NavError};

/// Top-level key an exhibit may be nested under (site configuration files do this).
pub const EXHIBIT_WRAPPER_KEY: &str = "Exhibit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExhibitFormat {
    Yaml,
    Json,
}

impl ExhibitFormat {
    /// Picks the format from the file extension (`.yaml`, `.yml`, `.json`; case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub enum StoreError {
    Io { path: PathBuf, source: io::Error },
    Yaml { path: PathBuf, source: serde_yaml::Error },
    Json { path: PathBuf, source: serde_json::Error },
    UnsupportedFormat { path: PathBuf },
    Invalid { path: PathBuf, source: NavError },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "io error at {path:?}: {source}"),
            Self::Yaml { path, source } => write!(f, "yaml error at {path:?}: {source}"),
            Self::Json { path, source } => write!(f, "json error at {path:?}: {source}"),
            Self::UnsupportedFormat { path } => {
                write!(f, "unsupported exhibit format at {path:?} (expected .yaml, .yml or .json)")
            }
            Self::Invalid { path, source } => write!(f, "invalid exhibit at {path:?}: {source}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Yaml { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::UnsupportedFormat { .. } => None,
            Self::Invalid { source, .. } => Some(source),
        }
    }
}

/// Reads and validates an exhibit document.
pub fn load_exhibit(path: &Path) -> Result<Exhibit, StoreError> {
    let format = ExhibitFormat::from_path(path)
        .ok_or_else(|| StoreError::UnsupportedFormat { path: path.to_path_buf() })?;
    let source = fs::read_to_string(path)
        .map_err(|source| StoreError::Io { path: path.to_path_buf(), source })?;

    let exhibit = match format {
        ExhibitFormat::Yaml => parse_exhibit_yaml(&source, path)?,
        ExhibitFormat::Json => parse_exhibit_json(&source, path)?,
    };
    info!(
        path = %path.display(),
        stories = exhibit.stories.len(),
        groups = exhibit.groups.len(),
        "loaded exhibit"
    );
    Ok(exhibit)
}

/// Parses and validates a YAML exhibit. `path` is only used for error reporting.
pub fn parse_exhibit_yaml(source: &str, path: &Path) -> Result<Exhibit, StoreError> {
    let yaml_err = |source| StoreError::Yaml { path: path.to_path_buf(), source };

    let mut document: serde_yaml::Value = serde_yaml::from_str(source).map_err(yaml_err)?;
    let wrapped = document.as_mapping_mut().and_then(|map| map.remove(EXHIBIT_WRAPPER_KEY));
    if let Some(inner) = wrapped {
        debug!(key = EXHIBIT_WRAPPER_KEY, "unwrapping exhibit document");
        document = inner;
    }
    let exhibit: Exhibit = serde_yaml::from_value(document).map_err(yaml_err)?;
    validated(exhibit, path)
}

/// Parses and validates a JSON exhibit. `path` is only used for error reporting.
pub fn parse_exhibit_json(source: &str, path: &Path) -> Result<Exhibit, StoreError> {
    let json_err = |source| StoreError::Json { path: path.to_path_buf(), source };

    let mut document: serde_json::Value = serde_json::from_str(source).map_err(json_err)?;
    let wrapped = document.as_object_mut().and_then(|map| map.remove(EXHIBIT_WRAPPER_KEY));
    if let Some(inner) = wrapped {
        debug!(key = EXHIBIT_WRAPPER_KEY, "unwrapping exhibit document");
        document = inner;
    }
    let exhibit: Exhibit = serde_json::from_value(document).map_err(json_err)?;
    validated(exhibit, path)
}

fn validated(exhibit: Exhibit, path: &Path) -> Result<Exhibit, StoreError> {
    validate_exhibit(&exhibit)
        .map_err(|source| StoreError::Invalid { path: path.to_path_buf(), source })?;
    Ok(exhibit)
}

#[cfg(test)]
mod tests;
