// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Vitrine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Vitrine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Logging setup.
//!
//! Filter priority: `VITRINE_LOG` > `RUST_LOG` > `warn,vitrine=info`. A bare level in
//! `VITRINE_LOG` (e.g. `debug`) applies to this crate only; anything with `=`, `:` or `,` is used
//! as a full filter.
//!
//! The interactive viewer owns the terminal, so it logs to a file or not at all. Headless runs log
//! to stderr.

use std::env;
use std::error::Error;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

pub const LOG_ENV: &str = "VITRINE_LOG";
const DEFAULT_FILTER: &str = "warn,vitrine=info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Off,
    Stderr,
    /// Appends to the file, creating it if needed.
    File(PathBuf),
}

/// Installs the global subscriber. Fails if one is already installed.
pub fn init(target: LogTarget) -> Result<(), Box<dyn Error + Send + Sync>> {
    let directives = filter_directives(
        env::var(LOG_ENV).ok().as_deref(),
        env::var("RUST_LOG").ok().as_deref(),
    );
    let filter = EnvFilter::try_new(directives)?;

    match target {
        LogTarget::Off => Ok(()),
        LogTarget::Stderr => {
            let layer = fmt::layer().with_writer(std::io::stderr);
            Registry::default().with(filter).with(layer).try_init()?;
            Ok(())
        }
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(&path)?;
            let layer = fmt::layer().with_writer(Mutex::new(file)).with_ansi(false);
            Registry::default().with(filter).with(layer).try_init()?;
            Ok(())
        }
    }
}

/// Installs a stderr subscriber for tests; ignores an already-installed one.
pub fn test() {
    let _ = init(LogTarget::Stderr);
}

fn filter_directives(vitrine_log: Option<&str>, rust_log: Option<&str>) -> String {
    if let Some(value) = vitrine_log.map(str::trim).filter(|value| !value.is_empty()) {
        if value.contains(|c: char| matches!(c, '=' | ':' | ',')) {
            return value.to_owned();
        }
        return format!("warn,vitrine={value}");
    }
    if let Some(value) = rust_log.filter(|value| !value.trim().is_empty()) {
        return value.to_owned();
    }
    DEFAULT_FILTER.to_owned()
}
