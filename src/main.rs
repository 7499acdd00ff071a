// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Vitrine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Vitrine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Vitrine CLI entrypoint.
//!
//! By default this opens the exhibit in the interactive terminal viewer. Use `--print` to run the
//! initial navigation headlessly and print the canonical address plus the projected view as JSON.

use std::error::Error;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;
use vitrine::history::MemoryHistory;
use vitrine::logging::{self, LogTarget};
use vitrine::model::Exhibit;
use vitrine::navigator::Navigator;
use vitrine::render::{HeadlessViewer, ViewInstructions};

const BASE_ADDRESS: &str = "/";

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<exhibit>] [--hash <fragment>] [--print] [--log-file <path>]\n  {program} --demo [--hash <fragment>] [--print] [--log-file <path>]\n\n<exhibit> is a YAML (.yaml/.yml) or JSON (.json) file; the exhibit may be wrapped under a\ntop-level `Exhibit` key. Without one the bundled demo exhibit is shown.\n--demo uses the bundled demo exhibit and cannot be combined with <exhibit>.\n--hash sets the initial address fragment, e.g. `#s=1#w=0`.\n--print prints the canonical address and the projected view as JSON, then exits.\n--log-file appends logs to <path> (the interactive viewer logs nowhere else).\n\nLog filters come from VITRINE_LOG, then RUST_LOG."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    demo: bool,
    print: bool,
    exhibit: Option<String>,
    hash: Option<String>,
    log_file: Option<String>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--print" => {
                if options.print {
                    return Err(());
                }
                options.print = true;
            }
            "--hash" => {
                if options.hash.is_some() {
                    return Err(());
                }
                let hash = args.next().ok_or(())?;
                options.hash = Some(hash);
            }
            "--log-file" => {
                if options.log_file.is_some() {
                    return Err(());
                }
                let path = args.next().ok_or(())?;
                options.log_file = Some(path);
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.exhibit.is_some() {
                    return Err(());
                }
                options.exhibit = Some(arg);
            }
        }
    }

    if options.demo && options.exhibit.is_some() {
        return Err(());
    }

    Ok(options)
}

/// The address the viewer starts from: the base path plus the fragment, `#` optional.
fn initial_address(hash: Option<&str>) -> String {
    match hash.map(str::trim).filter(|hash| !hash.is_empty()) {
        Some(hash) if hash.starts_with('#') => format!("{BASE_ADDRESS}{hash}"),
        Some(hash) => format!("{BASE_ADDRESS}#{hash}"),
        None => BASE_ADDRESS.to_owned(),
    }
}

fn log_target(options: &CliOptions) -> LogTarget {
    match (&options.log_file, options.print) {
        (Some(path), _) => LogTarget::File(PathBuf::from(path)),
        (None, true) => LogTarget::Stderr,
        (None, false) => LogTarget::Off,
    }
}

#[derive(Debug, Serialize)]
struct PrintedView {
    address: String,
    view: ViewInstructions,
}

fn print_view(exhibit: Exhibit, address: String) -> Result<(), Box<dyn Error>> {
    let history = MemoryHistory::new(address, "Vitrine");
    let mut navigator = Navigator::new(exhibit, history, HeadlessViewer::new())?;
    navigator.init();

    let printed = PrintedView { address: navigator.address(), view: navigator.view() };
    println!("{}", serde_json::to_string_pretty(&printed)?);
    Ok(())
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "vitrine".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        logging::init(log_target(&options)).map_err(|err| err.to_string())?;

        let exhibit = match options.exhibit.as_deref() {
            Some(path) => vitrine::store::load_exhibit(Path::new(path))?,
            None => vitrine::tui::demo_exhibit()?,
        };
        let address = initial_address(options.hash.as_deref());
        info!(address = %address, demo = options.demo, "starting");

        if options.print {
            return print_view(exhibit, address);
        }

        vitrine::tui::run(exhibit, address)
    })();

    if let Err(err) = result {
        eprintln!("vitrine: {err}");
        std::process::exit(1);
    }
}
