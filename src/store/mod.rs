// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Vitrine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Vitrine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Exhibit documents on disk.
//!
//! An exhibit is authored as YAML or JSON, either as the document root or nested under a
//! top-level `Exhibit` key.

pub mod exhibit_file;

pub use exhibit_file::{
    load_exhibit, parse_exhibit_json, parse_exhibit_yaml, ExhibitFormat, StoreError,
    EXHIBIT_WRAPPER_KEY,
};
