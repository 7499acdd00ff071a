// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Vitrine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Vitrine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Vitrine: navigation state for guided exhibits of large multi-channel images.
//!
//! The viewer state lives in a [`nav::NavStore`], round-trips through a compact address fragment
//! ([`format`]), is synchronized with browser-style history ([`history`]) and projected onto a
//! deep-zoom viewer ([`render`]). [`navigator::Navigator`] wires these together.

pub mod format;
pub mod history;
pub mod logging;
pub mod model;
pub mod nav;
pub mod navigator;
pub mod render;
pub mod store;
pub mod tui;
