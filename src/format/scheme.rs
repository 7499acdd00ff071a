// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Vitrine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Vitrine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use super::hash::HashQuery;

pub const STORY_KEY: &str = "s";
pub const WAYPOINT_KEY: &str = "w";
pub const GROUP_KEY: &str = "g";
pub const VIEWPORT_KEY: &str = "v";
pub const DESCRIPTION_KEY: &str = "d";
pub const HIGHLIGHT_KEY: &str = "o";
pub const NAME_KEY: &str = "n";

const EXHIBIT_KEYS: [&str; 4] = [STORY_KEY, WAYPOINT_KEY, GROUP_KEY, VIEWPORT_KEY];
const TAG_KEYS: [&str; 4] = [DESCRIPTION_KEY, HIGHLIGHT_KEY, GROUP_KEY, VIEWPORT_KEY];

/// The kinds of navigation state an address can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    /// Full story navigation: story, waypoint, group, viewport.
    Exhibit,
    /// Ephemeral bookmark: description, highlight, group, viewport.
    Tag,
}

impl Scheme {
    /// Match order: exhibit first.
    pub const ALL: [Scheme; 2] = [Scheme::Exhibit, Scheme::Tag];

    pub fn keys(self) -> &'static [&'static str] {
        match self {
            Self::Exhibit => &EXHIBIT_KEYS,
            Self::Tag => &TAG_KEYS,
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exhibit => f.write_str("exhibit"),
            Self::Tag => f.write_str("tag"),
        }
    }
}

/// Exact match: same number of keys and every required key present.
pub fn match_query(query: &HashQuery, keys: &[&str]) -> bool {
    query.len() == keys.len() && keys.iter().all(|key| query.contains_key(*key))
}

pub fn current_scheme(query: &HashQuery) -> Option<Scheme> {
    Scheme::ALL.into_iter().find(|scheme| match_query(query, scheme.keys()))
}

pub fn is_valid_encoding(query: &HashQuery) -> bool {
    current_scheme(query).is_some()
}
