// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Vitrine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Vitrine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use crate::format::{decode_fragment, HashQuery, ENTRY_DELIMITER};
use crate::model::Design;

const SEARCH_DELIMITER: char = '?';

/// The address split into its path, search (`?...`) and fragment (`#...`) parts.
///
/// `search` and `hash` keep their leading delimiter, so concatenating the three parts gives the
/// address back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub path: String,
    pub search: String,
    pub hash: String,
}

impl Location {
    pub fn parse(url: &str) -> Self {
        let (rest, hash) = match url.find(ENTRY_DELIMITER) {
            Some(at) => url.split_at(at),
            None => (url, ""),
        };
        let (path, search) = match rest.find(SEARCH_DELIMITER) {
            Some(at) => rest.split_at(at),
            None => (rest, ""),
        };
        Self { path: path.to_owned(), search: search.to_owned(), hash: hash.to_owned() }
    }

    pub fn url(&self) -> String {
        format!("{}{}{}", self.path, self.search, self.hash)
    }

    /// The address without its fragment.
    pub fn base(&self) -> String {
        format!("{}{}", self.path, self.search)
    }

    pub fn query(&self) -> HashQuery {
        decode_fragment(&self.hash)
    }
}

/// One persisted history entry: the full design snapshot plus its address and title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub design: Design,
    pub title: String,
    pub url: String,
}

/// A history transition (back/forward, or an address typed by the user).
///
/// `state` carries the design snapshot stored with the entry being returned to, when it has one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavigateEvent {
    pub state: Option<Design>,
}

/// The host's address bar and history stack.
///
/// After `push` or `replace`, `location` must report the written address: the synchronizer
/// re-reads it to derive the state it just wrote.
pub trait NavigationPort {
    fn location(&self) -> Location;

    fn title(&self) -> String;

    /// Adds a new history entry and makes it current.
    fn push(&mut self, entry: HistoryEntry);

    /// Overwrites the current history entry.
    fn replace(&mut self, entry: HistoryEntry);
}
