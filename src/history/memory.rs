// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Vitrine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Vitrine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::port::{HistoryEntry, Location, NavigateEvent, NavigationPort};
use crate::model::Design;

#[derive(Debug, Clone, PartialEq)]
struct Slot {
    url: String,
    title: String,
    state: Option<Design>,
}

/// Browser-like history stack kept in memory.
///
/// Used by the terminal viewer and by tests. Pushing truncates any forward entries, like a
/// browser does.
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    entries: Vec<Slot>,
    cursor: usize,
    title: String,
    pushes: usize,
    replaces: usize,
}

impl MemoryHistory {
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            entries: vec![Slot { url: url.into(), title: title.clone(), state: None }],
            cursor: 0,
            title,
            pushes: 0,
            replaces: 0,
        }
    }

    /// Moves one entry back; `None` at the start of history.
    pub fn back(&mut self) -> Option<NavigateEvent> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.current_event())
    }

    /// Moves one entry forward; `None` at the end of history.
    pub fn forward(&mut self) -> Option<NavigateEvent> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.current_event())
    }

    /// Opens an address as if typed by the user: a new entry without a design snapshot.
    pub fn open(&mut self, url: impl Into<String>) -> NavigateEvent {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(Slot { url: url.into(), title: self.title.clone(), state: None });
        self.cursor += 1;
        NavigateEvent::default()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn urls(&self) -> Vec<&str> {
        self.entries.iter().map(|slot| slot.url.as_str()).collect()
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    pub fn pushes(&self) -> usize {
        self.pushes
    }

    pub fn replaces(&self) -> usize {
        self.replaces
    }

    /// Total number of history writes (pushes plus replaces).
    pub fn mutations(&self) -> usize {
        self.pushes + self.replaces
    }

    fn current_event(&self) -> NavigateEvent {
        NavigateEvent { state: self.entries[self.cursor].state.clone() }
    }
}

impl NavigationPort for MemoryHistory {
    fn location(&self) -> Location {
        Location::parse(&self.entries[self.cursor].url)
    }

    fn title(&self) -> String {
        self.entries[self.cursor].title.clone()
    }

    fn push(&mut self, entry: HistoryEntry) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(Slot { url: entry.url, title: entry.title, state: Some(entry.design) });
        self.cursor += 1;
        self.pushes += 1;
    }

    fn replace(&mut self, entry: HistoryEntry) {
        self.entries[self.cursor] =
            Slot { url: entry.url, title: entry.title, state: Some(entry.design) };
        self.replaces += 1;
    }
}
