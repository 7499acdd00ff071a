// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Vitrine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Vitrine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Address / history reconciliation.
//!
//! [`HistorySync::commit`] writes the store into the history stack, and
//! [`HistorySync::on_navigate`] reads the address (and an optional design snapshot) back into the
//! store. The two call each other: a commit re-reads the address it just wrote, and navigating to
//! an invalid or tag address commits a canonical one. The recursion ends because a committed
//! address always matches the exhibit scheme.

use tracing::{debug, info, warn};

use super::port::{HistoryEntry, Location, NavigateEvent, NavigationPort};
use crate::format::{current_scheme, encode_fragment, Scheme};
use crate::nav::NavStore;
use crate::render::{refresh, ViewerPort};

/// What a commit does to the history stack.
#[derive(Debug, Clone, PartialEq)]
pub enum CommitAction {
    /// Address unchanged and design clean.
    Skip,
    Push(HistoryEntry),
    /// The current entry carries an invalid or tag address and is overwritten.
    Replace(HistoryEntry),
}

/// Result of handling a navigation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigateOutcome {
    /// Scheme the address matched on entry, if any.
    pub scheme: Option<Scheme>,
    /// A tag address was consumed; transient input surfaces (dialogs, prompts) should close.
    pub close_transient: bool,
}

/// The canonical address of the current store state at `location`.
pub fn exhibit_address(store: &NavStore, location: &Location) -> String {
    format!("{}{}", location.base(), encode_fragment(Scheme::Exhibit.keys(), store))
}

/// The sharable tag address of the current view at `location`.
pub fn tag_address(store: &NavStore, location: &Location) -> String {
    format!("{}{}", location.base(), encode_fragment(Scheme::Tag.keys(), store))
}

pub fn plan_commit(store: &NavStore, location: &Location, title: &str) -> CommitAction {
    let url = exhibit_address(store, location);
    if location.url() == url && !store.is_changed() {
        return CommitAction::Skip;
    }

    let entry = HistoryEntry { design: store.design(), title: title.to_owned(), url };
    match current_scheme(&location.query()) {
        Some(Scheme::Exhibit) => CommitAction::Push(entry),
        _ => CommitAction::Replace(entry),
    }
}

#[derive(Debug, Clone)]
pub struct HistorySync<P> {
    port: P,
}

impl<P> HistorySync<P>
where
    P: NavigationPort,
{
    pub fn new(port: P) -> Self {
        Self { port }
    }

    pub fn port(&self) -> &P {
        &self.port
    }

    pub fn port_mut(&mut self) -> &mut P {
        &mut self.port
    }

    pub fn into_port(self) -> P {
        self.port
    }

    pub fn address(&self, store: &NavStore) -> String {
        exhibit_address(store, &self.port.location())
    }

    pub fn tag_address(&self, store: &NavStore) -> String {
        tag_address(store, &self.port.location())
    }

    /// Persists the store state. Returns whether the history stack was written.
    pub fn commit<V>(&mut self, store: &mut NavStore, viewer: &mut V) -> bool
    where
        V: ViewerPort + ?Sized,
    {
        let location = self.port.location();
        let written = match plan_commit(store, &location, &self.port.title()) {
            CommitAction::Skip => {
                debug!(url = %location.url(), "commit skipped; address unchanged");
                return false;
            }
            CommitAction::Push(entry) => {
                debug!(url = %entry.url, "history push");
                self.port.push(entry);
                true
            }
            CommitAction::Replace(entry) => {
                info!(from = %location.url(), to = %entry.url, "history replace");
                self.port.replace(entry);
                true
            }
        };
        self.on_navigate(store, viewer, None);
        store.set_changed(false);
        written
    }

    /// Applies a history transition (or the initial page load when `event` is `None`).
    pub fn on_navigate<V>(
        &mut self,
        store: &mut NavStore,
        viewer: &mut V,
        event: Option<&NavigateEvent>,
    ) -> NavigateOutcome
    where
        V: ViewerPort + ?Sized,
    {
        if let Some(design) = event.and_then(|event| event.state.as_ref()) {
            match store.set_design(design.clone()) {
                Ok(()) => store.set_changed(false),
                Err(err) => warn!(%err, "ignoring invalid history snapshot"),
            }
        }

        let query = self.port.location().query();
        let scheme = current_scheme(&query);
        let mut outcome = NavigateOutcome { scheme, close_transient: false };

        match scheme {
            Some(scheme) => store.apply_query(&query, scheme),
            None => {
                info!(entries = query.len(), "address is not a valid encoding; reinitializing");
                store.new_exhibit();
                store.set_story_index(0);
                store.set_group_index(0);
                self.commit(store, viewer);
            }
        }

        if scheme == Some(Scheme::Tag) {
            info!("consuming tag address");
            store.create_tag();
            store.set_story_index(0);
            store.set_group_index(0);
            self.commit(store, viewer);
            outcome.close_transient = true;
        }

        refresh(viewer, store, true);
        outcome
    }
}
