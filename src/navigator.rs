// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Vitrine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Vitrine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Event hub.
//!
//! A [`Navigator`] owns the navigation store, the history synchronizer and the viewer, and turns
//! user and viewer events into store writes followed by a commit. All events arrive on one thread,
//! one at a time.

use tracing::debug;

use crate::history::{HistorySync, MemoryHistory, NavigateEvent, NavigateOutcome, NavigationPort};
use crate::model::{Exhibit, Viewport};
use crate::nav::{NavError, NavStore};
use crate::render::{project, refresh, ViewInstructions, ViewerPort};

#[derive(Debug)]
pub struct Navigator<P, V> {
    store: NavStore,
    sync: HistorySync<P>,
    viewer: V,
}

impl<P, V> Navigator<P, V>
where
    P: NavigationPort,
    V: ViewerPort,
{
    pub fn new(exhibit: Exhibit, port: P, viewer: V) -> Result<Self, NavError> {
        let store = NavStore::new(exhibit)?;
        Ok(Self { store, sync: HistorySync::new(port), viewer })
    }

    /// Reads the initial address, then commits the resulting state.
    pub fn init(&mut self) -> NavigateOutcome {
        let outcome = self.sync.on_navigate(&mut self.store, &mut self.viewer, None);
        self.sync.commit(&mut self.store, &mut self.viewer);
        outcome
    }

    /// Handles a history transition reported by the host.
    pub fn on_navigate(&mut self, event: Option<&NavigateEvent>) -> NavigateOutcome {
        self.sync.on_navigate(&mut self.store, &mut self.viewer, event)
    }

    pub fn commit(&mut self) -> bool {
        self.sync.commit(&mut self.store, &mut self.viewer)
    }

    /// Moves `delta` waypoints through the current story (wrapping).
    pub fn step(&mut self, delta: i64) -> bool {
        let target = self.store.waypoint_index() as i64 + delta;
        self.store.set_waypoint_index(target);
        self.commit()
    }

    pub fn select_group(&mut self, group: i64) -> bool {
        self.store.set_group_index(group);
        self.commit()
    }

    pub fn select_story(&mut self, story: i64) -> bool {
        self.store.set_story_index(story);
        self.commit()
    }

    /// Jumps to the first story, which exhibits use as their introduction.
    pub fn help(&mut self) -> bool {
        self.select_story(0)
    }

    /// One frame of a live pan/zoom. Updates the overlay and story panel without committing or
    /// moving the camera.
    pub fn on_animation(&mut self) {
        self.capture_viewport();
        refresh(&mut self.viewer, &self.store, false);
    }

    /// End of a pan/zoom gesture: captures the final camera and commits it.
    pub fn on_animation_finish(&mut self) -> bool {
        self.capture_viewport();
        debug!(zoom = self.store.viewport().zoom, "pan/zoom finished");
        self.commit()
    }

    /// The canonical address of the current state.
    pub fn address(&self) -> String {
        self.sync.address(&self.store)
    }

    /// A sharable address that opens the current view as a tag.
    pub fn tag_address(&self) -> String {
        self.sync.tag_address(&self.store)
    }

    pub fn view(&self) -> ViewInstructions {
        project(&self.store)
    }

    pub fn store(&self) -> &NavStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut NavStore {
        &mut self.store
    }

    pub fn port(&self) -> &P {
        self.sync.port()
    }

    pub fn viewer(&self) -> &V {
        &self.viewer
    }

    pub fn viewer_mut(&mut self) -> &mut V {
        &mut self.viewer
    }

    fn capture_viewport(&mut self) {
        let viewport = Viewport::captured(self.viewer.zoom(), self.viewer.center());
        self.store.set_viewport(viewport);
    }
}

impl<V> Navigator<MemoryHistory, V>
where
    V: ViewerPort,
{
    /// Steps back through the in-memory history. Returns `false` at the start.
    pub fn go_back(&mut self) -> bool {
        match self.sync.port_mut().back() {
            Some(event) => {
                self.on_navigate(Some(&event));
                true
            }
            None => false,
        }
    }

    /// Steps forward through the in-memory history. Returns `false` at the end.
    pub fn go_forward(&mut self) -> bool {
        match self.sync.port_mut().forward() {
            Some(event) => {
                self.on_navigate(Some(&event));
                true
            }
            None => false,
        }
    }

    /// Opens `url` as if the user had typed it.
    pub fn open_address(&mut self, url: impl Into<String>) -> NavigateOutcome {
        let event = self.sync.port_mut().open(url);
        self.on_navigate(Some(&event))
    }
}
