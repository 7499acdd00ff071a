// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Vitrine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Vitrine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! View projection.
//!
//! [`project`] is a pure function of the navigation store; [`apply_view`] pushes its result into
//! a [`ViewerPort`].

use serde::Serialize;

use super::channels::{channel_marks, ChannelMark};
use crate::model::{Point, Rect, Viewport};
use crate::nav::NavStore;

/// Overlay element id of the highlight box. There is only ever one.
pub const HIGHLIGHT_OVERLAY_ID: &str = "current-overlay-0";

/// The viewer widget as seen by the navigation core.
pub trait ViewerPort {
    fn zoom(&self) -> f64;

    fn center(&self) -> Point;

    fn pan_to(&mut self, center: Point);

    fn zoom_to(&mut self, zoom: f64);

    fn has_overlay(&self, id: &str) -> bool;

    fn add_overlay(&mut self, id: &str, bounds: Rect);

    fn update_overlay(&mut self, id: &str, bounds: Rect);

    /// Sets opacity and the active tab state of all tile sources of one group.
    fn set_group_visibility(&mut self, group: &GroupVisibility);

    fn show_story(&mut self, panel: &StoryPanel);
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupVisibility {
    pub name: String,
    pub path: String,
    pub opacity: f32,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoryPanel {
    pub story_name: String,
    pub story_index: usize,
    pub story_count: usize,
    /// Markdown, rendered by the host.
    pub story_markdown: String,
    pub waypoint_name: String,
    pub waypoint_description: String,
    pub waypoint_index: usize,
    pub waypoint_count: usize,
    pub channel_marks: Vec<ChannelMark>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewInstructions {
    pub viewport: Viewport,
    pub highlight: Rect,
    pub groups: Vec<GroupVisibility>,
    pub story: StoryPanel,
}

pub fn project(store: &NavStore) -> ViewInstructions {
    let active = store.group_index();
    let groups = store
        .groups()
        .iter()
        .enumerate()
        .map(|(i, group)| GroupVisibility {
            name: group.name.clone(),
            path: group.path.clone(),
            opacity: if i == active { 1.0 } else { 0.0 },
            active: i == active,
        })
        .collect();

    let story = store.current_story();
    let waypoint = store.current_waypoint();
    let panel = StoryPanel {
        story_name: story.name.clone(),
        story_index: store.story_index(),
        story_count: store.stories().len(),
        story_markdown: story.description.clone(),
        waypoint_name: waypoint.name.clone(),
        waypoint_description: waypoint.description.clone(),
        waypoint_index: store.waypoint_index(),
        waypoint_count: story.waypoints.len(),
        channel_marks: channel_marks(
            &story.description,
            store.current_channels(),
            store.current_colors(),
        ),
    };

    ViewInstructions {
        viewport: store.viewport(),
        highlight: store.highlight(),
        groups,
        story: panel,
    }
}

/// Pushes `view` into the viewer.
///
/// The highlight overlay and story panel always update. Camera and group visibility only change
/// on `redraw`; live pan/zoom frames pass `false` so the viewer keeps control of the camera.
pub fn apply_view<V>(viewer: &mut V, view: &ViewInstructions, redraw: bool)
where
    V: ViewerPort + ?Sized,
{
    if viewer.has_overlay(HIGHLIGHT_OVERLAY_ID) {
        viewer.update_overlay(HIGHLIGHT_OVERLAY_ID, view.highlight);
    } else {
        viewer.add_overlay(HIGHLIGHT_OVERLAY_ID, view.highlight);
    }
    viewer.show_story(&view.story);

    if redraw {
        viewer.pan_to(view.viewport.pan);
        viewer.zoom_to(view.viewport.zoom);
        for group in &view.groups {
            viewer.set_group_visibility(group);
        }
    }
}

pub fn refresh<V>(viewer: &mut V, store: &NavStore, redraw: bool)
where
    V: ViewerPort + ?Sized,
{
    apply_view(viewer, &project(store), redraw);
}
