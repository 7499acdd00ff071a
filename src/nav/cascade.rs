// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Vitrine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Vitrine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Derived-state cascades.
//!
//! Selecting a story or a waypoint updates several dependent fields. Each dependency is a small
//! function over `(state, design)`, and [`apply_story`] / [`apply_waypoint`] run them in a fixed
//! order so no caller can observe a half-derived state:
//!
//! 1. `apply_story`: wrap story index → re-select the story's waypoint (step 2) → re-derive free
//!    text when the story changed.
//! 2. `apply_waypoint`: wrap waypoint index → group → viewport → highlight.
//!
//! The design passed in must have at least one group, one story, and one waypoint per story.

use tracing::warn;

use super::coerce::wrap_index;
use super::NavState;
use crate::format::encode_text;
use crate::model::{Design, Waypoint};

pub(crate) fn apply_story(state: &mut NavState, design: &Design, raw_story: i64) {
    let previous = current_story_index(state, design);
    state.story = wrap_index(raw_story, design.stories.len());

    let waypoint = current_waypoint_index(state, design);
    apply_waypoint(state, design, waypoint as i64);

    if state.story != previous {
        derive_text(state, current_waypoint(state, design));
    }
}

pub(crate) fn apply_waypoint(state: &mut NavState, design: &Design, raw_waypoint: i64) {
    let story = current_story_index(state, design);
    let count = design.stories[story].waypoints.len();
    let index = wrap_index(raw_waypoint, count);
    if state.waypoints.len() <= story {
        state.waypoints.resize(story + 1, 0);
    }
    state.waypoints[story] = index;

    let waypoint = &design.stories[story].waypoints[index];
    derive_group(state, design, waypoint);
    derive_viewport(state, waypoint);
    derive_highlight(state, waypoint);
}

pub(crate) fn current_story_index(state: &NavState, design: &Design) -> usize {
    if state.story < design.stories.len() {
        state.story
    } else {
        0
    }
}

pub(crate) fn current_waypoint_index(state: &NavState, design: &Design) -> usize {
    let story = current_story_index(state, design);
    let index = state.waypoints.get(story).copied().unwrap_or(0);
    if index < design.stories[story].waypoints.len() {
        index
    } else {
        0
    }
}

pub(crate) fn current_group_index(state: &NavState, design: &Design) -> usize {
    if state.group < design.groups.len() {
        state.group
    } else {
        0
    }
}

pub(crate) fn current_waypoint<'a>(state: &NavState, design: &'a Design) -> &'a Waypoint {
    let story = current_story_index(state, design);
    &design.stories[story].waypoints[current_waypoint_index(state, design)]
}

/// One slot per story: existing positions keep their progress, new ones start at 0.
pub(crate) fn remap_waypoint_slots(slots: &[usize], story_count: usize) -> Vec<usize> {
    (0..story_count).map(|story| slots.get(story).copied().unwrap_or(0)).collect()
}

fn derive_group(state: &mut NavState, design: &Design, waypoint: &Waypoint) {
    state.group = match design.group_index(&waypoint.group) {
        Some(index) => index,
        None => {
            warn!(
                group = %waypoint.group,
                waypoint = %waypoint.name,
                "waypoint references an unknown group; showing the first group"
            );
            0
        }
    };
}

fn derive_viewport(state: &mut NavState, waypoint: &Waypoint) {
    state.viewport = waypoint.viewport();
}

fn derive_highlight(state: &mut NavState, waypoint: &Waypoint) {
    state.highlight = waypoint.highlight;
}

fn derive_text(state: &mut NavState, waypoint: &Waypoint) {
    state.description = encode_text(&waypoint.description);
    state.name = encode_text(&waypoint.name);
}
