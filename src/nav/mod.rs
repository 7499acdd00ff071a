// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Vitrine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Vitrine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Navigation store.
//!
//! Holds the session's [`Design`] plus the current navigation indices, viewport, highlight and
//! free text. Every write goes through a validated accessor: indices wrap, and selecting a story
//! or waypoint runs the cascades in [`cascade`] before returning.
//!
//! The design crosses the store boundary by value only: [`NavStore::design`] hands out a copy and
//! [`NavStore::set_design`] takes ownership, so callers never hold aliases into store state.

use std::fmt;

use tracing::{debug, warn};

use crate::format::decode_text;
use crate::model::{Design, Exhibit, Group, Image, Layout, Rect, Story, Viewport, Waypoint};

pub mod cascade;
pub mod coerce;
mod hash;

use cascade::{
    apply_story, apply_waypoint, current_group_index, current_story_index,
    current_waypoint_index, remap_waypoint_slots,
};
use coerce::wrap_index;

/// Name given to the synthesized bookmark story and its waypoint.
pub const TAG_NAME: &str = "Tag";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    NoStories,
    NoGroups,
    EmptyStory { story: usize, name: String },
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoStories => f.write_str("exhibit has no stories; at least one is required"),
            Self::NoGroups => f.write_str("exhibit has no groups; at least one is required"),
            Self::EmptyStory { story, name } => {
                write!(f, "story {story} ({name:?}) has no waypoints; at least one is required")
            }
        }
    }
}

impl std::error::Error for NavError {}

/// Raw navigation values.
///
/// Indices may be stale relative to the design (e.g. right after the design shrank); readers go
/// through the bounds-guarded accessors in [`cascade`].
#[derive(Debug, Clone, PartialEq)]
pub struct NavState {
    pub(crate) story: usize,
    /// One waypoint position per story.
    pub(crate) waypoints: Vec<usize>,
    pub(crate) group: usize,
    pub(crate) viewport: Viewport,
    pub(crate) highlight: Rect,
    /// Address-safe encoded (see [`crate::format::encode_text`]).
    pub(crate) description: String,
    /// Address-safe encoded.
    pub(crate) name: String,
    pub(crate) changed: bool,
}

impl Default for NavState {
    fn default() -> Self {
        Self {
            story: 0,
            waypoints: vec![0],
            group: 0,
            viewport: Viewport::default(),
            highlight: Rect::default(),
            description: String::new(),
            name: String::new(),
            changed: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NavStore {
    exhibit: Exhibit,
    design: Design,
    state: NavState,
}

impl NavStore {
    /// Creates a store over `exhibit` with the design initialized from it.
    ///
    /// Fails when the exhibit has no stories, no groups, or a story without waypoints.
    pub fn new(exhibit: Exhibit) -> Result<Self, NavError> {
        let design = Design::from_exhibit(&exhibit);
        validate_design(&design)?;

        let mut store = Self { exhibit, design: Design::default(), state: NavState::default() };
        store.install_design(design);
        Ok(store)
    }

    /// The read-only source exhibit.
    pub fn exhibit(&self) -> &Exhibit {
        &self.exhibit
    }

    /// Re-initializes the design from the source exhibit.
    pub fn new_exhibit(&mut self) {
        let design = Design::from_exhibit(&self.exhibit);
        self.install_design(design);
    }

    /// A copy of the current design.
    pub fn design(&self) -> Design {
        self.design.clone()
    }

    pub fn set_design(&mut self, design: Design) -> Result<(), NavError> {
        validate_design(&design)?;
        self.install_design(design);
        Ok(())
    }

    pub fn groups(&self) -> &[Group] {
        &self.design.groups
    }

    pub fn set_groups(&mut self, groups: Vec<Group>) -> Result<(), NavError> {
        let mut design = self.design();
        design.groups = groups;
        self.set_design_changed(design)
    }

    pub fn stories(&self) -> &[Story] {
        &self.design.stories
    }

    pub fn set_stories(&mut self, stories: Vec<Story>) -> Result<(), NavError> {
        let mut design = self.design();
        design.stories = stories;
        self.set_design_changed(design)
    }

    pub fn images(&self) -> &[Image] {
        &self.design.images
    }

    pub fn set_images(&mut self, images: Vec<Image>) {
        self.design.images = images;
        self.state.changed = true;
    }

    pub fn layout(&self) -> &Layout {
        &self.design.layout
    }

    pub fn set_layout(&mut self, layout: Layout) {
        self.design.layout = layout;
        self.state.changed = true;
    }

    pub fn channels(&self) -> &[String] {
        &self.design.channels
    }

    pub fn set_channels(&mut self, channels: Vec<String>) {
        self.design.channels = channels;
        self.state.changed = true;
    }

    /// Replaces the current story in the design.
    pub fn set_current_story(&mut self, story: Story) -> Result<(), NavError> {
        let mut stories = self.design.stories.clone();
        stories[self.story_index()] = story;
        self.set_stories(stories)
    }

    /// Replaces the current waypoint in the design.
    pub fn set_current_waypoint(&mut self, waypoint: Waypoint) {
        let story = self.story_index();
        let index = self.waypoint_index();
        self.design.stories[story].waypoints[index] = waypoint;
        self.state.changed = true;
    }

    pub fn story_index(&self) -> usize {
        current_story_index(&self.state, &self.design)
    }

    /// Selects a story (wrapping) and re-derives its waypoint state.
    pub fn set_story_index(&mut self, story: i64) {
        apply_story(&mut self.state, &self.design, story);
    }

    /// The current story's waypoint position.
    pub fn waypoint_index(&self) -> usize {
        current_waypoint_index(&self.state, &self.design)
    }

    /// Selects a waypoint of the current story (wrapping); overwrites group, viewport and
    /// highlight from it.
    pub fn set_waypoint_index(&mut self, waypoint: i64) {
        apply_waypoint(&mut self.state, &self.design, waypoint);
    }

    /// Per-story waypoint positions.
    pub fn waypoint_slots(&self) -> &[usize] {
        &self.state.waypoints
    }

    pub fn group_index(&self) -> usize {
        current_group_index(&self.state, &self.design)
    }

    pub fn set_group_index(&mut self, group: i64) {
        self.state.group = wrap_index(group, self.design.groups.len());
    }

    pub fn viewport(&self) -> Viewport {
        self.state.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.state.viewport = viewport;
    }

    pub fn highlight(&self) -> Rect {
        self.state.highlight
    }

    pub fn set_highlight(&mut self, highlight: Rect) {
        self.state.highlight = highlight;
    }

    /// The current description in its address-safe encoded form.
    pub fn description(&self) -> &str {
        &self.state.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.state.description = description.into();
    }

    /// The current name in its address-safe encoded form.
    pub fn name(&self) -> &str {
        &self.state.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.state.name = name.into();
    }

    /// Whether the design was edited since the last commit.
    pub fn is_changed(&self) -> bool {
        self.state.changed
    }

    pub fn set_changed(&mut self, changed: bool) {
        self.state.changed = changed;
    }

    pub fn current_story(&self) -> &Story {
        &self.design.stories[self.story_index()]
    }

    pub fn current_waypoints(&self) -> &[Waypoint] {
        &self.current_story().waypoints
    }

    pub fn current_waypoint(&self) -> &Waypoint {
        &self.current_waypoints()[self.waypoint_index()]
    }

    pub fn current_group(&self) -> &Group {
        &self.design.groups[self.group_index()]
    }

    pub fn current_colors(&self) -> &[String] {
        &self.current_group().colors
    }

    pub fn current_channels(&self) -> &[String] {
        &self.current_group().channels
    }

    /// Prepends a one-waypoint "Tag" story capturing the current view to the exhibit's stories.
    ///
    /// The source exhibit is untouched; any earlier tag is dropped. Callers select story 0 and
    /// group 0 afterwards to focus the tag.
    pub fn create_tag(&mut self) {
        let description = match decode_text(&self.state.description) {
            Ok(text) => text,
            Err(err) => {
                warn!(%err, "tag description is not address-safe text; using an empty description");
                String::new()
            }
        };
        let viewport = self.state.viewport;
        let tag = Story {
            name: TAG_NAME.to_owned(),
            description: String::new(),
            waypoints: vec![Waypoint {
                name: TAG_NAME.to_owned(),
                description,
                zoom: viewport.zoom,
                pan: viewport.pan,
                group: self.current_group().name.clone(),
                highlight: self.state.highlight,
            }],
        };

        let mut design = self.design();
        design.stories = std::iter::once(tag).chain(self.exhibit.stories.iter().cloned()).collect();
        debug!(stories = design.stories.len(), "created tag story");
        self.install_design(design);
        self.state.changed = true;
    }

    fn set_design_changed(&mut self, design: Design) -> Result<(), NavError> {
        self.set_design(design)?;
        self.state.changed = true;
        Ok(())
    }

    fn install_design(&mut self, design: Design) {
        if design.stories.len() != self.design.stories.len() {
            self.state.waypoints = remap_waypoint_slots(&self.state.waypoints, design.stories.len());
        }
        self.design = design;
    }
}

/// Checks the navigation preconditions of an exhibit: at least one story and one group, and a
/// waypoint in every story.
pub fn validate_exhibit(exhibit: &Exhibit) -> Result<(), NavError> {
    validate_parts(&exhibit.stories, &exhibit.groups)
}

fn validate_design(design: &Design) -> Result<(), NavError> {
    validate_parts(&design.stories, &design.groups)
}

fn validate_parts(stories: &[Story], groups: &[Group]) -> Result<(), NavError> {
    if stories.is_empty() {
        return Err(NavError::NoStories);
    }
    if groups.is_empty() {
        return Err(NavError::NoGroups);
    }
    if let Some((story, empty)) =
        stories.iter().enumerate().find(|(_, story)| story.waypoints.is_empty())
    {
        return Err(NavError::EmptyStory { story, name: empty.name.clone() });
    }
    Ok(())
}
