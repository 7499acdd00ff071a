// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Vitrine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Vitrine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use super::projector::{GroupVisibility, StoryPanel, ViewerPort};
use crate::model::{Point, Rect, Viewport};

/// A viewer without a display.
///
/// Keeps whatever it was told so the result can be inspected or printed. Used by `--print` mode
/// and by tests.
#[derive(Debug, Clone, Default)]
pub struct HeadlessViewer {
    viewport: Viewport,
    overlays: BTreeMap<String, Rect>,
    overlay_adds: usize,
    groups: BTreeMap<String, GroupVisibility>,
    panel: Option<StoryPanel>,
    redraws: usize,
}

impl HeadlessViewer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn overlay(&self, id: &str) -> Option<Rect> {
        self.overlays.get(id).copied()
    }

    pub fn overlay_count(&self) -> usize {
        self.overlays.len()
    }

    /// How many times an overlay was created (as opposed to updated).
    pub fn overlay_adds(&self) -> usize {
        self.overlay_adds
    }

    /// Visibility keyed by group path.
    pub fn group(&self, path: &str) -> Option<&GroupVisibility> {
        self.groups.get(path)
    }

    pub fn active_group(&self) -> Option<&GroupVisibility> {
        self.groups.values().find(|group| group.active)
    }

    pub fn panel(&self) -> Option<&StoryPanel> {
        self.panel.as_ref()
    }

    /// Number of camera moves (`pan_to` calls) received.
    pub fn redraws(&self) -> usize {
        self.redraws
    }

    /// Simulates the user dragging or zooming the camera.
    pub fn move_camera(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }
}

impl ViewerPort for HeadlessViewer {
    fn zoom(&self) -> f64 {
        self.viewport.zoom
    }

    fn center(&self) -> Point {
        self.viewport.pan
    }

    fn pan_to(&mut self, center: Point) {
        self.viewport.pan = center;
        self.redraws += 1;
    }

    fn zoom_to(&mut self, zoom: f64) {
        self.viewport.zoom = zoom;
    }

    fn has_overlay(&self, id: &str) -> bool {
        self.overlays.contains_key(id)
    }

    fn add_overlay(&mut self, id: &str, bounds: Rect) {
        self.overlay_adds += 1;
        self.overlays.insert(id.to_owned(), bounds);
    }

    fn update_overlay(&mut self, id: &str, bounds: Rect) {
        if let Some(slot) = self.overlays.get_mut(id) {
            *slot = bounds;
        }
    }

    fn set_group_visibility(&mut self, group: &GroupVisibility) {
        self.groups.insert(group.path.clone(), group.clone());
    }

    fn show_story(&mut self, panel: &StoryPanel) {
        self.panel = Some(panel.clone());
    }
}
