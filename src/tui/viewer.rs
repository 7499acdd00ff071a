// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Vitrine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Vitrine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use crate::model::{Point, Rect, Viewport};
use crate::render::{GroupVisibility, StoryPanel, ViewerPort};

const MIN_ZOOM: f64 = 0.05;
const MAX_ZOOM: f64 = 500.0;

/// Camera and overlay state drawn by the terminal canvas.
///
/// Zoom follows deep-zoom viewer conventions: at zoom `1` the visible world width is `1`.
#[derive(Debug, Clone, Default)]
pub(crate) struct TerminalViewer {
    viewport: Viewport,
    overlays: BTreeMap<String, Rect>,
    groups: Vec<GroupVisibility>,
    panel: Option<StoryPanel>,
}

impl TerminalViewer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub(crate) fn overlays(&self) -> impl Iterator<Item = (&str, Rect)> + '_ {
        self.overlays.iter().map(|(id, rect)| (id.as_str(), *rect))
    }

    pub(crate) fn groups(&self) -> &[GroupVisibility] {
        &self.groups
    }

    pub(crate) fn active_group(&self) -> Option<&GroupVisibility> {
        self.groups.iter().find(|group| group.active)
    }

    pub(crate) fn panel(&self) -> Option<&StoryPanel> {
        self.panel.as_ref()
    }

    pub(crate) fn visible_width(&self) -> f64 {
        1.0 / self.viewport.zoom.max(MIN_ZOOM)
    }

    /// Moves the center by fractions of the visible width.
    pub(crate) fn pan_by(&mut self, dx: f64, dy: f64) {
        let step = self.visible_width();
        self.viewport.pan.x += dx * step;
        self.viewport.pan.y += dy * step;
    }

    pub(crate) fn zoom_by(&mut self, factor: f64) {
        self.viewport.zoom = (self.viewport.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
    }
}

impl ViewerPort for TerminalViewer {
    fn zoom(&self) -> f64 {
        self.viewport.zoom
    }

    fn center(&self) -> Point {
        self.viewport.pan
    }

    fn pan_to(&mut self, center: Point) {
        self.viewport.pan = center;
    }

    fn zoom_to(&mut self, zoom: f64) {
        self.viewport.zoom = zoom;
    }

    fn has_overlay(&self, id: &str) -> bool {
        self.overlays.contains_key(id)
    }

    fn add_overlay(&mut self, id: &str, bounds: Rect) {
        self.overlays.insert(id.to_owned(), bounds);
    }

    fn update_overlay(&mut self, id: &str, bounds: Rect) {
        if let Some(slot) = self.overlays.get_mut(id) {
            *slot = bounds;
        }
    }

    fn set_group_visibility(&mut self, group: &GroupVisibility) {
        match self.groups.iter_mut().find(|known| known.path == group.path) {
            Some(known) => *known = group.clone(),
            None => self.groups.push(group.clone()),
        }
    }

    fn show_story(&mut self, panel: &StoryPanel) {
        self.panel = Some(panel.clone());
    }
}
