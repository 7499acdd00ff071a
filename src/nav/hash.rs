// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Vitrine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Vitrine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use tracing::debug;

use super::coerce::{parse_floats, parse_int};
use super::NavStore;
use crate::format::scheme::{
    DESCRIPTION_KEY, GROUP_KEY, HIGHLIGHT_KEY, NAME_KEY, STORY_KEY, VIEWPORT_KEY, WAYPOINT_KEY,
};
use crate::format::{HashQuery, HashSource, HashValue, Scheme};
use crate::model::{Point, Rect, Viewport};

impl HashSource for NavStore {
    fn hash_value(&self, key: &str) -> Option<HashValue> {
        let value = match key {
            STORY_KEY => HashValue::scalar(self.story_index().to_string()),
            WAYPOINT_KEY => HashValue::scalar(self.waypoint_index().to_string()),
            GROUP_KEY => HashValue::scalar(self.group_index().to_string()),
            VIEWPORT_KEY => HashValue::numbers(&self.viewport().to_array()),
            HIGHLIGHT_KEY => HashValue::numbers(&self.highlight().to_array()),
            DESCRIPTION_KEY => HashValue::scalar(self.description()),
            NAME_KEY => HashValue::scalar(self.name()),
            _ => return None,
        };
        Some(value)
    }
}

impl NavStore {
    /// Routes one decoded address value to its accessor.
    ///
    /// Values are coerced leniently: unreadable numbers become 0 and indices wrap.
    pub fn apply_hash_value(&mut self, key: &str, value: &HashValue) {
        match key {
            STORY_KEY => self.set_story_index(parse_int(value.first())),
            WAYPOINT_KEY => self.set_waypoint_index(parse_int(value.first())),
            GROUP_KEY => self.set_group_index(parse_int(value.first())),
            VIEWPORT_KEY => {
                let defaults = Viewport::default().to_array();
                let [zoom, x, y] = parse_floats(value, defaults);
                self.set_viewport(Viewport::new(zoom, Point::new(x, y)));
            }
            HIGHLIGHT_KEY => {
                let [x, y, width, height] = parse_floats(value, Rect::default().to_array());
                self.set_highlight(Rect::new(x, y, width, height));
            }
            DESCRIPTION_KEY => self.set_description(value.joined()),
            NAME_KEY => self.set_name(value.joined()),
            _ => debug!(key = %key, "ignoring unknown address key"),
        }
    }

    /// Applies every key of `scheme` found in `query`, in the scheme's key order.
    pub fn apply_query(&mut self, query: &HashQuery, scheme: Scheme) {
        for key in scheme.keys() {
            if let Some(value) = query.get(*key) {
                self.apply_hash_value(key, value);
            }
        }
    }
}
