// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Vitrine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Vitrine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use super::geometry::{Point, Rect, Viewport};

pub const DEFAULT_TILE_SIZE: [u32; 2] = [1024, 1024];

/// The read-only exhibit definition as authored in the source document.
///
/// Field names follow the source format (`Groups`, `Stories`, `Images`, `Layout`, `Channels`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Exhibit {
    #[serde(default)]
    pub groups: Vec<Group>,
    #[serde(default)]
    pub stories: Vec<Story>,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub layout: Layout,
    #[serde(default)]
    pub channels: Vec<String>,
}

impl Exhibit {
    pub fn group_index(&self, name: &str) -> Option<usize> {
        group_index(&self.groups, name)
    }
}

pub(crate) fn group_index(groups: &[Group], name: &str) -> Option<usize> {
    groups.iter().position(|group| group.name == name)
}

/// One rendering of the imagery (stain, channel set, ...).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Group {
    pub name: String,
    /// Rendering path; also keys the group's tile sources and tab in the viewer.
    pub path: String,
    /// Hex colors without the leading `#`, one per channel.
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub channels: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Story {
    #[serde(default)]
    pub name: String,
    /// Markdown.
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub waypoints: Vec<Waypoint>,
}

/// A single stop in a story: camera, highlighted region, group selection and narrative text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Waypoint {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub zoom: f64,
    pub pan: Point,
    /// Name of the [`Group`] shown at this waypoint.
    pub group: String,
    #[serde(rename = "Overlay", default)]
    pub highlight: Rect,
}

impl Waypoint {
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.zoom, self.pan)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Image {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub path: String,
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub max_level: u32,
    #[serde(default = "default_tile_size")]
    pub tile_size: [u32; 2],
}

fn default_tile_size() -> [u32; 2] {
    DEFAULT_TILE_SIZE
}

/// Image arrangement: rows of image names.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Layout {
    #[serde(default)]
    pub grid: Vec<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<Vec<Vec<String>>>,
}
