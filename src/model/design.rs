// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Vitrine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Vitrine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

use super::exhibit::{Exhibit, Group, Image, Layout, Story};

/// Mutable working copy of an [`Exhibit`] used for one viewing session.
///
/// Owned values only: cloning a `Design` is a deep copy, which is what history snapshots and the
/// navigation store rely on.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Design {
    pub groups: Vec<Group>,
    pub stories: Vec<Story>,
    pub images: Vec<Image>,
    pub layout: Layout,
    pub channels: Vec<String>,
}

impl Design {
    pub fn from_exhibit(exhibit: &Exhibit) -> Self {
        Self {
            groups: exhibit.groups.clone(),
            stories: exhibit.stories.clone(),
            images: exhibit.images.clone(),
            layout: exhibit.layout.clone(),
            channels: exhibit.channels.clone(),
        }
    }

    pub fn group_index(&self, name: &str) -> Option<usize> {
        super::exhibit::group_index(&self.groups, name)
    }
}

impl From<&Exhibit> for Design {
    fn from(exhibit: &Exhibit) -> Self {
        Self::from_exhibit(exhibit)
    }
}
