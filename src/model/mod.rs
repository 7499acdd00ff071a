// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Vitrine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Vitrine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! An exhibit contains groups (alternative renderings) and stories made of waypoints. A
//! [`Design`] is the session's mutable copy of it.

pub mod design;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod exhibit;
pub mod geometry;

pub use design::Design;
pub use exhibit::{Exhibit, Group, Image, Layout, Story, Waypoint, DEFAULT_TILE_SIZE};
pub use geometry::{round4, Point, Rect, Viewport};
