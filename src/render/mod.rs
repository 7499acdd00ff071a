// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Vitrine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Vitrine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! View projection for the exhibit viewer.
//!
//! Turns navigation state into viewer instructions (camera, highlight overlay, group visibility,
//! story panel) and pushes them through the [`ViewerPort`] seam. Grid arrangement places the
//! layout's images in viewer world coordinates.

pub mod channels;
pub mod grid;
mod headless;
pub mod projector;

pub use channels::{channel_marks, ChannelMark, Marker};
pub use grid::{arrange_grid, arrange_layout, unpack_grid, GridKind, ImagePlacement, LayoutError};
pub use headless::HeadlessViewer;
pub use projector::{
    apply_view, project, refresh, GroupVisibility, StoryPanel, ViewInstructions, ViewerPort,
    HIGHLIGHT_OVERLAY_ID,
};
