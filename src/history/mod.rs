// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Vitrine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Vitrine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! History synchronization.
//!
//! The address bar and history stack sit behind [`NavigationPort`]; [`MemoryHistory`] is the
//! in-process implementation used by the terminal viewer.

mod memory;
pub mod port;
pub mod sync;

pub use memory::MemoryHistory;
pub use port::{HistoryEntry, Location, NavigateEvent, NavigationPort};
pub use sync::{
    exhibit_address, plan_commit, tag_address, CommitAction, HistorySync, NavigateOutcome,
};
