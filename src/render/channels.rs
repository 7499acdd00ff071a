// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Vitrine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Vitrine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Channel color coding for story text.
//!
//! Inline code spans in a story's markdown name channels. Each span that names a channel of the
//! active group gets that channel's color; anything else gets a neutral dashed marker.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

pub const NEUTRAL_MARKER_COLOR: &str = "#AAA";

const FENCE: &str = "```";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "style", rename_all = "lowercase")]
pub enum Marker {
    Solid { color: String },
    Dashed,
}

impl Marker {
    /// The underline rule for the marked span, e.g. `1px solid #FF0000`.
    pub fn border(&self) -> String {
        match self {
            Self::Solid { color } => format!("1px solid {color}"),
            Self::Dashed => format!("1px dashed {NEUTRAL_MARKER_COLOR}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelMark {
    pub text: String,
    pub marker: Marker,
}

/// Channel name → position. A repeated name maps to its last position.
pub fn channel_order(channels: &[String]) -> HashMap<&str, usize> {
    channels.iter().enumerate().map(|(i, channel)| (channel.as_str(), i)).collect()
}

/// `#`-prefixed color for a channel position, cycling through `colors`.
pub fn index_color(colors: &[String], index: Option<usize>) -> Option<String> {
    let index = index?;
    if colors.is_empty() {
        return None;
    }
    Some(format!("#{}", colors[index % colors.len()]))
}

/// Inline code spans in `markdown`, in order. Fenced code blocks are skipped.
pub fn code_spans(markdown: &str) -> Vec<&str> {
    let mut spans = Vec::new();
    let Some(inline_code) = inline_code_regex() else {
        return spans;
    };
    let mut in_fence = false;
    for line in markdown.lines() {
        if line.trim_start().starts_with(FENCE) {
            in_fence = !in_fence;
            continue;
        }
        if in_fence {
            continue;
        }
        spans.extend(
            inline_code
                .captures_iter(line)
                .filter_map(|caps| caps.get(1))
                .map(|m| m.as_str().trim())
                .filter(|text| !text.is_empty()),
        );
    }
    spans
}

pub fn channel_marks(markdown: &str, channels: &[String], colors: &[String]) -> Vec<ChannelMark> {
    let order = channel_order(channels);
    code_spans(markdown)
        .into_iter()
        .map(|text| {
            let marker = match index_color(colors, order.get(text).copied()) {
                Some(color) => Marker::Solid { color },
                None => Marker::Dashed,
            };
            ChannelMark { text: text.to_owned(), marker }
        })
        .collect()
}

fn inline_code_regex() -> Option<&'static Regex> {
    static INLINE_CODE: OnceLock<Option<Regex>> = OnceLock::new();
    INLINE_CODE.get_or_init(|| Regex::new(r"`([^`]+)`").ok()).as_ref()
}
