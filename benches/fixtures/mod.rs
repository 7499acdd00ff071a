// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Vitrine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Vitrine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use vitrine::format::{HashQuery, HashValue};
use vitrine::model::{Exhibit, Group, Point, Rect, Story, Waypoint};

fn ascii_repeat_to_len(prefix: &str, fill: char, target_len: usize) -> String {
    if prefix.len() >= target_len {
        return prefix[..target_len].to_owned();
    }

    let mut out = String::with_capacity(target_len);
    out.push_str(prefix);
    while out.len() < target_len {
        out.push(fill);
    }
    out
}

/// Free text with spaces, punctuation and non-ASCII, so escaping does real work.
pub fn note(len: usize) -> String {
    let mut out = String::with_capacity(len + 8);
    let words = ["CD3+", "T cells", "near", "the", "tumor/stroma", "margin,", "Ki-67 ≥ 20%"];
    let mut i = 0;
    while out.len() < len {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(words[i % words.len()]);
        i += 1;
    }
    out
}

pub fn checksum_query(query: &HashQuery) -> u64 {
    let mut acc = 0u64;
    for (key, value) in query {
        acc = acc.wrapping_mul(131).wrapping_add(key.len() as u64);
        acc = acc.wrapping_mul(131).wrapping_add(value.joined().len() as u64);
    }
    acc
}

pub fn exhibit_query(story: usize, waypoint: usize, group: usize) -> HashQuery {
    let mut query = HashQuery::new();
    query.insert("s".into(), HashValue::scalar(story.to_string()));
    query.insert("w".into(), HashValue::scalar(waypoint.to_string()));
    query.insert("g".into(), HashValue::scalar(group.to_string()));
    query.insert("v".into(), HashValue::numbers(&[2.5, 0.4321, 0.6789]));
    query
}

pub mod exhibit {
    use super::*;

    #[derive(Debug, Clone, Copy)]
    pub struct Params {
        pub stories: usize,
        pub waypoints_per_story: usize,
        pub groups: usize,
        pub channels_per_group: usize,
        pub description_len: usize,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Case {
        Small,
        Medium,
        Large,
    }

    impl Case {
        pub fn id(self) -> &'static str {
            match self {
                Self::Small => "small",
                Self::Medium => "medium",
                Self::Large => "large",
            }
        }

        pub fn params(self) -> Params {
            match self {
                Self::Small => Params {
                    stories: 2,
                    waypoints_per_story: 3,
                    groups: 2,
                    channels_per_group: 3,
                    description_len: 120,
                },
                Self::Medium => Params {
                    stories: 12,
                    waypoints_per_story: 10,
                    groups: 8,
                    channels_per_group: 6,
                    description_len: 600,
                },
                Self::Large => Params {
                    stories: 60,
                    waypoints_per_story: 25,
                    groups: 24,
                    channels_per_group: 12,
                    description_len: 2_000,
                },
            }
        }
    }

    pub fn build(params: Params) -> Exhibit {
        let groups: Vec<Group> = (0..params.groups)
            .map(|g| Group {
                name: format!("Group {g}"),
                path: format!("group-{g}"),
                colors: (0..params.channels_per_group)
                    .map(|c| format!("{:02X}{:02X}{:02X}", (g * 37) % 256, (c * 53) % 256, 128))
                    .collect(),
                channels: (0..params.channels_per_group).map(|c| format!("CH{g}_{c}")).collect(),
            })
            .collect();

        let stories = (0..params.stories)
            .map(|s| {
                let group = &groups[s % groups.len()];
                let mentions: Vec<String> =
                    group.channels.iter().map(|channel| format!("`{channel}`")).collect();
                let prefix = format!("Story {s} shows {}. ", mentions.join(", "));
                Story {
                    name: format!("Story {s}"),
                    description: ascii_repeat_to_len(&prefix, '.', params.description_len),
                    waypoints: (0..params.waypoints_per_story)
                        .map(|w| {
                            let t = (w as f64 + 1.0) / (params.waypoints_per_story as f64 + 1.0);
                            Waypoint {
                                name: format!("Waypoint {s}.{w}"),
                                description: note(params.description_len / 4),
                                zoom: 1.0 + w as f64,
                                pan: Point::new(t, 1.0 - t),
                                group: groups[(s + w) % groups.len()].name.clone(),
                                highlight: Rect::new(t - 0.05, 0.95 - t, 0.1, 0.1),
                            }
                        })
                        .collect(),
                }
            })
            .collect();

        Exhibit { groups, stories, ..Exhibit::default() }
    }

    pub fn fixture(case: Case) -> Exhibit {
        build(case.params())
    }
}
