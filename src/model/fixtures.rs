// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Vitrine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Vitrine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::exhibit::{Exhibit, Group, Image, Layout, Story, Waypoint};
use super::geometry::{Point, Rect};

fn group(name: &str, path: &str, colors: &[&str], channels: &[&str]) -> Group {
    Group {
        name: name.to_owned(),
        path: path.to_owned(),
        colors: colors.iter().map(|c| (*c).to_owned()).collect(),
        channels: channels.iter().map(|c| (*c).to_owned()).collect(),
    }
}

pub(crate) fn waypoint(name: &str, group: &str, zoom: f64, pan: (f64, f64), highlight: Rect) -> Waypoint {
    Waypoint {
        name: name.to_owned(),
        description: format!("{name} description"),
        zoom,
        pan: Point::new(pan.0, pan.1),
        group: group.to_owned(),
        highlight,
    }
}

/// Two groups; story 0 has three waypoints, story 1 has two.
pub(crate) fn two_group_exhibit() -> Exhibit {
    Exhibit {
        groups: vec![
            group("Nuclei", "nuclei", &["0000FF", "FFFFFF"], &["DNA", "Ki67"]),
            group("Immune", "immune", &["FF0000", "00FF00", "FFFF00"], &["CD3", "CD8", "CD20"]),
        ],
        stories: vec![
            Story {
                name: "Overview".to_owned(),
                description: "Nuclei stained with `DNA` and `Ki67`.".to_owned(),
                waypoints: vec![
                    waypoint("Whole slide", "Nuclei", 1.0, (0.5, 0.5), Rect::new(0.0, 0.0, 1.0, 1.0)),
                    waypoint("Tumor", "Nuclei", 4.0, (0.3, 0.4), Rect::new(0.25, 0.35, 0.1, 0.1)),
                    waypoint("Margin", "Immune", 8.0, (0.7, 0.2), Rect::new(0.65, 0.15, 0.1, 0.1)),
                ],
            },
            Story {
                name: "Immune infiltrate".to_owned(),
                description: "`CD3` and `CD8` cells, not `PanCK`.".to_owned(),
                waypoints: vec![
                    waypoint("T cells", "Immune", 2.0, (0.4, 0.6), Rect::new(0.3, 0.5, 0.2, 0.2)),
                    waypoint("B cells", "Immune", 3.0, (0.6, 0.4), Rect::new(0.5, 0.3, 0.2, 0.2)),
                ],
            },
        ],
        images: vec![Image {
            name: "slide-1".to_owned(),
            description: "Primary tumor".to_owned(),
            path: "images/slide-1".to_owned(),
            width: 4000,
            height: 3000,
            max_level: 5,
            tile_size: [1024, 1024],
        }],
        layout: Layout { grid: vec![vec!["slide-1".to_owned()]], target: None },
        channels: vec!["DNA".to_owned(), "Ki67".to_owned()],
    }
}
