// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Vitrine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Vitrine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

/// A point in viewer world coordinates.
///
/// Serialized as a two-element array (`[x, y]`), which is how exhibit sources store `Pan`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Point> for [f64; 2] {
    fn from(point: Point) -> Self {
        [point.x, point.y]
    }
}

/// Axis-aligned rectangle in viewer world coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn to_array(self) -> [f64; 4] {
        [self.x, self.y, self.width, self.height]
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

impl Default for Rect {
    fn default() -> Self {
        Self::new(0.0, 0.0, 1.0, 1.0)
    }
}

/// Camera state: zoom factor plus the world point at the center of the view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub zoom: f64,
    pub pan: Point,
}

impl Viewport {
    pub const fn new(zoom: f64, pan: Point) -> Self {
        Self { zoom, pan }
    }

    /// Builds a viewport from live viewer readings, rounded to 4 decimal places so the encoded
    /// address stays short.
    pub fn captured(zoom: f64, center: Point) -> Self {
        Self { zoom: round4(zoom), pan: Point::new(round4(center.x), round4(center.y)) }
    }

    pub fn to_array(self) -> [f64; 3] {
        [self.zoom, self.pan.x, self.pan.y]
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1.0, Point::new(0.5, 0.5))
    }
}

pub fn round4(value: f64) -> f64 {
    const SCALE: f64 = 10_000.0;
    (value * SCALE).round() / SCALE
}
