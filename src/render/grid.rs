// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Vitrine-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Vitrine and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::model::{Image, Layout, Rect};

/// Fraction of the world height left between rows and columns.
pub const SPACING_FRACTION: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridKind {
    Grid,
    Target,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    EmptyGrid,
    MissingImage { name: String },
    ZeroSizedImage { name: String },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => f.write_str("layout grid has no images"),
            Self::MissingImage { name } => write!(f, "layout references unknown image {name:?}"),
            Self::ZeroSizedImage { name } => write!(f, "image {name:?} has a zero width or height"),
        }
    }
}

impl std::error::Error for LayoutError {}

/// Where one image sits in viewer world coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImagePlacement {
    pub name: String,
    pub description: String,
    pub bounds: Rect,
}

/// Resolves the image names of a layout grid to image records.
///
/// A missing `Target` grid resolves to no rows.
pub fn unpack_grid<'a>(
    layout: &Layout,
    images: &'a [Image],
    kind: GridKind,
) -> Result<Vec<Vec<&'a Image>>, LayoutError> {
    let by_name: HashMap<&str, &Image> =
        images.iter().map(|image| (image.name.as_str(), image)).collect();
    let rows = match kind {
        GridKind::Grid => layout.grid.as_slice(),
        GridKind::Target => layout.target.as_deref().unwrap_or_default(),
    };

    rows.iter()
        .map(|row| {
            row.iter()
                .map(|name| {
                    by_name
                        .get(name.as_str())
                        .copied()
                        .ok_or_else(|| LayoutError::MissingImage { name: name.clone() })
                })
                .collect()
        })
        .collect()
}

/// Places grid images row by row.
///
/// Cells are sized by the largest image; every row shares the world height `1` minus spacing,
/// and each image is centered horizontally in its cell.
pub fn arrange_grid(grid: &[Vec<&Image>]) -> Result<Vec<ImagePlacement>, LayoutError> {
    let images = || grid.iter().flatten();
    if images().next().is_none() {
        return Err(LayoutError::EmptyGrid);
    }
    if let Some(image) = images().find(|image| image.width == 0 || image.height == 0) {
        return Err(LayoutError::ZeroSizedImage { name: image.name.clone() });
    }

    let rows = grid.len() as f64;
    let max_width = images().map(|image| f64::from(image.width)).fold(0.0, f64::max);
    let max_height = images().map(|image| f64::from(image.height)).fold(0.0, f64::max);

    let cell_height = (1.0 + SPACING_FRACTION) / rows - SPACING_FRACTION;
    let cell_width = cell_height * max_width / max_height;

    let mut placements = Vec::new();
    for (yi, row) in grid.iter().enumerate() {
        let y = yi as f64 * (cell_height + SPACING_FRACTION);
        for (xi, image) in row.iter().enumerate() {
            let (width, height) = (f64::from(image.width), f64::from(image.height));
            let display_height = cell_height * height / max_height;
            let display_width = display_height * width / height;
            let x = xi as f64 * (cell_width + SPACING_FRACTION) + (cell_width - display_width) / 2.0;
            placements.push(ImagePlacement {
                name: image.name.clone(),
                description: image.description.clone(),
                bounds: Rect::new(x, y, display_width, height / width * display_width),
            });
        }
    }
    Ok(placements)
}

/// Convenience: unpack the main grid and arrange it.
pub fn arrange_layout(layout: &Layout, images: &[Image]) -> Result<Vec<ImagePlacement>, LayoutError> {
    let grid = unpack_grid(layout, images, GridKind::Grid)?;
    arrange_grid(&grid)
}

#[cfg(test)]
mod tests {
    use super::{arrange_grid, arrange_layout, unpack_grid, GridKind, LayoutError, SPACING_FRACTION};
    use crate::model::{Image, Layout, DEFAULT_TILE_SIZE};

    fn image(name: &str, width: u32, height: u32) -> Image {
        Image {
            name: name.to_owned(),
            description: String::new(),
            path: String::new(),
            width,
            height,
            max_level: 0,
            tile_size: DEFAULT_TILE_SIZE,
        }
    }

    fn layout(rows: &[&[&str]]) -> Layout {
        Layout {
            grid: rows.iter().map(|row| row.iter().map(|n| (*n).to_owned()).collect()).collect(),
            target: None,
        }
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn single_image_fills_unit_height() {
        let images = vec![image("a", 2000, 1000)];
        let placements = arrange_layout(&layout(&[&["a"]]), &images).expect("arrange");

        let bounds = placements[0].bounds;
        assert!(approx(bounds.x, 0.0));
        assert!(approx(bounds.y, 0.0));
        assert!(approx(bounds.height, 1.0));
        assert!(approx(bounds.width, 2.0));
    }

    #[test]
    fn two_rows_share_height_and_center_narrow_images() {
        let images = vec![image("wide", 2000, 1000), image("narrow", 500, 1000)];
        let placements =
            arrange_layout(&layout(&[&["wide"], &["narrow"]]), &images).expect("arrange");

        let cell_height = (1.0 - SPACING_FRACTION) / 2.0;
        let cell_width = cell_height * 2.0;
        let narrow = placements[1].bounds;
        assert!(approx(narrow.y, cell_height + SPACING_FRACTION));
        assert!(approx(narrow.height, cell_height));
        assert!(approx(narrow.width, cell_height / 2.0));
        assert!(approx(narrow.x, (cell_width - narrow.width) / 2.0));
    }

    #[test]
    fn unknown_image_names_fail() {
        let err = unpack_grid(&layout(&[&["ghost"]]), &[], GridKind::Grid).expect_err("missing");
        assert_eq!(err, LayoutError::MissingImage { name: "ghost".to_owned() });
    }

    #[test]
    fn missing_target_is_empty() {
        let images = [image("a", 1, 1)];
        let grid = unpack_grid(&layout(&[&["a"]]), &images, GridKind::Target)
            .expect("unpack");
        assert!(grid.is_empty());
        assert_eq!(arrange_grid(&grid), Err(LayoutError::EmptyGrid));
    }

    #[test]
    fn zero_sized_images_fail() {
        let images = vec![image("flat", 100, 0)];
        let err = arrange_layout(&layout(&[&["flat"]]), &images).expect_err("zero height");
        assert_eq!(err, LayoutError::ZeroSizedImage { name: "flat".to_owned() });
    }
}
