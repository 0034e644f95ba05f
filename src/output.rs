//! Output types for front-end consumption.
//!
//! These structs are serialized to JSON and handed to the renderer. Colours
//! are attached here from the [`Palette`]; the core types never carry them.

use indexmap::IndexMap;
use serde::Serialize;

use crate::layout::LayoutRegion;
use crate::layout::radial::MapNode;
use crate::model::{CategorizedProjects, Category};
use crate::palette::Palette;

/// A category as the card and category views consume it.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryOutput<'a> {
    #[serde(flatten)]
    pub category: &'a Category,
    pub color: &'a str,
}

/// A share-canvas region with its colour.
#[derive(Debug, Clone, Serialize)]
pub struct RegionOutput<'a> {
    #[serde(flatten)]
    pub region: &'a LayoutRegion,
    pub color: &'a str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

/// The share preview: canvas size plus one region per visible category.
#[derive(Debug, Clone, Serialize)]
pub struct ShareLayoutOutput<'a> {
    pub canvas: CanvasSize,
    pub regions: Vec<RegionOutput<'a>>,
}

/// Masonry card view: category keys per column.
#[derive(Debug, Clone, Serialize)]
pub struct MasonryOutput<'a> {
    pub columns: Vec<Vec<&'a str>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MapOutput<'a> {
    pub nodes: &'a [MapNode],
}

/// Attach colours to every category, keeping map order.
pub fn categories_output<'a>(
    categories: &'a CategorizedProjects,
    palette: &'a Palette,
) -> IndexMap<&'a str, CategoryOutput<'a>> {
    categories
        .iter()
        .map(|(key, category)| {
            (
                key,
                CategoryOutput {
                    category,
                    color: palette.color_for(key),
                },
            )
        })
        .collect()
}

pub fn share_layout_output<'a>(
    canvas: CanvasSize,
    regions: &'a [LayoutRegion],
    palette: &'a Palette,
) -> ShareLayoutOutput<'a> {
    ShareLayoutOutput {
        canvas,
        regions: regions
            .iter()
            .map(|region| RegionOutput {
                region,
                color: palette.color_for(&region.key),
            })
            .collect(),
    }
}
