//! Share-canvas layout for categorized projects.
//!
//! Goals:
//! - Deterministic: no randomness, output depends only on the inputs
//! - One rectangle per visible category, sized by project count and bounded
//!   by a minimum and maximum fraction of the canvas
//! - No overlap: rectangles tile the padded canvas, then shrink by half the
//!   inner padding on every side
//! - Uniform icons per region, never smaller than `min_icon_size`; projects
//!   that don't fit are reported as overflow
//!
//! Submodules:
//! - treemap: area shares and the recursive split
//! - icon_grid: columns/rows/icon size inside one region
//! - masonry: column assignment for the card view
//! - radial: node positions for the ecosystem map

use log::debug;
use serde::{Deserialize, Serialize};

use crate::model::{CategorizedProjects, Category, Project};
use crate::visibility::VisibleSet;

mod geometry;
mod icon_grid;
pub mod masonry;
pub mod radial;
pub mod treemap;

pub use geometry::Rect;
pub use icon_grid::{IconGrid, resolve_icon_grid};

/// How a category's project count turns into treemap weight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weighting {
    /// Area proportional to the number of projects.
    Linear,
    /// Area proportional to the square root of the number of projects, which
    /// keeps small categories readable next to large ones.
    #[default]
    SquareRoot,
}

impl Weighting {
    /// Weight for a category with `count` projects; empty categories weigh
    /// the same as a single project.
    pub fn weight(&self, count: usize) -> f64 {
        let n = count.max(1) as f64;
        match self {
            Weighting::Linear => n,
            Weighting::SquareRoot => n.sqrt(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub canvas_width: f64,
    pub canvas_height: f64,
    /// Margin between the canvas edge and the regions.
    pub outer_padding: f64,
    /// Space between neighbouring regions.
    pub inner_padding: f64,
    /// Height reserved at the top of each region for the category title.
    pub header_height: f64,
    pub min_icon_size: f64,
    pub max_icon_size: f64,
    /// Space between neighbouring icons.
    pub icon_gap: f64,
    pub weighting: Weighting,
    /// Smallest share of the padded canvas any region gets.
    pub min_area_fraction: f64,
    /// Largest share of the padded canvas any region gets.
    pub max_area_fraction: f64,
    /// Give up one icon cell for a "+N more" marker when truncating.
    pub reserve_overflow_cell: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            canvas_width: 1920.0,
            canvas_height: 1080.0,
            outer_padding: 24.0,
            inner_padding: 16.0,
            header_height: 32.0,
            min_icon_size: 32.0,
            max_icon_size: 72.0,
            icon_gap: 8.0,
            weighting: Weighting::SquareRoot,
            min_area_fraction: 0.02,
            max_area_fraction: 0.5,
            reserve_overflow_cell: true,
        }
    }
}

impl LayoutConfig {
    /// The canvas minus outer padding.
    pub fn available_area(&self) -> Rect {
        Rect::new(
            self.outer_padding,
            self.outer_padding,
            self.canvas_width - 2.0 * self.outer_padding,
            self.canvas_height - 2.0 * self.outer_padding,
        )
    }
}

/// Placement of one category on the share canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutRegion {
    pub key: String,
    pub title: String,
    /// The region including its header band.
    pub rect: Rect,
    /// The part of `rect` below the header that holds the icons.
    pub content: Rect,
    pub grid: IconGrid,
    /// Projects to draw, in category order (possibly truncated).
    pub projects: Vec<Project>,
    /// Projects left out; equals `grid.overflow`.
    pub overflow: usize,
}

impl LayoutRegion {
    /// Rectangle of every used grid cell, row-major: the displayed icons
    /// followed by the "+N more" marker cell when there is one.
    pub fn icon_cells(&self) -> Vec<Rect> {
        let g = &self.grid;
        if g.columns == 0 {
            return Vec::new();
        }
        let step = g.icon_size + g.gap;
        (0..g.cells_used())
            .map(|i| {
                let col = (i % g.columns) as f64;
                let row = (i / g.columns) as f64;
                Rect::new(
                    self.content.x + col * step,
                    self.content.y + row * step,
                    g.icon_size,
                    g.icon_size,
                )
            })
            .collect()
    }
}

/// Lay out `categories` (already filtered and ordered) on the canvas.
///
/// Returns one region per category in input order, or nothing when there are
/// no categories or the padded canvas has no area.
pub fn compute_layout(categories: &[(&str, &Category)], cfg: &LayoutConfig) -> Vec<LayoutRegion> {
    if categories.is_empty() {
        return Vec::new();
    }
    let bounds = cfg.available_area();
    if !(bounds.w > 0.0 && bounds.h > 0.0) {
        debug!(
            "canvas {}x{} has no room after {} outer padding",
            cfg.canvas_width, cfg.canvas_height, cfg.outer_padding
        );
        return Vec::new();
    }

    let weights: Vec<f64> = categories
        .iter()
        .map(|(_, c)| cfg.weighting.weight(c.projects.len()))
        .collect();
    let shares = treemap::clamp_shares(&weights, cfg.min_area_fraction, cfg.max_area_fraction);
    let rects = treemap::partition(&shares, bounds);

    categories
        .iter()
        .zip(rects)
        .map(|((key, category), tile)| {
            let rect = tile.inset(cfg.inner_padding.max(0.0) / 2.0);
            let content = rect.below_header(cfg.header_height);
            let grid = resolve_icon_grid(content.w, content.h, category.projects.len(), cfg);
            if grid.overflow > 0 {
                debug!(
                    "category `{}`: showing {} of {} projects",
                    key,
                    grid.displayed,
                    category.projects.len()
                );
            }
            LayoutRegion {
                key: key.to_string(),
                title: category.title.clone(),
                rect,
                content,
                projects: category.projects[..grid.displayed].to_vec(),
                overflow: grid.overflow,
                grid,
            }
        })
        .collect()
}

/// Convenience: filter `categories` by `visible` and lay them out.
pub fn layout_visible(
    categories: &CategorizedProjects,
    visible: &VisibleSet,
    cfg: &LayoutConfig,
) -> Vec<LayoutRegion> {
    compute_layout(&categories.visible(visible), cfg)
}
