//! Ecosystem project catalog grouping and layout.
//!
//! This crate turns the project catalog served by the catalog API into an
//! ordered map of categories ([`aggregate::categorize_projects`]) and computes
//! the geometry front ends draw from it: the share-canvas treemap with icon
//! grids ([`layout::compute_layout`]), masonry columns and radial map nodes.
//!
//! The binary `ecomap` reads a catalog from a file or URL and prints the
//! results as JSON.

pub mod aggregate;
pub mod catalog;
pub mod layout;
pub mod model;
pub mod output;
pub mod palette;
pub mod visibility;
