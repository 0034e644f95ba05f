//! Node placement for the radial ecosystem map.
//!
//! Categories sit evenly on a large circle in the XZ plane and every
//! category's projects sit evenly on a small circle around it. The y
//! coordinate is always zero, so the same positions serve a flat 2D map.

use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use crate::model::Category;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadialConfig {
    /// Radius of the circle holding category nodes.
    pub radius: f64,
    /// Radius of the circle of projects around each category node.
    pub project_radius: f64,
    pub category_scale: f64,
    pub project_scale: f64,
}

impl Default for RadialConfig {
    fn default() -> Self {
        Self {
            radius: 15.0,
            project_radius: 5.0,
            category_scale: 2.0,
            project_scale: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum NodeKind {
    Category { key: String },
    Project,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapNode {
    #[serde(flatten)]
    pub kind: NodeKind,
    pub label: String,
    pub position: [f64; 3],
    pub scale: f64,
}

fn on_circle(center: [f64; 3], radius: f64, index: usize, count: usize) -> [f64; 3] {
    let angle = index as f64 * TAU / count as f64;
    [
        center[0] + angle.cos() * radius,
        center[1],
        center[2] + angle.sin() * radius,
    ]
}

/// Nodes for `categories` in order; each category node is followed by its
/// project nodes.
pub fn radial_map(categories: &[(&str, &Category)], cfg: &RadialConfig) -> Vec<MapNode> {
    let n = categories.len();
    let project_count: usize = categories.iter().map(|(_, c)| c.projects.len()).sum();
    let mut nodes = Vec::with_capacity(n + project_count);
    for (i, (key, category)) in categories.iter().enumerate() {
        let center = on_circle([0.0; 3], cfg.radius, i, n);
        nodes.push(MapNode {
            kind: NodeKind::Category {
                key: key.to_string(),
            },
            label: category.title.clone(),
            position: center,
            scale: cfg.category_scale,
        });
        let m = category.projects.len();
        for (j, project) in category.projects.iter().enumerate() {
            nodes.push(MapNode {
                kind: NodeKind::Project,
                label: project.name.clone(),
                position: on_circle(center, cfg.project_radius, j, m),
                scale: cfg.project_scale,
            });
        }
    }
    nodes
}
