//! Column assignment for the masonry card view.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Column counts keyed by the largest viewport width they apply to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoints {
    /// Used when the viewport is wider than every breakpoint.
    pub default_columns: usize,
    pub by_max_width: BTreeMap<u32, usize>,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            default_columns: 5,
            by_max_width: BTreeMap::from([(1400, 4), (1100, 3), (700, 2), (500, 1)]),
        }
    }
}

impl Breakpoints {
    /// Columns for a viewport `width` pixels wide: the tightest breakpoint
    /// that still covers `width`, else the default. Never zero.
    pub fn columns_for_width(&self, width: u32) -> usize {
        self.by_max_width
            .range(width..)
            .next()
            .map(|(_, cols)| *cols)
            .unwrap_or(self.default_columns)
            .max(1)
    }
}

/// Deal `items` into `columns` columns: item `i` lands in column `i % columns`.
/// Relative order is kept inside every column.
pub fn distribute<T: Clone>(items: &[T], columns: usize) -> Vec<Vec<T>> {
    let columns = columns.max(1);
    let mut out: Vec<Vec<T>> = vec![Vec::new(); columns];
    for (i, item) in items.iter().enumerate() {
        out[i % columns].push(item.clone());
    }
    out
}
