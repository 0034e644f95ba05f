//! Which categories take part in layout and rendering.

use crate::model::CategorizedProjects;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Visible by default next to the priority categories.
const ALWAYS_VISIBLE: &str = "aurora-virtual-chain";

/// Category key → visible flag. Keys not present are hidden.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VisibleSet {
    flags: IndexMap<String, bool>,
}

impl VisibleSet {
    /// Default selection: priority categories and `aurora-virtual-chain`.
    pub fn initial(categories: &CategorizedProjects) -> Self {
        Self::from_fn(categories, |key, is_priority| {
            is_priority || key == ALWAYS_VISIBLE
        })
    }

    /// Every category set to `visible`.
    pub fn all(categories: &CategorizedProjects, visible: bool) -> Self {
        Self::from_fn(categories, |_, _| visible)
    }

    /// Only priority categories visible.
    pub fn featured_only(categories: &CategorizedProjects) -> Self {
        Self::from_fn(categories, |_, is_priority| is_priority)
    }

    fn from_fn(categories: &CategorizedProjects, f: impl Fn(&str, bool) -> bool) -> Self {
        let flags = categories
            .iter()
            .map(|(key, c)| (key.to_string(), f(key, c.is_priority)))
            .collect();
        Self { flags }
    }

    pub fn is_visible(&self, key: &str) -> bool {
        self.flags.get(key).copied().unwrap_or(false)
    }

    pub fn set(&mut self, key: impl Into<String>, visible: bool) {
        self.flags.insert(key.into(), visible);
    }

    /// Flip one category; an unknown key becomes visible.
    pub fn toggle(&mut self, key: &str) {
        let now = !self.is_visible(key);
        self.set(key, now);
    }

    /// True when every known key is visible (vacuously true when empty).
    pub fn are_all_checked(&self) -> bool {
        self.flags.values().all(|v| *v)
    }

    /// Uncheck everything if all are checked, otherwise check everything.
    pub fn toggle_all(&mut self) {
        let value = !self.are_all_checked();
        for v in self.flags.values_mut() {
            *v = value;
        }
    }

    pub fn visible_keys(&self) -> impl Iterator<Item = &str> {
        self.flags
            .iter()
            .filter(|(_, v)| **v)
            .map(|(k, _)| k.as_str())
    }
}
