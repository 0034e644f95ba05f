//! Category aggregation: group raw projects by normalized tag-key.
//!
//! Projects are processed in catalog order. A category's title is the
//! tag-title carried by the first project seen with that key, and within a
//! category the first project with a given name wins. The resulting map lists
//! priority categories first, each group sorted by title.

use crate::model::{CategorizedProjects, Category, Project, RawProject};
use indexmap::IndexMap;
use indexmap::map::Entry;
use log::debug;

/// Category keys that are featured and sorted ahead of the rest.
pub const PRIORITY_CATEGORIES: &[&str] = &[
    "ai",
    "aurora-virtual-chain",
    "borrowing-lending",
    "dex",
    "ecosystem-support",
    "education",
    "game",
    "launchpad",
    "liquid-staking",
    "memecoin",
    "nft",
    "wallet",
];

/// Replace every space in a tag-key with a hyphen. No other normalization.
pub fn normalize_tag_key(tag: &str) -> String {
    tag.replace(' ', "-")
}

/// Group `projects` into categories using [`PRIORITY_CATEGORIES`].
pub fn categorize_projects(projects: &[RawProject]) -> CategorizedProjects {
    categorize_projects_with(projects, PRIORITY_CATEGORIES)
}

/// Group `projects` into categories, flagging keys listed in `priority_keys`.
pub fn categorize_projects_with(
    projects: &[RawProject],
    priority_keys: &[&str],
) -> CategorizedProjects {
    let mut categories: IndexMap<String, Category> = IndexMap::new();

    for project in projects {
        if project.name.is_empty() {
            debug!(
                "project `{}` has no name; skipping {} tag association(s)",
                project.id,
                project.tags.len()
            );
            continue;
        }
        for (tag, title) in &project.tags {
            let key = normalize_tag_key(tag);
            let category = match categories.entry(key) {
                Entry::Occupied(e) => e.into_mut(),
                Entry::Vacant(e) => {
                    let is_priority = priority_keys.contains(&e.key().as_str());
                    e.insert(Category::new(title.clone(), is_priority))
                }
            };
            category.push_unique(Project::from(project));
        }
    }

    // Stable sort: ties on title keep first-seen order.
    categories.sort_by(|_, a, _, b| {
        b.is_priority
            .cmp(&a.is_priority)
            .then_with(|| a.title.cmp(&b.title))
    });

    CategorizedProjects::from_ordered(categories)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_spaces_are_replaced() {
        assert_eq!(normalize_tag_key("liquid staking"), "liquid-staking");
        assert_eq!(normalize_tag_key("Zero  Knowledge"), "Zero--Knowledge");
        assert_eq!(normalize_tag_key(" ai"), "-ai");
        assert_eq!(normalize_tag_key("dex"), "dex");
    }
}
