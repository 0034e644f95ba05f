use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::visibility::VisibleSet;

/// Image shown when a catalog entry carries no logo.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

// ────────────────────────────────────────────────────────────────────────────
// CatalogSnapshot – binary serialization wrapper
// ────────────────────────────────────────────────────────────────────────────

/// A normalized catalog fetched once and kept for offline runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    /// URL or file path the catalog was read from.
    pub fetched_from: String,
    pub projects: Vec<RawProject>,
}

const SNAPSHOT_MAGIC: &[u8; 6] = b"ECOMAP";
const SNAPSHOT_VERSION: u32 = 1;

fn write_header(writer: &mut impl Write) -> std::io::Result<()> {
    writer.write_all(SNAPSHOT_MAGIC)?;
    writer.write_all(&SNAPSHOT_VERSION.to_le_bytes())
}

fn check_header(reader: &mut impl Read) -> Result<()> {
    let mut header = [0u8; 10];
    reader.read_exact(&mut header).context("Snapshot is truncated")?;
    if &header[..6] != SNAPSHOT_MAGIC {
        bail!("Invalid magic bytes: expected 'ECOMAP'");
    }
    let version = u32::from_le_bytes([header[6], header[7], header[8], header[9]]);
    if version != SNAPSHOT_VERSION {
        bail!("Unsupported snapshot version: {}", version);
    }
    Ok(())
}

impl CatalogSnapshot {
    /// Write the snapshot as `ECOMAP`, a little-endian version, then bincode.
    pub fn save_to_binary(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let write = || -> Result<()> {
            let mut writer = BufWriter::new(File::create(path)?);
            write_header(&mut writer)?;
            bincode::serde::encode_into_std_write(self, &mut writer, bincode::config::standard())?;
            writer.flush()?;
            Ok(())
        };
        write().with_context(|| format!("Failed to write snapshot {}", path.display()))
    }

    /// Load a snapshot written by [`CatalogSnapshot::save_to_binary`].
    pub fn load_from_binary(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let read = || -> Result<Self> {
            let mut reader = BufReader::new(File::open(path)?);
            check_header(&mut reader)?;
            Ok(bincode::serde::decode_from_std_read(
                &mut reader,
                bincode::config::standard(),
            )?)
        };
        read().with_context(|| format!("Failed to read snapshot {}", path.display()))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// RawProject
// ────────────────────────────────────────────────────────────────────────────

/// A catalog entry after boundary validation.
///
/// `tags` keeps the order in which the catalog listed them, mapping the raw
/// tag-key (which may still contain spaces) to its human readable title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawProject {
    /// Catalog id (the key of the entry in the API response).
    pub id: String,
    pub name: String,
    pub image: String,
    pub tagline: String,
    pub tags: IndexMap<String, String>,
}

impl RawProject {
    /// Build a project with no tagline and the placeholder image.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image: PLACEHOLDER_IMAGE.to_string(),
            tagline: String::new(),
            tags: IndexMap::new(),
        }
    }

    pub fn with_tag(mut self, key: impl Into<String>, title: impl Into<String>) -> Self {
        self.tags.insert(key.into(), title.into());
        self
    }

    pub fn with_tagline(mut self, tagline: impl Into<String>) -> Self {
        self.tagline = tagline.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Category
// ────────────────────────────────────────────────────────────────────────────

/// Project summary as listed inside a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub image: String,
    pub tagline: String,
}

impl From<&RawProject> for Project {
    fn from(raw: &RawProject) -> Self {
        Self {
            name: raw.name.clone(),
            image: raw.image.clone(),
            tagline: raw.tagline.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub title: String,
    /// Unique by name, in first-seen order.
    pub projects: Vec<Project>,
    #[serde(rename = "isPriority")]
    pub is_priority: bool,
}

impl Category {
    pub fn new(title: impl Into<String>, is_priority: bool) -> Self {
        Self {
            title: title.into(),
            projects: Vec::new(),
            is_priority,
        }
    }

    /// Append `project` unless a project with the same name is already listed.
    /// Returns whether it was added.
    pub fn push_unique(&mut self, project: Project) -> bool {
        if self.projects.iter().any(|p| p.name == project.name) {
            return false;
        }
        self.projects.push(project);
        true
    }
}

/// Ordered mapping from normalized tag-key to category.
///
/// Iteration order is part of the contract: priority categories first, each
/// group sorted by title. Serializes as a JSON object in that order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategorizedProjects {
    categories: IndexMap<String, Category>,
}

impl CategorizedProjects {
    pub(crate) fn from_ordered(categories: IndexMap<String, Category>) -> Self {
        Self { categories }
    }

    /// Look a category up by its key (the slug used by category pages).
    pub fn get(&self, key: &str) -> Option<&Category> {
        self.categories.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.categories.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Category)> {
        self.categories.iter().map(|(k, c)| (k.as_str(), c))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(|k| k.as_str())
    }

    /// Categories selected by `visible`, in map order.
    pub fn visible<'a>(&'a self, visible: &VisibleSet) -> Vec<(&'a str, &'a Category)> {
        self.iter().filter(|(k, _)| visible.is_visible(k)).collect()
    }

    /// Number of distinct project names across all categories.
    pub fn project_count(&self) -> usize {
        let mut names: Vec<&str> = self
            .categories
            .values()
            .flat_map(|c| c.projects.iter().map(|p| p.name.as_str()))
            .collect();
        names.sort_unstable();
        names.dedup();
        names.len()
    }
}
