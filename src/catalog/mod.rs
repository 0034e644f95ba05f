//! Project catalog ingest.
//!
//! The catalog API returns a loosely typed JSON object keyed by project id.
//! This module mirrors that shape with permissive serde types and converts it
//! into validated [`RawProject`]s before any aggregation runs:
//!
//! - [`source`] – where the document comes from (file, HTTP, memory)
//! - [`parse_catalog`] – JSON to [`CatalogResponse`]
//! - [`normalize_catalog`] – [`CatalogResponse`] to [`RawProject`]s

pub mod source;

pub use source::*;

use crate::model::{CatalogSnapshot, PLACEHOLDER_IMAGE, RawProject};
use anyhow::{Context, Result};
use indexmap::IndexMap;
use log::{debug, info, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// The catalog document: project id → entry, in document order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatalogResponse {
    pub entries: IndexMap<String, CatalogEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogEntry {
    #[serde(default, deserialize_with = "lenient")]
    pub profile: Option<Profile>,
}

/// Every field is optional and a value of the wrong JSON type reads as
/// absent, so one bad entry never fails the document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default)]
    pub image: Option<ImageField>,
    #[serde(default, deserialize_with = "lenient")]
    pub tagline: Option<String>,
    #[serde(default)]
    pub tags: Option<TagsField>,
}

/// Deserialize `T` if the value has the right shape, `None` otherwise.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

/// The API sends `{ "url": ... }`, occasionally a bare string, and sometimes
/// junk such as `false` for entries without a logo.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageField {
    Object {
        #[serde(default, deserialize_with = "lenient")]
        url: Option<String>,
    },
    Url(String),
    Other(serde_json::Value),
}

impl ImageField {
    pub fn url(&self) -> Option<&str> {
        match self {
            ImageField::Object { url } => url.as_deref(),
            ImageField::Url(url) => Some(url.as_str()),
            ImageField::Other(_) => None,
        }
    }
}

/// Tags are an object of tag-key → title; empty tag sets arrive as `[]`.
/// Titles are kept as raw JSON and checked per tag during normalization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagsField {
    Map(IndexMap<String, serde_json::Value>),
    Other(serde_json::Value),
}

/// Result of [`normalize_catalog`].
#[derive(Debug, Clone, Default)]
pub struct Ingested {
    /// Valid projects in document order.
    pub projects: Vec<RawProject>,
    /// Ids of entries dropped for lacking a profile or a name.
    pub skipped: Vec<String>,
}

/// Parse the catalog JSON text.
pub fn parse_catalog(text: &str) -> Result<CatalogResponse> {
    serde_json::from_str(text).context("Failed to parse catalog JSON")
}

fn normalize_entry(id: &str, entry: &CatalogEntry) -> Option<RawProject> {
    let profile = entry.profile.as_ref()?;
    let name = profile.name.as_deref().unwrap_or_default();
    if name.trim().is_empty() {
        return None;
    }
    let image = profile
        .image
        .as_ref()
        .and_then(ImageField::url)
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .unwrap_or(PLACEHOLDER_IMAGE);
    let mut tags = IndexMap::new();
    if let Some(TagsField::Map(map)) = &profile.tags {
        for (key, title) in map {
            match title.as_str() {
                Some(title) => {
                    tags.insert(key.clone(), title.to_string());
                }
                None => debug!("dropping tag `{}` of `{}`: title is not a string", key, id),
            }
        }
    }
    Some(RawProject {
        id: id.to_string(),
        name: name.to_string(),
        image: image.to_string(),
        tagline: profile.tagline.clone().unwrap_or_default(),
        tags,
    })
}

/// Convert catalog entries into [`RawProject`]s, keeping document order.
///
/// Entries without a profile or with a blank name are reported in
/// [`Ingested::skipped`] instead of failing the batch.
pub fn normalize_catalog(catalog: &CatalogResponse) -> Ingested {
    let entries: Vec<(&String, &CatalogEntry)> = catalog.entries.iter().collect();
    let normalized: Vec<(&String, Option<RawProject>)> = entries
        .par_iter()
        .map(|(id, entry)| (*id, normalize_entry(id, entry)))
        .collect();

    let mut ingested = Ingested::default();
    for (id, project) in normalized {
        match project {
            Some(p) => ingested.projects.push(p),
            None => {
                warn!("skipping catalog entry `{}`: missing profile or name", id);
                ingested.skipped.push(id.clone());
            }
        }
    }
    ingested
}

/// Read, parse and normalize a catalog from `source`.
pub fn load_catalog<S: CatalogSource>(source: &mut S) -> Result<Ingested> {
    let text = source.read_catalog()?;
    let catalog =
        parse_catalog(&text).with_context(|| format!("Invalid catalog from {}", source.origin()))?;
    let ingested = normalize_catalog(&catalog);
    info!(
        "loaded {} projects from {} ({} skipped)",
        ingested.projects.len(),
        source.origin(),
        ingested.skipped.len()
    );
    Ok(ingested)
}

/// Load a catalog and wrap it in a [`CatalogSnapshot`] for caching.
pub fn load_snapshot<S: CatalogSource>(source: &mut S) -> Result<CatalogSnapshot> {
    let ingested = load_catalog(source)?;
    Ok(CatalogSnapshot {
        fetched_from: source.origin(),
        projects: ingested.projects,
    })
}
