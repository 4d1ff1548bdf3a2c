#![forbid(unsafe_code)]

//! The fixed, ordered catalog of work categories.
//!
//! Every surface holds exactly one item per catalog entry, and the catalog
//! order is the default relative ordering restored by a reset.

use std::fmt;

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

/// Stable identifier of a work category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryKey(String);

impl CategoryKey {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CategoryKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDef {
    pub key: CategoryKey,
    /// Short user-facing label, already localized by the host.
    pub label: String,
}

impl CategoryDef {
    #[must_use]
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: CategoryKey::new(key),
            label: label.into(),
        }
    }
}

/// Ordered set of categories with unique keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    defs: Vec<CategoryDef>,
}

impl Catalog {
    /// Build a catalog, keeping the first definition of any repeated key.
    #[must_use]
    pub fn new(defs: impl IntoIterator<Item = CategoryDef>) -> Self {
        let mut seen = AHashSet::new();
        let defs = defs
            .into_iter()
            .filter(|def| {
                let fresh = seen.insert(def.key.clone());
                if !fresh {
                    tracing::warn!(
                        target: "worktab.catalog",
                        key = %def.key,
                        "duplicate category dropped from catalog"
                    );
                }
                fresh
            })
            .collect();
        Self { defs }
    }

    /// Convenience constructor where label == key.
    #[must_use]
    pub fn from_keys<'a>(keys: impl IntoIterator<Item = &'a str>) -> Self {
        Self::new(keys.into_iter().map(|k| CategoryDef::new(k, k)))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryDef> {
        self.defs.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &CategoryKey> {
        self.defs.iter().map(|d| &d.key)
    }

    /// Default (catalog) index of a category.
    #[must_use]
    pub fn index_of(&self, key: &CategoryKey) -> Option<usize> {
        self.defs.iter().position(|d| &d.key == key)
    }

    #[must_use]
    pub fn get(&self, key: &CategoryKey) -> Option<&CategoryDef> {
        self.defs.iter().find(|d| &d.key == key)
    }

    #[must_use]
    pub fn contains(&self, key: &CategoryKey) -> bool {
        self.index_of(key).is_some()
    }

    /// Label for a key, falling back to the key itself.
    #[must_use]
    pub fn label<'a>(&'a self, key: &'a CategoryKey) -> &'a str {
        self.get(key).map_or(key.as_str(), |d| d.label.as_str())
    }
}
