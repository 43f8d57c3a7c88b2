// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Document root and open metadata mapping
//!
//! A [`Document`] owns the containment tree plus a free-form string-to-string
//! metadata map. The map uses a `BTreeMap` so serialized output and iteration
//! order are deterministic.

use crate::{Element, ElementIter, Node};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Well-known metadata keys
///
/// The schema is open: any key is stored as-is, these are just the fields the
/// standard document properties map onto.
pub mod meta_keys {
    /// Document author
    pub const CREATED_BY: &str = "CreatedBy";
    /// Last editor
    pub const LAST_MODIFIED_BY: &str = "LastModifiedBy";
    /// Owning company or firm
    pub const COMPANY: &str = "Company";
    /// Free-form description
    pub const COMMENT: &str = "Comment";
    /// Project name
    pub const PROJECT: &str = "Project";
    /// Model type (e.g. "Structural Frame")
    pub const TYPE: &str = "Type";
    /// Construction category (e.g. "Timber Construction")
    pub const CATEGORY: &str = "Category";
    /// Applicable building code (e.g. "IBC 2021")
    pub const BUILDING_CODE: &str = "BuildingCode";
    /// Design load class (e.g. "Residential")
    pub const DESIGN_LOAD: &str = "DesignLoad";
}

/// Open string-to-string metadata mapping with deterministic order
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metadata(BTreeMap<String, String>);

impl Metadata {
    /// Create an empty metadata map
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a value by key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Set a single key, overwriting any existing value
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Merge another map into this one
    ///
    /// Keys present in `patch` overwrite; all other existing keys are left
    /// untouched. Never fails.
    pub fn merge(&mut self, patch: &Metadata) {
        for (key, value) in &patch.0 {
            self.0.insert(key.clone(), value.clone());
        }
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the map is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Metadata {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Metadata(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Root owner of the containment tree plus document-level metadata
///
/// The "ungrouped" input case is a document whose roots are all elements.
/// Each annotation run is a pure transform of one document; no state is
/// shared across runs.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Document {
    /// Display label of the document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Open metadata mapping
    #[serde(default, skip_serializing_if = "Metadata::is_empty")]
    pub metadata: Metadata,
    /// Top-level nodes in insertion order
    #[serde(default)]
    pub roots: Vec<Node>,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document from a flat sequence of elements
    pub fn from_elements(elements: impl IntoIterator<Item = Element>) -> Self {
        Self {
            label: None,
            metadata: Metadata::new(),
            roots: elements.into_iter().map(Node::Element).collect(),
        }
    }

    /// Iterate all elements, depth-first, in input order
    pub fn elements(&self) -> ElementIter<'_> {
        ElementIter::over(&self.roots)
    }

    /// Total element count
    pub fn element_count(&self) -> usize {
        self.elements().count()
    }

    /// Visit every element mutably, depth-first, in input order
    pub fn for_each_element_mut(&mut self, mut f: impl FnMut(&mut Element)) {
        for node in &mut self.roots {
            node.for_each_element_mut(&mut f);
        }
    }

    /// Find a top-level group by name
    pub fn root_group(&self, name: &str) -> Option<&crate::Group> {
        self.roots.iter().find_map(|node| match node {
            Node::Group(g) if g.name == name => Some(g),
            _ => None,
        })
    }

    /// Find a top-level group by name, mutable
    pub fn root_group_mut(&mut self, name: &str) -> Option<&mut crate::Group> {
        self.roots.iter_mut().find_map(|node| match node {
            Node::Group(g) if g.name == name => Some(g),
            _ => None,
        })
    }
}
