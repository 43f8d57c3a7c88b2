// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Core types for structural element representation
//!
//! This module defines the classification vocabulary and the element record
//! used throughout the annotation system.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Structural category of an element
///
/// Classification is total: inputs that match no known category are
/// `Unknown`, which is a normal state and never an error.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize, Default)]
pub enum ElementKind {
    /// Foundation footing
    Footing,
    /// Vertical column or post
    Column,
    /// Horizontal or ridge beam
    Beam,
    /// Roof rafter
    Rafter,
    /// Unclassifiable element - retained as-is, never relabeled
    #[default]
    Unknown,
}

impl ElementKind {
    /// Get the category name as a string
    pub fn name(&self) -> &'static str {
        match self {
            ElementKind::Footing => "Footing",
            ElementKind::Column => "Column",
            ElementKind::Beam => "Beam",
            ElementKind::Rafter => "Rafter",
            ElementKind::Unknown => "Unknown",
        }
    }

    /// Check whether elements of this kind participate in relabeling
    pub fn is_classified(&self) -> bool {
        !matches!(self, ElementKind::Unknown)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Side tag for columns, rafters, and horizontal beams
///
/// Always an explicit input on the element (or recovered from the source
/// naming convention); never inferred from geometry.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Side {
    /// Left side of the frame
    Left,
    /// Right side of the frame
    Right,
    /// Center line of the frame
    Center,
}

impl Side {
    /// Get display name, capitalized for use in labels
    pub fn name(&self) -> &'static str {
        match self {
            Side::Left => "Left",
            Side::Right => "Right",
            Side::Center => "Center",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Semantic interop role attached to an element for downstream exchange
///
/// Follows IFC-style structural typing: rafters are exchanged as beams, and
/// unknown elements carry no role at all.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum ElementRole {
    /// IFC "Footing" role
    Footing,
    /// IFC "Column" role
    Column,
    /// IFC "Beam" role (beams and rafters)
    Beam,
}

impl ElementRole {
    /// Get the role tag as exchanged with downstream tools
    pub fn name(&self) -> &'static str {
        match self {
            ElementRole::Footing => "Footing",
            ElementRole::Column => "Column",
            ElementRole::Beam => "Beam",
        }
    }
}

impl fmt::Display for ElementRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Opaque geometric payload
///
/// The annotator's contract is byte-for-byte preservation: this payload is
/// carried through every transform untouched and is never parsed.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Geometry(pub String);

impl Geometry {
    /// Create a geometry payload from its serialized form
    pub fn new(payload: impl Into<String>) -> Self {
        Geometry(payload.into())
    }

    /// Raw payload bytes
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Check if the payload is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A single structural building part
///
/// `name` is the immutable source identifier (e.g. an auto-generated object
/// name like `Post_L_2`); `label` and `role` are the mutable annotation
/// outputs. `side` and `peak` are explicit input tags resolved at load time,
/// with the source naming convention as fallback.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Element {
    /// Source identifier, never rewritten
    pub name: String,
    /// Structural category
    #[serde(default)]
    pub kind: ElementKind,
    /// Explicit side tag, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side: Option<Side>,
    /// Marks the beam at the roof peak (ridge)
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub peak: bool,
    /// Human-readable display label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Interop role tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<ElementRole>,
    /// Path of the owning group (e.g. "Site/Building/Floor"), a non-owning
    /// back-reference used for lookup only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Opaque geometric payload
    #[serde(default)]
    pub geometry: Geometry,
}

impl Element {
    /// Create an element from its source identifier and geometry
    pub fn new(name: impl Into<String>, geometry: Geometry) -> Self {
        Self {
            name: name.into(),
            kind: ElementKind::Unknown,
            side: None,
            peak: false,
            label: None,
            role: None,
            group: None,
            geometry,
        }
    }

    /// Set an explicit side tag
    pub fn with_side(mut self, side: Side) -> Self {
        self.side = Some(side);
        self
    }

    /// Mark this element as the peak (ridge) beam
    pub fn with_peak(mut self) -> Self {
        self.peak = true;
        self
    }

    /// Display label, falling back to the source identifier
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }
}
