// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Identifier-based classification rules
//!
//! Classification matches substrings of the source identifier against the
//! naming conventions of the originating CAD tooling. No geometric inference
//! is performed anywhere. All functions here are total and idempotent.

use bim_annotate_model::{ElementKind, ElementRole, Side};

/// Classify an element by its source identifier
///
/// Rule order matters: `Column`/`Post` is checked before `Beam` so that
/// names like `Post_L_1` never fall through, and `Rafter` is checked before
/// `Beam` because rafters carry their own labeling templates even though
/// they exchange as beams. Identifiers matching no rule are `Unknown`.
pub fn classify(name: &str) -> ElementKind {
    if name.contains("Footing") {
        ElementKind::Footing
    } else if name.contains("Column") || name.contains("Post") {
        ElementKind::Column
    } else if name.contains("Rafter") {
        ElementKind::Rafter
    } else if name.contains("Beam") {
        ElementKind::Beam
    } else {
        ElementKind::Unknown
    }
}

/// Recover a side tag from the source naming convention
///
/// Used only when the element carries no explicit side tag. Recognizes the
/// `_L_`/`_R_` infixes, `_L`/`_R` suffixes, the spelled-out `Left`/`Right`
/// markers of the horizontal beams, and the `Center` marker of the center
/// columns.
pub fn side_hint(name: &str) -> Option<Side> {
    if name.contains("Center") {
        Some(Side::Center)
    } else if name.contains("_L_") || name.ends_with("_L") || name.contains("Left") {
        Some(Side::Left)
    } else if name.contains("_R_") || name.ends_with("_R") || name.contains("Right") {
        Some(Side::Right)
    } else {
        None
    }
}

/// Recover the ridge (peak) marker from the source naming convention
pub fn peak_hint(name: &str) -> bool {
    name.contains("RidgeBeam") || name.contains("Ridge")
}

/// Fixed interop role for a kind
///
/// Rafters are exchanged as structural beams; unknown elements carry no
/// role at all.
pub fn role_for(kind: ElementKind) -> Option<ElementRole> {
    match kind {
        ElementKind::Footing => Some(ElementRole::Footing),
        ElementKind::Column => Some(ElementRole::Column),
        ElementKind::Beam | ElementKind::Rafter => Some(ElementRole::Beam),
        ElementKind::Unknown => None,
    }
}
