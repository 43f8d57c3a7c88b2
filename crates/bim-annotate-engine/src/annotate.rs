// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Single-pass annotation pipeline
//!
//! Classify, label, role, group, metadata, in that order, over one document.
//! The pass is pure in-memory and deterministic; running it twice with the
//! same options yields the same document. Geometry payloads pass through
//! untouched.

use crate::{classify, group_by_kind, group_into, label::LabelAssigner, peak_hint, role_for, side_hint};
use bim_annotate_model::{Document, ElementKind, Metadata};
use serde::Serialize;
use std::fmt;
use tracing::{debug, info};

/// How elements are re-parented during the pass
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum Grouping {
    /// Leave the tree as it is
    #[default]
    None,
    /// Attach ungrouped elements under a named chain, root to leaf
    Chain(Vec<String>),
    /// Bucket ungrouped elements by kind under a master Structure group
    ByKind,
}

/// Options for one annotation pass
#[derive(Clone, PartialEq, Debug, Default)]
pub struct AnnotateOptions {
    /// Metadata patch merged into the document (overwrites patched keys only)
    pub metadata: Metadata,
    /// Grouping mode
    pub grouping: Grouping,
    /// New document display label, if any
    pub document_label: Option<String>,
}

/// Per-kind counts produced by a pass
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize)]
pub struct AnnotateSummary {
    /// Foundation footings seen
    pub footings: usize,
    /// Columns and posts seen
    pub columns: usize,
    /// Beams seen
    pub beams: usize,
    /// Rafters seen
    pub rafters: usize,
    /// Elements left unclassified
    pub unknown: usize,
    /// Elements that received a fresh display label
    pub relabeled: usize,
}

impl AnnotateSummary {
    /// Total elements seen by the pass
    pub fn total(&self) -> usize {
        self.footings + self.columns + self.beams + self.rafters + self.unknown
    }

    fn count(&mut self, kind: ElementKind) {
        match kind {
            ElementKind::Footing => self.footings += 1,
            ElementKind::Column => self.columns += 1,
            ElementKind::Beam => self.beams += 1,
            ElementKind::Rafter => self.rafters += 1,
            ElementKind::Unknown => self.unknown += 1,
        }
    }
}

impl fmt::Display for AnnotateSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Elements processed: {}", self.total())?;
        writeln!(f, "  Footings: {}", self.footings)?;
        writeln!(f, "  Columns/posts: {}", self.columns)?;
        writeln!(f, "  Beams: {}", self.beams)?;
        writeln!(f, "  Rafters: {}", self.rafters)?;
        if self.unknown > 0 {
            writeln!(f, "  Unclassified (left as-is): {}", self.unknown)?;
        }
        write!(f, "Labels assigned: {}", self.relabeled)
    }
}

/// Run one annotation pass over `document`
///
/// Classification is identifier-based and total; explicit `side`/`peak`
/// tags on an element are authoritative and only recovered from the naming
/// convention when absent. Unknown elements are counted but never touched.
pub fn annotate(document: &mut Document, options: &AnnotateOptions) -> AnnotateSummary {
    info!(elements = document.element_count(), "starting annotation pass");

    let mut summary = AnnotateSummary::default();
    let mut assigner = LabelAssigner::new();

    document.for_each_element_mut(|element| {
        element.kind = classify(&element.name);
        if element.side.is_none() {
            element.side = side_hint(&element.name);
        }
        if !element.peak {
            element.peak = peak_hint(&element.name);
        }
        summary.count(element.kind);

        if let Some(label) = assigner.assign(element.kind, element.side, element.peak) {
            debug!(name = %element.name, label = %label, "assigned label");
            element.label = Some(label);
            summary.relabeled += 1;
        }
        if let Some(role) = role_for(element.kind) {
            element.role = Some(role);
        }
    });

    match &options.grouping {
        Grouping::None => {}
        Grouping::Chain(chain) => group_into(document, chain),
        Grouping::ByKind => group_by_kind(document),
    }

    document.metadata.merge(&options.metadata);
    if let Some(label) = &options.document_label {
        document.label = Some(label.clone());
    }

    info!(
        total = summary.total(),
        relabeled = summary.relabeled,
        unknown = summary.unknown,
        "annotation pass complete"
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use bim_annotate_model::{meta_keys, Element, ElementRole, Geometry};

    fn frame_document() -> Document {
        let names = [
            "Footing_1",
            "Footing_2",
            "Footing_3",
            "Column_Center_1",
            "Post_L_1",
            "Post_L_2",
            "Post_R_1",
            "RidgeBeam",
            "HBeam_Left",
            "HBeam_Right",
            "Rafter_L_1",
            "Rafter_L_2",
            "Rafter_R_1",
            "Terrain",
        ];
        Document::from_elements(
            names
                .into_iter()
                .map(|n| Element::new(n, Geometry::new(format!("geom:{n}")))),
        )
    }

    #[test]
    fn test_full_pass_labels() {
        let mut doc = frame_document();
        let summary = annotate(&mut doc, &AnnotateOptions::default());

        let labels: Vec<_> = doc.elements().map(|e| e.display_label().to_string()).collect();
        assert_eq!(
            labels,
            [
                "Footing 1",
                "Footing 2",
                "Footing 3",
                "Center Column 1",
                "Left Post 1",
                "Left Post 2",
                "Right Post 1",
                "Ridge Beam (Peak)",
                "Horizontal Beam (Left)",
                "Horizontal Beam (Right)",
                "Left Rafter 1",
                "Left Rafter 2",
                "Right Rafter 1",
                "Terrain",
            ]
        );
        assert_eq!(summary.footings, 3);
        assert_eq!(summary.columns, 4);
        assert_eq!(summary.beams, 3);
        assert_eq!(summary.rafters, 3);
        assert_eq!(summary.unknown, 1);
        assert_eq!(summary.relabeled, 13);
    }

    #[test]
    fn test_roles_assigned() {
        let mut doc = frame_document();
        annotate(&mut doc, &AnnotateOptions::default());

        for e in doc.elements() {
            match e.name.as_str() {
                n if n.starts_with("Footing") => assert_eq!(e.role, Some(ElementRole::Footing)),
                n if n.starts_with("Post") || n.starts_with("Column") => {
                    assert_eq!(e.role, Some(ElementRole::Column))
                }
                n if n.contains("Beam") || n.starts_with("Rafter") => {
                    assert_eq!(e.role, Some(ElementRole::Beam))
                }
                _ => assert_eq!(e.role, None),
            }
        }
    }

    #[test]
    fn test_geometry_untouched() {
        let mut doc = frame_document();
        let before: Vec<_> = doc.elements().map(|e| e.geometry.clone()).collect();
        annotate(
            &mut doc,
            &AnnotateOptions {
                grouping: Grouping::Chain(vec!["Site".into(), "Building".into(), "Floor".into()]),
                metadata: [(meta_keys::CREATED_BY, "X")].into_iter().collect(),
                document_label: Some("Annotated".into()),
            },
        );
        let after: Vec<_> = doc.elements().map(|e| e.geometry.clone()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_pass_is_idempotent() {
        let mut doc = frame_document();
        let options = AnnotateOptions {
            grouping: Grouping::ByKind,
            metadata: [(meta_keys::COMPANY, "Firm")].into_iter().collect(),
            document_label: None,
        };
        annotate(&mut doc, &options);
        let once = doc.clone();
        annotate(&mut doc, &options);
        assert_eq!(doc, once);
    }

    #[test]
    fn test_explicit_tags_win_over_hints() {
        use bim_annotate_model::Side;

        // The identifier hints Left, the explicit tag says Right; the
        // explicit tag is authoritative.
        let element = Element::new("Rafter_L_9", Geometry::default()).with_side(Side::Right);
        let mut doc = Document::from_elements([element]);
        annotate(&mut doc, &AnnotateOptions::default());
        assert_eq!(
            doc.elements().next().unwrap().label.as_deref(),
            Some("Right Rafter 1")
        );
    }

    #[test]
    fn test_metadata_and_label_set() {
        let mut doc = frame_document();
        annotate(
            &mut doc,
            &AnnotateOptions {
                metadata: [
                    (meta_keys::PROJECT, "Residential House Frame"),
                    (meta_keys::BUILDING_CODE, "IBC 2021"),
                ]
                .into_iter()
                .collect(),
                document_label: Some("Professional_House_Frame".into()),
                grouping: Grouping::None,
            },
        );
        assert_eq!(doc.label.as_deref(), Some("Professional_House_Frame"));
        assert_eq!(
            doc.metadata.get(meta_keys::PROJECT),
            Some("Residential House Frame")
        );
        assert_eq!(doc.metadata.get(meta_keys::BUILDING_CODE), Some("IBC 2021"));
    }
}
