// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Read-only status report for a document
//!
//! Summarizes what a document contains: counts by kind and role, labeling
//! coverage, and the group hierarchy. Used by the `status` command to
//! diagnose a model without modifying it.

use bim_annotate_model::{Document, ElementKind, ElementRole, Group, Node};
use serde::Serialize;
use std::fmt;

/// Snapshot of a document's annotation state
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize)]
pub struct ModelStatus {
    /// Document display label
    pub label: Option<String>,
    /// Total element count
    pub total: usize,
    /// Counts per kind, in declaration order
    pub footings: usize,
    /// Columns and posts
    pub columns: usize,
    /// Beams
    pub beams: usize,
    /// Rafters
    pub rafters: usize,
    /// Unclassified elements
    pub unknown: usize,
    /// Elements carrying a display label
    pub labeled: usize,
    /// Elements carrying an interop role
    pub with_role: usize,
    /// Elements parented under a group
    pub grouped: usize,
    /// Metadata entry count
    pub metadata_entries: usize,
    /// Rendered hierarchy, one line per group
    pub hierarchy: Vec<String>,
}

impl ModelStatus {
    /// Take a status snapshot of `document`
    pub fn of(document: &Document) -> Self {
        let mut status = ModelStatus {
            label: document.label.clone(),
            metadata_entries: document.metadata.len(),
            ..Default::default()
        };

        for element in document.elements() {
            status.total += 1;
            match element.kind {
                ElementKind::Footing => status.footings += 1,
                ElementKind::Column => status.columns += 1,
                ElementKind::Beam => status.beams += 1,
                ElementKind::Rafter => status.rafters += 1,
                ElementKind::Unknown => status.unknown += 1,
            }
            if element.label.is_some() {
                status.labeled += 1;
            }
            if element.role.is_some() {
                status.with_role += 1;
            }
            if element.group.is_some() {
                status.grouped += 1;
            }
        }

        let mut loose = 0usize;
        for node in &document.roots {
            match node {
                Node::Group(g) => render_group(g, 0, &mut status.hierarchy),
                Node::Element(_) => loose += 1,
            }
        }
        if loose > 0 {
            status.hierarchy.push(format!("({loose} ungrouped elements)"));
        }

        status
    }

    /// Count of elements exchanged under a given role
    pub fn role_count(&self, role: ElementRole) -> usize {
        match role {
            ElementRole::Footing => self.footings,
            ElementRole::Column => self.columns,
            // Rafters exchange as beams
            ElementRole::Beam => self.beams + self.rafters,
        }
    }

    /// Whether every element is classified, labeled, and grouped
    pub fn is_complete(&self) -> bool {
        self.unknown == 0 && self.labeled == self.total && self.grouped == self.total
    }
}

fn render_group(group: &Group, depth: usize, lines: &mut Vec<String>) {
    let indent = "  ".repeat(depth);
    let shown = group.label.as_deref().unwrap_or(&group.name);
    let count = group
        .children
        .iter()
        .filter(|n| matches!(n, Node::Element(_)))
        .count();
    if count > 0 {
        lines.push(format!("{indent}{shown} ({count} elements)"));
    } else {
        lines.push(format!("{indent}{shown}"));
    }
    for child in &group.children {
        if let Node::Group(g) = child {
            render_group(g, depth + 1, lines);
        }
    }
}

impl fmt::Display for ModelStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(label) = &self.label {
            writeln!(f, "Document: {label}")?;
        }
        writeln!(
            f,
            "Elements: {} ({} classified, {} unknown)",
            self.total,
            self.total - self.unknown,
            self.unknown
        )?;
        writeln!(f, "  Footings: {}", self.footings)?;
        writeln!(f, "  Columns/posts: {}", self.columns)?;
        writeln!(f, "  Beams: {}", self.beams)?;
        writeln!(f, "  Rafters: {}", self.rafters)?;
        writeln!(
            f,
            "Annotation: {} labeled, {} with role, {} grouped",
            self.labeled, self.with_role, self.grouped
        )?;
        writeln!(f, "Metadata entries: {}", self.metadata_entries)?;
        if !self.hierarchy.is_empty() {
            writeln!(f, "Hierarchy:")?;
            for line in &self.hierarchy {
                writeln!(f, "  {line}")?;
            }
        }
        if self.is_complete() {
            write!(f, "Model is fully annotated.")
        } else {
            write!(f, "Model is not fully annotated; run `annotate` to complete it.")
        }
    }
}
