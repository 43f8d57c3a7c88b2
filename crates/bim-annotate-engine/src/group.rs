// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Group hierarchy construction
//!
//! Two grouping modes, both idempotent: an existing matching chain or bucket
//! is reused, never nested a second time. Only top-level (ungrouped)
//! elements are moved; elements already parented stay where they are, which
//! is what makes a repeated run a no-op.

use bim_annotate_model::{Document, ElementKind, Group, Node};
use tracing::debug;

/// Attach all ungrouped elements under a named chain of groups
///
/// `chain` lists group names from root to leaf (e.g.
/// `["Site", "Building", "Floor"]`). The chain is built once and reused on
/// later runs; elements are appended to the leaf in input order and their
/// `group` back-reference is set to the chain path. An empty chain is a
/// no-op.
pub fn group_into(document: &mut Document, chain: &[String]) {
    let Some((root_name, rest)) = chain.split_first() else {
        return;
    };

    // Partition the roots: loose elements move into the chain, everything
    // else keeps its position.
    let mut loose = Vec::new();
    let mut remaining = Vec::new();
    let mut root_group: Option<(usize, Group)> = None;
    for node in std::mem::take(&mut document.roots) {
        match node {
            Node::Element(e) => loose.push(e),
            Node::Group(g) if g.name == *root_name && root_group.is_none() => {
                root_group = Some((remaining.len(), g));
            }
            other => remaining.push(other),
        }
    }

    let (position, mut root) = match root_group {
        Some((idx, g)) => (idx, g),
        None => (remaining.len(), Group::new(root_name.clone())),
    };

    let path = chain.join("/");
    {
        let leaf = descend_chain(&mut root, rest);
        debug!(path = %path, moved = loose.len(), "grouping elements into chain");
        for mut element in loose {
            element.group = Some(path.clone());
            leaf.add_child(Node::Element(element));
        }
    }

    remaining.insert(position, Node::Group(root));
    document.roots = remaining;
}

/// Walk down `rest` from `root`, creating missing groups along the way
fn descend_chain<'a>(root: &'a mut Group, rest: &[String]) -> &'a mut Group {
    let mut current = root;
    for name in rest {
        if current.child_group(name).is_none() {
            current.add_child(Node::Group(Group::new(name.clone())));
        }
        // Lookup again after the insert; the child is guaranteed to exist.
        current = current
            .child_group_mut(name)
            .unwrap_or_else(|| unreachable!("chain group was just inserted"));
    }
    current
}

/// Kind bucket definitions: group name, ordered label, description
const KIND_BUCKETS: [(&str, &str, &str, ElementKind); 4] = [
    (
        "Foundation",
        "01_Foundation",
        "Foundation footings supporting the structural frame",
        ElementKind::Footing,
    ),
    (
        "Columns",
        "02_Columns_and_Posts",
        "Vertical structural columns and posts",
        ElementKind::Column,
    ),
    (
        "Beams",
        "03_Horizontal_Beams",
        "Horizontal structural beams including ridge beam",
        ElementKind::Beam,
    ),
    (
        "Roof",
        "04_Roof_Rafters",
        "Roof rafter system for gabled roof structure",
        ElementKind::Rafter,
    ),
];

/// Name of the master group holding all kind buckets
pub const STRUCTURE_GROUP: &str = "Structure";

/// Bucket ungrouped elements by kind under a master `Structure` group
///
/// Builds `Structure` with `Foundation`, `Columns`, `Beams`, and `Roof`
/// subgroups (ordered labels, descriptive comments) and moves every
/// classified top-level element into its bucket. `Unknown` elements keep
/// their place at the top level.
pub fn group_by_kind(document: &mut Document) {
    let mut buckets: [Vec<Node>; 4] = [Vec::new(), Vec::new(), Vec::new(), Vec::new()];
    let mut remaining = Vec::new();
    let mut structure: Option<(usize, Group)> = None;

    for node in std::mem::take(&mut document.roots) {
        match node {
            Node::Element(mut element) if element.kind.is_classified() => {
                let slot = KIND_BUCKETS
                    .iter()
                    .position(|(_, _, _, kind)| *kind == element.kind)
                    .unwrap_or_else(|| unreachable!("every classified kind has a bucket"));
                let (name, _, _, _) = KIND_BUCKETS[slot];
                element.group = Some(format!("{STRUCTURE_GROUP}/{name}"));
                buckets[slot].push(Node::Element(element));
            }
            Node::Group(g) if g.name == STRUCTURE_GROUP && structure.is_none() => {
                structure = Some((remaining.len(), g));
            }
            other => remaining.push(other),
        }
    }

    let (position, mut master) = match structure {
        Some((idx, g)) => (idx, g),
        None => (
            remaining.len(),
            Group::new(STRUCTURE_GROUP)
                .with_description("Complete timber frame house structure"),
        ),
    };

    for ((name, label, description, _), moved) in KIND_BUCKETS.iter().zip(buckets) {
        if master.child_group(name).is_none() {
            master.add_child(Node::Group(
                Group::new(*name)
                    .with_label(*label)
                    .with_description(*description),
            ));
        }
        let bucket = master
            .child_group_mut(name)
            .unwrap_or_else(|| unreachable!("bucket group was just inserted"));
        if !moved.is_empty() {
            debug!(bucket = name, moved = moved.len(), "grouping elements by kind");
        }
        bucket.children.extend(moved);
    }

    remaining.insert(position, Node::Group(master));
    document.roots = remaining;
}
