// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Containment tree for elements and groups
//!
//! Groups form a strict tree: every node has exactly one parent, ownership
//! flows root to leaf, and child order is insertion order. The child-to-
//! parent link is the `group` path string carried on [`Element`], used for
//! lookup only.

use crate::{Element, ElementKind};
use serde::{Deserialize, Serialize};

/// A named container of elements and sub-groups
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Group {
    /// Internal group name, also the path segment for this group
    pub name: String,
    /// Display label (e.g. "01_Foundation")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Descriptive comment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Children in insertion order
    #[serde(default)]
    pub children: Vec<Node>,
}

impl Group {
    /// Create an empty group
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: None,
            description: None,
            children: Vec::new(),
        }
    }

    /// Set the display label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the descriptive comment
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add a child node
    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Find a direct child group by name
    pub fn child_group(&self, name: &str) -> Option<&Group> {
        self.children.iter().find_map(|node| match node {
            Node::Group(g) if g.name == name => Some(g),
            _ => None,
        })
    }

    /// Find a direct child group by name, mutable
    pub fn child_group_mut(&mut self, name: &str) -> Option<&mut Group> {
        self.children.iter_mut().find_map(|node| match node {
            Node::Group(g) if g.name == name => Some(g),
            _ => None,
        })
    }
}

/// Node in the containment tree
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    /// A structural element (leaf)
    Element(Element),
    /// A named container
    Group(Group),
}

impl Node {
    /// Get as element, if this node is one
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(e) => Some(e),
            Node::Group(_) => None,
        }
    }

    /// Get as group, if this node is one
    pub fn as_group(&self) -> Option<&Group> {
        match self {
            Node::Group(g) => Some(g),
            Node::Element(_) => None,
        }
    }

    /// Iterate all elements in this subtree, depth-first, in child order
    pub fn elements(&self) -> ElementIter<'_> {
        ElementIter {
            stack: vec![std::slice::from_ref(self).iter()],
        }
    }

    /// Count elements in this subtree
    pub fn element_count(&self) -> usize {
        self.elements().count()
    }

    /// Count elements of a given kind in this subtree
    pub fn count_kind(&self, kind: ElementKind) -> usize {
        self.elements().filter(|e| e.kind == kind).count()
    }

    /// Visit every element in this subtree mutably, depth-first
    pub fn for_each_element_mut(&mut self, f: &mut impl FnMut(&mut Element)) {
        match self {
            Node::Element(e) => f(e),
            Node::Group(g) => {
                for child in &mut g.children {
                    child.for_each_element_mut(f);
                }
            }
        }
    }
}

/// Depth-first iterator over the elements of a node list
pub struct ElementIter<'a> {
    stack: Vec<std::slice::Iter<'a, Node>>,
}

impl<'a> ElementIter<'a> {
    /// Iterate elements across a forest of nodes
    pub fn over(nodes: &'a [Node]) -> Self {
        ElementIter {
            stack: vec![nodes.iter()],
        }
    }
}

impl<'a> Iterator for ElementIter<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let iter = self.stack.last_mut()?;
            match iter.next() {
                Some(Node::Element(e)) => return Some(e),
                Some(Node::Group(g)) => self.stack.push(g.children.iter()),
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Geometry;

    fn element(name: &str) -> Node {
        Node::Element(Element::new(name, Geometry::default()))
    }

    #[test]
    fn test_element_iter_order() {
        let mut inner = Group::new("Inner");
        inner.add_child(element("b"));
        inner.add_child(element("c"));

        let mut outer = Group::new("Outer");
        outer.add_child(element("a"));
        outer.add_child(Node::Group(inner));
        outer.add_child(element("d"));

        let root = Node::Group(outer);
        let names: Vec<_> = root.elements().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "c", "d"]);
    }

    #[test]
    fn test_for_each_element_mut_reaches_nested() {
        let mut inner = Group::new("Inner");
        inner.add_child(element("x"));
        let mut outer = Group::new("Outer");
        outer.add_child(Node::Group(inner));

        let mut root = Node::Group(outer);
        root.for_each_element_mut(&mut |e| e.label = Some(format!("seen {}", e.name)));

        let labels: Vec<_> = root.elements().map(|e| e.display_label().to_string()).collect();
        assert_eq!(labels, ["seen x"]);
    }

    #[test]
    fn test_child_group_lookup() {
        let mut outer = Group::new("Outer");
        outer.add_child(Node::Group(Group::new("Inner")));
        outer.add_child(element("e"));

        assert!(outer.child_group("Inner").is_some());
        assert!(outer.child_group("Missing").is_none());
    }
}
