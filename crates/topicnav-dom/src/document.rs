//! Element arena
//!
//! Nodes live in a flat vector and are addressed by [`NodeId`]. When a
//! document is loaded from markup, vector order is document order, so class
//! and attribute queries return elements in the order the page declares them.

use std::collections::HashMap;

use crate::element::Element;
use crate::error::DomError;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Document {
    nodes: Vec<Element>,
    /// First element registered under each id
    by_id: HashMap<String, NodeId>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element under `parent` (or as a top-level node)
    pub fn append(&mut self, parent: Option<NodeId>, mut element: Element) -> Result<NodeId> {
        if let Some(parent) = parent {
            if parent.0 >= self.nodes.len() {
                return Err(DomError::MissingElement(parent.to_string()));
            }
        }

        let node = NodeId(self.nodes.len());
        element.parent = parent;
        element.children.clear();

        if let Some(id) = element.id.as_deref() {
            if self.by_id.contains_key(id) {
                tracing::warn!(id = %id, node = %node, "Duplicate element id, keeping first");
            } else {
                self.by_id.insert(id.to_string(), node);
            }
        }

        self.nodes.push(element);
        if let Some(parent) = parent {
            self.nodes[parent.0].children.push(node);
        }

        Ok(node)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, node: NodeId) -> Option<&Element> {
        self.nodes.get(node.0)
    }

    pub fn get_mut(&mut self, node: NodeId) -> Option<&mut Element> {
        self.nodes.get_mut(node.0)
    }

    /// Look up an element by its `id` attribute
    pub fn by_id(&self, id: &str) -> Option<NodeId> {
        self.by_id.get(id).copied()
    }

    /// Like [`Document::by_id`], but a missing id is an error
    pub fn require(&self, id: &str) -> Result<NodeId> {
        self.by_id(id)
            .ok_or_else(|| DomError::MissingElement(id.to_string()))
    }

    pub fn element_by_id(&self, id: &str) -> Option<&Element> {
        self.by_id(id).and_then(|node| self.get(node))
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Element)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, element)| (NodeId(index), element))
    }

    pub fn with_class(&self, class: &str) -> Vec<NodeId> {
        self.nodes()
            .filter(|(_, el)| el.has_class(class))
            .map(|(node, _)| node)
            .collect()
    }

    pub fn with_attribute(&self, name: &str, value: &str) -> Vec<NodeId> {
        self.nodes()
            .filter(|(_, el)| el.attribute(name) == Some(value))
            .map(|(node, _)| node)
            .collect()
    }

    /// All descendants of `node` in pre-order, excluding `node` itself
    pub fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = match self.get(node) {
            Some(el) => el.children.iter().rev().copied().collect(),
            None => return out,
        };

        while let Some(current) = stack.pop() {
            out.push(current);
            if let Some(el) = self.get(current) {
                stack.extend(el.children.iter().rev().copied());
            }
        }

        out
    }

    /// `node` followed by each of its ancestors up to the top
    pub fn bubble_path(&self, node: NodeId) -> Vec<NodeId> {
        let mut path = Vec::new();
        let mut current = self.get(node).map(|_| node);
        while let Some(id) = current {
            path.push(id);
            current = self.get(id).and_then(Element::parent);
        }
        path
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.get(node).is_some_and(|el| el.has_class(class))
    }

    /// Returns true if the class was not already present
    pub fn add_class(&mut self, node: NodeId, class: &str) -> bool {
        match self.get_mut(node) {
            Some(el) => el.classes.insert(class.to_string()),
            None => false,
        }
    }

    /// Returns true if the class was present
    pub fn remove_class(&mut self, node: NodeId, class: &str) -> bool {
        match self.get_mut(node) {
            Some(el) => el.classes.remove(class),
            None => false,
        }
    }

    pub fn set_class(&mut self, node: NodeId, class: &str, on: bool) {
        if on {
            self.add_class(node, class);
        } else {
            self.remove_class(node, class);
        }
    }

    pub fn set_style(&mut self, node: NodeId, property: &str, value: &str) {
        if let Some(el) = self.get_mut(node) {
            el.styles.insert(property.to_string(), value.to_string());
        }
    }
}
