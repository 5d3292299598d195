//! Outline state
//!
//! Holds the explicit expansion state of the tree and projects it onto the
//! document's `show` markers. The markers are written here and never read
//! back to decide what is open, except once when the outline is built.

use std::collections::HashMap;

use topicnav_dom::{Document, ExclusiveGroup, NodeId, Page};

use crate::error::TreeError;
use crate::hooks::{self, PresentationHook};
use crate::layout::OutlineLayout;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryToggle {
    Expanded,
    Collapsed,
}

pub struct Outline {
    page: Page,
    layout: OutlineLayout,
    root_open: bool,
    /// Selection over category ids
    categories: ExclusiveGroup,
    /// Selection over sub-group element ids
    sub_groups: ExclusiveGroup,
    /// Leaf id → sub-group id, resolved once at build time
    leaf_groups: HashMap<String, String>,
    /// Every leaf flagged as owning a sub-group, resolved or not
    sub_leaves: Vec<(NodeId, String)>,
    unresolved: Vec<String>,
    hooks: HashMap<String, Box<dyn PresentationHook>>,
}

impl Outline {
    pub fn build(page: Page, layout: OutlineLayout) -> Self {
        let mut categories = ExclusiveGroup::new(
            "categories",
            layout.categories.iter().map(|c| c.id.clone()),
        );
        let mut sub_groups = ExclusiveGroup::new("sub-groups", Vec::<String>::new());
        let mut leaf_groups = HashMap::new();
        let mut sub_leaves = Vec::new();
        let mut unresolved = Vec::new();
        let mut root_open = false;
        let mut open_category = None;
        let mut open_sub_group = None;

        page.with_document(|doc| {
            for node in doc.with_class(&layout.sub_children_class) {
                if let Some(id) = doc.get(node).and_then(|el| el.id.clone()) {
                    sub_groups.add_member(id);
                }
            }

            for node in doc.with_attribute(&layout.has_sub_attribute, "true") {
                if !doc.has_class(node, &layout.leaf_class) {
                    continue;
                }
                let leaf_id = doc
                    .get(node)
                    .and_then(|el| el.id.clone())
                    .unwrap_or_default();
                let group_id = layout.sub_group_id(&leaf_id);

                if doc.by_id(&group_id).is_some() {
                    sub_groups.add_member(group_id.clone());
                    leaf_groups.insert(leaf_id.clone(), group_id);
                } else {
                    unresolved.push(leaf_id.clone());
                }
                sub_leaves.push((node, leaf_id));
            }

            root_open = doc
                .by_id(&layout.level1)
                .is_some_and(|node| doc.has_class(node, &layout.show_class));

            open_category = layout
                .categories
                .iter()
                .find(|c| {
                    doc.by_id(&c.container)
                        .is_some_and(|node| doc.has_class(node, &layout.show_class))
                })
                .map(|c| c.id.clone());

            open_sub_group = sub_groups
                .members()
                .iter()
                .find(|id| {
                    doc.by_id(id)
                        .is_some_and(|node| doc.has_class(node, &layout.show_class))
                })
                .cloned();
        });

        if let Some(id) = open_category {
            let _ = categories.select(&id);
        }
        if let Some(id) = open_sub_group {
            let _ = sub_groups.select(&id);
        }

        let hooks = layout
            .categories
            .iter()
            .filter_map(|c| {
                c.presentation
                    .map(|p| (c.id.clone(), hooks::builtin(p, &layout)))
            })
            .collect();

        tracing::debug!(
            categories = categories.members().len(),
            sub_groups = sub_groups.members().len(),
            unresolved = unresolved.len(),
            "Built outline"
        );

        Self {
            page,
            layout,
            root_open,
            categories,
            sub_groups,
            leaf_groups,
            sub_leaves,
            unresolved,
            hooks,
        }
    }

    pub fn layout(&self) -> &OutlineLayout {
        &self.layout
    }

    pub fn is_root_open(&self) -> bool {
        self.root_open
    }

    pub fn expanded_category(&self) -> Option<&str> {
        self.categories.selected()
    }

    pub fn expanded_sub_group(&self) -> Option<&str> {
        self.sub_groups.selected()
    }

    pub fn sub_group_for(&self, leaf_id: &str) -> Option<&str> {
        self.leaf_groups.get(leaf_id).map(String::as_str)
    }

    /// Leaves flagged as owning a sub-group, with their ids
    pub fn sub_leaves(&self) -> &[(NodeId, String)] {
        &self.sub_leaves
    }

    /// Flagged leaves whose `<leafId>-kids` element does not exist
    pub fn unresolved_leaves(&self) -> &[String] {
        &self.unresolved
    }

    /// Replace the presentation hook of a category
    pub fn register_hook(
        &mut self,
        category: &str,
        hook: impl PresentationHook + 'static,
    ) -> Result<()> {
        if self.layout.category(category).is_none() {
            return Err(TreeError::UnknownCategory(category.to_string()));
        }
        self.hooks.insert(category.to_string(), Box::new(hook));
        Ok(())
    }

    /// Remove `show` from every category container
    pub fn hide_children(&mut self) {
        self.page.with_document_mut(|doc| {
            for node in self.category_containers(doc) {
                doc.remove_class(node, &self.layout.show_class);
            }
        });
        self.categories.clear();
    }

    /// Flip the root open or closed and return the new state.
    ///
    /// The category list and the connector always switch together. Closing
    /// also collapses every category and sub-group.
    pub fn toggle_root(&mut self) -> Result<bool> {
        let level1 = self
            .page
            .with_document(|doc| require(doc, &self.layout.level1))?;
        let connector = self
            .page
            .with_document(|doc| require(doc, &self.layout.connector))?;

        let open = !self.root_open;
        let show = &self.layout.show_class;

        self.page.with_document_mut(|doc| {
            doc.set_class(level1, show, open);
            doc.set_class(connector, show, open);

            if !open {
                let nodes: Vec<NodeId> = self
                    .category_containers(doc)
                    .into_iter()
                    .chain(self.sub_group_nodes(doc))
                    .collect();
                for node in nodes {
                    doc.remove_class(node, show);
                }
            }
        });

        self.root_open = open;
        if !open {
            self.categories.clear();
            self.sub_groups.clear();
        }

        tracing::debug!(open, "Toggled root");

        Ok(open)
    }

    /// Close the category if it is open, otherwise make it the only open one
    pub fn toggle_category(&mut self, category: &str) -> Result<CategoryToggle> {
        let container_id = self
            .layout
            .category(category)
            .map(|c| c.container.clone())
            .ok_or_else(|| TreeError::UnknownCategory(category.to_string()))?;
        let container = self
            .page
            .with_document(|doc| require(doc, &container_id))?;

        let show = &self.layout.show_class;

        if self.categories.is_selected(category) {
            self.categories.toggle(category)?;
            self.page
                .with_document_mut(|doc| doc.remove_class(container, show));

            tracing::debug!(category = %category, "Collapsed category");
            return Ok(CategoryToggle::Collapsed);
        }

        self.categories.select(category)?;
        let hook = self.hooks.get(category);

        self.page.with_document_mut(|doc| {
            for node in self.category_containers(doc) {
                doc.remove_class(node, show);
            }
            doc.add_class(container, show);

            if let Some(hook) = hook {
                hook.on_expand(doc, container);
            }
        });

        tracing::debug!(category = %category, "Expanded category");

        Ok(CategoryToggle::Expanded)
    }

    /// Toggle a leaf's sub-group, closing every other sub-group first.
    /// Returns whether the leaf's group ended up open.
    pub fn toggle_leaf_sub_group(&mut self, leaf_id: &str) -> Result<bool> {
        let group_id = self
            .sub_group_for(leaf_id)
            .map(str::to_string)
            .ok_or_else(|| TreeError::NoSubGroup(leaf_id.to_string()))?;
        let target = self.page.with_document(|doc| require(doc, &group_id))?;

        let was_open = self.sub_groups.is_selected(&group_id);
        let show = &self.layout.show_class;

        self.page.with_document_mut(|doc| {
            for node in self.sub_group_nodes(doc) {
                doc.remove_class(node, show);
            }
            if !was_open {
                doc.add_class(target, show);
            }
        });

        if was_open {
            self.sub_groups.clear();
        } else {
            self.sub_groups.select(&group_id)?;
        }

        tracing::debug!(leaf = %leaf_id, open = !was_open, "Toggled sub-group");

        Ok(!was_open)
    }

    /// Every `.children` element plus the configured containers
    fn category_containers(&self, doc: &Document) -> Vec<NodeId> {
        let mut nodes = doc.with_class(&self.layout.children_class);
        for category in &self.layout.categories {
            if let Some(node) = doc.by_id(&category.container) {
                if !nodes.contains(&node) {
                    nodes.push(node);
                }
            }
        }
        nodes
    }

    /// Every `.sub-children` element plus the resolved sub-groups
    fn sub_group_nodes(&self, doc: &Document) -> Vec<NodeId> {
        let mut nodes = doc.with_class(&self.layout.sub_children_class);
        for id in self.sub_groups.members() {
            if let Some(node) = doc.by_id(id) {
                if !nodes.contains(&node) {
                    nodes.push(node);
                }
            }
        }
        nodes
    }
}

fn require(doc: &Document, id: &str) -> Result<NodeId> {
    doc.by_id(id)
        .ok_or_else(|| TreeError::MissingElement(id.to_string()))
}
