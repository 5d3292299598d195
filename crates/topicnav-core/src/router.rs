//! Click routing
//!
//! Handlers are attached to nodes once at startup. A click walks from the
//! clicked node up through its ancestors and collects the actions of every
//! node it passes. A handler registered with [`Propagation::Stop`] ends the
//! walk after its own node, so ancestors never see the click.

use std::collections::HashMap;

use topicnav_dom::{Document, NodeId};
use topicnav_tabs::TabSet;
use topicnav_tree::Outline;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ToggleRoot,
    ToggleCategory(String),
    ToggleLeafSubGroup(String),
    SelectTab(String),
    /// Click on a tab button; the button itself gets the active marker
    PressTabButton(NodeId),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Propagation {
    /// Let the click continue to ancestor handlers
    #[default]
    Continue,
    /// Ancestor handlers do not run for this click
    Stop,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handler {
    pub action: Action,
    pub propagation: Propagation,
}

#[derive(Debug, Default)]
pub struct EventRouter {
    handlers: HashMap<NodeId, Vec<Handler>>,
}

impl EventRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the outline and tab handlers to the nodes they belong to.
    /// Ids that do not resolve get no handler.
    pub fn bind(doc: &Document, outline: &Outline, tabs: &TabSet) -> Self {
        let mut router = Self::new();
        let layout = outline.layout();

        if let Some(root) = doc.by_id(&layout.root) {
            router.register(root, Action::ToggleRoot, Propagation::Continue);
        }

        for category in &layout.categories {
            if let Some(node) = doc.by_id(&category.id) {
                router.register(
                    node,
                    Action::ToggleCategory(category.id.clone()),
                    Propagation::Continue,
                );
            }
        }

        for (leaf, leaf_id) in outline.sub_leaves() {
            router.register(
                *leaf,
                Action::ToggleLeafSubGroup(leaf_id.clone()),
                Propagation::Stop,
            );
        }

        for (button, _) in tabs.buttons() {
            router.register(button, Action::PressTabButton(button), Propagation::Continue);
        }

        tracing::debug!(nodes = router.handlers.len(), "Bound click handlers");

        router
    }

    pub fn register(&mut self, node: NodeId, action: Action, propagation: Propagation) {
        self.handlers.entry(node).or_default().push(Handler {
            action,
            propagation,
        });
    }

    pub fn handlers_for(&self, node: NodeId) -> &[Handler] {
        self.handlers.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Actions a click on `target` triggers, in execution order
    pub fn route(&self, doc: &Document, target: NodeId) -> Vec<Action> {
        let mut actions = Vec::new();

        for node in doc.bubble_path(target) {
            let handlers = self.handlers_for(node);
            actions.extend(handlers.iter().map(|h| h.action.clone()));

            if handlers.iter().any(|h| h.propagation == Propagation::Stop) {
                break;
            }
        }

        actions
    }
}
