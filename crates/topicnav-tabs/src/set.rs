//! Tab Set
//!
//! Discovers the button/panel pairs once and switches between them.

use std::collections::HashMap;

use topicnav_dom::{Document, ExclusiveGroup, NodeId, Page};

use crate::error::TabError;
use crate::layout::TabLayout;
use crate::state::TabState;
use crate::tab::Tab;
use crate::Result;

pub struct TabSet {
    page: Page,
    layout: TabLayout,
    /// Complete pairs, keyed by tab id
    tabs: HashMap<String, Tab>,
    /// Selection over the complete pairs, in button order
    group: ExclusiveGroup,
    /// Every tab button, including duplicates of an already known tab
    buttons: HashMap<NodeId, String>,
    tabs_without_panel: Vec<String>,
    panels_without_button: Vec<String>,
}

impl TabSet {
    /// Scan the document for tab buttons and their panels
    pub fn discover(page: Page, layout: TabLayout) -> Self {
        let mut tabs = HashMap::new();
        let mut group = ExclusiveGroup::new("tabs", Vec::<String>::new());
        let mut buttons = HashMap::new();
        let mut tabs_without_panel = Vec::new();
        let mut panels_without_button = Vec::new();

        page.with_document(|doc| {
            for button in doc.with_class(&layout.button_class) {
                let Some(tab_id) = doc
                    .get(button)
                    .and_then(|el| el.attribute(&layout.tab_attribute))
                    .map(str::to_string)
                else {
                    tracing::warn!(node = %button, "Tab button without {}", layout.tab_attribute);
                    continue;
                };

                buttons.insert(button, tab_id.clone());

                if tabs.contains_key(&tab_id) || tabs_without_panel.contains(&tab_id) {
                    continue;
                }

                match doc.by_id(&tab_id) {
                    Some(panel) => {
                        group.add_member(tab_id.clone());
                        tabs.insert(tab_id.clone(), Tab::new(tab_id, button, panel));
                    }
                    None => tabs_without_panel.push(tab_id),
                }
            }

            for panel in doc.with_class(&layout.panel_class) {
                let id = doc
                    .get(panel)
                    .and_then(|el| el.id.clone())
                    .unwrap_or_else(|| panel.to_string());
                if !tabs.contains_key(&id) {
                    panels_without_button.push(id);
                }
            }
        });

        tracing::debug!(
            tabs = group.members().len(),
            without_panel = tabs_without_panel.len(),
            without_button = panels_without_button.len(),
            "Discovered tabs"
        );

        Self {
            page,
            layout,
            tabs,
            group,
            buttons,
            tabs_without_panel,
            panels_without_button,
        }
    }

    pub fn get(&self, tab_id: &str) -> Result<&Tab> {
        self.tabs
            .get(tab_id)
            .ok_or_else(|| TabError::NotFound(tab_id.to_string()))
    }

    /// Complete tabs in button order
    pub fn tabs(&self) -> impl Iterator<Item = &Tab> {
        self.group
            .members()
            .iter()
            .filter_map(|id| self.tabs.get(id))
    }

    pub fn active(&self) -> Option<&str> {
        self.group.selected()
    }

    /// Every button node with the tab id it points at
    pub fn buttons(&self) -> impl Iterator<Item = (NodeId, &str)> {
        self.buttons.iter().map(|(node, id)| (*node, id.as_str()))
    }

    pub fn tabs_without_panel(&self) -> &[String] {
        &self.tabs_without_panel
    }

    pub fn panels_without_button(&self) -> &[String] {
        &self.panels_without_button
    }

    /// Make `tab_id` the only active pair.
    ///
    /// Unknown ids and tabs missing their panel are rejected before any
    /// marker is touched.
    pub fn select(&mut self, tab_id: &str) -> Result<()> {
        let button = self.get(tab_id)?.button;
        self.activate(tab_id.to_string(), button)
    }

    /// Activate the tab a clicked button points at, marking that button
    /// rather than the first one discovered for the tab
    pub fn select_button(&mut self, button: NodeId) -> Result<()> {
        let tab_id = self
            .buttons
            .get(&button)
            .cloned()
            .ok_or_else(|| TabError::NotFound(button.to_string()))?;
        self.activate(tab_id, button)
    }

    fn activate(&mut self, tab_id: String, button: NodeId) -> Result<()> {
        let panel = self.get(&tab_id)?.panel;
        let transition = self.group.select(&tab_id)?;

        self.page.with_document_mut(|doc| {
            self.clear_markers(doc);
            doc.add_class(button, &self.layout.active_class);
            doc.add_class(panel, &self.layout.active_class);
        });

        for tab in self.tabs.values_mut() {
            tab.state = if tab.id == tab_id {
                TabState::Active
            } else {
                TabState::Inactive
            };
        }

        tracing::debug!(
            tab = %tab_id,
            button = %button,
            previous = ?transition.closed,
            "Activated tab"
        );

        Ok(())
    }

    /// Show the tab strip container
    pub fn reveal(&self) -> Result<()> {
        let container = self
            .page
            .with_document(|doc| doc.require(&self.layout.container))?;
        self.page
            .with_document_mut(|doc| doc.add_class(container, &self.layout.show_class));
        Ok(())
    }

    pub fn is_revealed(&self) -> bool {
        self.page
            .has_class(&self.layout.container, &self.layout.show_class)
    }

    fn clear_markers(&self, doc: &mut Document) {
        let active = &self.layout.active_class;
        let marked = doc
            .with_class(&self.layout.button_class)
            .into_iter()
            .chain(doc.with_class(&self.layout.panel_class));
        let paired = self.tabs.values().flat_map(|tab| [tab.button, tab.panel]);
        let nodes: Vec<NodeId> = marked.chain(paired).collect();

        for node in nodes {
            doc.remove_class(node, active);
        }
    }
}
