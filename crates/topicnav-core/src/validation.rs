//! Startup check of the markup against the configured layout

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Required ids that resolve to no element
    pub missing_elements: Vec<String>,
    /// Leaves flagged with a sub-group whose `<leafId>-kids` element is absent
    pub unresolved_sub_groups: Vec<String>,
    /// `data-tab` values with no panel of that id
    pub tabs_without_panel: Vec<String>,
    /// Panels no button points at
    pub panels_without_button: Vec<String>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.missing_elements.is_empty()
            && self.unresolved_sub_groups.is_empty()
            && self.tabs_without_panel.is_empty()
            && self.panels_without_button.is_empty()
    }

    pub(crate) fn log_findings(&self) {
        for id in &self.missing_elements {
            tracing::warn!(id = %id, "Required element missing; its clicks will do nothing");
        }
        for leaf in &self.unresolved_sub_groups {
            tracing::warn!(leaf = %leaf, "Leaf is flagged with a sub-group but none exists");
        }
        for tab in &self.tabs_without_panel {
            tracing::warn!(tab = %tab, "Tab button has no panel");
        }
        for panel in &self.panels_without_button {
            tracing::warn!(panel = %panel, "Tab panel has no button");
        }
    }
}

impl std::fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_clean() {
            return write!(f, "no findings");
        }

        let sections = [
            ("missing elements", &self.missing_elements),
            ("unresolved sub-groups", &self.unresolved_sub_groups),
            ("tabs without panel", &self.tabs_without_panel),
            ("panels without button", &self.panels_without_button),
        ];
        let parts: Vec<String> = sections
            .iter()
            .filter(|(_, ids)| !ids.is_empty())
            .map(|(label, ids)| format!("{}: {}", label, ids.join(", ")))
            .collect();

        write!(f, "{}", parts.join("; "))
    }
}
