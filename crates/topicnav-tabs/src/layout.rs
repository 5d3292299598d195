//! Tab markup conventions

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabLayout {
    /// Wrapper around the tab strip, revealed on tree clicks
    pub container: String,
    pub button_class: String,
    pub panel_class: String,
    /// Button attribute naming the panel id
    pub tab_attribute: String,
    pub active_class: String,
    /// Class that makes the container visible
    pub show_class: String,
    /// Tab active after page load
    pub default_tab: String,
}

impl Default for TabLayout {
    fn default() -> Self {
        Self {
            container: "subTabsContainer".to_string(),
            button_class: "sub-tab-btn".to_string(),
            panel_class: "sub-tab-panel".to_string(),
            tab_attribute: "data-tab".to_string(),
            active_class: "active".to_string(),
            show_class: "show".to_string(),
            default_tab: "web-basics".to_string(),
        }
    }
}
