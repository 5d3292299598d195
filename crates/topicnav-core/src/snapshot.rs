//! Serializable view of the controller state

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use topicnav_tabs::TabState;

use crate::Result;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSnapshot {
    pub root_open: bool,
    /// Category id, e.g. `"html"`
    pub expanded_category: Option<String>,
    /// Sub-group element id, e.g. `"tags-kids"`
    pub expanded_sub_group: Option<String>,
    pub active_tab: Option<String>,
    pub tabs_revealed: bool,
    /// State of every complete tab, keyed by tab id
    pub tab_states: BTreeMap<String, TabState>,
}

impl SelectionSnapshot {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
