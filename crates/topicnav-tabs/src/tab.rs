//! Tab data structure

use topicnav_dom::NodeId;

use crate::state::TabState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    /// `data-tab` value, also the panel's element id
    pub id: String,
    /// Button that carries `data-tab`
    pub button: NodeId,
    /// Panel element shown while the tab is active
    pub panel: NodeId,
    pub state: TabState,
}

impl Tab {
    pub fn new(id: impl Into<String>, button: NodeId, panel: NodeId) -> Self {
        Self {
            id: id.into(),
            button,
            panel,
            state: TabState::Inactive,
        }
    }
}
