//! Controller configuration

use serde::{Deserialize, Serialize};
use topicnav_tabs::TabLayout;
use topicnav_tree::OutlineLayout;

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Ids and classes of the topic tree
    pub outline: OutlineLayout,
    /// Ids and classes of the tab strip
    pub tabs: TabLayout,
    /// Refuse to start when the markup does not match the layout
    pub strict: bool,
}

impl Config {
    pub fn from_json(input: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(input)?;
        config.check()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject layouts the controller cannot bind
    pub fn check(&self) -> Result<()> {
        if self.outline.sub_group_suffix.is_empty() {
            return Err(CoreError::Config(
                "sub_group_suffix cannot be empty".to_string(),
            ));
        }
        if self.tabs.default_tab.is_empty() {
            return Err(CoreError::Config("default_tab cannot be empty".to_string()));
        }

        let mut seen = std::collections::HashSet::new();
        for category in &self.outline.categories {
            if !seen.insert(category.id.as_str()) {
                return Err(CoreError::Config(format!(
                    "duplicate category: {}",
                    category.id
                )));
            }
        }

        Ok(())
    }
}
