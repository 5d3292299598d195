//! Tab state
//!
//! A tab is either the one on display or not. Switching is always done
//! through [`crate::TabSet::select`], which deactivates every other pair
//! first.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabState {
    /// Button highlighted and panel visible
    Active,
    /// Button and panel without the active marker
    #[default]
    Inactive,
}
