//! topicnav Tabs
//!
//! The explanatory tab strip next to the topic outline. Each tab is a
//! button/panel pair keyed by the button's `data-tab` value, and exactly one
//! pair carries the active marker once the page is ready.

mod error;
mod layout;
mod set;
mod state;
mod tab;

pub use error::TabError;
pub use layout::TabLayout;
pub use set::TabSet;
pub use state::TabState;
pub use tab::Tab;

pub type Result<T> = std::result::Result<T, TabError>;
