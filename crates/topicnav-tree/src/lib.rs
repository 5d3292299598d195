//! topicnav Outline
//!
//! Root → categories → leaves → sub-leaves. Opening the root reveals the
//! categories; each category reveals its leaves; a leaf flagged with
//! `data-has-sub="true"` reveals its `<leafId>-kids` group.
//!
//! Only one category container and one sub-group may be open at a time.

mod error;
mod hooks;
mod layout;
mod outline;

pub use error::TreeError;
pub use hooks::{LeftAlignLeaves, PresentationHook};
pub use layout::{CategoryLayout, OutlineLayout, Presentation};
pub use outline::{CategoryToggle, Outline};

pub type Result<T> = std::result::Result<T, TreeError>;
