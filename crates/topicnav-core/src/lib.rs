//! topicnav Core
//!
//! Wires the outline and the tab strip to click events. The controller owns
//! all selection state; the document only mirrors it through `show` and
//! `active` markers.

mod config;
mod controller;
mod error;
mod router;
mod snapshot;
mod validation;

#[cfg(test)]
mod fixtures;

pub use config::Config;
pub use controller::{Outcome, SelectionController};
pub use error::CoreError;
pub use router::{Action, EventRouter, Handler, Propagation};
pub use snapshot::SelectionSnapshot;
pub use validation::ValidationReport;

// Re-export building blocks
pub use topicnav_dom::{Document, DomError, Element, NodeId, Page};
pub use topicnav_tabs::{TabError, TabLayout, TabState};
pub use topicnav_tree::{
    CategoryLayout, LeftAlignLeaves, OutlineLayout, Presentation, PresentationHook, TreeError,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
