//! Outline error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("Element not found: {0}")]
    MissingElement(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Leaf has no sub-group: {0}")]
    NoSubGroup(String),

    #[error("DOM error: {0}")]
    Dom(#[from] topicnav_dom::DomError),
}
