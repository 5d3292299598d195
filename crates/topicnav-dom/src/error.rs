//! DOM error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomError {
    #[error("Element not found: {0}")]
    MissingElement(String),

    #[error("'{id}' is not a member of group '{group}'")]
    UnknownMember { group: String, id: String },
}
