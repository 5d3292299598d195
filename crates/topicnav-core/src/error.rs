//! Core error types

use thiserror::Error;

use crate::validation::ValidationReport;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("DOM error: {0}")]
    Dom(#[from] topicnav_dom::DomError),

    #[error("Tab error: {0}")]
    Tab(#[from] topicnav_tabs::TabError),

    #[error("Outline error: {0}")]
    Tree(#[from] topicnav_tree::TreeError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid markup: {0}")]
    InvalidMarkup(ValidationReport),
}
