//! topicnav DOM
//!
//! An in-memory stand-in for the page's element tree. The static documentation
//! markup is loaded once; afterwards only class markers and inline styles
//! change.

mod document;
mod element;
mod error;
mod exclusive;
mod html;
mod page;

pub use document::{Document, NodeId};
pub use element::Element;
pub use error::DomError;
pub use exclusive::{ExclusiveGroup, Transition};
pub use page::Page;

pub type Result<T> = std::result::Result<T, DomError>;
