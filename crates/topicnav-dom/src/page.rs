//! Shared handle to the loaded document

use parking_lot::RwLock;
use std::sync::Arc;

use crate::document::Document;
use crate::Result;

/// Cheap-to-clone handle that every controller piece holds onto.
pub struct Page {
    doc: Arc<RwLock<Document>>,
}

impl Page {
    pub fn new(doc: Document) -> Self {
        Self {
            doc: Arc::new(RwLock::new(doc)),
        }
    }

    pub fn from_html(markup: &str) -> Result<Self> {
        Ok(Self::new(Document::parse_html(markup)?))
    }

    pub fn with_document<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&Document) -> T,
    {
        let doc = self.doc.read();
        f(&doc)
    }

    pub fn with_document_mut<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&mut Document) -> T,
    {
        let mut doc = self.doc.write();
        f(&mut doc)
    }

    /// Whether the element with `id` carries `class`; false when the id is unknown
    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.with_document(|doc| doc.element_by_id(id).is_some_and(|el| el.has_class(class)))
    }
}

impl Clone for Page {
    fn clone(&self) -> Self {
        Self {
            doc: Arc::clone(&self.doc),
        }
    }
}
