//! Loading a [`Document`] from page markup

use scraper::{ElementRef, Html};

use crate::document::{Document, NodeId};
use crate::element::Element;
use crate::Result;

impl Document {
    /// Build a document from a full HTML page.
    ///
    /// Only elements are kept; text, comments and doctype nodes are dropped.
    pub fn parse_html(markup: &str) -> Result<Self> {
        let html = Html::parse_document(markup);
        let mut doc = Document::new();

        append_element(&mut doc, None, html.root_element())?;

        tracing::debug!(elements = doc.len(), "Parsed page markup");

        Ok(doc)
    }
}

fn append_element(doc: &mut Document, parent: Option<NodeId>, source: ElementRef<'_>) -> Result<()> {
    let value = source.value();
    let mut element = Element::new(value.name());
    for (name, attr) in value.attrs() {
        element.set_attribute(name, attr);
    }

    let node = doc.append(parent, element)?;

    for child in source.children() {
        if let Some(child) = ElementRef::wrap(child) {
            append_element(doc, Some(node), child)?;
        }
    }

    Ok(())
}
