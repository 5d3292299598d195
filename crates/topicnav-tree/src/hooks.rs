//! Per-category presentation hooks
//!
//! Hooks run after a category container opens. They may restyle elements
//! but never touch selection state.

use topicnav_dom::{Document, NodeId};

use crate::layout::{OutlineLayout, Presentation};

pub trait PresentationHook: Send + Sync {
    fn on_expand(&self, doc: &mut Document, container: NodeId);
}

impl<F> PresentationHook for F
where
    F: Fn(&mut Document, NodeId) + Send + Sync,
{
    fn on_expand(&self, doc: &mut Document, container: NodeId) {
        self(doc, container)
    }
}

/// Sets `text-align: left` on leaf and sub-leaf elements inside the container
pub struct LeftAlignLeaves {
    classes: Vec<String>,
}

impl LeftAlignLeaves {
    pub fn new(classes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            classes: classes.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from_layout(layout: &OutlineLayout) -> Self {
        Self::new([layout.leaf_class.as_str(), layout.sub_leaf_class.as_str()])
    }
}

impl PresentationHook for LeftAlignLeaves {
    fn on_expand(&self, doc: &mut Document, container: NodeId) {
        let targets: Vec<NodeId> = doc
            .descendants(container)
            .into_iter()
            .filter(|node| self.classes.iter().any(|class| doc.has_class(*node, class)))
            .collect();

        for node in &targets {
            doc.set_style(*node, "text-align", "left");
        }

        tracing::trace!(container = %container, count = targets.len(), "Left-aligned leaves");
    }
}

/// Hook for a configured [`Presentation`]
pub(crate) fn builtin(presentation: Presentation, layout: &OutlineLayout) -> Box<dyn PresentationHook> {
    match presentation {
        Presentation::LeftAlign => Box::new(LeftAlignLeaves::from_layout(layout)),
    }
}
