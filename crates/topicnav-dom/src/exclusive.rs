//! Exclusive selection group
//!
//! One instance per "only one may be open" set: the category containers, the
//! leaf sub-groups, and the tab pairs.
//! ```text
//!              select(a) / toggle(a)
//! NoneSelected ──────────────────────▶ Selected(a)
//!      ▲                                 │  │
//!      │ toggle(a) / clear()             │  │ select(b) / toggle(b)
//!      └─────────────────────────────────┘  ▼
//!                                        Selected(b)
//! ```

use crate::error::DomError;
use crate::Result;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) enum GroupState {
    #[default]
    NoneSelected,
    Selected(String),
}

impl GroupState {
    fn selected(&self) -> Option<&str> {
        match self {
            GroupState::NoneSelected => None,
            GroupState::Selected(id) => Some(id),
        }
    }
}

/// What a group operation changed, for projecting onto the document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transition {
    pub closed: Option<String>,
    pub opened: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ExclusiveGroup {
    name: String,
    members: Vec<String>,
    state: GroupState,
}

impl ExclusiveGroup {
    pub fn new<I, S>(name: impl Into<String>, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut group = Self {
            name: name.into(),
            members: Vec::new(),
            state: GroupState::NoneSelected,
        };
        for member in members {
            group.add_member(member);
        }
        group
    }

    pub fn members(&self) -> &[String] {
        &self.members
    }

    pub fn selected(&self) -> Option<&str> {
        self.state.selected()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.members.iter().any(|m| m == id)
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected() == Some(id)
    }

    /// Returns false if `id` was already a member
    pub fn add_member(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.contains(&id) {
            return false;
        }
        self.members.push(id);
        true
    }

    /// Make `id` the sole selection
    pub fn select(&mut self, id: &str) -> Result<Transition> {
        self.check_member(id)?;

        let closed = match &self.state {
            GroupState::Selected(current) if current != id => Some(current.clone()),
            _ => None,
        };
        self.set_state(GroupState::Selected(id.to_string()));

        Ok(Transition {
            closed,
            opened: Some(id.to_string()),
        })
    }

    /// Close `id` if it is the selection, otherwise select it
    pub fn toggle(&mut self, id: &str) -> Result<Transition> {
        self.check_member(id)?;

        if self.is_selected(id) {
            self.set_state(GroupState::NoneSelected);
            Ok(Transition {
                closed: Some(id.to_string()),
                opened: None,
            })
        } else {
            self.select(id)
        }
    }

    pub fn clear(&mut self) -> Transition {
        let closed = self.selected().map(str::to_string);
        self.set_state(GroupState::NoneSelected);
        Transition {
            closed,
            opened: None,
        }
    }

    fn check_member(&self, id: &str) -> Result<()> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(DomError::UnknownMember {
                group: self.name.clone(),
                id: id.to_string(),
            })
        }
    }

    fn set_state(&mut self, state: GroupState) {
        if self.state != state {
            tracing::debug!(
                group = %self.name,
                from = ?self.state,
                to = ?state,
                "Selection transition"
            );
            self.state = state;
        }
    }
}
