//! Outline markup conventions

use serde::{Deserialize, Serialize};

/// Built-in presentation tweaks a category can ask for when it opens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Presentation {
    /// Force `text-align: left` on the leaves and sub-leaves under the container
    LeftAlign,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryLayout {
    /// Clickable category node
    pub id: String,
    /// Container holding the category's leaves
    pub container: String,
    /// Tab shown when the category is clicked
    pub tab: String,
    #[serde(default)]
    pub presentation: Option<Presentation>,
}

impl CategoryLayout {
    pub fn new(id: &str, container: &str, tab: &str) -> Self {
        Self {
            id: id.to_string(),
            container: container.to_string(),
            tab: tab.to_string(),
            presentation: None,
        }
    }

    pub fn with_presentation(mut self, presentation: Presentation) -> Self {
        self.presentation = Some(presentation);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutlineLayout {
    pub root: String,
    /// Container of the category nodes
    pub level1: String,
    /// Line drawn between the root and the categories
    pub connector: String,
    pub categories: Vec<CategoryLayout>,
    pub children_class: String,
    pub sub_children_class: String,
    pub leaf_class: String,
    pub sub_leaf_class: String,
    /// Attribute (with value `"true"`) marking leaves that own a sub-group
    pub has_sub_attribute: String,
    /// Appended to a leaf id to name its sub-group
    pub sub_group_suffix: String,
    pub show_class: String,
}

impl OutlineLayout {
    pub fn category(&self, id: &str) -> Option<&CategoryLayout> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn sub_group_id(&self, leaf_id: &str) -> String {
        format!("{}{}", leaf_id, self.sub_group_suffix)
    }

    /// Ids the outline cannot work without
    pub fn required_ids(&self) -> Vec<&str> {
        let mut ids = vec![self.root.as_str(), self.level1.as_str(), self.connector.as_str()];
        for category in &self.categories {
            ids.push(&category.id);
            ids.push(&category.container);
        }
        ids
    }
}

impl Default for OutlineLayout {
    fn default() -> Self {
        Self {
            root: "root".to_string(),
            level1: "level1".to_string(),
            connector: "strightline".to_string(),
            categories: vec![
                CategoryLayout::new("html", "htmlKids", "html-basics")
                    .with_presentation(Presentation::LeftAlign),
                CategoryLayout::new("css", "cssKids", "css-basics"),
                CategoryLayout::new("js", "jsKids", "js-basics"),
            ],
            children_class: "children".to_string(),
            sub_children_class: "sub-children".to_string(),
            leaf_class: "leaf".to_string(),
            sub_leaf_class: "sub-leaf".to_string(),
            has_sub_attribute: "data-has-sub".to_string(),
            sub_group_suffix: "-kids".to_string(),
            show_class: "show".to_string(),
        }
    }
}
