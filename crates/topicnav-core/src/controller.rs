//! Selection controller
//!
//! Single owner of the outline, tab and routing state. Every public
//! operation either applies completely or, when a target element is
//! missing, changes nothing and reports [`Outcome::Skipped`].

use parking_lot::RwLock;
use serde::Serialize;

use topicnav_dom::{NodeId, Page};
use topicnav_tabs::TabSet;
use topicnav_tree::{Outline, PresentationHook};

use crate::config::Config;
use crate::error::CoreError;
use crate::router::{Action, EventRouter};
use crate::snapshot::SelectionSnapshot;
use crate::validation::ValidationReport;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Applied,
    Skipped,
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }
}

pub struct SelectionController {
    config: Config,
    page: Page,
    outline: RwLock<Outline>,
    tabs: RwLock<TabSet>,
    router: EventRouter,
}

impl SelectionController {
    /// Discover the outline and tabs in `page` and bind click handlers
    pub fn new(page: Page, config: Config) -> Result<Self> {
        config.check()?;

        let outline = Outline::build(page.clone(), config.outline.clone());
        let tabs = TabSet::discover(page.clone(), config.tabs.clone());
        let router = page.with_document(|doc| EventRouter::bind(doc, &outline, &tabs));

        Ok(Self {
            config,
            page,
            outline: RwLock::new(outline),
            tabs: RwLock::new(tabs),
            router,
        })
    }

    pub fn from_html(markup: &str, config: Config) -> Result<Self> {
        Self::new(Page::from_html(markup)?, config)
    }

    /// Page-ready setup: hide every category container and activate the
    /// default tab.
    ///
    /// In strict mode a markup mismatch is an error and nothing is touched.
    pub fn initialize(&self) -> Result<ValidationReport> {
        let report = self.validate();

        if !report.is_clean() {
            if self.config.strict {
                return Err(CoreError::InvalidMarkup(report));
            }
            report.log_findings();
        }

        self.outline.write().hide_children();

        if let Err(e) = self.tabs.write().select(&self.config.tabs.default_tab) {
            tracing::debug!(error = %e, "Default tab not activated");
        }

        tracing::info!(
            categories = self.config.outline.categories.len(),
            default_tab = %self.config.tabs.default_tab,
            "Selection controller initialized"
        );

        Ok(report)
    }

    /// Compare the document with the configured layout
    pub fn validate(&self) -> ValidationReport {
        let outline = self.outline.read();
        let tabs = self.tabs.read();

        let mut required: Vec<&str> = self.config.outline.required_ids();
        required.push(&self.config.tabs.container);

        let mut missing_elements: Vec<String> = self.page.with_document(|doc| {
            required
                .into_iter()
                .filter(|id| doc.by_id(id).is_none())
                .map(str::to_string)
                .collect()
        });

        let expected_tabs = std::iter::once(&self.config.tabs.default_tab)
            .chain(self.config.outline.categories.iter().map(|c| &c.tab));
        for tab in expected_tabs {
            let known = tabs.get(tab).is_ok() || tabs.tabs_without_panel().contains(tab);
            if !known && !missing_elements.contains(tab) {
                missing_elements.push(tab.clone());
            }
        }

        ValidationReport {
            missing_elements,
            unresolved_sub_groups: outline.unresolved_leaves().to_vec(),
            tabs_without_panel: tabs.tabs_without_panel().to_vec(),
            panels_without_button: tabs.panels_without_button().to_vec(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn router(&self) -> &EventRouter {
        &self.router
    }

    /// Replace the presentation hook of a category
    pub fn register_hook(
        &self,
        category: &str,
        hook: impl PresentationHook + 'static,
    ) -> Result<()> {
        Ok(self.outline.write().register_hook(category, hook)?)
    }

    pub fn snapshot(&self) -> SelectionSnapshot {
        let outline = self.outline.read();
        let tabs = self.tabs.read();

        SelectionSnapshot {
            root_open: outline.is_root_open(),
            expanded_category: outline.expanded_category().map(str::to_string),
            expanded_sub_group: outline.expanded_sub_group().map(str::to_string),
            active_tab: tabs.active().map(str::to_string),
            tabs_revealed: tabs.is_revealed(),
            tab_states: tabs
                .tabs()
                .map(|tab| (tab.id.clone(), tab.state))
                .collect(),
        }
    }

    // === Click operations ===

    /// Open or close the whole tree; always shows the default tab
    pub fn toggle_root(&self) -> Outcome {
        let result = self.outline.write().toggle_root();
        match result {
            Ok(_) => {
                self.show_tab(&self.config.tabs.default_tab);
                Outcome::Applied
            }
            Err(e) => skip("toggle_root", e),
        }
    }

    /// Open or close one category; always shows that category's tab
    pub fn toggle_category(&self, category: &str) -> Outcome {
        let Some(tab) = self
            .config
            .outline
            .category(category)
            .map(|c| c.tab.as_str())
        else {
            return skip("toggle_category", topicnav_tree::TreeError::UnknownCategory(
                category.to_string(),
            ));
        };

        let result = self.outline.write().toggle_category(category);
        match result {
            Ok(_) => {
                self.show_tab(tab);
                Outcome::Applied
            }
            Err(e) => skip("toggle_category", e),
        }
    }

    pub fn toggle_leaf_sub_group(&self, leaf_id: &str) -> Outcome {
        let result = self.outline.write().toggle_leaf_sub_group(leaf_id);
        match result {
            Ok(_) => Outcome::Applied,
            Err(e) => skip("toggle_leaf_sub_group", e),
        }
    }

    pub fn select_tab(&self, tab_id: &str) -> Outcome {
        let result = self.tabs.write().select(tab_id);
        match result {
            Ok(()) => Outcome::Applied,
            Err(e) => skip("select_tab", e),
        }
    }

    /// Activate the tab behind a clicked button
    pub fn press_tab_button(&self, button: NodeId) -> Outcome {
        let result = self.tabs.write().select_button(button);
        match result {
            Ok(()) => Outcome::Applied,
            Err(e) => skip("press_tab_button", e),
        }
    }

    /// Dispatch a click on the element with `id`
    pub fn click(&self, id: &str) -> Outcome {
        match self.page.with_document(|doc| doc.by_id(id)) {
            Some(node) => self.click_node(node),
            None => skip("click", topicnav_dom::DomError::MissingElement(id.to_string())),
        }
    }

    /// Dispatch a click on `node`, running every handler on its bubble path
    pub fn click_node(&self, node: NodeId) -> Outcome {
        let actions = self.page.with_document(|doc| self.router.route(doc, node));

        let mut outcome = Outcome::Skipped;
        for action in &actions {
            if self.perform(action).is_applied() {
                outcome = Outcome::Applied;
            }
        }

        tracing::debug!(node = %node, actions = actions.len(), ?outcome, "Handled click");

        outcome
    }

    pub fn perform(&self, action: &Action) -> Outcome {
        match action {
            Action::ToggleRoot => self.toggle_root(),
            Action::ToggleCategory(id) => self.toggle_category(id),
            Action::ToggleLeafSubGroup(id) => self.toggle_leaf_sub_group(id),
            Action::SelectTab(id) => self.select_tab(id),
            Action::PressTabButton(button) => self.press_tab_button(*button),
        }
    }

    /// Reveal the tab strip and activate `tab_id`
    fn show_tab(&self, tab_id: &str) {
        let mut tabs = self.tabs.write();
        if let Err(e) = tabs.reveal() {
            tracing::debug!(error = %e, "Tab container not revealed");
        }
        if let Err(e) = tabs.select(tab_id) {
            tracing::debug!(tab = %tab_id, error = %e, "Tab not activated");
        }
    }
}

fn skip(operation: &str, error: impl Into<CoreError>) -> Outcome {
    let error = error.into();
    tracing::debug!(operation, error = %error, "Skipped: target missing");
    Outcome::Skipped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use proptest::prelude::*;
    use topicnav_dom::Document;
    use topicnav_tabs::TabState;

    fn controller() -> SelectionController {
        let controller = SelectionController::new(fixtures::page(), Config::default()).unwrap();
        controller.initialize().unwrap();
        controller
    }

    fn shown(controller: &SelectionController, class: &str) -> Vec<String> {
        marked(controller, class, "show")
    }

    fn marked(controller: &SelectionController, class: &str, marker: &str) -> Vec<String> {
        controller.page().with_document(|doc| {
            doc.with_class(class)
                .into_iter()
                .filter(|node| doc.has_class(*node, marker))
                .map(|node| {
                    doc.get(node)
                        .and_then(|el| el.id.clone().or_else(|| el.attribute("data-tab").map(str::to_string)))
                        .unwrap_or_default()
                })
                .collect()
        })
    }

    fn has(controller: &SelectionController, id: &str, class: &str) -> bool {
        controller.page().has_class(id, class)
    }

    #[test]
    fn test_initial_state() {
        let controller = controller();
        let snapshot = controller.snapshot();

        assert!(!snapshot.root_open);
        assert_eq!(snapshot.expanded_category, None);
        assert_eq!(snapshot.expanded_sub_group, None);
        assert_eq!(snapshot.active_tab.as_deref(), Some("web-basics"));
        assert!(!snapshot.tabs_revealed);
        assert_eq!(marked(&controller, "sub-tab-panel", "active"), vec!["web-basics"]);
        assert_eq!(marked(&controller, "sub-tab-btn", "active"), vec!["web-basics"]);
        assert_eq!(snapshot.tab_states.len(), 4);
        assert_eq!(snapshot.tab_states["web-basics"], TabState::Active);
        assert_eq!(snapshot.tab_states["css-basics"], TabState::Inactive);
    }

    #[test]
    fn test_initialize_hides_prerendered_children() {
        let markup = fixtures::PAGE.replace(
            r#"id="cssKids" class="children""#,
            r#"id="cssKids" class="children show""#,
        );
        let controller = SelectionController::from_html(&markup, Config::default()).unwrap();
        assert!(has(&controller, "cssKids", "show"));

        let report = controller.initialize().unwrap();
        assert_eq!(report.unresolved_sub_groups, vec!["attributes"]);
        assert!(!has(&controller, "cssKids", "show"));
    }

    #[test]
    fn test_root_open_then_close_resets_tree() {
        let controller = controller();

        assert_eq!(controller.click("root"), Outcome::Applied);
        assert!(has(&controller, "level1", "show"));
        assert!(has(&controller, "strightline", "show"));
        assert!(has(&controller, "subTabsContainer", "show"));
        assert_eq!(controller.snapshot().active_tab.as_deref(), Some("web-basics"));

        controller.click("html");
        controller.click("tags");
        assert_eq!(controller.snapshot().active_tab.as_deref(), Some("html-basics"));

        controller.click("root");
        assert!(!has(&controller, "level1", "show"));
        assert!(!has(&controller, "strightline", "show"));
        assert!(shown(&controller, "children").is_empty());
        assert!(shown(&controller, "sub-children").is_empty());

        let snapshot = controller.snapshot();
        assert!(!snapshot.root_open);
        assert_eq!(snapshot.expanded_category, None);
        assert_eq!(snapshot.expanded_sub_group, None);
        assert_eq!(snapshot.active_tab.as_deref(), Some("web-basics"));
    }

    #[test]
    fn test_html_then_css() {
        let controller = controller();

        controller.click("html");
        assert_eq!(shown(&controller, "children"), vec!["htmlKids"]);
        assert_eq!(controller.snapshot().active_tab.as_deref(), Some("html-basics"));

        controller.click("css");
        assert_eq!(shown(&controller, "children"), vec!["cssKids"]);
        assert_eq!(controller.snapshot().active_tab.as_deref(), Some("css-basics"));
        assert_eq!(marked(&controller, "sub-tab-panel", "active"), vec!["css-basics"]);
    }

    #[test]
    fn test_html_twice_keeps_tab() {
        let controller = controller();

        controller.toggle_category("html");
        controller.toggle_category("html");

        assert!(!has(&controller, "htmlKids", "show"));
        assert_eq!(controller.snapshot().expanded_category, None);
        assert_eq!(controller.snapshot().active_tab.as_deref(), Some("html-basics"));
    }

    #[test]
    fn test_html_left_aligns_leaves() {
        let controller = controller();
        controller.toggle_category("html");

        let aligned = controller.page().with_document(|doc: &Document| {
            let tags = doc.element_by_id("tags").map(|el| el.style("text-align").map(str::to_string));
            let block = doc
                .element_by_id("block-tags")
                .map(|el| el.style("text-align").map(str::to_string));
            let selectors = doc
                .element_by_id("selectors")
                .map(|el| el.style("text-align").map(str::to_string));
            (tags, block, selectors)
        });

        assert_eq!(aligned.0, Some(Some("left".to_string())));
        assert_eq!(aligned.1, Some(Some("left".to_string())));
        assert_eq!(aligned.2, Some(None));
    }

    #[test]
    fn test_leaf_sub_groups() {
        let controller = controller();
        controller.click("html");

        controller.click("tags");
        assert_eq!(shown(&controller, "sub-children"), vec!["tags-kids"]);
        // The leaf click must not collapse its category
        assert!(has(&controller, "htmlKids", "show"));
        assert_eq!(controller.snapshot().active_tab.as_deref(), Some("html-basics"));

        controller.click("forms");
        assert_eq!(shown(&controller, "sub-children"), vec!["forms-kids"]);

        controller.click("forms");
        controller.click("tags");
        controller.click("tags");
        assert!(shown(&controller, "sub-children").is_empty());
        assert_eq!(controller.snapshot().expanded_sub_group, None);
    }

    #[test]
    fn test_sub_groups_exclusive_across_categories() {
        let controller = controller();
        controller.toggle_leaf_sub_group("tags");
        controller.toggle_leaf_sub_group("selectors");

        assert_eq!(shown(&controller, "sub-children"), vec!["selectors-kids"]);
        assert_eq!(
            controller.snapshot().expanded_sub_group.as_deref(),
            Some("selectors-kids")
        );
    }

    #[test]
    fn test_leaf_without_sub_group_is_inert() {
        let controller = controller();
        controller.click("html");
        controller.click("forms");
        let before = controller.snapshot();

        assert_eq!(controller.click("attributes"), Outcome::Skipped);
        assert_eq!(controller.toggle_leaf_sub_group("nope"), Outcome::Skipped);

        assert_eq!(controller.snapshot(), before);
        assert!(has(&controller, "htmlKids", "show"));
        assert_eq!(shown(&controller, "sub-children"), vec!["forms-kids"]);
    }

    #[test]
    fn test_plain_leaf_bubbles_to_category() {
        let controller = controller();
        controller.click("html");
        controller.click("doctype");

        assert!(!has(&controller, "htmlKids", "show"));
        assert_eq!(controller.snapshot().active_tab.as_deref(), Some("html-basics"));
    }

    #[test]
    fn test_tab_buttons() {
        let controller = controller();
        let button = controller
            .page()
            .with_document(|doc| doc.with_attribute("data-tab", "js-basics")[0]);

        assert_eq!(controller.click_node(button), Outcome::Applied);
        assert_eq!(marked(&controller, "sub-tab-btn", "active"), vec!["js-basics"]);
        assert_eq!(marked(&controller, "sub-tab-panel", "active"), vec!["js-basics"]);
        // Tab clicks leave the tree alone
        assert!(!controller.snapshot().root_open);

        assert_eq!(controller.select_tab("rust-basics"), Outcome::Skipped);
        assert_eq!(controller.snapshot().active_tab.as_deref(), Some("js-basics"));
    }

    #[test]
    fn test_duplicate_tab_button_gets_marker() {
        let markup = fixtures::PAGE.replace(
            r#"<section id="web-basics""#,
            r#"<button id="dup" class="sub-tab-btn" data-tab="css-basics">CSS again</button>
    <section id="web-basics""#,
        );
        let controller = SelectionController::from_html(&markup, Config::default()).unwrap();
        controller.initialize().unwrap();

        assert_eq!(controller.click("dup"), Outcome::Applied);
        assert!(has(&controller, "dup", "active"));
        assert!(has(&controller, "css-basics", "active"));
        assert_eq!(marked(&controller, "sub-tab-btn", "active"), vec!["dup"]);
        assert_eq!(controller.snapshot().active_tab.as_deref(), Some("css-basics"));
    }

    #[test]
    fn test_missing_targets_are_noops() {
        let controller = controller();
        let before = controller.snapshot();

        assert_eq!(controller.click("does-not-exist"), Outcome::Skipped);
        assert_eq!(controller.click("intro"), Outcome::Skipped);
        assert_eq!(controller.toggle_category("python"), Outcome::Skipped);
        assert_eq!(controller.snapshot(), before);
    }

    #[test]
    fn test_missing_connector_skips_root() {
        let markup = fixtures::PAGE.replace(r#"<div id="strightline" class="connector"></div>"#, "");
        let controller = SelectionController::from_html(&markup, Config::default()).unwrap();
        let report = controller.initialize().unwrap();
        assert_eq!(report.missing_elements, vec!["strightline"]);

        assert_eq!(controller.toggle_root(), Outcome::Skipped);
        assert!(!has(&controller, "level1", "show"));
        assert!(!has(&controller, "subTabsContainer", "show"));
        assert_eq!(controller.snapshot().active_tab.as_deref(), Some("web-basics"));
    }

    #[test]
    fn test_strict_mode_rejects_unresolved_sub_groups() {
        let config = Config {
            strict: true,
            ..Config::default()
        };
        let controller = SelectionController::new(fixtures::page(), config).unwrap();

        match controller.initialize() {
            Err(CoreError::InvalidMarkup(report)) => {
                assert_eq!(report.unresolved_sub_groups, vec!["attributes"]);
            }
            other => panic!("expected invalid markup, got {:?}", other.map(|_| ())),
        }
        assert_eq!(controller.snapshot().active_tab, None);
    }

    #[test]
    fn test_open_category_collapses_after_strict_failure() {
        let markup = fixtures::PAGE.replace(
            r#"id="cssKids" class="children""#,
            r#"id="cssKids" class="children show""#,
        );
        let config = Config {
            strict: true,
            ..Config::default()
        };
        let controller = SelectionController::from_html(&markup, config).unwrap();
        assert!(controller.initialize().is_err());
        assert!(has(&controller, "cssKids", "show"));
        assert_eq!(controller.snapshot().expanded_category.as_deref(), Some("css"));

        assert_eq!(controller.toggle_category("css"), Outcome::Applied);
        assert!(!has(&controller, "cssKids", "show"));
        assert_eq!(controller.snapshot().expanded_category, None);
    }

    #[test]
    fn test_strict_mode_accepts_clean_markup() {
        let markup = fixtures::PAGE.replace(r#" data-has-sub="true">Attributes"#, ">Attributes");
        let config = Config {
            strict: true,
            ..Config::default()
        };
        let controller = SelectionController::from_html(&markup, config).unwrap();
        assert!(controller.initialize().unwrap().is_clean());
    }

    #[test]
    fn test_validation_reports_tab_mismatches() {
        let markup = fixtures::PAGE
            .replace(r#"<section id="js-basics" class="sub-tab-panel">Behavior</section>"#, "")
            .replace(
                r#"<button class="sub-tab-btn" data-tab="web-basics">Web Basics</button>"#,
                "",
            );
        let controller = SelectionController::from_html(&markup, Config::default()).unwrap();
        let report = controller.validate();

        assert_eq!(report.tabs_without_panel, vec!["js-basics"]);
        assert_eq!(report.panels_without_button, vec!["web-basics"]);
        assert_eq!(report.missing_elements, vec!["web-basics"]);
    }

    #[test]
    fn test_custom_hook() {
        let controller = controller();
        controller
            .register_hook("js", |doc: &mut Document, node: NodeId| {
                doc.add_class(node, "highlighted");
            })
            .unwrap();
        assert!(controller
            .register_hook("python", |_: &mut Document, _: NodeId| {})
            .is_err());

        controller.toggle_category("js");
        assert!(has(&controller, "jsKids", "highlighted"));
    }

    #[derive(Debug, Clone)]
    enum Click {
        Root,
        Category(usize),
        Leaf(usize),
        Tab(usize),
    }

    fn clicks() -> impl Strategy<Value = Click> {
        prop_oneof![
            Just(Click::Root),
            (0usize..4).prop_map(Click::Category),
            (0usize..7).prop_map(Click::Leaf),
            (0usize..5).prop_map(Click::Tab),
        ]
    }

    proptest! {
        #[test]
        fn exclusivity_holds_for_any_click_sequence(sequence in prop::collection::vec(clicks(), 0..40)) {
            let categories = ["html", "css", "js", "python"];
            let leaves = ["tags", "forms", "selectors", "events", "attributes", "doctype", "block-tags"];
            let tabs = ["web-basics", "html-basics", "css-basics", "js-basics", "rust-basics"];
            let controller = controller();

            for click in sequence {
                match click {
                    Click::Root => controller.click("root"),
                    Click::Category(i) => controller.toggle_category(categories[i]),
                    Click::Leaf(i) => controller.click(leaves[i]),
                    Click::Tab(i) => controller.select_tab(tabs[i]),
                };

                let snapshot = controller.snapshot();
                let open_children = shown(&controller, "children");
                let open_groups = shown(&controller, "sub-children");

                prop_assert!(open_children.len() <= 1);
                prop_assert!(open_groups.len() <= 1);
                prop_assert_eq!(marked(&controller, "sub-tab-panel", "active").len(), 1);
                prop_assert_eq!(marked(&controller, "sub-tab-btn", "active").len(), 1);

                let expected_container = snapshot
                    .expanded_category
                    .as_deref()
                    .and_then(|c| controller.config().outline.category(c))
                    .map(|c| c.container.clone());
                prop_assert_eq!(open_children.first().cloned(), expected_container);
                prop_assert_eq!(open_groups.first().cloned(), snapshot.expanded_sub_group.clone());
                prop_assert_eq!(has(&controller, "level1", "show"), snapshot.root_open);
                prop_assert_eq!(has(&controller, "strightline", "show"), snapshot.root_open);
                let active_tabs = snapshot.tab_states.values().filter(|s| **s == TabState::Active).count();
                prop_assert_eq!(active_tabs, 1);
            }
        }
    }
}
