//! Test page shared by the core tests

use topicnav_dom::Page;

pub const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Web Development Basics</title></head>
<body>
  <h1 id="intro">Web Development</h1>
  <div class="tree">
    <div id="root" class="node root-node">Web Development</div>
    <div id="strightline" class="connector"></div>
    <ul id="level1" class="level">
      <li id="html" class="node">HTML
        <ul id="htmlKids" class="children">
          <li id="tags" class="leaf" data-has-sub="true">Tags
            <ul id="tags-kids" class="sub-children">
              <li id="block-tags" class="sub-leaf">Block tags</li>
              <li class="sub-leaf">Inline tags</li>
            </ul>
          </li>
          <li id="forms" class="leaf" data-has-sub="true">Forms
            <ul id="forms-kids" class="sub-children">
              <li class="sub-leaf">Inputs</li>
            </ul>
          </li>
          <li id="attributes" class="leaf" data-has-sub="true">Attributes</li>
          <li id="doctype" class="leaf">Doctype</li>
        </ul>
      </li>
      <li id="css" class="node">CSS
        <ul id="cssKids" class="children">
          <li id="selectors" class="leaf" data-has-sub="true">Selectors
            <ul id="selectors-kids" class="sub-children">
              <li class="sub-leaf">Pseudo-classes</li>
            </ul>
          </li>
          <li id="box-model" class="leaf">Box model</li>
        </ul>
      </li>
      <li id="js" class="node">JavaScript
        <ul id="jsKids" class="children">
          <li id="events" class="leaf" data-has-sub="true">Events
            <ul id="events-kids" class="sub-children">
              <li class="sub-leaf">Bubbling</li>
            </ul>
          </li>
        </ul>
      </li>
    </ul>
  </div>
  <div id="subTabsContainer" class="sub-tabs">
    <nav>
      <button class="sub-tab-btn" data-tab="web-basics">Web Basics</button>
      <button class="sub-tab-btn" data-tab="html-basics">HTML Basics</button>
      <button class="sub-tab-btn" data-tab="css-basics">CSS Basics</button>
      <button class="sub-tab-btn" data-tab="js-basics">JS Basics</button>
    </nav>
    <section id="web-basics" class="sub-tab-panel">How the web works</section>
    <section id="html-basics" class="sub-tab-panel">Structure</section>
    <section id="css-basics" class="sub-tab-panel">Presentation</section>
    <section id="js-basics" class="sub-tab-panel">Behavior</section>
  </div>
</body>
</html>"#;

pub fn page() -> Page {
    Page::from_html(PAGE).expect("fixture page parses")
}
