//! HTML output snapshots
//!
//! Config-driven renders are compared against inline snapshots so that changes
//! to class names, attribute order or escaping show up in review.

use variable_text::{render, render_html, render_with_config, Bindings, Config, HtmlConfig, Span};

fn quest_config() -> Config {
    Config::from_str(include_str!("fixtures/quest.toml")).expect("Fixture should parse")
}

#[test]
fn snapshot_hello_world() {
    let bindings: Bindings<Span> = Bindings::new().with("name", "World");
    let output = render("Hello, {name}!", &bindings).expect("Should render");
    insta::assert_snapshot!(
        render_html(&output, &HtmlConfig::default()),
        @r#"<span class="vt-text"><span data-key="0" class="vt-literal">Hello, </span><span data-key="1" class="vt-value">World</span><span data-key="2" class="vt-literal">!</span></span>"#
    );
}

#[test]
fn snapshot_pass_through() {
    let output = render("No vars & no <tags>", &Bindings::<Span>::new()).expect("Should render");
    insta::assert_snapshot!(
        render_html(&output, &HtmlConfig::default()),
        @r#"<span class="vt-text">No vars &amp; no &lt;tags&gt;</span>"#
    );
}

#[test]
fn snapshot_quest_story() {
    let config = quest_config();
    let source = include_str!("fixtures/quest.txt").trim_end();
    let output =
        render_with_config(source, &config.bindings(), &config.render_config()).expect("Should render");
    insta::assert_snapshot!(
        render_html(&output, &HtmlConfig::default()),
        @r#"<span class="vt-text"><span data-key="0" class="vt-literal" style="color: #333; font-family: monospace">Player </span><span data-key="1" class="vt-value"><span style="color: green; font-weight: bold">Hero</span></span><span data-key="2" class="vt-literal" style="color: #333; font-family: monospace"> found </span><span data-key="3" class="vt-value"><span style="color: goldenrod; font-weight: bold">Treasure</span></span><span data-key="4" class="vt-literal" style="color: #333; font-family: monospace"> in the </span><span data-key="5" class="vt-value"><span style="color: purple; font-style: italic">Ancient Cave</span></span><span data-key="6" class="vt-literal" style="color: #333; font-family: monospace">!</span></span>"#
    );
}

#[test]
fn snapshot_missing_marked() {
    let config = quest_config();
    let output = render_with_config("Welcome to {town}.", &config.bindings(), &config.render_config())
        .expect("Should render");
    let html = render_html(&output, &HtmlConfig::new().with_wrap(false));
    insta::assert_snapshot!(
        html,
        @r#"<span data-key="0" class="vt-literal" style="color: #333; font-family: monospace">Welcome to </span><span data-key="1" class="vt-missing"><span style="color: #721c24; background-color: #f8d7da">[missing: town]</span></span><span data-key="2" class="vt-literal" style="color: #333; font-family: monospace">.</span>"#
    );
}

#[test]
fn snapshot_escaped_values_and_literals() {
    let bindings: Bindings<Span> = Bindings::new().with("tag", "<b>\"bold\"</b>");
    let output = render("a < b: {tag}", &bindings).expect("Should render");
    let config = HtmlConfig::new().with_wrap(false).with_keys(false).without_class_prefix();
    insta::assert_snapshot!(
        render_html(&output, &config),
        @r#"<span class="literal">a &lt; b: </span><span class="value">&lt;b&gt;&quot;bold&quot;&lt;/b&gt;</span>"#
    );
}
