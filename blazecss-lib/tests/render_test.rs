use blazecss_lib::validate;
use blazecss_lib::{
    render, render_selector, Config, Feature, Frame, Key, Keyframes, MediaQuery, Modifier,
    Predicate, Rule, ScopeOp, ScopeStack, Selector, Sheet, Value,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn no_banner(cfg: Config) -> Config {
    Config {
        banner: false,
        ..cfg
    }
}

/// A sheet touching every rule kind, rendered from an empty top-level scope.
fn site_sheet() -> Vec<Rule> {
    vec![
        Rule::Nested(
            ScopeOp::ChildOf(Selector::element("body")),
            vec![
                Rule::property("margin", "0"),
                Rule::Property {
                    modifiers: vec![Modifier::Comment("motion".into())],
                    key: Key::prefixed([
                        ("-webkit-", "transition"),
                        ("-moz-", "transition"),
                        ("", "transition"),
                    ]),
                    value: Value::prefixed([("-webkit-", "opacity 1s"), ("", "opacity 1s")]),
                },
                Rule::Nested(
                    ScopeOp::ChildOf(
                        Selector::element("a").with([Predicate::HasClass("nav".into())]),
                    ),
                    vec![Rule::Property {
                        modifiers: vec![Modifier::Important],
                        key: Key::plain("color"),
                        value: Value::plain("navy"),
                    }],
                ),
                Rule::Query(
                    MediaQuery::new("screen").with_feature(Feature::new("max-width", "600px")),
                    vec![Rule::property("font-size", "14px")],
                ),
            ],
        ),
        Rule::Keyframes(Keyframes {
            name: "fade".into(),
            frames: vec![
                Frame {
                    percentage: 0.0,
                    rules: vec![Rule::property("opacity", "0")],
                },
                Frame {
                    percentage: 100.0,
                    rules: vec![Rule::property("opacity", "1")],
                },
            ],
        }),
        Rule::FontFace(vec![
            Rule::property("font-family", "Body"),
            Rule::property("src", "url(body.woff2)"),
        ]),
        Rule::Import("base.css".into()),
    ]
}

// ============================================================================
// Worked examples
// ============================================================================

#[test]
fn test_div_color_red() {
    let scope = ScopeStack::from_innermost([ScopeOp::ChildOf(Selector::element("div"))]);
    let css = render(
        &no_banner(Config::pretty()),
        &scope,
        &[Rule::property("color", "red")],
    );
    assert_eq!(css, "div {\n  color: red;\n}\n");
}

#[test]
fn test_rooted_at_body() {
    let scope = ScopeStack::from_innermost([
        ScopeOp::RootedAt(Selector::element("body")),
        ScopeOp::ChildOf(Selector::element("a")),
    ]);
    assert_eq!(render_selector(&scope.merge()), "body a");
}

#[test]
fn test_pretty_site_sheet() {
    let css = render(&Config::pretty(), &ScopeStack::new(), &site_sheet());
    let expected = "\
@import url(base.css);
@-webkit-keyframes fade {
0% {
  opacity: 0;
}
100% {
  opacity: 1;
}
}
@-moz-keyframes fade {
0% {
  opacity: 0;
}
100% {
  opacity: 1;
}
}
@-o-keyframes fade {
0% {
  opacity: 0;
}
100% {
  opacity: 1;
}
}
@keyframes fade {
0% {
  opacity: 0;
}
100% {
  opacity: 1;
}
}
@font-face {
  font-family: Body;
  src:         url(body.woff2);
}
body {
  margin:             0;
  -webkit-transition: -webkit-opacity 1s /* motion */;
  /* no value for -moz-transition */
  transition:         opacity 1s /* motion */;
}
body > a.nav {
  color: navy !important;
}
@media screen and (max-width: 600px) {
body {
  font-size: 14px;
}
}
/* Generated with BlazeCSS */
";
    assert_eq!(css, expected);
}

#[test]
fn test_compact_site_sheet() {
    let css = render(&Config::compact(), &ScopeStack::new(), &site_sheet());
    assert!(css.starts_with("@import url(base.css);@-webkit-keyframes fade{0%{opacity:0}"));
    assert!(css.ends_with(
        "body{margin:0;-webkit-transition:-webkit-opacity 1s;transition:opacity 1s}\
         body > a.nav{color:navy !important}\
         @media screen and (max-width: 600px){body{font-size:14px}}"
    ));
    assert!(!css.contains("/*"));
}

// ============================================================================
// Output is valid CSS
// ============================================================================

#[test]
fn test_pretty_output_parses() {
    let css = render(&Config::pretty(), &ScopeStack::new(), &site_sheet());
    let summary = validate::check(&css).expect("pretty output should parse");
    assert_eq!(summary.import, 1);
    assert_eq!(summary.font_face, 1);
    assert_eq!(summary.style, 2);
    assert_eq!(summary.media, 1);
    // One @keyframes block per prefix in the vendor table.
    assert_eq!(summary.keyframes + summary.other, 4);
    assert_eq!(summary.total(), 9);
}

#[test]
fn test_compact_output_parses() {
    let css = render(&Config::compact(), &ScopeStack::new(), &site_sheet());
    assert_eq!(validate::check(&css).expect("compact output should parse").total(), 9);
}

// ============================================================================
// Sheets from JSON
// ============================================================================

#[test]
fn test_json_sheet_renders() {
    let json = r#"{
        "scope": [ { "ChildOf": { "shape": { "Element": "ul" } } } ],
        "rules": [
            { "Property": { "key": { "Plain": "padding" }, "value": { "Plain": "0" } } },
            { "Nested": [
                { "RefineSelf": [ { "PseudoFunction": ["nth-child", ["2n"]] } ] },
                [ { "Property": { "key": { "Plain": "color" }, "value": { "Plain": "gray" } } } ]
            ] }
        ]
    }"#;
    let sheet = Sheet::from_json(json).unwrap();
    let css = render(&Config::compact(), &sheet.scope, &sheet.rules);
    assert_eq!(css, "ul{padding:0}ul:nth-child(2n){color:gray}");
}

#[test]
fn test_demo_sheet() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../demos/nav.json");
    let json = std::fs::read_to_string(path).expect("demo sheet should exist");
    let sheet = Sheet::from_json(&json).unwrap();
    let css = render(&Config::compact(), &sheet.scope, &sheet.rules);
    assert_eq!(
        css,
        "@import url(reset.css);\
         nav{display:flex;-webkit-transition:-webkit-transform 0.2s;transition:transform 0.2s}\
         nav a.item{color:white !important}\
         nav a.item:hover{color:gold}\
         @media screen and (max-width: 600px){nav{display:block}}"
    );
    assert_eq!(validate::check(&css).unwrap().total(), 5);
}

// ============================================================================
// Properties
// ============================================================================

fn predicate() -> impl Strategy<Value = Predicate> {
    let name = "[a-z]{1,6}";
    prop_oneof![
        name.prop_map(Predicate::HasId),
        name.prop_map(Predicate::HasClass),
        name.prop_map(Predicate::HasAttr),
        (name, name).prop_map(|(a, v)| Predicate::AttrEquals(a, v)),
        (name, name).prop_map(|(a, v)| Predicate::AttrHyphenSeparatedContains(a, v)),
        name.prop_map(Predicate::Pseudo),
        name.prop_map(Predicate::PseudoElement),
    ]
}

proptest! {
    #[test]
    fn prop_predicate_order_is_irrelevant(
        (original, shuffled) in prop::collection::vec(predicate(), 0..8)
            .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
    ) {
        let a = Selector::element("p").with(original);
        let b = Selector::element("p").with(shuffled);
        prop_assert_eq!(render_selector(&a), render_selector(&b));
    }

    #[test]
    fn prop_render_is_deterministic(
        tags in prop::collection::vec("[a-z]{1,8}", 1..5),
        value in "[a-z0-9]{1,10}",
    ) {
        let rules: Vec<Rule> = tags
            .iter()
            .map(|t| Rule::Nested(
                ScopeOp::DescendantOf(Selector::element(t.as_str())),
                vec![Rule::property("color", value.as_str())],
            ))
            .collect();
        let cfg = Config::pretty();
        let first = render(&cfg, &ScopeStack::new(), &rules);
        let second = render(&cfg, &ScopeStack::new(), &rules);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_inline_selector_is_empty(tag in "[a-z]{1,8}", class in "[a-z]{1,8}") {
        let sel = Selector::child(
            Selector::element(tag),
            Selector::universal().with([Predicate::HasClass(class)]),
        );
        prop_assert_eq!(blazecss_lib::selector::print_selector(&Config::inline(), &sel), "");
    }
}
