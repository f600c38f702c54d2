//! Walks a rule tree and flattens it into stylesheet text.
//!
//! Each nesting level is emitted in a fixed order, whatever order the rules
//! were declared in:
//!
//! 1. the level's own declarations, under the selector its scope resolves to
//! 2. `@import` lines
//! 3. `@keyframes`, once per vendor prefix that supports them
//! 4. `@font-face` blocks
//! 5. nested blocks, each with its scope operation pushed
//! 6. `@media` blocks, rendered with the level's own scope

use crate::config::Config;
use crate::property::{expand, print_properties, Representation};
use crate::rule::{Feature, Keyframes, MediaQuery, Negation, Rule};
use crate::scope::ScopeStack;
use crate::selector::print_selector;
use crate::vendor;

/// Renders `rules` under `scope` without the banner.
///
/// # Panics
///
/// Panics if a level that declares properties resolves its scope to nothing
/// (see [`ScopeStack::merge`]).
pub fn render_rules(cfg: &Config, scope: &ScopeStack, rules: &[Rule]) -> String {
    let mut renderer = Renderer {
        cfg,
        out: String::new(),
    };
    renderer.level(Anchor::Scope(scope), rules);
    renderer.out
}

/// What a level's own declarations are printed under.
#[derive(Clone, Copy)]
enum Anchor<'a> {
    /// The selector the scope stack resolves to.
    Scope(&'a ScopeStack),
    /// A fixed header such as `50%` or `@font-face`; the scope is empty.
    Fixed(&'a str),
}

struct Renderer<'a> {
    cfg: &'a Config,
    out: String,
}

impl Renderer<'_> {
    fn level(&mut self, anchor: Anchor<'_>, rules: &[Rule]) {
        log::debug!("rendering a level of {} rules", rules.len());

        let reprs: Vec<Representation> = rules
            .iter()
            .filter_map(|rule| match rule {
                Rule::Property {
                    modifiers,
                    key,
                    value,
                } => Some(expand(modifiers, key, value)),
                _ => None,
            })
            .flatten()
            .collect();
        self.declarations(anchor, &reprs);

        for rule in rules {
            if let Rule::Import(url) = rule {
                self.import(url);
            }
        }

        for rule in rules {
            if let Rule::Keyframes(keyframes) = rule {
                self.keyframes(keyframes);
            }
        }

        for rule in rules {
            if let Rule::FontFace(children) = rule {
                self.level(Anchor::Fixed("@font-face"), children);
            }
        }

        for rule in rules {
            if let Rule::Nested(op, children) = rule {
                let inner = match anchor {
                    Anchor::Scope(scope) => scope.entered(op.clone()),
                    Anchor::Fixed(_) => ScopeStack::new().entered(op.clone()),
                };
                self.level(Anchor::Scope(&inner), children);
            }
        }

        for rule in rules {
            if let Rule::Query(query, children) = rule {
                self.open(&media_query(query));
                self.level(anchor, children);
                self.close();
            }
        }
    }

    /// Emits the declaration block of a level, or nothing if it would be empty.
    fn declarations(&mut self, anchor: Anchor<'_>, reprs: &[Representation]) {
        let body = print_properties(self.cfg, reprs);
        if body.is_empty() {
            return;
        }
        let header = match anchor {
            Anchor::Scope(scope) => print_selector(self.cfg, &scope.merge()),
            Anchor::Fixed(header) => header.to_string(),
        };
        log::debug!("block {:?} with {} declarations", header, reprs.len());
        self.open(&header);
        self.out.push_str(&body);
        self.close();
    }

    fn import(&mut self, url: &str) {
        self.out.push_str("@import url(");
        self.out.push_str(url);
        self.out.push_str(");");
        self.out.push_str(&self.cfg.newline);
    }

    fn keyframes(&mut self, keyframes: &Keyframes) {
        for prefix in vendor::keyframes_prefixes() {
            self.open(&format!("@{}keyframes {}", prefix, keyframes.name));
            for frame in &keyframes.frames {
                let header = frame_header(frame.percentage);
                self.level(Anchor::Fixed(&header), &frame.rules);
            }
            self.close();
        }
    }

    fn open(&mut self, header: &str) {
        self.out.push_str(header);
        self.out.push_str(&self.cfg.separator);
        self.out.push_str(&self.cfg.lbrace);
        self.out.push_str(&self.cfg.newline);
    }

    fn close(&mut self) {
        self.out.push_str(&self.cfg.rbrace);
        self.out.push_str(&self.cfg.newline);
    }
}

/// `@media [not|only] <type>[ and (<feature>)]*`
fn media_query(query: &MediaQuery) -> String {
    let mut text = String::from("@media ");
    match query.negation {
        Some(Negation::Not) => text.push_str("not "),
        Some(Negation::Only) => text.push_str("only "),
        None => {}
    }
    text.push_str(&query.media_type);
    for feature in &query.features {
        text.push_str(" and ");
        text.push_str(&media_feature(feature));
    }
    text
}

/// Keyframe selector, clamped to `0%..=100%`. NaN and `-0` print as `0%`.
fn frame_header(percentage: f64) -> String {
    let pct = if percentage.is_nan() {
        0.0
    } else {
        percentage.clamp(0.0, 100.0)
    };
    // `-0.0 + 0.0` is `+0.0`.
    format!("{}%", pct + 0.0)
}

fn media_feature(feature: &Feature) -> String {
    match &feature.value {
        Some(value) => format!("({}: {})", feature.name, value),
        None => format!("({})", feature.name),
    }
}
