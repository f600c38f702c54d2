//! Selector trees and the predicates that refine them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

mod printer;

pub use printer::print_selector;

/// One condition narrowing which elements a selector node matches.
///
/// The derived `Ord` (variant order first, then payload) is the order in
/// which predicates are printed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Predicate {
    /// `#name`
    HasId(String),
    /// `.name`
    HasClass(String),
    /// `[name]`
    HasAttr(String),
    /// `[name='value']`
    AttrEquals(String, String),
    /// `[name^='value']`
    AttrStartsWith(String, String),
    /// `[name$='value']`
    AttrEndsWith(String, String),
    /// `[name*='value']`
    AttrContains(String, String),
    /// `[name~='value']`
    AttrSpaceSeparatedContains(String, String),
    /// `[name|='value']`
    AttrHyphenSeparatedContains(String, String),
    /// `:name`
    Pseudo(String),
    /// `:name(arg,arg)`
    PseudoFunction(String, Vec<String>),
    /// `::name`
    PseudoElement(String),
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::HasId(name) => write!(f, "#{}", name),
            Predicate::HasClass(name) => write!(f, ".{}", name),
            Predicate::HasAttr(name) => write!(f, "[{}]", name),
            Predicate::AttrEquals(name, val) => write!(f, "[{}='{}']", name, val),
            Predicate::AttrStartsWith(name, val) => write!(f, "[{}^='{}']", name, val),
            Predicate::AttrEndsWith(name, val) => write!(f, "[{}$='{}']", name, val),
            Predicate::AttrContains(name, val) => write!(f, "[{}*='{}']", name, val),
            Predicate::AttrSpaceSeparatedContains(name, val) => {
                write!(f, "[{}~='{}']", name, val)
            }
            Predicate::AttrHyphenSeparatedContains(name, val) => {
                write!(f, "[{}|='{}']", name, val)
            }
            Predicate::Pseudo(name) => write!(f, ":{}", name),
            Predicate::PseudoFunction(name, args) => write!(f, ":{}({})", name, args.join(",")),
            Predicate::PseudoElement(name) => write!(f, "::{}", name),
        }
    }
}

/// The predicates attached to a single selector node.
///
/// Backed by an ordered set, so insertion order never shows up in output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Refinement(BTreeSet<Predicate>);

impl Refinement {
    pub fn new() -> Self {
        Refinement(BTreeSet::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Predicates in print order.
    pub fn iter(&self) -> impl Iterator<Item = &Predicate> {
        self.0.iter()
    }

    /// Adds every predicate of `other` to this set.
    pub fn merge(&mut self, other: &Refinement) {
        self.0.extend(other.0.iter().cloned());
    }
}

impl FromIterator<Predicate> for Refinement {
    fn from_iter<I: IntoIterator<Item = Predicate>>(iter: I) -> Self {
        Refinement(iter.into_iter().collect())
    }
}

impl fmt::Display for Refinement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for predicate in &self.0 {
            write!(f, "{}", predicate)?;
        }
        Ok(())
    }
}

/// The structural part of a selector node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    /// `*`
    Universal,
    /// A tag name such as `div`.
    Element(String),
    /// `parent > child`
    Child(Box<Selector>, Box<Selector>),
    /// `ancestor descendant`
    Descendant(Box<Selector>, Box<Selector>),
    /// `a + b`
    Adjacent(Box<Selector>, Box<Selector>),
    /// `a ~ b`
    Sibling(Box<Selector>, Box<Selector>),
    /// `a, b`
    Union(Box<Selector>, Box<Selector>),
}

/// A selector tree node: a shape plus the predicates refining it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selector {
    pub shape: Shape,
    #[serde(default, skip_serializing_if = "Refinement::is_empty")]
    pub refinement: Refinement,
}

impl Selector {
    fn from_shape(shape: Shape) -> Self {
        Selector {
            shape,
            refinement: Refinement::new(),
        }
    }

    pub fn universal() -> Self {
        Selector::from_shape(Shape::Universal)
    }

    pub fn element(tag: impl Into<String>) -> Self {
        Selector::from_shape(Shape::Element(tag.into()))
    }

    pub fn child(parent: Selector, child: Selector) -> Self {
        Selector::from_shape(Shape::Child(Box::new(parent), Box::new(child)))
    }

    pub fn descendant(ancestor: Selector, descendant: Selector) -> Self {
        Selector::from_shape(Shape::Descendant(Box::new(ancestor), Box::new(descendant)))
    }

    pub fn adjacent(a: Selector, b: Selector) -> Self {
        Selector::from_shape(Shape::Adjacent(Box::new(a), Box::new(b)))
    }

    pub fn sibling(a: Selector, b: Selector) -> Self {
        Selector::from_shape(Shape::Sibling(Box::new(a), Box::new(b)))
    }

    pub fn union(a: Selector, b: Selector) -> Self {
        Selector::from_shape(Shape::Union(Box::new(a), Box::new(b)))
    }

    /// Attaches predicates to this node (not to its children).
    pub fn with(mut self, predicates: impl IntoIterator<Item = Predicate>) -> Self {
        self.refinement.0.extend(predicates);
        self
    }

    /// Same as [`Selector::with`] for an already collected refinement.
    pub fn refined(mut self, refinement: &Refinement) -> Self {
        self.refinement.merge(refinement);
        self
    }
}

// Merged scopes nest as deep as their stack, so children are freed from a
// heap worklist instead of recursively.
impl Drop for Selector {
    fn drop(&mut self) {
        let mut pending: Vec<Box<Selector>> = Vec::new();
        self.shape.take_children(&mut pending);
        while let Some(mut node) = pending.pop() {
            node.shape.take_children(&mut pending);
        }
    }
}

impl Shape {
    fn take_children(&mut self, out: &mut Vec<Box<Selector>>) {
        match std::mem::replace(self, Shape::Universal) {
            Shape::Child(a, b)
            | Shape::Descendant(a, b)
            | Shape::Adjacent(a, b)
            | Shape::Sibling(a, b)
            | Shape::Union(a, b) => {
                out.push(a);
                out.push(b);
            }
            Shape::Universal | Shape::Element(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicate_text() {
        let cases = vec![
            (Predicate::HasId("main".into()), "#main"),
            (Predicate::HasClass("red".into()), ".red"),
            (Predicate::HasAttr("disabled".into()), "[disabled]"),
            (Predicate::AttrEquals("type".into(), "text".into()), "[type='text']"),
            (Predicate::AttrStartsWith("href".into(), "http".into()), "[href^='http']"),
            (Predicate::AttrEndsWith("src".into(), ".png".into()), "[src$='.png']"),
            (Predicate::AttrContains("title".into(), "x".into()), "[title*='x']"),
            (
                Predicate::AttrSpaceSeparatedContains("rel".into(), "nofollow".into()),
                "[rel~='nofollow']",
            ),
            (
                Predicate::AttrHyphenSeparatedContains("lang".into(), "en".into()),
                "[lang|='en']",
            ),
            (Predicate::Pseudo("hover".into()), ":hover"),
            (
                Predicate::PseudoFunction("nth-child".into(), vec!["2n".into(), "1".into()]),
                ":nth-child(2n,1)",
            ),
            (Predicate::PseudoElement("before".into()), "::before"),
        ];
        for (predicate, expected) in cases {
            assert_eq!(predicate.to_string(), expected);
        }
    }

    // Ids sort before classes, classes before pseudo-classes.
    #[test]
    fn test_refinement_orders_by_kind_then_name() {
        let refinement: Refinement = vec![
            Predicate::Pseudo("hover".into()),
            Predicate::HasClass("b".into()),
            Predicate::HasClass("a".into()),
            Predicate::HasId("x".into()),
        ]
        .into_iter()
        .collect();
        assert_eq!(refinement.to_string(), "#x.a.b:hover");
    }

    #[test]
    fn test_with_extends_existing_refinement() {
        let sel = Selector::element("p")
            .with([Predicate::HasClass("a".into())])
            .with([Predicate::HasClass("a".into()), Predicate::HasId("z".into())]);
        assert_eq!(sel.refinement.len(), 2);
    }
}
