use super::{Selector, Shape};
use crate::config::Config;

/// Renders a selector tree to text.
///
/// Union branches become separate list entries joined by `,` plus the
/// configured newline; combinators distribute over those lists. Inline
/// configurations (both braces empty) always yield an empty string.
pub fn print_selector(cfg: &Config, selector: &Selector) -> String {
    if cfg.is_inline() {
        return String::new();
    }
    let glue = format!(",{}", cfg.newline);
    entries(selector).join(&glue)
}

enum Visit<'a> {
    Enter(&'a Selector),
    Exit(&'a Selector),
}

/// Flattens a selector into its comma-separated entries.
///
/// Walks the tree with an explicit stack: merged scopes produce chains as
/// deep as the scope stack they came from.
fn entries(selector: &Selector) -> Vec<String> {
    let mut work = vec![Visit::Enter(selector)];
    let mut done: Vec<Vec<String>> = Vec::new();

    while let Some(visit) = work.pop() {
        match visit {
            Visit::Enter(node) => match &node.shape {
                Shape::Universal => {
                    // A refined star prints as its predicates alone: `.foo`, not `*.foo`.
                    let star = if node.refinement.is_empty() { "*" } else { "" };
                    done.push(refine(node, vec![star.to_string()]));
                }
                Shape::Element(tag) => done.push(refine(node, vec![tag.clone()])),
                Shape::Child(a, b)
                | Shape::Descendant(a, b)
                | Shape::Adjacent(a, b)
                | Shape::Sibling(a, b)
                | Shape::Union(a, b) => {
                    work.push(Visit::Exit(node));
                    work.push(Visit::Enter(b.as_ref()));
                    work.push(Visit::Enter(a.as_ref()));
                }
            },
            Visit::Exit(node) => {
                let right = done.pop().unwrap_or_default();
                let left = done.pop().unwrap_or_default();
                let list = match &node.shape {
                    Shape::Child(..) => combine(left, " > ", right),
                    Shape::Descendant(..) => combine(left, " ", right),
                    Shape::Adjacent(..) => combine(left, " + ", right),
                    Shape::Sibling(..) => combine(left, " ~ ", right),
                    Shape::Union(..) => {
                        let mut both = left;
                        both.extend(right);
                        both
                    }
                    Shape::Universal | Shape::Element(_) => {
                        unreachable!("leaves are never revisited")
                    }
                };
                done.push(refine(node, list));
            }
        }
    }
    done.pop().unwrap_or_default()
}

/// Appends the node's predicates to every entry.
fn refine(node: &Selector, mut list: Vec<String>) -> Vec<String> {
    if !node.refinement.is_empty() {
        let suffix = node.refinement.to_string();
        for entry in &mut list {
            entry.push_str(&suffix);
        }
    }
    list
}

/// Cartesian product of both sides' entries, glued by a combinator.
fn combine(mut lefts: Vec<String>, glue: &str, rights: Vec<String>) -> Vec<String> {
    if let [right] = rights.as_slice() {
        for l in &mut lefts {
            l.push_str(glue);
            l.push_str(right);
        }
        return lefts;
    }
    let mut out = Vec::with_capacity(lefts.len() * rights.len());
    for l in &lefts {
        for r in &rights {
            out.push(format!("{}{}{}", l, glue, r));
        }
    }
    out
}
