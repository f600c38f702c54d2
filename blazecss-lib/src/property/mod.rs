//! Property declarations and vendor-prefix cross-expansion.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

mod printer;

pub use printer::print_properties;

/// Text that is either used as-is or comes in per-vendor variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Prefixable {
    Plain(String),
    /// `(prefix, base)` pairs, e.g. `("-webkit-", "transition")`.
    Prefixed(Vec<(String, String)>),
}

/// A property name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Key(pub Prefixable);

/// A property value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Value(pub Prefixable);

impl Key {
    pub fn plain(text: impl Into<String>) -> Self {
        Key(Prefixable::Plain(text.into()))
    }

    pub fn prefixed<P, B>(variants: impl IntoIterator<Item = (P, B)>) -> Self
    where
        P: Into<String>,
        B: Into<String>,
    {
        Key(Prefixable::Prefixed(collect_variants(variants)))
    }
}

impl Value {
    pub fn plain(text: impl Into<String>) -> Self {
        Value(Prefixable::Plain(text.into()))
    }

    pub fn prefixed<P, B>(variants: impl IntoIterator<Item = (P, B)>) -> Self
    where
        P: Into<String>,
        B: Into<String>,
    {
        Value(Prefixable::Prefixed(collect_variants(variants)))
    }
}

fn collect_variants<P, B>(variants: impl IntoIterator<Item = (P, B)>) -> Vec<(String, String)>
where
    P: Into<String>,
    B: Into<String>,
{
    variants
        .into_iter()
        .map(|(p, b)| (p.into(), b.into()))
        .collect()
}

/// Extra flags attached to a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Modifier {
    Important,
    Comment(String),
}

/// A declaration after expansion, ready for printing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Representation {
    /// A vendor-prefixed key whose value has no variant for that vendor.
    Warning(String),
    Resolved {
        modifiers: Vec<Modifier>,
        key: String,
        value: String,
    },
}

/// Expands one declaration into concrete key/value pairs.
///
/// When both sides are prefixed, every key variant looks up the value
/// variant carrying the same prefix; a missing one yields a
/// [`Representation::Warning`] named after the prefixed key.
pub fn expand(modifiers: &[Modifier], key: &Key, value: &Value) -> Vec<Representation> {
    let resolved = |k: String, v: String| Representation::Resolved {
        modifiers: modifiers.to_vec(),
        key: k,
        value: v,
    };

    match (&key.0, &value.0) {
        (Prefixable::Plain(k), Prefixable::Plain(v)) => vec![resolved(k.clone(), v.clone())],
        (Prefixable::Prefixed(ks), Prefixable::Plain(v)) => ks
            .iter()
            .map(|(prefix, k)| resolved(format!("{}{}", prefix, k), v.clone()))
            .collect(),
        (Prefixable::Plain(k), Prefixable::Prefixed(vs)) => vs
            .iter()
            .map(|(prefix, v)| resolved(k.clone(), format!("{}{}", prefix, v)))
            .collect(),
        (Prefixable::Prefixed(ks), Prefixable::Prefixed(vs)) => {
            let mut by_prefix: HashMap<&str, &str> = HashMap::with_capacity(vs.len());
            for (prefix, v) in vs {
                by_prefix.entry(prefix.as_str()).or_insert(v.as_str());
            }

            let mut out = Vec::with_capacity(ks.len());
            for (prefix, k) in ks {
                let full_key = format!("{}{}", prefix, k);
                match by_prefix.get(prefix.as_str()) {
                    Some(v) => out.push(resolved(full_key, format!("{}{}", prefix, v))),
                    None => {
                        log::trace!("no value variant for prefixed key {}", full_key);
                        out.push(Representation::Warning(full_key));
                    }
                }
            }
            out
        }
    }
}
