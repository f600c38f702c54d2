//! The rule tree consumed by the renderer.

use crate::property::{Key, Modifier, Value};
use crate::scope::{ScopeOp, ScopeStack};
use serde::{Deserialize, Serialize};

/// One node of a stylesheet. Siblings are kept in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Rule {
    Property {
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        modifiers: Vec<Modifier>,
        key: Key,
        value: Value,
    },
    Nested(ScopeOp, Vec<Rule>),
    Query(MediaQuery, Vec<Rule>),
    Keyframes(Keyframes),
    FontFace(Vec<Rule>),
    Import(String),
}

impl Rule {
    /// A plain `key: value` declaration without modifiers.
    pub fn property(key: impl Into<String>, value: impl Into<String>) -> Self {
        Rule::Property {
            modifiers: Vec::new(),
            key: Key::plain(key),
            value: Value::plain(value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Negation {
    Not,
    Only,
}

/// `(name: value)`, or `(name)` for boolean features.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub name: String,
    #[serde(default)]
    pub value: Option<String>,
}

impl Feature {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Feature {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    pub fn flag(name: impl Into<String>) -> Self {
        Feature {
            name: name.into(),
            value: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaQuery {
    #[serde(default)]
    pub negation: Option<Negation>,
    pub media_type: String,
    #[serde(default)]
    pub features: Vec<Feature>,
}

impl MediaQuery {
    pub fn new(media_type: impl Into<String>) -> Self {
        MediaQuery {
            negation: None,
            media_type: media_type.into(),
            features: Vec::new(),
        }
    }

    pub fn with_feature(mut self, feature: Feature) -> Self {
        self.features.push(feature);
        self
    }
}

/// A single `<percentage>% { .. }` step of an animation. Percentages outside
/// `0..=100` are clamped when printed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub percentage: f64,
    pub rules: Vec<Rule>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyframes {
    pub name: String,
    pub frames: Vec<Frame>,
}

/// A rule tree together with the scope it is rendered under.
///
/// This is the unit the batch renderer and the command line tool work on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sheet {
    #[serde(default)]
    pub scope: ScopeStack,
    pub rules: Vec<Rule>,
}

impl Sheet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Sheet {
            scope: ScopeStack::new(),
            rules,
        }
    }

    /// Decodes a sheet from its JSON form.
    pub fn from_json(text: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}
