//! # blazecss-lib
//!
//! Renders an in-memory stylesheet tree (nested blocks, scope operations,
//! media queries, keyframes, font faces and vendor-prefixed declarations)
//! into CSS text.
//!
//! ```
//! use blazecss_lib::{render, Config, Rule, ScopeOp, ScopeStack, Selector};
//!
//! let rules = vec![Rule::Nested(
//!     ScopeOp::ChildOf(Selector::element("div")),
//!     vec![Rule::property("color", "red")],
//! )];
//! let css = render(&Config::compact(), &ScopeStack::new(), &rules);
//! assert_eq!(css, "div{color:red}");
//! ```

pub mod blaze_generate;
pub mod config;
pub mod error;
pub mod property;
pub mod render;
pub mod rule;
pub mod scope;
pub mod selector;
pub mod validate;
pub mod vendor;

pub use blaze_generate::blaze_css::{render, render_batch, render_selector, render_sheet};
pub use config::Config;
pub use error::{Error, Result};
pub use property::{Key, Modifier, Prefixable, Representation, Value};
pub use rule::{Feature, Frame, Keyframes, MediaQuery, Negation, Rule, Sheet};
pub use scope::{ScopeOp, ScopeStack};
pub use selector::{Predicate, Refinement, Selector, Shape};
