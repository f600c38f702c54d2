use super::{Modifier, Representation};
use crate::config::Config;

/// Renders the body of a declaration block.
///
/// Returns an empty string when nothing would be printed, which lets
/// callers drop the whole block.
pub fn print_properties(cfg: &Config, reprs: &[Representation]) -> String {
    let width = 1 + reprs
        .iter()
        .filter_map(|r| match r {
            Representation::Resolved { key, .. } => Some(key.chars().count()),
            Representation::Warning(_) => None,
        })
        .max()
        .unwrap_or(0);

    let last_resolved = reprs
        .iter()
        .rposition(|r| matches!(r, Representation::Resolved { .. }));

    let mut out = String::new();
    for (i, repr) in reprs.iter().enumerate() {
        match repr {
            Representation::Warning(key) => {
                if !cfg.warn {
                    continue;
                }
                out.push_str(&cfg.indentation);
                out.push_str("/* no value for ");
                out.push_str(key);
                out.push_str(" */");
            }
            Representation::Resolved {
                modifiers,
                key,
                value,
            } => {
                out.push_str(&cfg.indentation);
                out.push_str(key);
                out.push(':');
                if cfg.align {
                    // `key:` fills the column so values start at the same offset.
                    let used = key.chars().count() + 1;
                    out.extend(std::iter::repeat(' ').take(width - used));
                }
                out.push_str(&cfg.separator);
                out.push_str(value);
                if modifiers.iter().any(|m| matches!(m, Modifier::Important)) {
                    out.push_str(" !important");
                }
                if cfg.comments {
                    let notes: Vec<&str> = modifiers
                        .iter()
                        .filter_map(|m| match m {
                            Modifier::Comment(text) => Some(text.as_str()),
                            Modifier::Important => None,
                        })
                        .collect();
                    if !notes.is_empty() {
                        out.push_str(" /* ");
                        out.push_str(&notes.join(" "));
                        out.push_str(" */");
                    }
                }
                if Some(i) != last_resolved || cfg.final_semicolon {
                    out.push(';');
                }
            }
        }
        out.push_str(&cfg.newline);
    }
    out
}
