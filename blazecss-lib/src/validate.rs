//! Sanity check for rendered output, backed by LightningCSS.

use crate::error::{Error, Result};
use lightningcss::rules::CssRule;
use lightningcss::stylesheet::{ParserOptions, StyleSheet as LightningStyleSheet};

/// Count of top-level rules by kind in a parsed stylesheet.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RuleSummary {
    pub style: usize,
    pub media: usize,
    pub keyframes: usize,
    pub font_face: usize,
    pub import: usize,
    pub other: usize,
}

impl RuleSummary {
    pub fn total(&self) -> usize {
        self.style + self.media + self.keyframes + self.font_face + self.import + self.other
    }
}

/// Parses `css` and tallies its top-level rules.
///
/// Only full stylesheets can be checked; inline output has no rules to parse.
pub fn check(css: &str) -> Result<RuleSummary> {
    let sheet = LightningStyleSheet::parse(css, ParserOptions::default())
        .map_err(|e| Error::Invalid(e.to_string()))?;

    let mut summary = RuleSummary::default();
    for rule in &sheet.rules.0 {
        match rule {
            CssRule::Style(_) => summary.style += 1,
            CssRule::Media(_) => summary.media += 1,
            CssRule::Keyframes(_) => summary.keyframes += 1,
            CssRule::FontFace(_) => summary.font_face += 1,
            CssRule::Import(_) => summary.import += 1,
            _ => summary.other += 1,
        }
    }
    log::debug!("checked stylesheet: {:?}", summary);
    Ok(summary)
}
