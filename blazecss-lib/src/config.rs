//! Formatting configuration shared read-only by every renderer.

/// Knobs controlling whitespace, punctuation and diagnostics in the output.
///
/// A `Config` is built once (usually from one of the presets) and passed by
/// reference through a whole render. Nothing in the crate keeps a global copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Prefix of every declaration line.
    pub indentation: String,
    /// Line terminator; also glues selector list entries.
    pub newline: String,
    /// Goes after `key:` and between a block header and its opening brace.
    pub separator: String,
    pub lbrace: String,
    pub rbrace: String,
    /// Emit `;` after the last declaration of a block.
    pub final_semicolon: bool,
    /// Render unmatched vendor-prefix pairs as `/* no value for .. */`.
    pub warn: bool,
    /// Line up declaration values in one column.
    pub align: bool,
    /// Append the generator banner after the stylesheet.
    pub banner: bool,
    /// Keep per-declaration comments.
    pub comments: bool,
}

impl Config {
    /// Two-space indentation, newlines, aligned values and all diagnostics.
    pub fn pretty() -> Self {
        Config {
            indentation: "  ".to_string(),
            newline: "\n".to_string(),
            separator: " ".to_string(),
            lbrace: "{".to_string(),
            rbrace: "}".to_string(),
            final_semicolon: true,
            warn: true,
            align: true,
            banner: true,
            comments: true,
        }
    }

    /// Everything optional elided.
    pub fn compact() -> Self {
        Config {
            indentation: String::new(),
            newline: String::new(),
            separator: String::new(),
            lbrace: "{".to_string(),
            rbrace: "}".to_string(),
            final_semicolon: false,
            warn: false,
            align: false,
            banner: false,
            comments: false,
        }
    }

    /// Declarations only, suitable for an element's `style` attribute.
    pub fn inline() -> Self {
        Config {
            lbrace: String::new(),
            rbrace: String::new(),
            ..Config::compact()
        }
    }

    /// True when both braces are empty, i.e. selectors are meaningless.
    pub fn is_inline(&self) -> bool {
        self.lbrace.is_empty() && self.rbrace.is_empty()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::pretty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_inline_preset_drops_braces() {
        assert!(Config::inline().is_inline());
        assert!(!Config::compact().is_inline());
        assert!(!Config::pretty().is_inline());
    }

    #[test]
    fn test_compact_elides_whitespace() {
        let cfg = Config::compact();
        assert!(cfg.indentation.is_empty());
        assert!(cfg.newline.is_empty());
        assert!(cfg.separator.is_empty());
        assert!(!cfg.banner && !cfg.warn && !cfg.comments && !cfg.align);
    }
}
