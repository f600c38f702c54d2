use crate::config::Config;
use crate::render::render_rules;
use crate::rule::{Rule, Sheet};
use crate::scope::ScopeStack;
use crate::selector::{print_selector, Selector};

/// Comment appended to the output when [`Config::banner`] is set.
pub const BANNER: &str = "/* Generated with BlazeCSS */";

pub mod blaze_css {
    use super::*;
    use rayon::prelude::*;

    /// Renders a rule tree under an initial scope, plus the banner if enabled.
    pub fn render(cfg: &Config, scope: &ScopeStack, rules: &[Rule]) -> String {
        let mut css = render_rules(cfg, scope, rules);
        if cfg.banner {
            css.push_str(BANNER);
            css.push_str(&cfg.newline);
        }
        css
    }

    pub fn render_sheet(cfg: &Config, sheet: &Sheet) -> String {
        render(cfg, &sheet.scope, &sheet.rules)
    }

    /// Renders independent sheets in parallel. Output order follows input order.
    pub fn render_batch(cfg: &Config, sheets: &[Sheet]) -> Vec<String> {
        log::info!("rendering {} sheets", sheets.len());
        sheets
            .par_iter()
            .map(|sheet| render_sheet(cfg, sheet))
            .collect()
    }

    /// Bare selector text, always in the compact style. Meant for diagnostics.
    pub fn render_selector(selector: &Selector) -> String {
        print_selector(&Config::compact(), selector)
    }
}
