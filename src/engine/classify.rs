//! Dialect classification.
//!
//! Markers of different dialects can co-occur by accident inside one line (a
//! selector or an argument may contain `#$#`), so classification checks the
//! dialects in a fixed order and stops at the first hit:
//!
//! ```text
//! comment? ── yes ──> None
//!    │ no
//!    ├─ contains #%#//scriptlet / #@%#//scriptlet ──────────> Adg
//!    ├─ contains ##+js / ##script:inject (or #@# forms)
//!    │    and the marker is followed by a call `(` ─────────> Ubo
//!    └─ contains #$# / #@$# and is not `selector { style }` ─> Abp
//! ```

use crate::Dialect;

pub(crate) const COMMENT_MARKER: char = '!';

pub(crate) const ADG_MASK: &str = "#%#//scriptlet";
pub(crate) const ADG_EXCEPTION_MASK: &str = "#@%#//scriptlet";

const UBO_MASKS: &[&str] = &["##+js", "#@#+js", "##script:inject", "#@#script:inject"];

pub(crate) const ABP_MASK: &str = "#$#";
pub(crate) const ABP_EXCEPTION_MASK: &str = "#@$#";

/// A line whose first character is `!`.
pub(crate) fn is_comment(rule: &str) -> bool {
    rule.starts_with(COMMENT_MARKER)
}

pub(crate) fn is_adg(rule: &str) -> bool {
    !is_comment(rule) && (rule.contains(ADG_MASK) || rule.contains(ADG_EXCEPTION_MASK))
}

pub(crate) fn is_ubo(rule: &str) -> bool {
    !is_comment(rule)
        && UBO_MASKS.iter().any(|mask| rule.contains(mask))
        && regex!(r"#@?#\s*(?:\+js|script:inject)\(").is_match(rule)
}

pub(crate) fn is_abp(rule: &str) -> bool {
    // `#$#` also introduces style injection (`#$#.ad { display: none }`).
    !is_comment(rule)
        && (rule.contains(ABP_MASK) || rule.contains(ABP_EXCEPTION_MASK))
        && !regex!(r"#@?\$#.+?\s*\{.*\}\s*$").is_match(rule)
}

/// Dialect of a scriptlet rule, or `None` for comments and unrelated lines.
pub(crate) fn classify(rule: &str) -> Option<Dialect> {
    let dialect = if is_adg(rule) {
        Some(Dialect::Adg)
    } else if is_ubo(rule) {
        Some(Dialect::Ubo)
    } else if is_abp(rule) {
        Some(Dialect::Abp)
    } else {
        None
    };

    log::trace!("[classify] {:?} <- {rule:?}", dialect);
    dialect
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_each_dialect() {
        assert_eq!(classify("example.org#%#//scriptlet('abort-on-property-read', 'alert')"), Some(Dialect::Adg));
        assert_eq!(classify("example.org#@%#//scriptlet('log')"), Some(Dialect::Adg));
        assert_eq!(classify("example.org##+js(aopr, alert)"), Some(Dialect::Ubo));
        assert_eq!(classify("example.org#@#+js(aopr, alert)"), Some(Dialect::Ubo));
        assert_eq!(classify("example.org##script:inject(aopr.js, alert)"), Some(Dialect::Ubo));
        assert_eq!(classify("example.org#$#abort-on-property-read alert"), Some(Dialect::Abp));
        assert_eq!(classify("example.org#@$#log 1"), Some(Dialect::Abp));
    }

    #[test]
    fn comments_are_never_rules() {
        assert_eq!(classify("! example.org#%#//scriptlet('log')"), None);
        assert_eq!(classify("!example.org##+js(aopr, alert)"), None);
    }

    #[test]
    fn style_injection_is_not_abp_snippet() {
        assert_eq!(classify("example.org#$#body { background: red; }"), None);
        assert_eq!(classify("example.org#@$#.ad { display: none !important; }"), None);
    }

    #[test]
    fn ubo_marker_needs_a_call() {
        assert_eq!(classify("example.org##+jsfoo"), None);
        assert_eq!(classify("example.org##.banner"), None);
        assert_eq!(classify("||example.org^$script"), None);
    }

    #[test]
    fn adg_wins_over_incidental_markers() {
        assert_eq!(classify("example.org#%#//scriptlet('log', '#$#')"), Some(Dialect::Adg));
        assert_eq!(classify("example.org##+js(log, #$#)"), Some(Dialect::Ubo));
    }
}
