//! Rule validation without producing output.

use super::convert::{convert_rule, parse_rule};
use super::redirect::{has_redirect_marker, parse_redirect_rule};
use crate::{Dialect, Registry};

/// Whether `text` is a scriptlet or redirect rule whose names all resolve.
///
/// A generic exception (`#@#+js()`) is valid; every statement of an ABP
/// chain must resolve.
pub(crate) fn is_valid_rule(registry: &Registry, text: &str) -> bool {
    let text = text.trim();
    match parse_rule(registry, text) {
        Ok(rule) => rule
            .calls
            .iter()
            .all(|call| call.is_generic() || registry.scriptlets().lookup(rule.dialect, &call.name).is_some()),
        Err(_) if has_redirect_marker(text) => parse_redirect_rule(registry, text).is_ok(),
        Err(err) => {
            log::debug!("[validate] {text:?}: {err}");
            false
        }
    }
}

/// Whether `text` is a rule that converts into `target` without error.
/// Unrelated lines are not convertible.
pub(crate) fn is_convertible(registry: &Registry, text: &str, target: Dialect) -> bool {
    is_valid_rule(registry, text) && convert_rule(registry, text, target).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reg() -> &'static Registry {
        Registry::builtin()
    }

    #[test]
    fn known_names_are_valid() {
        assert!(is_valid_rule(reg(), "example.org#%#//scriptlet('abort-on-property-read', 'alert')"));
        assert!(is_valid_rule(reg(), "example.org##+js(aopr, alert)"));
        assert!(is_valid_rule(reg(), "example.org#@#+js()"));
        assert!(is_valid_rule(reg(), "||example.com^$script,redirect=noopjs"));
    }

    #[test]
    fn every_abp_statement_must_resolve() {
        assert!(is_valid_rule(reg(), "example.org#$#log 1; abort-on-property-read alert"));
        assert!(!is_valid_rule(reg(), "example.org#$#log 1; no-such-snippet alert"));
    }

    #[test]
    fn unrelated_and_broken_lines_are_invalid() {
        assert!(!is_valid_rule(reg(), "! example.org##+js(aopr, alert)"));
        assert!(!is_valid_rule(reg(), "example.org##.banner"));
        assert!(!is_valid_rule(reg(), "example.org#%#//scriptlet('abc)"));
        assert!(!is_valid_rule(reg(), "||example.com^$redirect=no-such-thing"));
    }

    #[test]
    fn convertibility_depends_on_target() {
        let rule = "example.org#%#//scriptlet('log', 'a')";
        assert!(is_convertible(reg(), rule, Dialect::Abp));
        assert!(!is_convertible(reg(), rule, Dialect::Ubo));
        assert!(!is_convertible(reg(), "example.org##.banner", Dialect::Ubo));
    }
}
