use crate::engine;
use crate::{BatchReport, Dialect, ParsedCall, RedirectRule, Registry, Result, ScriptletRule};

/// Options for [`convert_list`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Dialect every rule is converted into.
    pub target: Dialect,
    /// Keep comments, blank lines and unrelated rules in the output.
    pub passthrough: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options { target: Dialect::Adg, passthrough: true }
    }
}

impl Options {
    pub fn to(target: Dialect) -> Self {
        Options { target, ..Options::default() }
    }
}

/// Conversion entry points bound to one [`Registry`].
///
/// The free functions of this module use [`Registry::builtin`]; build a
/// `Converter` over your own registry to convert against externally loaded
/// resource metadata.
///
/// ```
/// use rulecast::{Converter, Dialect, Registry, ResourceRecord};
///
/// let registry = Registry::new(
///     [ResourceRecord::new("hide-ads").with_ubo(["hide-ads.js"])],
///     [],
/// )
/// .unwrap();
/// let converter = Converter::new(&registry);
/// let out = converter.convert_scriptlet_rule("example.org##+js(hide-ads)", Dialect::Adg).unwrap();
/// assert_eq!(out, vec!["example.org#%#//scriptlet('ubo-hide-ads.js')"]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Converter<'r> {
    registry: &'r Registry,
}

impl Converter<'static> {
    pub fn builtin() -> Self {
        Converter { registry: Registry::builtin() }
    }
}

impl Default for Converter<'static> {
    fn default() -> Self {
        Converter::builtin()
    }
}

impl<'r> Converter<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Converter { registry }
    }

    pub fn registry(&self) -> &'r Registry {
        self.registry
    }

    pub fn parse_rule(&self, text: &str) -> Result<ScriptletRule> {
        engine::parse_rule(self.registry, text)
    }

    pub fn parse_call(&self, text: &str) -> Result<ParsedCall> {
        engine::parse_call(self.registry, text)
    }

    pub fn is_valid_rule(&self, text: &str) -> bool {
        engine::is_valid_rule(self.registry, text)
    }

    pub fn is_convertible(&self, text: &str, target: Dialect) -> bool {
        engine::is_convertible(self.registry, text, target)
    }

    pub fn convert_scriptlet_rule(&self, text: &str, target: Dialect) -> Result<Vec<String>> {
        engine::convert_scriptlet_rule(self.registry, text, target)
    }

    /// A redirect line whose resource resolves in this registry.
    pub fn is_redirect_rule(&self, text: &str) -> bool {
        engine::has_redirect_marker(text) && engine::parse_redirect_rule(self.registry, text).is_ok()
    }

    pub fn parse_redirect_rule(&self, text: &str) -> Result<RedirectRule> {
        engine::parse_redirect_rule(self.registry, text)
    }

    pub fn convert_redirect_rule(&self, text: &str, target: Dialect) -> Result<String> {
        engine::convert_redirect_rule(self.registry, text, target)
    }

    pub fn convert_rule(&self, text: &str, target: Dialect) -> Result<Vec<String>> {
        engine::convert_rule(self.registry, text, target)
    }

    pub fn convert_list(&self, text: &str, options: &Options) -> BatchReport {
        engine::convert_list(self.registry, text, options)
    }

    pub fn resolve_canonical_name(&self, raw: &str, dialect: Dialect) -> Option<&'r str> {
        self.registry.resolve_canonical_name(raw, dialect)
    }
}

/// Dialect of a scriptlet rule; `None` for comments and unrelated lines.
pub fn classify(text: &str) -> Option<Dialect> {
    engine::classify(text.trim())
}

/// Parse a line holding exactly one scriptlet call.
///
/// ```
/// use rulecast::{ParsedCall, parse_call};
///
/// let call = parse_call("example.org#%#//scriptlet('abort-on-property-read', 'alert')").unwrap();
/// assert_eq!(call, ParsedCall::new("abort-on-property-read", ["alert"]));
/// ```
pub fn parse_call(text: &str) -> Result<ParsedCall> {
    Converter::builtin().parse_call(text)
}

pub fn parse_rule(text: &str) -> Result<ScriptletRule> {
    Converter::builtin().parse_rule(text)
}

pub fn is_valid_rule(text: &str) -> bool {
    Converter::builtin().is_valid_rule(text)
}

pub fn is_convertible(text: &str, target: Dialect) -> bool {
    Converter::builtin().is_convertible(text, target)
}

pub fn convert_scriptlet_rule(text: &str, target: Dialect) -> Result<Vec<String>> {
    Converter::builtin().convert_scriptlet_rule(text, target)
}

pub fn is_redirect_rule(text: &str) -> bool {
    Converter::builtin().is_redirect_rule(text)
}

pub fn parse_redirect_rule(text: &str) -> Result<RedirectRule> {
    Converter::builtin().parse_redirect_rule(text)
}

pub fn convert_redirect_rule(text: &str, target: Dialect) -> Result<String> {
    Converter::builtin().convert_redirect_rule(text, target)
}

/// Convert any line; unrelated lines come back unchanged.
pub fn convert_rule(text: &str, target: Dialect) -> Result<Vec<String>> {
    Converter::builtin().convert_rule(text, target)
}

/// Convert a whole filter list, one outcome per line.
pub fn convert_list(text: &str, options: &Options) -> BatchReport {
    Converter::builtin().convert_list(text, options)
}

/// Canonical name of a scriptlet or redirect resource spelled `raw` in
/// `dialect`.
pub fn resolve_canonical_name(raw: &str, dialect: Dialect) -> Option<&'static str> {
    Converter::builtin().resolve_canonical_name(raw, dialect)
}
