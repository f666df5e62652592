//! Scriptlet and redirect rule conversion across filter-list dialects.
//!
//! Content blockers share one catalogue of in-page behaviours ("scriptlets")
//! and substitute resources ("redirects"), but each of the three major
//! filter-list dialects calls them differently:
//!
//! ```text
//! AdGuard       example.org#%#//scriptlet('set-constant', 'ads', 'false')
//! uBlock Origin example.org##+js(set-constant, ads, false)
//! Adblock Plus  example.org#$#override-property-read ads false
//! ```
//!
//! This crate recognises which dialect a line uses, tokenizes it under that
//! dialect's quoting rules, resolves names through a read-only [`Registry`]
//! and re-emits an equivalent rule in another dialect.
//!
//! ```
//! use rulecast::{Dialect, convert_scriptlet_rule};
//!
//! let out = convert_scriptlet_rule("example.org##+js(set-constant.js, test, false)", Dialect::Adg).unwrap();
//! assert_eq!(out, vec!["example.org#%#//scriptlet('ubo-set-constant.js', 'test', 'false')"]);
//! ```

#[macro_use]
mod macros;
mod api;
mod engine;
mod error;
mod registry;

pub use api::{
    Converter, Options, classify, convert_list, convert_redirect_rule, convert_rule, convert_scriptlet_rule,
    is_convertible, is_redirect_rule, is_valid_rule, parse_call, parse_redirect_rule, parse_rule,
    resolve_canonical_name,
};
pub use engine::{BatchReport, LineOutcome, LineStatus, RedirectMarker, RedirectRule, RunMetrics};
pub use error::{Error, Result, UnknownDialect, Unsupported};
pub use registry::{AliasTable, ContentTypes, Registry, ResourceKind, ResourceRecord, Resolved};

// --- Core types -------------------------------------------------------------

/// A filter-list dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dialect {
    /// AdGuard: `#%#//scriptlet('name', 'arg')`.
    Adg,
    /// uBlock Origin: `##+js(name, arg)`.
    Ubo,
    /// Adblock Plus: `#$#name arg; name2 arg`.
    Abp,
}

impl Dialect {
    pub const ALL: [Dialect; 3] = [Dialect::Adg, Dialect::Ubo, Dialect::Abp];

    pub(crate) fn index(self) -> usize {
        match self {
            Dialect::Adg => 0,
            Dialect::Ubo => 1,
            Dialect::Abp => 2,
        }
    }

    /// Short identifier (`adg`, `ubo`, `abp`).
    pub fn id(self) -> &'static str {
        match self {
            Dialect::Adg => "adg",
            Dialect::Ubo => "ubo",
            Dialect::Abp => "abp",
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Dialect::Adg => "AdGuard",
            Dialect::Ubo => "uBlock Origin",
            Dialect::Abp => "Adblock Plus",
        })
    }
}

impl std::str::FromStr for Dialect {
    type Err = UnknownDialect;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "adg" | "adguard" => Ok(Dialect::Adg),
            "ubo" | "ublock" | "ublock-origin" => Ok(Dialect::Ubo),
            "abp" | "adblock-plus" | "adblockplus" => Ok(Dialect::Abp),
            _ => Err(UnknownDialect(s.to_string())),
        }
    }
}

/// A scriptlet call with every dialect escape resolved.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedCall {
    pub name: String,
    pub args: Vec<String>,
}

impl ParsedCall {
    pub fn new(name: impl Into<String>, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        ParsedCall { name: name.into(), args: args.into_iter().map(Into::into).collect() }
    }

    /// `true` for the argument-less call of a generic exception
    /// (`#@#+js()`), which disables every scriptlet on the matched domains.
    pub fn is_generic(&self) -> bool {
        self.name.is_empty() && self.args.is_empty()
    }
}

/// One parsed scriptlet line.
///
/// `domains` is everything before the dialect marker and is carried through
/// conversion untouched. `calls` holds a single call except for Adblock Plus
/// lines that chain several snippets with `;`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptletRule {
    pub dialect: Dialect,
    pub domains: String,
    pub exception: bool,
    pub calls: Vec<ParsedCall>,
}
