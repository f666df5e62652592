//! Argument transcoding.
//!
//! Almost every scriptlet takes the same arguments in every dialect; only the
//! name changes. The exceptions are listed in [`REWRITES`], keyed by canonical
//! name, source dialect (or any) and target dialect. Anything not listed is
//! copied as is.

use crate::Dialect;

/// uBO has no standalone wildcard for `no-fetch-if`; this matches every URL.
pub(crate) const MATCH_ALL_PATTERN: &str = "/^/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Rewrite {
    /// AdGuard's `emptyStr`/`emptyArr`/`emptyObj` keywords and a bare empty
    /// value become uBO literals. A zero-length uBO token means "no argument",
    /// so the empty string must be spelled `''`.
    EmptyValueLiterals { position: usize },
    /// `*` or an empty (or missing) pattern means "match everything".
    MatchAllPattern { position: usize },
}

#[derive(Debug)]
pub(crate) struct TranscodeRule {
    pub name: &'static str,
    /// `None` applies to every source dialect.
    pub from: Option<Dialect>,
    pub to: Dialect,
    pub rewrite: Rewrite,
}

pub(crate) static REWRITES: &[TranscodeRule] = &[
    TranscodeRule {
        name: "set-constant",
        from: None,
        to: Dialect::Ubo,
        rewrite: Rewrite::EmptyValueLiterals { position: 1 },
    },
    TranscodeRule {
        name: "prevent-fetch",
        from: None,
        to: Dialect::Ubo,
        rewrite: Rewrite::MatchAllPattern { position: 0 },
    },
];

impl Rewrite {
    fn apply(self, args: &mut Vec<String>) {
        match self {
            Rewrite::EmptyValueLiterals { position } => {
                if let Some(value) = args.get_mut(position) {
                    let literal = match value.as_str() {
                        "" | "emptyStr" => Some("''"),
                        "emptyArr" => Some("[]"),
                        "emptyObj" => Some("{}"),
                        _ => None,
                    };
                    if let Some(literal) = literal {
                        *value = literal.to_string();
                    }
                }
            }
            Rewrite::MatchAllPattern { position } => {
                let len = args.len();
                match args.get_mut(position) {
                    Some(pattern) if pattern.is_empty() || pattern == "*" => *pattern = MATCH_ALL_PATTERN.to_string(),
                    Some(_) => {}
                    None if len == position => args.push(MATCH_ALL_PATTERN.to_string()),
                    None => {}
                }
            }
        }
    }
}

/// Rewrite `args` of the scriptlet `canonical` for `to`.
pub(crate) fn transcode(canonical: &str, from: Dialect, to: Dialect, args: &[String]) -> Vec<String> {
    let mut out = args.to_vec();
    for rule in REWRITES
        .iter()
        .filter(|r| r.name == canonical && r.to == to && r.from.is_none_or(|f| f == from))
    {
        log::debug!("[transcode] {canonical}: {:?} for {from:?} -> {to:?}", rule.rewrite);
        rule.rewrite.apply(&mut out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_value_becomes_explicit_quotes_for_ubo() {
        let out = transcode("set-constant", Dialect::Adg, Dialect::Ubo, &strings(&["ads", ""]));
        assert_eq!(out, strings(&["ads", "''"]));

        let out = transcode("set-constant", Dialect::Adg, Dialect::Ubo, &strings(&["ads", "emptyObj"]));
        assert_eq!(out, strings(&["ads", "{}"]));
    }

    #[test]
    fn empty_value_is_left_alone_for_adg() {
        let out = transcode("set-constant", Dialect::Ubo, Dialect::Adg, &strings(&["ads", ""]));
        assert_eq!(out, strings(&["ads", ""]));
    }

    #[test]
    fn wildcard_fetch_pattern_becomes_match_all_regex() {
        assert_eq!(transcode("prevent-fetch", Dialect::Adg, Dialect::Ubo, &strings(&["*"])), strings(&["/^/"]));
        assert_eq!(transcode("prevent-fetch", Dialect::Adg, Dialect::Ubo, &strings(&[""])), strings(&["/^/"]));
        assert_eq!(transcode("prevent-fetch", Dialect::Adg, Dialect::Ubo, &[]), strings(&["/^/"]));
        assert_eq!(
            transcode("prevent-fetch", Dialect::Adg, Dialect::Ubo, &strings(&["ads.js"])),
            strings(&["ads.js"])
        );
    }

    #[test]
    fn unlisted_scriptlets_pass_through() {
        let args = strings(&["", "*"]);
        assert_eq!(transcode("abort-on-property-read", Dialect::Adg, Dialect::Ubo, &args), args);
    }
}
