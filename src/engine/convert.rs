//! The scriptlet pipeline and batch conversion.
//!
//! `parse_rule` turns one line into a [`ScriptletRule`]; `convert_scriptlet_rule`
//! runs it through the registry, the transcoder and the renderer. `convert_rule`
//! dispatches between scriptlets, redirects and unrelated lines, and
//! `convert_list` applies it to every line of a filter list.

use super::classify::{ABP_EXCEPTION_MASK, ABP_MASK, ADG_EXCEPTION_MASK, ADG_MASK, classify};
use super::metrics::RunMetrics;
use super::redirect::{convert_redirect_rule, has_redirect_marker};
use super::render::{render_call, render_calls, ubo_representable};
use super::tokenizer::{rejoin_selector, split_snippets, split_ubo_args, tokenize_call};
use super::transcode::transcode;
use crate::registry::{ABP_PREFIX, JS_SUFFIX, Resolved, UBO_PREFIX};
use crate::{Dialect, Error, Options, ParsedCall, Registry, ResourceKind, Result, ScriptletRule, Unsupported};
use std::time::Instant;

/// uBO scriptlets whose selector argument may itself contain commas.
const SELECTOR_SCRIPTLETS: &[&str] = &["remove-attr", "remove-class"];

// --- Parsing -----------------------------------------------------------------

/// Parse a scriptlet line in whichever dialect it is written.
pub(crate) fn parse_rule(registry: &Registry, text: &str) -> Result<ScriptletRule> {
    let text = text.trim();
    let dialect = classify(text).ok_or(Error::AmbiguousDialect)?;
    let rule = match dialect {
        Dialect::Adg => parse_adg(text)?,
        Dialect::Ubo => parse_ubo(registry, text)?,
        Dialect::Abp => parse_abp(text)?,
    };
    log::debug!("[parse] {dialect:?} {text:?} -> {:?}", rule.calls);
    Ok(rule)
}

/// Parse a line that holds exactly one call.
///
/// ABP lines chaining several snippets are rejected; use `parse_rule` for
/// those.
pub(crate) fn parse_call(registry: &Registry, text: &str) -> Result<ParsedCall> {
    let rule = parse_rule(registry, text)?;
    let count = rule.calls.len();
    let mut calls = rule.calls.into_iter();
    match (calls.next(), count) {
        (Some(call), 1) => Ok(call),
        _ => Err(Error::parse(rule.dialect, format!("expected one call, found {count}"))),
    }
}

/// Split `text` around the first of `exception_mask` or `mask`.
fn split_marker<'a>(text: &'a str, mask: &str, exception_mask: &str) -> Option<(&'a str, bool, &'a str)> {
    if let Some(pos) = text.find(exception_mask) {
        return Some((&text[..pos], true, &text[pos + exception_mask.len()..]));
    }
    text.find(mask).map(|pos| (&text[..pos], false, &text[pos + mask.len()..]))
}

/// Name and arguments from a token list whose first element is the name.
/// An empty list is the generic call, allowed on exceptions only.
fn call_from_tokens(dialect: Dialect, exception: bool, mut tokens: Vec<String>) -> Result<ParsedCall> {
    if tokens.is_empty() {
        if exception {
            return Ok(ParsedCall::default());
        }
        return Err(Error::parse(dialect, "empty scriptlet call"));
    }
    let args = tokens.split_off(1);
    let name = tokens.pop().unwrap_or_default();
    if name.is_empty() {
        return Err(Error::parse(dialect, "empty scriptlet name"));
    }
    Ok(ParsedCall { name, args })
}

fn parse_adg(text: &str) -> Result<ScriptletRule> {
    let (domains, exception, rest) =
        split_marker(text, ADG_MASK, ADG_EXCEPTION_MASK).ok_or(Error::AmbiguousDialect)?;
    let call = call_from_tokens(Dialect::Adg, exception, tokenize_call(rest)?)?;
    Ok(ScriptletRule { dialect: Dialect::Adg, domains: domains.to_string(), exception, calls: vec![call] })
}

fn parse_ubo(registry: &Registry, text: &str) -> Result<ScriptletRule> {
    let caps = regex!(r"^(?P<domains>.*?)#(?P<exc>@?)#\s*(?:\+js|script:inject)\((?P<body>.*)\)\s*$")
        .captures(text)
        .ok_or_else(|| Error::parse(Dialect::Ubo, "missing closing ')'"))?;
    let exception = !caps["exc"].is_empty();

    let mut call = call_from_tokens(Dialect::Ubo, exception, split_ubo_args(&caps["body"]))?;
    let canonical = registry.scriptlets().resolve(Dialect::Ubo, &call.name);
    if canonical.is_some_and(|c| SELECTOR_SCRIPTLETS.contains(&c)) {
        call.args = rejoin_selector(std::mem::take(&mut call.args));
    }

    Ok(ScriptletRule { dialect: Dialect::Ubo, domains: caps["domains"].to_string(), exception, calls: vec![call] })
}

fn parse_abp(text: &str) -> Result<ScriptletRule> {
    let (domains, exception, body) =
        split_marker(text, ABP_MASK, ABP_EXCEPTION_MASK).ok_or(Error::AmbiguousDialect)?;
    let statements = split_snippets(body)?;
    if statements.is_empty() {
        return Err(Error::parse(Dialect::Abp, "empty snippet"));
    }
    let calls = statements
        .into_iter()
        .map(|words| call_from_tokens(Dialect::Abp, false, words))
        .collect::<Result<Vec<_>>>()?;
    Ok(ScriptletRule { dialect: Dialect::Abp, domains: domains.to_string(), exception, calls })
}

// --- Conversion --------------------------------------------------------------

/// Spelling of a resolved scriptlet in `target`.
fn target_name(
    registry: &Registry,
    from: Dialect,
    target: Dialect,
    call: &ParsedCall,
    hit: Resolved<'_>,
) -> Result<String> {
    let canonical = hit.record.name.as_str();
    let name = match (target, from) {
        (Dialect::Adg, Dialect::Adg) => Some(call.name.clone()),
        (Dialect::Adg, Dialect::Ubo) => Some(format!("{UBO_PREFIX}{}", hit.alias)),
        (Dialect::Adg, Dialect::Abp) => Some(format!("{ABP_PREFIX}{}", hit.alias)),
        (Dialect::Ubo, _) => registry
            .scriptlets()
            .reverse_resolve(canonical, Dialect::Ubo)
            .map(|alias| alias.strip_suffix(JS_SUFFIX).unwrap_or(alias).to_string()),
        (Dialect::Abp, _) => registry.scriptlets().reverse_resolve(canonical, Dialect::Abp).map(str::to_string),
    };
    name.ok_or_else(|| Error::UnsupportedConversion {
        kind: ResourceKind::Scriptlet,
        name: canonical.to_string(),
        target,
        reason: Unsupported::NoAlias,
    })
}

/// Checked before transcoding: the uBO literals the transcoder emits (`''`)
/// are quoted on purpose.
fn ubo_args_representable(args: &[String]) -> bool {
    args.iter().enumerate().all(|(i, arg)| ubo_representable(arg, i + 1 == args.len()))
}

/// Convert a scriptlet line into `target`.
///
/// Returns one rule for every call, except that an ABP target keeps chained
/// calls together on one line.
pub(crate) fn convert_scriptlet_rule(registry: &Registry, text: &str, target: Dialect) -> Result<Vec<String>> {
    let rule = parse_rule(registry, text)?;
    let domains = rule.domains.as_str();

    if rule.calls.iter().any(ParsedCall::is_generic) {
        if target == Dialect::Abp || rule.dialect == Dialect::Abp {
            return Err(Error::UnsupportedConversion {
                kind: ResourceKind::Scriptlet,
                name: String::new(),
                target,
                reason: Unsupported::GenericException,
            });
        }
        return Ok(vec![render_call(target, domains, true, &ParsedCall::default())]);
    }

    let table = registry.scriptlets();
    let mut converted = Vec::with_capacity(rule.calls.len());
    for call in &rule.calls {
        let hit = table.lookup(rule.dialect, &call.name).ok_or_else(|| Error::UnknownName {
            kind: ResourceKind::Scriptlet,
            name: call.name.clone(),
            dialect: rule.dialect,
        })?;
        let name = target_name(registry, rule.dialect, target, call, hit)?;
        log::debug!("[convert] {:?} {} -> {target:?} {name}", rule.dialect, call.name);
        if target == Dialect::Ubo && !ubo_args_representable(&call.args) {
            return Err(Error::UnsupportedConversion {
                kind: ResourceKind::Scriptlet,
                name: hit.record.name.clone(),
                target,
                reason: Unsupported::UnrepresentableArgument,
            });
        }
        let args = transcode(&hit.record.name, rule.dialect, target, &call.args);
        converted.push(ParsedCall { name, args });
    }

    Ok(match target {
        Dialect::Abp => vec![render_calls(target, domains, rule.exception, &converted)],
        _ => converted.iter().map(|call| render_call(target, domains, rule.exception, call)).collect(),
    })
}

/// Convert any filter-list line. Lines that are neither scriptlet nor
/// redirect rules come back unchanged.
pub(crate) fn convert_rule(registry: &Registry, text: &str, target: Dialect) -> Result<Vec<String>> {
    if classify(text.trim()).is_some() {
        convert_scriptlet_rule(registry, text, target)
    } else if has_redirect_marker(text.trim()) {
        convert_redirect_rule(registry, text.trim(), target).map(|rule| vec![rule])
    } else {
        Ok(vec![text.to_string()])
    }
}

// --- Batch -------------------------------------------------------------------

/// What happened to one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineStatus {
    Converted(Vec<String>),
    /// Comment, blank or unrelated line.
    Passthrough,
    Failed(Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineOutcome {
    /// 1-based line number.
    pub line: usize,
    pub input: String,
    pub status: LineStatus,
}

/// Result of [`convert_list`].
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub outcomes: Vec<LineOutcome>,
    /// Converted rules, plus passthrough lines when requested, in input
    /// order. Failed lines are left out.
    pub output: Vec<String>,
    pub metrics: RunMetrics,
}

impl BatchReport {
    pub fn failures(&self) -> impl Iterator<Item = &LineOutcome> {
        self.outcomes.iter().filter(|o| matches!(o.status, LineStatus::Failed(_)))
    }

    pub fn has_failures(&self) -> bool {
        self.metrics.failed > 0
    }
}

/// Convert every line of `text`. A failing line is recorded and skipped; it
/// never stops the batch.
pub(crate) fn convert_list(registry: &Registry, text: &str, options: &Options) -> BatchReport {
    let start = Instant::now();
    let mut report = BatchReport::default();

    for (i, input) in text.lines().enumerate() {
        let line = input.trim();
        let metrics = &mut report.metrics;
        metrics.lines += 1;

        let status = if let Some(dialect) = classify(line) {
            metrics.record_scriptlet(dialect);
            convert_scriptlet_rule(registry, line, options.target)
        } else if has_redirect_marker(line) {
            metrics.redirects += 1;
            convert_redirect_rule(registry, line, options.target).map(|rule| vec![rule])
        } else {
            Err(Error::AmbiguousDialect)
        };

        let status = match status {
            Ok(rules) => {
                metrics.converted += 1;
                metrics.emitted += rules.len();
                report.output.extend(rules.iter().cloned());
                LineStatus::Converted(rules)
            }
            Err(Error::AmbiguousDialect) => {
                metrics.passthrough += 1;
                if options.passthrough {
                    report.output.push(input.to_string());
                }
                LineStatus::Passthrough
            }
            Err(err) => {
                log::debug!("[batch] line {}: {err}", i + 1);
                metrics.failed += 1;
                LineStatus::Failed(err)
            }
        };
        report.outcomes.push(LineOutcome { line: i + 1, input: input.to_string(), status });
    }

    report.metrics.total = start.elapsed();
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reg() -> &'static Registry {
        Registry::builtin()
    }

    fn one(text: &str, target: Dialect) -> String {
        let mut out = convert_scriptlet_rule(reg(), text, target).unwrap();
        assert_eq!(out.len(), 1, "{out:?}");
        out.remove(0)
    }

    #[test]
    fn parses_adg_call() {
        let call = parse_call(reg(), "example.org#%#//scriptlet('abort-on-property-read', 'alert')").unwrap();
        assert_eq!(call, ParsedCall::new("abort-on-property-read", ["alert"]));
    }

    #[test]
    fn unterminated_quote_is_a_parse_error() {
        let err = parse_call(reg(), "example.org#%#//scriptlet('abc)").unwrap_err();
        assert!(matches!(err, Error::Parse { dialect: Dialect::Adg, .. }));
    }

    #[test]
    fn ubo_to_adg_keeps_ubo_semantics() {
        assert_eq!(
            one("example.org##+js(set-constant.js, test, false)", Dialect::Adg),
            "example.org#%#//scriptlet('ubo-set-constant.js', 'test', 'false')"
        );
        assert_eq!(
            one("example.org##+js(aopr, alert)", Dialect::Adg),
            "example.org#%#//scriptlet('ubo-aopr.js', 'alert')"
        );
    }

    #[test]
    fn adg_to_ubo_uses_preferred_alias() {
        assert_eq!(
            one("example.org#%#//scriptlet('set-constant', 'ads', '')", Dialect::Ubo),
            "example.org##+js(set-constant, ads, '')"
        );
        assert_eq!(
            one("example.org#%#//scriptlet('ubo-aopr.js', 'alert')", Dialect::Ubo),
            "example.org##+js(abort-on-property-read, alert)"
        );
    }

    #[test]
    fn prevent_fetch_wildcard_becomes_match_all() {
        assert_eq!(
            one("example.org#%#//scriptlet('prevent-fetch', '*')", Dialect::Ubo),
            "example.org##+js(no-fetch-if, /^/)"
        );
    }

    #[test]
    fn selector_commas_survive_both_directions() {
        let ubo = one("example.org#%#//scriptlet('remove-attr', 'href', 'a.ad, a.promo')", Dialect::Ubo);
        assert_eq!(ubo, r"example.org##+js(remove-attr, href, a.ad\, a.promo)");

        let call = parse_call(reg(), "example.org##+js(ra, href, a.ad, a.promo, stay)").unwrap();
        assert_eq!(call.args, vec!["href", "a.ad, a.promo", "stay"]);
    }

    #[test]
    fn combined_mode_token_is_not_part_of_the_selector() {
        let call = parse_call(reg(), "example.org##+js(ra, href, a.ad, a.promo, asap stay)").unwrap();
        assert_eq!(call.args, vec!["href", "a.ad, a.promo", "asap stay"]);
    }

    #[test]
    fn ubo_target_escapes_commas_in_any_argument() {
        let text = r"example.org##+js(aeld, click, a\, b)";
        let out = one(text, Dialect::Ubo);
        assert_eq!(out, r"example.org##+js(addEventListener-defuser, click, a\, b)");
        assert_eq!(parse_call(reg(), &out).unwrap().args, vec!["click", "a, b"]);

        let out = one("example.org#%#//scriptlet('abort-current-inline-script', 'a', '/x,y/')", Dialect::Ubo);
        assert_eq!(out, r"example.org##+js(abort-current-inline-script, a, /x\,y/)");
        assert_eq!(parse_call(reg(), &out).unwrap().args, vec!["a", "/x,y/"]);
    }

    #[test]
    fn trailing_backslash_reaches_adg_intact() {
        let out = one(r"example.org##+js(aopr, C:\)", Dialect::Adg);
        assert_eq!(out, r"example.org#%#//scriptlet('ubo-aopr.js', 'C:\\')");
        assert_eq!(parse_call(reg(), &out).unwrap().args, vec![r"C:\"]);
    }

    #[test]
    fn arguments_ubo_cannot_hold_are_refused() {
        for text in [
            "example.org#%#//scriptlet('abort-on-property-read', ' padded')",
            "example.org#%#//scriptlet('abort-on-property-read', '\"quoted\"')",
            r"example.org#%#//scriptlet('set-constant', 'C:\\', 'x')",
        ] {
            let err = convert_scriptlet_rule(reg(), text, Dialect::Ubo).unwrap_err();
            assert!(
                matches!(err, Error::UnsupportedConversion { reason: Unsupported::UnrepresentableArgument, .. }),
                "{text}: {err:?}"
            );
        }
    }

    #[test]
    fn abp_chain_splits_for_adg_and_stays_joined_for_abp() {
        let text = "example.org#$#log 1; abort-on-property-read alert";
        let out = convert_scriptlet_rule(reg(), text, Dialect::Adg).unwrap();
        assert_eq!(
            out,
            vec![
                "example.org#%#//scriptlet('abp-log', '1')",
                "example.org#%#//scriptlet('abp-abort-on-property-read', 'alert')",
            ]
        );
        assert_eq!(convert_scriptlet_rule(reg(), text, Dialect::Abp).unwrap(), vec![text]);
        assert!(parse_call(reg(), text).is_err());
    }

    #[test]
    fn generic_exception_between_adg_and_ubo() {
        assert_eq!(one("example.org#@%#//scriptlet()", Dialect::Ubo), "example.org#@#+js()");
        assert_eq!(one("example.org#@#+js()", Dialect::Adg), "example.org#@%#//scriptlet()");
        let err = convert_scriptlet_rule(reg(), "example.org#@#+js()", Dialect::Abp).unwrap_err();
        assert!(matches!(err, Error::UnsupportedConversion { reason: Unsupported::GenericException, .. }));
        assert!(parse_rule(reg(), "example.org##+js()").is_err());
    }

    #[test]
    fn missing_alias_is_unsupported() {
        let err = convert_scriptlet_rule(reg(), "example.org#%#//scriptlet('prevent-fetch', '*')", Dialect::Abp)
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedConversion { reason: Unsupported::NoAlias, .. }));
    }

    #[test]
    fn unknown_name_is_reported() {
        let err = convert_scriptlet_rule(reg(), "example.org##+js(no-such-scriptlet)", Dialect::Adg).unwrap_err();
        assert!(matches!(err, Error::UnknownName { dialect: Dialect::Ubo, .. }));
    }

    #[test]
    fn same_dialect_conversion_is_canonical() {
        assert_eq!(
            one("example.org#%#//scriptlet(\"log\",   'a')", Dialect::Adg),
            "example.org#%#//scriptlet('log', 'a')"
        );
        let once = one("example.org##+js(set.js,  ads, '')", Dialect::Ubo);
        assert_eq!(once, "example.org##+js(set-constant, ads, '')");
        assert_eq!(one(&once, Dialect::Ubo), once);
    }

    #[test]
    fn convert_rule_passes_unrelated_lines_through() {
        assert_eq!(convert_rule(reg(), "example.org##.banner", Dialect::Ubo).unwrap(), vec!["example.org##.banner"]);
        assert_eq!(
            convert_rule(reg(), "||example.com^$script,redirect=noopjs", Dialect::Ubo).unwrap(),
            vec!["||example.com^$script,redirect=noop.js"]
        );
    }

    #[test]
    fn batch_continues_past_failures() {
        let list = [
            "! comment",
            "example.org##+js(aopr, alert)",
            "example.org#%#//scriptlet('abc)",
            "",
            "||x^$redirect=nooptext",
        ]
        .join("\n");
        let report = convert_list(reg(), &list, &Options { target: Dialect::Adg, passthrough: true });

        assert_eq!(report.outcomes.len(), 5);
        assert_eq!(report.metrics.converted, 2);
        assert_eq!(report.metrics.failed, 1);
        assert_eq!(report.metrics.passthrough, 2);
        assert_eq!(report.metrics.scriptlets_from(Dialect::Ubo), 1);
        assert_eq!(report.failures().map(|o| o.line).collect::<Vec<_>>(), vec![3]);
        assert_eq!(
            report.output,
            vec!["! comment", "example.org#%#//scriptlet('ubo-aopr.js', 'alert')", "", "||x^$redirect=nooptext"]
        );
    }

    #[test]
    fn batch_can_drop_unrelated_lines() {
        let list = "! comment\nexample.org##.banner\nexample.org#$#log 1";
        let report = convert_list(reg(), list, &Options { target: Dialect::Ubo, passthrough: false });
        assert_eq!(report.output, Vec::<String>::new());
        assert!(report.has_failures());
    }
}
