//! Redirect rules.
//!
//! A redirect rule is a network rule whose `$` modifier list names a
//! substitute resource:
//!
//! ```text
//! ||example.com/ads.js$script,redirect=noopjs                  AdGuard
//! ||example.com/ads.js$script,redirect=noop.js:5               uBO (priority 5)
//! ||example.com/ads.js$script,rewrite=abp-resource:blank-js    Adblock Plus
//! ```
//!
//! Only the resource name, the marker and (for uBO targets) the content-type
//! modifiers change during conversion; the base pattern and every other
//! modifier are copied through.

use super::classify::is_comment;
use super::render::render_redirect;
use super::tokenizer::split_modifiers;
use crate::{ContentTypes, Dialect, Error, Registry, ResourceKind, Result, Unsupported};

/// The one resource uBO accepts without a content type.
pub(crate) const EMPTY_REDIRECT: &str = "empty";

const ABP_RESOURCE_PREFIX: &str = "abp-resource:";

/// Which modifier carries the resource name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RedirectMarker {
    /// `redirect=`
    Redirect,
    /// `redirect-rule=`: applies only when another rule blocks the request.
    RedirectRule,
    /// `rewrite=abp-resource:` (Adblock Plus).
    Rewrite,
}

impl RedirectMarker {
    const ALL: [RedirectMarker; 3] = [RedirectMarker::Redirect, RedirectMarker::RedirectRule, RedirectMarker::Rewrite];

    pub fn prefix(self) -> &'static str {
        match self {
            RedirectMarker::Redirect => "redirect=",
            RedirectMarker::RedirectRule => "redirect-rule=",
            RedirectMarker::Rewrite => "rewrite=",
        }
    }

    /// Marker of a single modifier, with the value that follows it.
    fn split(modifier: &str) -> Option<(RedirectMarker, &str)> {
        RedirectMarker::ALL.into_iter().find_map(|marker| {
            let value = modifier.strip_prefix(marker.prefix())?;
            match marker {
                RedirectMarker::Rewrite if !value.starts_with(ABP_RESOURCE_PREFIX) => None,
                _ => Some((marker, value)),
            }
        })
    }
}

/// A parsed redirect line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectRule {
    pub dialect: Dialect,
    /// Everything before the modifier `$`.
    pub base: String,
    /// Modifiers with escapes resolved, in source order.
    pub modifiers: Vec<String>,
    /// Position of the redirect modifier in `modifiers`.
    pub redirect_index: usize,
    pub marker: RedirectMarker,
    /// Resource name as written, without a uBO priority suffix.
    pub name: String,
    /// Canonical (AdGuard) name of the resource.
    pub canonical: String,
    /// uBO `:N` priority suffix.
    pub priority: Option<String>,
}

/// Split `text` at the last unescaped `$`.
fn split_base(text: &str) -> Option<(&str, &str)> {
    let mut split = None;
    let mut prev = None;
    for (i, c) in text.char_indices() {
        if c == '$' && prev != Some('\\') {
            split = Some(i);
        }
        prev = Some(c);
    }
    split.map(|i| (&text[..i], &text[i + 1..]))
}

fn find_marker(modifiers: &[String]) -> Option<(usize, RedirectMarker, &str)> {
    modifiers
        .iter()
        .enumerate()
        .find_map(|(i, m)| RedirectMarker::split(m).map(|(marker, value)| (i, marker, value)))
}

/// Whether `text` is a network rule with a redirect-style modifier.
pub(crate) fn has_redirect_marker(text: &str) -> bool {
    if is_comment(text) {
        return false;
    }
    split_base(text).is_some_and(|(_, list)| find_marker(&split_modifiers(list)).is_some())
}

/// `noop.js:5` -> (`noop.js`, `5`).
fn strip_priority(value: &str) -> (&str, Option<&str>) {
    match value.rsplit_once(':') {
        Some((name, digits)) if is_priority(name, digits) => (name, Some(digits)),
        _ => (value, None),
    }
}

fn is_priority(name: &str, digits: &str) -> bool {
    !name.is_empty() && !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

pub(crate) fn parse_redirect_rule(registry: &Registry, text: &str) -> Result<RedirectRule> {
    if is_comment(text) {
        return Err(Error::AmbiguousDialect);
    }
    let (base, list) = split_base(text).ok_or(Error::AmbiguousDialect)?;
    let modifiers = split_modifiers(list);
    let (redirect_index, marker, value) = find_marker(&modifiers).ok_or(Error::AmbiguousDialect)?;

    let (name, priority) = match marker {
        RedirectMarker::Rewrite => (value, None),
        _ => strip_priority(value),
    };
    let candidates: &[Dialect] = match (marker, priority) {
        (RedirectMarker::Rewrite, _) => &[Dialect::Abp],
        (_, Some(_)) => &[Dialect::Ubo],
        (_, None) => &[Dialect::Adg, Dialect::Ubo],
    };
    if name.is_empty() {
        return Err(Error::parse(candidates[0], "empty redirect resource name"));
    }

    let table = registry.redirects();
    let (dialect, canonical) = candidates
        .iter()
        .find_map(|&d| table.resolve(d, name).map(|c| (d, c.to_string())))
        .ok_or_else(|| Error::UnknownName {
            kind: ResourceKind::Redirect,
            name: name.to_string(),
            dialect: candidates[0],
        })?;
    log::debug!("[redirect] {dialect:?} {marker:?} {name:?} -> {canonical:?}");

    let name = name.to_string();
    let priority = priority.map(str::to_string);
    Ok(RedirectRule { dialect, base: base.to_string(), modifiers, redirect_index, marker, name, canonical, priority })
}

/// Make sure a uBO redirect declares a content type.
///
/// Leaves `modifiers` alone when one is already declared or when the rule
/// redirects to `empty`; otherwise appends the resource's registered types.
pub(crate) fn ensure_content_types(modifiers: &mut Vec<String>, canonical: &str, registry: &Registry) -> Result<()> {
    if !ContentTypes::declared_in(modifiers.as_slice()).is_empty() || canonical == EMPTY_REDIRECT {
        return Ok(());
    }

    let required = registry.required_content_types(canonical).ok_or_else(|| Error::UnsupportedConversion {
        kind: ResourceKind::Redirect,
        name: canonical.to_string(),
        target: Dialect::Ubo,
        reason: Unsupported::MissingContentTypes,
    })?;
    log::debug!("[redirect] {canonical}: adding {required:?}");
    modifiers.extend(required.tags().map(str::to_string));
    Ok(())
}

pub(crate) fn convert_redirect_rule(registry: &Registry, text: &str, target: Dialect) -> Result<String> {
    let rule = parse_redirect_rule(registry, text)?;

    let name = if target == Dialect::Adg && rule.dialect == Dialect::Adg {
        rule.name.as_str()
    } else {
        registry.redirects().reverse_resolve(&rule.canonical, target).ok_or_else(|| Error::UnsupportedConversion {
            kind: ResourceKind::Redirect,
            name: rule.canonical.clone(),
            target,
            reason: Unsupported::NoAlias,
        })?
    };

    let marker = match (target, rule.marker) {
        (Dialect::Abp, _) => RedirectMarker::Rewrite,
        (_, RedirectMarker::Rewrite) => RedirectMarker::Redirect,
        (_, marker) => marker,
    };
    let priority = match (&rule.priority, rule.dialect, target) {
        (Some(p), Dialect::Ubo, Dialect::Ubo) => format!(":{p}"),
        _ => String::new(),
    };

    let mut modifiers = rule.modifiers;
    modifiers[rule.redirect_index] = format!("{}{name}{priority}", marker.prefix());
    if target == Dialect::Ubo {
        ensure_content_types(&mut modifiers, &rule.canonical, registry)?;
    }
    Ok(render_redirect(&rule.base, &modifiers))
}
