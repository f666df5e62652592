//! Name/alias registry.
//!
//! Two read-only tables map a canonical (AdGuard) resource name to the
//! spellings each dialect accepts: one for scriptlets, one for redirect
//! resources. Both are built once from [`ResourceRecord`]s and never change
//! afterwards, so a [`Registry`] can be shared freely across threads.
//!
//! ## How AdGuard spells foreign aliases
//!
//! AdGuard rules may call a resource by its uBO or ABP name to opt into that
//! dialect's argument semantics. The AdGuard index therefore also contains:
//!
//! ```text
//! scriptlets: ubo-<ubo alias>, <ubo alias>, abp-<abp alias>
//! redirects:  ubo-<ubo alias>, <abp alias>   (ABP names are already namespaced)
//! ```
//!
//! ## Optional suffix
//!
//! Scriptlet names in AdGuard and uBO may drop a trailing `.js`; lookups retry
//! with the suffix appended before giving up.

#[path = "registry/content_type.rs"]
mod content_type;
#[path = "registry/redirects.rs"]
mod redirects;
#[path = "registry/scriptlets.rs"]
mod scriptlets;
#[cfg(test)]
#[path = "registry/tests.rs"]
mod tests;

pub use content_type::ContentTypes;

use crate::{Dialect, Error, Result};
use once_cell::sync::Lazy;
use std::collections::HashMap;

static BUILTIN: Lazy<Registry> = Lazy::new(|| {
    Registry::new(
        scriptlets::SCRIPTLETS.iter().map(ResourceRecord::from),
        redirects::REDIRECTS.iter().map(ResourceRecord::from),
    )
    .expect("embedded resource tables must not share aliases")
});

pub(crate) const JS_SUFFIX: &str = ".js";
pub(crate) const UBO_PREFIX: &str = "ubo-";
pub(crate) const ABP_PREFIX: &str = "abp-";

/// Which of the two tables a name belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Scriptlet,
    Redirect,
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ResourceKind::Scriptlet => "scriptlet",
            ResourceKind::Redirect => "redirect resource",
        })
    }
}

impl ResourceKind {
    /// Suffix a dialect lets authors omit from a name.
    pub fn optional_suffix(self, dialect: Dialect) -> Option<&'static str> {
        match (self, dialect) {
            (ResourceKind::Scriptlet, Dialect::Adg | Dialect::Ubo) => Some(JS_SUFFIX),
            _ => None,
        }
    }
}

/// One record of the resource metadata table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    /// Canonical (AdGuard) name.
    pub name: String,
    /// Extra AdGuard spellings besides the canonical name.
    pub adg: Vec<String>,
    /// uBlock Origin spellings, preferred first.
    pub ubo: Vec<String>,
    /// Adblock Plus spellings, preferred first.
    pub abp: Vec<String>,
    /// Content types a uBO redirect rule must declare; empty when none are
    /// registered.
    pub content_types: ContentTypes,
}

impl ResourceRecord {
    pub fn new(name: impl Into<String>) -> Self {
        ResourceRecord {
            name: name.into(),
            adg: Vec::new(),
            ubo: Vec::new(),
            abp: Vec::new(),
            content_types: ContentTypes::empty(),
        }
    }

    pub fn with_ubo<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ubo.extend(aliases.into_iter().map(Into::into));
        self
    }

    pub fn with_abp<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.abp.extend(aliases.into_iter().map(Into::into));
        self
    }

    pub fn with_content_types(mut self, types: ContentTypes) -> Self {
        self.content_types = types;
        self
    }

    /// Aliases written in `dialect` itself (no derived spellings).
    pub fn aliases(&self, dialect: Dialect) -> &[String] {
        match dialect {
            Dialect::Adg => &self.adg,
            Dialect::Ubo => &self.ubo,
            Dialect::Abp => &self.abp,
        }
    }
}

/// Compile-time form of [`ResourceRecord`], produced by `resource!`.
#[derive(Debug)]
pub(crate) struct StaticRecord {
    pub name: &'static str,
    pub adg: &'static [&'static str],
    pub ubo: &'static [&'static str],
    pub abp: &'static [&'static str],
    pub content_types: ContentTypes,
}

impl From<&StaticRecord> for ResourceRecord {
    fn from(r: &StaticRecord) -> Self {
        let owned = |names: &[&str]| names.iter().map(|s| s.to_string()).collect();
        ResourceRecord {
            name: r.name.to_string(),
            adg: owned(r.adg),
            ubo: owned(r.ubo),
            abp: owned(r.abp),
            content_types: r.content_types,
        }
    }
}

/// A successful lookup: the record plus the exact key that matched (which may
/// carry a suffix the caller omitted).
#[derive(Debug, Clone, Copy)]
pub struct Resolved<'a> {
    pub record: &'a ResourceRecord,
    pub alias: &'a str,
}

/// Read-only alias table for one [`ResourceKind`].
#[derive(Debug)]
pub struct AliasTable {
    kind: ResourceKind,
    records: Vec<ResourceRecord>,
    by_name: HashMap<String, usize>,
    /// Per-dialect alias index (`Dialect::index`), alias -> record id.
    index: [HashMap<String, usize>; 3],
}

impl AliasTable {
    pub fn new(kind: ResourceKind, records: impl IntoIterator<Item = ResourceRecord>) -> Result<Self> {
        let mut table = AliasTable { kind, records: Vec::new(), by_name: HashMap::new(), index: Default::default() };

        for record in records {
            let id = table.records.len();
            table.insert(Dialect::Adg, &record.name, id, &record.name)?;
            for alias in &record.adg {
                table.insert(Dialect::Adg, alias, id, &record.name)?;
            }
            for alias in &record.ubo {
                table.insert(Dialect::Ubo, alias, id, &record.name)?;
                table.insert(Dialect::Adg, &format!("{UBO_PREFIX}{alias}"), id, &record.name)?;
                if kind == ResourceKind::Scriptlet {
                    table.insert(Dialect::Adg, alias, id, &record.name)?;
                }
            }
            for alias in &record.abp {
                table.insert(Dialect::Abp, alias, id, &record.name)?;
                let adg_alias = match kind {
                    ResourceKind::Scriptlet => format!("{ABP_PREFIX}{alias}"),
                    ResourceKind::Redirect => alias.clone(),
                };
                table.insert(Dialect::Adg, &adg_alias, id, &record.name)?;
            }
            table.by_name.insert(record.name.clone(), id);
            table.records.push(record);
        }

        Ok(table)
    }

    fn insert(&mut self, dialect: Dialect, alias: &str, id: usize, owner: &str) -> Result<()> {
        let slot = &mut self.index[dialect.index()];
        match slot.get(alias).copied() {
            Some(existing) if existing != id => {
                let first = match self.records.get(existing) {
                    Some(r) => r.name.clone(),
                    None => owner.to_string(),
                };
                Err(Error::DuplicateAlias {
                    dialect,
                    alias: alias.to_string(),
                    first,
                    second: owner.to_string(),
                })
            }
            Some(_) => Ok(()),
            None => {
                slot.insert(alias.to_string(), id);
                Ok(())
            }
        }
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResourceRecord> {
        self.records.iter()
    }

    /// Record for a canonical name.
    pub fn get(&self, canonical: &str) -> Option<&ResourceRecord> {
        self.by_name.get(canonical).map(|&id| &self.records[id])
    }

    /// Look `raw` up in `dialect`'s index, retrying with the dialect's
    /// optional suffix.
    pub fn lookup(&self, dialect: Dialect, raw: &str) -> Option<Resolved<'_>> {
        let index = &self.index[dialect.index()];
        if let Some((alias, &id)) = index.get_key_value(raw) {
            return Some(Resolved { record: &self.records[id], alias });
        }

        let suffix = self.kind.optional_suffix(dialect)?;
        if raw.is_empty() || raw.ends_with(suffix) {
            return None;
        }
        let (alias, &id) = index.get_key_value(format!("{raw}{suffix}").as_str())?;
        Some(Resolved { record: &self.records[id], alias })
    }

    /// Canonical name for `raw` in `dialect`.
    pub fn resolve(&self, dialect: Dialect, raw: &str) -> Option<&str> {
        self.lookup(dialect, raw).map(|r| r.record.name.as_str())
    }

    /// Preferred spelling of `canonical` in `target`; `None` when the
    /// resource has no counterpart there.
    pub fn reverse_resolve(&self, canonical: &str, target: Dialect) -> Option<&str> {
        let record = self.get(canonical)?;
        match target {
            Dialect::Adg => Some(record.name.as_str()),
            Dialect::Ubo | Dialect::Abp => record.aliases(target).first().map(String::as_str),
        }
    }

    /// Whether a name valid in `from` has a counterpart in `to`.
    pub fn is_compatible(&self, name: &str, from: Dialect, to: Dialect) -> bool {
        self.resolve(from, name).is_some_and(|canonical| self.reverse_resolve(canonical, to).is_some())
    }
}

/// The scriptlet and redirect tables together.
#[derive(Debug)]
pub struct Registry {
    scriptlets: AliasTable,
    redirects: AliasTable,
}

impl Registry {
    /// Build a registry from externally loaded metadata.
    pub fn new(
        scriptlets: impl IntoIterator<Item = ResourceRecord>,
        redirects: impl IntoIterator<Item = ResourceRecord>,
    ) -> Result<Self> {
        Ok(Registry {
            scriptlets: AliasTable::new(ResourceKind::Scriptlet, scriptlets)?,
            redirects: AliasTable::new(ResourceKind::Redirect, redirects)?,
        })
    }

    /// Registry built from the embedded tables on first use.
    pub fn builtin() -> &'static Registry {
        &BUILTIN
    }

    pub fn scriptlets(&self) -> &AliasTable {
        &self.scriptlets
    }

    pub fn redirects(&self) -> &AliasTable {
        &self.redirects
    }

    pub fn table(&self, kind: ResourceKind) -> &AliasTable {
        match kind {
            ResourceKind::Scriptlet => &self.scriptlets,
            ResourceKind::Redirect => &self.redirects,
        }
    }

    /// Canonical name of a scriptlet or, failing that, a redirect resource.
    pub fn resolve_canonical_name(&self, raw: &str, dialect: Dialect) -> Option<&str> {
        self.scriptlets.resolve(dialect, raw).or_else(|| self.redirects.resolve(dialect, raw))
    }

    /// Content types a uBO rule redirecting to `canonical` must declare.
    pub fn required_content_types(&self, canonical: &str) -> Option<ContentTypes> {
        self.redirects.get(canonical).map(|r| r.content_types).filter(|t| !t.is_empty())
    }
}
