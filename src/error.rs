//! Error types.
//!
//! Every failure is scoped to a single rule. Batch conversion (see
//! `engine::convert::convert_list`) records the error next to the offending
//! line and keeps going, so none of these variants is fatal to a whole list.

use crate::{Dialect, ResourceKind};
use thiserror::Error;

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Why a conversion was refused even though the source rule was understood.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unsupported {
    /// The canonical resource has no alias in the target dialect.
    NoAlias,
    /// The target needs a content-type modifier and none is registered.
    MissingContentTypes,
    /// Generic "disable everything" exceptions have no form in the target.
    GenericException,
    /// An argument would not read back the same in the target syntax
    /// (surrounding spaces or quotes in uBO, for instance).
    UnrepresentableArgument,
}

impl std::fmt::Display for Unsupported {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Unsupported::NoAlias => "no alias in the target dialect",
            Unsupported::MissingContentTypes => "a content-type modifier is required but none is registered",
            Unsupported::GenericException => "generic exceptions cannot be expressed in the target dialect",
            Unsupported::UnrepresentableArgument => "an argument cannot be written in the target dialect",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Malformed call syntax: unterminated quote, stray character, unbalanced
    /// delimiters.
    #[error("invalid {dialect} call syntax: {reason}")]
    Parse { dialect: Dialect, reason: String },

    /// The name is not known to the registry for the detected dialect.
    #[error("unknown {kind} '{name}' for {dialect}")]
    UnknownName { kind: ResourceKind, name: String, dialect: Dialect },

    #[error("cannot convert {kind} '{name}' to {target}: {reason}")]
    UnsupportedConversion { kind: ResourceKind, name: String, target: Dialect, reason: Unsupported },

    /// The line is a comment or matches no dialect marker.
    #[error("rule does not match any supported dialect")]
    AmbiguousDialect,

    /// Two resource records claim the same alias in one dialect.
    #[error("alias '{alias}' for {dialect} is claimed by both '{first}' and '{second}'")]
    DuplicateAlias { dialect: Dialect, alias: String, first: String, second: String },
}

impl Error {
    pub(crate) fn parse(dialect: Dialect, reason: impl Into<String>) -> Self {
        Error::Parse { dialect, reason: reason.into() }
    }

    /// Short, stable label for the error category (used in reports).
    pub fn kind_label(&self) -> &'static str {
        match self {
            Error::Parse { .. } => "parse",
            Error::UnknownName { .. } => "unknown-name",
            Error::UnsupportedConversion { .. } => "unsupported",
            Error::AmbiguousDialect => "no-dialect",
            Error::DuplicateAlias { .. } => "registry",
        }
    }
}

/// Returned by `Dialect::from_str` for an unrecognised dialect name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown dialect '{0}' (expected adg, ubo or abp)")]
pub struct UnknownDialect(pub String);
