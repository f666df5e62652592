//! Batch run metrics.
//!
//! Collected by `convert_list` for every run; cheap enough that there is no
//! separate opt-in path. The CLI prints them with `--report`.
//!
//! ## Design notes
//!
//! - `per_dialect` counts source dialects of lines that were recognised as
//!   scriptlet rules, whether or not conversion succeeded. Redirect lines are
//!   counted in `redirects` only.

use crate::Dialect;
use std::time::Duration;

// --- Metrics -----------------------------------------------------------------

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunMetrics {
    /// Total elapsed time for the batch.
    pub total: Duration,
    /// Lines read, blank lines included.
    pub lines: usize,
    /// Lines converted into at least one rule.
    pub converted: usize,
    /// Comments and unrelated lines copied as is.
    pub passthrough: usize,
    /// Lines that produced an error.
    pub failed: usize,
    /// Lines recognised as redirect rules.
    pub redirects: usize,
    /// Scriptlet lines by source dialect (`Dialect::index`).
    pub per_dialect: [usize; 3],
    /// Rules emitted; larger than `converted` when ABP chains are split.
    pub emitted: usize,
}

impl RunMetrics {
    pub fn scriptlets_from(&self, dialect: Dialect) -> usize {
        self.per_dialect[dialect.index()]
    }

    pub(crate) fn record_scriptlet(&mut self, dialect: Dialect) {
        self.per_dialect[dialect.index()] += 1;
    }
}
