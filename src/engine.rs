//! Parsing and conversion engine.
//!
//! The engine is split into focused submodules under `src/engine/`, each one a
//! pure function of its inputs plus the read-only [`crate::Registry`].
//!
//! ## How the parts work together
//!
//! ```text
//! rule text ── classify ──────────────┐   (classify.rs)
//!                                     │ Dialect
//!                                     v
//!              tokenize (per dialect) ┼─ ADG call state machine
//!              (tokenizer.rs)         ├─ uBO comma splitter
//!                                     └─ ABP snippet splitter
//!                                     │ ScriptletRule
//!                                     v
//!              registry lookup ───────┼─ canonical name, target alias
//!                                     v
//!              transcode (transcode.rs)  per-resource argument rewrites
//!                                     v
//!              render (render.rs) ────── one rule, or several for ABP chains
//! ```
//!
//! Redirect rules take a shorter path through `redirect.rs`: split the `$`
//! modifier list, swap the resource name, inject content types when the target
//! demands them, render.
//!
//! ## Responsibilities by module
//!
//! - `classify.rs`: comment filtering and dialect detection.
//! - `tokenizer.rs`: all character-level splitting; the only state machine.
//! - `transcode.rs`: the finite table of argument rewrites.
//! - `redirect.rs`: redirect parsing and the content-type resolver.
//! - `render.rs`: dialect templates.
//! - `validate.rs`: "is this rule recognised" without producing output.
//! - `convert.rs`: the scriptlet pipeline and batch conversion of lists.
//! - `metrics.rs`: counters and timing for batch runs.
//!
//! ## Debugging
//!
//! Every step logs through the `log` facade: `debug` for decisions (dialect,
//! resolved names), `trace` for tokenizer detail.

#[path = "engine/classify.rs"]
mod classify;
#[path = "engine/convert.rs"]
mod convert;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/redirect.rs"]
mod redirect;
#[path = "engine/render.rs"]
mod render;
#[path = "engine/tokenizer.rs"]
mod tokenizer;
#[path = "engine/transcode.rs"]
mod transcode;
#[path = "engine/validate.rs"]
mod validate;

pub(crate) use classify::classify;
pub(crate) use convert::{convert_list, convert_rule, convert_scriptlet_rule, parse_call, parse_rule};
pub use convert::{BatchReport, LineOutcome, LineStatus};
pub use metrics::RunMetrics;
pub(crate) use redirect::{convert_redirect_rule, has_redirect_marker, parse_redirect_rule};
pub use redirect::{RedirectMarker, RedirectRule};
pub(crate) use validate::{is_convertible, is_valid_rule};
