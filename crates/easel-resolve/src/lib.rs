//! Easel Resolve - Validate, default-fill and classify overlay configuration
//!
//! This crate turns raw user configuration into fully validated, fully
//! defaulted instances ready for the renderer:
//! - `resolve_instance` - single-element resolution against a schema tree
//! - `TemplatedArray` - ordered collections with a template default layer
//! - `ResolveReport` - collected per-attribute errors and warnings
//! - `diff_instances` - change sets carrying edit classifications
//!
//! Resolution is a pure function of its inputs: nothing is mutated, every
//! pass allocates a fresh result, and invalid values fall back through
//! the precedence chain (item value, then template value, then schema
//! default) instead of aborting the pass.

mod changes;
mod report;
mod resolver;
mod template;

pub use changes::{diff_instances, AttrChange, ChangeSet};
pub use report::{Issue, ResolveReport, Severity};
pub use resolver::{resolve_instance, ResolvedAttr, ResolvedInstance};
pub use template::{ArrayInput, ResolvedArray, TemplatedArray};
