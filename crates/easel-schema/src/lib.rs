//! Easel Schema - Declarative attribute schemas for overlay elements
//!
//! This crate provides the schema system for describing and validating
//! the configuration surface of chart overlay elements:
//! - `AttrSchema` / `AttrKind` - typed, defaulted attribute descriptors
//! - `SchemaTree` - the ordered attribute set of one element kind
//! - `validate_value` - pure, kind-dispatched type validators
//! - `SchemaRegistry` - element registry with a TOML schema-file format
//! - `image_overlay` - the built-in schema for overlay images

mod builtin;
mod node;
mod registry;
mod tree;
mod validation;

pub use builtin::image_overlay;
pub use node::{AttrKind, AttrSchema, EditClass};
pub use registry::SchemaRegistry;
pub use tree::SchemaTree;
pub use validation::{validate_value, value_type_name, AxisRefCheck, NoAxes};
