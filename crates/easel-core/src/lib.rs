//! Easel Core - Foundational types for the Easel attribute engine
//!
//! This crate provides the types that all other Easel crates depend on:
//! - `EaselError` and the `Result` alias
//! - `Color` - RGBA color with CSS-style string parsing

mod color;
mod error;

pub use color::Color;
pub use error::{EaselError, Result};
