//! LatexClip Core
//!
//! This crate provides the shared types and error definitions
//! for the latexclip converters.
//!
//! # Overview
//!
//! The core crate contains:
//! - [`EnvKind`], [`OutputMode`] - Enums shared by the converters, config and CLI
//! - [`LatexclipError`] - Error types for the fallible surfaces (config, I/O)

pub mod enums;
pub mod error;

pub use enums::{EnvKind, OutputMode};
pub use error::{LatexclipError, Result};
