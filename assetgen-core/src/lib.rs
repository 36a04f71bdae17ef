//! Core types for assetgen.
//!
//! This crate loads static assets from disk, escapes their bytes for a C++
//! string literal and carries the configuration shared by the code emitter
//! and the command line tool.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod asset;
mod config;
mod content_type;
mod error;
mod escape;
mod file;

pub use asset::{Asset, RegistrationKey};
pub use config::{
    Config, DEFAULT_REGISTRY_PARAM, DEFAULT_REGISTRY_TYPE, DEFAULT_ROOT, is_c_identifier,
};
pub use content_type::ContentType;
pub use error::{Error, Result};
pub use escape::{EscapedLiteral, escape};
pub use file::OutputFile;
