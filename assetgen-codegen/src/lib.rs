//! Code emission for assetgen.
//!
//! - [`builder`] - Byte-oriented code building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`Registration`] / [`RegistrationFunction`] - The generated C++ statements
//! - [`Generator`] - Streams the whole function for a list of asset files

pub mod builder;
mod generator;
mod registration;

pub use builder::{CodeBuilder, CodeFragment, Renderable};
pub use generator::{EmitSummary, Generator};
pub use registration::{Registration, RegistrationFunction};
