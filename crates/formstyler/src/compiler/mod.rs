//! The settings-to-CSS compiler.
//!
//! - [`Compiler`]: turns a list of presets into one scoped stylesheet
//! - [`CompilerOptions`]: `!important`, header comment, generator name
//! - [`CompiledOutput`]: CSS text, required fonts, and what was skipped
//!
//! Compilation is a pure function of the preset list; nothing is read from
//! or written to the outside world.

mod base;
mod compile;
mod options;
mod output;

pub use compile::{compile, Compiler};
pub use options::CompilerOptions;
pub use output::{CompiledOutput, Skip};
