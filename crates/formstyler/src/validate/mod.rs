//! Settings validation.
//!
//! - [`Validator`]: turns [`RawPreset`]s into typed [`Preset`](crate::Preset)s
//! - [`Report`]: the accepted presets plus every [`Rejection`]
//! - [`ValidationError`]: why a preset or setting was dropped
//!
//! This is the boundary where untrusted input is checked. The compiler
//! trusts what comes out of here, but re-checks each value before writing it.

mod error;
mod validator;

pub use error::{Rejection, ValidationError};
pub use validator::{RawPreset, Report, Validator};

pub(crate) use validator::sanitize_field;
