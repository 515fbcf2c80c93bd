//! Diagnostics for monitor expressions.
//!
//! A [`Diagnostic`] carries:
//! - an [`ErrorCode`] for `--explain` lookups
//! - a message saying what went wrong
//! - labeled spans into the expression saying where
//! - notes and suggestions
//!
//! Rendering lives in [`emitter`]; long-form documentation for each code
//! in [`errors::ErrorDocs`].

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod errors;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;
pub use errors::ErrorDocs;
