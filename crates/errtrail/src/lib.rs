//! # errtrail
//!
//! Errors that remember the call sites they travelled through.
//!
//! ## Design Philosophy
//!
//! - **Capture once**: the call stack is recorded when a plain error is
//!   first wrapped, and never again for the same error
//! - **Annotate anywhere**: every layer of the call chain can attach
//!   key/value context, bucketed under the call site that attached it
//! - **Render deterministically**: the report lists frames in capture
//!   order and parameters in attachment order
//!
//! ## Usage
//!
//! ```rust
//! use errtrail::{annotate, render, DynError, Error};
//!
//! fn read_record() -> Result<(), DynError> {
//!     let err = std::io::Error::new(std::io::ErrorKind::NotFound, "record missing");
//!     Err(Error::wrap(err).into())
//! }
//!
//! fn load_table() -> Result<(), DynError> {
//!     match read_record() {
//!         Ok(()) => Ok(()),
//!         Err(err) => Err(annotate(err, "record", "r-17").with("table", "users").into()),
//!     }
//! }
//!
//! if let Err(err) = load_table() {
//!     println!("{}", render(err.as_ref()));
//! }
//! ```
//!
//! ## Principles
//!
//! - Errors travel the chain as [`DynError`]; `Error::wrap` hands back an
//!   already-wrapped error unchanged, so calling it redundantly is safe
//! - Annotation attaches to the nearest enclosing *function*; annotating
//!   from inside a closure buckets under the closure's own identity
//! - Every operation is total: unresolved stacks shorten the trail, they
//!   never fail it

mod error;
mod frame;
mod render;
#[cfg(test)]
mod testutil;
mod value;

pub use error::{Error, Param, annotate};
pub use frame::{CallStackResolver, Frame, FrameId, FrameResolver};
pub use render::render;
pub use value::Value;

/// Boxed error type the public API accepts and produces.
pub type DynError = Box<dyn std::error::Error + Send + Sync>;
