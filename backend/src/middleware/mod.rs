//! Request middleware.
//!
//! Currently only [`Trace`], which tags every request with a trace id.

pub mod trace;

pub use trace::Trace;
