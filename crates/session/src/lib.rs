//! Session crate for roteiro.
//!
//! This crate contains the search session that turns user events
//! (query submission, filter edits, detail requests) into calls on the
//! remote source and the filter engine.

pub mod error;
pub mod session;

pub use error::SessionError;
pub use session::{SearchSession, SessionView};
