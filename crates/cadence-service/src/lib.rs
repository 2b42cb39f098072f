//! Task scheduling logic on top of the recurrence engine.
//!
//! Everything here works on in-memory [`task::Task`] values; storage and
//! transport belong to the caller.

pub mod error;
pub mod search;
pub mod task;
