//! Bridge between the UI thread and the relay worker: command types and the
//! worker runtime.

pub mod commands;
pub mod runtime;
