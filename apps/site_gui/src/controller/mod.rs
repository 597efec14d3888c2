//! Controller layer: UI events, the contact form state machine, and command
//! dispatch onto the relay worker's queue.

pub mod events;
pub mod form;
pub mod orchestration;
