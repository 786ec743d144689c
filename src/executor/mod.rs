//! Execution engine: the factory, its attempt loop, and the side channels.
//!
//! Module organization follows information hiding: each submodule hides one
//! design decision that is likely to change:
//!
//! - `invoker`: hides the attempt-loop strategy and hook resolution order
//! - `deadline`: hides how the timeout race is constructed and released
//! - `notify`: hides how the fire-and-forget hook task contains failures

mod deadline;
mod invoker;
mod notify;

pub use invoker::Invoker;
