//! Presentation Layer
//!
//! Command DTOs and the dispatcher that turns each command into a response envelope.

pub mod dto;
pub mod handlers;

pub use handlers::{CommandOutput, UserCommand, UserHandlers};
