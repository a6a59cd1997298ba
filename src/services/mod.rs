//! Backend services
//!
//! Business logic that is more than a single scoped query lives here.

pub mod chat;

pub use chat::{ChatError, ChatService};
