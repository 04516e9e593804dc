//! Core data model types for captured messages.

pub mod message;

pub use message::{BodyView, MessageDetail, MessageSummary};
