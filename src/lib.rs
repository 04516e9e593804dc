//! `inboxview`: a terminal viewer for captured-email inboxes.
//!
//! This crate provides the HTTP client for the capture server, the inbox
//! controller that keeps the message list and the selected message in
//! sync, and the terminal UI built on top of them.

pub mod api;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod i18n;
pub mod inbox;
pub mod model;
pub mod tui;
