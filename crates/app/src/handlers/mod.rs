//! Gateway proxy handlers, one module per capability group

pub mod auth;
pub mod chat;
pub mod history;
