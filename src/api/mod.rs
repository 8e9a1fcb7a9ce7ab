//! API module
//!
//! Contains HTTP request handlers for the relay endpoints

pub mod chat;
