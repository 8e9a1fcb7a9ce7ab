//! Gemini Chat Relay
//!
//! A small HTTP backend that relays single-turn chat messages to the Google
//! Gemini API. Callers supply their own API key with every request; the relay
//! holds no credentials, no conversation state, and no cache.

pub mod api;
pub mod config;
pub mod error;
pub mod gemini;
pub mod startup;
pub mod state;
