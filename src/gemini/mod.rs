//! Gemini upstream integration
//!
//! The relay's single collaborator: a thin client for the generative
//! language `generateContent` endpoint, plus the wire types it speaks.

pub mod client;
pub mod types;
