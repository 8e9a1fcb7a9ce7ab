//! Gemini API wire types
//!
//! Structs that mirror the Gemini API JSON request and response format.
//! Every level of the response is optional, including the elements inside
//! the `candidates` and `parts` arrays: the upstream only guarantees the
//! nested shape on a successful generation, and both absent and `null`
//! values must decode so shape validation can run on the decoded value
//! instead of failing the whole body.

use serde::{Deserialize, Serialize};

/// Request body for a `generateContent` call
#[derive(Serialize, Debug)]
pub struct GeminiApiRequest {
    /// List of content items to send
    pub contents: Vec<RequestContent>,
}

/// Content structure for requests
#[derive(Serialize, Debug)]
pub struct RequestContent {
    /// List of content parts
    pub parts: Vec<RequestPart>,
}

/// A single part for requests (typically text)
#[derive(Serialize, Debug)]
pub struct RequestPart {
    /// The text content
    pub text: String,
}

/// Top-level Gemini API response
#[derive(Deserialize, Debug)]
pub struct GeminiApiResponse {
    /// List of candidate responses from the model; elements may be `null`
    pub candidates: Option<Vec<Option<Candidate>>>,
}

/// A single candidate response from the model
#[derive(Deserialize, Debug)]
pub struct Candidate {
    /// The content of this candidate
    pub content: Option<Content>,
}

/// Content structure containing parts of the response
#[derive(Deserialize, Debug)]
pub struct Content {
    /// List of content parts (typically one text part); elements may be `null`
    pub parts: Option<Vec<Option<Part>>>,
}

/// A single part of content (typically text)
#[derive(Deserialize, Debug)]
pub struct Part {
    /// The text content of this part
    pub text: Option<String>,
}
