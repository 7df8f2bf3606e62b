//! Wire types for the `generateContent` endpoint.

use serde::{Deserialize, Serialize};

use super::schema::Schema;

/// Request body for a `generateContent` call.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    /// A single-turn request in structured-output mode: one text prompt,
    /// JSON response encoding, and the given output schema.
    pub fn schema_constrained(prompt: String, schema: Schema) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: schema,
            },
        }
    }
}

/// One conversational turn.
#[derive(Debug, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

/// One text part of a turn.
#[derive(Debug, Serialize)]
pub struct Part {
    pub text: String,
}

/// Generation settings for structured output.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: &'static str,
    pub response_schema: Schema,
}

/// Response envelope from `generateContent`.
///
/// Only the fields this application reads are modelled; everything else in
/// the envelope is ignored.
#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// One generated candidate.
#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

/// Content of a candidate.
#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

/// One part of a candidate's content.
#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate.
    ///
    /// Returns `None` when there is no candidate, no parts, or the text
    /// amounts to nothing but whitespace.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;

        let mut text = String::new();
        for part in &content.parts {
            if let Some(t) = &part.text {
                text.push_str(t);
            }
        }

        if text.trim().is_empty() { None } else { Some(text) }
    }
}
