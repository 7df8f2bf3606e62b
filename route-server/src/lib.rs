//! AI transit route concierge server.
//!
//! A deliberately thin client: the itineraries themselves are invented by
//! a hosted generative model. What this crate owns is the request/response
//! contract around that call (prompt, output schema, defensive decoding,
//! error taxonomy) and the mobile web shell that renders the result.

pub mod domain;
pub mod gemini;
pub mod web;
