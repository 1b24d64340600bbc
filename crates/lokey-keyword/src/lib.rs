//! Business facets and keyword candidate generation.
//!
//! Turns a business name and description into structured facets (category,
//! menu items, audience, ...) and then into 50-100 raw keyword candidates.
//! The primary path asks an external text generator; a deterministic rule
//! engine produces the candidates whenever the generator is unavailable,
//! times out, or answers with something unparsable. Callers always get a
//! candidate list.

#![warn(missing_docs)]

pub mod candidate;
pub mod facets;
pub mod fallback;
pub mod gemini;
pub mod generate;
pub mod parse;

pub use candidate::{CandidateKeyword, TypeTag};
pub use facets::{BusinessFacets, MenuItem};
pub use gemini::GeminiGenerator;
pub use generate::{CandidateGenerator, GenerateError, TextGenerator};
