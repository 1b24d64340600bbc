//! lokey: local-business keyword assistant.
//!
//! Helps small Korean businesses pick blog keywords they can actually rank
//! for. Given a place name and a short description, lokey resolves the
//! location down to dong and commercial-zone level, extracts business
//! facets, generates candidate keywords, scores them for demand,
//! competition, intent and regional fit with trend and seasonal signals
//! folded in, and recommends a small set of low-competition keywords plus
//! strategy combinations and a writing guideline.

#![warn(missing_docs)]

pub mod cli;
pub mod guideline;
