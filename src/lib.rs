//! Deterministic ordering and scoring engine for the LTTI trading type questionnaire.
//!
//! `ltti-core` provides the fixed 120-statement question bank, a seeded
//! reproducible shuffle, Likert scoring over four bipolar axes, 4-letter code
//! derivation and profile lookup. All engine operations are pure: identical
//! seeds and answers always produce identical orders, totals and codes.
//!
//! The [`session`] module layers the respondent-facing lifecycle on top
//! (seed generation, paging, progress, JSON persistence).

pub mod catalog;
pub mod ordering;
pub mod scoring;
pub mod session;
pub mod types;
