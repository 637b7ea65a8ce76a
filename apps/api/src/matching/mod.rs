// Job Match Scoring Engine
// Implements: profile/job normalization, weighted sub-scoring, match reasons, stable ranking.
// The engine is pure and synchronous; handlers move large passes onto the blocking pool.

pub mod catalog;
pub mod handlers;
pub mod normalize;
pub mod ranker;
pub mod reasons;
pub mod scoring;
