// Match scoring and gap analysis.
// Implements: term normalization, skill equivalence, the four weighted scorers,
// aggregation and banding, recommendations, and employer tone tagging.
// Everything below `handlers` is pure and synchronous; no I/O after startup.

pub mod calculator;
pub mod education;
pub mod equivalence;
pub mod experience;
pub mod handlers;
pub mod keywords;
pub mod models;
pub mod normalizer;
pub mod recommendations;
pub mod skills;
pub mod tone;
