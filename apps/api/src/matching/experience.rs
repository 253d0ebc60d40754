//! Experience alignment: the 30-point component.
//!
//! Two halves of 15 points each: seniority level (ordinal, linear decay per level
//! short) and keyword relevance inside experience narratives.

use crate::matching::equivalence::EquivalenceTable;
use crate::matching::models::{ExperienceAlignment, ExperienceEntry, SeniorityLevel};

pub const EXPERIENCE_MAX: f64 = 30.0;
const LEVEL_MAX: f64 = 15.0;
const RELEVANCE_MAX: f64 = 15.0;

/// Years below this are junior.
const MID_THRESHOLD_YEARS: f64 = 1.0;
/// Years at or above this are senior.
const SENIOR_THRESHOLD_YEARS: f64 = 3.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ExperienceScore {
    pub score: f64,
    pub level_score: f64,
    pub relevance_score: f64,
    pub alignment: ExperienceAlignment,
}

/// Sum of `duration_years` across all entries.
pub fn total_years(entries: &[ExperienceEntry]) -> f64 {
    entries.iter().map(|e| e.duration_years).sum()
}

/// `< 1` → junior, `1 ≤ y < 3` → mid, `≥ 3` → senior.
pub fn level_for_years(years: f64) -> SeniorityLevel {
    if years < MID_THRESHOLD_YEARS {
        SeniorityLevel::Junior
    } else if years < SENIOR_THRESHOLD_YEARS {
        SeniorityLevel::Mid
    } else {
        SeniorityLevel::Senior
    }
}

/// Full 15 when the candidate meets the level, otherwise a third off per level short.
pub fn level_score(candidate: SeniorityLevel, job: SeniorityLevel) -> f64 {
    let (c, j) = (candidate.ordinal(), job.ordinal());
    if c >= j {
        return LEVEL_MAX;
    }
    let steps_short = f64::from(j - c);
    LEVEL_MAX * (1.0 - steps_short / 3.0).max(0.0)
}

/// Scores level alignment plus keyword relevance in experience descriptions.
/// `descriptions` must already be normalized.
pub fn score_experience(
    entries: &[ExperienceEntry],
    descriptions: &[String],
    job_level: SeniorityLevel,
    min_years: Option<f64>,
    keywords: &[String],
    table: &EquivalenceTable,
) -> ExperienceScore {
    let years = total_years(entries);
    let candidate_level = level_for_years(years);
    let level = level_score(candidate_level, job_level);

    let relevance = if keywords.is_empty() {
        RELEVANCE_MAX
    } else {
        let relevant = keywords
            .iter()
            .filter(|kw| table.appears_in_any(kw, descriptions))
            .count();
        RELEVANCE_MAX * relevant as f64 / keywords.len() as f64
    };

    ExperienceScore {
        score: (level + relevance).min(EXPERIENCE_MAX),
        level_score: level,
        relevance_score: relevance,
        alignment: ExperienceAlignment {
            candidate_years: years,
            candidate_level,
            job_level,
            meets_min_years: min_years.map(|min| years >= min),
        },
    }
}
