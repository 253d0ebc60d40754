//! Match Score Calculator: orchestrates the four scorers behind a pluggable trait.
//!
//! Default: `MatchEngine` (pure-Rust, deterministic, table-driven).
//!
//! `AppState` holds an `Arc<dyn MatchScorer>`; tests build engines over fixture
//! equivalence tables instead of the startup one.

use std::collections::BTreeSet;
use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::matching::education::score_education;
use crate::matching::equivalence::{EquivalenceTable, Resolution};
use crate::matching::experience::score_experience;
use crate::matching::keywords::score_keywords;
use crate::matching::models::{
    CandidateProfile, ColorBand, GapAnalysisResult, JobRequirement, MatchResult,
    MatchScoreBreakdown,
};
use crate::matching::normalizer::{normalize, normalize_descriptions, normalize_ordered};
use crate::matching::recommendations::{generate_recommendations, ComponentScores};
use crate::matching::skills::score_skills;
use crate::matching::tone::{classify_tone, tone_guidance};

/// Totals below this are red.
const YELLOW_FLOOR: f64 = 40.0;
/// Totals above this (strictly) are green.
const GREEN_FLOOR: f64 = 75.0;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatchError {
    #[error("missing required field: {field}")]
    MissingInput { field: &'static str },
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The match scorer trait. Implement this to swap engines without touching the
/// handlers. Carried in `AppState` as `Arc<dyn MatchScorer>`.
pub trait MatchScorer: Send + Sync {
    /// Full match: breakdown, gap analysis, and tone annotation.
    fn score(
        &self,
        profile: &CandidateProfile,
        job: &JobRequirement,
    ) -> Result<MatchResult, MatchError>;

    /// Score only.
    fn score_only(
        &self,
        profile: &CandidateProfile,
        job: &JobRequirement,
    ) -> Result<MatchScoreBreakdown, MatchError> {
        self.score(profile, job).map(|result| result.breakdown)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// MatchEngine (default implementation)
// ────────────────────────────────────────────────────────────────────────────

/// Table-driven scorer. Holds only the shared read-only equivalence table, so a
/// single instance serves any number of concurrent callers.
#[derive(Debug, Clone)]
pub struct MatchEngine {
    table: Arc<EquivalenceTable>,
}

impl MatchEngine {
    pub fn new(table: Arc<EquivalenceTable>) -> Self {
        Self { table }
    }
}

impl MatchScorer for MatchEngine {
    fn score(
        &self,
        profile: &CandidateProfile,
        job: &JobRequirement,
    ) -> Result<MatchResult, MatchError> {
        compute_match(profile, job, &self.table)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Totals are rounded to six places before banding; sums of thirds drift by an ulp.
const BAND_PRECISION: f64 = 1e6;

/// `< 40` red, `40..=75` yellow, `> 75` green.
pub fn color_band(total: f64) -> ColorBand {
    let total = (total * BAND_PRECISION).round() / BAND_PRECISION;
    if total < YELLOW_FLOOR {
        ColorBand::Red
    } else if total <= GREEN_FLOOR {
        ColorBand::Yellow
    } else {
        ColorBand::Green
    }
}

fn validate(job: &JobRequirement) -> Result<(), MatchError> {
    if job.title.trim().is_empty() {
        return Err(MatchError::MissingInput { field: "title" });
    }
    if job.company_name.trim().is_empty() {
        return Err(MatchError::MissingInput {
            field: "company_name",
        });
    }
    Ok(())
}

/// Job keywords split into tiers. A term listed in both tiers stays required only.
struct JobTerms {
    required: Vec<String>,
    preferred: Vec<String>,
    all: Vec<String>,
}

impl JobTerms {
    fn from_job(job: &JobRequirement) -> Self {
        let required = normalize_ordered(&job.required_skills);
        let preferred: Vec<String> = normalize_ordered(&job.preferred_skills)
            .into_iter()
            .filter(|t| !required.contains(t))
            .collect();
        let all = required.iter().chain(preferred.iter()).cloned().collect();

        Self {
            required,
            preferred,
            all,
        }
    }
}

/// Partitions every job keyword into direct, transferable, or gap.
pub fn build_gap_analysis(
    required: &[String],
    preferred: &[String],
    candidate_terms: &BTreeSet<String>,
    table: &EquivalenceTable,
) -> GapAnalysisResult {
    let mut result = GapAnalysisResult::default();

    // Required first, so priorities come out tiered in listing order.
    for term in required.iter().chain(preferred.iter()) {
        match table.resolve(term, candidate_terms) {
            Resolution::Direct => {
                result.direct_matches.insert(term.clone());
            }
            Resolution::Transferable(m) => result.transferable_matches.push(m),
            Resolution::Absent => {
                result.gaps.insert(term.clone());
                result.priorities.push(term.clone());
            }
        }
    }

    result
}

fn compute_match(
    profile: &CandidateProfile,
    job: &JobRequirement,
    table: &EquivalenceTable,
) -> Result<MatchResult, MatchError> {
    validate(job)?;

    let terms = JobTerms::from_job(job);
    let candidate_terms = normalize(
        profile
            .technical_skills
            .iter()
            .chain(profile.soft_skills.iter()),
    );
    let descriptions = normalize_descriptions(
        profile
            .experience_entries
            .iter()
            .map(|e| e.description.as_str()),
    );

    let keyword = score_keywords(&terms.all, &candidate_terms, &descriptions, table);
    let experience = score_experience(
        &profile.experience_entries,
        &descriptions,
        job.seniority_level,
        job.min_years,
        &terms.all,
        table,
    );
    let skills = score_skills(&terms.required, &terms.preferred, &candidate_terms, table);
    let education = score_education(&profile.education_entries, job.required_education_level);

    let total_score = keyword.score + experience.score + skills.score + education;
    let band = color_band(total_score);

    let gap_analysis =
        build_gap_analysis(&terms.required, &terms.preferred, &candidate_terms, table);

    let components = ComponentScores {
        keyword: keyword.score,
        experience: experience.score,
        skills: skills.score,
        education,
    };
    let recommendations = generate_recommendations(band, &components, &gap_analysis.priorities);

    debug!(
        "Match scored: total={:.2} band={:?} keywords={}/{} level={:.2} relevance={:.2} \
         required={:.2} preferred={:.2} matched={} gaps={}",
        total_score,
        band,
        keyword.matched,
        keyword.total,
        experience.level_score,
        experience.relevance_score,
        skills.required_component,
        skills.preferred_component,
        gap_analysis.matched_count(),
        gap_analysis.gaps.len()
    );

    let tone = classify_tone(job);

    Ok(MatchResult {
        breakdown: MatchScoreBreakdown {
            keyword_match: keyword.score,
            experience_match: experience.score,
            skills_match: skills.score,
            education_match: education,
            total_score,
            color_band: band,
            recommendations,
        },
        gap_analysis,
        tone,
        tone_guidance: tone_guidance(tone),
        experience_alignment: experience.alignment,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
