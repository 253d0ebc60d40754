//! Input records, output value objects, and the ordinal enums shared by the scorers.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::matching::tone::{EmployerTone, ToneGuidance};

// ────────────────────────────────────────────────────────────────────────────
// Ordinal enums
// ────────────────────────────────────────────────────────────────────────────

/// Seniority requested by a job, or derived from a candidate's experience.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeniorityLevel {
    #[default]
    Unspecified,
    Junior,
    Mid,
    Senior,
}

impl SeniorityLevel {
    /// unspecified=0, junior=1, mid=2, senior=3
    pub fn ordinal(self) -> u8 {
        match self {
            SeniorityLevel::Unspecified => 0,
            SeniorityLevel::Junior => 1,
            SeniorityLevel::Mid => 2,
            SeniorityLevel::Senior => 3,
        }
    }
}

/// Credential level, ordered from `None` up to `Doctorate`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    #[default]
    None,
    Diploma,
    Bachelor,
    Master,
    Doctorate,
}

impl EducationLevel {
    /// none=0, diploma=1, bachelor=2, master=3, doctorate=4
    pub fn ordinal(self) -> u8 {
        match self {
            EducationLevel::None => 0,
            EducationLevel::Diploma => 1,
            EducationLevel::Bachelor => 2,
            EducationLevel::Master => 3,
            EducationLevel::Doctorate => 4,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Inputs
// ────────────────────────────────────────────────────────────────────────────

/// A structured job posting, produced upstream by the extraction step.
///
/// Skill lists keep their listing order; `priorities` ranking depends on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRequirement {
    pub title: String,
    pub company_name: String,
    #[serde(default)]
    pub industry: Option<String>,
    /// Extracted job-description text. Only read by the tone classifier.
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub preferred_skills: Vec<String>,
    pub seniority_level: SeniorityLevel,
    #[serde(default)]
    pub min_years: Option<f64>,
    pub required_education_level: EducationLevel,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub description: String,
    pub duration_years: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationEntry {
    pub level: EducationLevel,
}

/// A candidate's structured profile as supplied by the profile store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(default)]
    pub technical_skills: Vec<String>,
    #[serde(default)]
    pub soft_skills: Vec<String>,
    #[serde(default)]
    pub experience_entries: Vec<ExperienceEntry>,
    #[serde(default)]
    pub education_entries: Vec<EducationEntry>,
}

// ────────────────────────────────────────────────────────────────────────────
// Outputs
// ────────────────────────────────────────────────────────────────────────────

/// Three-tier qualitative label derived from `total_score`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorBand {
    Red,
    Yellow,
    Green,
}

/// Per-dimension scores. `total_score` is the exact sum of the four components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchScoreBreakdown {
    pub keyword_match: f64,    // 0 – 40
    pub experience_match: f64, // 0 – 30
    pub skills_match: f64,     // 0 – 20
    pub education_match: f64,  // 0 – 10
    pub total_score: f64,      // 0 – 100
    pub color_band: ColorBand,
    pub recommendations: Vec<String>,
}

/// A job skill satisfied through an equivalence-table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferableMatch {
    pub job_skill: String,
    pub candidate_skill: String,
    pub suggestion_text: String,
}

/// Partition of the job's normalized keywords into direct, transferable, and gap.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GapAnalysisResult {
    pub direct_matches: BTreeSet<String>,
    pub transferable_matches: Vec<TransferableMatch>,
    pub gaps: BTreeSet<String>,
    /// Gaps ranked required-tier first, listing order within each tier.
    pub priorities: Vec<String>,
}

impl GapAnalysisResult {
    /// Number of job keywords satisfied directly or transferably.
    pub fn matched_count(&self) -> usize {
        self.direct_matches.len() + self.transferable_matches.len()
    }
}

/// How the candidate's accumulated experience lines up with the job's seniority.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceAlignment {
    pub candidate_years: f64,
    pub candidate_level: SeniorityLevel,
    pub job_level: SeniorityLevel,
    /// `None` when the job sets no minimum.
    pub meets_min_years: Option<bool>,
}

/// Full match payload: score breakdown, gap analysis, and tone annotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub breakdown: MatchScoreBreakdown,
    pub gap_analysis: GapAnalysisResult,
    pub tone: EmployerTone,
    pub tone_guidance: ToneGuidance,
    pub experience_alignment: ExperienceAlignment,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seniority_ordinals() {
        assert_eq!(SeniorityLevel::Unspecified.ordinal(), 0);
        assert_eq!(SeniorityLevel::Junior.ordinal(), 1);
        assert_eq!(SeniorityLevel::Mid.ordinal(), 2);
        assert_eq!(SeniorityLevel::Senior.ordinal(), 3);
    }

    #[test]
    fn test_education_ordinals_are_ordered() {
        assert!(EducationLevel::Doctorate > EducationLevel::Master);
        assert_eq!(EducationLevel::None.ordinal(), 0);
        assert_eq!(EducationLevel::Doctorate.ordinal(), 4);
    }

    #[test]
    fn test_job_requirement_deserializes_snake_case_enums() {
        let json = r#"{
            "title": "Backend Engineer",
            "company_name": "Paystack",
            "required_skills": ["Python", "Django"],
            "seniority_level": "mid",
            "min_years": 2,
            "required_education_level": "bachelor"
        }"#;

        let job: JobRequirement = serde_json::from_str(json).unwrap();
        assert_eq!(job.seniority_level, SeniorityLevel::Mid);
        assert_eq!(job.required_education_level, EducationLevel::Bachelor);
        assert_eq!(job.min_years, Some(2.0));
        assert!(job.preferred_skills.is_empty());
        assert!(job.industry.is_none());
    }

    #[test]
    fn test_job_requirement_missing_seniority_is_rejected() {
        let json = r#"{
            "title": "Backend Engineer",
            "company_name": "Paystack",
            "required_education_level": "none"
        }"#;
        assert!(serde_json::from_str::<JobRequirement>(json).is_err());
    }

    #[test]
    fn test_color_band_serializes_lowercase() {
        let json = serde_json::to_string(&ColorBand::Yellow).unwrap();
        assert_eq!(json, r#""yellow""#);
    }
}
