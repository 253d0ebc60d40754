//! Skills coverage: the 20-point component (15 required, 5 preferred).

use std::collections::BTreeSet;

use crate::matching::equivalence::EquivalenceTable;

pub const SKILLS_MAX: f64 = 20.0;
const REQUIRED_MAX: f64 = 15.0;
const PREFERRED_MAX: f64 = 5.0;

#[derive(Debug, Clone, PartialEq)]
pub struct SkillsScore {
    pub score: f64,
    pub required_component: f64,
    pub preferred_component: f64,
}

/// Scores one tier: `max * matched / len`, or `max` for an empty tier.
fn coverage(
    skills: &[String],
    candidate_terms: &BTreeSet<String>,
    table: &EquivalenceTable,
    max: f64,
) -> f64 {
    if skills.is_empty() {
        return max;
    }
    let matched = skills
        .iter()
        .filter(|s| table.resolve(s, candidate_terms).is_match())
        .count();
    max * matched as f64 / skills.len() as f64
}

pub fn score_skills(
    required: &[String],
    preferred: &[String],
    candidate_terms: &BTreeSet<String>,
    table: &EquivalenceTable,
) -> SkillsScore {
    let required_component = coverage(required, candidate_terms, table, REQUIRED_MAX);
    let preferred_component = coverage(preferred, candidate_terms, table, PREFERRED_MAX);

    SkillsScore {
        score: (required_component + preferred_component).min(SKILLS_MAX),
        required_component,
        preferred_component,
    }
}
