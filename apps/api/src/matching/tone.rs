//! Tone classification: tags the employer's register for the rewriting step.
//!
//! Not part of the numeric score. Rules are scanned in listed order and the first
//! one with a keyword hit wins, so energetic rules must stay ahead of formal ones:
//! a fintech that mentions "banking" is still a startup.

use serde::{Deserialize, Serialize};

use crate::matching::models::JobRequirement;
use crate::matching::normalizer::normalize_text;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployerTone {
    Energetic,
    Formal,
    #[default]
    Professional,
}

/// A tagged keyword list. Matching is case-insensitive substring search.
pub struct ToneRule {
    pub tone: EmployerTone,
    pub keywords: &'static [&'static str],
}

pub const TONE_RULES: &[ToneRule] = &[
    ToneRule {
        tone: EmployerTone::Energetic,
        keywords: &[
            "startup",
            "start-up",
            "fintech",
            "scale-up",
            "scaleup",
            "seed-stage",
            "series a",
            "series b",
            "fast-paced",
            "hustle",
            "disrupt",
        ],
    },
    ToneRule {
        tone: EmployerTone::Formal,
        keywords: &[
            "parastatal",
            "ministry",
            "government",
            "federal",
            "commission",
            "bank",
            "law firm",
            "chambers",
            "solicitors",
            "legal practice",
            "insurance",
        ],
    },
    ToneRule {
        tone: EmployerTone::Professional,
        keywords: &["consulting", "consultancy", "advisory", "enterprise", "agency"],
    },
];

/// Register and phrasing hints handed to the rewriting step with the tone tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToneGuidance {
    pub register: String,
    pub preferred_phrasing: Vec<String>,
    pub avoid_phrasing: Vec<String>,
}

/// Classifies employer tone from company name, industry, and description text.
pub fn classify_tone(job: &JobRequirement) -> EmployerTone {
    let haystack = normalize_text(
        &[
            Some(job.company_name.as_str()),
            job.industry.as_deref(),
            job.description.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" "),
    );

    classify_text(&haystack)
}

/// Rule scan over already-normalized text.
pub fn classify_text(haystack: &str) -> EmployerTone {
    TONE_RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| haystack.contains(kw)))
        .map(|rule| rule.tone)
        .unwrap_or_default()
}

const ENERGETIC_PREFERRED: &[&str] = &["Built", "Shipped", "Launched", "Grew", "Owned"];
const ENERGETIC_AVOID: &[&str] = &["was responsible for", "duties included", "assisted with"];
const FORMAL_PREFERRED: &[&str] = &[
    "Administered",
    "Ensured compliance with",
    "Prepared",
    "Coordinated",
    "Managed",
];
const FORMAL_AVOID: &[&str] = &["crushed", "hacked", "rockstar", "moved fast"];
const PROFESSIONAL_PREFERRED: &[&str] = &["Delivered", "Led", "Improved", "Implemented", "Supported"];
const PROFESSIONAL_AVOID: &[&str] = &["rockstar", "ninja", "duties included"];

/// Returns phrasing hints for the detected tone.
pub fn tone_guidance(tone: EmployerTone) -> ToneGuidance {
    let (register, preferred, avoid) = match tone {
        EmployerTone::Energetic => ("energetic", ENERGETIC_PREFERRED, ENERGETIC_AVOID),
        EmployerTone::Formal => ("formal", FORMAL_PREFERRED, FORMAL_AVOID),
        EmployerTone::Professional => (
            "professional",
            PROFESSIONAL_PREFERRED,
            PROFESSIONAL_AVOID,
        ),
    };

    ToneGuidance {
        register: register.to_string(),
        preferred_phrasing: preferred.iter().map(|s| s.to_string()).collect(),
        avoid_phrasing: avoid.iter().map(|s| s.to_string()).collect(),
    }
}
