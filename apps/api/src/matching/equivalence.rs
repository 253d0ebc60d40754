//! Skill equivalence: the curated lookup table and the resolver that consults it.
//!
//! The table is loaded once at startup through an [`EquivalenceSource`] and then
//! shared read-only (`Arc<EquivalenceTable>`) by every scoring call. Nothing here
//! is global: tests build their own fixture tables and inject them.

use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::matching::models::TransferableMatch;
use crate::matching::normalizer::normalize_term;

/// Used for rows that carry no suggestion template of their own.
pub const DEFAULT_SUGGESTION_TEMPLATE: &str =
    "Your {candidate_skill} experience transfers to {job_skill}. \
    Highlight the overlap and note how quickly you can ramp up.";

// ────────────────────────────────────────────────────────────────────────────
// Table rows
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquivalenceLabel {
    /// Curated alias, e.g. `js` for `javascript`.
    Direct,
    /// Related skill that can stand in for the required one.
    Transferable,
}

/// One curated row: `candidate_term_or_category` satisfies `required_term`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillEquivalenceEntry {
    pub required_term: String,
    pub candidate_term_or_category: String,
    pub label: EquivalenceLabel,
    /// Template with `{job_skill}` / `{candidate_skill}` placeholders.
    #[serde(default)]
    pub suggestion: Option<String>,
}

/// On-disk layout of a table file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EquivalenceTableFile {
    #[serde(default)]
    pub categories: BTreeMap<String, Vec<String>>,
    pub entries: Vec<SkillEquivalenceEntry>,
}

#[derive(Debug, Error)]
pub enum EquivalenceError {
    #[error("failed to read equivalence table {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse equivalence table {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid equivalence row {index}: {reason}")]
    InvalidRow { index: usize, reason: String },
}

// ────────────────────────────────────────────────────────────────────────────
// Resolver
// ────────────────────────────────────────────────────────────────────────────

/// Outcome of resolving one job term against the candidate's skills.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Direct,
    Transferable(TransferableMatch),
    Absent,
}

impl Resolution {
    pub fn is_match(&self) -> bool {
        !matches!(self, Resolution::Absent)
    }
}

/// Normalized, read-only equivalence table.
#[derive(Debug, Clone, Default)]
pub struct EquivalenceTable {
    entries: Vec<SkillEquivalenceEntry>,
    categories: BTreeMap<String, BTreeSet<String>>,
}

impl EquivalenceTable {
    /// Builds a table, normalizing every term. Rows keep their order: it decides
    /// which row wins when several could match.
    pub fn new(
        entries: Vec<SkillEquivalenceEntry>,
        categories: BTreeMap<String, Vec<String>>,
    ) -> Result<Self, EquivalenceError> {
        let categories = categories
            .into_iter()
            .filter_map(|(name, members)| {
                let name = normalize_term(&name)?;
                let members: BTreeSet<String> =
                    members.iter().filter_map(|m| normalize_term(m)).collect();
                Some((name, members))
            })
            .collect();

        let mut normalized = Vec::with_capacity(entries.len());
        for (index, entry) in entries.into_iter().enumerate() {
            let required_term =
                normalize_term(&entry.required_term).ok_or_else(|| EquivalenceError::InvalidRow {
                    index,
                    reason: "required_term is blank".to_string(),
                })?;
            let candidate = normalize_term(&entry.candidate_term_or_category).ok_or_else(|| {
                EquivalenceError::InvalidRow {
                    index,
                    reason: "candidate_term_or_category is blank".to_string(),
                }
            })?;
            normalized.push(SkillEquivalenceEntry {
                required_term,
                candidate_term_or_category: candidate,
                label: entry.label,
                suggestion: entry.suggestion,
            });
        }

        Ok(Self {
            entries: normalized,
            categories,
        })
    }

    pub fn from_file_layout(file: EquivalenceTableFile) -> Result<Self, EquivalenceError> {
        Self::new(file.entries, file.categories)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Candidate terms a row stands for: the category's members, or the term itself.
    fn row_terms<'a>(&'a self, entry: &'a SkillEquivalenceEntry) -> Vec<&'a str> {
        match self.categories.get(&entry.candidate_term_or_category) {
            Some(members) => members.iter().map(String::as_str).collect(),
            None => vec![entry.candidate_term_or_category.as_str()],
        }
    }

    /// Every candidate-side form the table offers for `required_term`, in row order.
    /// The experience-description substring check looks for these.
    pub fn candidate_forms(&self, required_term: &str) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| e.required_term == required_term)
            .flat_map(|e| self.row_terms(e))
            .collect()
    }

    /// Resolves `required_term` against the candidate's normalized skills.
    ///
    /// First match wins:
    /// 1. verbatim presence → `Direct`
    /// 2. first table row for the term whose candidate side intersects → the row's label
    /// 3. otherwise `Absent`
    pub fn resolve(&self, required_term: &str, candidate_terms: &BTreeSet<String>) -> Resolution {
        if candidate_terms.contains(required_term) {
            return Resolution::Direct;
        }

        for entry in self.entries.iter().filter(|e| e.required_term == required_term) {
            let hit = self
                .row_terms(entry)
                .into_iter()
                .find(|term| candidate_terms.contains(*term));

            if let Some(candidate_skill) = hit {
                debug!(
                    "Equivalence row matched: {} <- {} ({:?})",
                    required_term, candidate_skill, entry.label
                );
                return match entry.label {
                    EquivalenceLabel::Direct => Resolution::Direct,
                    EquivalenceLabel::Transferable => {
                        Resolution::Transferable(TransferableMatch {
                            job_skill: required_term.to_string(),
                            candidate_skill: candidate_skill.to_string(),
                            suggestion_text: render_suggestion(
                                entry.suggestion.as_deref(),
                                required_term,
                                candidate_skill,
                            ),
                        })
                    }
                };
            }
        }

        Resolution::Absent
    }

    /// True when `term` or any table form of it occurs inside one of `texts`.
    /// `texts` must already be normalized with `normalize_descriptions`.
    pub fn appears_in_any(&self, term: &str, texts: &[String]) -> bool {
        if texts.is_empty() {
            return false;
        }
        let forms = self.candidate_forms(term);
        texts.iter().any(|text| {
            text.contains(term) || forms.iter().any(|form| text.contains(*form))
        })
    }
}

fn render_suggestion(template: Option<&str>, job_skill: &str, candidate_skill: &str) -> String {
    template
        .unwrap_or(DEFAULT_SUGGESTION_TEMPLATE)
        .replace("{job_skill}", job_skill)
        .replace("{candidate_skill}", candidate_skill)
}

// ────────────────────────────────────────────────────────────────────────────
// Sources
// ────────────────────────────────────────────────────────────────────────────

/// Supplies the equivalence table at startup. Implement this to load the table
/// from somewhere new without touching the engine.
#[async_trait]
pub trait EquivalenceSource: Send + Sync {
    async fn load(&self) -> Result<EquivalenceTable, EquivalenceError>;

    /// Short label for startup logs.
    fn describe(&self) -> String;
}

/// The curated table compiled into the binary.
pub struct BuiltinEquivalenceSource;

#[async_trait]
impl EquivalenceSource for BuiltinEquivalenceSource {
    async fn load(&self) -> Result<EquivalenceTable, EquivalenceError> {
        builtin_table()
    }

    fn describe(&self) -> String {
        "builtin".to_string()
    }
}

/// A JSON table file in the [`EquivalenceTableFile`] layout.
pub struct FileEquivalenceSource {
    pub path: PathBuf,
}

impl FileEquivalenceSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl EquivalenceSource for FileEquivalenceSource {
    async fn load(&self) -> Result<EquivalenceTable, EquivalenceError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| EquivalenceError::Io {
                path: self.path.clone(),
                source,
            })?;

        let file: EquivalenceTableFile =
            serde_json::from_str(&raw).map_err(|source| EquivalenceError::Parse {
                path: self.path.clone(),
                source,
            })?;

        let table = EquivalenceTable::from_file_layout(file)?;
        info!(
            "Loaded {} equivalence rows from {}",
            table.len(),
            self.path.display()
        );
        Ok(table)
    }

    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Builtin table
// ────────────────────────────────────────────────────────────────────────────

const BUILTIN_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "accounting software",
        &["quickbooks", "xero", "sage", "tally", "peachtree", "zoho books"],
    ),
    ("cloud platforms", &["aws", "azure", "gcp", "google cloud"]),
    (
        "frontend frameworks",
        &["react", "vue", "angular", "svelte", "next.js"],
    ),
    (
        "relational databases",
        &["postgresql", "mysql", "sql server", "oracle", "sqlite", "mariadb"],
    ),
];

/// (required_term, candidate_term_or_category, label, suggestion)
const BUILTIN_ROWS: &[(&str, &str, EquivalenceLabel, Option<&str>)] = &[
    // Aliases
    ("javascript", "js", EquivalenceLabel::Direct, None),
    ("typescript", "ts", EquivalenceLabel::Direct, None),
    ("postgresql", "postgres", EquivalenceLabel::Direct, None),
    ("kubernetes", "k8s", EquivalenceLabel::Direct, None),
    ("microsoft excel", "excel", EquivalenceLabel::Direct, None),
    ("excel", "microsoft excel", EquivalenceLabel::Direct, None),
    ("google cloud", "gcp", EquivalenceLabel::Direct, None),
    // Related tools
    (
        "quickbooks",
        "accounting software",
        EquivalenceLabel::Transferable,
        Some("You already keep books in {candidate_skill}; frame it as ready-to-use {job_skill} experience."),
    ),
    (
        "xero",
        "accounting software",
        EquivalenceLabel::Transferable,
        Some("You already keep books in {candidate_skill}; frame it as ready-to-use {job_skill} experience."),
    ),
    ("sage", "accounting software", EquivalenceLabel::Transferable, None),
    ("aws", "cloud platforms", EquivalenceLabel::Transferable, None),
    ("azure", "cloud platforms", EquivalenceLabel::Transferable, None),
    ("gcp", "cloud platforms", EquivalenceLabel::Transferable, None),
    ("react", "frontend frameworks", EquivalenceLabel::Transferable, None),
    ("vue", "frontend frameworks", EquivalenceLabel::Transferable, None),
    ("angular", "frontend frameworks", EquivalenceLabel::Transferable, None),
    ("postgresql", "relational databases", EquivalenceLabel::Transferable, None),
    ("mysql", "relational databases", EquivalenceLabel::Transferable, None),
    ("sql", "relational databases", EquivalenceLabel::Transferable, None),
    ("excel", "google sheets", EquivalenceLabel::Transferable, None),
    ("google sheets", "excel", EquivalenceLabel::Transferable, None),
    ("power bi", "tableau", EquivalenceLabel::Transferable, None),
    ("tableau", "power bi", EquivalenceLabel::Transferable, None),
    ("django", "flask", EquivalenceLabel::Transferable, None),
    ("django", "fastapi", EquivalenceLabel::Transferable, None),
    ("flask", "django", EquivalenceLabel::Transferable, None),
    ("java", "kotlin", EquivalenceLabel::Transferable, None),
    ("kotlin", "java", EquivalenceLabel::Transferable, None),
    (
        "customer service",
        "customer support",
        EquivalenceLabel::Transferable,
        Some("Present your {candidate_skill} work in {job_skill} language: resolution times, satisfaction, volume."),
    ),
    (
        "team leadership",
        "mentoring",
        EquivalenceLabel::Transferable,
        Some("Mentoring counts toward {job_skill}; quantify how many people you guided and the outcome."),
    ),
];

/// Builds the curated default table.
pub fn builtin_table() -> Result<EquivalenceTable, EquivalenceError> {
    let entries = BUILTIN_ROWS
        .iter()
        .map(|(required, candidate, label, suggestion)| SkillEquivalenceEntry {
            required_term: required.to_string(),
            candidate_term_or_category: candidate.to_string(),
            label: *label,
            suggestion: suggestion.map(str::to_string),
        })
        .collect();

    let categories = BUILTIN_CATEGORIES
        .iter()
        .map(|(name, members)| {
            (
                name.to_string(),
                members.iter().map(|m| m.to_string()).collect(),
            )
        })
        .collect();

    EquivalenceTable::new(entries, categories)
}
