//! Axum route handlers for the Match API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::{AppError, AppJson};
use crate::matching::models::{CandidateProfile, JobRequirement, MatchResult, MatchScoreBreakdown};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Serialize)]
pub struct MatchRequest {
    pub profile: CandidateProfile,
    pub job: JobRequirement,
}

/// Caller-side checks the engine does not make: numeric fields must be finite
/// and non-negative.
fn validate_request(request: &MatchRequest) -> Result<(), AppError> {
    for (i, entry) in request.profile.experience_entries.iter().enumerate() {
        if !entry.duration_years.is_finite() || entry.duration_years < 0.0 {
            return Err(AppError::Validation(format!(
                "experience_entries[{i}].duration_years must be a non-negative number"
            )));
        }
    }
    if let Some(min) = request.job.min_years {
        if !min.is_finite() || min < 0.0 {
            return Err(AppError::Validation(
                "min_years must be a non-negative number".to_string(),
            ));
        }
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/match
///
/// Full match: score breakdown, gap analysis, and employer tone.
pub async fn handle_match(
    State(state): State<AppState>,
    AppJson(request): AppJson<MatchRequest>,
) -> Result<Json<MatchResult>, AppError> {
    validate_request(&request)?;
    let result = state.scorer.score(&request.profile, &request.job)?;

    info!(
        "Match for '{}' at '{}': {:.1}/100 ({:?}), {} gaps",
        request.job.title,
        request.job.company_name,
        result.breakdown.total_score,
        result.breakdown.color_band,
        result.gap_analysis.gaps.len()
    );

    Ok(Json(result))
}

/// POST /api/v1/match/score
///
/// Score breakdown only, for the UI meter.
pub async fn handle_score(
    State(state): State<AppState>,
    AppJson(request): AppJson<MatchRequest>,
) -> Result<Json<MatchScoreBreakdown>, AppError> {
    validate_request(&request)?;
    let breakdown = state.scorer.score_only(&request.profile, &request.job)?;
    Ok(Json(breakdown))
}
