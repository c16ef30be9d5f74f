// SPDX-License-Identifier: MIT

//! Challenge catalog and completion routes.

use crate::error::Result;
use crate::models::Challenge;
use crate::routes::require_field;
use crate::services::PointLedger;
use crate::AppState;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/challenges", get(get_challenges))
        .route("/api/challenges/complete", post(complete_challenge))
}

#[derive(Serialize)]
pub struct ChallengesResponse {
    pub challenges: Vec<Challenge>,
}

/// List the challenge catalog.
async fn get_challenges(State(state): State<Arc<AppState>>) -> Result<Json<ChallengesResponse>> {
    let challenges = state.db.list_challenges().await?;
    Ok(Json(ChallengesResponse { challenges }))
}

#[derive(Deserialize)]
struct CompleteChallengeRequest {
    user_id: Option<String>,
    challenge_id: Option<String>,
}

#[derive(Serialize)]
pub struct CompleteChallengeResponse {
    pub message: String,
    pub points_earned: i64,
    pub current_streak: u32,
    pub total_points: i64,
}

/// Complete a challenge, crediting base points plus the streak bonus.
///
/// A given challenge can be completed at most once per UTC calendar day.
async fn complete_challenge(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CompleteChallengeRequest>,
) -> Result<Json<CompleteChallengeResponse>> {
    let user_id = require_field(payload.user_id.as_deref(), "user_id")?;
    let challenge_id = require_field(payload.challenge_id.as_deref(), "challenge_id")?;

    let ledger = PointLedger::new(state.db.clone());
    let applied = ledger.apply_challenge(user_id, challenge_id).await?;

    Ok(Json(CompleteChallengeResponse {
        message: "Challenge completed successfully".to_string(),
        points_earned: applied.points_earned,
        current_streak: applied.current_streak,
        total_points: applied.total_points,
    }))
}
