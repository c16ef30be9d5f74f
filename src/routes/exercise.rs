// SPDX-License-Identifier: MIT

//! Exercise logging route.

use crate::error::Result;
use crate::routes::require_field;
use crate::services::PointLedger;
use crate::AppState;
use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/exercise/log", post(log_exercise))
}

#[derive(Deserialize)]
struct LogExerciseRequest {
    user_id: Option<String>,
    exercise_type: Option<String>,
    /// Distance in miles, laps, 500m units, or time in minutes
    value: Option<f64>,
}

#[derive(Serialize)]
pub struct LogExerciseResponse {
    pub message: String,
    pub exercise: String,
    pub value: f64,
    pub points_earned: i64,
    pub total_points: i64,
}

/// Log an exercise and credit the earned points.
async fn log_exercise(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LogExerciseRequest>,
) -> Result<Json<LogExerciseResponse>> {
    let user_id = require_field(payload.user_id.as_deref(), "user_id")?;
    let exercise_type = require_field(payload.exercise_type.as_deref(), "exercise_type")?;
    let value = payload.value.ok_or_else(|| {
        crate::error::AppError::Validation("Missing field: value".to_string())
    })?;

    let ledger = PointLedger::new(state.db.clone());
    let applied = ledger.apply_exercise(user_id, exercise_type, value).await?;

    Ok(Json(LogExerciseResponse {
        message: "Exercise logged successfully".to_string(),
        exercise: applied.exercise_type,
        value: applied.value,
        points_earned: applied.points_earned,
        total_points: applied.total_points,
    }))
}
