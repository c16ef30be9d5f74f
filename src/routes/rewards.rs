// SPDX-License-Identifier: MIT

//! Reward catalog and redemption routes.

use crate::error::{AppError, Result};
use crate::models::Reward;
use crate::routes::require_field;
use crate::routes::users::RedeemedRewardView;
use crate::services::RedemptionService;
use crate::time_utils::format_utc_rfc3339;
use crate::AppState;
use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/rewards", get(get_rewards))
        .route("/api/rewards/redeem", post(redeem_reward))
        .route("/api/rewards/user", get(get_user_rewards))
}

#[derive(Serialize)]
pub struct RewardsResponse {
    pub rewards: Vec<Reward>,
}

/// List the reward catalog.
async fn get_rewards(State(state): State<Arc<AppState>>) -> Result<Json<RewardsResponse>> {
    let rewards = state.db.list_rewards().await?;
    Ok(Json(RewardsResponse { rewards }))
}

#[derive(Deserialize)]
struct RedeemRequest {
    user_id: Option<String>,
    reward_name: Option<String>,
}

#[derive(Serialize)]
pub struct RedeemResponse {
    pub message: String,
    pub remaining_points: i64,
}

/// Redeem a reward, debiting the user's total points.
async fn redeem_reward(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RedeemRequest>,
) -> Result<Json<RedeemResponse>> {
    let user_id = require_field(payload.user_id.as_deref(), "user_id")?;
    let reward_name = require_field(payload.reward_name.as_deref(), "reward_name")?;

    let service = RedemptionService::new(state.db.clone());
    let redeemed = service.redeem(user_id, reward_name).await?;

    Ok(Json(RedeemResponse {
        message: format!("Successfully redeemed {}", redeemed.reward_name),
        remaining_points: redeemed.remaining_points,
    }))
}

#[derive(Deserialize)]
struct UserRewardsQuery {
    user_id: Option<String>,
}

#[derive(Serialize)]
pub struct UserRewardsResponse {
    pub user_id: String,
    pub redeemed_rewards: Vec<RedeemedRewardView>,
}

/// Get the rewards redeemed by a user.
async fn get_user_rewards(
    State(state): State<Arc<AppState>>,
    Query(params): Query<UserRewardsQuery>,
) -> Result<Json<UserRewardsResponse>> {
    let user_id = require_field(params.user_id.as_deref(), "user_id")?;

    let user = state
        .db
        .get_user(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;

    let redeemed_rewards = user
        .redeemed_rewards
        .into_iter()
        .map(|r| RedeemedRewardView {
            reward_name: r.reward_name,
            points_spent: r.points_spent,
            redeemed_at: format_utc_rfc3339(r.redeemed_at),
        })
        .collect();

    Ok(Json(UserRewardsResponse {
        user_id: user.user_id,
        redeemed_rewards,
    }))
}
