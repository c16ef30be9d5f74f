// SPDX-License-Identifier: MIT

//! User account routes: registration, login, profile updates, points.

use crate::error::{AppError, Result};
use crate::models::User;
use crate::routes::require_field;
use crate::time_utils::format_utc_rfc3339;
use crate::AppState;
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/register", post(register))
        .route("/api/login", post(login))
        .route("/api/users/update", put(update_profile))
        .route("/api/users/points", get(get_user_points))
}

// ─── Registration ────────────────────────────────────────────

#[derive(Deserialize)]
struct RegisterRequest {
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
    company_id: Option<String>,
    /// Optional backdated join timestamp (RFC3339)
    joined_date: Option<String>,
}

#[derive(Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user_id: String,
}

/// Register a new user with zeroed balances.
async fn register(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>)> {
    let name = require_field(payload.name.as_deref(), "name")?;
    let email = require_field(payload.email.as_deref(), "email")?;
    let password = require_field(payload.password.as_deref(), "password")?;

    if state.db.find_user_by_email(email).await?.is_some() {
        return Err(AppError::Conflict(
            "User with this email already exists".to_string(),
        ));
    }

    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {}", e)))?
        .to_string();

    let joined = match payload.joined_date.as_deref() {
        Some(raw) => chrono::DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.with_timezone(&chrono::Utc))
            .map_err(|_| {
                AppError::Validation("Invalid 'joined_date': must be RFC3339 datetime".to_string())
            })?,
        None => chrono::Utc::now(),
    };

    let user = User::new(
        name.to_string(),
        email.to_string(),
        password_hash,
        payload.company_id,
        joined,
    );

    state.db.upsert_user(&user).await?;

    tracing::info!(user_id = %user.user_id, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered successfully".to_string(),
            user_id: user.user_id,
        }),
    ))
}

// ─── Login ───────────────────────────────────────────────────

#[derive(Deserialize)]
struct LoginRequest {
    email: Option<String>,
    password: Option<String>,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub user_id: String,
}

/// Verify credentials and return the user's ID.
///
/// Session/token management is out of scope; callers carry the resolved
/// user ID in subsequent requests.
async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let email = require_field(payload.email.as_deref(), "email")?;
    let password = require_field(payload.password.as_deref(), "password")?;

    // Same generic rejection for unknown email and bad password
    let user = state
        .db
        .find_user_by_email(email)
        .await?
        .ok_or(AppError::Unauthorized)?;

    let parsed_hash = PasswordHash::new(&user.password_hash)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Stored password hash invalid: {}", e)))?;

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AppError::Unauthorized)?;

    Ok(Json(LoginResponse {
        message: "User logged in successfully".to_string(),
        user_id: user.user_id,
    }))
}

// ─── Profile Update ──────────────────────────────────────────

#[derive(Deserialize)]
struct UpdateProfileRequest {
    user_id: Option<String>,
    name: Option<String>,
    email: Option<String>,
    team_id: Option<String>,
    user_avatar: Option<String>,
    company_id: Option<String>,
}

#[derive(Serialize)]
pub struct UpdateProfileResponse {
    pub message: String,
}

/// Update the allowlisted profile fields.
async fn update_profile(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<Json<UpdateProfileResponse>> {
    let user_id = payload.user_id.as_deref().ok_or(AppError::Unauthorized)?;

    // Email uniqueness check excludes the user being updated
    if let Some(new_email) = payload.email.as_deref() {
        if let Some(existing) = state.db.find_user_by_email(new_email).await? {
            if existing.user_id != user_id {
                return Err(AppError::Conflict("Email already in use".to_string()));
            }
        }
    }

    state
        .db
        .mutate_user_atomic(user_id, |user| {
            if let Some(name) = payload.name {
                user.name = name;
            }
            if let Some(email) = payload.email {
                user.email = email;
            }
            if let Some(team_id) = payload.team_id {
                user.team_id = Some(team_id);
            }
            if let Some(user_avatar) = payload.user_avatar {
                user.user_avatar = Some(user_avatar);
            }
            if let Some(company_id) = payload.company_id {
                user.company_id = Some(company_id);
            }
            user.updated_at = chrono::Utc::now();
            Ok(())
        })
        .await?;

    Ok(Json(UpdateProfileResponse {
        message: "Profile updated successfully".to_string(),
    }))
}

// ─── Points ──────────────────────────────────────────────────

#[derive(Deserialize)]
struct PointsQuery {
    user_id: Option<String>,
}

#[derive(Serialize)]
pub struct RedeemedRewardView {
    pub reward_name: String,
    pub points_spent: i64,
    pub redeemed_at: String,
}

#[derive(Serialize)]
pub struct UserPointsResponse {
    pub user_id: String,
    pub total_points: i64,
    pub redeemed_rewards: Vec<RedeemedRewardView>,
}

/// Get a user's total points and redemption history.
async fn get_user_points(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PointsQuery>,
) -> Result<Json<UserPointsResponse>> {
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

    Ok(Json(UserPointsResponse {
        user_id: user.user_id,
        total_points: user.total_points,
        redeemed_rewards,
    }))
}
