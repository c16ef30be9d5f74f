// SPDX-License-Identifier: MIT

//! Team routes: creation, membership, points, leaderboard, invites.

use crate::error::{AppError, Result};
use crate::models::{Team, TeamInvite};
use crate::routes::require_field;
use crate::services::leaderboard;
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/teams/create", post(create_team))
        .route("/api/teams/join", post(join_team))
        .route("/api/teams/points", get(get_team_points))
        .route("/api/teams/leaderboard", get(get_leaderboard))
        .route("/api/teams/invite", post(invite_member))
        .route("/api/teams/accept_invite/{invite_code}", post(accept_invite))
}

// ─── Create / Join ───────────────────────────────────────────

#[derive(Deserialize)]
struct CreateTeamRequest {
    name: Option<String>,
    company_id: Option<String>,
    creator_id: Option<String>,
}

#[derive(Serialize)]
pub struct CreateTeamResponse {
    pub message: String,
    pub team_id: String,
}

/// Create a team with the creator as its first member.
async fn create_team(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateTeamRequest>,
) -> Result<(StatusCode, Json<CreateTeamResponse>)> {
    let name = require_field(payload.name.as_deref(), "name")?;
    let company_id = require_field(payload.company_id.as_deref(), "company_id")?;
    let creator_id = require_field(payload.creator_id.as_deref(), "creator_id")?;

    state
        .db
        .get_user(creator_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", creator_id)))?;

    let now = chrono::Utc::now();
    let team = Team::new(
        name.to_string(),
        company_id.to_string(),
        creator_id.to_string(),
        now,
    );

    state.db.upsert_team(&team).await?;

    // Back-reference on the creator keeps both sides consistent
    let team_id = team.team_id.clone();
    state
        .db
        .mutate_user_atomic(creator_id, |user| {
            user.team_id = Some(team_id);
            user.updated_at = now;
            Ok(())
        })
        .await?;

    tracing::info!(team_id = %team.team_id, creator_id, "Team created");

    Ok((
        StatusCode::CREATED,
        Json(CreateTeamResponse {
            message: "Team created successfully".to_string(),
            team_id: team.team_id,
        }),
    ))
}

#[derive(Deserialize)]
struct JoinTeamRequest {
    user_id: Option<String>,
    team_id: Option<String>,
}

#[derive(Serialize)]
pub struct JoinTeamResponse {
    pub message: String,
}

/// Add a user to an existing team.
async fn join_team(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<JoinTeamRequest>,
) -> Result<Json<JoinTeamResponse>> {
    let user_id = require_field(payload.user_id.as_deref(), "user_id")?;
    let team_id = require_field(payload.team_id.as_deref(), "team_id")?;

    state
        .db
        .get_user(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;

    let mut team = state
        .db
        .get_team(team_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Team {} not found", team_id)))?;

    if team.members.iter().any(|m| m == user_id) {
        return Err(AppError::Conflict("User already in team".to_string()));
    }

    let now = chrono::Utc::now();
    team.members.push(user_id.to_string());
    team.updated_at = now;
    state.db.upsert_team(&team).await?;

    state
        .db
        .mutate_user_atomic(user_id, |user| {
            user.team_id = Some(team.team_id.clone());
            user.updated_at = now;
            Ok(())
        })
        .await?;

    Ok(Json(JoinTeamResponse {
        message: "User added to the team successfully".to_string(),
    }))
}

// ─── Points / Leaderboard ────────────────────────────────────

#[derive(Deserialize)]
struct TeamPointsQuery {
    team_id: Option<String>,
}

#[derive(Serialize)]
pub struct TeamPointsResponse {
    pub team_id: String,
    pub team_total_points: i64,
}

/// Get a team's aggregate points.
async fn get_team_points(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TeamPointsQuery>,
) -> Result<Json<TeamPointsResponse>> {
    let team_id = require_field(params.team_id.as_deref(), "team_id")?;

    let team = state
        .db
        .get_team(team_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Team {} not found", team_id)))?;

    Ok(Json(TeamPointsResponse {
        team_id: team.team_id,
        team_total_points: team.total_team_points,
    }))
}

#[derive(Serialize)]
pub struct LeaderboardEntry {
    pub team_id: String,
    pub name: String,
    pub total_team_points: i64,
    pub team_standing: u32,
}

#[derive(Serialize)]
pub struct LeaderboardResponse {
    pub leaderboard: Vec<LeaderboardEntry>,
}

/// Recompute team standings and return the ranked leaderboard.
async fn get_leaderboard(
    State(state): State<Arc<AppState>>,
) -> Result<Json<LeaderboardResponse>> {
    let ranked = leaderboard::refresh_leaderboard(&state.db).await?;

    let entries = ranked
        .into_iter()
        .map(|team| LeaderboardEntry {
            team_id: team.team_id,
            name: team.name,
            total_team_points: team.total_team_points,
            team_standing: team.team_standing.unwrap_or(0),
        })
        .collect();

    Ok(Json(LeaderboardResponse {
        leaderboard: entries,
    }))
}

// ─── Invites ─────────────────────────────────────────────────

#[derive(Deserialize)]
struct InviteRequest {
    user_id: Option<String>,
}

#[derive(Serialize)]
pub struct InviteResponse {
    pub message: String,
    pub invite_code: String,
}

/// Generate an invite code for the requesting member's team.
async fn invite_member(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<InviteRequest>,
) -> Result<Json<InviteResponse>> {
    let user_id = require_field(payload.user_id.as_deref(), "user_id")?;

    let user = state
        .db
        .get_user(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;

    let team_id = user
        .team_id
        .as_deref()
        .ok_or_else(|| AppError::Validation("User is not part of a team".to_string()))?;

    let mut team = state
        .db
        .get_team(team_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Team {} not found", team_id)))?;

    let invite_code = uuid::Uuid::new_v4().simple().to_string();
    team.invites.push(TeamInvite {
        code: invite_code.clone(),
        created_by: user_id.to_string(),
    });
    team.updated_at = chrono::Utc::now();

    state.db.upsert_team(&team).await?;

    Ok(Json(InviteResponse {
        message: "Invite code generated successfully".to_string(),
        invite_code,
    }))
}

#[derive(Deserialize)]
struct AcceptInviteRequest {
    user_id: Option<String>,
}

#[derive(Serialize)]
pub struct AcceptInviteResponse {
    pub message: String,
}

/// Join a team via invite code. Each code is consumed exactly once.
async fn accept_invite(
    State(state): State<Arc<AppState>>,
    Path(invite_code): Path<String>,
    Json(payload): Json<AcceptInviteRequest>,
) -> Result<Json<AcceptInviteResponse>> {
    let user_id = require_field(payload.user_id.as_deref(), "user_id")?;

    state
        .db
        .get_user(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))?;

    // Invite lookup scans the team list; team count is small
    let teams = state.db.list_teams().await?;
    let mut team = teams
        .into_iter()
        .find(|t| t.invites.iter().any(|i| i.code == invite_code))
        .ok_or_else(|| AppError::NotFound("Invalid invite code".to_string()))?;

    let now = chrono::Utc::now();
    let team_id = team.team_id.clone();
    state
        .db
        .mutate_user_atomic(user_id, |user| {
            user.team_id = Some(team_id);
            user.updated_at = now;
            Ok(())
        })
        .await?;

    // Consume the code and keep the member list consistent
    team.invites.retain(|i| i.code != invite_code);
    if !team.members.iter().any(|m| m == user_id) {
        team.members.push(user_id.to_string());
    }
    team.updated_at = now;
    state.db.upsert_team(&team).await?;

    Ok(Json(AcceptInviteResponse {
        message: "User successfully joined the team".to_string(),
    }))
}
