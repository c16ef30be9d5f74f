// SPDX-License-Identifier: MIT

//! Team model for storage and API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Team stored in Firestore.
///
/// `total_team_points` is the aggregate of member-earned points, updated
/// incrementally on each member event. `team_standing` is recomputed on
/// demand by the leaderboard, not maintained continuously.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    /// Unique team ID (also used as document ID)
    pub team_id: String,
    /// Team name
    pub name: String,
    /// Company the team belongs to
    pub company_id: String,
    /// Aggregate of member-earned points
    #[serde(default)]
    pub total_team_points: i64,
    /// 1-based leaderboard rank, set on recompute
    pub team_standing: Option<u32>,
    /// User IDs of team members
    #[serde(default)]
    pub members: Vec<String>,
    /// Pending invites; each code is consumed exactly once on acceptance
    #[serde(default)]
    pub invites: Vec<TeamInvite>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Team {
    /// Create a new team with the creator as the first member.
    pub fn new(name: String, company_id: String, creator_id: String, now: DateTime<Utc>) -> Self {
        Self {
            team_id: uuid::Uuid::new_v4().to_string(),
            name,
            company_id,
            total_team_points: 0,
            team_standing: None,
            members: vec![creator_id],
            invites: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// A pending team invite.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamInvite {
    /// Opaque invite code
    pub code: String,
    /// User ID of the inviting member
    pub created_by: String,
}
