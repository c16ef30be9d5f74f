//! User model for storage and API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User profile stored in Firestore.
///
/// `completed_challenges`, `logged_exercises` and `redeemed_rewards` are
/// append-only histories; `streaks` is a cache of the value derived from
/// the completion history and is written in the same mutation as each new
/// completion record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID (also used as document ID)
    pub user_id: String,
    /// User's full name
    pub name: String,
    /// Unique email
    pub email: String,
    /// Argon2 password hash
    pub password_hash: String,
    /// Spendable point balance
    #[serde(default)]
    pub points: i64,
    /// Lifetime point balance; debited by redemptions
    #[serde(default)]
    pub total_points: i64,
    /// The team the user belongs to (at most one)
    pub team_id: Option<String>,
    /// The company the user belongs to
    pub company_id: Option<String>,
    /// Challenge completion history, oldest first
    #[serde(default)]
    pub completed_challenges: Vec<CompletionRecord>,
    /// Exercise log, oldest first
    #[serde(default)]
    pub logged_exercises: Vec<ExerciseRecord>,
    /// Current consecutive-day completion streak
    #[serde(default)]
    pub streaks: u32,
    /// Reward redemption history, oldest first
    #[serde(default)]
    pub redeemed_rewards: Vec<RedemptionRecord>,
    /// Role within the company
    pub role: String,
    /// Avatar URL
    pub user_avatar: Option<String>,
    /// When the account was created
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with zeroed balances and empty histories.
    pub fn new(
        name: String,
        email: String,
        password_hash: String,
        company_id: Option<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id: uuid::Uuid::new_v4().to_string(),
            name,
            email,
            password_hash,
            points: 0,
            total_points: 0,
            team_id: None,
            company_id,
            completed_challenges: Vec::new(),
            logged_exercises: Vec::new(),
            streaks: 0,
            redeemed_rewards: Vec::new(),
            role: "employee".to_string(),
            user_avatar: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Snapshot of a challenge completion. Created once, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRecord {
    pub challenge_id: String,
    /// Challenge name at completion time
    pub challenge_name: String,
    /// Points earned including the streak bonus
    pub points_earned: i64,
    pub completed_at: DateTime<Utc>,
    /// Streak value at completion time
    pub streak: u32,
}

/// Snapshot of a logged exercise. Created once, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseRecord {
    /// Exercise type as submitted (unrecognized types are scored as "other")
    pub exercise_type: String,
    /// Distance in miles, laps, 500m units, or time in minutes
    pub value: f64,
    pub points_earned: i64,
    pub logged_at: DateTime<Utc>,
}

/// Snapshot of a reward redemption. Created once, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedemptionRecord {
    pub reward_name: String,
    pub points_spent: i64,
    pub redeemed_at: DateTime<Utc>,
}
