// SPDX-License-Identifier: MIT

//! Point ledger: applying earned points to users and their teams.
//!
//! Handles the core workflow:
//! 1. Score the activity (exercise value or challenge + streak bonus)
//! 2. Append the history record and update both balance fields
//! 3. Persist the user atomically
//! 4. Best-effort update of the team aggregate
//!
//! The user write and the team write are two independent operations with
//! no two-phase coordination. A team-write failure is absorbed into
//! [`TeamSync::Failed`] and logged; the user-facing operation still
//! succeeds, and the gap is surfaced through the audit log.

use chrono::{DateTime, Utc};

use crate::db::FirestoreDb;
use crate::error::{AppError, Result};
use crate::models::{Challenge, CompletionRecord, ExerciseRecord, User};
use crate::services::scoring::{self, ExerciseType};
use crate::services::streak;

/// Outcome of the secondary team-aggregate update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamSync {
    /// Team aggregate incremented by the same delta
    Applied,
    /// User does not belong to a team
    NotOnTeam,
    /// Update failed; reported through the audit log, not to the caller
    Failed,
}

/// Result of applying a logged exercise.
#[derive(Debug)]
pub struct ExerciseApplied {
    pub exercise_type: String,
    pub value: f64,
    pub points_earned: i64,
    pub total_points: i64,
    pub team_sync: TeamSync,
}

/// Result of applying a challenge completion.
#[derive(Debug)]
pub struct ChallengeApplied {
    pub points_earned: i64,
    pub current_streak: u32,
    pub total_points: i64,
    pub team_sync: TeamSync,
}

/// Applies point deltas to user records and, transitively, to team
/// aggregates.
pub struct PointLedger {
    db: FirestoreDb,
}

impl PointLedger {
    pub fn new(db: FirestoreDb) -> Self {
        Self { db }
    }

    /// Score and record a logged exercise for a user.
    pub async fn apply_exercise(
        &self,
        user_id: &str,
        exercise_type: &str,
        value: f64,
    ) -> Result<ExerciseApplied> {
        // Reject before touching the store
        check_exercise_value(value)?;

        let now = Utc::now();

        let mut points_earned = 0;
        let user = self
            .db
            .mutate_user_atomic(user_id, |user| {
                points_earned = log_exercise(user, exercise_type, value, now)?;
                Ok(())
            })
            .await?;

        tracing::info!(
            user_id,
            exercise_type,
            value,
            points_earned,
            "Exercise logged"
        );

        let team_sync = self
            .sync_team_points(user.team_id.as_deref(), user_id, points_earned)
            .await;

        Ok(ExerciseApplied {
            exercise_type: exercise_type.to_string(),
            value,
            points_earned,
            total_points: user.total_points,
            team_sync,
        })
    }

    /// Score and record a challenge completion for a user.
    ///
    /// Rejects a repeat completion of the same challenge on the same UTC
    /// day; the duplicate check and the streak computation run against the
    /// same history snapshot that gets written.
    pub async fn apply_challenge(
        &self,
        user_id: &str,
        challenge_id: &str,
    ) -> Result<ChallengeApplied> {
        let challenge = self
            .db
            .get_challenge(challenge_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Challenge {} not found", challenge_id)))?;

        let now = Utc::now();

        let mut points_earned = 0;
        let mut current_streak = 0;
        let user = self
            .db
            .mutate_user_atomic(user_id, |user| {
                let (points, streak) = complete_challenge(user, &challenge, now)?;
                points_earned = points;
                current_streak = streak;
                Ok(())
            })
            .await?;

        tracing::info!(
            user_id,
            challenge_id,
            points_earned,
            current_streak,
            "Challenge completed"
        );

        let team_sync = self
            .sync_team_points(user.team_id.as_deref(), user_id, points_earned)
            .await;

        Ok(ChallengeApplied {
            points_earned,
            current_streak,
            total_points: user.total_points,
            team_sync,
        })
    }

    /// Propagate a point delta to the user's team aggregate.
    ///
    /// Best-effort: a failure is logged with an audit marker and does not
    /// roll back or fail the already-committed user update.
    pub async fn sync_team_points(
        &self,
        team_id: Option<&str>,
        user_id: &str,
        delta: i64,
    ) -> TeamSync {
        let Some(team_id) = team_id else {
            return TeamSync::NotOnTeam;
        };

        match self.db.add_team_points(team_id, delta).await {
            Ok(()) => TeamSync::Applied,
            Err(e) => {
                tracing::warn!(
                    audit = "team_points_sync_failed",
                    team_id,
                    user_id,
                    delta,
                    error = %e,
                    "Team aggregate update failed after user update succeeded"
                );
                TeamSync::Failed
            }
        }
    }
}

fn check_exercise_value(value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(AppError::Validation(
            "Exercise value must be a positive number".to_string(),
        ));
    }
    Ok(())
}

/// Apply a logged exercise to a user in memory.
///
/// Returns the points earned. Non-positive or non-finite values are
/// rejected before any scoring happens.
pub fn log_exercise(
    user: &mut User,
    exercise_type: &str,
    value: f64,
    now: DateTime<Utc>,
) -> Result<i64> {
    check_exercise_value(value)?;

    let kind = ExerciseType::parse(exercise_type);
    let points_earned = scoring::points_for_exercise(kind, value);

    user.logged_exercises.push(ExerciseRecord {
        exercise_type: exercise_type.to_string(),
        value,
        points_earned,
        logged_at: now,
    });
    user.points += points_earned;
    user.total_points += points_earned;
    user.updated_at = now;

    Ok(points_earned)
}

/// Apply a challenge completion to a user in memory.
///
/// Returns `(points_earned, streak)`.
pub fn complete_challenge(
    user: &mut User,
    challenge: &Challenge,
    now: DateTime<Utc>,
) -> Result<(i64, u32)> {
    if streak::completed_today(&user.completed_challenges, &challenge.challenge_id, now) {
        return Err(AppError::DuplicateCompletion);
    }

    let streak = streak::compute_streak(&user.completed_challenges, now);
    let points_earned = scoring::points_for_challenge(challenge.points, streak);

    user.completed_challenges.push(CompletionRecord {
        challenge_id: challenge.challenge_id.clone(),
        challenge_name: challenge.name.clone(),
        points_earned,
        completed_at: now,
        streak,
    });
    user.points += points_earned;
    user.total_points += points_earned;
    user.streaks = streak;
    user.updated_at = now;

    Ok((points_earned, streak))
}
