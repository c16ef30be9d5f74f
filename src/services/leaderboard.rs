// SPDX-License-Identifier: MIT

//! Team leaderboard ranking.
//!
//! A full recomputation triggered on read rather than an incrementally
//! maintained index; team count is assumed small.

use futures_util::{stream, StreamExt};

use crate::db::FirestoreDb;
use crate::error::{AppError, Result};
use crate::models::Team;

const MAX_CONCURRENT_DB_OPS: usize = 50;

/// Rank teams by aggregate points.
///
/// Sorted by `total_team_points` descending; ties broken by `team_id`
/// ascending so the ordering is deterministic regardless of store
/// iteration order. Ranks are 1-based.
pub fn recompute_standings(mut teams: Vec<Team>) -> Vec<Team> {
    teams.sort_by(|a, b| {
        b.total_team_points
            .cmp(&a.total_team_points)
            .then_with(|| a.team_id.cmp(&b.team_id))
    });

    for (index, team) in teams.iter_mut().enumerate() {
        team.team_standing = Some(index as u32 + 1);
    }

    teams
}

/// Recompute standings from the current team snapshot and persist each
/// team's rank.
///
/// Ranks are written individually per team; concurrent point writes can
/// interleave, which is acceptable for a non-critical ranking display.
pub async fn refresh_leaderboard(db: &FirestoreDb) -> Result<Vec<Team>> {
    let teams = db.list_teams().await?;
    let ranked = recompute_standings(teams);

    stream::iter(ranked.clone())
        .map(|team| {
            let db = db.clone();
            async move { db.upsert_team(&team).await }
        })
        .buffer_unordered(MAX_CONCURRENT_DB_OPS)
        .collect::<Vec<Result<()>>>()
        .await
        .into_iter()
        .collect::<std::result::Result<Vec<()>, AppError>>()?;

    tracing::debug!(teams = ranked.len(), "Leaderboard recomputed");

    Ok(ranked)
}
