// SPDX-License-Identifier: MIT

//! Firestore integration tests.
//!
//! These tests require the Firestore emulator to be running
//! (set FIRESTORE_EMULATOR_HOST). The emulator provides a clean state
//! for each test run.

use moosement_backend::models::{Team, User};
use moosement_backend::services::ledger::PointLedger;
use moosement_backend::services::redemption::RedemptionService;
use moosement_backend::services::{leaderboard, TeamSync};

mod common;
use common::test_db;

/// Helper to create a basic test user with a unique ID.
fn test_user(total_points: i64) -> User {
    let mut user = User::new(
        "Test User".to_string(),
        format!("{}@example.com", uuid::Uuid::new_v4().simple()),
        "hash".to_string(),
        Some("acme".to_string()),
        chrono::Utc::now(),
    );
    user.points = total_points;
    user.total_points = total_points;
    user
}

/// Helper to create a test team.
fn test_team(name: &str, points: i64) -> Team {
    let mut team = Team::new(
        name.to_string(),
        "acme".to_string(),
        "creator".to_string(),
        chrono::Utc::now(),
    );
    team.total_team_points = points;
    team
}

#[tokio::test]
async fn test_user_roundtrip_and_email_lookup() {
    require_emulator!();

    let db = test_db().await;
    let user = test_user(0);

    let before = db.get_user(&user.user_id).await.unwrap();
    assert!(before.is_none(), "User should not exist before creation");

    db.upsert_user(&user).await.unwrap();

    let fetched = db.get_user(&user.user_id).await.unwrap().unwrap();
    assert_eq!(fetched.email, user.email);
    assert_eq!(fetched.total_points, 0);
    assert_eq!(fetched.role, "employee");

    let by_email = db.find_user_by_email(&user.email).await.unwrap().unwrap();
    assert_eq!(by_email.user_id, user.user_id);
}

#[tokio::test]
async fn test_exercise_updates_team_aggregate() {
    require_emulator!();

    let db = test_db().await;

    let team = test_team("The Striders", 0);
    db.upsert_team(&team).await.unwrap();

    let mut user = test_user(0);
    user.team_id = Some(team.team_id.clone());
    db.upsert_user(&user).await.unwrap();

    let ledger = PointLedger::new(db.clone());
    let applied = ledger
        .apply_exercise(&user.user_id, "running", 3.0)
        .await
        .unwrap();

    assert_eq!(applied.points_earned, 30);
    assert_eq!(applied.team_sync, TeamSync::Applied);

    // Both user balances moved together
    let fetched = db.get_user(&user.user_id).await.unwrap().unwrap();
    assert_eq!(fetched.points, 30);
    assert_eq!(fetched.total_points, 30);
    assert_eq!(fetched.logged_exercises.len(), 1);

    // The team aggregate moved by the same delta
    let fetched_team = db.get_team(&team.team_id).await.unwrap().unwrap();
    assert_eq!(fetched_team.total_team_points, 30);
}

#[tokio::test]
async fn test_duplicate_challenge_completion_rejected() {
    require_emulator!();

    let db = test_db().await;
    db.seed_catalogs().await.unwrap();

    let challenge = db
        .list_challenges()
        .await
        .unwrap()
        .into_iter()
        .next()
        .expect("Seeded catalog should not be empty");

    let user = test_user(0);
    db.upsert_user(&user).await.unwrap();

    let ledger = PointLedger::new(db.clone());

    let first = ledger
        .apply_challenge(&user.user_id, &challenge.challenge_id)
        .await
        .unwrap();
    assert_eq!(first.current_streak, 1);
    assert!(first.points_earned > 0);

    let err = ledger
        .apply_challenge(&user.user_id, &challenge.challenge_id)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        moosement_backend::error::AppError::DuplicateCompletion
    ));

    // The rejected attempt wrote nothing
    let fetched = db.get_user(&user.user_id).await.unwrap().unwrap();
    assert_eq!(fetched.completed_challenges.len(), 1);
    assert_eq!(fetched.total_points, first.total_points);
}

#[tokio::test]
async fn test_redemption_flow() {
    require_emulator!();

    let db = test_db().await;
    db.seed_catalogs().await.unwrap();

    let user = test_user(200);
    db.upsert_user(&user).await.unwrap();

    let service = RedemptionService::new(db.clone());

    let redeemed = service
        .redeem(&user.user_id, "Free Lunch Voucher")
        .await
        .unwrap();
    assert_eq!(redeemed.points_spent, 150);
    assert_eq!(redeemed.remaining_points, 50);

    // Second redemption of the same reward is rejected
    let err = service
        .redeem(&user.user_id, "Free Lunch Voucher")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        moosement_backend::error::AppError::AlreadyRedeemed
    ));

    // Remaining balance is short for this one
    let err = service.redeem(&user.user_id, "Gift Card").await.unwrap_err();
    assert!(matches!(
        err,
        moosement_backend::error::AppError::InsufficientPoints
    ));

    // Only total_points was debited
    let fetched = db.get_user(&user.user_id).await.unwrap().unwrap();
    assert_eq!(fetched.total_points, 50);
    assert_eq!(fetched.points, 200);
    assert_eq!(fetched.redeemed_rewards.len(), 1);
}

#[tokio::test]
async fn test_leaderboard_refresh_persists_ranks() {
    require_emulator!();

    let db = test_db().await;

    let low = test_team("Low", 100);
    let mid = test_team("Mid", 300);
    let high = test_team("High", 500);
    for team in [&low, &mid, &high] {
        db.upsert_team(team).await.unwrap();
    }

    let ranked = leaderboard::refresh_leaderboard(&db).await.unwrap();

    // Other tests create teams in the shared emulator; check relative order
    let position = |id: &str| ranked.iter().position(|t| t.team_id == id).unwrap();
    assert!(position(&high.team_id) < position(&mid.team_id));
    assert!(position(&mid.team_id) < position(&low.team_id));

    let fetched = db.get_team(&high.team_id).await.unwrap().unwrap();
    assert_eq!(
        fetched.team_standing,
        ranked[position(&high.team_id)].team_standing
    );
}

#[tokio::test]
async fn test_atomic_mutation_rolls_back_on_rejection() {
    require_emulator!();

    let db = test_db().await;
    let user = test_user(0);
    db.upsert_user(&user).await.unwrap();

    let err = db
        .mutate_user_atomic(&user.user_id, |user| {
            user.total_points += 999;
            Err(moosement_backend::error::AppError::DuplicateCompletion)
        })
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        moosement_backend::error::AppError::DuplicateCompletion
    ));

    let fetched = db.get_user(&user.user_id).await.unwrap().unwrap();
    assert_eq!(fetched.total_points, 0);
}
