// SPDX-License-Identifier: MIT

//! Reward redemption: a one-way debit of a user's point balance.

use chrono::{DateTime, Utc};

use crate::db::FirestoreDb;
use crate::error::{AppError, Result};
use crate::models::{RedemptionRecord, Reward, User};

/// Result of a successful redemption.
#[derive(Debug)]
pub struct Redeemed {
    pub reward_name: String,
    pub points_spent: i64,
    pub remaining_points: i64,
}

/// Debits user balances against the reward catalog.
pub struct RedemptionService {
    db: FirestoreDb,
}

impl RedemptionService {
    pub fn new(db: FirestoreDb) -> Self {
        Self { db }
    }

    /// Redeem a catalog reward for a user.
    pub async fn redeem(&self, user_id: &str, reward_name: &str) -> Result<Redeemed> {
        let reward = self
            .db
            .find_reward(reward_name)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Reward {} not found", reward_name)))?;

        let now = Utc::now();

        let user = self
            .db
            .mutate_user_atomic(user_id, |user| {
                redeem_reward(user, &reward, now)?;
                Ok(())
            })
            .await?;

        tracing::info!(
            user_id,
            reward_name,
            points_spent = reward.points_required,
            remaining = user.total_points,
            "Reward redeemed"
        );

        Ok(Redeemed {
            reward_name: reward.name,
            points_spent: reward.points_required,
            remaining_points: user.total_points,
        })
    }
}

/// Apply a redemption to a user in memory.
///
/// Each reward can be claimed at most once per user. Only `total_points`
/// is debited; `points` is left untouched, matching how credits and
/// debits are intentionally asymmetric in this system.
pub fn redeem_reward(user: &mut User, reward: &Reward, now: DateTime<Utc>) -> Result<()> {
    if user
        .redeemed_rewards
        .iter()
        .any(|r| r.reward_name == reward.name)
    {
        return Err(AppError::AlreadyRedeemed);
    }

    if user.total_points < reward.points_required {
        return Err(AppError::InsufficientPoints);
    }

    user.total_points -= reward.points_required;
    user.redeemed_rewards.push(RedemptionRecord {
        reward_name: reward.name.clone(),
        points_spent: reward.points_required,
        redeemed_at: now,
    });
    user.updated_at = now;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn test_user(total_points: i64) -> User {
        let mut user = User::new(
            "Test User".to_string(),
            "test@example.com".to_string(),
            "hash".to_string(),
            None,
            Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap(),
        );
        user.points = total_points;
        user.total_points = total_points;
        user
    }

    fn reward(name: &str, points_required: i64) -> Reward {
        Reward {
            name: name.to_string(),
            points_required,
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_redeem_debits_only_total_points() {
        let mut user = test_user(500);

        redeem_reward(&mut user, &reward("Gift Card", 200), now()).unwrap();

        assert_eq!(user.total_points, 300);
        // `points` is deliberately untouched by redemption
        assert_eq!(user.points, 500);
        assert_eq!(user.redeemed_rewards.len(), 1);
        assert_eq!(user.redeemed_rewards[0].points_spent, 200);
    }

    #[test]
    fn test_insufficient_points_rejected() {
        let mut user = test_user(100);

        let err = redeem_reward(&mut user, &reward("Free Lunch Voucher", 150), now()).unwrap_err();

        assert!(matches!(err, AppError::InsufficientPoints));
        // Balance unchanged, nothing recorded
        assert_eq!(user.total_points, 100);
        assert!(user.redeemed_rewards.is_empty());
    }

    #[test]
    fn test_double_redemption_rejected() {
        let mut user = test_user(1000);
        let gift_card = reward("Gift Card", 200);

        redeem_reward(&mut user, &gift_card, now()).unwrap();
        let err = redeem_reward(&mut user, &gift_card, now()).unwrap_err();

        assert!(matches!(err, AppError::AlreadyRedeemed));
        assert_eq!(user.total_points, 800);
        assert_eq!(user.redeemed_rewards.len(), 1);
    }

    #[test]
    fn test_exact_balance_redeems_to_zero() {
        let mut user = test_user(200);

        redeem_reward(&mut user, &reward("Gift Card", 200), now()).unwrap();

        assert_eq!(user.total_points, 0);
    }

    #[test]
    fn test_different_rewards_both_redeemable() {
        let mut user = test_user(1000);

        redeem_reward(&mut user, &reward("Gift Card", 200), now()).unwrap();
        redeem_reward(&mut user, &reward("Late Start Pass", 200), now()).unwrap();

        assert_eq!(user.total_points, 600);
        assert_eq!(user.redeemed_rewards.len(), 2);
    }
}
