// SPDX-License-Identifier: MIT

//! Reward catalog.

use serde::{Deserialize, Serialize};

/// A redeemable reward. Read-only reference data; redemption debits a
/// user's point balance against `points_required`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reward {
    /// Reward name (also used as document ID)
    pub name: String,
    pub points_required: i64,
}

/// Default rewards, seeded when the collection is empty.
pub fn default_rewards() -> Vec<Reward> {
    [
        ("Free Lunch Voucher", 150),
        ("Late Start Pass", 200),
        ("Company T-Shirt", 300),
        ("Extra PTO Day", 500),
        ("Gift Card", 200),
    ]
    .into_iter()
    .map(|(name, points_required)| Reward {
        name: name.to_string(),
        points_required,
    })
    .collect()
}
