// SPDX-License-Identifier: MIT

//! Services module - the points/streak/leaderboard computation engine.

pub mod leaderboard;
pub mod ledger;
pub mod redemption;
pub mod scoring;
pub mod streak;

pub use ledger::{PointLedger, TeamSync};
pub use redemption::RedemptionService;
pub use scoring::ExerciseType;
