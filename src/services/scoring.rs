// SPDX-License-Identifier: MIT

//! Scoring rules: converting activities into point values.
//!
//! Pure functions with no dependencies; the point ledger composes these
//! with the streak tracker and the store.

/// Streak bonus grows 10% per consecutive day, capped at +50%.
const STREAK_BONUS_PER_DAY: f64 = 0.1;
const MAX_STREAK_BONUS: f64 = 0.5;

/// Exercise categories with fixed point multipliers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExerciseType {
    Running,
    Walking,
    Cycling,
    Swimming,
    Rowing,
    StrengthTraining,
    Yoga,
    Other,
}

impl ExerciseType {
    /// Parse an exercise type string. Unrecognized types score as `Other`.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "running" => Self::Running,
            "walking" => Self::Walking,
            "cycling" => Self::Cycling,
            "swimming" => Self::Swimming,
            "rowing" => Self::Rowing,
            "strength_training" => Self::StrengthTraining,
            "yoga" => Self::Yoga,
            _ => Self::Other,
        }
    }

    /// Points per unit: mile, lap (25m), 500m, or 10 minutes.
    fn multiplier(self) -> f64 {
        match self {
            Self::Running => 10.0,
            Self::Walking => 5.0,
            Self::Cycling => 8.0,
            Self::Swimming => 5.0,
            Self::Rowing => 12.0,
            Self::StrengthTraining => 5.0,
            Self::Yoga => 3.0,
            Self::Other => 4.0,
        }
    }

    /// Distance/count-based types score per unit; the rest score per
    /// 10-minute block.
    fn is_distance_based(self) -> bool {
        matches!(
            self,
            Self::Running | Self::Walking | Self::Cycling | Self::Swimming | Self::Rowing
        )
    }
}

/// Points for a logged exercise.
///
/// `value` is distance in miles, laps, 500m units, or minutes depending on
/// the type. Callers must reject non-positive values before calling.
pub fn points_for_exercise(kind: ExerciseType, value: f64) -> i64 {
    let multiplier = kind.multiplier();
    if kind.is_distance_based() {
        (value * multiplier).floor() as i64
    } else {
        (value / 10.0 * multiplier).floor() as i64
    }
}

/// Points for a challenge completion, with the streak bonus applied.
pub fn points_for_challenge(base_points: i64, streak: u32) -> i64 {
    let bonus = (streak as f64 * STREAK_BONUS_PER_DAY).min(MAX_STREAK_BONUS);
    (base_points as f64 * (1.0 + bonus)).floor() as i64
}
