//! Database layer (Firestore).

pub mod firestore;

pub use firestore::FirestoreDb;

/// Collection names as constants.
pub mod collections {
    pub const USERS: &str = "user_data";
    pub const TEAMS: &str = "team_data";
    pub const CHALLENGES: &str = "challenges";
    pub const REWARDS: &str = "rewards_data";
}
