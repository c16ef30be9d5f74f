// SPDX-License-Identifier: MIT

//! Firestore client wrapper with typed operations.
//!
//! Provides high-level operations for:
//! - Users (profile, balances, append-only histories)
//! - Teams (membership, aggregate points, invites)
//! - Challenge and reward catalogs (read-mostly reference data)

use crate::db::collections;
use crate::error::AppError;
use crate::models::{challenge, reward, Challenge, Reward, Team, User};
use futures_util::{stream, StreamExt};

const MAX_CONCURRENT_DB_OPS: usize = 50;

/// Firestore database client.
#[derive(Clone)]
pub struct FirestoreDb {
    client: Option<firestore::FirestoreDb>,
}

impl FirestoreDb {
    /// Create a new Firestore client.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn new(project_id: &str) -> Result<Self, AppError> {
        // If the emulator environment variable is set, use unauthenticated connection
        // to avoid local credential warnings and leakage.
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::create_emulator_client(project_id).await;
        }

        let client = firestore::FirestoreDb::new(project_id)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to Firestore: {}", e)))?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(project_id: &str) -> Result<Self, AppError> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        // Use ExternalJwtFunctionSource to provide a dummy token without needing async-trait
        // or a custom TokenSource implementation struct.
        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            AppError::Database(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(
            project = project_id,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a mock Firestore client for testing (offline mode).
    ///
    /// All database operations will return an error if called.
    pub fn new_mock() -> Self {
        Self { client: None }
    }

    /// Helper to get the client or return an error if offline.
    fn get_client(&self) -> Result<&firestore::FirestoreDb, AppError> {
        self.client
            .as_ref()
            .ok_or_else(|| AppError::Database("Database not connected (offline mode)".to_string()))
    }

    // ─── User Operations ─────────────────────────────────────────

    /// Get a user by ID.
    pub async fn get_user(&self, user_id: &str) -> Result<Option<User>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(collections::USERS)
            .obj()
            .one(user_id)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Find a user by email (emails are unique).
    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let email = email.to_string();
        let mut matches: Vec<User> = self
            .get_client()?
            .fluent()
            .select()
            .from(collections::USERS)
            .filter(move |q| q.for_all([q.field("email").eq(email.clone())]))
            .limit(1)
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(matches.pop())
    }

    /// Create or update a user.
    pub async fn upsert_user(&self, user: &User) -> Result<(), AppError> {
        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collections::USERS)
            .document_id(&user.user_id)
            .object(user)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    /// Atomically mutate a user document inside a Firestore transaction.
    ///
    /// Reads the current user, applies `mutate` in memory, and commits the
    /// write. If another request modifies the same user concurrently,
    /// Firestore retries with fresh data, preventing lost updates. If
    /// `mutate` returns an error (e.g. a duplicate-completion rejection),
    /// the transaction is rolled back and nothing is written.
    ///
    /// Returns the updated user.
    pub async fn mutate_user_atomic<F>(&self, user_id: &str, mutate: F) -> Result<User, AppError>
    where
        F: FnOnce(&mut User) -> Result<(), AppError>,
    {
        // Begin a transaction
        let mut transaction = self
            .get_client()?
            .begin_transaction()
            .await
            .map_err(|e| AppError::Database(format!("Failed to begin transaction: {}", e)))?;

        // 1. Read the current user within the transaction scope
        //    This registers the document for conflict detection
        let current: Option<User> = self
            .get_client()?
            .fluent()
            .select()
            .by_id_in(collections::USERS)
            .obj()
            .one(user_id)
            .await
            .map_err(|e| AppError::Database(format!("Failed to read user in transaction: {}", e)))?;

        let mut user = match current {
            Some(user) => user,
            None => {
                let _ = transaction.rollback().await;
                return Err(AppError::NotFound(format!("User {} not found", user_id)));
            }
        };

        // 2. Apply the mutation in memory; a rejection aborts all writes
        if let Err(e) = mutate(&mut user) {
            let _ = transaction.rollback().await;
            return Err(e);
        }

        // 3. Add the user write to the transaction
        self.get_client()?
            .fluent()
            .update()
            .in_col(collections::USERS)
            .document_id(&user.user_id)
            .object(&user)
            .add_to_transaction(&mut transaction)
            .map_err(|e| AppError::Database(format!("Failed to add user to transaction: {}", e)))?;

        // 4. Commit atomically
        transaction
            .commit()
            .await
            .map_err(|e| AppError::Database(format!("Transaction commit failed: {}", e)))?;

        Ok(user)
    }

    // ─── Team Operations ─────────────────────────────────────────

    /// Get a team by ID.
    pub async fn get_team(&self, team_id: &str) -> Result<Option<Team>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(collections::TEAMS)
            .obj()
            .one(team_id)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Create or update a team.
    pub async fn upsert_team(&self, team: &Team) -> Result<(), AppError> {
        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collections::TEAMS)
            .document_id(&team.team_id)
            .object(team)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    /// List all teams. Team count is assumed small (single company).
    pub async fn list_teams(&self) -> Result<Vec<Team>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .from(collections::TEAMS)
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Add a point delta to a team's aggregate total.
    ///
    /// This is the secondary, best-effort half of a point application: the
    /// user write and this write are two independent operations with no
    /// two-phase coordination. Callers absorb failures and report them
    /// through the audit log rather than failing the primary operation.
    pub async fn add_team_points(&self, team_id: &str, delta: i64) -> Result<(), AppError> {
        let mut team = self
            .get_team(team_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Team {} not found", team_id)))?;

        team.total_team_points += delta;
        team.updated_at = chrono::Utc::now();

        self.upsert_team(&team).await
    }

    // ─── Challenge Catalog ───────────────────────────────────────

    /// Get a challenge by ID.
    pub async fn get_challenge(&self, challenge_id: &str) -> Result<Option<Challenge>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(collections::CHALLENGES)
            .obj()
            .one(challenge_id)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// List the full challenge catalog.
    pub async fn list_challenges(&self) -> Result<Vec<Challenge>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .from(collections::CHALLENGES)
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    // ─── Reward Catalog ──────────────────────────────────────────

    /// Find a reward by name (names are the document IDs).
    pub async fn find_reward(&self, name: &str) -> Result<Option<Reward>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(collections::REWARDS)
            .obj()
            .one(name)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// List the full reward catalog.
    pub async fn list_rewards(&self) -> Result<Vec<Reward>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .from(collections::REWARDS)
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    // ─── Catalog Seeding ─────────────────────────────────────────

    /// Seed the challenge and reward catalogs if their collections are empty.
    ///
    /// Returns the number of (challenges, rewards) inserted.
    pub async fn seed_catalogs(&self) -> Result<(usize, usize), AppError> {
        let client = self.get_client()?;

        let mut challenges_seeded = 0;
        if self.list_challenges().await?.is_empty() {
            let catalog = challenge::default_catalog();
            challenges_seeded = catalog.len();

            stream::iter(catalog)
                .map(|challenge| async move {
                    let _: () = client
                        .fluent()
                        .update()
                        .in_col(collections::CHALLENGES)
                        .document_id(&challenge.challenge_id)
                        .object(&challenge)
                        .execute()
                        .await
                        .map_err(|e| AppError::Database(e.to_string()))?;

                    Ok::<_, AppError>(())
                })
                .buffer_unordered(MAX_CONCURRENT_DB_OPS)
                .collect::<Vec<Result<(), AppError>>>()
                .await
                .into_iter()
                .collect::<Result<Vec<()>, AppError>>()?;
        }

        let mut rewards_seeded = 0;
        if self.list_rewards().await?.is_empty() {
            let rewards = reward::default_rewards();
            rewards_seeded = rewards.len();

            for reward in &rewards {
                let _: () = client
                    .fluent()
                    .update()
                    .in_col(collections::REWARDS)
                    .document_id(&reward.name)
                    .object(reward)
                    .execute()
                    .await
                    .map_err(|e| AppError::Database(e.to_string()))?;
            }
        }

        Ok((challenges_seeded, rewards_seeded))
    }
}
