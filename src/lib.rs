// SPDX-License-Identifier: MIT

//! Moosement: gamified corporate-wellness backend.
//!
//! This crate provides the backend API for logging exercise, completing
//! daily challenges, tracking streaks, aggregating team points, and
//! redeeming rewards.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::FirestoreDb;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: FirestoreDb,
}
