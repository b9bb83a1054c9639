//! FitLife Backend Library
//!
//! A fitness-tracking REST API: health profiles, daily logs, analytics,
//! challenges, and rule-based recommendations.
//!
//! ## Architecture
//!
//! Layered, one direction of data flow:
//! - Routes: HTTP request handling and routing
//! - Services: business logic and validation
//! - Repositories: data access over PostgreSQL with SQLx
//! - `fitlife-shared`: pure domain math and generation tables

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
