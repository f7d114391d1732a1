//! Festival management API.
//!
//! CRUD endpoints for artists, stages, schedule, tickets, users, ratings and
//! news, fronted by a per-caller sliding window rate limiter and a shared-key
//! gate on writes.

pub mod app;
pub mod clock;
pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod models;
pub mod query;
pub mod rate_limit;
pub mod state;
pub mod store;
