//! Infrastructure Layer
//!
//! Contains implementations for external services including:
//! - Database pool and migrations (PostgreSQL)
//! - Repository implementations
//! - Password hashing and access tokens
//! - Prometheus metrics

pub mod database;
pub mod metrics;
pub mod repositories;
pub mod security;
