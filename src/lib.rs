//! # Forum API Library
//!
//! This crate provides a discussion forum REST backend with:
//! - Threads, comments and replies with owner-only soft delete
//! - Per-user comment likes with an atomic toggle
//! - Registration and bearer token authentication
//! - PostgreSQL for persistent storage
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **Domain Layer**: entities, validation and repository traits
//! - **Application Layer**: use cases and DTOs
//! - **Infrastructure Layer**: PostgreSQL repositories, hashing, tokens, metrics
//! - **Presentation Layer**: HTTP handlers and middleware
//!
//! ## Module Structure
//!
//! ```text
//! forum_api/
//! +-- config/         Configuration management
//! +-- domain/         Entities, validation and repository traits
//! +-- application/    Use cases and DTOs
//! +-- infrastructure/ Database, security and metrics implementations
//! +-- presentation/   HTTP routes, handlers and middleware
//! +-- shared/         Common utilities (errors, ids)
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Use cases
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
