//! # bmg-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `bmg-core`. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations
//! - Schema migrations (`migrations/`)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bmg_db::pool::{create_pool, DatabaseConfig};
//! use bmg_db::repositories::PgPropertyRepository;
//! use bmg_core::traits::PropertyRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     let property_repo = PgPropertyRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{
    PgInvitationRepository, PgIssueRepository, PgLandlordDetailsRepository, PgMessageRepository,
    PgPaymentRepository, PgPlanRepository, PgPropertyRepository, PgTenantRepository,
    PgUserRepository,
};
