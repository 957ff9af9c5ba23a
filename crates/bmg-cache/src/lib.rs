//! # bmg-cache
//!
//! Redis caching layer.
//!
//! - **Connection Pool**: Managed Redis connection pool with deadpool
//! - **Session Storage**: Refresh-token storage with TTL and revocation

pub mod pool;
pub mod session;

// Re-export pool types
pub use pool::{
    create_shared_pool, RedisPool, RedisPoolConfig, RedisPoolError, RedisResult, SharedRedisPool,
};

// Re-export session types
pub use session::{RefreshTokenData, RefreshTokenStore};
