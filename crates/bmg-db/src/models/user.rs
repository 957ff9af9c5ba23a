//! User database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for users table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub password_hash: String,
    /// Account role: 'landlord' or 'tenant' (CHECK-constrained)
    pub role: String,
    pub phone: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserModel {
    /// Check the stored role without going through the entity mapper
    #[inline]
    pub fn is_landlord(&self) -> bool {
        self.role == "landlord"
    }
}
