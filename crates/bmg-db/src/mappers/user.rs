//! User entity <-> model mapper

use bmg_core::entities::{User, UserRole};
use bmg_core::value_objects::Snowflake;

use crate::models::UserModel;

/// Convert UserModel to User entity
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: Snowflake::new(model.id),
            full_name: model.full_name,
            email: model.email,
            // CHECK constraint guarantees a known role; fall back defensively
            role: model.role.parse().unwrap_or(UserRole::Tenant),
            phone: model.phone,
            avatar_url: model.avatar_url,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Convert User entity reference to values for database insertion
pub struct UserInsert<'a> {
    pub id: i64,
    pub full_name: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
    pub role: &'static str,
    pub phone: Option<&'a str>,
    pub avatar_url: Option<&'a str>,
}

impl<'a> UserInsert<'a> {
    pub fn new(user: &'a User, password_hash: &'a str) -> Self {
        Self {
            id: user.id.into_inner(),
            full_name: &user.full_name,
            email: &user.email,
            password_hash,
            role: user.role.as_str(),
            phone: user.phone.as_deref(),
            avatar_url: user.avatar_url.as_deref(),
        }
    }
}

/// Convert User entity reference to values for database update
pub struct UserUpdate<'a> {
    pub id: i64,
    pub full_name: &'a str,
    pub phone: Option<&'a str>,
    pub avatar_url: Option<&'a str>,
}

impl<'a> UserUpdate<'a> {
    pub fn new(user: &'a User) -> Self {
        Self {
            id: user.id.into_inner(),
            full_name: &user.full_name,
            phone: user.phone.as_deref(),
            avatar_url: user.avatar_url.as_deref(),
        }
    }
}
