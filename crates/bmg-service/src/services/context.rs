//! Service context - dependency container for services
//!
//! Holds all repositories, cache stores, and other dependencies needed by services.

use std::sync::Arc;

use bmg_cache::{RefreshTokenStore, SharedRedisPool};
use bmg_common::auth::JwtService;
use bmg_core::traits::{
    InvitationRepository, IssueRepository, LandlordDetailsRepository, MessageRepository,
    PaymentRepository, PlanRepository, PropertyRepository, TenantRepository, UserRepository,
};
use bmg_core::SnowflakeGenerator;
use bmg_db::PgPool;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - The refresh-token session store
/// - JWT service for authentication
/// - Snowflake generator for ID generation
/// - Invitation settings (expiry window, public base URL for links)
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Redis pool
    redis_pool: SharedRedisPool,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    property_repo: Arc<dyn PropertyRepository>,
    invitation_repo: Arc<dyn InvitationRepository>,
    tenant_repo: Arc<dyn TenantRepository>,
    payment_repo: Arc<dyn PaymentRepository>,
    message_repo: Arc<dyn MessageRepository>,
    issue_repo: Arc<dyn IssueRepository>,
    landlord_repo: Arc<dyn LandlordDetailsRepository>,
    plan_repo: Arc<dyn PlanRepository>,

    // Cache stores
    refresh_token_store: RefreshTokenStore,

    // Services
    jwt_service: Arc<JwtService>,
    snowflake_generator: Arc<SnowflakeGenerator>,

    // Invitation settings
    invitation_expiry_days: i64,
    public_base_url: String,
}

impl ServiceContext {
    // === Database Pool ===

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the Redis connection pool
    pub fn redis_pool(&self) -> &SharedRedisPool {
        &self.redis_pool
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the property repository
    pub fn property_repo(&self) -> &dyn PropertyRepository {
        self.property_repo.as_ref()
    }

    /// Get the invitation repository
    pub fn invitation_repo(&self) -> &dyn InvitationRepository {
        self.invitation_repo.as_ref()
    }

    /// Get the tenant repository
    pub fn tenant_repo(&self) -> &dyn TenantRepository {
        self.tenant_repo.as_ref()
    }

    /// Get the payment repository
    pub fn payment_repo(&self) -> &dyn PaymentRepository {
        self.payment_repo.as_ref()
    }

    /// Get the message repository
    pub fn message_repo(&self) -> &dyn MessageRepository {
        self.message_repo.as_ref()
    }

    /// Get the issue repository
    pub fn issue_repo(&self) -> &dyn IssueRepository {
        self.issue_repo.as_ref()
    }

    /// Get the landlord details repository
    pub fn landlord_repo(&self) -> &dyn LandlordDetailsRepository {
        self.landlord_repo.as_ref()
    }

    /// Get the subscription plan repository
    pub fn plan_repo(&self) -> &dyn PlanRepository {
        self.plan_repo.as_ref()
    }

    // === Cache Stores ===

    /// Get the refresh token store
    pub fn refresh_token_store(&self) -> &RefreshTokenStore {
        &self.refresh_token_store
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> bmg_core::Snowflake {
        self.snowflake_generator.generate()
    }

    // === Invitation Settings ===

    /// Days until issued invitations expire
    pub fn invitation_expiry_days(&self) -> i64 {
        self.invitation_expiry_days
    }

    /// Base URL used to build shareable invitation links
    pub fn public_base_url(&self) -> &str {
        &self.public_base_url
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("redis_pool", &"SharedRedisPool")
            .field("repositories", &"...")
            .field("invitation_expiry_days", &self.invitation_expiry_days)
            .field("public_base_url", &self.public_base_url)
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    redis_pool: Option<SharedRedisPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    property_repo: Option<Arc<dyn PropertyRepository>>,
    invitation_repo: Option<Arc<dyn InvitationRepository>>,
    tenant_repo: Option<Arc<dyn TenantRepository>>,
    payment_repo: Option<Arc<dyn PaymentRepository>>,
    message_repo: Option<Arc<dyn MessageRepository>>,
    issue_repo: Option<Arc<dyn IssueRepository>>,
    landlord_repo: Option<Arc<dyn LandlordDetailsRepository>>,
    plan_repo: Option<Arc<dyn PlanRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
    invitation_expiry_days: Option<i64>,
    public_base_url: Option<String>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn redis_pool(mut self, redis_pool: SharedRedisPool) -> Self {
        self.redis_pool = Some(redis_pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn property_repo(mut self, repo: Arc<dyn PropertyRepository>) -> Self {
        self.property_repo = Some(repo);
        self
    }

    pub fn invitation_repo(mut self, repo: Arc<dyn InvitationRepository>) -> Self {
        self.invitation_repo = Some(repo);
        self
    }

    pub fn tenant_repo(mut self, repo: Arc<dyn TenantRepository>) -> Self {
        self.tenant_repo = Some(repo);
        self
    }

    pub fn payment_repo(mut self, repo: Arc<dyn PaymentRepository>) -> Self {
        self.payment_repo = Some(repo);
        self
    }

    pub fn message_repo(mut self, repo: Arc<dyn MessageRepository>) -> Self {
        self.message_repo = Some(repo);
        self
    }

    pub fn issue_repo(mut self, repo: Arc<dyn IssueRepository>) -> Self {
        self.issue_repo = Some(repo);
        self
    }

    pub fn landlord_repo(mut self, repo: Arc<dyn LandlordDetailsRepository>) -> Self {
        self.landlord_repo = Some(repo);
        self
    }

    pub fn plan_repo(mut self, repo: Arc<dyn PlanRepository>) -> Self {
        self.plan_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    pub fn invitation_expiry_days(mut self, days: i64) -> Self {
        self.invitation_expiry_days = Some(days);
        self
    }

    pub fn public_base_url(mut self, url: impl Into<String>) -> Self {
        self.public_base_url = Some(url.into());
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        let redis_pool = self
            .redis_pool
            .ok_or_else(|| ServiceError::validation("redis_pool is required"))?;
        let refresh_token_store = RefreshTokenStore::new((*redis_pool).clone());

        Ok(ServiceContext {
            pool: self
                .pool
                .ok_or_else(|| ServiceError::validation("pool is required"))?,
            redis_pool,
            user_repo: self
                .user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            property_repo: self
                .property_repo
                .ok_or_else(|| ServiceError::validation("property_repo is required"))?,
            invitation_repo: self
                .invitation_repo
                .ok_or_else(|| ServiceError::validation("invitation_repo is required"))?,
            tenant_repo: self
                .tenant_repo
                .ok_or_else(|| ServiceError::validation("tenant_repo is required"))?,
            payment_repo: self
                .payment_repo
                .ok_or_else(|| ServiceError::validation("payment_repo is required"))?,
            message_repo: self
                .message_repo
                .ok_or_else(|| ServiceError::validation("message_repo is required"))?,
            issue_repo: self
                .issue_repo
                .ok_or_else(|| ServiceError::validation("issue_repo is required"))?,
            landlord_repo: self
                .landlord_repo
                .ok_or_else(|| ServiceError::validation("landlord_repo is required"))?,
            plan_repo: self
                .plan_repo
                .ok_or_else(|| ServiceError::validation("plan_repo is required"))?,
            refresh_token_store,
            jwt_service: self
                .jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
            snowflake_generator: self
                .snowflake_generator
                .ok_or_else(|| ServiceError::validation("snowflake_generator is required"))?,
            invitation_expiry_days: self.invitation_expiry_days.unwrap_or(7),
            public_base_url: self
                .public_base_url
                .unwrap_or_else(|| "http://localhost:3000".to_string()),
        })
    }
}
