//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::handlers::{
    auth, billing, dashboard, health, invitations, issues, landlords, messages, payments,
    properties, tenants, users,
};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(property_routes())
        .merge(tenant_routes())
        .merge(invitation_routes())
        .merge(payment_routes())
        .merge(message_routes())
        .merge(issue_routes())
        .merge(landlord_routes())
        .merge(billing_routes())
        .merge(dashboard_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", post(auth::refresh_token))
        .route("/auth/logout", post(auth::logout))
}

/// User profile routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/@me", get(users::get_current_user))
        .route("/users/@me", patch(users::update_current_user))
        .route("/users/@me/password", put(users::change_password))
}

/// Property routes
fn property_routes() -> Router<AppState> {
    Router::new()
        .route("/properties", post(properties::create_property))
        .route("/properties", get(properties::list_properties))
        .route("/properties/:property_id", get(properties::get_property))
        .route("/properties/:property_id", patch(properties::update_property))
        .route("/properties/:property_id", delete(properties::delete_property))
}

/// Tenant record routes
fn tenant_routes() -> Router<AppState> {
    Router::new()
        .route("/tenants", post(tenants::create_tenant))
        .route("/tenants", get(tenants::list_tenants))
        .route("/tenants/@me", get(tenants::get_own_tenancy))
        .route("/tenants/:tenant_id", get(tenants::get_tenant))
        .route("/tenants/:tenant_id", patch(tenants::update_tenant))
        .route("/tenants/:tenant_id", delete(tenants::delete_tenant))
}

/// Invitation routes - verification and acceptance are public
fn invitation_routes() -> Router<AppState> {
    Router::new()
        .route("/invitations", post(invitations::create_invitation))
        .route("/invitations", get(invitations::list_invitations))
        .route("/invitations/:code", get(invitations::verify_invitation))
        .route("/invitations/:code/accept", post(invitations::accept_invitation))
        .route("/invitations/:code", delete(invitations::revoke_invitation))
}

/// Payment routes
fn payment_routes() -> Router<AppState> {
    Router::new()
        .route("/payments", post(payments::record_payment))
        .route("/payments", get(payments::list_payments))
        .route("/payments/:payment_id", delete(payments::delete_payment))
}

/// Message routes
fn message_routes() -> Router<AppState> {
    Router::new()
        .route("/messages", post(messages::send_message))
        .route("/messages", get(messages::get_conversation))
        .route("/messages/:message_id/read", post(messages::mark_read))
}

/// Issue routes
fn issue_routes() -> Router<AppState> {
    Router::new()
        .route("/issues", post(issues::report_issue))
        .route("/issues", get(issues::list_issues))
        .route("/issues/:issue_id", patch(issues::update_issue))
}

/// Landlord details routes
fn landlord_routes() -> Router<AppState> {
    Router::new()
        .route("/landlord-details", get(landlords::get_details))
        .route("/landlord-details", put(landlords::upsert_details))
}

/// Billing routes - plan listing is public
fn billing_routes() -> Router<AppState> {
    Router::new().route("/billing/plans", get(billing::list_plans))
}

/// Dashboard routes
fn dashboard_routes() -> Router<AppState> {
    Router::new().route("/dashboard", get(dashboard::get_summary))
}
