//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance (schema is migrated on startup)
//! - Running Redis instance
//! - Environment variables: DATABASE_URL, REDIS_URL, JWT_SECRET, API_PORT
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;

/// Register a fresh landlord and return the auth response
async fn register_landlord(server: &TestServer) -> (RegisterRequest, AuthResponse) {
    let request = RegisterRequest::unique();
    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    (request, auth)
}

/// Create a property for the given landlord token
async fn create_property(server: &TestServer, token: &str) -> PropertyResponse {
    let request = CreatePropertyRequest::unique();
    let response = server
        .post_auth("/api/v1/properties", token, &request)
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_landlord() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request, auth) = register_landlord(&server).await;

    assert_eq!(auth.user.full_name, request.full_name);
    assert_eq!(auth.user.role, "landlord");
    assert!(!auth.access_token.is_empty());
    assert!(!auth.refresh_token.is_empty());
}

#[tokio::test]
async fn test_register_duplicate_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (request, _) = register_landlord(&server).await;

    // Second registration with same email
    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, _) = register_landlord(&server).await;

    let login_req = LoginRequest::from_register(&register_req);
    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(auth.user.email, register_req.email);
    assert!(!auth.access_token.is_empty());
}

#[tokio::test]
async fn test_login_wrong_password() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (register_req, _) = register_landlord(&server).await;

    let login_req = LoginRequest {
        email: register_req.email,
        password: "WrongPass123!".to_string(),
    };
    let response = server.post("/api/v1/auth/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_me_requires_auth() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/users/@me").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Property Tests
// ============================================================================

#[tokio::test]
async fn test_property_create_appears_in_list() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_landlord(&server).await;

    let property = create_property(&server, &auth.access_token).await;
    assert_eq!(property.status, "vacant");
    assert_eq!(property.owner_id, auth.user.id);

    let response = server
        .get_auth("/api/v1/properties", &auth.access_token)
        .await
        .unwrap();
    let listed: Vec<PropertyResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(listed.iter().any(|p| p.id == property.id));
}

#[tokio::test]
async fn test_property_delete_removes_from_list() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_landlord(&server).await;
    let property = create_property(&server, &auth.access_token).await;

    let response = server
        .delete_auth(&format!("/api/v1/properties/{}", property.id), &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get_auth("/api/v1/properties", &auth.access_token)
        .await
        .unwrap();
    let listed: Vec<PropertyResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!listed.iter().any(|p| p.id == property.id));
}

#[tokio::test]
async fn test_property_not_deletable_by_non_owner() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, owner) = register_landlord(&server).await;
    let (_, other) = register_landlord(&server).await;

    let property = create_property(&server, &owner.access_token).await;

    // Non-owner delete attempt yields 403 and leaves the row
    let response = server
        .delete_auth(&format!("/api/v1/properties/{}", property.id), &other.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .get_auth("/api/v1/properties", &owner.access_token)
        .await
        .unwrap();
    let listed: Vec<PropertyResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(listed.iter().any(|p| p.id == property.id));
}

// ============================================================================
// Invitation Tests
// ============================================================================

#[tokio::test]
async fn test_invitation_scenario_end_to_end() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_landlord(&server).await;

    // Create property {name: "Casa A", address: "X", units: 2, rent_amount: 1000}
    let property_req = CreatePropertyRequest {
        name: "Casa A".to_string(),
        address: "X".to_string(),
        units: 2,
        rent_amount: 1000,
        image_url: None,
    };
    let response = server
        .post_auth("/api/v1/properties", &auth.access_token, &property_req)
        .await
        .unwrap();
    let property: PropertyResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Appears in the list
    let response = server
        .get_auth("/api/v1/properties", &auth.access_token)
        .await
        .unwrap();
    let listed: Vec<PropertyResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(listed.iter().any(|p| p.id == property.id && p.name == "Casa A"));

    // Invite a tenant to unit "1" with rent 1000
    let invite_req = CreateInvitationRequest::unique(&property.id);
    let response = server
        .post_auth("/api/v1/invitations", &auth.access_token, &invite_req)
        .await
        .unwrap();
    let invitation: InvitationResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(invitation.status, "pending");
    assert_eq!(invitation.rent_amount, 1000);
    // The link embeds the generated code and the given email
    assert!(invitation.share_link.contains(&invitation.invitation_code));
    assert!(invitation.share_link.contains(&invite_req.tenant_email));

    // Visiting the link with a mismatched email yields "invitation not valid"
    let response = server
        .get(&format!(
            "/api/v1/invitations/{}?email=wrong@example.com",
            invitation.invitation_code
        ))
        .await
        .unwrap();
    let status = response.status();
    let body: ErrorBody = response.json().await.unwrap();
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body.error.code, "INVITATION_NOT_FOUND");

    // The correct email resolves the invitation details
    let response = server
        .get(&format!(
            "/api/v1/invitations/{}?email={}",
            invitation.invitation_code, invite_req.tenant_email
        ))
        .await
        .unwrap();
    let details: InvitationDetailsResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(details.property_name, "Casa A");
    assert_eq!(details.unit_number, "1");
    assert_eq!(details.rent_amount, 1000);
}

#[tokio::test]
async fn test_invitation_accept_and_second_attempt_rejected() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_landlord(&server).await;
    let property = create_property(&server, &auth.access_token).await;

    let invite_req = CreateInvitationRequest::unique(&property.id);
    let response = server
        .post_auth("/api/v1/invitations", &auth.access_token, &invite_req)
        .await
        .unwrap();
    let invitation: InvitationResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Accept: creates the tenant account and returns a session
    let accept_req = AcceptInvitationRequest {
        email: invite_req.tenant_email.clone(),
        full_name: "New Tenant".to_string(),
        password: "TenantPass123!".to_string(),
    };
    let response = server
        .post(
            &format!("/api/v1/invitations/{}/accept", invitation.invitation_code),
            &accept_req,
        )
        .await
        .unwrap();
    let tenant_auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(tenant_auth.user.role, "tenant");

    // The tenant can see their own tenancy
    let response = server
        .get_auth("/api/v1/tenants/@me", &tenant_auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // The verifier now reports the invitation as used
    let response = server
        .get(&format!(
            "/api/v1/invitations/{}?email={}",
            invitation.invitation_code, invite_req.tenant_email
        ))
        .await
        .unwrap();
    let status = response.status();
    let body: ErrorBody = response.json().await.unwrap();
    assert_eq!(status, StatusCode::GONE);
    assert_eq!(body.error.code, "INVITATION_ALREADY_USED");

    // A second acceptance attempt is rejected
    let response = server
        .post(
            &format!("/api/v1/invitations/{}/accept", invitation.invitation_code),
            &accept_req,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::GONE).await.unwrap();
}

#[tokio::test]
async fn test_invitation_unknown_code() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .get("/api/v1/invitations/nosuchcd?email=any@example.com")
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_invitation_unit_out_of_range() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_landlord(&server).await;
    let property = create_property(&server, &auth.access_token).await;

    // Properties from the fixture have 2 units
    let mut invite_req = CreateInvitationRequest::unique(&property.id);
    invite_req.unit_number = "9".to_string();
    let response = server
        .post_auth("/api/v1/invitations", &auth.access_token, &invite_req)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Billing Tests
// ============================================================================

#[tokio::test]
async fn test_plans_are_public_and_ordered() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/billing/plans").await.unwrap();
    let plans: Vec<PlanResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(!plans.is_empty());
    assert!(plans
        .windows(2)
        .all(|w| w[0].price_monthly <= w[1].price_monthly));
}

// ============================================================================
// Dashboard Tests
// ============================================================================

#[tokio::test]
async fn test_dashboard_counts_properties() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register_landlord(&server).await;
    create_property(&server, &auth.access_token).await;

    let response = server
        .get_auth("/api/v1/dashboard", &auth.access_token)
        .await
        .unwrap();
    let summary: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(summary["property_count"], 1);
    assert_eq!(summary["vacant_count"], 1);
}
