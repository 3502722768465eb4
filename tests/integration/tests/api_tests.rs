//! API Integration Tests
//!
//! These tests require a running PostgreSQL instance reachable through
//! DATABASE_URL. Upstream services are mocked with wiremock.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_error, assert_json, assert_status, check_test_env, search_body, Credentials,
    TestServer, Upstream, CAFE_ANALYSIS, CAFE_PLACE_ID, RESTAURANT_PLACE_ID, RESTAURANT_SUMMARY,
};
use reqwest::StatusCode;
use serde_json::json;

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn test_liveness() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/healthz").await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), "ok");
}

#[tokio::test]
async fn test_readiness() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.unwrap();
    let body = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["checks"]["database"], "healthy");
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/nowhere").await.unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "NOT_FOUND");
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .client
        .get(format!("{}/api/me", server.base_url()))
        .header("x-request-id", "trace-me-123")
        .send()
        .await
        .unwrap();
    assert_eq!(
        response.headers().get("x-request-id").unwrap(),
        "trace-me-123"
    );
}

// ============================================================================
// Auth
// ============================================================================

#[tokio::test]
async fn test_register_login_me() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let credentials = Credentials::unique();

    let response = server.post("/api/auth/register", &credentials).await.unwrap();
    let body = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(body, json!({ "ok": true }));

    let response = server.post("/api/auth/login", &credentials).await.unwrap();
    let body = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["user"]["email"], credentials.email.as_str());
    assert_eq!(body["user"]["role"], "user");
    let token = body["token"].as_str().unwrap();

    let response = server.get_auth("/api/me", token).await.unwrap();
    let me = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(me["user"]["email"], credentials.email.as_str());
    assert_eq!(me["user"]["role"], "user");
    assert!(me["user"]["id"].is_string());
}

#[tokio::test]
async fn test_register_normalizes_email() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let credentials = Credentials::unique();
    let shouted = Credentials {
        email: format!("  {}  ", credentials.email.to_uppercase()),
        password: credentials.password.clone(),
    };

    let response = server.post("/api/auth/register", &shouted).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    // Same address in lowercase logs in and collides on re-registration
    server.login(&credentials).await.unwrap();
    let response = server.post("/api/auth/register", &credentials).await.unwrap();
    let code = assert_error(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(code, "EMAIL_ALREADY_EXISTS");
}

#[tokio::test]
async fn test_register_rejects_bad_input() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/api/auth/register", &json!({ "email": "not-an-email", "password": "pw" }))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server
        .post("/api/auth/register", &json!({ "email": "someone@example.com" }))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server
        .client
        .post(format!("{}/api/auth/register", server.base_url()))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_BODY");
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (credentials, _) = server.signup().await.unwrap();

    let wrong_password = Credentials {
        email: credentials.email.clone(),
        password: "wrong-password".to_string(),
    };
    let response = server.post("/api/auth/login", &wrong_password).await.unwrap();
    let code = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(code, "INVALID_CREDENTIALS");

    let response = server
        .post("/api/auth/login", &Credentials::unique())
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(code, "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn test_protected_routes_need_a_valid_token() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/me").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = server.get_auth("/api/searches", "garbage.token.value").await.unwrap();
    let code = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(code, "INVALID_TOKEN");
}

// ============================================================================
// Searches and results
// ============================================================================

#[tokio::test]
async fn test_search_produces_recommendation() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = server.signup().await.unwrap();

    let response = server
        .post_auth("/api/searches", &token, &search_body("강남역"))
        .await
        .unwrap();
    let created = assert_json(response, StatusCode::CREATED).await.unwrap();
    let rec_id = created["id"].as_str().unwrap().to_string();

    let response = server
        .get_auth(&format!("/api/results/{rec_id}"), &token)
        .await
        .unwrap();
    let detail = assert_json(response, StatusCode::OK).await.unwrap();
    let result = &detail["result"];

    assert_eq!(result["id"], rec_id.as_str());
    assert_eq!(result["summary"]["weather"], "약한 비 18.5℃");
    assert_eq!(
        result["summary"]["pick_reason"],
        "현재 위치: 강남역, 기분: 기쁨, 카테고리: 한식, 목적: 친구, 예산: 15000원, 분위기: 조용한"
    );

    let restaurant = &result["restaurant"];
    assert_eq!(restaurant["name"], "강남 한상");
    assert_eq!(restaurant["ai_summary"], RESTAURANT_SUMMARY);
    assert_eq!(restaurant["rating"], 4.3);
    assert_eq!(restaurant["review_count"], 240);
    assert_eq!(restaurant["estimated_price"], "₩₩₩₩");
    assert_eq!(
        restaurant["map_link"],
        format!("https://www.google.com/maps/place/?q=place_id:{RESTAURANT_PLACE_ID}")
    );

    let cafe = &result["cafe"];
    assert_eq!(cafe["name"], "느린 오후");
    assert_eq!(cafe["ai_analysis"], CAFE_ANALYSIS);
    assert_eq!(cafe["estimated_price"], "₩₩");
    assert_eq!(cafe["distance_from_restaurant"], "도보 5분");
    assert_eq!(
        cafe["detail_link"],
        format!("https://www.google.com/maps/place/?q=place_id:{CAFE_PLACE_ID}")
    );

    assert_eq!(result["raw"]["fromOpenAI"], true);
    assert_eq!(detail["search"]["status"], "done");
    assert_eq!(detail["search"]["query"]["location"], "강남역");
    assert_eq!(detail["search"]["id"], result["search_id"]);
}

#[tokio::test]
async fn test_search_history_is_per_user() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, alice) = server.signup().await.unwrap();
    let (_, bob) = server.signup().await.unwrap();

    for location in ["강남역", "홍대입구"] {
        let response = server
            .post_auth("/api/searches", &alice, &search_body(location))
            .await
            .unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    let response = server.get_auth("/api/searches", &alice).await.unwrap();
    let history = assert_json(response, StatusCode::OK).await.unwrap();
    let items = history["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    // Newest first
    assert_eq!(items[0]["query"]["location"], "홍대입구");
    assert_eq!(items[1]["query"]["location"], "강남역");
    assert!(items.iter().all(|item| item["status"] == "done"));
    assert!(items.iter().all(|item| item["rec_id"].is_string()));

    let response = server.get_auth("/api/searches", &bob).await.unwrap();
    let history = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(history["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_search_requires_location() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = server.signup().await.unwrap();

    let response = server
        .post_auth("/api/searches", &token, &json!({ "mood": "기쁨" }))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server.get_auth("/api/searches", &token).await.unwrap();
    let history = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(history["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_failed_pipeline_is_recorded() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start_with(Upstream::without_cafes().await)
        .await
        .expect("Failed to start server");
    let (_, token) = server.signup().await.unwrap();

    let response = server
        .post_auth("/api/searches", &token, &search_body("강남역"))
        .await
        .unwrap();
    let body = assert_json(response, StatusCode::INTERNAL_SERVER_ERROR)
        .await
        .unwrap();
    assert_eq!(body["error"]["message"], "No cafe found");

    let response = server.get_auth("/api/searches", &token).await.unwrap();
    let history = assert_json(response, StatusCode::OK).await.unwrap();
    let items = history["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["status"], "failed");
    assert!(items[0]["rec_id"].is_null());
}

#[tokio::test]
async fn test_unlocatable_address_fails() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start_with(Upstream::unlocatable().await)
        .await
        .expect("Failed to start server");
    let (_, token) = server.signup().await.unwrap();

    let response = server
        .post_auth("/api/searches", &token, &search_body("어딘가"))
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::INTERNAL_SERVER_ERROR)
        .await
        .unwrap();
    assert_eq!(code, "GEOCODING_FAILED");
}

#[tokio::test]
async fn test_result_access_control() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, owner) = server.signup().await.unwrap();
    let (_, stranger) = server.signup().await.unwrap();
    let admin = server.admin_token().await.unwrap();

    let response = server
        .post_auth("/api/searches", &owner, &search_body("강남역"))
        .await
        .unwrap();
    let created = assert_json(response, StatusCode::CREATED).await.unwrap();
    let path = format!("/api/results/{}", created["id"].as_str().unwrap());

    let response = server.get_auth(&path, &stranger).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server.get_auth(&path, &admin).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get_auth("/api/results/1", &owner).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server.get_auth("/api/results/abc", &owner).await.unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "INVALID_PATH_PARAMETER");
}

// ============================================================================
// Admin
// ============================================================================

#[tokio::test]
async fn test_admin_routes_reject_regular_users() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, token) = server.signup().await.unwrap();

    for path in ["/api/admin/logs", "/api/admin/audit"] {
        let response = server.get_auth(path, &token).await.unwrap();
        assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
    }

    let response = server.delete_auth("/api/admin/logs/1", &token).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_admin_sees_and_deletes_logs() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (credentials, token) = server.signup().await.unwrap();
    let admin = server.admin_token().await.unwrap();

    let response = server
        .post_auth("/api/searches", &token, &search_body("강남역"))
        .await
        .unwrap();
    let created = assert_json(response, StatusCode::CREATED).await.unwrap();
    let rec_id = created["id"].as_str().unwrap().to_string();

    let response = server.get_auth("/api/searches", &token).await.unwrap();
    let history = assert_json(response, StatusCode::OK).await.unwrap();
    let search_id = history["items"][0]["id"].as_str().unwrap().to_string();

    let response = server.get_auth("/api/admin/logs", &admin).await.unwrap();
    let logs = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(logs["items"]
        .as_array()
        .unwrap()
        .iter()
        .any(|item| item["id"] == search_id.as_str()));

    let response = server
        .delete_auth(&format!("/api/admin/logs/{search_id}"), &admin)
        .await
        .unwrap();
    let body = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["deleted"], 1);

    // Search and recommendation are both gone
    let response = server
        .get_auth(&format!("/api/results/{rec_id}"), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
    let response = server.get_auth("/api/searches", &token).await.unwrap();
    let history = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(history["items"].as_array().unwrap().is_empty());

    // Deleting again removes nothing
    let response = server
        .delete_auth(&format!("/api/admin/logs/{search_id}"), &admin)
        .await
        .unwrap();
    let body = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["deleted"], 0);

    let response = server.get_auth("/api/admin/audit", &admin).await.unwrap();
    let audit = assert_json(response, StatusCode::OK).await.unwrap();
    let entries = audit["items"].as_array().unwrap();
    assert!(entries.iter().any(|entry| entry["action"] == "SEARCH_DELETE"
        && entry["target_id"] == search_id.as_str()));
    assert!(entries.iter().any(|entry| entry["action"] == "REGISTER"
        && entry["meta"]["email"] == credentials.email.as_str()));
}
