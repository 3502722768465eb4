//! Test helpers for integration tests
//!
//! Spawns the application on an ephemeral port and wraps the HTTP calls the
//! tests make.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use dine_api::{create_app, create_app_state, seed_admin};
use dine_common::AppConfig;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::fixtures::{Credentials, Upstream, TEST_PASSWORD};

/// Running application plus the upstream mocks it talks to
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    pub admin: Credentials,
    pub upstream: Upstream,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start against healthy upstream mocks
    pub async fn start() -> Result<Self> {
        Self::start_with(Upstream::healthy().await).await
    }

    /// Start against the given upstream mocks
    pub async fn start_with(upstream: Upstream) -> Result<Self> {
        let admin = Credentials {
            email: format!("admin-{}@example.com", uuid::Uuid::new_v4().simple()),
            password: TEST_PASSWORD.to_string(),
        };
        let config = test_config(&upstream.uri(), &admin)?;

        let state = create_app_state(config).await?;
        seed_admin(&state).await?;
        let app = create_app(state)?;

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;

        Ok(Self {
            addr,
            client,
            admin,
            upstream,
            _handle: handle,
        })
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    fn with_token(request: RequestBuilder, token: &str) -> RequestBuilder {
        request.header("Authorization", format!("Bearer {token}"))
    }

    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(Self::with_token(self.client.get(self.url(path)), token)
            .send()
            .await?)
    }

    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.client.post(self.url(path)).json(body).send().await?)
    }

    pub async fn post_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        Ok(Self::with_token(self.client.post(self.url(path)), token)
            .json(body)
            .send()
            .await?)
    }

    pub async fn delete_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(Self::with_token(self.client.delete(self.url(path)), token)
            .send()
            .await?)
    }

    /// Register fresh credentials and log in with them
    pub async fn signup(&self) -> Result<(Credentials, String)> {
        let credentials = Credentials::unique();
        let response = self.post("/api/auth/register", &credentials).await?;
        assert_status(response, StatusCode::CREATED).await?;
        let token = self.login(&credentials).await?;
        Ok((credentials, token))
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<String> {
        let response = self.post("/api/auth/login", credentials).await?;
        let body = assert_json(response, StatusCode::OK).await?;
        body["token"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| anyhow::anyhow!("login response without token: {body}"))
    }

    pub async fn admin_token(&self) -> Result<String> {
        self.login(&self.admin).await
    }
}

/// Configuration pointing every upstream at the mock server
pub fn test_config(upstream_uri: &str, admin: &Credentials) -> Result<AppConfig> {
    dotenvy::dotenv().ok();
    let database_url = std::env::var("DATABASE_URL")?;

    let vars: HashMap<&str, String> = HashMap::from([
        ("API_PORT", "0".to_string()),
        ("DATABASE_URL", database_url),
        ("JWT_SECRET", "integration-test-secret".to_string()),
        ("OPENAI_API_KEY", "sk-test".to_string()),
        ("OPENAI_BASE_URL", upstream_uri.to_string()),
        ("GOOGLE_MAPS_API_KEY", "maps-test".to_string()),
        ("GOOGLE_MAPS_BASE_URL", upstream_uri.to_string()),
        ("WEATHER_BASE_URL", upstream_uri.to_string()),
        ("ADMIN_EMAIL", admin.email.clone()),
        ("ADMIN_PASS", admin.password.clone()),
        ("RATE_LIMIT_REQUESTS_PER_SECOND", "1".to_string()),
        ("RATE_LIMIT_BURST", "10000".to_string()),
    ]);

    AppConfig::from_lookup(|key| vars.get(key).cloned())
        .map_err(|e| anyhow::anyhow!("Config error: {e}"))
}

/// Skip database-backed tests when no database is configured
pub fn check_test_env() -> bool {
    dotenvy::dotenv().ok();
    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }
    true
}

/// Assert response status and parse the JSON body
pub async fn assert_json(response: Response, expected_status: StatusCode) -> Result<Value> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing the body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(())
}

/// Assert an error response and return its code
pub async fn assert_error(response: Response, expected_status: StatusCode) -> Result<String> {
    let body = assert_json(response, expected_status).await?;
    body["error"]["code"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| anyhow::anyhow!("error body without code: {body}"))
}
