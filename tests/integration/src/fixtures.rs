//! Test fixtures and mocked upstream services

use serde::Serialize;
use serde_json::{json, Value};
use wiremock::matchers::{body_string_contains, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_PASSWORD: &str = "TestPass123!";
pub const RESTAURANT_PLACE_ID: &str = "rest-place-1";
pub const CAFE_PLACE_ID: &str = "cafe-place-1";
pub const RESTAURANT_SUMMARY: &str = "정갈한 한식 한 상을 즐길 수 있는 곳입니다.";
pub const CAFE_ANALYSIS: &str = "조용히 대화하기 좋은 카페입니다.";

/// Registration / login body
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn unique() -> Self {
        Self {
            email: format!("user-{}@example.com", uuid::Uuid::new_v4().simple()),
            password: TEST_PASSWORD.to_string(),
        }
    }
}

/// A complete search form
pub fn search_body(location: &str) -> Value {
    json!({
        "location": location,
        "mood": "기쁨",
        "category": "한식",
        "companions": "친구",
        "budget": 15000,
        "atmosphere": "조용한"
    })
}

/// One mock server playing the language model, weather and places APIs
pub struct Upstream {
    pub server: MockServer,
}

impl Upstream {
    /// Every upstream answers successfully
    pub async fn healthy() -> Self {
        let upstream = Self::bare().await;
        upstream.mount_geocode(r#"{"lat": 37.4979, "lon": 127.0276}"#).await;
        upstream.mount_summaries().await;
        upstream.mount_weather().await;
        upstream.mount_places(true).await;
        upstream
    }

    /// The places API knows restaurants but no cafes
    pub async fn without_cafes() -> Self {
        let upstream = Self::bare().await;
        upstream.mount_geocode(r#"{"lat": 37.4979, "lon": 127.0276}"#).await;
        upstream.mount_summaries().await;
        upstream.mount_weather().await;
        upstream.mount_places(false).await;
        upstream
    }

    /// The language model never returns coordinates
    pub async fn unlocatable() -> Self {
        let upstream = Self::bare().await;
        upstream.mount_geocode("죄송합니다, 위치를 찾을 수 없습니다.").await;
        upstream.mount_summaries().await;
        upstream.mount_weather().await;
        upstream.mount_places(true).await;
        upstream
    }

    async fn bare() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    async fn mount_geocode(&self, reply: &str) {
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(body_string_contains("coordinates for Korean addresses"))
            .respond_with(completion(reply))
            .with_priority(1)
            .mount(&self.server)
            .await;
    }

    async fn mount_summaries(&self) {
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(body_string_contains("cafe analysis"))
            .respond_with(completion(CAFE_ANALYSIS))
            .with_priority(2)
            .mount(&self.server)
            .await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(body_string_contains("restaurant summaries"))
            .respond_with(completion(RESTAURANT_SUMMARY))
            .with_priority(2)
            .mount(&self.server)
            .await;
    }

    async fn mount_weather(&self) {
        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "current": { "temperature_2m": 18.5, "weather_code": 61 }
            })))
            .mount(&self.server)
            .await;
    }

    async fn mount_places(&self, with_cafes: bool) {
        let cafes = if with_cafes {
            json!([{ "place_id": CAFE_PLACE_ID, "name": "느린 오후" }])
        } else {
            json!([])
        };
        Mock::given(method("GET"))
            .and(path("/maps/api/place/textsearch/json"))
            .and(query_param("query", "카페"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": if with_cafes { "OK" } else { "ZERO_RESULTS" },
                "results": cafes
            })))
            .with_priority(1)
            .mount(&self.server)
            .await;

        Mock::given(method("GET"))
            .and(path("/maps/api/place/textsearch/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "OK",
                "results": [{ "place_id": RESTAURANT_PLACE_ID, "name": "강남 한상" }]
            })))
            .with_priority(2)
            .mount(&self.server)
            .await;

        Mock::given(method("GET"))
            .and(path("/maps/api/place/details/json"))
            .and(query_param("place_id", RESTAURANT_PLACE_ID))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "OK",
                "result": {
                    "place_id": RESTAURANT_PLACE_ID,
                    "name": "강남 한상",
                    "rating": 4.3,
                    "user_ratings_total": 240,
                    "formatted_address": "서울 강남구 강남대로 396",
                    "price_level": 3
                }
            })))
            .mount(&self.server)
            .await;

        Mock::given(method("GET"))
            .and(path("/maps/api/place/details/json"))
            .and(query_param("place_id", CAFE_PLACE_ID))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "OK",
                "result": {
                    "place_id": CAFE_PLACE_ID,
                    "name": "느린 오후",
                    "rating": 4.6,
                    "user_ratings_total": 95
                }
            })))
            .mount(&self.server)
            .await;
    }
}

fn completion(content: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "choices": [{ "message": { "role": "assistant", "content": content } }]
    }))
}
