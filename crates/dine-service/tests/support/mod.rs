//! In-memory repositories and scripted upstream ports for service tests

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use dine_common::JwtService;
use dine_core::{
    AuditLog, AuditLogRepository, ChatRequest, Coordinates, CurrentWeather, DomainError,
    LanguageModel, PlaceDetails, PlaceSearch, PlaceSummary, PlacesProvider, Recommendation,
    RecommendationRepository, RepoResult, Search, SearchListing, SearchRepository, SearchStatus,
    Snowflake, SnowflakeGenerator, UpstreamResult, User, UserRepository, WeatherProvider,
};
use dine_service::{Actor, ServiceContext};

pub const JWT_SECRET: &str = "service-test-secret";

// ============================================================================
// Repositories
// ============================================================================

#[derive(Default)]
struct Tables {
    users: Vec<(User, String)>,
    searches: Vec<Search>,
    recommendations: Vec<Recommendation>,
    audit: Vec<AuditLog>,
}

/// One store backing all four repository traits
#[derive(Default)]
pub struct MemoryDb {
    tables: Mutex<Tables>,
    reject_completion: AtomicBool,
}

impl MemoryDb {
    /// Make every later `complete` fail as if the status update hit a database error
    pub fn reject_completion(&self) {
        self.reject_completion.store(true, Ordering::SeqCst);
    }

    pub fn searches(&self) -> Vec<Search> {
        self.tables.lock().unwrap().searches.clone()
    }

    pub fn recommendations(&self) -> Vec<Recommendation> {
        self.tables.lock().unwrap().recommendations.clone()
    }

    pub fn audit(&self) -> Vec<AuditLog> {
        self.tables.lock().unwrap().audit.clone()
    }

    fn listing(tables: &Tables, search: &Search) -> SearchListing {
        let rec_id = tables
            .recommendations
            .iter()
            .find(|r| r.search_id == search.id)
            .map(|r| r.id);
        SearchListing {
            search: search.clone(),
            rec_id,
        }
    }

    fn newest_first(tables: &Tables, filter: impl Fn(&Search) -> bool, limit: i64) -> Vec<SearchListing> {
        let mut rows: Vec<&Search> = tables.searches.iter().filter(|s| filter(s)).collect();
        rows.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        rows.into_iter()
            .take(limit as usize)
            .map(|s| Self::listing(tables, s))
            .collect()
    }
}

#[async_trait]
impl UserRepository for MemoryDb {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.users.iter().find(|(u, _)| u.id == id).map(|(u, _)| u.clone()))
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .users
            .iter()
            .find(|(u, _)| u.email == email)
            .map(|(u, _)| u.clone()))
    }

    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.users.iter().any(|(u, _)| u.email == email))
    }

    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()> {
        let mut tables = self.tables.lock().unwrap();
        if tables.users.iter().any(|(u, _)| u.email == user.email) {
            return Err(DomainError::EmailAlreadyExists);
        }
        tables.users.push((user.clone(), password_hash.to_string()));
        Ok(())
    }

    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.users.iter().find(|(u, _)| u.id == id).map(|(_, h)| h.clone()))
    }
}

#[async_trait]
impl SearchRepository for MemoryDb {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Search>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.searches.iter().find(|s| s.id == id).cloned())
    }

    async fn create(&self, search: &Search) -> RepoResult<()> {
        self.tables.lock().unwrap().searches.push(search.clone());
        Ok(())
    }

    async fn update_status(&self, id: Snowflake, status: SearchStatus) -> RepoResult<()> {
        let mut tables = self.tables.lock().unwrap();
        let search = tables
            .searches
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(DomainError::SearchNotFound(id))?;
        search.resolve(status);
        Ok(())
    }

    async fn list_by_user(&self, user_id: Snowflake, limit: i64) -> RepoResult<Vec<SearchListing>> {
        let tables = self.tables.lock().unwrap();
        Ok(Self::newest_first(&tables, |s| s.user_id == user_id, limit))
    }

    async fn list_all(&self, limit: i64) -> RepoResult<Vec<SearchListing>> {
        let tables = self.tables.lock().unwrap();
        Ok(Self::newest_first(&tables, |_| true, limit))
    }

    async fn delete(&self, id: Snowflake) -> RepoResult<u64> {
        let mut tables = self.tables.lock().unwrap();
        let before = tables.searches.len();
        tables.searches.retain(|s| s.id != id);
        tables.recommendations.retain(|r| r.search_id != id);
        Ok((before - tables.searches.len()) as u64)
    }
}

#[async_trait]
impl RecommendationRepository for MemoryDb {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Recommendation>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.recommendations.iter().find(|r| r.id == id).cloned())
    }

    async fn complete(&self, recommendation: &Recommendation) -> RepoResult<()> {
        if self.reject_completion.load(Ordering::SeqCst) {
            return Err(DomainError::DatabaseError("status update rejected".to_string()));
        }
        let mut tables = self.tables.lock().unwrap();
        if tables
            .recommendations
            .iter()
            .any(|r| r.search_id == recommendation.search_id)
        {
            return Err(DomainError::RecommendationExists);
        }
        let search = tables
            .searches
            .iter_mut()
            .find(|s| s.id == recommendation.search_id)
            .ok_or(DomainError::SearchNotFound(recommendation.search_id))?;
        search.resolve(SearchStatus::Done);
        tables.recommendations.push(recommendation.clone());
        Ok(())
    }

    async fn delete_by_search(&self, search_id: Snowflake) -> RepoResult<u64> {
        let mut tables = self.tables.lock().unwrap();
        let before = tables.recommendations.len();
        tables.recommendations.retain(|r| r.search_id != search_id);
        Ok((before - tables.recommendations.len()) as u64)
    }
}

#[async_trait]
impl AuditLogRepository for MemoryDb {
    async fn append(&self, entry: &AuditLog) -> RepoResult<()> {
        self.tables.lock().unwrap().audit.push(entry.clone());
        Ok(())
    }

    async fn list_recent(&self, limit: i64) -> RepoResult<Vec<AuditLog>> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.audit.iter().rev().take(limit as usize).cloned().collect())
    }
}

// ============================================================================
// Upstream ports
// ============================================================================

/// Answers geocoding prompts with `geocode_reply` and everything else with
/// `summary_reply`. A `None` geocode reply is an upstream failure.
pub struct StubModel {
    pub geocode_reply: Option<String>,
    pub summary_reply: String,
    pub requests: Mutex<Vec<ChatRequest>>,
}

impl StubModel {
    pub fn new(geocode_reply: &str) -> Self {
        Self {
            geocode_reply: Some(geocode_reply.to_string()),
            summary_reply: "분위기 좋은 곳입니다.".to_string(),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            geocode_reply: None,
            ..Self::new("")
        }
    }
}

#[async_trait]
impl LanguageModel for StubModel {
    async fn complete(&self, request: ChatRequest) -> UpstreamResult<String> {
        let is_geocode = request.messages[0].content.contains("coordinates");
        self.requests.lock().unwrap().push(request);
        if is_geocode {
            self.geocode_reply
                .clone()
                .ok_or_else(|| DomainError::upstream("language model", "status 500 Internal Server Error"))
        } else {
            Ok(self.summary_reply.clone())
        }
    }
}

pub struct StubWeather {
    pub current: Option<CurrentWeather>,
    pub asked: Mutex<Vec<Coordinates>>,
}

impl StubWeather {
    pub fn clear(temperature: f64) -> Self {
        Self {
            current: Some(CurrentWeather {
                temperature,
                weather_code: 0,
            }),
            asked: Mutex::new(Vec::new()),
        }
    }

    pub fn down() -> Self {
        Self {
            current: None,
            asked: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl WeatherProvider for StubWeather {
    async fn current(&self, at: Coordinates) -> UpstreamResult<CurrentWeather> {
        self.asked.lock().unwrap().push(at);
        self.current
            .ok_or_else(|| DomainError::upstream("weather", "status 503 Service Unavailable"))
    }
}

/// Routes searches containing `카페` to the cafe list
#[derive(Default)]
pub struct StubPlaces {
    pub restaurants: Vec<PlaceSummary>,
    pub cafes: Vec<PlaceSummary>,
    pub details: HashMap<String, PlaceDetails>,
    pub searches: Mutex<Vec<PlaceSearch>>,
}

impl StubPlaces {
    /// One restaurant with `restaurant_price` and one cafe without a price level
    pub fn seoul(restaurant_price: Option<i64>) -> Self {
        let mut places = Self::default();
        places.add_restaurant("r-1", "을지로 노포", Some(4.4), Some(812), restaurant_price);
        places.add_cafe("c-1", "골목 카페", Some(4.7), None);
        places
    }

    pub fn add_restaurant(
        &mut self,
        id: &str,
        name: &str,
        rating: Option<f64>,
        reviews: Option<i64>,
        price_level: Option<i64>,
    ) {
        self.restaurants.push(summary(id, name));
        self.details.insert(id.to_string(), details(id, name, rating, reviews, price_level));
    }

    pub fn add_cafe(&mut self, id: &str, name: &str, rating: Option<f64>, price_level: Option<i64>) {
        self.cafes.push(summary(id, name));
        self.details.insert(id.to_string(), details(id, name, rating, Some(120), price_level));
    }
}

fn summary(id: &str, name: &str) -> PlaceSummary {
    PlaceSummary {
        place_id: id.to_string(),
        name: name.to_string(),
    }
}

fn details(id: &str, name: &str, rating: Option<f64>, reviews: Option<i64>, price_level: Option<i64>) -> PlaceDetails {
    PlaceDetails {
        place_id: id.to_string(),
        name: name.to_string(),
        rating,
        user_ratings_total: reviews,
        formatted_address: Some("서울특별시 중구".to_string()),
        price_level,
        location: None,
    }
}

#[async_trait]
impl PlacesProvider for StubPlaces {
    async fn text_search(&self, search: &PlaceSearch) -> UpstreamResult<Vec<PlaceSummary>> {
        self.searches.lock().unwrap().push(search.clone());
        if search.query.contains("카페") {
            Ok(self.cafes.clone())
        } else {
            Ok(self.restaurants.clone())
        }
    }

    async fn details(&self, place_id: &str) -> UpstreamResult<PlaceDetails> {
        self.details
            .get(place_id)
            .cloned()
            .ok_or_else(|| DomainError::upstream("places", format!("INVALID_REQUEST: {place_id}")))
    }
}

// ============================================================================
// Harness
// ============================================================================

pub const SEOUL_REPLY: &str = "```json\n{\"lat\": 37.5665, \"lon\": 126.978}\n```";

pub struct Harness {
    pub ctx: ServiceContext,
    pub db: Arc<MemoryDb>,
    pub model: Arc<StubModel>,
    pub weather: Arc<StubWeather>,
    pub places: Arc<StubPlaces>,
}

impl Harness {
    pub fn new(model: StubModel, weather: StubWeather, places: StubPlaces) -> Self {
        let db = Arc::new(MemoryDb::default());
        let model = Arc::new(model);
        let weather = Arc::new(weather);
        let places = Arc::new(places);

        let ctx = ServiceContext::builder()
            .user_repo(db.clone())
            .search_repo(db.clone())
            .recommendation_repo(db.clone())
            .audit_repo(db.clone())
            .language_model(model.clone())
            .weather(weather.clone())
            .places(places.clone())
            .jwt_service(Arc::new(JwtService::new(JWT_SECRET, 7200)))
            .snowflake_generator(Arc::new(SnowflakeGenerator::new(1)))
            .build()
            .expect("all dependencies provided");

        Self {
            ctx,
            db,
            model,
            weather,
            places,
        }
    }

    /// Everything succeeds; the restaurant reports `price_level` 2
    pub fn happy() -> Self {
        Self::new(StubModel::new(SEOUL_REPLY), StubWeather::clear(21.5), StubPlaces::seoul(Some(2)))
    }

    /// Seed a user directly, bypassing registration
    pub async fn user(&self, email: &str, role: dine_core::Role) -> Actor {
        let user = User::new(self.ctx.generate_id(), email, role);
        let hash = dine_common::hash_password("pa55word").unwrap();
        UserRepository::create(self.db.as_ref(), &user, &hash).await.unwrap();
        Actor::new(user.id, user.role)
    }
}
