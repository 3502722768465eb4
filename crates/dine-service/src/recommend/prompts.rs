//! Chat requests the pipeline sends to the language model

use dine_core::{category_query, ChatRequest, PlaceDetails, PriceTier, SearchQuery};

pub const GEOCODE_TEMPERATURE: f32 = 0.3;
pub const SUMMARY_TEMPERATURE: f32 = 0.7;
pub const SUMMARY_MAX_TOKENS: u32 = 150;

pub const RESTAURANT_RADIUS_M: u32 = 5000;
pub const CAFE_RADIUS_M: u32 = 3000;
pub const CAFE_SEARCH_TERM: &str = "카페";

const GEOCODE_SYSTEM: &str =
    "You provide latitude and longitude coordinates for Korean addresses in JSON format only.";
const RESTAURANT_SYSTEM: &str = "You provide concise restaurant summaries in Korean.";
const CAFE_SYSTEM: &str = "You provide concise cafe analysis in Korean.";

pub fn geocode(location: &str) -> ChatRequest {
    let prompt = format!(
        "다음 한국 주소의 위도(latitude)와 경도(longitude)를 정확히 제공해주세요. \
         응답은 JSON 형식으로 {{\"lat\": 숫자, \"lon\": 숫자}}만 제공하세요.\n주소: {location}"
    );
    ChatRequest::new(GEOCODE_SYSTEM, prompt, GEOCODE_TEMPERATURE)
}

/// Text search term for the restaurant step
pub fn restaurant_search_term(query: &SearchQuery) -> String {
    format!("{} {}", query.location, category_query(&query.category))
}

pub fn cafe_search_term(query: &SearchQuery) -> String {
    format!("{} {CAFE_SEARCH_TERM}", query.location)
}

pub fn restaurant_summary(details: &PlaceDetails, price: PriceTier, query: &SearchQuery) -> ChatRequest {
    let prompt = format!(
        "다음 식당 정보를 사용자의 요구사항에 맞게 간단히 요약해주세요.\n\
         식당명: {name}\n\
         평점: {rating}\n\
         가격대: {price}\n\
         위치: {address}\n\n\
         {wishes}\n\n\
         한국어로 2-3문장으로 간결하게 추천 이유를 설명해주세요:",
        name = details.name,
        rating = rating_line(details),
        address = details.formatted_address.as_deref().unwrap_or("-"),
        wishes = wishes(query),
    );
    ChatRequest::new(RESTAURANT_SYSTEM, prompt, SUMMARY_TEMPERATURE).with_max_tokens(SUMMARY_MAX_TOKENS)
}

pub fn cafe_analysis(details: &PlaceDetails, query: &SearchQuery) -> ChatRequest {
    let prompt = format!(
        "다음 카페 정보를 사용자의 요구사항에 맞게 간단히 분석해주세요.\n\
         카페명: {name}\n\
         평점: {rating}\n\n\
         {wishes}\n\n\
         한국어로 2-3문장으로 간결하게 분석해주세요:",
        name = details.name,
        rating = rating_line(details),
        wishes = wishes(query),
    );
    ChatRequest::new(CAFE_SYSTEM, prompt, SUMMARY_TEMPERATURE).with_max_tokens(SUMMARY_MAX_TOKENS)
}

fn rating_line(details: &PlaceDetails) -> String {
    let rating = details
        .rating
        .map_or_else(|| "-".to_string(), |r| r.to_string());
    let reviews = details.user_ratings_total.unwrap_or(0);
    format!("{rating}/5 ({reviews}개 리뷰)")
}

fn wishes(query: &SearchQuery) -> String {
    format!(
        "사용자 요구사항:\n- 기분: {}\n- 목적: {}\n- 분위기: {}",
        query.mood, query.companions, query.atmosphere
    )
}
