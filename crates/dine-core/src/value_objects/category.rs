//! Food category to places search term

/// Map a user-facing cuisine category to the text-search term sent upstream.
///
/// Unknown categories (including an empty one) search for any restaurant.
pub fn category_query(category: &str) -> &'static str {
    match category.trim() {
        "양식" => "restaurant italian western",
        "한식" => "korean restaurant",
        "일식" => "japanese restaurant sushi",
        "중식" => "chinese restaurant",
        "아시안" => "asian restaurant thai vietnamese",
        _ => "restaurant",
    }
}
