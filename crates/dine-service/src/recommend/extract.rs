//! Coordinates out of a free-form language model reply

use dine_core::{Coordinates, DomainError};
use serde_json::Value as JsonValue;

/// Parse `{"lat": .., "lon": ..}` from the first `{` to the last `}` of `reply`.
///
/// # Errors
/// `DomainError::Geocoding` when no object is present, it is not valid JSON,
/// either field is missing or non-numeric, or the point is out of range.
pub fn extract_coordinates(reply: &str) -> Result<Coordinates, DomainError> {
    let (Some(start), Some(end)) = (reply.find('{'), reply.rfind('}')) else {
        return Err(DomainError::Geocoding("no JSON object in reply".to_string()));
    };
    if end < start {
        return Err(DomainError::Geocoding("no JSON object in reply".to_string()));
    }

    let value: JsonValue = serde_json::from_str(&reply[start..=end])
        .map_err(|e| DomainError::Geocoding(format!("reply is not valid JSON: {e}")))?;

    let field = |name: &str| {
        value
            .get(name)
            .and_then(JsonValue::as_f64)
            .ok_or_else(|| DomainError::Geocoding(format!("`{name}` missing or not a number")))
    };

    let coordinates = Coordinates::new(field("lat")?, field("lon")?);
    if !coordinates.is_valid() {
        return Err(DomainError::Geocoding(format!(
            "coordinates out of range: {}",
            coordinates.to_query_param()
        )));
    }
    Ok(coordinates)
}
