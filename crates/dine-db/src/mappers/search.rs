//! Search model -> entity

use dine_core::{DomainError, Search, SearchListing, SearchQuery, Snowflake};

use crate::models::{SearchListingModel, SearchModel};

impl TryFrom<SearchModel> for Search {
    type Error = DomainError;

    fn try_from(model: SearchModel) -> Result<Self, Self::Error> {
        Ok(Search {
            id: Snowflake::new(model.id),
            user_id: Snowflake::new(model.user_id),
            query: SearchQuery {
                location: model.location,
                mood: model.mood,
                category: model.category,
                companions: model.companions,
                budget: model.budget,
                atmosphere: model.atmosphere,
            },
            status: model
                .status
                .parse()
                .map_err(|e: DomainError| DomainError::DatabaseError(e.to_string()))?,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

impl TryFrom<SearchListingModel> for SearchListing {
    type Error = DomainError;

    fn try_from(model: SearchListingModel) -> Result<Self, Self::Error> {
        Ok(SearchListing {
            search: Search::try_from(model.search)?,
            rec_id: model.rec_id.map(Snowflake::new),
        })
    }
}
