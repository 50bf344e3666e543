use crate::domain::model::{Coordinate, PlaceDetail, PlaceRef};
use crate::utils::error::Result;
use async_trait::async_trait;

/// The mapping-service capabilities the pipeline depends on. Thin bindings
/// over a remote service; kept behind a trait so the core flow runs against a
/// stub in tests.
///
/// "Nothing found" outcomes are Ok values, not errors: a geocode with no
/// candidate is `Ok(None)`, a nearby response without a results collection is
/// `Ok(None)`, and a details response without a result object is `Ok(None)`.
#[async_trait]
pub trait PlacesApi: Send + Sync {
    async fn geocode(&self, address: &str) -> Result<Option<Coordinate>>;

    async fn nearby_search(
        &self,
        location: Coordinate,
        radius_meters: u32,
        keyword: &str,
    ) -> Result<Option<Vec<PlaceRef>>>;

    async fn place_details(&self, place_id: &str) -> Result<Option<PlaceDetail>>;
}

/// Email extraction from a business website. Infallible by contract: every
/// failure mode collapses to the "Not found on site" sentinel.
#[async_trait]
pub trait EmailScraper: Send + Sync {
    async fn scrape_email(&self, website: &str) -> String;
}
