use crate::domain::model::{Coordinate, PlaceDetail, PlaceRef};
use crate::domain::ports::PlacesApi;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

/// Field set requested from the details endpoint, verbatim as the upstream
/// contract names them.
const DETAIL_FIELDS: &str = "name,formatted_address,formatted_phone_number,website,opening_hours";

/// Reqwest bindings for the mapping service's geocoding, nearby-search and
/// place-details endpoints. The base URL is configurable so tests can point
/// the client at a stub server.
pub struct GoogleMapsApi {
    base_url: String,
    api_key: String,
    client: Client,
}

impl GoogleMapsApi {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            client: Client::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    results: Vec<GeocodeCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeocodeCandidate {
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: Coordinate,
}

#[derive(Debug, Deserialize)]
struct NearbyResponse {
    results: Option<Vec<PlaceRef>>,
}

#[derive(Debug, Deserialize)]
struct DetailsResponse {
    result: Option<PlaceDetail>,
}

#[async_trait]
impl PlacesApi for GoogleMapsApi {
    /// Resolves a free-text address to the first candidate's coordinate.
    /// Further candidates are discarded; no disambiguation.
    async fn geocode(&self, address: &str) -> Result<Option<Coordinate>> {
        let url = format!("{}/maps/api/geocode/json", self.base_url);
        tracing::debug!("Geocoding address via {}", url);

        let response: GeocodeResponse = self
            .client
            .get(&url)
            .query(&[("address", address), ("key", self.api_key.as_str())])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response
            .results
            .into_iter()
            .next()
            .map(|candidate| candidate.geometry.location))
    }

    /// One nearby-search call; only the first page is consumed. `None` means
    /// the response carried no results collection at all.
    async fn nearby_search(
        &self,
        location: Coordinate,
        radius_meters: u32,
        keyword: &str,
    ) -> Result<Option<Vec<PlaceRef>>> {
        let url = format!("{}/maps/api/place/nearbysearch/json", self.base_url);
        tracing::debug!(
            "Nearby search at {},{} radius {}m keyword {:?}",
            location.lat,
            location.lng,
            radius_meters,
            keyword
        );

        let response: NearbyResponse = self
            .client
            .get(&url)
            .query(&[
                ("location", format!("{},{}", location.lat, location.lng)),
                ("radius", radius_meters.to_string()),
                ("keyword", keyword.to_string()),
                ("key", self.api_key.clone()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response.results)
    }

    async fn place_details(&self, place_id: &str) -> Result<Option<PlaceDetail>> {
        let url = format!("{}/maps/api/place/details/json", self.base_url);
        tracing::debug!("Fetching details for place {}", place_id);

        let response: DetailsResponse = self
            .client
            .get(&url)
            .query(&[
                ("place_id", place_id),
                ("fields", DETAIL_FIELDS),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response.result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn api_for(server: &MockServer) -> GoogleMapsApi {
        GoogleMapsApi::new(server.base_url(), "test-key".to_string())
    }

    #[tokio::test]
    async fn test_geocode_returns_first_candidate() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/maps/api/geocode/json")
                .query_param("address", "1 Infinite Loop, Cupertino, CA")
                .query_param("key", "test-key");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "results": [
                        {"geometry": {"location": {"lat": 37.33, "lng": -122.03}}},
                        {"geometry": {"location": {"lat": 0.0, "lng": 0.0}}}
                    ]
                }));
        });

        let api = api_for(&server);
        let coord = api
            .geocode("1 Infinite Loop, Cupertino, CA")
            .await
            .unwrap()
            .unwrap();

        mock.assert();
        assert_eq!(coord.lat, 37.33);
        assert_eq!(coord.lng, -122.03);
    }

    #[tokio::test]
    async fn test_geocode_no_candidates_is_none() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/maps/api/geocode/json");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"results": []}));
        });

        let api = api_for(&server);
        let coord = api.geocode("nowhere at all").await.unwrap();
        assert!(coord.is_none());
    }

    #[tokio::test]
    async fn test_nearby_search_passes_parameters() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/maps/api/place/nearbysearch/json")
                .query_param("location", "37.33,-122.03")
                .query_param("radius", "1000")
                .query_param("keyword", "coffee");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "results": [{"place_id": "abc"}, {"place_id": "def"}]
                }));
        });

        let api = api_for(&server);
        let refs = api
            .nearby_search(
                Coordinate {
                    lat: 37.33,
                    lng: -122.03,
                },
                1000,
                "coffee",
            )
            .await
            .unwrap()
            .unwrap();

        mock.assert();
        assert_eq!(refs.len(), 2);
        assert_eq!(refs[0].place_id, "abc");
        assert_eq!(refs[1].place_id, "def");
    }

    #[tokio::test]
    async fn test_nearby_search_missing_results_collection() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/maps/api/place/nearbysearch/json");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"status": "ZERO_RESULTS"}));
        });

        let api = api_for(&server);
        let refs = api
            .nearby_search(Coordinate { lat: 0.0, lng: 0.0 }, 500, "coffee")
            .await
            .unwrap();
        assert!(refs.is_none());
    }

    #[tokio::test]
    async fn test_place_details_full_response() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/maps/api/place/details/json")
                .query_param("place_id", "abc")
                .query_param("fields", DETAIL_FIELDS);
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "result": {
                        "name": "Cafe X",
                        "formatted_address": "1 Main St, Cupertino, CA",
                        "formatted_phone_number": "(408) 555-0100",
                        "website": "http://example.com",
                        "opening_hours": {"weekday_text": ["Mon: 8-4"]}
                    }
                }));
        });

        let api = api_for(&server);
        let detail = api.place_details("abc").await.unwrap().unwrap();

        mock.assert();
        assert_eq!(detail.name.as_deref(), Some("Cafe X"));
        assert_eq!(detail.website.as_deref(), Some("http://example.com"));
    }

    #[tokio::test]
    async fn test_place_details_without_result_is_none() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/maps/api/place/details/json");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"status": "NOT_FOUND"}));
        });

        let api = api_for(&server);
        let detail = api.place_details("missing").await.unwrap();
        assert!(detail.is_none());
    }

    #[tokio::test]
    async fn test_server_error_propagates() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/maps/api/geocode/json");
            then.status(500);
        });

        let api = api_for(&server);
        assert!(api.geocode("anything").await.is_err());
    }
}
