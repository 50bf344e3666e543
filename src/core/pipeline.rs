use crate::domain::model::PlaceRecord;
use crate::domain::ports::{EmailScraper, PlacesApi};
use crate::utils::error::Result;

/// The linear search flow: geocode the address, run one nearby search, then
/// enrich and scrape each result in the order the API returned it. Strictly
/// sequential; the record list is the only accumulating state.
pub struct SearchPipeline<A: PlacesApi, E: EmailScraper> {
    api: A,
    scraper: E,
}

impl<A: PlacesApi, E: EmailScraper> SearchPipeline<A, E> {
    pub fn new(api: A, scraper: E) -> Self {
        Self { api, scraper }
    }

    /// Runs one query end to end and returns the consolidated records.
    ///
    /// An unresolvable address and a response without a results collection
    /// are informational outcomes, not errors: a message goes to stdout and
    /// an empty list comes back.
    pub async fn run(
        &self,
        address: &str,
        radius_meters: u32,
        keyword: &str,
    ) -> Result<Vec<PlaceRecord>> {
        let location = match self.api.geocode(address).await? {
            Some(location) => location,
            None => {
                println!("Invalid address. Please check the address and try again.");
                return Ok(Vec::new());
            }
        };
        tracing::debug!("Resolved {:?} to {},{}", address, location.lat, location.lng);

        let refs = match self.api.nearby_search(location, radius_meters, keyword).await? {
            Some(refs) => refs,
            None => {
                println!("No entries found.");
                return Ok(Vec::new());
            }
        };
        tracing::info!("Nearby search returned {} places", refs.len());

        let mut records = Vec::new();
        for place_ref in refs {
            // A details response without a result object skips the place.
            let Some(detail) = self.api.place_details(&place_ref.place_id).await? else {
                tracing::debug!("No details for place {}", place_ref.place_id);
                continue;
            };

            let website = detail.website.clone().unwrap_or_default();
            let email = self.scraper.scrape_email(&website).await;
            let record = detail.into_record(email);

            println!("Place: {}", record.name);
            println!("Address: {}", record.address);
            println!("Website: {}", record.website);
            println!("Phone: {}", record.phone);
            println!("Opening Hours: {}", record.opening_hours);
            println!("Email: {}", record.email);
            println!();

            records.push(record);
        }

        Ok(records)
    }
}
