use serde::{Deserialize, Serialize};

/// Placeholder written to the Email column when no address could be
/// determined, for any reason.
pub const EMAIL_NOT_FOUND: &str = "Not found on site";

/// One consolidated output row. Constructed fully populated, never mutated.
/// Absent upstream values are empty strings so the output stays rectangular.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Address")]
    pub address: String,
    #[serde(rename = "Phone")]
    pub phone: String,
    #[serde(rename = "Website")]
    pub website: String,
    #[serde(rename = "Opening Hours")]
    pub opening_hours: String,
    #[serde(rename = "Email")]
    pub email: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

/// Summary entry from a nearby search. Only the opaque id is consumed; the
/// rest of the entry is fetched again through the details call.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceRef {
    pub place_id: String,
}

/// The consumed subset of a place-details response. Every field is optional
/// upstream; missing fields become empty strings in the output record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaceDetail {
    pub name: Option<String>,
    pub formatted_address: Option<String>,
    pub formatted_phone_number: Option<String>,
    pub website: Option<String>,
    pub opening_hours: Option<OpeningHoursInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpeningHoursInfo {
    pub weekday_text: Option<OpeningHours>,
}

/// The upstream API returns weekday text either as a list of per-day lines
/// or, in some responses, as a single bare string. Both shapes normalize to
/// one joined string; a bare string is a one-element list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OpeningHours {
    Multiple(Vec<String>),
    Single(String),
}

impl OpeningHours {
    pub fn normalize(&self) -> String {
        match self {
            OpeningHours::Multiple(lines) => lines.join(", "),
            OpeningHours::Single(line) => line.clone(),
        }
    }
}

impl PlaceDetail {
    /// Flattens the detail into the six-column record shape, with the email
    /// supplied by the scraper.
    pub fn into_record(self, email: String) -> PlaceRecord {
        let opening_hours = self
            .opening_hours
            .and_then(|info| info.weekday_text)
            .map(|text| text.normalize())
            .unwrap_or_default();

        PlaceRecord {
            name: self.name.unwrap_or_default(),
            address: self.formatted_address.unwrap_or_default(),
            phone: self.formatted_phone_number.unwrap_or_default(),
            website: self.website.unwrap_or_default(),
            opening_hours,
            email,
        }
    }
}
