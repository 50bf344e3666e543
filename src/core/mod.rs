pub mod pipeline;
pub mod writer;

pub use crate::domain::model::{PlaceDetail, PlaceRecord, PlaceRef};
pub use crate::domain::ports::{EmailScraper, PlacesApi};
pub use crate::utils::error::Result;
