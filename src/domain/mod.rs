pub mod model;
pub mod ports;

pub use model::{Coordinate, OpeningHours, PlaceDetail, PlaceRecord, PlaceRef, EMAIL_NOT_FOUND};
pub use ports::{EmailScraper, PlacesApi};
