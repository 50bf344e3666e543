pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::{GoogleMapsApi, WebsiteEmailScraper};
pub use crate::config::{inputs::SearchInputs, CliConfig};
pub use crate::core::{pipeline::SearchPipeline, writer};
pub use crate::domain::model::{OpeningHours, PlaceRecord, EMAIL_NOT_FOUND};
pub use crate::utils::error::{PlacesError, Result};
