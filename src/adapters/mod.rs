pub mod email;
pub mod google;

pub use email::WebsiteEmailScraper;
pub use google::GoogleMapsApi;
