pub mod inputs;

use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_positive_number, validate_url, Validate,
};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "nearby-places")]
#[command(about = "Query a places API for businesses near an address and export them to CSV")]
pub struct CliConfig {
    /// Search keyword; prompted for interactively when omitted
    #[arg(long)]
    pub keyword: Option<String>,

    /// Search radius in meters; prompted for interactively when omitted
    #[arg(long)]
    pub radius: Option<u32>,

    /// File holding the free-text address to search around
    #[arg(long, default_value = "address.txt")]
    pub address_file: String,

    /// File holding the mapping-service API key
    #[arg(long, default_value = "api_key.txt")]
    pub api_key_file: String,

    /// Base URL of the mapping service
    #[arg(long, default_value = "https://maps.googleapis.com")]
    pub api_base: String,

    /// Directory the output CSV is written to
    #[arg(long, default_value = ".")]
    pub output_path: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_base", &self.api_base)?;
        validate_path("output_path", &self.output_path)?;
        validate_path("address_file", &self.address_file)?;
        validate_path("api_key_file", &self.api_key_file)?;

        if let Some(keyword) = &self.keyword {
            validate_non_empty_string("keyword", keyword)?;
        }
        if let Some(radius) = self.radius {
            validate_positive_number("radius", radius, 1)?;
        }

        Ok(())
    }
}
