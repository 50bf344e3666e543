use clap::Parser;
use nearby_places::utils::{logger, validation::Validate};
use nearby_places::{
    writer, CliConfig, GoogleMapsApi, SearchInputs, SearchPipeline, WebsiteEmailScraper,
};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting nearby-places");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    // Missing address.txt / api_key.txt is the fatal startup case: report and
    // exit 1 before touching the network.
    let inputs = match SearchInputs::load(&config) {
        Ok(inputs) => inputs,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let api = GoogleMapsApi::new(config.api_base.clone(), inputs.api_key.clone());
    let pipeline = SearchPipeline::new(api, WebsiteEmailScraper::new());

    let records = match pipeline
        .run(&inputs.address, inputs.radius_meters, &inputs.keyword)
        .await
    {
        Ok(records) => records,
        Err(e) => {
            tracing::error!("Search failed: {}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    // Empty results are a normal outcome: the pipeline already printed the
    // informational message and there is nothing to write.
    if records.is_empty() {
        return;
    }

    match writer::write_records(
        &records,
        &config.output_path,
        &inputs.keyword,
        inputs.radius_meters,
    ) {
        Ok(path) => {
            tracing::info!("Output saved to: {}", path.display());
            println!("Obtained locations saved to CSV format.");
        }
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
