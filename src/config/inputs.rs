use crate::config::CliConfig;
use crate::utils::error::{PlacesError, Result};
use std::fs;
use std::io::Write;

/// Everything one query needs, fully resolved before the pipeline starts.
/// Keyword and radius travel as explicit parameters from here on; nothing is
/// read from ambient state later.
#[derive(Debug, Clone)]
pub struct SearchInputs {
    pub address: String,
    pub api_key: String,
    pub keyword: String,
    pub radius_meters: u32,
}

impl SearchInputs {
    /// Reads the two required input files and resolves keyword/radius from
    /// flags or interactive prompts. A missing file is the fatal startup
    /// error; a non-numeric radius is a hard parse failure.
    pub fn load(config: &CliConfig) -> Result<Self> {
        let address = read_single_line_file(&config.address_file)?;
        let api_key = read_single_line_file(&config.api_key_file)?;

        let keyword = match &config.keyword {
            Some(keyword) => keyword.clone(),
            None => prompt_line(
                "Input requested search query. Verify address.txt & api_key.txt exists. ",
            )?,
        };

        let radius_meters = match config.radius {
            Some(radius) => radius,
            None => prompt_line("Input radius in meters. (16093.44 Meters = 10 Miles) ")?
                .parse()?,
        };

        Ok(Self {
            address,
            api_key,
            keyword,
            radius_meters,
        })
    }
}

/// Reads a required single-line input file, trimmed. Maps a missing file to
/// the dedicated startup error so main can exit with code 1.
pub fn read_single_line_file(path: &str) -> Result<String> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(content.trim().to_string()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(PlacesError::InputFileError {
            path: path.to_string(),
        }),
        Err(e) => Err(e.into()),
    }
}

fn prompt_line(prompt: &str) -> Result<String> {
    print!("{}", prompt);
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
