use crate::domain::model::PlaceRecord;
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

/// Output filename with the literal keyword and radius interpolated verbatim.
/// No sanitization of filesystem-unsafe characters is performed; this matches
/// the documented naming contract.
pub fn output_filename(keyword: &str, radius_meters: u32) -> String {
    format!("{}_radius_{}_meters_searchQuery.csv", keyword, radius_meters)
}

/// Writes the header row and one row per record, in list order, overwriting
/// any existing file of the same name. Returns the path written.
pub fn write_records(
    records: &[PlaceRecord],
    output_dir: &str,
    keyword: &str,
    radius_meters: u32,
) -> Result<PathBuf> {
    let path = Path::new(output_dir).join(output_filename(keyword, radius_meters));
    tracing::debug!("Writing {} records to {}", records.len(), path.display());

    let mut writer = csv::Writer::from_path(&path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    Ok(path)
}
