//! Load site records from CSV
//!
//! Expected header: `site_id,roof_area,monthly_consumption,tariff_rate,cost_per_watt,irradiance`

use super::FeasibilityInput;
use crate::error::Result;
use csv::Reader;
use serde::Deserialize;
use std::path::Path;

/// A named input record from a batch file
#[derive(Debug, Clone, PartialEq)]
pub struct Site {
    pub site_id: String,
    pub input: FeasibilityInput,
}

/// Raw CSV row
#[derive(Debug, Deserialize)]
struct CsvRow {
    site_id: String,
    roof_area: f64,
    monthly_consumption: f64,
    tariff_rate: f64,
    cost_per_watt: f64,
    irradiance: f64,
}

impl CsvRow {
    fn into_site(self) -> Site {
        Site {
            site_id: self.site_id,
            input: FeasibilityInput::new(
                self.roof_area,
                self.monthly_consumption,
                self.tariff_rate,
                self.cost_per_watt,
                self.irradiance,
            ),
        }
    }
}

/// Load all sites from a CSV file
pub fn load_sites<P: AsRef<Path>>(path: P) -> Result<Vec<Site>> {
    let path = path.as_ref();
    let reader = Reader::from_path(path)?;
    let sites = collect_sites(reader)?;
    log::info!("loaded {} sites from {}", sites.len(), path.display());
    Ok(sites)
}

/// Load sites from any reader (e.g., string buffer, stdin)
pub fn load_sites_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<Site>> {
    collect_sites(Reader::from_reader(reader))
}

fn collect_sites<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<Site>> {
    let mut sites = Vec::new();
    for result in reader.deserialize() {
        let row: CsvRow = result?;
        sites.push(row.into_site());
    }
    Ok(sites)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FeasibilityError;

    const SITES_CSV: &str = "\
site_id,roof_area,monthly_consumption,tariff_rate,cost_per_watt,irradiance
north-shed,100,300,9.5,50,5.0
warehouse,1000,300,5.0,50,6
";

    #[test]
    fn test_load_sites_from_reader() {
        let sites = load_sites_from_reader(SITES_CSV.as_bytes()).unwrap();
        assert_eq!(sites.len(), 2);
        assert_eq!(sites[0].site_id, "north-shed");
        assert_eq!(sites[0].input, FeasibilityInput::new(100.0, 300.0, 9.5, 50.0, 5.0));
        assert_eq!(sites[1].input.roof_area, 1000.0);
        assert_eq!(sites[1].input.irradiance, 6.0);
    }

    #[test]
    fn test_load_sites_from_file() {
        let path = std::env::temp_dir().join(format!("{}_sites.csv", std::process::id()));
        std::fs::write(&path, SITES_CSV).unwrap();
        let sites = load_sites(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(sites.len(), 2);
        assert_eq!(sites[1].site_id, "warehouse");
    }

    #[test]
    fn test_malformed_number() {
        let csv = "site_id,roof_area,monthly_consumption,tariff_rate,cost_per_watt,irradiance\n\
                   bad,abc,300,9.5,50,5.0\n";
        let result = load_sites_from_reader(csv.as_bytes());
        assert!(matches!(result, Err(FeasibilityError::Csv(_))));
    }
}
