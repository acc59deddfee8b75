//! Airport dataset loading.
//!
//! The input follows the OurAirports `br-airports.csv` layout: one row per
//! airport with its identifier, classification, position, and composite ISO
//! region code. Columns beyond the ones modelled here are ignored.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::network::GeoPosition;

/// Classification vocabulary used by the dataset's `type` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AirportKind {
    LargeAirport,
    MediumAirport,
    SmallAirport,
    Heliport,
    SeaplaneBase,
    Balloonport,
    Closed,
    /// Unrecognized classification; tolerated so vocabulary drift in the
    /// upstream dataset does not abort a load.
    #[serde(other)]
    Unknown,
}

impl AirportKind {
    /// Whether this classification qualifies for the flight network.
    pub fn is_primary(self) -> bool {
        matches!(self, AirportKind::LargeAirport | AirportKind::MediumAirport)
    }
}

/// Raw airport row as read from the dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirportRecord {
    pub ident: String,
    #[serde(rename = "type")]
    pub kind: AirportKind,
    pub name: String,
    pub latitude_deg: Option<f64>,
    pub longitude_deg: Option<f64>,
    pub iso_region: String,
    pub municipality: Option<String>,
    pub iata_code: Option<String>,
}

impl AirportRecord {
    /// Preferred node code for this record: the IATA code when present,
    /// falling back to the ICAO/GPS identifier.
    pub fn node_code(&self) -> Option<&str> {
        self.iata_code
            .as_deref()
            .filter(|code| !code.is_empty())
            .or_else(|| Some(self.ident.as_str()).filter(|code| !code.is_empty()))
    }

    /// State portion of the composite ISO region code (`BR-SP` -> `SP`).
    pub fn region(&self) -> Option<&str> {
        self.iso_region
            .split_once('-')
            .map(|(_, region)| region)
            .filter(|region| !region.is_empty())
    }

    /// Geographic position, when both coordinates are present.
    pub fn position(&self) -> Option<GeoPosition> {
        match (self.latitude_deg, self.longitude_deg) {
            (Some(latitude), Some(longitude)) => Some(GeoPosition {
                latitude,
                longitude,
            }),
            _ => None,
        }
    }
}

/// Load all airport records from a CSV file on disk.
pub fn load_airports(path: &Path) -> Result<Vec<AirportRecord>> {
    let file = File::open(path)?;
    load_airports_from_reader(file)
}

/// Load all airport records from any CSV reader.
pub fn load_airports_from_reader<R: Read>(reader: R) -> Result<Vec<AirportRecord>> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::Fields).from_reader(reader);

    let mut records = Vec::new();
    for record in csv_reader.deserialize::<AirportRecord>() {
        records.push(record?);
    }

    debug!(count = records.len(), "loaded airport records");
    Ok(records)
}
