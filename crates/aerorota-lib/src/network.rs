use std::collections::HashMap;

use geo::{Distance, Geodesic, Point};
use serde::Serialize;
use tracing::{debug, warn};

use crate::dataset::AirportRecord;
use crate::error::{Error, Result};

/// Geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPosition {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPosition {
    /// Geodesic distance to another position in kilometers, computed over the
    /// WGS84 ellipsoid.
    pub fn distance_km_to(&self, other: &Self) -> f64 {
        let origin = Point::new(self.longitude, self.latitude);
        let target = Point::new(other.longitude, other.latitude);
        Geodesic::distance(origin, target) / 1_000.0
    }
}

/// Representative airport chosen to stand in for a state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Airport {
    pub code: String,
    pub name: String,
    pub region: String,
    pub position: GeoPosition,
}

/// In-memory representative set: one airport per state, in the order they
/// were first seen in the input.
#[derive(Debug, Clone, Default)]
pub struct Network {
    pub airports: HashMap<String, Airport>,
    pub order: Vec<String>,
    pub region_to_code: HashMap<String, String>,
}

impl Network {
    /// Fold the raw records into one representative airport per state.
    ///
    /// Records are visited in input order; only medium and large airports are
    /// considered, and the first qualifying record per state wins. The result
    /// therefore depends on the ordering of the input dataset. Records
    /// without a usable node code are skipped; a qualifying record missing
    /// its position or region fails the build.
    pub fn from_records(records: &[AirportRecord]) -> Result<Self> {
        let mut airports = HashMap::new();
        let mut order = Vec::new();
        let mut region_to_code: HashMap<String, String> = HashMap::new();
        let mut skipped_unkeyed = 0usize;

        for record in records {
            if !record.kind.is_primary() {
                continue;
            }

            let Some(code) = record.node_code() else {
                skipped_unkeyed += 1;
                continue;
            };

            let region = record.region().ok_or_else(|| Error::InvalidRecord {
                ident: record.ident.clone(),
                reason: format!("unparseable region code '{}'", record.iso_region),
            })?;
            let position = record.position().ok_or_else(|| Error::InvalidRecord {
                ident: record.ident.clone(),
                reason: "missing latitude/longitude".to_string(),
            })?;

            if region_to_code.contains_key(region) {
                continue;
            }
            if airports.contains_key(code) {
                debug!(code, "duplicate airport code; keeping the first record");
                continue;
            }

            region_to_code.insert(region.to_string(), code.to_string());
            airports.insert(
                code.to_string(),
                Airport {
                    code: code.to_string(),
                    name: record.name.clone(),
                    region: region.to_string(),
                    position,
                },
            );
            order.push(code.to_string());
        }

        if skipped_unkeyed > 0 {
            warn!(
                skipped_unkeyed,
                "ignored airport records without a usable code",
            );
        }

        if order.is_empty() {
            return Err(Error::EmptyNetwork);
        }

        debug!(airports = order.len(), "selected representative airports");
        Ok(Self {
            airports,
            order,
            region_to_code,
        })
    }

    /// Lookup an airport by its node code.
    pub fn airport(&self, code: &str) -> Option<&Airport> {
        self.airports.get(code)
    }

    /// Whether the network contains the given node code.
    pub fn contains(&self, code: &str) -> bool {
        self.airports.contains_key(code)
    }

    /// Number of representative airports.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the network holds no airports.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Node codes in creation order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }
}
