//! Immutable in-memory exoplanet catalog, loaded once from CSV.
//!
//! The catalog file uses the NASA-export column names verbatim, spaces
//! included (`orbital period`, `solar radius`, ...). Header validation is
//! exact: a renamed or missing column fails the load rather than silently
//! producing an all-`None` field.

use std::fs::File;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::LoadError;

/// Column headers the catalog must carry, byte-for-byte.
const REQUIRED_COLUMNS: [&str; 12] = [
    "pl_name",
    "stars",
    "moons",
    "disc_year",
    "orbital period",
    "radius",
    "mass",
    "solar radius",
    "solar mass",
    "rotational velocity",
    "distance",
    "gaia magnitude",
];

/// One catalog row. Every field except the name may be unknown in the
/// source data; `None` is distinct from zero.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Planet {
    #[serde(rename = "pl_name")]
    pub name: String,
    pub stars: Option<i64>,
    pub moons: Option<i64>,
    pub disc_year: Option<i64>,
    #[serde(rename = "orbital period")]
    pub orbital_period: Option<f64>,
    pub radius: Option<f64>,
    pub mass: Option<f64>,
    #[serde(rename = "solar radius")]
    pub solar_radius: Option<f64>,
    #[serde(rename = "solar mass")]
    pub solar_mass: Option<f64>,
    #[serde(rename = "rotational velocity")]
    pub rotational_velocity: Option<f64>,
    pub distance: Option<f64>,
    #[serde(rename = "gaia magnitude")]
    pub gaia_magnitude: Option<f64>,
}

/// The loaded catalog: an ordered, immutable collection of rows.
///
/// Loaded once at startup and never mutated afterwards, so concurrent
/// readers need no locking.
#[derive(Debug)]
pub struct PlanetTable {
    rows: Vec<Planet>,
}

impl PlanetTable {
    /// Load the catalog from a CSV file, validating the header first.
    ///
    /// Row order in the file is preserved. Empty cells deserialize to
    /// `None`. Fails if the file is unreadable, any required column is
    /// absent, or a cell cannot be coerced to its field type.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let path_display = path.display().to_string();

        let file = File::open(path).map_err(|e| LoadError::Io {
            path: path_display.clone(),
            source: e,
        })?;

        let mut reader = csv::ReaderBuilder::new().from_reader(file);

        let headers = reader.headers().map_err(|e| LoadError::Csv {
            path: path_display.clone(),
            source: e,
        })?;
        for required in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == required) {
                return Err(LoadError::MissingColumn(required.to_string()));
            }
        }

        let mut rows = Vec::new();
        for record in reader.deserialize::<Planet>() {
            let planet = record.map_err(|e| LoadError::Csv {
                path: path_display.clone(),
                source: e,
            })?;
            rows.push(planet);
        }

        info!("Loaded catalog '{}' ({} rows)", path_display, rows.len());
        Ok(Self { rows })
    }

    /// Build a table directly from rows. Used by tests and by callers that
    /// source the catalog from somewhere other than a CSV file.
    pub fn from_rows(rows: Vec<Planet>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Planet] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
