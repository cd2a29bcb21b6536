//! The query matcher: per-field boolean masks ANDed across the catalog.
//!
//! Categorical fields (stars, moons, discovery year) match by exact
//! equality; continuous measurements match within fixed inclusive
//! tolerance bands. Each criterion produces one mask over the table;
//! the result is their positional intersection. A criterion that fails
//! its validity guard contributes no mask at all, so an out-of-range
//! value behaves exactly like an omitted one.

use serde::Serialize;

use crate::criteria::{
    SearchCriteria, DISTANCE_TOL, GAIA_MAGNITUDE_TOL, MASS_TOL, ORBITAL_PERIOD_TOL, RADIUS_TOL,
    ROTATIONAL_VELOCITY_TOL, SOLAR_MASS_TOL, SOLAR_RADIUS_TOL,
};
use crate::table::{Planet, PlanetTable};

/// The projected fields returned for each matching row, keyed with the
/// catalog's own column names on the wire.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanetSummary {
    #[serde(rename = "pl_name")]
    pub name: String,
    #[serde(rename = "orbital period")]
    pub orbital_period: Option<f64>,
    pub radius: Option<f64>,
    pub mass: Option<f64>,
    pub distance: Option<f64>,
}

/// Result of one matching call.
///
/// `NoMatch` is a sentinel distinct from an empty row list: a query with
/// no valid criteria against an empty table yields `Planets(vec![])`,
/// while a constrained query whose intersection is empty yields `NoMatch`.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchOutcome {
    Planets(Vec<PlanetSummary>),
    NoMatch,
}

/// Filter the catalog by the given criteria.
///
/// Pure and idempotent over the immutable table; matching rows come back
/// in original catalog order. Never fails: invalid criteria are treated
/// as "no constraint", and zero matches are reported as data, not error.
pub fn search(criteria: &SearchCriteria, table: &PlanetTable) -> MatchOutcome {
    let rows = table.rows();
    let mut masks: Vec<Vec<bool>> = Vec::new();

    // Exact equality for categorical fields.
    if let Some(stars) = criteria.stars.filter(|&v| v >= 0) {
        masks.push(exact_mask(rows, stars, |p| p.stars));
    }
    if let Some(moons) = criteria.moons.filter(|&v| v >= 0) {
        masks.push(exact_mask(rows, moons, |p| p.moons));
    }
    if let Some(year) = criteria.disc_year.filter(|&v| v >= 1990) {
        masks.push(exact_mask(rows, year, |p| p.disc_year));
    }

    // Inclusive tolerance bands for continuous measurements.
    if let Some(period) = criteria.orbital_period.filter(|&v| v >= 0.0) {
        masks.push(band_mask(rows, period, ORBITAL_PERIOD_TOL, |p| {
            p.orbital_period
        }));
    }
    if let Some(radius) = criteria.radius.filter(|&v| v >= 0.0) {
        masks.push(band_mask(rows, radius, RADIUS_TOL, |p| p.radius));
    }
    if let Some(mass) = criteria.mass.filter(|&v| v >= 0.0) {
        masks.push(band_mask(rows, mass, MASS_TOL, |p| p.mass));
    }
    if let Some(solar_radius) = criteria.solar_radius.filter(|&v| v >= 0.0) {
        masks.push(band_mask(rows, solar_radius, SOLAR_RADIUS_TOL, |p| {
            p.solar_radius
        }));
    }
    if let Some(solar_mass) = criteria.solar_mass.filter(|&v| v >= 0.0) {
        masks.push(band_mask(rows, solar_mass, SOLAR_MASS_TOL, |p| p.solar_mass));
    }
    if let Some(velocity) = criteria.rotational_velocity.filter(|&v| v >= 0.0) {
        masks.push(band_mask(rows, velocity, ROTATIONAL_VELOCITY_TOL, |p| {
            p.rotational_velocity
        }));
    }
    if let Some(distance) = criteria.distance.filter(|&v| v >= 0.0) {
        masks.push(band_mask(rows, distance, DISTANCE_TOL, |p| p.distance));
    }
    if let Some(magnitude) = criteria.gaia_magnitude.filter(|&v| v >= 0.0) {
        masks.push(band_mask(rows, magnitude, GAIA_MAGNITUDE_TOL, |p| {
            p.gaia_magnitude
        }));
    }

    // No active constraints: the whole table, even when it is empty.
    if masks.is_empty() {
        return MatchOutcome::Planets(rows.iter().map(summarize).collect());
    }

    let selected: Vec<PlanetSummary> = rows
        .iter()
        .enumerate()
        .filter(|(i, _)| masks.iter().all(|mask| mask[*i]))
        .map(|(_, planet)| summarize(planet))
        .collect();

    if selected.is_empty() {
        MatchOutcome::NoMatch
    } else {
        MatchOutcome::Planets(selected)
    }
}

/// Mask of rows whose field equals the requested value. A `None` field
/// never satisfies an equality constraint.
fn exact_mask(rows: &[Planet], want: i64, field: impl Fn(&Planet) -> Option<i64>) -> Vec<bool> {
    rows.iter().map(|p| field(p) == Some(want)).collect()
}

/// Mask of rows whose field lies in `[requested - tol, requested + tol]`,
/// inclusive on both ends. A `None` field never falls inside a band.
fn band_mask(
    rows: &[Planet],
    requested: f64,
    tol: f64,
    field: impl Fn(&Planet) -> Option<f64>,
) -> Vec<bool> {
    rows.iter()
        .map(|p| matches!(field(p), Some(v) if v >= requested - tol && v <= requested + tol))
        .collect()
}

fn summarize(planet: &Planet) -> PlanetSummary {
    PlanetSummary {
        name: planet.name.clone(),
        orbital_period: planet.orbital_period,
        radius: planet.radius,
        mass: planet.mass,
        distance: planet.distance,
    }
}
