//! Search criteria for one catalog query.

use serde::Deserialize;

/// Tolerance half-widths for approximate matching of continuous fields.
///
/// These are fixed design constants, not derived from the data; a request
/// for `distance = 120` matches rows in the inclusive band `[70, 170]`.
pub const ORBITAL_PERIOD_TOL: f64 = 110.0;
pub const RADIUS_TOL: f64 = 1.0;
pub const MASS_TOL: f64 = 2000.0;
pub const SOLAR_RADIUS_TOL: f64 = 2.0;
pub const SOLAR_MASS_TOL: f64 = 0.5;
pub const ROTATIONAL_VELOCITY_TOL: f64 = 1.0;
pub const DISTANCE_TOL: f64 = 50.0;
pub const GAIA_MAGNITUDE_TOL: f64 = 1.0;

/// A sparse set of search constraints, one per catalog field, all optional.
///
/// Deserializes directly from a query string, so field names double as the
/// public query-parameter names. Ephemeral: built per request, passed to
/// [`crate::matcher::search`], discarded.
///
/// A field that is absent contributes no constraint. So does a field that
/// fails its validity guard (negative counts and measurements, discovery
/// years before 1990) — the matcher silently ignores it rather than
/// rejecting the query.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchCriteria {
    pub stars: Option<i64>,
    pub moons: Option<i64>,
    pub disc_year: Option<i64>,
    pub orbital_period: Option<f64>,
    pub radius: Option<f64>,
    pub mass: Option<f64>,
    pub solar_radius: Option<f64>,
    pub solar_mass: Option<f64>,
    pub rotational_velocity: Option<f64>,
    pub distance: Option<f64>,
    pub gaia_magnitude: Option<f64>,
}
