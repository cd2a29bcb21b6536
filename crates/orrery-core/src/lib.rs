//! Orrery Core - Exoplanet catalog store and query matcher
//!
//! This crate holds the immutable in-memory catalog (loaded once from CSV)
//! and the matcher that filters it: exact equality for categorical fields,
//! fixed tolerance bands for continuous measurements, combined with AND.

pub mod criteria;
pub mod error;
pub mod matcher;
pub mod table;

pub use criteria::SearchCriteria;
pub use error::LoadError;
pub use matcher::{search, MatchOutcome, PlanetSummary};
pub use table::{Planet, PlanetTable};
