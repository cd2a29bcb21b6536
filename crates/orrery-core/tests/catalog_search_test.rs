//! End-to-end: load a catalog from CSV, then query it.

use std::io::Write;

use orrery_core::{search, MatchOutcome, PlanetTable, SearchCriteria};
use tempfile::NamedTempFile;

fn sample_catalog() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "pl_name,stars,moons,disc_year,orbital period,radius,mass,solar radius,solar mass,rotational velocity,distance,gaia magnitude"
    )
    .unwrap();
    writeln!(file, "Kepler-22 b,1,0,2011,289.9,2.4,36.0,0.98,0.97,0.6,190.0,11.5").unwrap();
    writeln!(file, "HD 209458 b,1,0,1999,3.5,1.4,219.0,1.2,1.1,4.5,48.3,7.5").unwrap();
    writeln!(file, "TRAPPIST-1 e,1,0,2017,6.1,0.92,0.69,0.12,0.09,1.0,12.4,15.6").unwrap();
    writeln!(file, "Mystery b,2,,2020,,1.1,,,,,,").unwrap();
    file.flush().unwrap();
    file
}

fn names(outcome: &MatchOutcome) -> Vec<&str> {
    match outcome {
        MatchOutcome::Planets(rows) => rows.iter().map(|r| r.name.as_str()).collect(),
        MatchOutcome::NoMatch => panic!("Expected rows, got NoMatch"),
    }
}

#[test]
fn unconstrained_query_returns_catalog_in_file_order() {
    let file = sample_catalog();
    let table = PlanetTable::load(file.path()).unwrap();

    let outcome = search(&SearchCriteria::default(), &table);
    assert_eq!(
        names(&outcome),
        vec!["Kepler-22 b", "HD 209458 b", "TRAPPIST-1 e", "Mystery b"]
    );
}

#[test]
fn discovery_year_filters_exactly() {
    let file = sample_catalog();
    let table = PlanetTable::load(file.path()).unwrap();

    let criteria = SearchCriteria {
        disc_year: Some(2011),
        ..Default::default()
    };
    assert_eq!(names(&search(&criteria, &table)), vec!["Kepler-22 b"]);
}

#[test]
fn distance_band_spans_nearby_planets() {
    let file = sample_catalog();
    let table = PlanetTable::load(file.path()).unwrap();

    // Band [0, 60] around 10: TRAPPIST-1 e at 12.4 and HD 209458 b at 48.3.
    let criteria = SearchCriteria {
        distance: Some(10.0),
        ..Default::default()
    };
    assert_eq!(
        names(&search(&criteria, &table)),
        vec!["HD 209458 b", "TRAPPIST-1 e"]
    );
}

#[test]
fn null_cells_fail_constraints_but_not_projection() {
    let file = sample_catalog();
    let table = PlanetTable::load(file.path()).unwrap();

    // Mystery b has no orbital period, so constraining it excludes the row.
    let criteria = SearchCriteria {
        stars: Some(2),
        orbital_period: Some(100.0),
        ..Default::default()
    };
    assert_eq!(search(&criteria, &table), MatchOutcome::NoMatch);

    // Unconstrained, the row comes back with its nulls intact.
    let criteria = SearchCriteria {
        stars: Some(2),
        ..Default::default()
    };
    match search(&criteria, &table) {
        MatchOutcome::Planets(rows) => {
            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0].name, "Mystery b");
            assert_eq!(rows[0].orbital_period, None);
            assert_eq!(rows[0].radius, Some(1.1));
        }
        MatchOutcome::NoMatch => panic!("Expected Mystery b"),
    }
}

#[test]
fn combined_criteria_narrow_to_one_planet() {
    let file = sample_catalog();
    let table = PlanetTable::load(file.path()).unwrap();

    let criteria = SearchCriteria {
        stars: Some(1),
        radius: Some(2.0),
        distance: Some(150.0),
        ..Default::default()
    };
    // radius band [1.0, 3.0] keeps Kepler-22 b and HD 209458 b;
    // distance band [100, 200] keeps only Kepler-22 b.
    assert_eq!(names(&search(&criteria, &table)), vec!["Kepler-22 b"]);
}
