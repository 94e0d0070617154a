//! Integration tests for utm33 conversions
//!
//! These tests exercise the public API end-to-end against the embedded
//! Kartverket table and against synthetic tables with known answers.

mod common;

use common::assertions::{assert_approx_eq, assert_bit_identical, assert_latlng_approx_eq};
use common::test_data::{quadratic_surface, table_from_fn};
use pretty_assertions::assert_eq;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;

use utm33::interpolation::biquadratic;
use utm33::{Config, Converter, GridPoint, LatLng, Neighborhood, SampleTable, Utm33Error};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_reference_conversion() {
    let p = Converter::kartverket()
        .convert(146_001.89, 6_851_888.74)
        .unwrap();
    assert_approx_eq(p.latitude, 61.636432, Some(1e-5));
    assert_approx_eq(p.longitude, 8.312486, Some(1e-5));
}

#[test]
fn test_free_function_matches_converter() {
    let table = SampleTable::kartverket();
    let converter = Converter::new(table.clone());
    for &(e, n) in &[(146_001.89, 6_851_888.74), (412_345.6, 7_432_100.0), (-12_000.0, 6_620_000.0)] {
        assert_bit_identical(
            utm33::convert(&table, e, n).unwrap(),
            converter.convert(e, n).unwrap(),
        );
    }
}

#[test]
fn test_exact_at_sample_points() {
    let converter = Converter::kartverket();
    let mut checked = 0;
    for (point, known) in converter.table().iter() {
        let (e, n) = (point.easting as f64, point.northing as f64);
        if !converter.covers(e, n) {
            continue;
        }
        assert_eq!(converter.convert(e, n).unwrap(), known, "at {}", point);
        checked += 1;
    }
    assert_eq!(checked, 232);
}

#[test]
fn test_continuity_within_cell() {
    let converter = Converter::kartverket();
    let base = (412_345.0, 7_123_456.0);
    let a = converter.convert(base.0, base.1).unwrap();
    for &(de, dn) in &[(1.0, 0.0), (0.0, 1.0), (-1.0, -1.0)] {
        let b = converter.convert(base.0 + de, base.1 + dn).unwrap();
        // One meter is roughly 1e-5 degrees at these latitudes.
        assert!((a.latitude - b.latitude).abs() < 1e-4);
        assert!((a.longitude - b.longitude).abs() < 1e-4);
        assert!(a != b);
    }
}

#[test]
fn test_deterministic() {
    let converter = Converter::kartverket();
    let first = converter.convert(333_333.3, 7_000_001.7).unwrap();
    for _ in 0..10 {
        assert_bit_identical(converter.convert(333_333.3, 7_000_001.7).unwrap(), first);
    }
    let rebuilt = Converter::kartverket();
    assert_bit_identical(rebuilt.convert(333_333.3, 7_000_001.7).unwrap(), first);
}

#[test]
fn test_coverage_edge_fails() {
    let converter = Converter::kartverket();

    // North-east corner sample exists, but nothing east of it does.
    match converter.convert(1_210_000.0, 7_960_000.0) {
        Err(Utm33Error::IncompleteNeighborhood { anchor, missing }) => {
            assert_eq!(anchor, GridPoint::new(1_200_000, 7_950_000));
            assert_eq!(missing, GridPoint::new(1_250_000, 7_950_000));
        }
        other => panic!("expected IncompleteNeighborhood, got {:?}", other),
    }

    for &(e, n) in &[(5_000_000.0, 5_000_000.0), (0.0, 0.0), (-1.0e12, 7.0e6)] {
        let err = converter.convert(e, n).unwrap_err();
        assert!(err.is_coverage_miss(), "({}, {}) gave {}", e, n, err);
    }
}

#[test]
fn test_non_finite_query_rejected() {
    let converter = Converter::kartverket();
    // NaN would otherwise truncate to easting 0, which has a full neighborhood.
    for &(e, n) in &[(f64::NAN, 6.9e6), (1.0e5, f64::INFINITY), (f64::NEG_INFINITY, 7.0e6)] {
        assert!(matches!(
            converter.convert(e, n),
            Err(Utm33Error::InvalidCoordinates { .. })
        ));
        assert!(!converter.covers(e, n));
    }
}

#[test]
fn test_negative_easting_truncates_toward_zero() {
    let converter = Converter::kartverket();
    let table = converter.table();

    let result = converter.convert(-30_000.0, 6_600_000.0).unwrap();

    // The anchor is easting 0, so the query sits 0.6 cells west of it.
    let toward_zero = Neighborhood::gather(table, GridPoint::new(0, 6_600_000)).unwrap();
    assert_bit_identical(result, biquadratic(&toward_zero, -0.6, 0.0));

    // Flooring would have picked the -50 000 column instead.
    let floored = Neighborhood::gather(table, GridPoint::new(-50_000, 6_600_000)).unwrap();
    let floored_result = biquadratic(&floored, 0.4, 0.0);
    assert!(result != floored_result);
    assert_eq!(
        converter.neighborhood(-30_000.0, 6_600_000.0).unwrap().anchor(),
        GridPoint::new(0, 6_600_000)
    );
}

#[test]
fn test_synthetic_quadratic_surface_is_reproduced() {
    let table = table_from_fn(1000, GridPoint::new(0, 0), 6, 6, quadratic_surface);
    let converter = Converter::new(table);

    for &(e, n) in &[(0.0, 0.0), (1234.5, 2345.6), (3999.0, 3999.0), (500.0, 3100.25)] {
        let p = converter.convert(e, n).unwrap();
        assert_latlng_approx_eq(p, quadratic_surface(e, n), None);
    }
}

#[test]
fn test_extrapolation_with_negative_offsets() {
    // Queries just west of zero stay anchored at 0 and extrapolate.
    let table = table_from_fn(1000, GridPoint::new(0, 0), 3, 3, quadratic_surface);
    let converter = Converter::new(table);

    let p = converter.convert(-400.0, -250.0).unwrap();
    assert_latlng_approx_eq(p, quadratic_surface(-400.0, -250.0), None);
    assert!(!converter.covers(-1000.0, 0.0));
}

#[test]
fn test_concurrent_conversions() {
    let converter = Arc::new(Converter::kartverket());
    let queries: Vec<(f64, f64)> = (0..64)
        .map(|i| (100_000.0 + 7_919.0 * i as f64, 6_800_000.0 + 5_003.0 * i as f64))
        .collect();
    let expected: Vec<Option<LatLng>> = queries
        .iter()
        .map(|&(e, n)| converter.convert(e, n).ok())
        .collect();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let converter = Arc::clone(&converter);
            let queries = queries.clone();
            thread::spawn(move || {
                queries
                    .iter()
                    .map(|&(e, n)| converter.convert(e, n).ok())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_json_table_from_config() {
    let config = Config {
        granularity: 1000,
        table_path: Some(fixture("small_table.json")),
        ..Default::default()
    };
    let converter = Converter::from_config(&config).unwrap();
    assert_eq!(converter.table().len(), 9);

    // The fixture is linear in both directions; only anchor (0, 0) has a
    // full 3×3 block.
    let p = converter.convert(500.0, 500.0).unwrap();
    assert_latlng_approx_eq(p, LatLng::new(60.005, 10.01), Some(1e-12));

    let p = converter.convert(999.0, 250.0).unwrap();
    assert_latlng_approx_eq(p, LatLng::new(60.0025, 10.01998), Some(1e-12));
}

#[test]
fn test_json_table_from_config_edge_of_coverage() {
    let config = Config {
        granularity: 1000,
        table_path: Some(fixture("small_table.json")),
        ..Default::default()
    };
    let converter = Converter::from_config(&config).unwrap();

    // Northing 1500 anchors at (0, 1000), whose block needs northing 3000.
    assert!(!converter.covers(500.0, 1500.0));
    match converter.convert(500.0, 1500.0) {
        Err(Utm33Error::IncompleteNeighborhood { anchor, missing }) => {
            assert_eq!(anchor, GridPoint::new(0, 1000));
            assert_eq!(missing, GridPoint::new(0, 3000));
        }
        other => panic!("expected IncompleteNeighborhood, got {:?}", other),
    }
}

#[test]
fn test_config_granularity_must_match_table() {
    let config = Config {
        granularity: 50_000,
        table_path: Some(fixture("small_table.json")),
        ..Default::default()
    };
    assert!(matches!(
        Converter::from_config(&config),
        Err(Utm33Error::Config { .. })
    ));
}
