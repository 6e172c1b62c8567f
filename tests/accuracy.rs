use approx::assert_abs_diff_eq;
use utmconv::{utm::central_meridian, Hemisphere, LatLon, ParseCoord, Utm};

#[test]
fn reference_point_matches_geographiclib() {
    // Empire State Building, GeographicLib reference values
    let utm = Utm::create(18, Hemisphere::North, 585_664.121, 4_511_315.422).unwrap();
    let coord = utm.to_latlon();

    assert_abs_diff_eq!(coord.latitude(), 40.748_333, epsilon = 1e-6);
    assert_abs_diff_eq!(coord.longitude(), -73.985_278, epsilon = 1e-6);
}

#[test]
fn equator_on_central_meridian() {
    let coord = LatLon::from_utm(Hemisphere::North, 10, 500_000., 0.);

    assert_eq!(coord.latitude(), 0.);
    assert_abs_diff_eq!(coord.longitude(), -123., epsilon = 1e-12);
}

#[test]
fn false_easting_lies_on_central_meridian() {
    for zone in [1, 10, 30, 31, 45, 60] {
        for northing in [1_234_567., 4_180_000., 9_300_000.] {
            for hemisphere in [Hemisphere::North, Hemisphere::South] {
                let coord = LatLon::from_utm(hemisphere, zone, 500_000., northing);
                assert_abs_diff_eq!(coord.longitude(), central_meridian(zone), epsilon = 1e-9);
            }
        }
    }
}

#[test]
fn south_is_north_shifted_by_false_northing() {
    for (zone, easting, northing) in [
        (10, 552_000., 4_180_000.),
        (56, 334_873., -3_748_181.),
        (33, 701_000., 0.),
        (1, 166_021., 2_000_000.),
    ] {
        let north = LatLon::from_utm(Hemisphere::North, zone, easting, northing);
        let south = LatLon::from_utm(Hemisphere::South, zone, easting, northing + 10_000_000.);

        assert_eq!(north.latitude().to_bits(), south.latitude().to_bits());
        assert_eq!(north.longitude().to_bits(), south.longitude().to_bits());
    }
}

#[test]
fn central_meridian_steps_six_degrees_per_zone() {
    assert_eq!(central_meridian(1), -177.);
    assert_eq!(central_meridian(60), 177.);

    for zone in 1..60 {
        assert_eq!(central_meridian(zone + 1) - central_meridian(zone), 6.);
    }
}

#[test]
fn out_of_range_zones_extrapolate() {
    // No clamping and no zero fallback: the meridian formula is applied as is
    let zone_0 = LatLon::from_utm(Hemisphere::North, 0, 500_000., 0.);
    let zone_61 = LatLon::from_utm(Hemisphere::North, 61, 500_000., 0.);
    let zone_neg = LatLon::from_utm(Hemisphere::North, -2, 500_000., 0.);

    assert_abs_diff_eq!(zone_0.longitude(), -183., epsilon = 1e-12);
    assert_abs_diff_eq!(zone_61.longitude(), 183., epsilon = 1e-12);
    assert_abs_diff_eq!(zone_neg.longitude(), -195., epsilon = 1e-12);
}

#[test]
fn non_finite_input_propagates() {
    let coord = LatLon::from_utm(Hemisphere::North, 10, f64::NAN, 4_180_000.);
    assert!(coord.longitude().is_nan());

    let coord = LatLon::from_utm(Hemisphere::North, 10, 500_000., f64::NAN);
    assert!(coord.latitude().is_nan());
}

#[test]
fn repeated_calls_are_bit_identical() {
    let first = LatLon::from_utm(Hemisphere::South, 56, 334_873., 6_251_819.);

    for _ in 0..100 {
        let again = LatLon::from_utm(Hemisphere::South, 56, 334_873., 6_251_819.);
        assert_eq!(first.latitude().to_bits(), again.latitude().to_bits());
        assert_eq!(first.longitude().to_bits(), again.longitude().to_bits());
    }
}

#[test]
fn round_trip_within_zone() {
    for zone in [1, 10, 18, 31, 56, 60] {
        let cm = central_meridian(zone);

        for lat in [-79.5, -60., -33.9, -10., 0.5, 12., 37.7, 52., 70.] {
            for offset in [-2.9, -1.5, 0., 0.75, 2.9] {
                let start = LatLon::create(lat, cm + offset).unwrap();
                let utm = Utm::from_latlon_in_zone(&start, zone);
                let back = utm.to_latlon();

                assert_eq!(utm.is_north(), lat > 0.);
                assert_abs_diff_eq!(back.latitude(), start.latitude(), epsilon = 1e-6);
                assert_abs_diff_eq!(back.longitude(), start.longitude(), epsilon = 1e-6);
                assert!(start.haversine(&back) < 0.01);
            }
        }
    }
}

#[test]
fn standard_zone_conversion_is_checked() {
    let coord = LatLon::create(-33.8568, 151.2153).unwrap();
    let utm = coord.to_utm().unwrap();

    assert_eq!(utm.zone(), 56);
    assert_eq!(utm.hemisphere(), Hemisphere::South);
    assert!(Utm::create(utm.zone(), utm.hemisphere(), utm.easting(), utm.northing()).is_ok());

    let polar = LatLon::create(85., 10.).unwrap();
    assert!(polar.to_utm().is_err());
}

#[test]
fn text_round_trip() {
    let utm: Utm = utmconv::from_str("10N 552000 4180000").unwrap();
    let coord = utm.to_latlon();

    let parsed = LatLon::parse_coord(&coord.to_string()).unwrap();
    assert_eq!(parsed, coord);

    assert!(LatLon::parse_coord("37.7").is_err());
    assert!(LatLon::parse_coord("91 0").is_err());
    assert!(LatLon::parse_coord("north west").is_err());
}

#[test]
fn haversine_known_distances() {
    let origin = LatLon::create(0., 0.).unwrap();

    // One degree of arc on the 6371.0088 km mean sphere
    let east = LatLon::create(0., 1.).unwrap();
    assert_abs_diff_eq!(origin.haversine(&east), 111_195.08, epsilon = 0.01);

    let north = LatLon::create(1., 0.).unwrap();
    assert_abs_diff_eq!(origin.haversine(&north), 111_195.08, epsilon = 0.01);

    assert_abs_diff_eq!(east.haversine(&origin), origin.haversine(&east), epsilon = 1e-9);
    assert_abs_diff_eq!(origin.haversine(&origin), 0., epsilon = 1e-9);

    // Antipodes are half a great circle apart
    let antipode = LatLon::create(0., -180.).unwrap();
    assert_abs_diff_eq!(origin.haversine(&antipode), std::f64::consts::PI * 6_371_008.8, epsilon = 1e-3);
}
