use approx::assert_relative_eq;
use chart_axes::core::{AxisScale, BandScale, Domain, Extent, LinearScale, ScaleKind, TimeScale};

#[test]
fn linear_scale_round_trip_within_tolerance() {
    let scale = LinearScale::new(Extent::new(10.0, 110.0), (0.0, 1000.0)).expect("valid scale");

    let original = 42.5;
    let px = scale.domain_to_pixel(original);
    let recovered = scale.pixel_to_domain(px).expect("from pixel");
    assert_relative_eq!(recovered, original, epsilon = 1e-9);
}

#[test]
fn inverted_range_maps_larger_values_upwards() {
    let scale = LinearScale::new(Extent::new(0.0, 10.0), (600.0, 0.0)).expect("valid scale");
    assert_relative_eq!(scale.domain_to_pixel(0.0), 600.0);
    assert_relative_eq!(scale.domain_to_pixel(10.0), 0.0);
}

#[test]
fn zero_width_range_cannot_be_inverted() {
    let scale = LinearScale::new(Extent::new(0.0, 1.0), (5.0, 5.0)).expect("valid scale");
    assert!(scale.pixel_to_domain(5.0).is_err());
}

#[test]
fn time_scale_maps_epoch_milliseconds() {
    let scale = TimeScale::new(Extent::new(1_700_000_000_000.0, 1_700_000_600_000.0), (0.0, 1200.0))
        .expect("valid scale");
    let px = scale.time_to_pixel(1_700_000_300_000.0);
    assert_relative_eq!(px, 600.0, epsilon = 1e-6);
    let back = scale.pixel_to_time(px).expect("from pixel");
    assert_relative_eq!(back, 1_700_000_300_000.0, epsilon = 1e-3);
}

#[test]
fn band_scale_padding_shrinks_bands() {
    let keys = vec!["a".to_owned(), "b".to_owned(), "c".to_owned(), "d".to_owned()];
    let scale = BandScale::new(keys, (0.0, 400.0)).with_padding(0.2, 0.1);

    // step = 400 / (4 - 0.2 + 0.2)
    assert_relative_eq!(scale.step(), 100.0);
    assert_relative_eq!(scale.bandwidth(), 80.0);
    assert_relative_eq!(scale.band_start("a").expect("a"), 10.0);
    assert_relative_eq!(scale.band_end("d").expect("d"), 390.0);
    assert_eq!(scale.len(), 4);
}

#[test]
fn scale_kind_must_match_the_domain() {
    let categories = Domain::Categories(vec!["a".to_owned()]);
    assert!(matches!(
        ScaleKind::Band.instantiate(&categories, (0.0, 10.0)),
        Ok(AxisScale::Band(_))
    ));
    assert!(ScaleKind::Linear.instantiate(&categories, (0.0, 10.0)).is_err());
    assert!(
        ScaleKind::Time
            .instantiate(&Domain::Continuous(Extent::new(0.0, 1.0)), (0.0, f64::NAN))
            .is_err()
    );
}
