use plotbind::core::LinearScale;
use proptest::prelude::*;

proptest! {
    #[test]
    fn round_trip_property(
        domain_start in -1_000_000.0f64..1_000_000.0,
        domain_span in 0.001f64..1_000_000.0,
        value_factor in 0.0f64..1.0
    ) {
        let domain_end = domain_start + domain_span;
        let value = domain_start + value_factor * domain_span;

        let scale = LinearScale::new((domain_start, domain_end), (0.0, 2048.0))
            .expect("valid scale");

        let px = scale.map(value).expect("to pixel");
        let recovered = scale.invert(px).expect("from pixel");

        prop_assert!((recovered - value).abs() <= domain_span * 1e-9);
    }

    #[test]
    fn inverted_range_round_trip_property(
        domain_start in -1_000.0f64..1_000.0,
        domain_span in 0.001f64..1_000.0,
        value_factor in 0.0f64..1.0
    ) {
        let domain_end = domain_start + domain_span;
        let value = domain_start + value_factor * domain_span;

        let scale = LinearScale::new((domain_start, domain_end), (500.0, 0.0))
            .expect("valid scale");

        let px = scale.map(value).expect("to pixel");
        let recovered = scale.invert(px).expect("from pixel");

        prop_assert!((recovered - value).abs() <= domain_span * 1e-9);
    }

    #[test]
    fn nice_domain_contains_original_domain(
        domain_start in -1_000_000.0f64..1_000_000.0,
        domain_span in 0.001f64..1_000_000.0,
        tick_count in 2usize..20
    ) {
        let domain_end = domain_start + domain_span;
        let scale = LinearScale::new((domain_start, domain_end), (0.0, 500.0))
            .expect("valid scale")
            .nice(tick_count);

        let (niced_start, niced_end) = scale.domain();
        prop_assert!(niced_start <= domain_start);
        prop_assert!(niced_end >= domain_end);
    }

    #[test]
    fn ticks_fall_inside_the_domain(
        domain_start in -1_000.0f64..1_000.0,
        domain_span in 0.001f64..1_000.0,
        tick_count in 2usize..20
    ) {
        let domain_end = domain_start + domain_span;
        let scale = LinearScale::new((domain_start, domain_end), (0.0, 500.0))
            .expect("valid scale");

        let slack = domain_span * 1e-9;
        for tick in scale.ticks(tick_count) {
            prop_assert!(tick >= domain_start - slack);
            prop_assert!(tick <= domain_end + slack);
        }
    }
}
