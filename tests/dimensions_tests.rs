use approx::assert_relative_eq;
use plotbind::core::{Dimensions, Margins, Viewport};
use plotbind::error::ChartError;

#[test]
fn fit_square_uses_smaller_viewport_side() {
    let dims = Dimensions::fit_square(Viewport::new(1200, 800), Margins::default(), 0.9)
        .expect("square fit");

    assert_relative_eq!(dims.width(), 720.0);
    assert_relative_eq!(dims.height(), 720.0);
}

#[test]
fn bounded_area_subtracts_opposing_margins() {
    let margins = Margins::new(10.0, 10.0, 50.0, 50.0);
    let dims = Dimensions::new(560.0, 560.0, margins).expect("dimensions");

    assert_relative_eq!(dims.bounded_width(), 500.0);
    assert_relative_eq!(dims.bounded_height(), 500.0);
    assert_relative_eq!(dims.bounds_origin().x, 50.0);
    assert_relative_eq!(dims.bounds_origin().y, 10.0);
}

#[test]
fn margins_exceeding_outer_box_are_rejected() {
    let margins = Margins::uniform(300.0);
    let result = Dimensions::new(560.0, 560.0, margins);

    assert!(matches!(result, Err(ChartError::InvalidMargins { .. })));
}

#[test]
fn zero_viewport_is_rejected() {
    let result = Dimensions::fit_square(Viewport::new(0, 800), Margins::default(), 0.9);
    assert!(matches!(result, Err(ChartError::InvalidViewport { .. })));
}

#[test]
fn negative_margin_is_rejected() {
    let margins = Margins::new(-1.0, 10.0, 10.0, 10.0);
    assert!(Dimensions::new(560.0, 560.0, margins).is_err());
}

#[test]
fn out_of_range_padding_ratio_is_rejected() {
    let viewport = Viewport::new(800, 800);
    assert!(Dimensions::fit_square(viewport, Margins::default(), 0.0).is_err());
    assert!(Dimensions::fit_square(viewport, Margins::default(), 1.5).is_err());
}
