use approx::assert_relative_eq;
use chrono::NaiveDate;
use plotbind::api::{Chart, ChartConfig};
use plotbind::core::{Margins, Point, Viewport, WeatherRecord};
use plotbind::error::{ChartError, ChartResult};
use plotbind::tessellation::{Cell, Tessellator};

fn scenario_config() -> ChartConfig {
    let mut config = ChartConfig::default();
    config.margins = Margins::uniform(30.0);
    config.padding_ratio = 1.0;
    config
}

fn scenario_records() -> Vec<WeatherRecord> {
    vec![
        WeatherRecord::new(
            Some(40.0),
            Some(0.5),
            Some(0.2),
            NaiveDate::from_ymd_opt(2019, 1, 1),
        ),
        WeatherRecord::new(
            Some(60.0),
            Some(0.8),
            Some(0.9),
            NaiveDate::from_ymd_opt(2019, 6, 1),
        ),
    ]
}

fn scenario_chart() -> Chart {
    // 560 outer with uniform 30 margins leaves a 500x500 bounded area.
    let mut chart = Chart::new(Viewport::new(560, 560), scenario_config()).expect("chart");
    chart.set_data(scenario_records()).expect("set data");
    chart
}

#[test]
fn mark_count_equals_dataset_size() {
    let mut chart = scenario_chart();
    let frame = chart.render().expect("frame");

    assert_eq!(chart.marks().len(), 2);
    assert_eq!(frame.circles.len(), 2);
}

#[test]
fn marks_land_at_deterministic_scaled_positions() {
    let mut chart = scenario_chart();
    chart.render().expect("frame");

    let marks: Vec<_> = chart.marks().iter().collect();
    // Domain [40, 60] maps onto bounded x [0, 500]; [0.5, 0.8] onto y [500, 0];
    // both offset by the uniform 30px margin.
    assert_relative_eq!(marks[0].attributes().x, 30.0, epsilon = 1e-9);
    assert_relative_eq!(marks[0].attributes().y, 530.0, epsilon = 1e-9);
    assert_relative_eq!(marks[1].attributes().x, 530.0, epsilon = 1e-9);
    assert_relative_eq!(marks[1].attributes().y, 30.0, epsilon = 1e-9);
}

#[test]
fn mark_colors_follow_the_cloud_cover_gradient() {
    let config = scenario_config();
    let mut chart = scenario_chart();
    chart.render().expect("frame");

    let marks: Vec<_> = chart.marks().iter().collect();
    // Record 1 sits at the light end of the gradient, record 2 at the dark end.
    assert_eq!(marks[0].attributes().fill, config.gradient_start);
    assert_eq!(marks[1].attributes().fill, config.gradient_end);
}

#[test]
fn marks_stay_bound_to_their_records() {
    let mut chart = scenario_chart();
    chart.render().expect("frame");

    for (expected, mark) in chart.marks().iter().enumerate() {
        assert_eq!(mark.record_index(), expected);
    }
    assert!(chart.marks().get("2019-01-01").is_some());
    assert!(chart.marks().get("2019-06-01").is_some());
}

#[test]
fn rendering_twice_is_idempotent() {
    let mut chart = scenario_chart();

    let first = chart.render().expect("first frame");
    let second = chart.render().expect("second frame");

    assert_eq!(first, second);
    assert_eq!(chart.marks().len(), 2);
}

#[test]
fn tessellation_covers_one_cell_per_record() {
    let chart = scenario_chart();
    assert_eq!(chart.cells().len(), 2);
}

#[test]
fn cell_overlay_is_rendered_when_configured() {
    let mut config = scenario_config();
    config.cell_stroke = Some(plotbind::core::Color::rgb(0.9, 0.5, 0.5));

    let mut chart = Chart::new(Viewport::new(560, 560), config).expect("chart");
    chart.set_data(scenario_records()).expect("set data");
    let frame = chart.render().expect("frame");

    assert_eq!(frame.paths.len(), 2);
}

#[test]
fn overlay_is_invisible_by_default() {
    let mut chart = scenario_chart();
    let frame = chart.render().expect("frame");
    assert!(frame.paths.is_empty());
}

#[test]
fn empty_dataset_is_rejected() {
    let mut chart = Chart::new(Viewport::new(560, 560), scenario_config()).expect("chart");
    let result = chart.set_data(Vec::new());
    assert!(matches!(result, Err(ChartError::EmptyDataset)));
}

#[test]
fn render_before_set_data_is_rejected() {
    let mut chart = Chart::new(Viewport::new(560, 560), scenario_config()).expect("chart");
    assert!(chart.render().is_err());
}

#[test]
fn record_missing_a_position_channel_is_reported() {
    let mut chart = Chart::new(Viewport::new(560, 560), scenario_config()).expect("chart");
    let mut records = scenario_records();
    records[1].dew_point = None;

    let result = chart.set_data(records);
    assert!(matches!(
        result,
        Err(ChartError::MissingValue {
            field: "dewPoint",
            index: 1
        })
    ));
}

#[test]
fn failed_set_data_preserves_the_previous_dataset() {
    let mut chart = scenario_chart();

    let mut broken = scenario_records();
    broken[0].humidity = None;
    assert!(chart.set_data(broken).is_err());

    assert_eq!(chart.records().len(), 2);
    chart.render().expect("previous dataset still renders");
}

#[test]
fn hit_test_misses_outside_the_bounded_area() {
    let chart = scenario_chart();
    assert_eq!(chart.hit_test(5.0, 5.0), None);
    assert_eq!(chart.hit_test(1000.0, 1000.0), None);
}

#[test]
fn hit_test_resolves_interior_points_to_the_nearest_record() {
    let chart = scenario_chart();
    assert_eq!(chart.hit_test(40.0, 520.0), Some(0));
    assert_eq!(chart.hit_test(520.0, 40.0), Some(1));
}

/// Assigns the whole bounds to the last site; every other cell is degenerate.
#[derive(Debug)]
struct LastSiteTessellator;

impl Tessellator for LastSiteTessellator {
    fn cells(
        &self,
        sites: &[Point],
        bounds_width: f64,
        bounds_height: f64,
    ) -> ChartResult<Vec<Cell>> {
        let rectangle = [
            Point::new(0.0, 0.0),
            Point::new(bounds_width, 0.0),
            Point::new(bounds_width, bounds_height),
            Point::new(0.0, bounds_height),
        ];
        Ok((0..sites.len())
            .map(|site| Cell {
                site,
                vertices: if site + 1 == sites.len() {
                    rectangle.iter().copied().collect()
                } else {
                    Default::default()
                },
            })
            .collect())
    }
}

#[test]
fn substitute_tessellator_drives_hit_testing() {
    let mut chart = Chart::new(Viewport::new(560, 560), scenario_config())
        .expect("chart")
        .with_tessellator(Box::new(LastSiteTessellator));
    chart.set_data(scenario_records()).expect("set data");

    assert_eq!(chart.cells().len(), 2);
    assert!(chart.cells()[0].is_degenerate());

    // Right on top of record 0's mark, yet the substitute cell geometry
    // routes the hit to record 1.
    assert_eq!(chart.hit_test(30.0, 530.0), Some(1));
    assert_eq!(chart.hit_test(40.0, 520.0), Some(1));
    assert_eq!(chart.hit_test(5.0, 5.0), None);
}
