use chrono::NaiveDate;
use plotbind::core::{Field, WeatherRecord, extent};
use plotbind::error::ChartError;

fn record(dew_point: Option<f64>) -> WeatherRecord {
    WeatherRecord::new(dew_point, None, None, None)
}

#[test]
fn extent_spans_min_and_max() {
    let records = vec![record(Some(12.0)), record(Some(-3.5)), record(Some(40.0))];
    let (min, max) = extent(&records, Field::DewPoint).expect("extent");

    assert_eq!(min, -3.5);
    assert_eq!(max, 40.0);
}

#[test]
fn missing_values_are_skipped() {
    let records = vec![record(Some(10.0)), record(None), record(Some(20.0))];
    let (min, max) = extent(&records, Field::DewPoint).expect("extent");

    assert_eq!((min, max), (10.0, 20.0));
}

#[test]
fn all_missing_field_fails_fast() {
    let records = vec![record(None), record(None)];
    let result = extent(&records, Field::DewPoint);

    assert!(matches!(
        result,
        Err(ChartError::EmptyDomain { field: "dewPoint" })
    ));
}

#[test]
fn empty_dataset_fails_fast() {
    let result = extent(&[], Field::Humidity);
    assert!(matches!(result, Err(ChartError::EmptyDomain { .. })));
}

#[test]
fn date_extent_projects_to_days() {
    let records = vec![
        WeatherRecord::new(None, None, None, NaiveDate::from_ymd_opt(2019, 1, 1)),
        WeatherRecord::new(None, None, None, NaiveDate::from_ymd_opt(2019, 6, 1)),
    ];
    let (min, max) = extent(&records, Field::Date).expect("extent");

    assert!(min < max);
    assert_eq!(max - min, 151.0);
}
