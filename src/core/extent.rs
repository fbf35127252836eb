use crate::core::record::{Field, WeatherRecord};
use crate::error::{ChartError, ChartResult};

/// Computes the `(min, max)` extent of one projected field across a dataset.
///
/// Records with a missing or non-finite value for the field are skipped and
/// reported through a `tracing` warning; the extent over the remaining values
/// is returned. Fails when no record contributes a finite value, so scales
/// never see an undefined domain.
pub fn extent(records: &[WeatherRecord], field: Field) -> ChartResult<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut kept = 0usize;
    let mut skipped = 0usize;

    for record in records {
        match field.project(record) {
            Some(value) if value.is_finite() => {
                min = min.min(value);
                max = max.max(value);
                kept += 1;
            }
            _ => skipped += 1,
        }
    }

    if kept == 0 {
        return Err(ChartError::EmptyDomain { field: field.name() });
    }
    if skipped > 0 {
        tracing::warn!(
            field = field.name(),
            skipped,
            kept,
            "records without a finite value were excluded from the extent"
        );
    }

    Ok((min, max))
}
