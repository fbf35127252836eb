use indexmap::IndexMap;

use crate::core::{Color, WeatherRecord};
use crate::error::{ChartError, ChartResult};
use crate::render::CirclePrimitive;

/// Visual attributes computed for one record at join time.
///
/// A pure function of the record and the channel scales; the join never
/// invents attribute values of its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkAttributes {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub fill: Color,
}

/// One circle mark bound to exactly one record key.
#[derive(Debug, Clone, PartialEq)]
pub struct DotMark {
    key: String,
    record_index: usize,
    attributes: MarkAttributes,
}

impl DotMark {
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Index of the record this mark was bound to at its most recent join.
    #[must_use]
    pub fn record_index(&self) -> usize {
        self.record_index
    }

    #[must_use]
    pub fn attributes(&self) -> MarkAttributes {
        self.attributes
    }

    #[must_use]
    pub fn to_primitive(&self) -> CirclePrimitive {
        CirclePrimitive::new(
            self.attributes.x,
            self.attributes.y,
            self.attributes.radius,
            self.attributes.fill,
        )
    }
}

/// Counts of the three join partitions for one reconciliation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct JoinOutcome {
    pub entered: usize,
    pub updated: usize,
    pub exited: usize,
}

/// Keyed enter/update/exit reconciliation of circle marks against a record
/// array.
///
/// Records with a mark already present under their key are updates, records
/// without one are enters, and marks whose key is absent from the new array
/// are exits. After a successful join the mark count equals the record count
/// and marks iterate in record order. Joining twice with the same data is
/// idempotent: the second pass reports zero enters and zero exits.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkSet {
    marks: IndexMap<String, DotMark>,
}

impl MarkSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconciles the mark set against `records`.
    ///
    /// `attributes` is invoked once per record, enter and update alike. On
    /// error the existing marks are left untouched, so a failed join never
    /// leaves the set half-reconciled.
    pub fn join<F>(&mut self, records: &[WeatherRecord], mut attributes: F) -> ChartResult<JoinOutcome>
    where
        F: FnMut(usize, &WeatherRecord) -> ChartResult<MarkAttributes>,
    {
        let mut next: IndexMap<String, DotMark> = IndexMap::with_capacity(records.len());
        let mut outcome = JoinOutcome::default();

        for (index, record) in records.iter().enumerate() {
            let key = record.key(index);
            if next.contains_key(&key) {
                return Err(ChartError::InvalidData(format!(
                    "duplicate record key `{key}` at index {index}"
                )));
            }

            let attributes = attributes(index, record)?;
            if self.marks.contains_key(&key) {
                outcome.updated += 1;
            } else {
                outcome.entered += 1;
            }

            next.insert(
                key.clone(),
                DotMark {
                    key,
                    record_index: index,
                    attributes,
                },
            );
        }

        outcome.exited = self
            .marks
            .keys()
            .filter(|key| !next.contains_key(key.as_str()))
            .count();
        self.marks = next;
        Ok(outcome)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&DotMark> {
        self.marks.get(key)
    }

    /// Marks in record order.
    pub fn iter(&self) -> impl Iterator<Item = &DotMark> {
        self.marks.values()
    }
}
