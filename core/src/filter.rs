//! Date range filter over the visits table.
//!
//! The filter is inclusive on both ends and operates on calendar dates:
//! a visit belongs to the range when its timestamp's date falls inside
//! [from, to]. An inverted range (from > to) yields an empty table —
//! that is a valid, non-error state, not a bug to fix upstream.

use crate::tables::VisitRecord;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    /// Default range: minimum to maximum visit timestamp.
    /// None when the visits table is empty.
    pub fn full(visits: &[VisitRecord]) -> Option<Self> {
        let min = visits.iter().map(|v| v.timestamp).min()?;
        let max = visits.iter().map(|v| v.timestamp).max()?;
        Some(Self {
            from: min.date(),
            to: max.date(),
        })
    }

    pub fn contains(&self, visit: &VisitRecord) -> bool {
        let date = visit.timestamp.date();
        self.from <= date && date <= self.to
    }
}

/// Restrict visits to the inclusive range. Produces a new table; the
/// input snapshot is never mutated.
pub fn filter_visits(visits: &[VisitRecord], range: &DateRange) -> Vec<VisitRecord> {
    visits
        .iter()
        .filter(|v| range.contains(v))
        .cloned()
        .collect()
}
