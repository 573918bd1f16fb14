use chrono::NaiveDate;
use pulse_core::filter::{filter_visits, DateRange};
use pulse_core::tables::VisitRecord;

// ── Helpers ──────────────────────────────────────────────────────────────────

fn visit(client_id: i64, y: i32, m: u32, d: u32, h: u32, min: u32) -> VisitRecord {
    VisitRecord {
        client_id,
        timestamp: NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap(),
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn fixture() -> Vec<VisitRecord> {
    vec![
        visit(1, 2024, 3, 1, 8, 0),
        visit(2, 2024, 3, 10, 12, 30),
        visit(1, 2024, 3, 20, 23, 59),
        visit(3, 2024, 4, 2, 7, 15),
    ]
}

// ── Tests ────────────────────────────────────────────────────────────────────

/// Both boundary dates are inclusive — a visit late in the evening of
/// the upper bound still belongs to the range.
#[test]
fn range_is_inclusive_on_both_ends() {
    let visits = fixture();
    let range = DateRange::new(date(2024, 3, 1), date(2024, 3, 20));

    let filtered = filter_visits(&visits, &range);
    assert_eq!(filtered.len(), 3);
    assert!(filtered.iter().any(|v| v.timestamp.format("%H:%M").to_string() == "23:59"));
}

/// An inverted range (from > to) yields an empty table, not an error.
#[test]
fn inverted_range_yields_empty_table() {
    let visits = fixture();
    let range = DateRange::new(date(2024, 4, 1), date(2024, 3, 1));

    let filtered = filter_visits(&visits, &range);
    assert!(filtered.is_empty());
}

/// The default range spans the dataset's min and max visit timestamps,
/// so filtering with it keeps every row.
#[test]
fn default_range_spans_all_visits() {
    let visits = fixture();
    let range = DateRange::full(&visits).unwrap();

    assert_eq!(range.from, date(2024, 3, 1));
    assert_eq!(range.to, date(2024, 4, 2));
    assert_eq!(filter_visits(&visits, &range).len(), visits.len());
}

/// An empty visits table has no default range.
#[test]
fn empty_table_has_no_default_range() {
    assert!(DateRange::full(&[]).is_none());
}

/// Filtering produces a new table and leaves the input untouched.
#[test]
fn filtering_does_not_mutate_the_input() {
    let visits = fixture();
    let range = DateRange::new(date(2024, 3, 10), date(2024, 3, 10));

    let filtered = filter_visits(&visits, &range);
    assert_eq!(filtered.len(), 1);
    assert_eq!(visits.len(), 4);
}
