use chrono::NaiveDate;
use pulse_core::error::PulseError;
use pulse_core::metrics::{
    complaint_count, format_turnover, frozen_client_count, total_clients, total_revenue,
    trainer_turnover_pct, visits_per_client,
};
use pulse_core::tables::{
    ClientRecord, ComplaintRecord, SaleRecord, StaffMovementRecord, SubscriptionRecord,
    TrainerRecord, VisitRecord,
};

// ── Helpers ──────────────────────────────────────────────────────────────────

fn client(id: i64, age: u32) -> ClientRecord {
    ClientRecord {
        client_id: Some(id),
        full_name: format!("Клиент {id}"),
        gender: "М".into(),
        age,
    }
}

fn sale(trainer_id: i64, client_id: i64, amount: f64) -> SaleRecord {
    SaleRecord {
        trainer_id,
        client_id,
        product_type: "Абонемент".into(),
        amount,
    }
}

fn visit(client_id: i64, day: u32) -> VisitRecord {
    VisitRecord {
        client_id,
        timestamp: NaiveDate::from_ymd_opt(2024, 3, day)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap(),
    }
}

fn staff(id: i64, terminated: bool) -> StaffMovementRecord {
    StaffMovementRecord {
        staff_id: id,
        hire_date: NaiveDate::from_ymd_opt(2023, 2, 1).unwrap(),
        termination_date: terminated.then(|| NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()),
    }
}

fn trainer(id: i64) -> TrainerRecord {
    TrainerRecord {
        trainer_id: id,
        name: format!("Тренер {id}"),
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[test]
fn total_clients_is_the_row_count() {
    let clients: Vec<_> = (1..=5).map(|i| client(i, 30)).collect();
    assert_eq!(total_clients(&clients), 5);
}

/// Revenue sums the whole, unfiltered sales table.
#[test]
fn total_revenue_sums_all_sales() {
    let sales = vec![sale(1, 1, 5000.0), sale(1, 2, 3500.0), sale(2, 3, 1500.0)];
    assert_eq!(total_revenue(&sales), 10_000.0);
}

/// 7 visits over 3 clients = 2.3333…, rounded to exactly 2.33.
#[test]
fn visits_per_client_rounds_to_two_decimals() {
    let clients: Vec<_> = (1..=3).map(|i| client(i, 30)).collect();
    let visits: Vec<_> = (1..=7).map(|d| visit(1, d)).collect();

    let value = visits_per_client(&visits, &clients).unwrap();
    assert_eq!(value, 2.33);
}

/// An empty filtered table is a valid state: the numerator is 0.
#[test]
fn visits_per_client_degrades_to_zero_on_empty_range() {
    let clients: Vec<_> = (1..=3).map(|i| client(i, 30)).collect();

    let value = visits_per_client(&[], &clients).unwrap();
    assert_eq!(value, 0.0);
}

/// Zero clients is a typed error — never NaN.
#[test]
fn zero_clients_is_a_typed_error() {
    let err = visits_per_client(&[], &[]).unwrap_err();
    assert!(
        matches!(
            err,
            PulseError::ZeroDenominator {
                metric: "visits_per_client",
                ..
            }
        ),
        "expected ZeroDenominator, got {err:?}"
    );
}

/// 2 terminated staff movements over 8 trainers = 25.0%.
#[test]
fn trainer_turnover_counts_terminations_over_headcount() {
    let staff = vec![staff(10, true), staff(11, false), staff(12, true)];
    let trainers: Vec<_> = (1..=8).map(trainer).collect();

    let pct = trainer_turnover_pct(&staff, &trainers).unwrap();
    assert_eq!(pct, 25.0);
    assert_eq!(format_turnover(pct), "25.0%");
}

#[test]
fn turnover_display_keeps_one_decimal() {
    assert_eq!(format_turnover(100.0 / 3.0), "33.3%");
    assert_eq!(format_turnover(0.0), "0.0%");
}

#[test]
fn zero_trainers_is_a_typed_error() {
    let err = trainer_turnover_pct(&[staff(10, true)], &[]).unwrap_err();
    assert!(
        matches!(
            err,
            PulseError::ZeroDenominator {
                metric: "trainer_turnover_pct",
                ..
            }
        ),
        "expected ZeroDenominator, got {err:?}"
    );
}

#[test]
fn complaint_count_is_unfiltered_row_count() {
    let complaints = vec![
        ComplaintRecord {
            client_id: 1,
            date: NaiveDate::from_ymd_opt(2024, 3, 3).unwrap(),
        },
        ComplaintRecord {
            client_id: 2,
            date: NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
        },
    ];
    assert_eq!(complaint_count(&complaints), 2);
}

/// Frozen clients are subscriptions with freeze count > 0.
#[test]
fn frozen_clients_require_a_positive_freeze_count() {
    let subs = vec![
        SubscriptionRecord {
            client_id: 1,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            freeze_count: 0,
        },
        SubscriptionRecord {
            client_id: 2,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            freeze_count: 2,
        },
        SubscriptionRecord {
            client_id: 3,
            start_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            freeze_count: 1,
        },
    ];
    assert_eq!(frozen_client_count(&subs), 2);
}
