//! Chart source tables.
//!
//! One pure function per chart. Ordering rules are load-bearing: the
//! weekday and age-group series zero-fill missing buckets into a
//! fixed-length, fixed-order shape (stable chart categories), while the
//! trainer KPI join keeps inner-join semantics — trainers with zero
//! sales are dropped, never zero-filled.

use crate::tables::{ClientRecord, SaleRecord, SubscriptionRecord, VisitRecord, AGE_BINS};
use crate::types::{ClientId, TrainerId};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap, HashSet};

/// Localized weekday labels, Monday-first. Chart category contract.
pub const WEEKDAY_LABELS: [&str; 7] = ["Пн", "Вт", "Ср", "Чт", "Пт", "Сб", "Вс"];

// ── Row types ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub label: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BucketCount {
    pub label: &'static str,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainerKpiRow {
    pub trainer_id: TrainerId,
    pub revenue: f64,
    pub unique_clients: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyFreezes {
    pub month: String,
    pub freeze_total: u64,
}

// ── Aggregations ─────────────────────────────────────────────────────────────

/// Sales count per product type, most sold first; ties break on the
/// product name so the output is deterministic.
pub fn sales_by_product(sales: &[SaleRecord]) -> Vec<CategoryCount> {
    let mut counts: HashMap<&str, u64> = HashMap::new();
    for sale in sales {
        *counts.entry(sale.product_type.as_str()).or_default() += 1;
    }

    let mut rows: Vec<CategoryCount> = counts
        .into_iter()
        .map(|(label, count)| CategoryCount {
            label: label.to_string(),
            count,
        })
        .collect();
    rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    rows
}

/// Visit counts per ISO weekday over the filtered table, Monday-first,
/// always exactly 7 rows with zero-filled gaps.
pub fn visits_by_weekday(filtered_visits: &[VisitRecord]) -> Vec<BucketCount> {
    let mut counts = [0u64; 7];
    for visit in filtered_visits {
        counts[visit.weekday()] += 1;
    }

    WEEKDAY_LABELS
        .iter()
        .zip(counts)
        .map(|(label, count)| BucketCount { label, count })
        .collect()
}

/// Client counts per gender value. Unseen values form their own
/// category rather than being rejected.
pub fn gender_distribution(clients: &[ClientRecord]) -> Vec<CategoryCount> {
    let mut counts: HashMap<&str, u64> = HashMap::new();
    for client in clients {
        *counts.entry(client.gender.as_str()).or_default() += 1;
    }

    let mut rows: Vec<CategoryCount> = counts
        .into_iter()
        .map(|(label, count)| CategoryCount {
            label: label.to_string(),
            count,
        })
        .collect();
    rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    rows
}

/// Client counts per fixed age bucket, in bucket order, always exactly
/// 5 rows. Clients with out-of-range ages are not counted anywhere.
pub fn age_group_distribution(clients: &[ClientRecord]) -> Vec<BucketCount> {
    let mut counts: HashMap<&'static str, u64> = HashMap::new();
    for client in clients {
        if let Some(group) = client.age_group() {
            *counts.entry(group).or_default() += 1;
        }
    }

    AGE_BINS
        .iter()
        .map(|(_, _, label)| BucketCount {
            label,
            count: counts.get(label).copied().unwrap_or(0),
        })
        .collect()
}

/// Per-trainer revenue and distinct client count, trainer id ascending.
/// Inner-join semantics: a trainer appears only if they have sales.
pub fn trainer_kpi(sales: &[SaleRecord]) -> Vec<TrainerKpiRow> {
    let mut revenue: BTreeMap<TrainerId, f64> = BTreeMap::new();
    let mut clients: BTreeMap<TrainerId, HashSet<ClientId>> = BTreeMap::new();
    for sale in sales {
        *revenue.entry(sale.trainer_id).or_default() += sale.amount;
        clients.entry(sale.trainer_id).or_default().insert(sale.client_id);
    }

    revenue
        .into_iter()
        .map(|(trainer_id, revenue)| TrainerKpiRow {
            trainer_id,
            revenue,
            unique_clients: clients
                .get(&trainer_id)
                .map(|set| set.len() as u64)
                .unwrap_or(0),
        })
        .collect()
}

/// Freeze totals per calendar month of the subscription start date,
/// months ascending. Months without subscriptions do not appear.
pub fn freezes_by_month(subscriptions: &[SubscriptionRecord]) -> Vec<MonthlyFreezes> {
    let mut totals: BTreeMap<String, u64> = BTreeMap::new();
    for sub in subscriptions {
        *totals.entry(sub.start_month()).or_default() += u64::from(sub.freeze_count);
    }

    totals
        .into_iter()
        .map(|(month, freeze_total)| MonthlyFreezes {
            month,
            freeze_total,
        })
        .collect()
}
