//! KPI tile metrics.
//!
//! One pure function per KPI. Revenue, complaint and turnover KPIs
//! deliberately ignore the visit date filter — only the visit-derived
//! metrics see filtered data. That asymmetry is a product decision
//! carried over as-is.
//!
//! Degenerate denominators (zero clients, zero trainers) return a typed
//! ZeroDenominator error instead of producing NaN.

use crate::error::{PulseError, PulseResult};
use crate::tables::{
    ClientRecord, ComplaintRecord, Dataset, SaleRecord, StaffMovementRecord, SubscriptionRecord,
    TrainerRecord, VisitRecord,
};
use serde::Serialize;

pub fn total_clients(clients: &[ClientRecord]) -> usize {
    clients.len()
}

/// Sum of sale amounts over the whole, unfiltered sales table.
pub fn total_revenue(sales: &[SaleRecord]) -> f64 {
    sales.iter().map(|s| s.amount).sum()
}

/// Filtered visit count per client, rounded to 2 decimal places.
pub fn visits_per_client(
    filtered_visits: &[VisitRecord],
    clients: &[ClientRecord],
) -> PulseResult<f64> {
    if clients.is_empty() {
        return Err(PulseError::ZeroDenominator {
            metric: "visits_per_client",
            denominator: "client",
        });
    }
    let ratio = filtered_visits.len() as f64 / clients.len() as f64;
    Ok((ratio * 100.0).round() / 100.0)
}

/// Share of staff movements with a termination date over total trainer
/// headcount, in percent.
pub fn trainer_turnover_pct(
    staff_movements: &[StaffMovementRecord],
    trainers: &[TrainerRecord],
) -> PulseResult<f64> {
    if trainers.is_empty() {
        return Err(PulseError::ZeroDenominator {
            metric: "trainer_turnover_pct",
            denominator: "trainer",
        });
    }
    let terminated = staff_movements.iter().filter(|s| s.is_terminated()).count();
    Ok(terminated as f64 / trainers.len() as f64 * 100.0)
}

/// Display form of the turnover KPI: 1 decimal place with a % suffix.
pub fn format_turnover(pct: f64) -> String {
    format!("{pct:.1}%")
}

pub fn complaint_count(complaints: &[ComplaintRecord]) -> usize {
    complaints.len()
}

/// Subscriptions with at least one freeze.
pub fn frozen_client_count(subscriptions: &[SubscriptionRecord]) -> usize {
    subscriptions.iter().filter(|s| s.is_frozen()).count()
}

// ── KPI summary ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct KpiSummary {
    pub total_clients: usize,
    pub total_revenue: f64,
    pub visits_per_client: f64,
    pub trainer_turnover_pct: f64,
    pub complaint_count: usize,
    pub frozen_client_count: usize,
}

/// All six KPI values in one pass. `filtered_visits` is the only
/// date-filtered input.
pub fn kpi_summary(dataset: &Dataset, filtered_visits: &[VisitRecord]) -> PulseResult<KpiSummary> {
    Ok(KpiSummary {
        total_clients: total_clients(&dataset.clients),
        total_revenue: total_revenue(&dataset.sales),
        visits_per_client: visits_per_client(filtered_visits, &dataset.clients)?,
        trainer_turnover_pct: trainer_turnover_pct(&dataset.staff_movements, &dataset.trainers)?,
        complaint_count: complaint_count(&dataset.complaints),
        frozen_client_count: frozen_client_count(&dataset.subscriptions),
    })
}
