//! Typed in-memory tables for the seven source files.
//!
//! RULE: Tables are immutable snapshots. Derived values (weekday, age
//! group, month period) are computed on demand from loaded fields and
//! never written back, so repeated render passes stay idempotent.
//!
//! Column headers are localized in the source files and are a data
//! contract — the serde renames below must match them verbatim.

use crate::dates::{de_dayfirst_date, de_dayfirst_datetime, de_opt_dayfirst_date};
use crate::types::{ClientId, StaffId, TrainerId};
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Fixed age bins: half-open [lo, hi) intervals with display labels.
/// Ages outside every bin carry no age group.
pub const AGE_BINS: [(u32, u32, &str); 5] = [
    (18, 26, "18-25"),
    (26, 36, "26-35"),
    (36, 46, "36-45"),
    (46, 61, "46-60"),
    (61, 71, "61-70"),
];

// ── Records ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientRecord {
    #[serde(rename = "ID клиента", default)]
    pub client_id: Option<ClientId>,
    #[serde(rename = "ФИО")]
    pub full_name: String,
    #[serde(rename = "Пол")]
    pub gender: String,
    #[serde(rename = "Возраст")]
    pub age: u32,
}

impl ClientRecord {
    /// Age group label per the fixed bin table, None when out of range.
    pub fn age_group(&self) -> Option<&'static str> {
        AGE_BINS
            .iter()
            .find(|(lo, hi, _)| (*lo..*hi).contains(&self.age))
            .map(|(_, _, label)| *label)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleRecord {
    #[serde(rename = "ID тренера")]
    pub trainer_id: TrainerId,
    #[serde(rename = "ID клиента")]
    pub client_id: ClientId,
    #[serde(rename = "Тип продукта")]
    pub product_type: String,
    #[serde(rename = "Сумма")]
    pub amount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisitRecord {
    #[serde(rename = "ID клиента")]
    pub client_id: ClientId,
    #[serde(rename = "Дата и время", deserialize_with = "de_dayfirst_datetime")]
    pub timestamp: NaiveDateTime,
}

impl VisitRecord {
    /// ISO weekday index, Monday = 0 … Sunday = 6.
    pub fn weekday(&self) -> usize {
        self.timestamp.weekday().num_days_from_monday() as usize
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionRecord {
    #[serde(rename = "ID клиента")]
    pub client_id: ClientId,
    #[serde(rename = "Дата начала", deserialize_with = "de_dayfirst_date")]
    pub start_date: NaiveDate,
    #[serde(rename = "Количество заморозок")]
    pub freeze_count: u32,
}

impl SubscriptionRecord {
    /// Calendar month of the start date as a sortable "YYYY-MM" key.
    pub fn start_month(&self) -> String {
        self.start_date.format("%Y-%m").to_string()
    }

    pub fn is_frozen(&self) -> bool {
        self.freeze_count > 0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplaintRecord {
    #[serde(rename = "ID клиента")]
    pub client_id: ClientId,
    #[serde(rename = "Дата", deserialize_with = "de_dayfirst_date")]
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffMovementRecord {
    #[serde(rename = "ID сотрудника")]
    pub staff_id: StaffId,
    #[serde(rename = "Дата приема", deserialize_with = "de_dayfirst_date")]
    pub hire_date: NaiveDate,
    #[serde(
        rename = "Дата увольнения",
        deserialize_with = "de_opt_dayfirst_date",
        default
    )]
    pub termination_date: Option<NaiveDate>,
}

impl StaffMovementRecord {
    pub fn is_terminated(&self) -> bool {
        self.termination_date.is_some()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainerRecord {
    #[serde(rename = "ID тренера")]
    pub trainer_id: TrainerId,
    #[serde(rename = "ФИО")]
    pub name: String,
}

// ── Dataset ──────────────────────────────────────────────────────────────────

/// All seven tables, loaded exactly once per snapshot and read-only
/// from then on.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub clients: Vec<ClientRecord>,
    pub sales: Vec<SaleRecord>,
    pub visits: Vec<VisitRecord>,
    pub subscriptions: Vec<SubscriptionRecord>,
    pub complaints: Vec<ComplaintRecord>,
    pub staff_movements: Vec<StaffMovementRecord>,
    pub trainers: Vec<TrainerRecord>,
}
