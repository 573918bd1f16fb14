//! Presentation adapter.
//!
//! RULE: render() is a pure function of (dataset, filter, page). The
//! core never owns an event loop — the embedding host calls render()
//! once per interaction and hands the ViewModel to its chart and table
//! renderers. Chart titles and column labels below are the contract the
//! rendering layer depends on; they are data, not code, and stay
//! localized verbatim.

use crate::breakdowns::{
    age_group_distribution, freezes_by_month, gender_distribution, sales_by_product, trainer_kpi,
    visits_by_weekday, BucketCount, CategoryCount, MonthlyFreezes, TrainerKpiRow,
};
use crate::churn::{ChurnRow, ChurnSampleGenerator};
use crate::config::DashboardConfig;
use crate::error::PulseResult;
use crate::filter::{filter_visits, DateRange};
use crate::metrics::{format_turnover, kpi_summary, KpiSummary};
use crate::tables::Dataset;
use serde::Serialize;

// ── Page selector ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Overview,
    ChurnRisk,
}

impl std::str::FromStr for Page {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "overview" => Ok(Page::Overview),
            "churn" | "churn_risk" | "churn-risk" => Ok(Page::ChurnRisk),
            other => Err(format!("unknown page '{other}'")),
        }
    }
}

// ── View model types ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct KpiTile {
    pub label: &'static str,
    pub value: String,
}

/// A chart's source table together with its display contract.
#[derive(Debug, Clone, Serialize)]
pub struct ChartBlock<T> {
    pub title: &'static str,
    pub columns: &'static [&'static str],
    pub rows: Vec<T>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OverviewView {
    pub kpis: Vec<KpiTile>,
    pub sales_by_product: ChartBlock<CategoryCount>,
    pub visits_by_weekday: ChartBlock<BucketCount>,
    pub gender_distribution: ChartBlock<CategoryCount>,
    pub age_group_distribution: ChartBlock<BucketCount>,
    pub trainer_kpi: ChartBlock<TrainerKpiRow>,
    pub freezes_by_month: ChartBlock<MonthlyFreezes>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ViewModel {
    pub page: Page,
    /// Effective visit filter, None when the visits table is empty and
    /// no explicit range was given.
    pub range: Option<DateRange>,
    pub kpi_values: KpiSummary,
    pub overview: Option<OverviewView>,
    pub churn_table: Option<ChartBlock<ChurnRow>>,
}

// ── Rendering ────────────────────────────────────────────────────────────────

fn kpi_tiles(kpis: &KpiSummary) -> Vec<KpiTile> {
    vec![
        KpiTile {
            label: "Всего клиентов",
            value: kpis.total_clients.to_string(),
        },
        KpiTile {
            label: "Общая выручка, ₽",
            value: (kpis.total_revenue as i64).to_string(),
        },
        KpiTile {
            label: "Визитов/клиент",
            value: format!("{:.2}", kpis.visits_per_client),
        },
        KpiTile {
            label: "Текучесть тренеров, %",
            value: format_turnover(kpis.trainer_turnover_pct),
        },
        KpiTile {
            label: "Жалоб всего",
            value: kpis.complaint_count.to_string(),
        },
        KpiTile {
            label: "Клиенты с заморозками",
            value: kpis.frozen_client_count.to_string(),
        },
    ]
}

/// One full render pass. `range` = None means the default full range
/// over the visits table. The revenue, complaint and turnover KPIs see
/// unfiltered tables regardless of the range.
pub fn render(
    dataset: &Dataset,
    config: &DashboardConfig,
    range: Option<DateRange>,
    page: Page,
) -> PulseResult<ViewModel> {
    let effective_range = range.or_else(|| DateRange::full(&dataset.visits));
    let filtered = match &effective_range {
        Some(r) => filter_visits(&dataset.visits, r),
        None => Vec::new(),
    };

    let kpi_values = kpi_summary(dataset, &filtered)?;

    let overview = match page {
        Page::Overview => Some(OverviewView {
            kpis: kpi_tiles(&kpi_values),
            sales_by_product: ChartBlock {
                title: "Продажи по типу продукта",
                columns: &["Продукт", "Число продаж"],
                rows: sales_by_product(&dataset.sales),
            },
            visits_by_weekday: ChartBlock {
                title: "Посещения по дням недели",
                columns: &["День недели", "Визиты"],
                rows: visits_by_weekday(&filtered),
            },
            gender_distribution: ChartBlock {
                title: "Распределение клиентов по полу",
                columns: &["Пол", "Число клиентов"],
                rows: gender_distribution(&dataset.clients),
            },
            age_group_distribution: ChartBlock {
                title: "Распределение по возрастным группам",
                columns: &["Возрастная группа", "Число клиентов"],
                rows: age_group_distribution(&dataset.clients),
            },
            trainer_kpi: ChartBlock {
                title: "KPI тренеров",
                columns: &["ID тренера", "Доход", "Уник. клиентов"],
                rows: trainer_kpi(&dataset.sales),
            },
            freezes_by_month: ChartBlock {
                title: "Заморозки абонементов по месяцам",
                columns: &["Месяц", "Количество заморозок"],
                rows: freezes_by_month(&dataset.subscriptions),
            },
        }),
        Page::ChurnRisk => None,
    };

    // The churn fixture reads the raw, unfiltered visit timestamps.
    let churn_table = match page {
        Page::ChurnRisk => {
            let generator = ChurnSampleGenerator::from_config(&config.churn);
            Some(ChartBlock {
                title: "Риск оттока",
                columns: &[
                    "ФИО",
                    "Риск оттока",
                    "Уник. визитов за 30 дней",
                    "Последний визит",
                    "Визитов за 12 мес",
                ],
                rows: generator.generate(&dataset.clients, &dataset.visits),
            })
        }
        Page::Overview => None,
    };

    Ok(ViewModel {
        page,
        range: effective_range,
        kpi_values,
        overview,
        churn_table,
    })
}
