//! pulse-runner: headless dashboard renderer for Ozen Pulse.
//!
//! Usage:
//!   pulse-runner --data-dir ./data
//!   pulse-runner --data-dir ./data --from 01.01.2024 --to 31.03.2024
//!   pulse-runner --data-dir ./data --page churn --json

use anyhow::Result;
use pulse_core::{
    cache::DatasetCache,
    config::DashboardConfig,
    dates::parse_dayfirst_date,
    filter::DateRange,
    view::{render, ChartBlock, Page, ViewModel},
};
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let data_dir = str_arg(&args, "--data-dir").unwrap_or("./data");
    let json_output = args.iter().any(|a| a == "--json");
    let page: Page = str_arg(&args, "--page")
        .unwrap_or("overview")
        .parse()
        .map_err(|e| anyhow::anyhow!("{e}"))?;

    let from = date_arg(&args, "--from")?;
    let to = date_arg(&args, "--to")?;

    let config = DashboardConfig::load(data_dir)?;
    let cache = DatasetCache::new();
    let snapshot = cache.get_or_load(&config)?;
    log::info!("rendering {page:?} from snapshot {}", snapshot.snapshot_id);

    // Partial bounds fall back to the dataset's own min/max.
    let range = match (from, to, DateRange::full(&snapshot.dataset.visits)) {
        (Some(f), Some(t), _) => Some(DateRange::new(f, t)),
        (Some(f), None, Some(full)) => Some(DateRange::new(f, full.to)),
        (None, Some(t), Some(full)) => Some(DateRange::new(full.from, t)),
        (_, _, full) => full,
    };

    let view = render(&snapshot.dataset, &config, range, page)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print_view(&view);
    }

    Ok(())
}

fn print_view(view: &ViewModel) {
    println!("Ozen Pulse");
    if let Some(range) = &view.range {
        println!(
            "  период визитов: {} — {}",
            range.from.format("%d.%m.%Y"),
            range.to.format("%d.%m.%Y"),
        );
    }
    println!();

    if let Some(overview) = &view.overview {
        for tile in &overview.kpis {
            println!("  {:<24} {}", tile.label, tile.value);
        }
        println!();

        print_block(&overview.sales_by_product, |r| {
            vec![r.label.clone(), r.count.to_string()]
        });
        print_block(&overview.visits_by_weekday, |r| {
            vec![r.label.to_string(), r.count.to_string()]
        });
        print_block(&overview.gender_distribution, |r| {
            vec![r.label.clone(), r.count.to_string()]
        });
        print_block(&overview.age_group_distribution, |r| {
            vec![r.label.to_string(), r.count.to_string()]
        });
        print_block(&overview.trainer_kpi, |r| {
            vec![
                r.trainer_id.to_string(),
                format!("{:.0}", r.revenue),
                r.unique_clients.to_string(),
            ]
        });
        print_block(&overview.freezes_by_month, |r| {
            vec![r.month.clone(), r.freeze_total.to_string()]
        });
    }

    if let Some(churn) = &view.churn_table {
        print_block(churn, |r| {
            vec![
                r.full_name.clone(),
                r.risk.to_string(),
                r.visits_30d.to_string(),
                r.last_visit.clone(),
                r.visits_12m_bar.clone(),
            ]
        });
    }
}

fn print_block<T>(block: &ChartBlock<T>, cells: impl Fn(&T) -> Vec<String>) {
    println!("=== {} ===", block.title);
    println!("  {}", block.columns.join(" | "));
    for row in &block.rows {
        println!("  {}", cells(row).join(" | "));
    }
    println!();
}

fn str_arg<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn date_arg(args: &[String], flag: &str) -> Result<Option<chrono::NaiveDate>> {
    match str_arg(args, flag) {
        None => Ok(None),
        Some(raw) => parse_dayfirst_date(raw)
            .map(Some)
            .ok_or_else(|| anyhow::anyhow!("{flag} expects a day-first date, got '{raw}'")),
    }
}
