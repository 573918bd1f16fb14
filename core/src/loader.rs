//! CSV dataset loader.
//!
//! RULE: Only the loader touches the filesystem. Everything downstream
//! of it works on the in-memory Dataset.
//!
//! Behavior per source file:
//!   - UTF-8 with an optional byte-order mark prefix.
//!   - Day-first textual dates; unparsable mandatory dates abort the
//!     load, unparsable termination dates coerce to None.
//!   - A missing file or a malformed row is fatal — there is no
//!     partial-load mode, a half-loaded dashboard would lie.

use crate::config::DashboardConfig;
use crate::error::{PulseError, PulseResult};
use crate::tables::{
    ClientRecord, ComplaintRecord, Dataset, SaleRecord, StaffMovementRecord, SubscriptionRecord,
    TrainerRecord, VisitRecord,
};
use serde::de::DeserializeOwned;
use std::io::Read;
use std::path::Path;

fn parse_table<T, R>(reader: R, path: &str) -> PulseResult<Vec<T>>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for result in csv_reader.deserialize() {
        let record: T = result.map_err(|source| PulseError::Csv {
            path: path.to_string(),
            source,
        })?;
        rows.push(record);
    }
    Ok(rows)
}

// Per-table parsers over any reader, so tests can feed in-memory CSV.

pub fn parse_clients<R: Read>(reader: R, path: &str) -> PulseResult<Vec<ClientRecord>> {
    parse_table(reader, path)
}

pub fn parse_sales<R: Read>(reader: R, path: &str) -> PulseResult<Vec<SaleRecord>> {
    parse_table(reader, path)
}

pub fn parse_visits<R: Read>(reader: R, path: &str) -> PulseResult<Vec<VisitRecord>> {
    parse_table(reader, path)
}

pub fn parse_subscriptions<R: Read>(reader: R, path: &str) -> PulseResult<Vec<SubscriptionRecord>> {
    parse_table(reader, path)
}

pub fn parse_complaints<R: Read>(reader: R, path: &str) -> PulseResult<Vec<ComplaintRecord>> {
    parse_table(reader, path)
}

pub fn parse_staff_movements<R: Read>(
    reader: R,
    path: &str,
) -> PulseResult<Vec<StaffMovementRecord>> {
    parse_table(reader, path)
}

pub fn parse_trainers<R: Read>(reader: R, path: &str) -> PulseResult<Vec<TrainerRecord>> {
    parse_table(reader, path)
}

/// Read a source file to a string, stripping a leading BOM if present.
fn read_source(path: &Path) -> PulseResult<String> {
    let content = std::fs::read_to_string(path).map_err(|source| PulseError::SourceFile {
        path: path.display().to_string(),
        source,
    })?;
    Ok(match content.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => content,
    })
}

fn load_file<T>(path: &Path) -> PulseResult<Vec<T>>
where
    T: DeserializeOwned,
{
    let content = read_source(path)?;
    parse_table(content.as_bytes(), &path.display().to_string())
}

/// Load all seven tables from the configured data directory.
pub fn load_dataset(config: &DashboardConfig) -> PulseResult<Dataset> {
    let dataset = Dataset {
        clients: load_file(&config.source_path(&config.sources.clients))?,
        sales: load_file(&config.source_path(&config.sources.sales))?,
        visits: load_file(&config.source_path(&config.sources.visits))?,
        subscriptions: load_file(&config.source_path(&config.sources.subscriptions))?,
        complaints: load_file(&config.source_path(&config.sources.complaints))?,
        staff_movements: load_file(&config.source_path(&config.sources.staff_movements))?,
        trainers: load_file(&config.source_path(&config.sources.trainers))?,
    };

    log::info!(
        "dataset loaded: {} clients, {} sales, {} visits, {} subscriptions, {} complaints, {} staff movements, {} trainers",
        dataset.clients.len(),
        dataset.sales.len(),
        dataset.visits.len(),
        dataset.subscriptions.len(),
        dataset.complaints.len(),
        dataset.staff_movements.len(),
        dataset.trainers.len(),
    );

    Ok(dataset)
}
