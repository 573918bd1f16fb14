//! Synthetic churn risk fixture.
//!
//! Not a model — a seeded generator producing a reproducible demo table
//! for the "Churn risk" page. It lives behind ChurnSampleGenerator so a
//! real scoring model can replace it later without touching the rest of
//! the pipeline.
//!
//! Determinism contract: same seed + same input tables = byte-identical
//! output. The per-client draw order (risk, 30-day visits, last visit,
//! 12-month visits) is fixed and must not be reordered.

use crate::config::ChurnFixtureConfig;
use crate::dates::format_timestamp;
use crate::rng::FixtureRng;
use crate::tables::{ClientRecord, VisitRecord};
use serde::Serialize;
use std::collections::BTreeSet;

pub const RISK_HIGH: &str = "High";
pub const RISK_LOW: &str = "Low";

/// Glyph repeated to render the 12-month visit count as a unary bar.
const BAR_GLYPH: &str = "▇";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChurnRow {
    pub full_name: String,
    pub risk: &'static str,
    pub visits_30d: u32,
    pub last_visit: String,
    pub visits_12m_bar: String,
}

pub struct ChurnSampleGenerator {
    seed: u64,
    sample_size: usize,
    high_risk_probability: f64,
}

impl ChurnSampleGenerator {
    pub fn new(seed: u64, sample_size: usize) -> Self {
        Self {
            seed,
            sample_size,
            high_risk_probability: ChurnFixtureConfig::default().high_risk_probability,
        }
    }

    pub fn from_config(config: &ChurnFixtureConfig) -> Self {
        Self {
            seed: config.seed,
            sample_size: config.sample_size,
            high_risk_probability: config.high_risk_probability,
        }
    }

    /// Generate the fixture table: a deterministic sample of clients
    /// with pseudo-random risk attributes.
    ///
    /// Last-visit timestamps are drawn with replacement from the set of
    /// all distinct formatted visit timestamps in the whole dataset —
    /// not tied to the sampled client. An intentional simplification of
    /// the demo fixture, kept as documented behavior.
    pub fn generate(&self, clients: &[ClientRecord], visits: &[VisitRecord]) -> Vec<ChurnRow> {
        let mut rng = FixtureRng::new(self.seed);

        // Distinct formatted timestamps, sorted so the draw pool does
        // not depend on visit row order.
        let timestamps: Vec<String> = visits
            .iter()
            .map(|v| format_timestamp(v.timestamp))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let sampled = rng.sample_indices(clients.len(), self.sample_size);
        log::debug!(
            "churn fixture: sampled {} of {} clients (seed={})",
            sampled.len(),
            clients.len(),
            self.seed,
        );

        sampled
            .into_iter()
            .map(|idx| {
                let client = &clients[idx];

                let risk = if rng.chance(self.high_risk_probability) {
                    RISK_HIGH
                } else {
                    RISK_LOW
                };
                let visits_30d = rng.next_u64_below(3) as u32;
                let last_visit = if timestamps.is_empty() {
                    "—".to_string()
                } else {
                    timestamps[rng.next_u64_below(timestamps.len() as u64) as usize].clone()
                };
                let visits_12m = 1 + rng.next_u64_below(5) as usize;

                ChurnRow {
                    full_name: client.full_name.clone(),
                    risk,
                    visits_30d,
                    last_visit,
                    visits_12m_bar: BAR_GLYPH.repeat(visits_12m),
                }
            })
            .collect()
    }
}
