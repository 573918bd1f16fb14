//! pulse-core — the data pipeline behind the Ozen Pulse dashboard.
//!
//! Pipeline shape: loader → (cache) → date range filter → aggregation →
//! presentation adapter. The churn fixture is an independent branch off
//! the client table and the raw visit timestamps. Rendering itself is
//! external — this crate only produces view models.

pub mod breakdowns;
pub mod cache;
pub mod churn;
pub mod config;
pub mod dates;
pub mod error;
pub mod filter;
pub mod loader;
pub mod metrics;
pub mod rng;
pub mod tables;
pub mod types;
pub mod view;

pub use error::{PulseError, PulseResult};
