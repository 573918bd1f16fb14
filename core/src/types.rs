//! Shared primitive types used across the entire pipeline.

/// Client identifier as carried by the source files.
pub type ClientId = i64;

/// Trainer identifier. Sales reference trainers through this.
pub type TrainerId = i64;

/// Staff movement record identifier.
pub type StaffId = i64;
