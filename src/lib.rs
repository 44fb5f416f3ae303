//! Core risk-analysis library for the WaterWise flood-prevention platform
//!
//! This crate contains the logic shared between the field devices and the
//! ingestion backend: the flood-risk scoring algorithm, the sensor data
//! model, rain-gauge conversions, and a small file-backed reading log.

pub mod analyzer;
pub mod config;
pub mod error;
pub mod gauge;
pub mod models;
pub mod store;
pub mod validation;

pub use analyzer::*;
pub use crate::config::{Config, StoreConfig};
pub use error::{Error, Result};
pub use models::*;
pub use store::{LogSummary, ReadingLog};
pub use validation::*;
