//! File-backed reading log
//!
//! Rolling window of recent readings and triggered alerts kept in a JSON
//! file. This is the storage fallback the ingestion layer uses when no
//! database is reachable; the poll loop logs failures and continues.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{AlertRecord, ReadingRecord, RiskVerdict, SensorSnapshot};

/// Default retention cap for stored readings.
pub const DEFAULT_MAX_READINGS: usize = 100;

#[derive(Debug, Default, Serialize, Deserialize)]
struct LogData {
    readings: Vec<ReadingRecord>,
    alerts: Vec<AlertRecord>,
}

/// Aggregate counters for dashboard display
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LogSummary {
    pub total_readings: usize,
    pub total_alerts: usize,
    pub readings_today: usize,
    pub alerts_today: usize,
}

/// JSON-file-backed store of recent readings and alerts.
pub struct ReadingLog {
    path: PathBuf,
    max_readings: usize,
    data: LogData,
}

impl ReadingLog {
    /// Open a log at `path` with the default retention cap, loading any
    /// previously stored data.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        Self::with_capacity(path, DEFAULT_MAX_READINGS)
    }

    /// Open a log with an explicit retention cap.
    pub fn with_capacity(path: impl Into<PathBuf>, max_readings: usize) -> Result<Self> {
        let path = path.into();
        let data = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            serde_json::from_str(&raw)?
        } else {
            LogData::default()
        };

        Ok(Self {
            path,
            max_readings,
            data,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a sensor reading, evicting the oldest entries beyond the
    /// retention cap, and persist the log.
    pub fn record_reading(&mut self, snapshot: &SensorSnapshot) -> Result<ReadingRecord> {
        let record = ReadingRecord::new(*snapshot);
        self.data.readings.push(record.clone());

        if self.data.readings.len() > self.max_readings {
            let excess = self.data.readings.len() - self.max_readings;
            self.data.readings.drain(..excess);
        }

        self.persist()?;
        tracing::info!(
            "Reading stored, total: {}",
            self.data.readings.len()
        );
        Ok(record)
    }

    /// Append an alert derived from `verdict`. Returns `Ok(None)` when the
    /// verdict raises no alert flag; only active alerts are stored.
    pub fn record_alert(&mut self, verdict: &RiskVerdict) -> Result<Option<AlertRecord>> {
        let Some(record) = AlertRecord::from_verdict(verdict) else {
            return Ok(None);
        };

        self.data.alerts.push(record.clone());
        self.persist()?;
        tracing::warn!("Alert stored: {}", record.description);
        Ok(Some(record))
    }

    /// Most recent readings, newest first.
    pub fn recent_readings(&self, limit: usize) -> Vec<&ReadingRecord> {
        self.data.readings.iter().rev().take(limit).collect()
    }

    /// Most recent alerts, newest first.
    pub fn recent_alerts(&self, limit: usize) -> Vec<&AlertRecord> {
        self.data.alerts.iter().rev().take(limit).collect()
    }

    /// Totals plus today's activity counters.
    pub fn summary(&self) -> LogSummary {
        let today = Utc::now().date_naive();
        LogSummary {
            total_readings: self.data.readings.len(),
            total_alerts: self.data.alerts.len(),
            readings_today: self
                .data
                .readings
                .iter()
                .filter(|r| r.recorded_at.date_naive() == today)
                .count(),
            alerts_today: self
                .data
                .alerts
                .iter()
                .filter(|a| a.triggered_at.date_naive() == today)
                .count(),
        }
    }

    fn persist(&self) -> Result<()> {
        let raw = serde_json::to_string_pretty(&self.data)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}
