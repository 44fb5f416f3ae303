//! Persisted reading and alert records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{RiskVerdict, SensorSnapshot, SeverityCode};

/// A stored sensor reading
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReadingRecord {
    pub id: Uuid,
    pub recorded_at: DateTime<Utc>,
    #[serde(flatten)]
    pub snapshot: SensorSnapshot,
}

impl ReadingRecord {
    pub fn new(snapshot: SensorSnapshot) -> Self {
        Self {
            id: Uuid::new_v4(),
            recorded_at: Utc::now(),
            snapshot,
        }
    }
}

/// A stored alert, created whenever an analysis raises any alert flag
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AlertRecord {
    pub id: Uuid,
    pub triggered_at: DateTime<Utc>,
    pub severity_code: SeverityCode,
    pub risk_level: u8,
    pub description: String,
}

impl AlertRecord {
    /// Build an alert record from a verdict. Returns `None` when no alert
    /// flag is set, which is not an error condition.
    pub fn from_verdict(verdict: &RiskVerdict) -> Option<Self> {
        if !verdict.has_active_alert() {
            return None;
        }

        Some(Self {
            id: Uuid::new_v4(),
            triggered_at: Utc::now(),
            severity_code: verdict.severity_code,
            risk_level: verdict.risk_level,
            description: format!("{} - {}", verdict.risk_description, verdict.recommendation),
        })
    }
}
