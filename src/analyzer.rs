//! Flood-risk analysis
//!
//! Additive weighted scoring of a sensor snapshot, with a discrete bonus
//! for the namesake scenario: parched ground under heavy rain cannot
//! absorb the downpour, compounding runoff beyond the individual factors.

use serde::{Deserialize, Serialize};

use crate::models::{RiskVerdict, SensorSnapshot, SeverityCode};

/// Maximum aggregate risk level. The raw factor sum can exceed this,
/// so clamping is load-bearing, not defensive.
pub const MAX_RISK_LEVEL: u8 = 10;

/// Risk level at and above which the flood alert is raised.
pub const FLOOD_ALERT_LEVEL: u8 = 7;

/// Threshold constants for the risk scoring algorithm.
///
/// Defaults match the canonical field calibration. The critical-combination
/// thresholds deliberately differ from the per-factor band thresholds and
/// must not be unified with them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RiskThresholds {
    /// Soil moisture below this raises the drought alert (+4).
    pub soil_drought_percent: f64,
    /// Soil moisture below this scores +3.
    pub soil_dry_percent: f64,
    /// Soil moisture below this scores +1.
    pub soil_moderate_percent: f64,
    /// Rain intensity above this scores +5.
    pub rain_torrential_percent: f64,
    /// Rain intensity above this scores +4.
    pub rain_heavy_percent: f64,
    /// Rain intensity above this scores +2.
    pub rain_moderate_percent: f64,
    /// Rain intensity above this scores +1.
    pub rain_light_percent: f64,
    /// Temperature above this raises the extreme-weather alert (+1).
    pub extreme_temperature_celsius: f64,
    /// Soil bound of the critical dry-soil + heavy-rain combination (+2).
    pub critical_soil_percent: f64,
    /// Rain bound of the critical dry-soil + heavy-rain combination.
    pub critical_rain_percent: f64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            soil_drought_percent: 15.0,
            soil_dry_percent: 30.0,
            soil_moderate_percent: 50.0,
            rain_torrential_percent: 80.0,
            rain_heavy_percent: 60.0,
            rain_moderate_percent: 40.0,
            rain_light_percent: 20.0,
            extreme_temperature_celsius: 35.0,
            critical_soil_percent: 25.0,
            critical_rain_percent: 70.0,
        }
    }
}

/// Pure flood-risk analyzer.
///
/// Stateless and infallible: every call reads only its input snapshot and
/// allocates a fresh verdict, so it is safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct RiskAnalyzer {
    thresholds: RiskThresholds,
}

impl RiskAnalyzer {
    pub fn new(thresholds: RiskThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &RiskThresholds {
        &self.thresholds
    }

    /// Map a sensor snapshot to a risk verdict.
    ///
    /// Out-of-range and non-finite inputs are sanitized, never rejected.
    pub fn analyze(&self, snapshot: &SensorSnapshot) -> RiskVerdict {
        let snapshot = snapshot.sanitized();
        let soil = snapshot.soil_moisture_percent;
        let rain = snapshot.rain_intensity_percent;
        let temperature = snapshot.air_temperature_c;
        let t = &self.thresholds;

        let mut level: u8 = 0;
        let mut drought_alert = false;
        let mut extreme_weather_alert = false;

        // Soil factor: dry soil cannot absorb a storm surge
        if soil < t.soil_drought_percent {
            level += 4;
            drought_alert = true;
        } else if soil < t.soil_dry_percent {
            level += 3;
        } else if soil < t.soil_moderate_percent {
            level += 1;
        }

        // Rain factor carries the largest weights; bands are strict
        // greater-than, checked highest first
        if rain > t.rain_torrential_percent {
            level += 5;
        } else if rain > t.rain_heavy_percent {
            level += 4;
        } else if rain > t.rain_moderate_percent {
            level += 2;
        } else if rain > t.rain_light_percent {
            level += 1;
        }

        if temperature > t.extreme_temperature_celsius {
            level += 1;
            extreme_weather_alert = true;
        }

        // Critical combination: dry soil under heavy rain
        if soil < t.critical_soil_percent && rain > t.critical_rain_percent {
            level += 2;
        }

        let risk_level = level.min(MAX_RISK_LEVEL);

        let severity_code = classify_severity(risk_level);
        let (description, recommendation) = verdict_messages(risk_level);

        RiskVerdict {
            risk_level,
            flood_alert: risk_level >= FLOOD_ALERT_LEVEL,
            drought_alert,
            extreme_weather_alert,
            risk_description: description.to_string(),
            recommendation: recommendation.to_string(),
            severity_code,
            absorption_capacity: 100.0 - soil,
            runoff_risk: (rain - soil * 0.8).max(0.0),
        }
    }
}

/// Classify severity from the clamped aggregate risk level.
pub fn classify_severity(risk_level: u8) -> SeverityCode {
    match risk_level {
        0..=2 => SeverityCode::Baixo,
        3..=4 => SeverityCode::Medio,
        5..=6 => SeverityCode::Alto,
        _ => SeverityCode::Critico,
    }
}

/// Description and recommendation for a clamped risk level.
fn verdict_messages(risk_level: u8) -> (&'static str, &'static str) {
    match risk_level {
        0..=2 => ("Baixo - Condições normais", "Monitoramento rotineiro"),
        3..=4 => ("Moderado - Atenção", "Intensificar monitoramento"),
        5..=6 => ("Alto - Preparação", "Preparar sistemas de drenagem"),
        7..=8 => ("Muito Alto - Ação imediata", "Alertar autoridades"),
        _ => ("CRÍTICO - EMERGÊNCIA", "EVACUAR ÁREAS DE RISCO"),
    }
}
