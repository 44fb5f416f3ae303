//! Risk verdict model

use serde::{Deserialize, Serialize};

/// Severity code aligned with the alert severity catalogue.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum SeverityCode {
    Baixo,
    Medio,
    Alto,
    Critico,
}

impl std::fmt::Display for SeverityCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeverityCode::Baixo => write!(f, "BAIXO"),
            SeverityCode::Medio => write!(f, "MEDIO"),
            SeverityCode::Alto => write!(f, "ALTO"),
            SeverityCode::Critico => write!(f, "CRITICO"),
        }
    }
}

/// Outcome of one flood-risk analysis.
///
/// Constructed fresh on every call; holds no shared state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RiskVerdict {
    /// Aggregate flood-risk score, [0, 10].
    pub risk_level: u8,
    pub flood_alert: bool,
    pub drought_alert: bool,
    pub extreme_weather_alert: bool,
    pub risk_description: String,
    pub recommendation: String,
    pub severity_code: SeverityCode,
    /// 100 − soil moisture percent.
    pub absorption_capacity: f64,
    /// max(0, rain intensity − soil moisture × 0.8).
    pub runoff_risk: f64,
}

impl RiskVerdict {
    /// True when any alert flag is raised.
    pub fn has_active_alert(&self) -> bool {
        self.flood_alert || self.drought_alert || self.extreme_weather_alert
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_code_serializes_uppercase() {
        assert_eq!(
            serde_json::to_string(&SeverityCode::Critico).unwrap(),
            "\"CRITICO\""
        );
        assert_eq!(SeverityCode::Baixo.to_string(), "BAIXO");
    }

    #[test]
    fn verdict_json_field_names() {
        let verdict = RiskVerdict {
            risk_level: 3,
            flood_alert: false,
            drought_alert: false,
            extreme_weather_alert: false,
            risk_description: "Moderado - Atenção".to_string(),
            recommendation: "Intensificar monitoramento".to_string(),
            severity_code: SeverityCode::Medio,
            absorption_capacity: 55.0,
            runoff_risk: 0.0,
        };

        let json = serde_json::to_value(&verdict).unwrap();
        for field in [
            "risk_level",
            "risk_description",
            "recommendation",
            "flood_alert",
            "drought_alert",
            "extreme_weather_alert",
            "absorption_capacity",
            "runoff_risk",
            "severity_code",
        ] {
            assert!(json.get(field).is_some(), "missing field {field}");
        }
        assert_eq!(json["severity_code"], "MEDIO");
    }
}
