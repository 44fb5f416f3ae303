//! Sensor snapshot model and condition classification

use serde::{Deserialize, Serialize};

use crate::validation::{clamp_percent, clamp_temperature};

/// Neutral substitutes used when a sensor reports a non-finite value.
/// Chosen so a faulty sensor never contributes to the risk score.
const NEUTRAL_SOIL_PERCENT: f64 = 50.0;
const NEUTRAL_RAIN_PERCENT: f64 = 0.0;
const NEUTRAL_TEMPERATURE_C: f64 = 25.0;
const NEUTRAL_HUMIDITY_PERCENT: f64 = 60.0;

/// One poll-cycle reading of the three field sensors.
///
/// Immutable per analysis call; a fresh snapshot is produced on every
/// sensor poll tick and nothing persists across cycles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensorSnapshot {
    /// Fraction of soil saturation, [0, 100]. Lower = drier.
    pub soil_moisture_percent: f64,
    /// Normalized precipitation intensity, [0, 100].
    pub rain_intensity_percent: f64,
    /// Ambient temperature, roughly [-10, 50] °C.
    pub air_temperature_c: f64,
    /// Carried for reporting; not consumed by risk scoring.
    pub air_humidity_percent: f64,
}

impl SensorSnapshot {
    /// Build a snapshot from raw readings, substituting neutral values for
    /// non-finite inputs and clamping everything to its documented domain.
    pub fn from_raw(
        soil_moisture_percent: f64,
        rain_intensity_percent: f64,
        air_temperature_c: f64,
        air_humidity_percent: f64,
    ) -> Self {
        Self {
            soil_moisture_percent,
            rain_intensity_percent,
            air_temperature_c,
            air_humidity_percent,
        }
        .sanitized()
    }

    /// Copy of this snapshot with non-finite values replaced and every
    /// field clamped to its domain.
    pub fn sanitized(&self) -> Self {
        let finite = |value: f64, substitute: f64| {
            if value.is_finite() {
                value
            } else {
                substitute
            }
        };

        Self {
            soil_moisture_percent: clamp_percent(finite(
                self.soil_moisture_percent,
                NEUTRAL_SOIL_PERCENT,
            )),
            rain_intensity_percent: clamp_percent(finite(
                self.rain_intensity_percent,
                NEUTRAL_RAIN_PERCENT,
            )),
            air_temperature_c: clamp_temperature(finite(
                self.air_temperature_c,
                NEUTRAL_TEMPERATURE_C,
            )),
            air_humidity_percent: clamp_percent(finite(
                self.air_humidity_percent,
                NEUTRAL_HUMIDITY_PERCENT,
            )),
        }
    }

    /// Classify the soil reading for operator display.
    pub fn soil_condition(&self) -> SoilCondition {
        let soil = clamp_percent(self.soil_moisture_percent);
        if soil < 20.0 {
            SoilCondition::Critical
        } else if soil < 40.0 {
            SoilCondition::Dry
        } else if soil < 70.0 {
            SoilCondition::Normal
        } else {
            SoilCondition::Saturated
        }
    }

    /// Classify the rain reading for operator display.
    pub fn rain_condition(&self) -> RainCondition {
        let rain = clamp_percent(self.rain_intensity_percent);
        if rain < 10.0 {
            RainCondition::NoRain
        } else if rain < 30.0 {
            RainCondition::Light
        } else if rain < 70.0 {
            RainCondition::Moderate
        } else {
            RainCondition::Intense
        }
    }
}

/// Soil status bands
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SoilCondition {
    Critical,
    Dry,
    Normal,
    Saturated,
}

impl std::fmt::Display for SoilCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SoilCondition::Critical => write!(f, "Crítico"),
            SoilCondition::Dry => write!(f, "Seco"),
            SoilCondition::Normal => write!(f, "Normal"),
            SoilCondition::Saturated => write!(f, "Saturado"),
        }
    }
}

/// Rain status bands
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RainCondition {
    NoRain,
    Light,
    Moderate,
    Intense,
}

impl std::fmt::Display for RainCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RainCondition::NoRain => write!(f, "Sem chuva"),
            RainCondition::Light => write!(f, "Leve"),
            RainCondition::Moderate => write!(f, "Moderada"),
            RainCondition::Intense => write!(f, "Intensa"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(soil: f64, rain: f64) -> SensorSnapshot {
        SensorSnapshot {
            soil_moisture_percent: soil,
            rain_intensity_percent: rain,
            air_temperature_c: 24.0,
            air_humidity_percent: 60.0,
        }
    }

    #[test]
    fn soil_condition_bands() {
        assert_eq!(snapshot(0.0, 0.0).soil_condition(), SoilCondition::Critical);
        assert_eq!(snapshot(19.9, 0.0).soil_condition(), SoilCondition::Critical);
        // Band edges are strict less-than
        assert_eq!(snapshot(20.0, 0.0).soil_condition(), SoilCondition::Dry);
        assert_eq!(snapshot(40.0, 0.0).soil_condition(), SoilCondition::Normal);
        assert_eq!(snapshot(70.0, 0.0).soil_condition(), SoilCondition::Saturated);
        assert_eq!(snapshot(100.0, 0.0).soil_condition(), SoilCondition::Saturated);
    }

    #[test]
    fn rain_condition_bands() {
        assert_eq!(snapshot(50.0, 0.0).rain_condition(), RainCondition::NoRain);
        assert_eq!(snapshot(50.0, 10.0).rain_condition(), RainCondition::Light);
        assert_eq!(snapshot(50.0, 30.0).rain_condition(), RainCondition::Moderate);
        assert_eq!(snapshot(50.0, 70.0).rain_condition(), RainCondition::Intense);
    }

    #[test]
    fn from_raw_clamps_out_of_range_values() {
        let snapshot = SensorSnapshot::from_raw(-12.0, 140.0, 80.0, 101.0);
        assert_eq!(snapshot.soil_moisture_percent, 0.0);
        assert_eq!(snapshot.rain_intensity_percent, 100.0);
        assert_eq!(snapshot.air_temperature_c, 50.0);
        assert_eq!(snapshot.air_humidity_percent, 100.0);
    }

    #[test]
    fn from_raw_substitutes_non_finite_values() {
        let snapshot = SensorSnapshot::from_raw(f64::NAN, f64::INFINITY, f64::NAN, f64::NAN);
        assert_eq!(snapshot.soil_moisture_percent, 50.0);
        assert_eq!(snapshot.rain_intensity_percent, 0.0);
        assert_eq!(snapshot.air_temperature_c, 25.0);
        assert_eq!(snapshot.air_humidity_percent, 60.0);
    }

    #[test]
    fn condition_labels() {
        assert_eq!(SoilCondition::Critical.to_string(), "Crítico");
        assert_eq!(RainCondition::NoRain.to_string(), "Sem chuva");
    }
}
