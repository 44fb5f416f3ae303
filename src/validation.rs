//! Validation utilities for sensor inputs
//!
//! Sensor readings arrive normalized to percentages by the collaborators,
//! but some device firmware skips the normalization step, so every domain
//! has both a clamping helper and a strict validator.

use crate::models::SensorSnapshot;

/// Lower bound of the supported air temperature domain, in °C.
pub const MIN_TEMPERATURE_C: f64 = -10.0;

/// Upper bound of the supported air temperature domain, in °C.
pub const MAX_TEMPERATURE_C: f64 = 50.0;

/// Clamp a percentage reading to [0, 100].
pub fn clamp_percent(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

/// Clamp an air temperature reading to the supported domain.
pub fn clamp_temperature(value: f64) -> f64 {
    value.clamp(MIN_TEMPERATURE_C, MAX_TEMPERATURE_C)
}

/// Validate that a percentage reading is finite and within [0, 100].
pub fn validate_percent(value: f64) -> Result<(), &'static str> {
    if !value.is_finite() {
        return Err("Reading must be a finite number");
    }
    if !(0.0..=100.0).contains(&value) {
        return Err("Percentage out of [0, 100] range");
    }
    Ok(())
}

/// Validate that a temperature reading is finite and within the domain.
pub fn validate_temperature(value: f64) -> Result<(), &'static str> {
    if !value.is_finite() {
        return Err("Reading must be a finite number");
    }
    if !(MIN_TEMPERATURE_C..=MAX_TEMPERATURE_C).contains(&value) {
        return Err("Temperature out of [-10, 50] range");
    }
    Ok(())
}

/// Validate a full snapshot against the documented sensor domains.
pub fn validate_snapshot(snapshot: &SensorSnapshot) -> Result<(), &'static str> {
    validate_percent(snapshot.soil_moisture_percent)?;
    validate_percent(snapshot.rain_intensity_percent)?;
    validate_temperature(snapshot.air_temperature_c)?;
    validate_percent(snapshot.air_humidity_percent)?;
    Ok(())
}
