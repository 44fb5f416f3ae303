//! Tipping-bucket pluviometer math
//!
//! Conversions used by the rain-gauge sensor variant: bucket tips to
//! accumulated volume, short-window tip deltas to mm/h intensity, and
//! soil-saturation estimates for intensities beyond absorption capacity.

use serde::{Deserialize, Serialize};

/// Default bucket calibration, millimetres of rain per tip.
pub const DEFAULT_MM_PER_TIP: f64 = 0.2794;

/// Length of the intensity measurement window, in seconds.
pub const MEASUREMENT_WINDOW_SECS: f64 = 10.0;

/// Typical soil absorption capacity, mm/h. Rainfall above this rate
/// saturates the ground and runs off.
pub const ABSORPTION_CAPACITY_MM_H: f64 = 25.0;

/// Residual absorption budget used for the saturation estimate, in mm.
const RESIDUAL_CAPACITY_MM: f64 = 50.0;

/// Total absorption budget of the monitored plot, in mm.
const TOTAL_CAPACITY_MM: f64 = 75.0;

/// Rainfall intensity bands, in mm/h
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RainfallClass {
    NoRain,
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl RainfallClass {
    pub fn alert_level(&self) -> AlertLevel {
        match self {
            RainfallClass::Strong => AlertLevel::Attention,
            RainfallClass::VeryStrong => AlertLevel::Emergency,
            _ => AlertLevel::Normal,
        }
    }
}

/// Alert escalation derived from rainfall intensity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AlertLevel {
    Normal,
    Attention,
    Emergency,
}

impl AlertLevel {
    /// Whether this level requires operator action.
    pub fn requires_action(&self) -> bool {
        *self != AlertLevel::Normal
    }
}

/// Classify a rainfall intensity in mm/h.
pub fn classify_intensity(mm_per_hour: f64) -> RainfallClass {
    if mm_per_hour <= 0.0 {
        RainfallClass::NoRain
    } else if mm_per_hour < 2.5 {
        RainfallClass::Weak
    } else if mm_per_hour < 10.0 {
        RainfallClass::Moderate
    } else if mm_per_hour < 50.0 {
        RainfallClass::Strong
    } else {
        RainfallClass::VeryStrong
    }
}

/// Whether an intensity exceeds the soil's absorption rate, signalling
/// flood risk from runoff.
pub fn exceeds_absorption(mm_per_hour: f64) -> bool {
    mm_per_hour > ABSORPTION_CAPACITY_MM_H
}

/// Estimated minutes until soil saturation at a sustained intensity.
/// `None` when the intensity is within the soil's absorption capacity.
pub fn minutes_to_saturation(mm_per_hour: f64) -> Option<f64> {
    if mm_per_hour <= ABSORPTION_CAPACITY_MM_H {
        return None;
    }
    let excess = mm_per_hour - ABSORPTION_CAPACITY_MM_H;
    Some(RESIDUAL_CAPACITY_MM / excess * 60.0)
}

/// Remaining absorption capacity after `accumulated_mm` of rain, floored
/// at zero.
pub fn remaining_capacity_mm(accumulated_mm: f64) -> f64 {
    (TOTAL_CAPACITY_MM - accumulated_mm).max(0.0)
}

/// Accumulating tipping-bucket rain gauge.
#[derive(Debug, Clone)]
pub struct RainGauge {
    mm_per_tip: f64,
    tip_count: u32,
}

impl RainGauge {
    pub fn new(mm_per_tip: f64) -> Self {
        Self {
            mm_per_tip,
            tip_count: 0,
        }
    }

    pub fn record_tip(&mut self) {
        self.tip_count += 1;
    }

    pub fn tip_count(&self) -> u32 {
        self.tip_count
    }

    /// Accumulated rainfall volume, in mm.
    pub fn accumulated_mm(&self) -> f64 {
        f64::from(self.tip_count) * self.mm_per_tip
    }

    /// Intensity in mm/h from the tips counted in one measurement window.
    pub fn intensity_mm_per_hour(&self, tips_in_window: u32) -> f64 {
        let window_rainfall = f64::from(tips_in_window) * self.mm_per_tip;
        window_rainfall * (3600.0 / MEASUREMENT_WINDOW_SECS)
    }

    /// Daily counter reset.
    pub fn reset(&mut self) {
        self.tip_count = 0;
    }
}

impl Default for RainGauge {
    fn default() -> Self {
        Self::new(DEFAULT_MM_PER_TIP)
    }
}
