//! Option lists for the weight and rep pickers used while logging sets.
//!
//! Options are centred on the prescribed target and stepped by the
//! configured increment for the user's unit.

use crate::config::IncrementConfig;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Most options offered on either side of a target
pub const MAX_SPREAD: usize = 50;

/// Scale for the three decimals kept on weight options
const WEIGHT_PRECISION: f64 = 1000.0;

/// Unit a weight is logged in
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[default]
    Lb,
    Kg,
}

impl WeightUnit {
    /// Step between adjacent weight options for this unit
    pub fn increment(&self, config: &IncrementConfig) -> f64 {
        match self {
            WeightUnit::Lb => config.lb,
            WeightUnit::Kg => config.kg,
        }
    }
}

impl FromStr for WeightUnit {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lb" | "lbs" => Ok(WeightUnit::Lb),
            "kg" | "kgs" => Ok(WeightUnit::Kg),
            other => Err(crate::Error::Other(format!("Unknown weight unit: {}", other))),
        }
    }
}

/// Round to the nearest multiple of `step`
///
/// A non-positive step leaves the value untouched. Results are trimmed to
/// three decimals.
pub fn round_to_increment(value: f64, step: f64) -> f64 {
    if step <= 0.0 {
        return value;
    }
    let snapped = (value / step).round() * step;
    (snapped * WEIGHT_PRECISION).round() / WEIGHT_PRECISION
}

/// Cap a requested spread at [`MAX_SPREAD`]
fn clamp_spread(spread: usize) -> usize {
    if spread > MAX_SPREAD {
        tracing::warn!("Picker spread {} capped at {}", spread, MAX_SPREAD);
        return MAX_SPREAD;
    }
    spread
}

/// Weight options around `target`, ascending
///
/// `target` is snapped to the increment, then `spread` steps are added on
/// either side (at most [`MAX_SPREAD`]). Negative weights are dropped.
pub fn weight_options(target: f64, step: f64, spread: usize) -> Vec<f64> {
    if step <= 0.0 {
        tracing::warn!("Non-positive weight increment {}, offering target only", step);
        return vec![target.max(0.0)];
    }

    let centre = round_to_increment(target, step);
    let spread = clamp_spread(spread) as i64;

    (-spread..=spread)
        .map(|offset| round_to_increment(centre + offset as f64 * step, step))
        .filter(|w| *w >= 0.0)
        .collect()
}

/// Rep options around `target`, never below one rep
pub fn rep_options(target: u32, spread: u32) -> Vec<u32> {
    let spread = clamp_spread(spread as usize) as u32;
    let low = target.saturating_sub(spread).max(1);
    let high = target.saturating_add(spread).max(low);
    (low..=high).collect()
}
