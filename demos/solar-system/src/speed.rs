//! Per-planet angular speed, adjusted from the UI sliders.

use std::collections::HashMap;

/// Speed used when a planet has no entry in the map.
pub const FALLBACK_SPEED: f64 = 0.01;

/// Range and granularity of the speed sliders (radians per frame).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderSpec {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

pub const SLIDER: SliderSpec = SliderSpec {
    min: 0.001,
    max: 0.1,
    step: 0.001,
};

/// Current angular speed per planet name.
///
/// The key set is fixed at construction. Setting a speed takes effect on
/// the next orbital update; nothing is re-rendered by the setter itself.
#[derive(Debug, Clone)]
pub struct SpeedControl {
    speeds: HashMap<String, f64>,
    defaults: HashMap<String, f64>,
}

impl SpeedControl {
    /// Build from `(name, default_speed)` pairs.
    pub fn new<'a>(defaults: impl IntoIterator<Item = (&'a str, f64)>) -> Self {
        let defaults: HashMap<String, f64> = defaults
            .into_iter()
            .map(|(name, speed)| (name.to_string(), speed))
            .collect();
        Self {
            speeds: defaults.clone(),
            defaults,
        }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.speeds.get(name).copied()
    }

    /// Current speed, or `FALLBACK_SPEED` for names without an entry.
    pub fn speed_or_default(&self, name: &str) -> f64 {
        self.get(name).unwrap_or(FALLBACK_SPEED)
    }

    /// Set the speed for an existing planet, clamped to the slider range.
    /// Returns `false` (and changes nothing) for unknown names or
    /// non-finite values.
    pub fn set(&mut self, name: &str, speed: f64) -> bool {
        if !speed.is_finite() {
            log::debug!("speed: rejected non-finite speed for {name}");
            return false;
        }
        match self.speeds.get_mut(name) {
            Some(slot) => {
                *slot = speed.clamp(SLIDER.min, SLIDER.max);
                true
            }
            None => {
                log::debug!("speed: no planet named {name:?}");
                false
            }
        }
    }

    /// Restore every planet to its startup speed.
    pub fn reset(&mut self) {
        self.speeds.clone_from(&self.defaults);
    }

    pub fn len(&self) -> usize {
        self.speeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.speeds.is_empty()
    }
}

/// Panel text for a speed value: three decimal places.
pub fn format_speed(speed: f64) -> String {
    format!("{speed:.3}")
}
