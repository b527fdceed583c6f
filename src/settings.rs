//! Sweep configuration
//!
//! Defaults reproduce the classic sweep page. Overrides are read as JSON:
//! from LocalStorage on the web, from the file named by `RAY_SWEEP_CONFIG`
//! natively. Missing fields fall back to their defaults.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Point;
use crate::consts::*;

/// Why a configuration was refused
#[derive(Debug)]
pub enum ConfigError {
    /// Not valid JSON for [`SweepConfig`]
    Parse(serde_json::Error),
    /// Parsed, but a value is unusable
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(err) => write!(f, "malformed sweep config: {err}"),
            ConfigError::Invalid(reason) => write!(f, "invalid sweep config: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(err) => Some(err),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err)
    }
}

/// Everything a sweep session needs to start
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    /// Ray origin
    pub center: Point,
    /// First sampled angle (degrees)
    pub initial_angle: f64,
    /// Degrees added per tick
    pub angle_step: f64,
    /// Heights kept for the chart
    pub history_capacity: usize,

    // === Canvas ===
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Clicks are accepted inside [region_min, region_max] (inclusive)
    pub region_min: Point,
    pub region_max: Point,
    /// Chart origin for the newest sample
    pub chart_offset: Point,

    /// Polygon shown before the user draws anything
    pub seed_polygon: Vec<Point>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            center: Point::new(CENTER.0, CENTER.1),
            initial_angle: INITIAL_ANGLE,
            angle_step: ANGLE_STEP,
            history_capacity: HISTORY_CAPACITY,

            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            region_min: Point::new(REGION_MIN.0, REGION_MIN.1),
            region_max: Point::new(REGION_MAX.0, REGION_MAX.1),
            chart_offset: Point::new(CHART_OFFSET.0, CHART_OFFSET.1),

            seed_polygon: SEED_POLYGON
                .iter()
                .map(|&(x, y)| Point::new(x, y))
                .collect(),
        }
    }
}

impl SweepConfig {
    /// Parse and validate a JSON override
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the values a sweep cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.center.is_finite() {
            return Err(ConfigError::Invalid("center must be finite"));
        }
        if !self.initial_angle.is_finite() {
            return Err(ConfigError::Invalid("initial_angle must be finite"));
        }
        // Ticks must move strictly forward, and a revolution must end
        if !(self.angle_step.is_finite() && self.angle_step >= MIN_ANGLE_STEP) {
            return Err(ConfigError::Invalid("angle_step must be at least 1e-6 degrees"));
        }
        if !(1..=MAX_HISTORY_CAPACITY).contains(&self.history_capacity) {
            return Err(ConfigError::Invalid("history_capacity must be between 1 and 6000"));
        }
        if self.region_min.cmpge(self.region_max).any() {
            return Err(ConfigError::Invalid("region must have positive width and height"));
        }
        if self.seed_polygon.iter().any(|p| !p.is_finite()) {
            return Err(ConfigError::Invalid("seed_polygon vertices must be finite"));
        }
        Ok(())
    }

    /// Whether a click at `point` may add a vertex
    pub fn region_contains(&self, point: Point) -> bool {
        point.cmpge(self.region_min).all() && point.cmple(self.region_max).all()
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "ray_sweep_config";

    /// Environment variable naming a JSON config file
    #[allow(dead_code)]
    const CONFIG_ENV: &'static str = "RAY_SWEEP_CONFIG";

    /// Load an override from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(config) => {
                        log::info!("Loaded sweep config from LocalStorage");
                        return config;
                    }
                    Err(err) => log::warn!("Ignoring stored config: {err}"),
                }
            }
        }

        log::info!("Using default sweep config");
        Self::default()
    }

    /// Load an override from the file named by `RAY_SWEEP_CONFIG`
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Ok(path) = std::env::var(Self::CONFIG_ENV) else {
            log::info!("Using default sweep config");
            return Self::default();
        };

        let parsed = std::fs::read_to_string(&path)
            .map_err(|err| err.to_string())
            .and_then(|json| Self::from_json(&json).map_err(|err| err.to_string()));
        match parsed {
            Ok(config) => {
                log::info!("Loaded sweep config from {path}");
                config
            }
            Err(err) => {
                log::warn!("Ignoring config at {path}: {err}");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_seed_page() {
        let config = SweepConfig::default();
        assert_eq!(config.center, Point::new(100.0, 300.0));
        assert_eq!(config.initial_angle, 26.0);
        assert_eq!(config.angle_step, 1.0);
        assert_eq!(config.history_capacity, 600);
        assert_eq!(config.seed_polygon.len(), 12);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = SweepConfig::from_json(r#"{ "angle_step": 2.5, "center": [10.0, 20.0] }"#)
            .expect("partial config parses");
        assert_eq!(config.angle_step, 2.5);
        assert_eq!(config.center, Point::new(10.0, 20.0));
        assert_eq!(config.history_capacity, HISTORY_CAPACITY);
    }

    #[test]
    fn test_json_roundtrip() {
        let config = SweepConfig::default();
        let json = config.to_json().unwrap();
        assert_eq!(SweepConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            SweepConfig::from_json(r#"{ "angle_step": 0.0 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            SweepConfig::from_json(r#"{ "history_capacity": 0 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            SweepConfig::from_json(r#"{ "angle_step": "fast" }"#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_rejects_oversized_history() {
        assert!(matches!(
            SweepConfig::from_json(r#"{ "history_capacity": 18446744073709551615 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            SweepConfig::from_json(r#"{ "history_capacity": 1000000 }"#),
            Err(ConfigError::Invalid(_))
        ));

        let largest = format!(r#"{{ "history_capacity": {MAX_HISTORY_CAPACITY} }}"#);
        let config = SweepConfig::from_json(&largest).expect("upper bound is allowed");
        assert_eq!(config.history_capacity, MAX_HISTORY_CAPACITY);
    }

    #[test]
    fn test_rejects_tiny_angle_step() {
        assert!(matches!(
            SweepConfig::from_json(r#"{ "angle_step": 1e-300 }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            SweepConfig::from_json(r#"{ "angle_step": -1.0 }"#),
            Err(ConfigError::Invalid(_))
        ));
        let config = SweepConfig::from_json(r#"{ "angle_step": 1e-6 }"#).expect("minimum step is allowed");
        assert_eq!(config.angle_step, MIN_ANGLE_STEP);
    }

    #[test]
    fn test_rejects_empty_region() {
        assert!(matches!(
            SweepConfig::from_json(r#"{ "region_min": [10.0, 10.0], "region_max": [10.0, 10.0] }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            SweepConfig::from_json(r#"{ "region_min": [10.0, 0.0], "region_max": [10.0, 50.0] }"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            SweepConfig::from_json(r#"{ "region_min": [50.0, 0.0], "region_max": [10.0, 50.0] }"#),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_region_contains_is_inclusive() {
        let config = SweepConfig::default();
        assert!(config.region_contains(Point::new(0.0, 200.0)));
        assert!(config.region_contains(Point::new(200.0, 400.0)));
        assert!(config.region_contains(Point::new(120.0, 330.0)));
        assert!(!config.region_contains(Point::new(201.0, 300.0)));
        assert!(!config.region_contains(Point::new(50.0, 199.5)));
    }
}
