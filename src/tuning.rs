//! Data-driven simulator balance
//!
//! Every constant the simulation and host read lives here so a page can
//! override them with a JSON document (see [`Tuning::from_json`]).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while loading tuning data
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to parse tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Simulator constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Velocity added per tick per held direction
    pub thrust: f32,
    /// Per-tick velocity multiplier, in (0, 1]
    pub drag: f32,
    /// Astronaut sprite diameter (pixels)
    pub astronaut_size: f32,
    /// Component box edge length (pixels)
    pub target_size: f32,
    /// Both velocity axes must stay strictly below this to count as stable
    pub stability_threshold: f32,
    /// Consecutive qualifying ticks needed to finish the task
    pub required_stability_ticks: u32,
    /// Seconds the completion message stays on screen
    pub message_hide_secs: f32,
    /// Astronaut start position as fractions of the bounds
    pub astronaut_anchor: [f32; 2],
    /// Target position as fractions of the bounds
    pub target_anchor: [f32; 2],
    /// Maximum parallax translation (pixels) at the edge of the cupola
    pub parallax_amplitude: f32,
    /// Video scale while the pointer hovers the cupola
    pub parallax_scale: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            // Small, precise force for coasting in microgravity
            thrust: 0.2,
            drag: 0.99,
            astronaut_size: 250.0,
            target_size: 20.0,
            stability_threshold: 0.05,
            // ~2 seconds at 60 Hz
            required_stability_ticks: 120,
            message_hide_secs: 8.0,
            astronaut_anchor: [1.0, 0.2],
            target_anchor: [0.56, 0.65],
            parallax_amplitude: 40.0,
            parallax_scale: 1.1,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON document; missing fields keep defaults
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        let invalid = |field, reason| Err(TuningError::Invalid { field, reason });

        if !(self.drag > 0.0 && self.drag <= 1.0) {
            return invalid("drag", "must be in (0, 1]");
        }
        if !self.thrust.is_finite() || self.thrust < 0.0 {
            return invalid("thrust", "must be finite and non-negative");
        }
        if !self.astronaut_size.is_finite() || self.astronaut_size <= 0.0 {
            return invalid("astronaut_size", "must be finite and positive");
        }
        if !self.target_size.is_finite() || self.target_size <= 0.0 {
            return invalid("target_size", "must be finite and positive");
        }
        if !self.stability_threshold.is_finite() || self.stability_threshold <= 0.0 {
            return invalid("stability_threshold", "must be finite and positive");
        }
        if self.required_stability_ticks == 0 {
            return invalid("required_stability_ticks", "must be at least 1");
        }
        if !self.message_hide_secs.is_finite() || self.message_hide_secs < 0.0 {
            return invalid("message_hide_secs", "must be finite and non-negative");
        }
        if self
            .astronaut_anchor
            .iter()
            .chain(self.target_anchor.iter())
            .any(|f| !f.is_finite())
        {
            return invalid("anchor", "must be finite");
        }
        if !self.parallax_amplitude.is_finite() || !self.parallax_scale.is_finite() {
            return invalid("parallax", "must be finite");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let tuning = Tuning::default();
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.required_stability_ticks, 120);
        assert!((tuning.drag - 0.99).abs() < f32::EPSILON);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "thrust": 0.5, "target_size": 40 }"#).unwrap();
        assert!((tuning.thrust - 0.5).abs() < f32::EPSILON);
        assert!((tuning.target_size - 40.0).abs() < f32::EPSILON);
        assert!((tuning.drag - 0.99).abs() < f32::EPSILON);
        assert_eq!(tuning.astronaut_anchor, [1.0, 0.2]);
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(Tuning::from_json("{}").unwrap(), Tuning::default());
    }

    #[test]
    fn test_rejects_bad_drag() {
        for json in [r#"{ "drag": 0 }"#, r#"{ "drag": 1.5 }"#, r#"{ "drag": -0.2 }"#] {
            match Tuning::from_json(json) {
                Err(TuningError::Invalid { field, .. }) => assert_eq!(field, "drag"),
                other => panic!("expected drag rejection for {json}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_drag_of_one_is_allowed() {
        assert!(Tuning::from_json(r#"{ "drag": 1.0 }"#).is_ok());
    }

    #[test]
    fn test_rejects_zero_required_ticks() {
        let err = Tuning::from_json(r#"{ "required_stability_ticks": 0 }"#).unwrap_err();
        assert!(err.to_string().contains("required_stability_ticks"));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            Tuning::from_json("{ thrust: "),
            Err(TuningError::Parse(_))
        ));
    }

    #[test]
    fn test_rejects_zero_size() {
        let err = Tuning::from_json(r#"{ "astronaut_size": 0 }"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::Invalid {
                field: "astronaut_size",
                ..
            }
        ));
    }
}
