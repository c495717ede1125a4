//!
//! Construction-time configuration of a quadruped
//!

pub mod error;

use nalgebra::Point2;
use serde::{Serialize, Deserialize};

use crate::controller::{Leg, Quadruped};
use crate::gait::{GaitCycle, GaitPattern, PivotAdvance};
use crate::hardware::{ElbowConfig, LinkPair};
use crate::trajectory::{StrideParameters, TrajectoryShape};
use error::ConfigError;

///
/// Every parameter needed to build a quadruped. All four legs share the same geometry and stride;
/// they differ only in phase offset. Missing fields take their default values.
///
/// # Fields:
/// - `link1`, `link2`: The link lengths of each leg
/// - `pivot`: The shoulder/hip position of each leg, in its own frame
/// - `stride`: The stride parameters of the foot path
/// - `swing_steps`, `stance_steps`: The gait cycle
/// - `pattern`: The phase offsets of the four legs
/// - `elbow`: Which inverse kinematics solution the legs use
/// - `shape`: The trajectory shape of the foot path
/// - `pivot_advance`: Whether the pivots move forward each stride
///
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct QuadrupedConfig {
    pub link1: f64,
    pub link2: f64,
    pub pivot: (f64, f64),
    pub stride: StrideParameters,
    pub swing_steps: usize,
    pub stance_steps: usize,
    pub pattern: GaitPattern,
    pub elbow: ElbowConfig,
    pub shape: TrajectoryShape,
    pub pivot_advance: PivotAdvance,
}

impl Default for QuadrupedConfig {
    fn default() -> Self {
        QuadrupedConfig {
            link1: 40.,
            link2: 40.,
            pivot: (50., 150.),
            stride: StrideParameters::default(),
            swing_steps: 8,
            stance_steps: 24,
            pattern: GaitPattern::default(),
            elbow: ElbowConfig::default(),
            shape: TrajectoryShape::default(),
            pivot_advance: PivotAdvance::default(),
        }
    }
}

impl QuadrupedConfig {
    pub fn from_json(json: &str) -> Result<QuadrupedConfig, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    ///
    /// Builds the quadruped this configuration describes.
    ///
    /// # Returns:
    /// - A new `Quadruped`, with legs in pattern order
    /// - A `ConfigError` if any value is invalid
    ///
    pub fn build(&self) -> Result<Quadruped, ConfigError> {
        let links = LinkPair::new(self.link1, self.link2)?;
        let cycle = GaitCycle::new(self.swing_steps, self.stance_steps)?;
        let pivot = Point2::new(self.pivot.0, self.pivot.1);

        let legs = self.pattern.offsets()
            .into_iter()
            .map(|offset| {
                Leg::new(links, pivot, offset, self.elbow, self.stride, self.shape, &cycle)
            })
            .collect::<Result<Vec<Leg>, _>>()?;

        log::debug!(
            "built quadruped: offsets {:?}, cycle {} ticks, {} trajectory ({})",
            self.pattern.offsets(),
            cycle.cycle_length(),
            self.shape.method().get_formatted_name(),
            self.shape.method().get_id()
        );

        Ok(Quadruped::new(legs, cycle, self.pivot_advance)?)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::error::QuadrupedError;
    use crate::gait::error::GaitError;
    use crate::hardware::error::HardwareError;

    #[test]
    fn empty_json_gives_defaults() {
        assert_eq!(QuadrupedConfig::from_json("{}").unwrap(), QuadrupedConfig::default());
    }

    #[test]
    fn json_round_trip() {
        let config = QuadrupedConfig {
            pattern: GaitPattern::Crawl,
            shape: TrajectoryShape::Elliptical,
            ..Default::default()
        };
        assert_eq!(QuadrupedConfig::from_json(&config.to_json().unwrap()).unwrap(), config);
    }

    #[test]
    fn partial_json() {
        let config = QuadrupedConfig::from_json(r#"{
            "link2": 55,
            "stride": { "step_length": 30 },
            "pattern": "crawl",
            "elbow": "elbow_down",
            "pivot_advance": "per_stride"
        }"#).unwrap();

        assert_eq!(config.link1, 40.);
        assert_eq!(config.link2, 55.);
        assert_eq!(config.stride.step_length, 30.);
        assert_eq!(config.stride.bob_amplitude, 3.);
        assert_eq!(config.pattern, GaitPattern::Crawl);
        assert_eq!(config.elbow, ElbowConfig::ElbowDown);
        assert_eq!(config.pivot_advance, PivotAdvance::PerStride);
    }

    #[test]
    fn malformed_json() {
        let result = QuadrupedConfig::from_json(r#"{"link1": "long"}"#);
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[test]
    fn builds_default_quadruped() {
        let quadruped = QuadrupedConfig::default().build().unwrap();
        let offsets: Vec<u32> = quadruped.legs().iter().map(|leg| *leg.offset()).collect();

        assert_eq!(offsets, [0, 2, 1, 3]);
        assert_eq!(quadruped.cycle().cycle_length(), 32);
        assert!(quadruped.legs().iter().all(|leg| leg.path().len() == 32));
    }

    #[test]
    fn negative_link_rejected() {
        let config = QuadrupedConfig { link1: -1., ..Default::default() };
        let result = config.build();
        assert!(matches!(
            result,
            Err(ConfigError::Hardware(HardwareError::NonPositiveLink { .. }))
        ));
    }

    #[test]
    fn short_stance_rejected() {
        let config = QuadrupedConfig { stance_steps: 0, ..Default::default() };
        let result = config.build();
        assert!(matches!(
            result,
            Err(ConfigError::Gait(GaitError::TooFewSteps { phase: "stance", .. }))
        ));
    }

    #[test]
    fn shared_offsets_rejected() {
        let pattern = GaitPattern::Custom([0, 1, 1, 0]);
        let config = QuadrupedConfig { pattern, ..Default::default() };
        let result = config.build();
        assert!(matches!(
            result,
            Err(ConfigError::Quadruped(QuadrupedError::DuplicateOffset { .. }))
        ));
    }
}
