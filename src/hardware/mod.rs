//!
//! Physical leg representations and handling
//!

pub mod error;
pub mod math;

use error::HardwareError;
use serde::{Serialize, Deserialize};

///
/// A simple container for the two link lengths of a leg.
/// All fields are in the same (arbitrary) length unit as the pivot and targets.
/// All features have an associated getter function.
///
/// # Fields:
/// - `link1`: The length of the upper link, between the pivot and the elbow
/// - `link2`: The length of the lower link, between the elbow and the wrist (foot)
///
#[derive(getset::Getters, Clone, Copy, Debug, PartialEq)]
#[get = "pub"]
pub struct LinkPair {
    link1: f64,
    link2: f64,
}

impl LinkPair {
    ///
    /// Creates a new link pair. Both lengths must be positive and finite.
    ///
    /// # Parameters:
    /// - `link1`: The upper link length
    /// - `link2`: The lower link length
    ///
    /// # Returns:
    /// - A new `LinkPair` instance
    /// - A `HardwareError` if either length is not a positive, finite number
    ///
    pub fn new(link1: f64, link2: f64) -> Result<LinkPair, HardwareError> {
        if !link1.is_finite() || link1 <= 0. {
            return Err(HardwareError::NonPositiveLink { name: "link1", length: link1 });
        }
        if !link2.is_finite() || link2 <= 0. {
            return Err(HardwareError::NonPositiveLink { name: "link2", length: link2 });
        }

        Ok(LinkPair { link1, link2 })
    }

    ///
    /// # Returns:
    /// - The furthest distance from the pivot the wrist can reach, `link1 + link2`
    ///
    pub fn max_reach(&self) -> f64 {
        self.link1 + self.link2
    }

    ///
    /// # Returns:
    /// - The closest distance from the pivot the wrist can reach, `|link1 - link2|`
    ///
    pub fn min_reach(&self) -> f64 {
        (self.link1 - self.link2).abs()
    }
}

///
/// Which of the two analytic inverse kinematics solutions a leg uses.
/// Resolved once when a leg is built and never switched at runtime.
///
/// - `ElbowUp`: positive bend, `beta` in `[0, π]`
/// - `ElbowDown`: the mirrored solution, `beta` in `[-π, 0]`
///
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ElbowConfig {
    #[default]
    ElbowUp,
    ElbowDown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reach_bounds() {
        let links = LinkPair::new(40., 55.).unwrap();
        assert_eq!(links.max_reach(), 95.);
        assert_eq!(links.min_reach(), 15.);
    }

    #[test]
    fn zero_link_rejected() {
        let result = LinkPair::new(0., 40.);
        assert!(matches!(result, Err(HardwareError::NonPositiveLink { name: "link1", .. })));
    }

    #[test]
    fn nan_link_rejected() {
        assert!(LinkPair::new(40., f64::NAN).is_err());
    }

    #[test]
    fn elbow_config_from_json() {
        let elbow: ElbowConfig = serde_json::from_str("\"elbow_down\"").unwrap();
        assert_eq!(elbow, ElbowConfig::ElbowDown);
    }
}
