//!
//! Foot trajectory generation: swing and stance paths, and full gait-cycle paths
//!

pub mod error;

pub mod cycloid;
pub mod elliptical;

use std::ops::Index;

use nalgebra::Point2;
use ordered_float::OrderedFloat;
use serde::{Serialize, Deserialize};

use crate::gait::GaitCycle;
use error::TrajectoryError;

///
/// The trait for all trajectory shapes to implement.
///
/// # Functions:
/// - `get_id`: Should return the unique ID of a trajectory shape
/// - `get_formatted_name`: Should return the formatted name of a trajectory shape
/// - `swing_point`: Should return the foot position at `t` in `[0, 1]` while the leg is airborne
/// - `stance_point`: Should return the foot position at `t` in `[0, 1]` while the leg is grounded
///
/// The provided functions sample these into finite paths.
///
pub trait TrajectoryMethod {
    fn get_id(&self) -> &'static str;
    fn get_formatted_name(&self) -> &'static str;

    fn swing_point(&self, params: &StrideParameters, t: f64) -> Point2<f64>;
    fn stance_point(&self, params: &StrideParameters, t: f64) -> Point2<f64>;

    ///
    /// Samples the swing phase at `steps` evenly spaced values of `t`, both endpoints included.
    ///
    fn gen_swing(
        &self,
        params: &StrideParameters,
        steps: usize,
    ) -> Result<FootPath, TrajectoryError> {
        params.validate()?;
        Ok(sample_times(steps)?.map(|t| self.swing_point(params, t)).collect())
    }

    ///
    /// Samples the stance phase at `steps` evenly spaced values of `t`, both endpoints included.
    ///
    fn gen_stance(
        &self,
        params: &StrideParameters,
        steps: usize,
    ) -> Result<FootPath, TrajectoryError> {
        params.validate()?;
        Ok(sample_times(steps)?.map(|t| self.stance_point(params, t)).collect())
    }

    ///
    /// Builds the path for one full gait cycle: `swing_steps` swing samples followed by
    /// `stance_steps` stance samples. The result has exactly `cycle_length` points.
    ///
    /// # Parameters:
    /// - `params`: The stride parameters of the leg
    /// - `cycle`: The gait cycle shared by all legs
    ///
    /// # Returns:
    /// - The full-cycle path, indexable by the scheduler's index
    /// - A `TrajectoryError` if the parameters or step counts are invalid
    ///
    fn gen_cycle(
        &self,
        params: &StrideParameters,
        cycle: &GaitCycle,
    ) -> Result<FootPath, TrajectoryError> {
        let swing = self.gen_swing(params, *cycle.swing_steps())?;
        let stance = self.gen_stance(params, *cycle.stance_steps())?;

        Ok(swing.concat(stance))
    }
}

///
/// The trajectory shapes available to a gait, selected at construction.
///
/// - `Cycloid`: a cycloidal swing and a bobbing stance
/// - `Elliptical`: a half-ellipse swing and a flat stance
///
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TrajectoryShape {
    #[default]
    Cycloid,
    Elliptical,
}

impl TrajectoryShape {
    ///
    /// # Returns:
    /// - The trajectory method implementing this shape
    ///
    pub fn method(&self) -> &'static dyn TrajectoryMethod {
        match self {
            TrajectoryShape::Cycloid => &cycloid::CycloidMethod,
            TrajectoryShape::Elliptical => &elliptical::EllipticalMethod,
        }
    }
}

///
/// The parameters describing one stride of a leg.
///
/// # Fields:
/// - `start`: The foot position where the swing begins, `(x0, y0)`
/// - `step_length`: The horizontal distance covered by one swing, negative to walk towards -x
/// - `lift_ratio`: The swing's peak lift, as a fraction of `|step_length|`
/// - `bob_amplitude`: The peak vertical bob during stance
///
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub struct StrideParameters {
    pub start: (f64, f64),
    pub step_length: f64,
    pub lift_ratio: f64,
    pub bob_amplitude: f64,
}

impl Default for StrideParameters {
    fn default() -> Self {
        StrideParameters { start: (50., 90.), step_length: 20., lift_ratio: 0.5, bob_amplitude: 3. }
    }
}

impl StrideParameters {
    ///
    /// # Returns:
    /// - The peak height of the swing above the start, `lift_ratio * |step_length|`
    ///
    pub fn lift_height(&self) -> f64 {
        self.lift_ratio * self.step_length.abs()
    }

    ///
    /// Checks every parameter is a finite number.
    ///
    /// # Returns:
    /// - Void if the parameters are usable
    /// - A `TrajectoryError` naming the first non-finite parameter
    ///
    pub fn validate(&self) -> Result<(), TrajectoryError> {
        let fields = [
            ("start.x", self.start.0),
            ("start.y", self.start.1),
            ("step_length", self.step_length),
            ("lift_ratio", self.lift_ratio),
            ("bob_amplitude", self.bob_amplitude),
        ];

        match fields.iter().find(|(_, value)| !value.is_finite()) {
            Some(&(name, value)) => Err(TrajectoryError::NonFiniteParameter { name, value }),
            None => Ok(()),
        }
    }
}

///
/// A finite, ordered sequence of foot positions. Paths are computed eagerly and can be
/// walked any number of times.
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FootPath {
    points: Vec<Point2<f64>>,
}

impl FootPath {
    pub fn new(points: Vec<Point2<f64>>) -> FootPath {
        FootPath { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Point2<f64>> {
        self.points.get(index).copied()
    }

    pub fn points(&self) -> &[Point2<f64>] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point2<f64>> {
        self.points.iter()
    }

    ///
    /// Appends another path to the end of this one.
    ///
    pub fn concat(mut self, other: FootPath) -> FootPath {
        self.points.extend(other.points);
        self
    }

    ///
    /// # Returns:
    /// - The highest point of the path (largest y), or `None` for an empty path
    ///
    pub fn apex(&self) -> Option<Point2<f64>> {
        self.points.iter().copied().max_by_key(|p| OrderedFloat(p.y))
    }
}

impl Index<usize> for FootPath {
    type Output = Point2<f64>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl FromIterator<Point2<f64>> for FootPath {
    fn from_iter<I: IntoIterator<Item = Point2<f64>>>(iter: I) -> Self {
        FootPath { points: iter.into_iter().collect() }
    }
}

///
/// Produces `steps` evenly spaced values from 0 to 1 inclusive.
///
/// # Parameters:
/// - `steps`: The number of samples, at least 2
///
/// # Returns:
/// - An iterator over the sample times
/// - A `TrajectoryError` if fewer than two samples were asked for
///
pub fn sample_times(steps: usize) -> Result<impl Iterator<Item = f64>, TrajectoryError> {
    if steps < 2 {
        return Err(TrajectoryError::TooFewSamples(steps));
    }

    let last = (steps - 1) as f64;
    Ok((0..steps).map(move |i| i as f64 / last))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_times_include_endpoints() {
        let times: Vec<f64> = sample_times(5).unwrap().collect();
        assert_eq!(times, [0., 0.25, 0.5, 0.75, 1.]);
    }

    #[test]
    fn single_sample_rejected() {
        assert!(matches!(sample_times(1), Err(TrajectoryError::TooFewSamples(1))));
    }

    #[test]
    fn full_cycle_has_cycle_length() {
        let cycle = GaitCycle::new(8, 24).unwrap();
        for shape in [TrajectoryShape::Cycloid, TrajectoryShape::Elliptical] {
            let path = shape.method().gen_cycle(&StrideParameters::default(), &cycle).unwrap();
            assert_eq!(path.len(), 32);
        }
    }

    #[test]
    fn full_cycle_is_swing_then_stance() {
        let params = StrideParameters::default();
        let method = TrajectoryShape::Cycloid.method();
        let cycle = GaitCycle::new(8, 24).unwrap();

        let full = method.gen_cycle(&params, &cycle).unwrap();
        let swing = method.gen_swing(&params, 8).unwrap();
        let stance = method.gen_stance(&params, 24).unwrap();

        assert_eq!(&full.points()[..8], swing.points());
        assert_eq!(&full.points()[8..], stance.points());
    }

    #[test]
    fn non_finite_parameter_rejected() {
        let params = StrideParameters { step_length: f64::INFINITY, ..Default::default() };
        let err = TrajectoryShape::Cycloid.method().gen_swing(&params, 8).unwrap_err();
        assert!(matches!(err, TrajectoryError::NonFiniteParameter { name: "step_length", .. }));
    }

    #[test]
    fn shapes_are_named() {
        let cycloid = TrajectoryShape::Cycloid.method();
        let elliptical = TrajectoryShape::Elliptical.method();

        assert_eq!((cycloid.get_id(), cycloid.get_formatted_name()), ("cycloid", "Cycloid"));
        assert_eq!(elliptical.get_formatted_name(), "Elliptical");
        assert_ne!(cycloid.get_id(), elliptical.get_id());
    }

    #[test]
    fn paths_are_restartable() {
        let method = TrajectoryShape::Cycloid.method();
        let path = method.gen_swing(&StrideParameters::default(), 10).unwrap();
        let first: Vec<_> = path.iter().copied().collect();
        let second: Vec<_> = path.iter().copied().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn apex_of_empty_path() {
        assert!(FootPath::default().apex().is_none());
    }

    #[test]
    fn parameters_from_partial_json() {
        let params: StrideParameters = serde_json::from_str(r#"{"step_length": 30}"#).unwrap();
        assert_eq!(params.step_length, 30.);
        assert_eq!(params.start, (50., 90.));
        assert_eq!(params.lift_height(), 15.);
    }
}
