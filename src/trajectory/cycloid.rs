use std::f64::consts::PI;

use nalgebra::Point2;

use crate::trajectory::{StrideParameters, TrajectoryMethod};

///
/// An empty struct to implement the "Cycloid" trajectory shape on.
///
pub struct CycloidMethod;

impl TrajectoryMethod for CycloidMethod {
    ///
    /// # Returns:
    /// - The backend ID of the trajectory shape
    ///
    fn get_id(&self) -> &'static str {
        "cycloid"
    }

    ///
    /// # Returns:
    /// - The frontend display name of the trajectory shape
    ///
    fn get_formatted_name(&self) -> &'static str {
        "Cycloid"
    }

    ///
    /// The swing follows a cycloid: the foot leaves and touches down with zero horizontal
    /// velocity, and lifts by `lift_height` at `t = 0.5`.
    ///
    /// `x(t) = x0 + L(t - sin(2πt) / 2π)`, `y(t) = y0 + h sin(πt)`
    ///
    fn swing_point(&self, params: &StrideParameters, t: f64) -> Point2<f64> {
        let (x0, y0) = params.start;
        let x = x0 + params.step_length * (t - (2. * PI * t).sin() / (2. * PI));
        let y = y0 + params.lift_height() * (PI * t).sin();

        Point2::new(x, y)
    }

    ///
    /// The stance keeps the pivot fixed and moves the foot target back along the ground, from
    /// `x0 + L` to `x0`, while the body bobs by `bob_amplitude` at mid-stance.
    ///
    /// `x(t) = (1 - t)(x0 + L) + t x0`, `y(t) = y0 + b sin(πt)`
    ///
    fn stance_point(&self, params: &StrideParameters, t: f64) -> Point2<f64> {
        let (x0, y0) = params.start;
        let x = (1. - t) * (x0 + params.step_length) + t * x0;
        let y = y0 + params.bob_amplitude * (PI * t).sin();

        Point2::new(x, y)
    }
}
