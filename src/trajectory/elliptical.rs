use std::f64::consts::PI;

use nalgebra::Point2;

use crate::trajectory::{StrideParameters, TrajectoryMethod};

///
/// An empty struct to implement the "Elliptical" trajectory shape on.
/// The stride is centred on the start point: the foot swings from `x0 - L/2` to `x0 + L/2`
/// over the top of a half-ellipse, then slides back along the ground.
///
pub struct EllipticalMethod;

impl TrajectoryMethod for EllipticalMethod {
    fn get_id(&self) -> &'static str {
        "elliptical"
    }

    fn get_formatted_name(&self) -> &'static str {
        "Elliptical"
    }

    fn swing_point(&self, params: &StrideParameters, t: f64) -> Point2<f64> {
        let (x0, y0) = params.start;
        let theta = PI * (1. - t);

        Point2::new(
            x0 + (params.step_length / 2.) * theta.cos(),
            y0 + params.lift_height() * theta.sin(),
        )
    }

    fn stance_point(&self, params: &StrideParameters, t: f64) -> Point2<f64> {
        let (x0, y0) = params.start;
        let half = params.step_length / 2.;

        Point2::new((1. - t) * (x0 + half) + t * (x0 - half), y0)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swing_spans_centred_stride() {
        let params = StrideParameters::default();
        let path = EllipticalMethod.gen_swing(&params, 8).unwrap();

        assert!((path[0].x - 40.).abs() < 1e-9);
        assert!((path[7].x - 60.).abs() < 1e-9);
        assert!((path[0].y - 90.).abs() < 1e-9);
        assert!((path[7].y - 90.).abs() < 1e-9);
    }

    #[test]
    fn stance_is_flat() {
        let params = StrideParameters::default();
        let path = EllipticalMethod.gen_stance(&params, 24).unwrap();
        assert!(path.iter().all(|p| p.y == params.start.1));
    }

    #[test]
    fn cycle_closes() {
        let params = StrideParameters::default();
        let swing_end = EllipticalMethod.swing_point(&params, 1.);
        let stance_start = EllipticalMethod.stance_point(&params, 0.);
        let stance_end = EllipticalMethod.stance_point(&params, 1.);
        let swing_start = EllipticalMethod.swing_point(&params, 0.);

        assert!((swing_end - stance_start).norm() < 1e-9);
        assert!((stance_end - swing_start).norm() < 1e-9);
    }
}
