use nalgebra::{Point2, Vector2};
use serde::{Serialize, Deserialize};

use super::{ElbowConfig, LinkPair};

///
/// The two joint angles of a leg, in radians.
///
/// # Fields:
/// - `alpha`: The shoulder angle, measured from the +x axis of the pivot frame
/// - `beta`: The elbow bend, relative to the upper link
///
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct JointAngles {
    pub alpha: f64,
    pub beta: f64,
}

///
/// Whether a requested foot target was reached as given, or moved onto the reachable annulus.
///
/// - `Reached`: The target was inside the workspace and is used unchanged
/// - `ClampedToReach`: The target was further than `link1 + link2`, and was pulled in along the
/// pivot -> target ray
/// - `ClampedToInnerReach`: The target was closer than `|link1 - link2|`, and was pushed out along
/// the pivot -> target ray
///
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Reach {
    #[default]
    Reached,
    ClampedToReach,
    ClampedToInnerReach,
}

impl Reach {
    ///
    /// # Returns:
    /// - true if the effective target differs from the requested one
    ///
    pub fn is_clamped(&self) -> bool {
        *self != Reach::Reached
    }
}

///
/// A full inverse kinematics result for one leg.
///
/// # Fields:
/// - `angles`: The computed joint angles
/// - `elbow`: The position of the elbow joint
/// - `wrist`: The position of the end of the lower link, equal to `target`
/// - `target`: The effective target, after clamping
/// - `requested`: The target that was asked for
/// - `reach`: How the requested target relates to the effective target
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IkSolution {
    pub angles: JointAngles,
    pub elbow: Point2<f64>,
    pub wrist: Point2<f64>,
    pub target: Point2<f64>,
    pub requested: Point2<f64>,
    pub reach: Reach,
}

///
/// Moves a target onto the reachable annulus around the pivot, `[|link1 - link2|, link1 + link2]`.
/// Targets already inside it are returned unchanged. The direction is taken from half the offset,
/// so any finite target gives a finite result, however far it is from the pivot.
///
/// # Parameters:
/// - `target`: The requested target
/// - `pivot`: The leg's pivot
/// - `links`: The leg's link lengths
///
/// # Returns:
/// - The effective target and its `Reach` classification
///
pub fn clamp_to_reach(
    target: Point2<f64>,
    pivot: Point2<f64>,
    links: &LinkPair,
) -> (Point2<f64>, Reach) {
    let half = target.coords * 0.5 - pivot.coords * 0.5;
    let half_distance = half.x.hypot(half.y);
    // may be infinite, only ever compared
    let distance = 2. * half_distance;

    if distance > links.max_reach() {
        let clamped = pivot + half * (links.max_reach() / half_distance);
        return (clamped, Reach::ClampedToReach);
    }

    if distance < links.min_reach() {
        // a target on the pivot has no direction, so fall back to +x
        let direction = if distance > f64::EPSILON { half / half_distance } else { Vector2::x() };
        return (pivot + direction * links.min_reach(), Reach::ClampedToInnerReach);
    }

    (target, Reach::Reached)
}

///
/// Solves the two-link inverse kinematics problem in closed form. Never fails: out-of-reach
/// targets are clamped first, and the law-of-cosines argument is clamped to `[-1, 1]`.
///
/// # Parameters:
/// - `target`: The requested foot position
/// - `pivot`: The position of the shoulder/hip joint
/// - `links`: The link lengths of the leg
/// - `elbow`: Which of the two solutions to produce
///
/// # Returns:
/// - The joint angles, joint positions and reach classification
///
pub fn solve(
    target: Point2<f64>,
    pivot: Point2<f64>,
    links: &LinkPair,
    elbow: ElbowConfig,
) -> IkSolution {
    let (effective, reach) = clamp_to_reach(target, pivot, links);
    if reach.is_clamped() {
        log::debug!(
            "foot target ({:.3}, {:.3}) clamped to ({:.3}, {:.3}): {:?}",
            target.x, target.y, effective.x, effective.y, reach
        );
    }

    let (l1, l2) = (*links.link1(), *links.link2());
    let delta = effective - pivot;
    let distance_sq = delta.norm_squared();

    let cos_beta = ((distance_sq - l1 * l1 - l2 * l2) / (2. * l1 * l2)).clamp(-1., 1.);
    let bend = cos_beta.acos();
    let beta = match elbow {
        ElbowConfig::ElbowUp => bend,
        ElbowConfig::ElbowDown => -bend,
    };

    let alpha = f64::atan2(delta.y, delta.x) - f64::atan2(l2 * beta.sin(), l1 + l2 * beta.cos());
    let angles = JointAngles { alpha, beta };
    let (elbow, wrist) = forward(pivot, links, angles);

    IkSolution { angles, elbow, wrist, target: effective, requested: target, reach }
}

///
/// Forward kinematics: places the elbow and wrist given the joint angles.
///
/// # Parameters:
/// - `pivot`: The position of the shoulder/hip joint
/// - `links`: The link lengths of the leg
/// - `angles`: The joint angles
///
/// # Returns:
/// - The elbow and wrist positions, respectively
///
pub fn forward(
    pivot: Point2<f64>,
    links: &LinkPair,
    angles: JointAngles,
) -> (Point2<f64>, Point2<f64>) {
    let JointAngles { alpha, beta } = angles;
    let elbow = pivot + Vector2::new(alpha.cos(), alpha.sin()) * *links.link1();
    let wrist = elbow + Vector2::new((alpha + beta).cos(), (alpha + beta).sin()) * *links.link2();

    (elbow, wrist)
}
