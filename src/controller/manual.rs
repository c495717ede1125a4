use nalgebra::Point2;

use crate::controller::state::LegFrame;
use crate::hardware::math::solve;
use crate::hardware::{ElbowConfig, LinkPair};
use crate::preview::Renderer;

///
/// A single leg steered by hand: targets come straight from an input collaborator (a slider,
/// a mouse) rather than from a gait.
///
/// # Fields:
/// - `links`: The leg's link lengths
/// - `pivot`: The fixed shoulder/hip position
/// - `elbow`: Which inverse kinematics solution to use
///
#[derive(Clone, Copy, Debug)]
pub struct ManualLeg {
    pub links: LinkPair,
    pub pivot: Point2<f64>,
    pub elbow: ElbowConfig,
}

impl ManualLeg {
    pub fn new(links: LinkPair, pivot: Point2<f64>, elbow: ElbowConfig) -> ManualLeg {
        ManualLeg { links, pivot, elbow }
    }

    ///
    /// Solves the leg for a target, without rendering.
    ///
    pub fn solve(&self, target: Point2<f64>) -> LegFrame {
        LegFrame::from_solution(self.pivot, &solve(target, self.pivot, &self.links, self.elbow))
    }

    ///
    /// Solves the leg for a target and hands the result to a renderer as leg 0.
    ///
    /// # Parameters:
    /// - `target`: The requested foot position
    /// - `renderer`: The collaborator receiving the leg geometry
    ///
    /// # Returns:
    /// - The resulting leg geometry
    ///
    pub fn apply<R: Renderer + ?Sized>(&self, target: Point2<f64>, renderer: &mut R) -> LegFrame {
        let frame = self.solve(target);
        renderer.render_leg(0, &frame);

        frame
    }
}
