use nalgebra::Point2;

use crate::gait::{GaitScheduler, Phase};
use crate::hardware::math::{IkSolution, JointAngles, Reach};

///
/// The geometry of one leg at one tick, as handed to a renderer.
///
/// # Fields:
/// - `pivot`: The shoulder/hip joint position
/// - `elbow`: The elbow joint position
/// - `wrist`: The end of the lower link
/// - `foot`: The effective foot target, equal to `wrist`
/// - `requested`: The foot target before clamping
/// - `angles`: The joint angles
/// - `reach`: Whether the requested target had to be clamped
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegFrame {
    pub pivot: Point2<f64>,
    pub elbow: Point2<f64>,
    pub wrist: Point2<f64>,
    pub foot: Point2<f64>,
    pub requested: Point2<f64>,
    pub angles: JointAngles,
    pub reach: Reach,
}

impl LegFrame {
    pub fn from_solution(pivot: Point2<f64>, solution: &IkSolution) -> LegFrame {
        LegFrame {
            pivot,
            elbow: solution.elbow,
            wrist: solution.wrist,
            foot: solution.target,
            requested: solution.requested,
            angles: solution.angles,
            reach: solution.reach,
        }
    }
}

///
/// The computed state of one leg after a tick.
///
/// # Fields:
/// - `path_index`: The sample of the leg's cycle path that was targeted
/// - `phase`: Whether the leg was swinging or standing
/// - `frame`: The resulting leg geometry
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegState {
    pub path_index: usize,
    pub phase: Phase,
    pub frame: LegFrame,
}

///
/// Everything that changes while a quadruped walks: the scheduler's tick counter and the
/// state of each leg. Owned by the caller and advanced by `controller::step`.
///
/// # Fields:
/// - `scheduler`: The gait scheduler, holding the next tick to compute
/// - `legs`: The leg states computed on the last tick, empty before the first one
/// - `last_tick`: The tick the leg states belong to
///
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationContext {
    pub(crate) scheduler: GaitScheduler,
    pub(crate) legs: Vec<LegState>,
    pub(crate) last_tick: Option<u64>,
}

impl SimulationContext {
    ///
    /// Creates a fresh context at tick 0, with no leg states computed yet.
    ///
    pub(crate) fn new(scheduler: GaitScheduler) -> SimulationContext {
        SimulationContext { scheduler, legs: Vec::new(), last_tick: None }
    }

    ///
    /// # Returns:
    /// - The next tick `step` will compute
    ///
    pub fn tick(&self) -> u64 {
        self.scheduler.tick()
    }

    pub fn last_tick(&self) -> Option<u64> {
        self.last_tick
    }

    pub fn scheduler(&self) -> &GaitScheduler {
        &self.scheduler
    }

    pub fn legs(&self) -> &[LegState] {
        &self.legs
    }

    ///
    /// # Returns:
    /// - The current joint angles of every leg, in leg order
    ///
    pub fn joint_angles(&self) -> Vec<JointAngles> {
        self.legs.iter().map(|leg| leg.frame.angles).collect()
    }
}
