//!
//! Legs, the quadruped they make up, and the tick-by-tick walking loop
//!

pub mod error;
pub mod manual;
pub mod state;

use nalgebra::{Point2, Vector2};

use crate::gait::{GaitCycle, GaitScheduler, Phase, PivotAdvance};
use crate::hardware::math::solve;
use crate::hardware::{ElbowConfig, LinkPair};
use crate::preview::Renderer;
use crate::trajectory::{FootPath, StrideParameters, TrajectoryShape};
use error::QuadrupedError;
use state::{LegFrame, LegState, SimulationContext};

///
/// One leg's fixed configuration, along with the foot path it walks every cycle.
/// All features have an associated getter function.
///
/// # Fields:
/// - `links`: The leg's link lengths
/// - `pivot`: The shoulder/hip position at the start of the walk
/// - `offset`: The phase offset of the leg, in units of `swing_steps`
/// - `elbow`: Which inverse kinematics solution the leg uses
/// - `stride`: The stride parameters the path was built from
/// - `path`: The full-cycle foot path, `swing_steps` swing samples then `stance_steps` stance
/// samples
///
#[derive(getset::Getters, Clone, Debug)]
#[get = "pub"]
pub struct Leg {
    links: LinkPair,
    pivot: Point2<f64>,
    offset: u32,
    elbow: ElbowConfig,
    stride: StrideParameters,
    path: FootPath,
}

impl Leg {
    ///
    /// Creates a new leg, computing its full-cycle foot path up front.
    ///
    /// # Parameters:
    /// - `links`: The leg's link lengths
    /// - `pivot`: The shoulder/hip position
    /// - `offset`: The phase offset, in units of `swing_steps`
    /// - `elbow`: Which inverse kinematics solution to use
    /// - `stride`: The stride parameters of the foot path
    /// - `shape`: The trajectory shape of the foot path
    /// - `cycle`: The gait cycle the leg will walk
    ///
    /// # Returns:
    /// - A new `Leg` instance
    /// - A `QuadrupedError` if the foot path could not be built
    ///
    pub fn new(
        links: LinkPair,
        pivot: Point2<f64>,
        offset: u32,
        elbow: ElbowConfig,
        stride: StrideParameters,
        shape: TrajectoryShape,
        cycle: &GaitCycle,
    ) -> Result<Leg, QuadrupedError> {
        let path = shape.method().gen_cycle(&stride, cycle)?;

        Ok(Leg { links, pivot, offset, elbow, stride, path })
    }

    ///
    /// Solves the leg for one sample of its cycle path.
    ///
    /// # Parameters:
    /// - `index`: The path index, in `[0, cycle_length)`
    /// - `displacement`: How far the body has moved from the start, applied to pivot and foot
    ///
    /// # Returns:
    /// - The resulting leg geometry
    ///
    pub fn frame_at(&self, index: usize, displacement: Vector2<f64>) -> LegFrame {
        let pivot = self.pivot + displacement;
        let target = self.path[index] + displacement;
        let solution = solve(target, pivot, &self.links, self.elbow);

        LegFrame::from_solution(pivot, &solution)
    }
}

///
/// Four legs walking one gait. Built once, then only read while walking.
///
/// # Fields:
/// - `legs`: Exactly four legs, with distinct phase offsets
/// - `scheduler`: The scheduler every simulation starts from, at tick 0
/// - `pivot_advance`: Whether pivots stay put or move forward each stride
///
#[derive(Clone, Debug)]
pub struct Quadruped {
    legs: Vec<Leg>,
    scheduler: GaitScheduler,
    pivot_advance: PivotAdvance,
}

impl Quadruped {
    ///
    /// Assembles four legs into a quadruped.
    ///
    /// # Parameters:
    /// - `legs`: The legs, in the order they will be processed and rendered
    /// - `cycle`: The gait cycle every leg's path was built for
    /// - `pivot_advance`: The pivot advance policy
    ///
    /// # Returns:
    /// - A new `Quadruped` instance
    /// - A `QuadrupedError` if there are not four legs, two legs are in the same phase, or a
    /// path does not match the cycle
    ///
    pub fn new(
        legs: Vec<Leg>,
        cycle: GaitCycle,
        pivot_advance: PivotAdvance,
    ) -> Result<Quadruped, QuadrupedError> {
        if legs.len() != 4 {
            return Err(QuadrupedError::WrongLegCount(legs.len()));
        }

        for (index, leg) in legs.iter().enumerate() {
            if leg.path.len() != cycle.cycle_length() {
                return Err(QuadrupedError::PathLengthMismatch {
                    leg: index,
                    expected: cycle.cycle_length(),
                    found: leg.path.len(),
                });
            }

            // offsets a whole cycle apart put two legs in the same phase
            let shift = cycle.index_for(leg.offset, 0);
            let same_phase = legs[..index]
                .iter()
                .position(|other| cycle.index_for(other.offset, 0) == shift);
            if let Some(first) = same_phase {
                let offset = leg.offset;
                return Err(QuadrupedError::DuplicateOffset { offset, first, second: index });
            }
        }

        let scheduler = GaitScheduler::new(cycle, legs.iter().map(|leg| leg.offset).collect())?;

        Ok(Quadruped { legs, scheduler, pivot_advance })
    }

    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    pub fn cycle(&self) -> &GaitCycle {
        self.scheduler.cycle()
    }

    pub fn pivot_advance(&self) -> PivotAdvance {
        self.pivot_advance
    }

    ///
    /// # Returns:
    /// - A fresh simulation context at tick 0
    ///
    pub fn start(&self) -> SimulationContext {
        SimulationContext::new(self.scheduler.clone())
    }

    ///
    /// # Returns:
    /// - How far a leg's pivot and foot path have moved from their start by a tick, zero at tick 0
    ///
    fn displacement(&self, leg: &Leg, tick: u64) -> Vector2<f64> {
        match self.pivot_advance {
            PivotAdvance::Static => Vector2::zeros(),
            PivotAdvance::PerStride => self.walked(leg, tick) - self.walked(leg, 0),
        }
    }

    ///
    /// The body travel behind a leg at a tick, measured from the start of the cycle the leg is
    /// in at tick 0. The pivot holds while the foot swings. During stance it moves by however
    /// far the path has carried the foot back since touchdown, which keeps the foot planted.
    /// Each cycle adds one stride, from the end of the stance to the touchdown point.
    ///
    fn walked(&self, leg: &Leg, tick: u64) -> Vector2<f64> {
        let cycle = self.cycle();
        let index = cycle.index_for(leg.offset, tick);
        let touchdown = leg.path[*cycle.swing_steps()];
        let stride = touchdown - leg.path[cycle.cycle_length() - 1];
        let strides = stride * cycle.cycles_completed(leg.offset, tick) as f64;

        match cycle.phase_of(index) {
            Phase::Swing => strides,
            Phase::Stance => strides + (touchdown - leg.path[index]),
        }
    }
}

///
/// Computes one tick of the walk. Every leg's index is taken from the same tick snapshot, so no
/// leg sees another's partially updated state. Only the tick is read from `context`; the cycle
/// and offsets always come from `quadruped`. Does not modify `context`.
///
/// # Parameters:
/// - `quadruped`: The quadruped being walked
/// - `context`: The simulation state before the tick
///
/// # Returns:
/// - The simulation state after the tick, with the scheduler advanced by one
///
pub fn step(quadruped: &Quadruped, context: &SimulationContext) -> SimulationContext {
    let tick = context.tick();
    let scheduler = &quadruped.scheduler;
    let cycle = scheduler.cycle();

    let legs: Vec<LegState> = quadruped.legs.iter()
        .zip(scheduler.indices(tick))
        .enumerate()
        .map(|(leg_idx, (leg, path_index))| {
            let frame = leg.frame_at(path_index, quadruped.displacement(leg, tick));
            log::trace!(
                "tick {} leg {}: index {} alpha {:.4} beta {:.4}",
                tick, leg_idx, path_index, frame.angles.alpha, frame.angles.beta
            );

            LegState { path_index, phase: cycle.phase_of(path_index), frame }
        })
        .collect();

    let clamped = legs.iter().filter(|leg| leg.frame.reach.is_clamped()).count();
    log::debug!(
        "computed tick {}: legs {:?} swinging, {} of {} clamped",
        tick, scheduler.swinging_legs(tick), clamped, legs.len()
    );

    let mut next = scheduler.at_tick(tick);
    next.advance();

    SimulationContext { scheduler: next, legs, last_tick: Some(tick) }
}

///
/// Drives a quadruped tick by tick, forwarding every leg's geometry to a renderer.
/// The caller owns the loop and any pacing between ticks.
///
/// # Fields:
/// - `quadruped`: The quadruped being walked
/// - `context`: The current simulation state
///
pub struct LegController {
    quadruped: Quadruped,
    context: SimulationContext,
}

impl LegController {
    pub fn new(quadruped: Quadruped) -> LegController {
        let context = quadruped.start();
        LegController { quadruped, context }
    }

    pub fn quadruped(&self) -> &Quadruped {
        &self.quadruped
    }

    pub fn context(&self) -> &SimulationContext {
        &self.context
    }

    ///
    /// Computes the next tick, then hands each leg's frame to the renderer in leg order.
    ///
    /// # Parameters:
    /// - `renderer`: The collaborator receiving the leg geometry
    ///
    /// # Returns:
    /// - The simulation state after the tick
    ///
    pub fn tick<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> &SimulationContext {
        self.context = step(&self.quadruped, &self.context);

        for (leg_idx, leg) in self.context.legs.iter().enumerate() {
            renderer.render_leg(leg_idx, &leg.frame);
        }
        if let Some(tick) = self.context.last_tick {
            renderer.finish_tick(tick);
        }

        &self.context
    }

    ///
    /// Runs a fixed number of ticks back to back.
    ///
    pub fn run<R>(&mut self, ticks: u64, renderer: &mut R) -> &SimulationContext
    where
        R: Renderer + ?Sized,
    {
        for _ in 0..ticks {
            self.tick(renderer);
        }

        &self.context
    }

    ///
    /// Puts the walk back to tick 0.
    ///
    pub fn reset(&mut self) {
        self.context = self.quadruped.start();
    }
}
