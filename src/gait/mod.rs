//!
//! Gait cycle configuration and multi-leg phase scheduling
//!

pub mod error;

use serde::{Serialize, Deserialize};

use error::GaitError;

///
/// The step counts of one gait cycle, shared by every leg of a gait.
///
/// # Fields:
/// - `swing_steps`: The number of ticks a leg spends airborne
/// - `stance_steps`: The number of ticks a leg spends grounded
///
#[derive(getset::Getters, Clone, Copy, Debug, PartialEq, Eq)]
#[get = "pub"]
pub struct GaitCycle {
    swing_steps: usize,
    stance_steps: usize,
}

impl GaitCycle {
    ///
    /// Creates a new gait cycle. Each phase needs at least two steps, so both of its endpoints
    /// are sampled.
    ///
    /// # Parameters:
    /// - `swing_steps`: The number of swing ticks
    /// - `stance_steps`: The number of stance ticks
    ///
    /// # Returns:
    /// - A new `GaitCycle` instance
    /// - A `GaitError` if either phase is too short
    ///
    pub fn new(swing_steps: usize, stance_steps: usize) -> Result<GaitCycle, GaitError> {
        if swing_steps < 2 {
            return Err(GaitError::TooFewSteps { phase: "swing", steps: swing_steps });
        }
        if stance_steps < 2 {
            return Err(GaitError::TooFewSteps { phase: "stance", steps: stance_steps });
        }

        Ok(GaitCycle { swing_steps, stance_steps })
    }

    ///
    /// # Returns:
    /// - The total number of ticks in one cycle, `swing_steps + stance_steps`
    ///
    pub fn cycle_length(&self) -> usize {
        self.swing_steps + self.stance_steps
    }

    ///
    /// Resolves the path index of a leg with the given phase offset at the given tick.
    /// `(tick + offset * swing_steps) mod cycle_length`
    ///
    pub fn index_for(&self, offset: u32, tick: u64) -> usize {
        let cycle = self.cycle_length() as u64;
        let shift = (offset as u64 * self.swing_steps as u64) % cycle;

        ((tick % cycle + shift) % cycle) as usize
    }

    ///
    /// Counts how many times a leg with the given offset has wrapped back to the start of its
    /// swing since tick 0. A leg starting mid-cycle has not wrapped at tick 0, whatever its offset.
    ///
    pub fn cycles_completed(&self, offset: u32, tick: u64) -> u64 {
        let cycle = self.cycle_length() as u64;
        let shift = (offset as u64 * self.swing_steps as u64) % cycle;

        tick / cycle + (tick % cycle + shift) / cycle
    }

    ///
    /// # Returns:
    /// - Which phase a path index belongs to
    ///
    pub fn phase_of(&self, index: usize) -> Phase {
        if index < self.swing_steps { Phase::Swing } else { Phase::Stance }
    }
}

///
/// The two phases of a leg's gait cycle.
///
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Swing,
    Stance,
}

///
/// Preset phase offsets for a four-legged gait, in units of `swing_steps`.
///
/// - `Walk`: diagonal legs are two quarters apart, `(0, 2, 1, 3)`
/// - `Crawl`: legs swing one after another in order, `(0, 1, 2, 3)`
/// - `Custom`: explicitly chosen offsets
///
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GaitPattern {
    #[default]
    Walk,
    Crawl,
    Custom([u32; 4]),
}

impl GaitPattern {
    pub fn offsets(&self) -> [u32; 4] {
        match self {
            GaitPattern::Walk => [0, 2, 1, 3],
            GaitPattern::Crawl => [0, 1, 2, 3],
            GaitPattern::Custom(offsets) => *offsets,
        }
    }
}

///
/// How a leg's pivot moves over time.
///
/// - `Static`: the pivot never moves, the body is held in place
/// - `PerStride`: the body walks. The pivot holds still while the foot swings forward, then
/// moves forward over the planted foot during stance, one step length per cycle
///
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PivotAdvance {
    #[default]
    Static,
    PerStride,
}

///
/// Coordinates which sample of its cycle path each leg targets at each tick.
/// The coordination pattern comes purely from the per-leg offsets.
///
/// # Fields:
/// - `cycle`: The gait cycle shared by all legs
/// - `offsets`: One phase offset per leg, in units of `swing_steps`
/// - `tick`: The global tick counter, starting at 0
///
#[derive(Clone, Debug, PartialEq)]
pub struct GaitScheduler {
    cycle: GaitCycle,
    offsets: Vec<u32>,
    tick: u64,
}

impl GaitScheduler {
    ///
    /// Creates a new scheduler at tick 0.
    ///
    /// # Parameters:
    /// - `cycle`: The gait cycle shared by all legs
    /// - `offsets`: One phase offset per leg
    ///
    /// # Returns:
    /// - A new `GaitScheduler` instance
    /// - A `GaitError` if no offsets were given
    ///
    pub fn new(cycle: GaitCycle, offsets: Vec<u32>) -> Result<GaitScheduler, GaitError> {
        if offsets.is_empty() {
            return Err(GaitError::NoLegs);
        }

        Ok(GaitScheduler { cycle, offsets, tick: 0 })
    }

    pub fn cycle(&self) -> &GaitCycle {
        &self.cycle
    }

    pub fn offsets(&self) -> &[u32] {
        &self.offsets
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn leg_count(&self) -> usize {
        self.offsets.len()
    }

    fn offset(&self, leg: usize) -> Result<u32, GaitError> {
        self.offsets
            .get(leg)
            .copied()
            .ok_or(GaitError::LegOutOfRange { leg, leg_count: self.offsets.len() })
    }

    ///
    /// Resolves which sample of its cycle path a leg targets at a tick.
    ///
    /// # Parameters:
    /// - `leg`: The leg index
    /// - `tick`: The tick to resolve for
    ///
    /// # Returns:
    /// - An index in `[0, cycle_length)`
    /// - A `GaitError` if the leg is unknown
    ///
    pub fn current_index(&self, leg: usize, tick: u64) -> Result<usize, GaitError> {
        Ok(self.cycle.index_for(self.offset(leg)?, tick))
    }

    ///
    /// # Returns:
    /// - Whether a leg is swinging or standing at a tick
    /// - A `GaitError` if the leg is unknown
    ///
    pub fn phase(&self, leg: usize, tick: u64) -> Result<Phase, GaitError> {
        Ok(self.cycle.phase_of(self.current_index(leg, tick)?))
    }

    ///
    /// # Returns:
    /// - How many full cycles a leg has finished by a tick
    /// - A `GaitError` if the leg is unknown
    ///
    pub fn completed_cycles(&self, leg: usize, tick: u64) -> Result<u64, GaitError> {
        Ok(self.cycle.cycles_completed(self.offset(leg)?, tick))
    }

    ///
    /// Takes a consistent snapshot of every leg's index at one tick, in leg order.
    ///
    pub fn indices(&self, tick: u64) -> Vec<usize> {
        self.offsets.iter().map(|offset| self.cycle.index_for(*offset, tick)).collect()
    }

    ///
    /// # Returns:
    /// - The indices of the legs swinging at a tick, in leg order
    ///
    pub fn swinging_legs(&self, tick: u64) -> Vec<usize> {
        self.indices(tick)
            .into_iter()
            .enumerate()
            .filter(|(_, index)| self.cycle.phase_of(*index) == Phase::Swing)
            .map(|(leg, _)| leg)
            .collect()
    }

    ///
    /// Moves the scheduler to the next tick. Called once all legs have consumed the current one.
    ///
    /// # Returns:
    /// - The new tick
    ///
    pub fn advance(&mut self) -> u64 {
        self.tick += 1;
        self.tick
    }

    ///
    /// # Returns:
    /// - A copy of this scheduler positioned at another tick
    ///
    pub(crate) fn at_tick(&self, tick: u64) -> GaitScheduler {
        GaitScheduler { tick, ..self.clone() }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn scheduler(offsets: [u32; 4]) -> GaitScheduler {
        GaitScheduler::new(GaitCycle::new(8, 24).unwrap(), offsets.to_vec()).unwrap()
    }

    #[test]
    #[should_panic]
    fn single_step_swing() {
        GaitCycle::new(1, 24).unwrap();
    }

    #[test]
    fn empty_scheduler_rejected() {
        let result = GaitScheduler::new(GaitCycle::new(8, 24).unwrap(), vec![]);
        assert!(matches!(result, Err(GaitError::NoLegs)));
    }

    #[test]
    fn index_follows_offset() {
        let scheduler = scheduler([0, 1, 2, 3]);
        assert_eq!(scheduler.indices(0), [0, 8, 16, 24]);
        assert_eq!(scheduler.indices(9), [9, 17, 25, 1]);
        assert_eq!(scheduler.current_index(3, 40).unwrap(), (40 + 24) % 32);
    }

    #[test]
    fn index_always_in_cycle() {
        let scheduler = scheduler([0, 2, 1, 3]);
        for tick in 0..200 {
            assert!(scheduler.indices(tick).iter().all(|i| *i < 32));
        }
        assert!(scheduler.indices(u64::MAX).iter().all(|i| *i < 32));
    }

    #[test]
    fn unknown_leg() {
        let result = scheduler([0, 1, 2, 3]).phase(4, 0);
        assert!(matches!(result, Err(GaitError::LegOutOfRange { leg: 4, leg_count: 4 })));
    }

    #[test]
    fn swing_matches_index() {
        let scheduler = scheduler([0, 1, 2, 3]);
        for tick in 0..32 {
            let swinging = scheduler.swinging_legs(tick);
            for leg in 0..4 {
                let in_swing = scheduler.current_index(leg, tick).unwrap() < 8;
                assert_eq!(swinging.contains(&leg), in_swing);
                assert_eq!(scheduler.phase(leg, tick).unwrap() == Phase::Swing, in_swing);
            }
        }
    }

    #[test]
    fn opposite_offsets_never_swing_together() {
        let scheduler = scheduler([0, 1, 2, 3]);
        let windows: Vec<Vec<u64>> = (0..4)
            .map(|leg| {
                (0..32)
                    .filter(|tick| scheduler.phase(leg, *tick).unwrap() == Phase::Swing)
                    .collect()
            })
            .collect();

        for leg in 0..4 {
            assert_eq!(windows[leg].len(), 8);
        }
        for (a, b) in [(0, 1), (0, 3), (2, 1), (2, 3), (0, 2), (1, 3)] {
            let overlap = windows[a].iter().any(|tick| windows[b].contains(tick));
            assert!(!overlap, "legs {} and {} overlap", a, b);
        }
    }

    #[test]
    fn one_leg_swings_at_a_time() {
        let scheduler = scheduler(GaitPattern::Walk.offsets());
        for tick in 0..64 {
            assert_eq!(scheduler.swinging_legs(tick).len(), 1);
        }
    }

    #[test]
    fn advance_increments_tick() {
        let mut scheduler = scheduler([0, 1, 2, 3]);
        assert_eq!(scheduler.tick(), 0);
        assert_eq!(scheduler.advance(), 1);
        assert_eq!(scheduler.advance(), 2);
        assert_eq!(scheduler.tick(), 2);
    }

    #[test]
    fn completed_cycles_count_wraps() {
        let scheduler = scheduler([0, 1, 2, 3]);
        assert_eq!(scheduler.completed_cycles(0, 31).unwrap(), 0);
        assert_eq!(scheduler.completed_cycles(0, 32).unwrap(), 1);
        // leg 3 starts at index 24, so it wraps after 8 ticks
        assert_eq!(scheduler.completed_cycles(3, 7).unwrap(), 0);
        assert_eq!(scheduler.completed_cycles(3, 8).unwrap(), 1);
    }

    #[test]
    fn whole_cycle_offset_has_not_wrapped_at_start() {
        // offset 4 shifts by a full 32-tick cycle, the same phase as offset 0
        let scheduler = scheduler([4, 1, 2, 3]);
        assert_eq!(scheduler.completed_cycles(0, 0).unwrap(), 0);
        assert_eq!(scheduler.completed_cycles(0, 31).unwrap(), 0);
        assert_eq!(scheduler.completed_cycles(0, 32).unwrap(), 1);
        assert_eq!(scheduler.completed_cycles(3, 40).unwrap(), 2);
    }

    #[test]
    fn moved_copy_keeps_legs() {
        let mut scheduler = scheduler([0, 2, 1, 3]);
        scheduler.advance();
        let moved = scheduler.at_tick(40);

        assert_eq!(moved.tick(), 40);
        assert_eq!(moved.offsets(), scheduler.offsets());
        assert_eq!(moved.cycle(), scheduler.cycle());
    }

    #[test]
    fn custom_pattern_from_json() {
        let pattern: GaitPattern = serde_json::from_str(r#"{"custom": [3, 2, 1, 0]}"#).unwrap();
        assert_eq!(pattern.offsets(), [3, 2, 1, 0]);
    }
}
