//!
//! Quadruped leg kinematics and gait trajectory planning.
//!
//! A `Quadruped` is built once from a `QuadrupedConfig`; `controller::step` then computes, tick by
//! tick, each leg's foot target from its gait phase and the joint angles reaching it. Rendering
//! and pacing are left to the caller through the `Renderer` trait.
//!

pub mod config;
pub mod controller;
pub mod gait;
pub mod hardware;
pub mod preview;
pub mod trajectory;

pub use config::QuadrupedConfig;
pub use controller::state::{LegFrame, SimulationContext};
pub use controller::{step, Leg, LegController, Quadruped};
pub use hardware::math::{solve, JointAngles, Reach};
pub use preview::Renderer;
