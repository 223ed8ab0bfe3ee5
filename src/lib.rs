//! Simulation engine for a differential-drive robot in a 2D world of
//! obstacle line segments.
//!
//! The robot integrates a unicycle kinematic model under velocity limits and
//! rate-limited manual control, and senses its surroundings with a rotating
//! range scanner cast against the obstacle map. Pose integration and
//! scanning run on independent cadences driven by an external loop; the
//! presentation layer pushes velocity nudges, configuration edits and
//! obstacle segments in, and reads pose/scan snapshots and dirty flags out.

mod domain;
mod scheduler;
mod simulator;

pub use domain::{
    Angle, Geometry, Laser, LaserModel, LaserProfile, LineMap, LineSegment, NoiseGenerator,
    Odometer, Pose, Position, PresetError, Presets, Robot, RobotModel, RobotProfile, ScanResult,
};
pub use scheduler::{interval, TickTimer};
pub use simulator::Simulation;
