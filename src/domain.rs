//! The domain module encapsulates the core simulation logic. It defines the
//! `Robot`, its `Laser` scanner and the `LineMap` obstacle world, along with
//! the rules governing their interactions.
//!
//! By minimizing hard dependencies, this module ensures the simulation logic
//! remains adaptable and independent of any presentation layer.

mod basis;
mod laser;
mod map;
mod noise;
mod odometer;
mod presets;
mod robot;

pub use basis::{Angle, Pose, Position};
pub use laser::{Laser, ScanResult};
pub use map::{LineMap, LineSegment};
pub use noise::NoiseGenerator;
pub use odometer::Odometer;
pub use presets::{LaserModel, LaserProfile, PresetError, Presets, RobotModel, RobotProfile};
pub use robot::{Geometry, Robot};
