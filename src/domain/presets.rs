//! Named hardware profiles for the robot chassis and the range scanner.
//!
//! Each profile is a fixed bundle of configuration values. Applying one
//! writes the whole bundle atomically and locks the group against partial
//! edits; switching back to `Custom` unlocks without touching the values
//! last applied.

use thiserror::Error;

use super::{Angle, Geometry, Laser, Robot};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd)]
pub enum RobotModel {
    #[default]
    Custom,
    HuskyA200,
    PioneerP3At,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd)]
pub enum LaserModel {
    #[default]
    Custom,
    SickLms111,
    HokuyoUrg04Lx,
}

#[derive(Error, Debug)]
pub enum PresetError {
    #[error("invalid robot model index {0}")]
    InvalidRobotModel(usize),
    #[error("invalid laser model index {0}")]
    InvalidLaserModel(usize),
}

impl TryFrom<usize> for RobotModel {
    type Error = PresetError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(RobotModel::Custom),
            1 => Ok(RobotModel::HuskyA200),
            2 => Ok(RobotModel::PioneerP3At),
            _ => Err(PresetError::InvalidRobotModel(value)),
        }
    }
}

impl TryFrom<usize> for LaserModel {
    type Error = PresetError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(LaserModel::Custom),
            1 => Ok(LaserModel::SickLms111),
            2 => Ok(LaserModel::HokuyoUrg04Lx),
            _ => Err(PresetError::InvalidLaserModel(value)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct RobotProfile {
    pub geometry: Geometry,
    pub max_vel: f64,
    pub max_ang_vel: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct LaserProfile {
    pub range: f64,
    pub fov: Angle,
    pub resolution: Angle,
    pub frequency: f64,
    pub noise_std: f64,
}

impl RobotModel {
    /// Constant bundle for a named chassis, `None` for `Custom`.
    pub fn profile(self) -> Option<RobotProfile> {
        match self {
            RobotModel::Custom => None,
            RobotModel::HuskyA200 => Some(RobotProfile {
                geometry: Geometry::new(0.99, 0.67, 0.165, 0.544),
                max_vel: 1.0,
                max_ang_vel: 2.0,
            }),
            RobotModel::PioneerP3At => Some(RobotProfile {
                geometry: Geometry::new(0.626, 0.497, 0.111, 0.381),
                max_vel: 0.7,
                max_ang_vel: 2.443,
            }),
        }
    }
}

impl LaserModel {
    /// Constant bundle for a named scanner, `None` for `Custom`.
    pub fn profile(self) -> Option<LaserProfile> {
        match self {
            LaserModel::Custom => None,
            LaserModel::SickLms111 => Some(LaserProfile {
                range: 20.0,
                fov: Angle::from_deg(270.0),
                resolution: Angle::from_deg(0.5),
                frequency: 50.0,
                noise_std: 0.012,
            }),
            LaserModel::HokuyoUrg04Lx => Some(LaserProfile {
                range: 4.0,
                fov: Angle::from_deg(240.0),
                resolution: Angle::from_deg(0.36),
                frequency: 10.0,
                noise_std: 0.03,
            }),
        }
    }
}

/// Active profile per configuration group. A group counts as locked while a
/// named profile is selected; the presentation layer is expected to disable
/// edits of a locked group.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd)]
pub struct Presets {
    robot_model: RobotModel,
    laser_model: LaserModel,
}

impl Presets {
    pub fn robot_model(&self) -> RobotModel {
        self.robot_model
    }

    pub fn laser_model(&self) -> LaserModel {
        self.laser_model
    }

    pub fn robot_locked(&self) -> bool {
        self.robot_model != RobotModel::Custom
    }

    pub fn laser_locked(&self) -> bool {
        self.laser_model != LaserModel::Custom
    }

    /// Select a chassis profile. A named profile writes its whole bundle
    /// through the regular setters and locks the group; `Custom` only
    /// unlocks. Re-selecting the active profile re-applies the same values.
    pub fn apply_robot_model(&mut self, model: RobotModel, robot: &mut Robot) {
        if let Some(profile) = model.profile() {
            robot.set_geometry(profile.geometry);
            robot.set_limits(profile.max_vel, profile.max_ang_vel);
        }
        log::info!("robot profile set to {model:?}");
        self.robot_model = model;
    }

    /// Select a scanner profile; same locking rules as the chassis group.
    pub fn apply_laser_model(&mut self, model: LaserModel, laser: &mut Laser) {
        if let Some(profile) = model.profile() {
            laser.set_range(profile.range);
            laser.set_fov(profile.fov);
            laser.set_resolution(profile.resolution);
            laser.set_frequency(profile.frequency);
            laser.set_noise(profile.noise_std);
        }
        log::info!("laser profile set to {model:?}");
        self.laser_model = model;
    }
}
