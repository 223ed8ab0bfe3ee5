//! Differential-drive robot: pose, bounded velocities, rate-limited manual
//! control and an attached range scanner and odometer.

use std::{f64::consts::FRAC_PI_2, mem, time::Duration};

use super::{Angle, Laser, LineMap, Odometer, Pose, ScanResult};

/// Descriptive chassis dimensions in meters. They size the rendering
/// footprint and anchor the scanner; none of them enters the kinematic
/// model. Values are taken as given, validation is the caller's concern.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Geometry {
    pub length: f64,
    pub width: f64,
    pub wheel_radius: f64,
    pub wheelbase: f64,
}

impl Geometry {
    pub const fn new(length: f64, width: f64, wheel_radius: f64, wheelbase: f64) -> Self {
        Self {
            length,
            width,
            wheel_radius,
            wheelbase,
        }
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self::new(0.8, 0.5, 0.1, 0.4)
    }
}

#[derive(Clone, Debug)]
pub struct Robot {
    pose: Pose,
    vel: f64,
    ang_vel: f64,
    max_vel: f64,
    max_ang_vel: f64,
    geometry: Geometry,
    laser: Laser,
    odometer: Odometer,
    moved: bool,
    resized: bool,
    scanned: bool,
    last_scan: Option<ScanResult>,
}

impl Default for Robot {
    fn default() -> Self {
        Self {
            pose: Pose::default(),
            vel: 0.0,
            ang_vel: 0.0,
            max_vel: 1.0,
            max_ang_vel: FRAC_PI_2,
            geometry: Geometry::default(),
            laser: Laser::default(),
            odometer: Odometer::default(),
            moved: false,
            resized: false,
            scanned: false,
            last_scan: None,
        }
    }
}

impl Robot {
    pub fn pose(&self) -> Pose {
        self.pose
    }

    pub fn vel(&self) -> f64 {
        self.vel
    }

    pub fn ang_vel(&self) -> f64 {
        self.ang_vel
    }

    pub fn max_vel(&self) -> f64 {
        self.max_vel
    }

    pub fn max_ang_vel(&self) -> f64 {
        self.max_ang_vel
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn laser(&self) -> &Laser {
        &self.laser
    }

    pub fn laser_mut(&mut self) -> &mut Laser {
        &mut self.laser
    }

    pub fn odometer(&self) -> &Odometer {
        &self.odometer
    }

    pub fn odometer_mut(&mut self) -> &mut Odometer {
        &mut self.odometer
    }

    pub fn last_scan(&self) -> Option<&ScanResult> {
        self.last_scan.as_ref()
    }

    /// Forward-Euler unicycle step. The heading is integrated first; the
    /// translation then follows the updated heading. The caller supplies a
    /// small, roughly constant step derived from its tick cadence.
    pub fn advance(&mut self, dt: Duration) {
        let dt = dt.as_secs_f64();
        let heading = self.pose.heading() + Angle::new(self.ang_vel * dt);
        let position = self.pose.position().project(heading, self.vel * dt);
        self.pose = Pose::new(position, heading);
        self.moved = true;
    }

    pub fn set_geometry(&mut self, geometry: Geometry) {
        self.geometry = geometry;
        self.resized = true;
    }

    /// Replace both velocity bounds. Velocities that now exceed a bound are
    /// clamped back inside immediately, never left out of bound.
    pub fn set_limits(&mut self, max_vel: f64, max_ang_vel: f64) {
        self.max_vel = max_vel;
        self.max_ang_vel = max_ang_vel;

        let vel = clamped(self.vel, max_vel);
        if vel != self.vel {
            log::debug!("clamping velocity {} to new bound {vel}", self.vel);
            self.vel = vel;
        }
        let ang_vel = clamped(self.ang_vel, max_ang_vel);
        if ang_vel != self.ang_vel {
            log::debug!(
                "clamping angular velocity {} to new bound {ang_vel}",
                self.ang_vel
            );
            self.ang_vel = ang_vel;
        }
    }

    pub fn nudge_velocity(&mut self, step: f64) {
        self.vel = nudged(self.vel, step, self.max_vel);
    }

    pub fn nudge_angular_velocity(&mut self, step: f64) {
        self.ang_vel = nudged(self.ang_vel, step, self.max_ang_vel);
    }

    /// Sweep the scanner from the current pose, remember the result and
    /// raise the `scanned` flag.
    pub fn scan(&mut self, map: &LineMap) -> &ScanResult {
        let scan = self.laser.scan(self.pose, map);
        self.scanned = true;
        self.last_scan.insert(scan)
    }

    /// Pending-motion flag, cleared by reading it.
    pub fn take_moved(&mut self) -> bool {
        mem::take(&mut self.moved)
    }

    /// Pending-resize flag, cleared by reading it.
    pub fn take_resized(&mut self) -> bool {
        mem::take(&mut self.resized)
    }

    /// Pending-scan flag, cleared by reading it.
    pub fn take_scanned(&mut self) -> bool {
        mem::take(&mut self.scanned)
    }
}

/// Rate-limited increment for manual control. An update whose result would
/// change sign snaps to exactly zero; an update past the bound stops at
/// exactly the bound; anything else applies as-is.
fn nudged(value: f64, step: f64, limit: f64) -> f64 {
    let next = value + step;
    if value != 0.0 && next != 0.0 && value.signum() != next.signum() {
        return 0.0;
    }
    let limit = limit.max(0.0);
    next.clamp(-limit, limit)
}

fn clamped(value: f64, limit: f64) -> f64 {
    let limit = limit.max(0.0);
    value.clamp(-limit, limit)
}
