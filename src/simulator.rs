//! Simulation of the robot in a line-segment world.
//!
//! Pose integration and scanning run on independent, individually
//! configurable cadences. A single external loop owns the clock and calls
//! `tick`; consumers read the robot state at any time and observe the
//! most recent write, with the robot's dirty flags as the coalesced change
//! signal.

use std::time::{Duration, Instant};

use crate::{
    domain::{LineMap, Robot},
    scheduler::TickTimer,
};

const DEFAULT_TICK: Duration = Duration::from_millis(50);

pub struct Simulation {
    robot: Robot,
    map: LineMap,
    motion_timer: TickTimer,
    scan_timer: TickTimer,
    last_advance: Instant,
}

impl Simulation {
    /// Create a simulation whose cadences are armed from the robot's
    /// odometer and laser frequencies. A non-positive frequency falls back
    /// to a 20 Hz tick.
    pub fn new(robot: Robot, map: LineMap, now: Instant) -> Self {
        let motion_period = robot.odometer().interval().unwrap_or(DEFAULT_TICK);
        let scan_period = robot.laser().interval().unwrap_or(DEFAULT_TICK);
        Self {
            robot,
            map,
            motion_timer: TickTimer::new(motion_period, now),
            scan_timer: TickTimer::new(scan_period, now),
            last_advance: now,
        }
    }

    pub fn robot(&self) -> &Robot {
        &self.robot
    }

    pub fn robot_mut(&mut self) -> &mut Robot {
        &mut self.robot
    }

    pub fn map(&self) -> &LineMap {
        &self.map
    }

    pub fn map_mut(&mut self) -> &mut LineMap {
        &mut self.map
    }

    /// Re-read the odometer and laser frequencies into the timers. Call
    /// after a frequency edit or a profile application; the new periods take
    /// effect at each timer's next re-arm.
    pub fn sync_intervals(&mut self) {
        self.motion_timer
            .set_frequency(self.robot.odometer().frequency());
        self.scan_timer.set_frequency(self.robot.laser().frequency());
    }

    /// Run every task that is due at `now`: integrate the pose over the
    /// elapsed time since the previous integration, then scan.
    pub fn tick(&mut self, now: Instant) {
        if self.motion_timer.poll(now) {
            let dt = now.saturating_duration_since(self.last_advance);
            self.robot.advance(dt);
            self.last_advance = now;
        }
        if self.scan_timer.poll(now) {
            self.robot.scan(&self.map);
        }
    }
}
