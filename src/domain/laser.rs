//! Rotating range scanner casting beams against the obstacle map.

use std::time::Duration;

use crate::scheduler;

use super::{Angle, LineMap, NoiseGenerator, Pose};

/// One full angular sweep: the pose at scan time plus one reading per beam,
/// ordered from `min_angle` to `max_angle`.
///
/// A reading of [`Laser::NO_RETURN`] marks a beam with no obstacle inside
/// the sensor range; consumers must treat it as "at maximum range", not as
/// contact. Readings with a return carry additive Gaussian noise and are not
/// clamped, so they may slightly exceed the configured range.
#[derive(Clone, Debug, PartialEq)]
pub struct ScanResult {
    pose: Pose,
    ranges: Vec<f64>,
}

impl ScanResult {
    pub fn pose(&self) -> Pose {
        self.pose
    }

    pub fn ranges(&self) -> &[f64] {
        &self.ranges
    }
}

#[derive(Clone, Debug)]
pub struct Laser {
    range: f64,
    min_angle: Angle,
    max_angle: Angle,
    resolution: Angle,
    frequency: f64,
    noise_std: f64,
    noise: NoiseGenerator,
}

impl Default for Laser {
    fn default() -> Self {
        Self {
            range: 10.0,
            min_angle: Angle::from_deg(-90.0),
            max_angle: Angle::from_deg(90.0),
            resolution: Angle::from_deg(1.0),
            frequency: 10.0,
            noise_std: 0.005,
            noise: NoiseGenerator::default(),
        }
    }
}

impl Laser {
    /// Sentinel reading for a beam without a return inside the range.
    pub const NO_RETURN: f64 = 0.0;

    pub fn range(&self) -> f64 {
        self.range
    }

    pub fn min_angle(&self) -> Angle {
        self.min_angle
    }

    pub fn max_angle(&self) -> Angle {
        self.max_angle
    }

    pub fn resolution(&self) -> Angle {
        self.resolution
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    pub fn noise_std(&self) -> f64 {
        self.noise_std
    }

    pub fn set_range(&mut self, range: f64) {
        self.range = range;
    }

    /// Set a symmetric field of view of `total` radians around the robot's
    /// heading. Asymmetric sweeps are not a supported configuration.
    pub fn set_fov(&mut self, total: Angle) {
        self.min_angle = -(total * 0.5);
        self.max_angle = total * 0.5;
    }

    pub fn set_resolution(&mut self, resolution: Angle) {
        self.resolution = resolution;
    }

    /// Replace the scan frequency. Re-arming any timer driven by it is the
    /// scheduler's responsibility.
    pub fn set_frequency(&mut self, frequency: f64) {
        log::debug!("laser frequency set to {frequency} Hz");
        self.frequency = frequency;
    }

    pub fn set_noise(&mut self, stddev: f64) {
        self.noise_std = stddev;
    }

    /// Reseed the noise source for reproducible scans (0 = OS entropy).
    pub fn reseed(&mut self, seed: u64) {
        self.noise = NoiseGenerator::new(seed);
    }

    /// Number of beams in one sweep: `floor((max - min) / resolution) + 1`.
    /// A non-positive resolution or an inverted sweep collapses to a single
    /// beam at `min_angle` instead of dividing by zero.
    pub fn beam_count(&self) -> usize {
        let sweep = f64::from(self.max_angle - self.min_angle);
        let step = f64::from(self.resolution);
        if step <= 0.0 || sweep < 0.0 {
            return 1;
        }
        (sweep / step).floor() as usize + 1
    }

    /// Tick period for the scan cadence, `None` if the frequency is not
    /// positive.
    pub fn interval(&self) -> Option<Duration> {
        scheduler::interval(self.frequency)
    }

    /// Sweep the scanner once from the given pose. Every beam is cast from
    /// the robot's origin out to the configured range; the closest segment
    /// hit wins and is perturbed by the noise model.
    pub fn scan(&mut self, pose: Pose, map: &LineMap) -> ScanResult {
        let origin = pose.position();
        let mut ranges = Vec::with_capacity(self.beam_count());
        for i in 0..self.beam_count() {
            let angle = pose.heading() + self.min_angle + self.resolution * i as f64;
            let reading = match map.first_hit(origin, angle, self.range) {
                Some(r) => r + self.noise.gaussian(self.noise_std),
                None => Self::NO_RETURN,
            };
            ranges.push(reading);
        }
        ScanResult { pose, ranges }
    }
}
