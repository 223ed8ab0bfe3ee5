//! Odometer sampling cadence.
//!
//! Only the sampling frequency is modelled. A dead-reckoning model with slip
//! and drift is a documented extension point; no reference behavior exists
//! for it, so none is invented here.

use std::time::Duration;

use crate::scheduler;

#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Odometer {
    frequency: f64,
}

impl Default for Odometer {
    fn default() -> Self {
        Self { frequency: 20.0 }
    }
}

impl Odometer {
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    pub fn set_frequency(&mut self, frequency: f64) {
        log::debug!("odometer frequency set to {frequency} Hz");
        self.frequency = frequency;
    }

    /// Tick period for the sampling cadence, `None` if the frequency is not
    /// positive.
    pub fn interval(&self) -> Option<Duration> {
        scheduler::interval(self.frequency)
    }
}
