//! Signed second offsets applied after input resolution.

use hifitime::{Epoch, Unit};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Two ordered sequences of signed, real valued second offsets.
/// Each sequence keeps the order its flag occurrences were supplied in.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimeOffsets {
    additions: Vec<f64>,
    subtractions: Vec<f64>,
}

impl TimeOffsets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `seconds` for addition.
    pub fn add(&mut self, seconds: f64) {
        self.additions.push(seconds);
    }

    /// Queues `seconds` for subtraction.
    pub fn subtract(&mut self, seconds: f64) {
        self.subtractions.push(seconds);
    }

    /// Returns [TimeOffsets] with one more queued addition.
    pub fn with_addition(mut self, seconds: f64) -> Self {
        self.add(seconds);
        self
    }

    /// Returns [TimeOffsets] with one more queued subtraction.
    pub fn with_subtraction(mut self, seconds: f64) -> Self {
        self.subtract(seconds);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.additions.is_empty() && self.subtractions.is_empty()
    }

    /// Applies the configured offsets to `t`. Every queued addition is
    /// applied first, in queue order, then every queued subtraction:
    /// command line interleaving between the two flag kinds is NOT
    /// preserved. This ordering is an observed contract of the
    /// original tool and is relied upon by callers.
    pub fn apply(&self, t: Epoch) -> Epoch {
        let mut t = t;
        for seconds in self.additions.iter() {
            t = t + *seconds * Unit::Second;
        }
        for seconds in self.subtractions.iter() {
            t = t - *seconds * Unit::Second;
        }
        t
    }
}
