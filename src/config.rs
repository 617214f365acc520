//! Tuning knobs for `OrderedMap`.

use crate::error::{Error, Result};

/// Default staleness threshold θ.
pub const DEFAULT_STALENESS_THRESHOLD: f64 = 0.25;

/// Construction-time configuration for an [`OrderedMap`](crate::OrderedMap).
///
/// The only knob is the staleness threshold θ: once the number of physical
/// slots exceeds `(1 + θ) * len()`, the map compacts. A θ of zero compacts
/// after every removal; larger values trade memory for fewer rewrites.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Config {
    staleness_threshold: f64,
}

impl Config {
    /// Validates `staleness_threshold` and builds a config from it.
    pub fn new(staleness_threshold: f64) -> Result<Self> {
        if !staleness_threshold.is_finite() || staleness_threshold < 0.0 {
            return Err(Error::InvalidThreshold(staleness_threshold));
        }
        Ok(Self {
            staleness_threshold,
        })
    }

    pub fn staleness_threshold(&self) -> f64 {
        self.staleness_threshold
    }

    /// Largest slot count tolerated for `live` entries before compaction.
    #[inline]
    pub(crate) fn slot_budget(&self, live: usize) -> f64 {
        (1.0 + self.staleness_threshold) * live as f64
    }

    /// True when `slots` physical slots holding `live` entries are too stale.
    #[inline]
    pub(crate) fn is_stale(&self, slots: usize, live: usize) -> bool {
        slots as f64 > self.slot_budget(live)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            staleness_threshold: DEFAULT_STALENESS_THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_threshold_is_a_quarter() {
        assert_eq!(Config::default().staleness_threshold(), 0.25);
    }

    #[test]
    fn rejects_negative_and_non_finite() {
        assert_eq!(Config::new(-0.5), Err(Error::InvalidThreshold(-0.5)));
        assert!(Config::new(f64::INFINITY).is_err());
        assert!(Config::new(f64::NAN).is_err());
        assert!(Config::new(0.0).is_ok());
        assert!(Config::new(3.0).is_ok());
    }

    #[test]
    fn staleness_is_strictly_greater_than_budget() {
        let c = Config::default();
        // 100 live entries tolerate up to 125 slots.
        assert!(!c.is_stale(125, 100));
        assert!(c.is_stale(126, 100));
        // Any slot is stale when nothing is live.
        assert!(c.is_stale(1, 0));
        assert!(!c.is_stale(0, 0));
    }
}
