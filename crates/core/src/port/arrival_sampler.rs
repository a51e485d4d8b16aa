// Arrival Sampler Port (for deterministic testing)

use rand::Rng;
use std::time::Duration;

/// Draws the gap before the next arrival
pub trait ArrivalSampler: Send + Sync {
    fn next_gap(&self, mean: Duration) -> Duration;
}

/// Uniform jitter in `[0, 2 * mean)` (production).
///
/// Keeps the requested mean without an exponential sampler.
pub struct UniformJitter;

impl ArrivalSampler for UniformJitter {
    fn next_gap(&self, mean: Duration) -> Duration {
        let upper = u64::try_from(mean.as_nanos().saturating_mul(2)).unwrap_or(u64::MAX);
        if upper == 0 {
            return Duration::ZERO;
        }
        Duration::from_nanos(rand::thread_rng().gen_range(0..upper))
    }
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Same gap every time, regardless of the mean
    pub struct FixedGap(pub Duration);

    impl ArrivalSampler for FixedGap {
        fn next_gap(&self, _mean: Duration) -> Duration {
            self.0
        }
    }

    /// Plays back a list of gaps, then repeats the fallback
    pub struct ScriptedGaps {
        gaps: Mutex<VecDeque<Duration>>,
        fallback: Duration,
    }

    impl ScriptedGaps {
        pub fn new(gaps: impl IntoIterator<Item = Duration>, fallback: Duration) -> Self {
            Self {
                gaps: Mutex::new(gaps.into_iter().collect()),
                fallback,
            }
        }
    }

    impl ArrivalSampler for ScriptedGaps {
        fn next_gap(&self, _mean: Duration) -> Duration {
            self.gaps.lock().unwrap().pop_front().unwrap_or(self.fallback)
        }
    }
}
