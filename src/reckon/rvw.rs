// Dead reckoning RVW algorithm as defined in IEEE 1278.1-1995 (DIS):
// rotational body (R), change in velocity (V), world-referenced (W).
//
// Smooths kinematic state updates by blending linearly from the old
// sample to the newest over a fixed window. Optionally applies a decay
// over a set period since the last update, so an entity that stops
// receiving updates visibly coasts to a halt instead of flying off
// indefinitely.

use std::f64::consts::FRAC_PI_2;
use std::sync::Mutex;

use tracing::trace;

use super::{blend_samples, extrapolate, ingest, DeadReckoner, KinematicState, SampleHistory};

/// Seconds over which the extrapolation time decays to a ceiling
const ACCELERATION_DECAY_INTERVAL: f64 = 5.0;

/// RVW dead reckoning engine with optional motion decay.
///
/// One instance tracks one entity. All mutable state sits behind a
/// single lock; [`DeadReckoner::update_kinematic_state`] and
/// [`DeadReckoner::current_state`] each hold it for their full
/// duration, so concurrent callers never observe a torn sample pair.
pub struct RvwReckoner {
    use_acceleration_decay: bool,
    history: Mutex<Option<SampleHistory>>,
}

impl RvwReckoner {
    /// Creates an engine with acceleration decay enabled.
    pub fn new() -> Self {
        Self::with_decay(true)
    }

    /// Creates an engine with acceleration decay explicitly enabled or
    /// disabled.
    pub fn with_decay(use_acceleration_decay: bool) -> Self {
        RvwReckoner {
            use_acceleration_decay,
            history: Mutex::new(None),
        }
    }

    fn reckon(&self, history: &SampleHistory, elapsed: f64) -> KinematicState {
        let blended = blend_samples(&history.old, &history.current, elapsed);

        // Each stage gets its own time variable: `elapsed` stays in
        // wall-clock seconds, `t` is the (possibly decayed) value fed
        // to the kinematic formulas.
        let t = if self.use_acceleration_decay {
            decayed_time(elapsed)
        } else {
            elapsed
        };
        trace!(elapsed, t, "reckoning dead reckoned state");

        extrapolate(&blended, &history.current, t)
    }
}

impl Default for RvwReckoner {
    fn default() -> Self {
        Self::new()
    }
}

impl DeadReckoner for RvwReckoner {
    fn update_kinematic_state(&self, state: KinematicState) {
        let mut history = self.history.lock().unwrap_or_else(|e| e.into_inner());
        ingest(&mut history, state);
    }

    fn current_state(&self) -> KinematicState {
        let history = self.history.lock().unwrap_or_else(|e| e.into_inner());
        match history.as_ref() {
            None => KinematicState::default(),
            Some(h) => self.reckon(h, h.elapsed_secs()),
        }
    }

    fn is_primed(&self) -> bool {
        self.history.lock().unwrap_or_else(|e| e.into_inner()).is_some()
    }
}

/// Eases the extrapolation time out of linearity: starts at 0, tracks
/// elapsed roughly at first, then flattens toward the decay interval
/// and freezes there once the interval has passed.
fn decayed_time(elapsed: f64) -> f64 {
    let frac = (elapsed / ACCELERATION_DECAY_INTERVAL).min(1.0);
    ACCELERATION_DECAY_INTERVAL * (frac * FRAC_PI_2).sin()
}
