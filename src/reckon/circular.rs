// Dead reckoning variant intended to combine non-uniform circular
// motion and linear motion equations piecewise.
//
// The intended design: when the angular velocity magnitude is at or
// above 0.5 radians/sec (banking, turning), use non-uniform circular
// motion equations for a more realistic arc; below that, the linear
// equations suffice. The circular-arc equations are not implemented
// yet, so both motion models currently evaluate the linear form; the
// classifier and branch exist so the arc math can slot in without
// restructuring the engine.

use std::sync::Mutex;

use tracing::trace;

use super::{blend_samples, extrapolate, ingest, DeadReckoner, KinematicState, SampleHistory};

/// Angular rate (radians/s) at or above which motion is classified as
/// a circular arc rather than linear
const HIGH_ANGULAR_RATE_THRESHOLD: f64 = 0.5;

/// Motion regime selected from the blended angular rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionModel {
    /// Low angular rate: first-order linear kinematics
    Linear,
    /// High angular rate: non-uniform circular arc kinematics
    CircularArc,
}

impl MotionModel {
    /// Classifies an angular velocity vector by magnitude.
    pub fn classify(angular_velocity: [f64; 3]) -> Self {
        let [wx, wy, wz] = angular_velocity;
        let magnitude = (wx * wx + wy * wy + wz * wz).sqrt();
        if magnitude >= HIGH_ANGULAR_RATE_THRESHOLD {
            MotionModel::CircularArc
        } else {
            MotionModel::Linear
        }
    }
}

/// Combined circular/linear motion dead reckoning engine.
///
/// Shares the RVW state machine and blend stage but applies no motion
/// decay. One instance tracks one entity; all mutable state sits
/// behind a single lock.
pub struct RvwCmReckoner {
    history: Mutex<Option<SampleHistory>>,
}

impl RvwCmReckoner {
    pub fn new() -> Self {
        RvwCmReckoner {
            history: Mutex::new(None),
        }
    }

    fn reckon(&self, history: &SampleHistory, elapsed: f64) -> KinematicState {
        let blended = blend_samples(&history.old, &history.current, elapsed);

        let model = MotionModel::classify(blended.angular_velocity);
        trace!(elapsed, ?model, "reckoning dead reckoned state");

        match model {
            // TODO: non-uniform circular motion equations for this arm;
            // until they exist the linear form is used for both models
            MotionModel::CircularArc => extrapolate(&blended, &history.current, elapsed),
            MotionModel::Linear => extrapolate(&blended, &history.current, elapsed),
        }
    }
}

impl Default for RvwCmReckoner {
    fn default() -> Self {
        Self::new()
    }
}

impl DeadReckoner for RvwCmReckoner {
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
