// Dead reckoning algorithms
//
// Two-sample blend-then-extrapolate pipeline shared by the engine
// variants. Each engine owns the two most recent authoritative samples
// and the instant of the last ingest; querying blends from the old
// sample toward the new one over a fixed window, then extrapolates with
// constant-acceleration kinematics.

pub mod circular;
pub mod rvw;
pub mod state;

pub use circular::{MotionModel, RvwCmReckoner};
pub use rvw::RvwReckoner;
pub use state::KinematicState;

use std::time::Instant;
use tracing::debug;

use crate::interpolation::linear_interpolate;

/// Seconds to blend from the old sample to the newest one
pub(crate) const INTERPOLATION_INTERVAL: f64 = 1.0;

/// A dead reckoning algorithm tracking one entity.
///
/// Implementations serialize both operations behind one internal lock,
/// so a single instance may be shared across threads (e.g. behind an
/// `Arc`) with an update producer and any number of query consumers.
pub trait DeadReckoner {
    /// Ingests a new authoritative kinematic state. The implementation
    /// smooths the visible transition to the new state rather than
    /// snapping to it.
    fn update_kinematic_state(&self, state: KinematicState);

    /// Computes the dead reckoned state at the present instant.
    ///
    /// Returns the all-zero state if no sample has ever been ingested;
    /// callers that need to tell "no data yet" apart from "entity at
    /// origin" should check [`DeadReckoner::is_primed`].
    fn current_state(&self) -> KinematicState;

    /// True once at least one sample has been ingested.
    fn is_primed(&self) -> bool;
}

/// The two most recent authoritative samples plus the ingest instant
/// they are measured from.
pub(crate) struct SampleHistory {
    pub(crate) old: KinematicState,
    pub(crate) current: KinematicState,
    pub(crate) last_update: Instant,
}

impl SampleHistory {
    /// Seconds since the last ingest (monotonic, never negative)
    pub(crate) fn elapsed_secs(&self) -> f64 {
        self.last_update.elapsed().as_secs_f64()
    }
}

/// Shared ingest transition: primes an empty history with the sample in
/// both slots, otherwise shifts current into old. Either way the
/// elapsed-time baseline restarts now.
pub(crate) fn ingest(history: &mut Option<SampleHistory>, sample: KinematicState) {
    match history {
        None => {
            debug!("first kinematic sample ingested, reckoner primed");
            *history = Some(SampleHistory {
                old: sample,
                current: sample,
                last_update: Instant::now(),
            });
        }
        Some(h) => {
            h.old = h.current;
            h.current = sample;
            h.last_update = Instant::now();
        }
    }
}

fn lerp3(a: &[f64; 3], b: &[f64; 3], mu: f64) -> [f64; 3] {
    [
        linear_interpolate(a[0], b[0], mu),
        linear_interpolate(a[1], b[1], mu),
        linear_interpolate(a[2], b[2], mu),
    ]
}

/// Blends the old sample toward the current one at the elapsed-derived
/// fraction, clamped to 1 once the interpolation window has passed.
/// Applied component-wise to all five state vectors.
pub(crate) fn blend_samples(
    old: &KinematicState,
    current: &KinematicState,
    elapsed: f64,
) -> KinematicState {
    let frac = (elapsed / INTERPOLATION_INTERVAL).min(1.0);

    KinematicState {
        location: lerp3(&old.location, &current.location, frac),
        orientation: lerp3(&old.orientation, &current.orientation, frac),
        linear_velocity: lerp3(&old.linear_velocity, &current.linear_velocity, frac),
        linear_acceleration: lerp3(&old.linear_acceleration, &current.linear_acceleration, frac),
        angular_velocity: lerp3(&old.angular_velocity, &current.angular_velocity, frac),
    }
}

/// Extrapolates the blended state forward by `t` seconds.
///
/// Position uses constant-acceleration kinematics,
/// x(t) = x_0 + v_0*t + 0.5*a*t^2, per axis. Orientation uses the
/// simplified first-order form theta(t) = theta_0 + omega_0*t, not the
/// full DIS rotational propagation.
///
/// The rate vectors themselves are not extrapolated: the result carries
/// them through from `newest`, the most recent authoritative sample.
pub(crate) fn extrapolate(
    blended: &KinematicState,
    newest: &KinematicState,
    t: f64,
) -> KinematicState {
    let mut location = [0.0; 3];
    let mut orientation = [0.0; 3];
    for i in 0..3 {
        location[i] = blended.location[i]
            + blended.linear_velocity[i] * t
            + 0.5 * blended.linear_acceleration[i] * t * t;
        orientation[i] = blended.orientation[i] + blended.angular_velocity[i] * t;
    }

    KinematicState {
        location,
        orientation,
        linear_velocity: newest.linear_velocity,
        linear_acceleration: newest.linear_acceleration,
        angular_velocity: newest.angular_velocity,
    }
}
