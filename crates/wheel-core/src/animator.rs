//! Time-driven spin animation as an explicit step function.
//!
//! The host scheduler polls [`SpinAnimator::rotation_at`] once per
//! tick; the animator owns no session state and never calls back into
//! it. Re-entrancy guarding belongs to the draw session, and there is
//! no mid-flight cancellation path.

use std::time::Duration;

use rand::Rng;
use rand::rngs::OsRng;

use crate::WheelError;

/// Minimum spin increment: two full revolutions.
pub const MIN_SPIN_DEGREES: f64 = 720.0;

/// Draw a random spin increment of `uniform(0, 360) + 720` degrees.
pub fn spin_increment() -> f64 {
    spin_increment_with_rng(&mut OsRng)
}

pub fn spin_increment_with_rng<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    MIN_SPIN_DEGREES + rng.gen_range(0.0..360.0)
}

/// Monotonic ease-out curve: `1 - (1 - t)^3`.
fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

/// A fixed-target animation from a starting rotation.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinAnimator {
    start_rotation: f64,
    target_rotation: f64,
    duration: Duration,
}

impl SpinAnimator {
    /// Arm an animation of `extra_degrees` on top of the current
    /// rotation. The increment and duration must both be positive.
    pub fn new(
        current_rotation: f64,
        extra_degrees: f64,
        duration: Duration,
    ) -> Result<Self, WheelError> {
        if extra_degrees <= 0.0 || duration.is_zero() {
            return Err(WheelError::InvalidSpin);
        }

        Ok(Self {
            start_rotation: current_rotation,
            target_rotation: current_rotation + extra_degrees,
            duration,
        })
    }

    pub fn target_rotation(&self) -> f64 {
        self.target_rotation
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Rotation at the given time since the spin started.
    ///
    /// Monotonic non-decreasing in `elapsed`. At or past the full
    /// duration it returns the target exactly, so the final frame
    /// never drifts off the value the winner is resolved at.
    pub fn rotation_at(&self, elapsed: Duration) -> f64 {
        if self.is_complete(elapsed) {
            return self.target_rotation;
        }

        let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        self.start_rotation + (self.target_rotation - self.start_rotation) * ease_out_cubic(t)
    }

    pub fn is_complete(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }
}
