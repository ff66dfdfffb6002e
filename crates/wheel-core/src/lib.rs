//! Weighted raffle wheel core.
//!
//! Provides sector layout, winner resolution, the spin animation
//! step function, and the draw-session state machine. Pure domain
//! logic only: rendering and entry fetching live behind collaborator
//! interfaces.

pub mod animator;
pub mod render;
pub mod resolver;
pub mod sector;
pub mod session;

use serde::{Deserialize, Serialize};

pub use animator::{SpinAnimator, spin_increment, spin_increment_with_rng};
pub use render::{NullRenderer, Renderer};
pub use resolver::resolve;
pub use sector::{FULL_TURN, Sector, layout};
pub use session::{DrawRecord, DrawSession, SpinState};

/// A named participant with a positive ticket weight.
///
/// Identity is the name; a session never holds two entries with the
/// same name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,
    pub tickets: u32,
}

impl Entry {
    pub fn new(name: impl Into<String>, tickets: u32) -> Self {
        Self {
            name: name.into(),
            tickets,
        }
    }
}

/// Unified error type for the wheel-core crate.
///
/// Every variant is locally recoverable: the failed operation is a
/// no-op and session state is left untouched.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum WheelError {
    #[error("no entries to load")]
    EmptySource,

    #[error("entry {name:?} has a non-positive ticket weight")]
    InvalidEntry { name: String },

    #[error("duplicate entry name {name:?}")]
    DuplicateEntry { name: String },

    #[error("the pool is empty")]
    EmptyPool,

    #[error("a spin is already in progress")]
    AlreadySpinning,

    #[error("spin increment and duration must be positive")]
    InvalidSpin,
}
