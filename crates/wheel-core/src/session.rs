//! Draw-session state machine: pool ownership, spin orchestration,
//! and removal without replacement.

use std::time::Duration;

use rand::Rng;
use rand::rngs::OsRng;
use serde::Serialize;

use crate::animator::{SpinAnimator, spin_increment_with_rng};
use crate::render::Renderer;
use crate::resolver::resolve;
use crate::sector::{Sector, layout};
use crate::{Entry, WheelError};

/// One recorded draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrawRecord {
    pub name: String,
    pub tickets: u32,
    pub drawn_at: String,
}

/// Whether a spin is in flight. Illegal transitions are rejected by
/// the guard checks in [`DrawSession`], not by a runtime flag.
#[derive(Debug, Clone, PartialEq)]
pub enum SpinState {
    Idle,
    Spinning(SpinAnimator),
}

/// Owner of the pool, the cumulative rotation, and the winners record.
///
/// The pool only shrinks within a session: a drawn entry never
/// reappears unless [`DrawSession::load`] or [`DrawSession::reset`]
/// reintroduces it. Rotation accumulates across spins and reloads and
/// is never normalized back into `[0, 360)`.
pub struct DrawSession {
    loaded: Vec<Entry>,
    pool: Vec<Entry>,
    sectors: Vec<Sector>,
    rotation: f64,
    state: SpinState,
    winners: Vec<DrawRecord>,
}

impl Default for DrawSession {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawSession {
    pub fn new() -> Self {
        Self {
            loaded: Vec::new(),
            pool: Vec::new(),
            sectors: Vec::new(),
            rotation: 0.0,
            state: SpinState::Idle,
            winners: Vec::new(),
        }
    }

    /// Replace the pool wholesale and lay the wheel out again.
    ///
    /// Entries must have positive tickets and unique names; validation
    /// happens before any state changes. Cumulative rotation is
    /// deliberately untouched: it is cosmetic continuity across
    /// reloads, not tied to pool identity.
    pub fn load<R: Renderer>(
        &mut self,
        entries: Vec<Entry>,
        renderer: &mut R,
    ) -> Result<(), WheelError> {
        if entries.is_empty() {
            return Err(WheelError::EmptySource);
        }
        for (i, entry) in entries.iter().enumerate() {
            if entry.tickets == 0 {
                return Err(WheelError::InvalidEntry {
                    name: entry.name.clone(),
                });
            }
            if entries[..i].iter().any(|e| e.name == entry.name) {
                return Err(WheelError::DuplicateEntry {
                    name: entry.name.clone(),
                });
            }
        }

        let sectors = layout(&entries)?;
        tracing::info!(entries = entries.len(), "Loaded wheel pool");

        self.loaded = entries.clone();
        self.pool = entries;
        self.sectors = sectors;
        self.state = SpinState::Idle;
        renderer.wheel_updated(&self.sectors);
        Ok(())
    }

    /// Start a spin with a randomly drawn increment.
    pub fn start_spin(&mut self, duration: Duration) -> Result<(), WheelError> {
        self.start_spin_with_rng(duration, &mut OsRng)
    }

    pub fn start_spin_with_rng<R: Rng + ?Sized>(
        &mut self,
        duration: Duration,
        rng: &mut R,
    ) -> Result<(), WheelError> {
        // guard first so the rng is not consumed on a rejected spin
        if matches!(self.state, SpinState::Spinning(_)) {
            return Err(WheelError::AlreadySpinning);
        }
        if self.pool.is_empty() {
            return Err(WheelError::EmptyPool);
        }
        self.start_spin_with_increment(spin_increment_with_rng(rng), duration)
    }

    /// Start a spin with an explicit increment. The animator is
    /// agnostic to how the increment was chosen.
    pub fn start_spin_with_increment(
        &mut self,
        extra_degrees: f64,
        duration: Duration,
    ) -> Result<(), WheelError> {
        if matches!(self.state, SpinState::Spinning(_)) {
            return Err(WheelError::AlreadySpinning);
        }
        if self.pool.is_empty() {
            return Err(WheelError::EmptyPool);
        }

        let animator = SpinAnimator::new(self.rotation, extra_degrees, duration)?;
        tracing::info!(extra_degrees, ?duration, "Spin started");
        self.state = SpinState::Spinning(animator);
        Ok(())
    }

    /// Advance an in-flight spin to `elapsed` since it started.
    ///
    /// Intermediate frames update the rotation and report the live
    /// sector through the renderer, returning `None`. The completing
    /// tick pins the rotation to the exact target, resolves the winner
    /// at the full cumulative rotation, removes it from the pool,
    /// lays the remaining sectors out again, and returns the draw
    /// record — exactly once per spin. Stepping while idle is a no-op.
    pub fn step<R: Renderer>(
        &mut self,
        elapsed: Duration,
        renderer: &mut R,
    ) -> Result<Option<DrawRecord>, WheelError> {
        let SpinState::Spinning(animator) = &self.state else {
            return Ok(None);
        };

        self.rotation = animator.rotation_at(elapsed);
        if !animator.is_complete(elapsed) {
            let current = resolve(self.rotation, &self.sectors)?;
            renderer.highlight(self.rotation, &current.name);
            return Ok(None);
        }

        let winner = resolve(self.rotation, &self.sectors)?.clone();
        let record = DrawRecord {
            name: winner.name.clone(),
            tickets: winner.tickets,
            drawn_at: chrono::Utc::now().to_rfc3339(),
        };

        self.pool.retain(|entry| entry.name != winner.name);
        self.sectors = layout(&self.pool)?;
        self.winners.push(record.clone());
        self.state = SpinState::Idle;
        tracing::info!(
            winner = %record.name,
            remaining = self.pool.len(),
            "Spin complete"
        );

        renderer.highlight_cleared();
        renderer.winner_chosen(&record);
        renderer.wheel_updated(&self.sectors);
        Ok(Some(record))
    }

    /// Restore the pool to the last-loaded entry set and clear the
    /// winners record. Rotation is preserved, matching `load`.
    pub fn reset<R: Renderer>(&mut self, renderer: &mut R) {
        self.pool = self.loaded.clone();
        // loaded entries were validated on the way in
        self.sectors = layout(&self.pool).unwrap_or_default();
        self.winners.clear();
        self.state = SpinState::Idle;
        tracing::info!(entries = self.pool.len(), "Session reset");
        renderer.wheel_updated(&self.sectors);
    }

    pub fn sectors(&self) -> &[Sector] {
        &self.sectors
    }

    pub fn pool(&self) -> &[Entry] {
        &self.pool
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn is_spinning(&self) -> bool {
        matches!(self.state, SpinState::Spinning(_))
    }

    pub fn winners(&self) -> &[DrawRecord] {
        &self.winners
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
