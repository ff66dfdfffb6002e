//! Renderer collaborator interface.
//!
//! The core never touches presentation state directly; it hands
//! immutable snapshots to whatever implements this trait. Renderer
//! failures must stay inside the implementation and never reach back
//! into session state.

use crate::sector::Sector;
use crate::session::DrawRecord;

pub trait Renderer {
    /// Full wheel redraw, after a load or a winner removal.
    fn wheel_updated(&mut self, sectors: &[Sector]);

    /// The sector currently under the pointer, once per frame.
    fn highlight(&mut self, rotation: f64, name: &str);

    /// The live highlight goes away when the wheel settles.
    fn highlight_cleared(&mut self);

    /// Final winner presentation (popup, confetti, sound cue).
    fn winner_chosen(&mut self, record: &DrawRecord);
}

/// Renderer that ignores every notification, for headless callers.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn wheel_updated(&mut self, _sectors: &[Sector]) {}
    fn highlight(&mut self, _rotation: f64, _name: &str) {}
    fn highlight_cleared(&mut self) {}
    fn winner_chosen(&mut self, _record: &DrawRecord) {}
}
