//! Media engine trait definitions and event types

use crate::error::Result;
use std::time::Duration;

/// Identifies one open media resource inside an engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandleId(pub u64);

/// Event reported by the engine about one of its handles
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// The handle reached its natural end of media
    Ended { handle: HandleId },

    /// The handle hit an unrecoverable error
    Failed { handle: HandleId, reason: String },
}

/// Media engine trait - allows swapping between the scripted null engine
/// used in tests and a real toolkit-backed engine.
///
/// Handle events are pulled with [`poll_events`](Self::poll_events) rather
/// than delivered through per-handle callbacks, so the session registers
/// nothing and owns all reaction logic.
pub trait MediaEngine {
    /// Open a playable resource by identifier, yielding a handle.
    /// Media-level problems discovered later arrive as [`EngineEvent`]s.
    fn open(&mut self, uri: &str) -> Result<HandleId>;

    /// Start or restart playback of an open handle
    fn play(&mut self, handle: HandleId);

    /// Pause playback, keeping the position
    fn pause(&mut self, handle: HandleId);

    /// Halt playback
    fn stop(&mut self, handle: HandleId);

    /// Release the handle and everything it holds
    fn close(&mut self, handle: HandleId);

    /// Current position within the handle's media
    fn position(&self, handle: HandleId) -> Duration;

    /// Total duration of the handle's media
    fn duration(&self, handle: HandleId) -> Duration;

    /// Apply a gain in [0.0, 1.0] to the handle
    fn set_volume(&mut self, handle: HandleId, gain: f64);

    /// Drain pending handle events (end-of-media, failures)
    fn poll_events(&mut self) -> Vec<EngineEvent>;
}
