//! Events the session queues for the presentation layer

use serde::{Deserialize, Serialize};

/// State-change notification, drained in order with
/// [`drain_events`](crate::PlayerSession::drain_events)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// A new track became current; progress display restarts at zero
    TrackStarted { index: usize, title: String },

    /// The current track was paused
    Paused { index: usize },

    /// The current track resumed playing
    Resumed { index: usize },

    /// The rotation was torn down
    Stopped,

    /// Session volume changed (0-100)
    VolumeChanged { volume: u8 },

    /// A handle reported an unrecoverable error; the rotation keeps its
    /// position and waits for an explicit skip
    TrackFailed { index: usize, reason: String },
}
