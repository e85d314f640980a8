//! Playback rotation layer
//!
//! The session owns the sequencing state; the presentation layer triggers
//! transitions and drains events.

mod events;
mod session;

pub use events::PlayerEvent;
pub use session::{format_clock, PlayerConfig, PlayerSession, RotationState, DEFAULT_VOLUME};
