//! MP3 Jukebox - playlist and rotation core of a desktop audio player
//!
//! This library loads .mp3 playlists from directories or saved playlist
//! files, keeps the round-robin "what plays next" state machine, and
//! exposes the state a presentation layer renders. Decoding and audio
//! output live behind the [`engine::MediaEngine`] trait and are supplied
//! by the embedding application.

pub mod codec;
pub mod engine;
pub mod error;
pub mod playback;
pub mod playlist;

pub use error::{PlayerError, Result};
pub use playback::{PlayerConfig, PlayerEvent, PlayerSession, RotationState};
pub use playlist::Playlist;
