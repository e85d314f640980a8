//! Error types for the jukebox core
//!
//! Only conditions that are fatal to their operation travel as errors.
//! Degraded paths (missing playlist file, undecodable identifier, one bad
//! track) log and fall back per the contracts on the individual modules.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors surfaced by playlist loading and the playback session
#[derive(Debug, Error)]
pub enum PlayerError {
    /// Directory scan matched no playable files
    #[error("No .mp3 files found in {dir:?}")]
    EmptySource { dir: PathBuf },

    /// The media engine rejected an operation
    #[error("Media engine error: {0}")]
    Engine(String),
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, PlayerError>;
