//! Playback rotation state machine
//!
//! The session owns the track sequence, one engine handle per track, and the
//! current-track pointer. Advancing wraps round-robin, on natural
//! end-of-media and on the explicit "next" control alike. All methods run on
//! the caller's thread; the engine is polled, never calls back.

use crate::codec;
use crate::engine::{EngineEvent, HandleId, MediaEngine};
use crate::playback::events::PlayerEvent;
use crate::playlist::Playlist;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Volume applied to new sessions (0-100)
pub const DEFAULT_VOLUME: u8 = 50;

/// Where the rotation currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RotationState {
    /// No tracks loaded
    Empty,
    /// The track at the index is playing
    Playing(usize),
    /// The track at the index is paused
    Paused(usize),
}

impl RotationState {
    /// Index of the current track, if any. Valid against the sequence
    /// whenever the state is not `Empty`.
    pub fn current_index(&self) -> Option<usize> {
        match self {
            RotationState::Empty => None,
            RotationState::Playing(index) | RotationState::Paused(index) => Some(*index),
        }
    }

    pub fn is_playing(&self) -> bool {
        matches!(self, RotationState::Playing(_))
    }
}

/// Session tuning knobs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Initial volume, 0-100
    pub volume: u8,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            volume: DEFAULT_VOLUME,
        }
    }
}

/// One loaded track: its identifier plus the engine handle, when the engine
/// accepted it
#[derive(Debug, Clone)]
struct Slot {
    identifier: String,
    handle: Option<HandleId>,
}

/// Round-robin playback session over a media engine
pub struct PlayerSession<E: MediaEngine> {
    engine: E,
    slots: Vec<Slot>,
    state: RotationState,
    volume: u8,
    pending_events: Vec<PlayerEvent>,
}

impl<E: MediaEngine> PlayerSession<E> {
    /// Create a session with the default configuration
    pub fn new(engine: E) -> Self {
        Self::with_config(engine, PlayerConfig::default())
    }

    pub fn with_config(engine: E, config: PlayerConfig) -> Self {
        Self {
            engine,
            slots: Vec::new(),
            state: RotationState::Empty,
            volume: config.volume.min(100),
            pending_events: Vec::new(),
        }
    }

    /// Replace the rotation with the playlist contents and auto-play the
    /// first track. Any previous rotation is stopped and its handles closed
    /// first. A track the engine refuses to open is logged and kept in the
    /// sequence without a handle; the session volume is applied to every
    /// handle that does open.
    pub fn load(&mut self, playlist: &Playlist) {
        self.teardown();

        for identifier in playlist.tracks() {
            let handle = match self.engine.open(identifier) {
                Ok(handle) => {
                    self.engine.set_volume(handle, gain(self.volume));
                    Some(handle)
                }
                Err(e) => {
                    log::error!("Could not open {:?}: {}", identifier, e);
                    None
                }
            };
            self.slots.push(Slot {
                identifier: identifier.clone(),
                handle,
            });
        }

        if self.slots.is_empty() {
            log::info!("Loaded an empty playlist; nothing to play");
            return;
        }

        log::info!("Rotation loaded with {} track(s)", self.slots.len());
        self.start_track(0);
    }

    /// Move to the next track, wrapping at the end of the sequence. Fired by
    /// natural end-of-media and by the explicit "next" control; both move
    /// the pointer only and leave the sequence order alone. Advancing from
    /// `Paused` starts the next track playing. No-op when nothing is loaded.
    pub fn advance(&mut self) {
        let current = match self.state.current_index() {
            Some(index) => index,
            None => {
                log::debug!("Advance requested with no rotation loaded");
                return;
            }
        };

        if let Some(handle) = self.slots[current].handle {
            self.engine.stop(handle);
        }
        self.start_track((current + 1) % self.slots.len());
    }

    /// Pause the current track, keeping its position
    pub fn pause(&mut self) {
        if let RotationState::Playing(index) = self.state {
            if let Some(handle) = self.slots[index].handle {
                self.engine.pause(handle);
            }
            self.state = RotationState::Paused(index);
            log::debug!("Paused at track {}", index);
            self.pending_events.push(PlayerEvent::Paused { index });
        }
    }

    /// Resume a paused track
    pub fn resume(&mut self) {
        if let RotationState::Paused(index) = self.state {
            if let Some(handle) = self.slots[index].handle {
                self.engine.play(handle);
            }
            self.state = RotationState::Playing(index);
            log::debug!("Resumed track {}", index);
            self.pending_events.push(PlayerEvent::Resumed { index });
        }
    }

    /// Flip between playing and paused; no-op when nothing is loaded
    pub fn toggle_pause(&mut self) {
        match self.state {
            RotationState::Playing(_) => self.pause(),
            RotationState::Paused(_) => self.resume(),
            RotationState::Empty => {}
        }
    }

    /// Tear the rotation down from any state: halt the active handle, close
    /// every handle, clear the sequence, return to `Empty`.
    pub fn stop(&mut self) {
        self.teardown();
        log::info!("Rotation stopped");
        self.pending_events.push(PlayerEvent::Stopped);
    }

    /// Set the session volume (0-100, clamped) and apply it to every open
    /// handle, so it carries across track changes and reloads.
    pub fn set_volume(&mut self, volume: u8) {
        let volume = volume.min(100);
        self.volume = volume;

        let engine_gain = gain(volume);
        for slot in &self.slots {
            if let Some(handle) = slot.handle {
                self.engine.set_volume(handle, engine_gain);
            }
        }
        log::debug!("Volume set to {}", volume);
        self.pending_events.push(PlayerEvent::VolumeChanged { volume });
    }

    /// Poll the engine and run any reported handle events through the
    /// rotation. Call once per presentation tick.
    pub fn pump(&mut self) {
        for event in self.engine.poll_events() {
            self.handle_engine_event(event);
        }
    }

    /// Take the queued presentation events, leaving the queue empty
    pub fn drain_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    pub fn state(&self) -> RotationState {
        self.state
    }

    pub fn current_index(&self) -> Option<usize> {
        self.state.current_index()
    }

    /// Identifier of the current track
    pub fn current_identifier(&self) -> Option<&str> {
        self.state
            .current_index()
            .map(|index| self.slots[index].identifier.as_str())
    }

    /// Decoded display title of the current track
    pub fn current_title(&self) -> Option<String> {
        self.current_identifier().map(codec::display_title)
    }

    /// Position within the current track; zero when nothing is loaded
    pub fn position(&self) -> Duration {
        match self.current_handle() {
            Some(handle) => self.engine.position(handle),
            None => Duration::ZERO,
        }
    }

    /// Duration of the current track; zero when nothing is loaded or the
    /// engine does not know yet
    pub fn duration(&self) -> Duration {
        match self.current_handle() {
            Some(handle) => self.engine.duration(handle),
            None => Duration::ZERO,
        }
    }

    /// Fraction of the current track already played, in [0, 1]
    pub fn progress(&self) -> f64 {
        let total = self.duration();
        if total.is_zero() {
            return 0.0;
        }
        (self.position().as_secs_f64() / total.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// "mm:ss / mm:ss" clock for the current track
    pub fn clock(&self) -> String {
        format!(
            "{} / {}",
            format_clock(self.position()),
            format_clock(self.duration())
        )
    }

    pub fn volume(&self) -> u8 {
        self.volume
    }

    /// Number of tracks in the rotation
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Direct engine access, for adapters and tests
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Make `index` current and start it. Emits the decoded display title;
    /// progress restarts from zero with the new handle.
    fn start_track(&mut self, index: usize) {
        let handle = self.slots[index].handle;
        let title = codec::display_title(&self.slots[index].identifier);
        self.state = RotationState::Playing(index);

        match handle {
            Some(handle) => self.engine.play(handle),
            None => log::warn!("Track {} ({:?}) has no playable handle", index, title),
        }

        log::info!("Now playing [{}] {}", index, title);
        self.pending_events
            .push(PlayerEvent::TrackStarted { index, title });
    }

    fn handle_engine_event(&mut self, event: EngineEvent) {
        match event {
            EngineEvent::Ended { handle } => {
                if self.current_handle() == Some(handle) {
                    log::debug!("End of media, advancing");
                    self.advance();
                } else {
                    log::debug!("Ignoring end of media from stale handle {:?}", handle);
                }
            }
            EngineEvent::Failed { handle, reason } => match self.index_of(handle) {
                Some(index) => {
                    log::error!("Track {} failed: {}", index, reason);
                    self.pending_events
                        .push(PlayerEvent::TrackFailed { index, reason });
                }
                None => log::warn!("Failure from unknown handle {:?}: {}", handle, reason),
            },
        }
    }

    fn current_handle(&self) -> Option<HandleId> {
        self.state
            .current_index()
            .and_then(|index| self.slots[index].handle)
    }

    fn index_of(&self, handle: HandleId) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| slot.handle == Some(handle))
    }

    fn teardown(&mut self) {
        if let Some(handle) = self.current_handle() {
            self.engine.stop(handle);
        }
        for slot in std::mem::take(&mut self.slots) {
            if let Some(handle) = slot.handle {
                self.engine.close(handle);
            }
        }
        self.state = RotationState::Empty;
    }
}

/// Map a 0-100 volume to the engine's 0.0-1.0 gain
fn gain(volume: u8) -> f64 {
    f64::from(volume) / 100.0
}

/// Format a duration as a zero-padded mm:ss clock
pub fn format_clock(duration: Duration) -> String {
    let total = duration.as_secs();
    format!("{:02}:{:02}", total / 60, total % 60)
}
