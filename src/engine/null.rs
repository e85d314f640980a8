//! Scripted no-op engine for tests and headless use
//!
//! Produces no audio. Records every transport command so tests can assert
//! what the session asked for, and can be scripted to refuse an open, end a
//! track, or fail one.

use super::traits::{EngineEvent, HandleId, MediaEngine};
use crate::error::{PlayerError, Result};
use std::collections::HashMap;
use std::time::Duration;

/// Last transport command seen for a handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    Playing,
    Paused,
    Stopped,
}

/// No-op engine; handles are numbered from 1 in open order
#[derive(Debug, Default)]
pub struct NullEngine {
    next_id: u64,
    uris: HashMap<HandleId, String>,
    transport: HashMap<HandleId, Transport>,
    gains: HashMap<HandleId, f64>,
    refused: Vec<String>,
    queued: Vec<EngineEvent>,
    clock_position: Duration,
    clock_duration: Duration,
}

impl NullEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every later `open` of this identifier fail
    pub fn refuse(&mut self, uri: &str) {
        self.refused.push(uri.to_string());
    }

    /// Queue a natural end-of-media event for the handle
    pub fn finish(&mut self, handle: HandleId) {
        self.queued.push(EngineEvent::Ended { handle });
    }

    /// Queue a failure event for the handle
    pub fn fail(&mut self, handle: HandleId, reason: &str) {
        self.queued.push(EngineEvent::Failed {
            handle,
            reason: reason.to_string(),
        });
    }

    /// Set the synthetic position/duration reported for any handle
    pub fn set_clock(&mut self, position: Duration, duration: Duration) {
        self.clock_position = position;
        self.clock_duration = duration;
    }

    /// Last transport command seen for the handle, if any
    pub fn transport(&self, handle: HandleId) -> Option<Transport> {
        self.transport.get(&handle).copied()
    }

    /// Last gain applied to the handle, if any
    pub fn gain(&self, handle: HandleId) -> Option<f64> {
        self.gains.get(&handle).copied()
    }

    /// Identifier the handle was opened with
    pub fn uri(&self, handle: HandleId) -> Option<&str> {
        self.uris.get(&handle).map(String::as_str)
    }

    /// Number of handles currently open
    pub fn open_count(&self) -> usize {
        self.uris.len()
    }
}

impl MediaEngine for NullEngine {
    fn open(&mut self, uri: &str) -> Result<HandleId> {
        if self.refused.iter().any(|refused| refused == uri) {
            return Err(PlayerError::Engine(format!("refusing to open {}", uri)));
        }
        self.next_id += 1;
        let handle = HandleId(self.next_id);
        self.uris.insert(handle, uri.to_string());
        log::debug!("Null engine opened {:?} as {:?}", uri, handle);
        Ok(handle)
    }

    fn play(&mut self, handle: HandleId) {
        if self.uris.contains_key(&handle) {
            self.transport.insert(handle, Transport::Playing);
        }
    }

    fn pause(&mut self, handle: HandleId) {
        if self.uris.contains_key(&handle) {
            self.transport.insert(handle, Transport::Paused);
        }
    }

    fn stop(&mut self, handle: HandleId) {
        if self.uris.contains_key(&handle) {
            self.transport.insert(handle, Transport::Stopped);
        }
    }

    fn close(&mut self, handle: HandleId) {
        self.uris.remove(&handle);
        self.transport.remove(&handle);
        self.gains.remove(&handle);
    }

    fn position(&self, _handle: HandleId) -> Duration {
        self.clock_position
    }

    fn duration(&self, _handle: HandleId) -> Duration {
        self.clock_duration
    }

    fn set_volume(&mut self, handle: HandleId, gain: f64) {
        if self.uris.contains_key(&handle) {
            self.gains.insert(handle, gain);
        }
    }

    fn poll_events(&mut self) -> Vec<EngineEvent> {
        std::mem::take(&mut self.queued)
    }
}
