//! Media engine seam
//!
//! All decoding and audio output sits behind a trait so the session can run
//! against a real toolkit backend or the scripted null engine in tests.

mod null;
mod traits;

pub use null::{NullEngine, Transport};
pub use traits::{EngineEvent, HandleId, MediaEngine};
