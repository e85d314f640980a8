//! Playlist storage
//!
//! An ordered, duplicate-tolerant list of track identifiers with three
//! sources: built in memory, parsed from a saved playlist file, or scanned
//! from a directory of .mp3 files. Playlist files are plain text, one
//! identifier per line, stored verbatim.

use crate::codec;
use crate::error::{PlayerError, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Ordered sequence of track identifiers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// Identifiers in play order; duplicates permitted
    tracks: Vec<String>,
}

impl Playlist {
    /// Create an empty playlist
    pub fn new() -> Self {
        Self { tracks: Vec::new() }
    }

    /// Parse a saved playlist file: one identifier per line, in file order,
    /// taken verbatim (no re-encoding). A missing or unreadable file logs
    /// the failure and yields an empty playlist.
    pub fn from_file(path: &Path) -> Self {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                log::warn!("Could not read playlist {:?}: {}", path, e);
                return Self::new();
            }
        };

        let tracks: Vec<String> = contents.lines().map(str::to_string).collect();
        log::info!("Loaded {} track(s) from {:?}", tracks.len(), path);
        Self { tracks }
    }

    /// Scan the direct entries of `dir` for names ending in `.mp3` (exact,
    /// case-sensitive suffix) and build one `file:///` identifier per match
    /// from the encoded path. Enumeration order is whatever the directory
    /// listing yields.
    ///
    /// Fails when nothing matches; an unreadable directory logs its errors
    /// and then fails the same way.
    pub fn from_directory(dir: &Path) -> Result<Self> {
        let mut tracks = Vec::new();

        for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    log::warn!("Skipping unreadable entry under {:?}: {}", dir, e);
                    continue;
                }
            };

            if !entry.file_name().to_string_lossy().ends_with(".mp3") {
                continue;
            }

            let path = entry.path().to_string_lossy().replace('\\', "/");
            tracks.push(format!("file:///{}", codec::encode(&path)));
        }

        if tracks.is_empty() {
            return Err(PlayerError::EmptySource {
                dir: dir.to_path_buf(),
            });
        }

        log::info!("Found {} .mp3 file(s) in {:?}", tracks.len(), dir);
        Ok(Self { tracks })
    }

    /// Write one identifier per line in play order, creating parent
    /// directories as needed and overwriting existing content. I/O failures
    /// are logged, not raised.
    pub fn save_to_file(&self, path: &Path) {
        if let Some(parent) = path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                log::error!("Could not create {:?}: {}", parent, e);
                return;
            }
        }

        let mut contents = String::new();
        for track in &self.tracks {
            contents.push_str(track);
            contents.push('\n');
        }

        match fs::write(path, contents) {
            Ok(()) => log::info!("Saved {} track(s) to {:?}", self.tracks.len(), path),
            Err(e) => log::error!("Could not write playlist {:?}: {}", path, e),
        }
    }

    /// Shuffle in place. Handles opened under the old order are stale;
    /// reload any active rotation afterwards.
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::thread_rng());
    }

    /// Fisher-Yates shuffle with a caller-supplied RNG: each index swaps
    /// with a uniformly chosen index at or after it.
    pub fn shuffle_with<R: Rng>(&mut self, rng: &mut R) {
        let n = self.tracks.len();
        for i in 0..n {
            let j = rng.gen_range(i..n);
            self.tracks.swap(i, j);
        }
    }

    /// Append an identifier
    pub fn push(&mut self, identifier: String) {
        self.tracks.push(identifier);
    }

    /// Remove and return the identifier at `index`, shifting later entries
    /// left. `None` when out of range.
    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index < self.tracks.len() {
            Some(self.tracks.remove(index))
        } else {
            None
        }
    }

    /// Identifiers in play order
    pub fn tracks(&self) -> &[String] {
        &self.tracks
    }

    /// Number of tracks
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Check if the playlist is empty
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

impl From<Vec<String>> for Playlist {
    fn from(tracks: Vec<String>) -> Self {
        Self { tracks }
    }
}

impl fmt::Display for Playlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "PlayList:")?;
        for track in &self.tracks {
            writeln!(f, "{}", track)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn two_tracks() -> Playlist {
        Playlist::from(vec!["C:/Madeup.mp3".to_string(), "D:/Test.mp3".to_string()])
    }

    #[test]
    fn test_empty_rendering() {
        assert_eq!(Playlist::new().to_string(), "PlayList:\n");
    }

    #[test]
    fn test_rendering_lists_one_track_per_line() {
        assert_eq!(
            two_tracks().to_string(),
            "PlayList:\nC:/Madeup.mp3\nD:/Test.mp3\n"
        );
    }

    #[test]
    fn test_remove_shifts_remaining_tracks() {
        let mut playlist = two_tracks();
        assert_eq!(playlist.remove(0).as_deref(), Some("C:/Madeup.mp3"));
        assert_eq!(playlist.to_string(), "PlayList:\nD:/Test.mp3\n");
        assert_eq!(playlist.remove(5), None);
    }

    #[test]
    fn test_push_keeps_insertion_order() {
        let mut playlist = Playlist::new();
        playlist.push("one.mp3".to_string());
        playlist.push("two.mp3".to_string());
        assert_eq!(playlist.len(), 2);
        assert_eq!(playlist.tracks()[1], "two.mp3");
    }

    #[test]
    fn test_shuffle_permutes_without_losing_tracks() {
        let mut playlist = Playlist::from(
            (0..20).map(|i| format!("track{:02}.mp3", i)).collect::<Vec<_>>(),
        );
        let original = playlist.clone();

        let mut rng = StdRng::seed_from_u64(7);
        playlist.shuffle_with(&mut rng);

        assert_eq!(playlist.len(), original.len());
        let mut sorted = playlist.tracks().to_vec();
        sorted.sort();
        let mut expected = original.tracks().to_vec();
        expected.sort();
        assert_eq!(sorted, expected);
    }

    #[test]
    fn test_shuffle_is_deterministic_per_seed() {
        let mut first = two_tracks();
        let mut second = two_tracks();
        first.shuffle_with(&mut StdRng::seed_from_u64(42));
        second.shuffle_with(&mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn test_shuffle_handles_empty_playlist() {
        let mut playlist = Playlist::new();
        playlist.shuffle_with(&mut StdRng::seed_from_u64(1));
        assert!(playlist.is_empty());
    }
}
