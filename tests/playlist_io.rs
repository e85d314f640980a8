use mp3_jukebox::{codec, PlayerError, Playlist};
use std::fs;
use tempfile::TempDir;

/// The two-track list used by the save/reload tests
fn sample_playlist() -> Playlist {
    Playlist::from(vec!["C:/Madeup.mp3".to_string(), "D:/Test.mp3".to_string()])
}

#[test]
fn test_save_and_reload_preserves_order() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    // Nested target exercises parent directory creation
    let file = temp_dir.path().join("lists/playlist.txt");

    let playlist = sample_playlist();
    playlist.save_to_file(&file);

    let reloaded = Playlist::from_file(&file);
    assert_eq!(reloaded.tracks(), playlist.tracks());
    assert_eq!(reloaded.tracks(), ["C:/Madeup.mp3", "D:/Test.mp3"]);
}

#[test]
fn test_special_characters_stored_verbatim() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let file = temp_dir.path().join("playlist.txt");

    let playlist = Playlist::from(vec!["T3$7!4LL'.mp3".to_string()]);
    playlist.save_to_file(&file);

    let reloaded = Playlist::from_file(&file);
    assert_eq!(reloaded.tracks(), ["T3$7!4LL'.mp3"]);
}

#[test]
fn test_line_count_matches_track_count() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let file = temp_dir.path().join("playlist.txt");
    fs::write(&file, "one.mp3\ntwo.mp3\nthree.mp3\n").unwrap();

    let playlist = Playlist::from_file(&file);
    assert_eq!(playlist.len(), 3);
    assert_eq!(playlist.tracks()[0], "one.mp3");
    assert_eq!(playlist.tracks()[2], "three.mp3");
}

#[test]
fn test_missing_file_yields_empty_playlist() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let playlist = Playlist::from_file(&temp_dir.path().join("nope.txt"));
    assert!(playlist.is_empty());
}

#[test]
fn test_directory_scan_filters_and_encodes() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join("My Song.mp3"), b"").unwrap();
    fs::write(temp_dir.path().join("notes.txt"), b"").unwrap();
    // Suffix match is case-sensitive
    fs::write(temp_dir.path().join("LOUD.MP3"), b"").unwrap();

    let playlist = Playlist::from_directory(temp_dir.path()).unwrap();
    assert_eq!(playlist.len(), 1);

    let identifier = &playlist.tracks()[0];
    assert!(identifier.starts_with("file:///"));
    assert!(!identifier.contains(' '));
    assert!(identifier.ends_with("My%20Song.mp3"));

    // The encoded path decodes back to the file on disk
    let encoded = identifier.strip_prefix("file:///").unwrap();
    assert_eq!(
        codec::decode(encoded),
        temp_dir
            .path()
            .join("My Song.mp3")
            .to_string_lossy()
            .as_ref()
    );
}

#[test]
fn test_directory_scan_escapes_hyphens() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join("A-B.mp3"), b"").unwrap();

    let playlist = Playlist::from_directory(temp_dir.path()).unwrap();
    assert!(playlist.tracks()[0].ends_with("A%2dB.mp3"));
}

#[test]
fn test_scan_ignores_nested_directories() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::create_dir(temp_dir.path().join("albums")).unwrap();
    fs::write(temp_dir.path().join("albums/deep.mp3"), b"").unwrap();
    fs::write(temp_dir.path().join("top.mp3"), b"").unwrap();

    let playlist = Playlist::from_directory(temp_dir.path()).unwrap();
    assert_eq!(playlist.len(), 1);
    assert!(playlist.tracks()[0].ends_with("top.mp3"));
}

#[test]
fn test_empty_directory_is_fatal() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join("readme.txt"), b"").unwrap();

    match Playlist::from_directory(temp_dir.path()) {
        Err(PlayerError::EmptySource { dir }) => assert_eq!(dir, temp_dir.path()),
        other => panic!("Expected EmptySource, got {:?}", other),
    }
}

#[test]
fn test_missing_directory_is_fatal() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let result = Playlist::from_directory(&temp_dir.path().join("absent"));
    assert!(result.is_err());
}
