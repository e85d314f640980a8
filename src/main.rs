use anyhow::{Context, Result};
use clap::Parser;
use mp3_jukebox::codec;
use mp3_jukebox::Playlist;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mp3-jukebox")]
#[command(about = "Build, shuffle and save .mp3 playlists", long_about = None)]
struct Args {
    /// Directory to scan for .mp3 files
    #[arg(default_value = "~/Music")]
    source: String,

    /// Load a saved playlist file instead of scanning the source directory
    #[arg(short = 'p', long)]
    playlist: Option<PathBuf>,

    /// Write the resulting playlist to this file
    #[arg(short = 's', long)]
    save: Option<PathBuf>,

    /// Shuffle the playlist before printing or saving
    #[arg(long)]
    shuffle: bool,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let mut playlist = match &args.playlist {
        Some(file) => {
            log::info!("Loading playlist {:?}", file);
            Playlist::from_file(file)
        }
        None => {
            // Expand ~ in the source path
            let source = shellexpand::tilde(&args.source);
            let dir = PathBuf::from(source.as_ref());
            log::info!("Scanning {:?} for .mp3 files", dir);
            Playlist::from_directory(&dir)
                .with_context(|| format!("Could not build a playlist from {:?}", dir))?
        }
    };

    if args.shuffle {
        log::info!("Shuffling {} track(s)", playlist.len());
        playlist.shuffle();
    }

    print!("{}", playlist);
    if !playlist.is_empty() {
        println!();
        println!("{} track(s):", playlist.len());
        for identifier in playlist.tracks() {
            println!("  {}", codec::display_title(identifier));
        }
    }

    if let Some(target) = &args.save {
        playlist.save_to_file(target);
    }

    Ok(())
}
