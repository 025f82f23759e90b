//! `mpls`: inspect Blu-ray movie playlist files from the command line.
//!
//! ```text
//! mpls dump <FILE>                      print the decoded playlist and its warnings
//! mpls map <DISC> [-s N] [--clip NAME]  list the playlists of a disc longer than N seconds
//! ```
//!
//! Logging goes to stderr. `RUST_LOG` overrides the default filter, which is
//! `warn` (or `debug` for this crate with `--verbose`).
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mpls_inspect::{decode, Decoded, Mpls};
use std::{
    path::{Path, PathBuf},
    time::Duration,
};
use walkdir::WalkDir;

#[derive(Parser)]
#[command(name = "mpls", version, about = "Inspect Blu-ray movie playlist (MPLS) files")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a single playlist and print it
    Dump {
        /// The .mpls file to decode
        file: PathBuf,
    },

    /// List the playlists of a disc that run longer than a threshold
    Map {
        /// Root of the disc, i.e. the directory containing BDMV
        disc: PathBuf,

        /// Minimum duration of a playlist, in seconds
        #[arg(short, long, default_value_t = 120)]
        seconds: u64,

        /// Only list playlists that reference this clip (e.g. 00055)
        #[arg(long)]
        clip: Option<String>,
    },
}

fn format_duration(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{:3}:{:02}", secs / 60, secs % 60)
}

fn dump(file: &Path) -> Result<()> {
    let bytes = std::fs::read(file).with_context(|| format!("failed to read {}", file.display()))?;

    match decode(&bytes) {
        Ok(Decoded { mpls, warnings }) => {
            println!("{:#?}", mpls);
            println!("duration: {}", format_duration(mpls.duration()));
            for warning in &warnings {
                println!("warning: {}", warning);
            }
            Ok(())
        }
        Err(failure) => {
            println!("{:#?}", failure.partial);
            for warning in &failure.warnings {
                println!("warning: {}", warning);
            }
            Err(failure).with_context(|| format!("failed to decode {}", file.display()))
        }
    }
}

fn load(path: &Path) -> Result<Mpls> {
    let bytes = std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    Mpls::parse(&bytes).with_context(|| format!("failed to decode {}", path.display()))
}

fn map(disc: &Path, min_seconds: u64, clip: Option<&str>) -> Result<()> {
    let dir = disc.join("BDMV").join("PLAYLIST");
    if !dir.is_dir() {
        anyhow::bail!("{} is not a directory", dir.display());
    }

    let entries = WalkDir::new(&dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name();
    for entry in entries {
        let entry = entry.with_context(|| format!("failed to list {}", dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let mpls = match load(entry.path()) {
            Ok(m) => m,
            Err(e) => {
                tracing::error!("{:#}", e);
                continue;
            }
        };

        let duration = mpls.duration();
        if duration.as_secs() <= min_seconds {
            continue;
        }
        if let Some(name) = clip {
            if !mpls.references_clip(name) {
                continue;
            }
        }

        println!(
            "{} {}",
            entry.file_name().to_string_lossy(),
            format_duration(duration)
        );
        println!("{}", mpls.segment_map().join(","));
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "mpls=debug,mpls_inspect=debug".to_string()
        } else {
            "warn".to_string()
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Dump { file } => dump(&file),
        Commands::Map {
            disc,
            seconds,
            clip,
        } => map(&disc, seconds, clip.as_deref()),
    }
}
