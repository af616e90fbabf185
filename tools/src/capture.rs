//! Offline decoding of captured datagrams.
//!
//! A player-stats capture is a directory with one file per datagram. Files
//! are taken in file-name order; the first one is the header.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use glob::Pattern;
use protocol::Limits;
use query::{decode_player_stats, Replay, RosterResult};

use crate::{info_report, InfoReport};

/// Decodes one captured name-list datagram.
pub fn decode_info_capture(path: &Path, limits: &Limits) -> Result<InfoReport> {
    let bytes = fs::read(path).with_context(|| format!("read datagram {}", path.display()))?;
    info_report(&bytes, limits)
}

/// Decodes a captured player-stats exchange.
pub fn decode_players_capture(
    dir: &Path,
    glob: Option<&str>,
    limits: &Limits,
) -> Result<RosterResult> {
    let files = collect_capture_files(dir, glob)?;
    let Some((header_path, record_paths)) = files.split_first() else {
        bail!("no captured datagrams in {}", dir.display());
    };

    let header = fs::read(header_path)
        .with_context(|| format!("read header {}", header_path.display()))?;
    let records = record_paths
        .iter()
        .map(|path| fs::read(path).with_context(|| format!("read record {}", path.display())))
        .collect::<Result<Vec<_>>>()?;
    log::info!(
        "replaying {} with {} record datagrams",
        header_path.display(),
        records.len()
    );

    let mut replay = Replay::new(records);
    let roster = decode_player_stats(&header, &mut replay, limits)
        .context("reassemble captured player stats")?;
    if replay.remaining() > 0 {
        log::warn!(
            "{} captured datagrams left over after the roster completed",
            replay.remaining()
        );
    }
    Ok(roster)
}

/// Lists capture files in `dir`, optionally filtered, sorted by path.
pub fn collect_capture_files(dir: &Path, glob: Option<&str>) -> Result<Vec<PathBuf>> {
    let pattern = match glob {
        Some(value) => Some(Pattern::new(value).context("invalid glob pattern")?),
        None => None,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("read dir {}", dir.display()))? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        if let Some(pattern) = &pattern {
            let matches_path = pattern.matches_path(&path);
            let matches_name = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| pattern.matches(name));
            if !matches_path && !matches_name {
                continue;
            }
        }
        files.push(path);
    }
    files.sort();
    Ok(files)
}
