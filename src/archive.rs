use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use tracing::{debug, info};

const STAMP_FORMAT: &str = "%Y%m%d-%H%M";

/// Move the prompt into `archive_dir` under a minute-resolution timestamped
/// name. Returns the new location, or `None` when there was nothing to move.
///
/// If an archive for the same minute already exists the file gets a numeric
/// suffix (`prompt-20261019-0930-1.md`) instead of replacing it.
pub fn archive_prompt(
    input: &Path,
    archive_dir: &Path,
    now: NaiveDateTime,
) -> Result<Option<PathBuf>> {
    if !input.exists() {
        debug!("Nothing to archive at {:?}", input);
        return Ok(None);
    }

    fs::create_dir_all(archive_dir)
        .with_context(|| format!("Failed to create archive dir {:?}", archive_dir))?;

    let dest = free_archive_path(input, archive_dir, now);
    fs::rename(input, &dest)
        .with_context(|| format!("Failed to move {:?} to {:?}", input, dest))?;
    info!("Archived {:?} to {:?}", input, dest);
    Ok(Some(dest))
}

fn free_archive_path(input: &Path, archive_dir: &Path, now: NaiveDateTime) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("prompt");
    let ext = input
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("md");
    let stamp = now.format(STAMP_FORMAT).to_string();

    let first = archive_dir.join(format!("{}-{}.{}", stem, stamp, ext));
    if !first.exists() {
        return first;
    }
    (1u32..)
        .map(|n| archive_dir.join(format!("{}-{}-{}.{}", stem, stamp, n, ext)))
        .find(|p| !p.exists())
        .unwrap_or(first)
}
