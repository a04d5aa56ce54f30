//! Loaders that turn something on disk into list items.

use std::path::Path;
use std::time::UNIX_EPOCH;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::model::{Entry, Item};

/// List the entries of a directory: subdirectories first, then files, each by name
pub async fn scan_dir(path: &Path) -> Result<Vec<Item>> {
    let mut dir = tokio::fs::read_dir(path)
        .await
        .with_context(|| format!("Could not read directory: {}", path.display()))?;

    let mut entries = Vec::new();
    while let Some(dir_entry) = dir.next_entry().await? {
        let metadata = match dir_entry.metadata().await {
            Ok(metadata) => metadata,
            Err(err) => {
                debug!(path = %dir_entry.path().display(), %err, "skipping unreadable entry");
                continue;
            }
        };
        let modified = metadata
            .modified()
            .ok()
            .and_then(|time| time.duration_since(UNIX_EPOCH).ok())
            .map(|duration| duration.as_secs() as i64)
            .unwrap_or(0);

        entries.push(Entry {
            path: dir_entry.path().to_string_lossy().into_owned(),
            name: dir_entry.file_name().to_string_lossy().into_owned(),
            is_dir: metadata.is_dir(),
            size: metadata.len(),
            modified,
        });
    }

    entries.sort_by(|a, b| b.is_dir.cmp(&a.is_dir).then_with(|| a.name.cmp(&b.name)));
    info!(path = %path.display(), count = entries.len(), "scanned directory");
    Ok(entries.into_iter().map(Entry::into_item).collect())
}

/// One item per line of a text file; the value is the 1-based line number
pub async fn read_lines(path: &Path) -> Result<Vec<Item>> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Could not read file: {}", path.display()))?;
    let items: Vec<Item> = content
        .lines()
        .enumerate()
        .map(|(i, line)| Item::new((i + 1).to_string(), line))
        .collect();
    info!(path = %path.display(), count = items.len(), "read lines");
    Ok(items)
}

/// Pick the loader for `path`: lines of a file, entries of a directory
pub async fn load(path: &Path, force_lines: bool) -> Result<Vec<Item>> {
    let metadata = tokio::fs::metadata(path)
        .await
        .with_context(|| format!("Could not resolve path: {}", path.display()))?;
    if force_lines || metadata.is_file() {
        read_lines(path).await
    } else {
        scan_dir(path).await
    }
}
