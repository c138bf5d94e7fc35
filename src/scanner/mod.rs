pub mod types;
pub mod walk;

use std::path::Path;
use std::sync::mpsc;

use anyhow::{bail, Result};

use self::types::{RawFileEntry, ScanProgress};

/// Scan `root` recursively, reporting progress on `progress_tx`.
pub fn scan(root: &Path, progress_tx: mpsc::Sender<ScanProgress>) -> Result<Vec<RawFileEntry>> {
    if !root.is_dir() {
        bail!("scan root is not a directory: {}", root.display());
    }
    walk::scan_walkdir(root, progress_tx)
}

/// Drain the progress messages buffered on `rx`, logging each non-fatal scan
/// error. Returns how many entries were skipped because of errors.
pub fn drain_progress(rx: &mpsc::Receiver<ScanProgress>) -> usize {
    let mut errors = 0;
    while let Ok(progress) = rx.try_recv() {
        match progress {
            ScanProgress::Error { path, message } => {
                tracing::warn!("Skipped {}: {}", path.display(), message);
                errors += 1;
            }
            ScanProgress::Completed {
                total_files,
                total_dirs,
                elapsed_ms,
                ..
            } => {
                tracing::debug!(
                    "Scan finished: {} files, {} dirs in {}ms",
                    total_files,
                    total_dirs,
                    elapsed_ms
                );
            }
            _ => {}
        }
    }
    if errors > 0 {
        tracing::warn!("{} entries could not be read and are missing from the layout", errors);
    }
    errors
}
