use std::path::Path;
use std::sync::mpsc;
use std::time::Instant;

use anyhow::Result;
use jwalk::WalkDir;

use super::types::{RawFileEntry, ScanProgress};

/// Entries between two `ScanProgress::Progress` updates.
const PROGRESS_INTERVAL: u64 = 10_000;

/// Walk `root` with jwalk. Unreadable entries are reported on the channel and skipped.
pub fn scan_walkdir(
    root: &Path,
    progress_tx: mpsc::Sender<ScanProgress>,
) -> Result<Vec<RawFileEntry>> {
    let start = Instant::now();
    let _ = progress_tx.send(ScanProgress::Started {
        root: root.to_path_buf(),
    });
    tracing::info!("Scanning {} with jwalk", root.display());

    let mut entries = Vec::new();
    let mut files_scanned: u64 = 0;
    let mut dirs_scanned: u64 = 0;
    let mut total_bytes: u64 = 0;

    let walker = WalkDir::new(root)
        .sort(true)
        .skip_hidden(false)
        .follow_links(false);

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let path = e
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| root.to_path_buf());
                tracing::debug!("Walk error at {}: {}", path.display(), e);
                let _ = progress_tx.send(ScanProgress::Error {
                    path,
                    message: e.to_string(),
                });
                continue;
            }
        };

        // The root itself becomes the tree root, not an entry.
        if entry.depth == 0 {
            continue;
        }

        let file_type = entry.file_type();
        if file_type.is_symlink() {
            continue;
        }

        let path = entry.path();
        if file_type.is_dir() {
            dirs_scanned += 1;
            entries.push(RawFileEntry {
                path,
                size: 0,
                is_dir: true,
            });
        } else {
            let size = match entry.metadata() {
                Ok(meta) => meta.len(),
                Err(e) => {
                    let _ = progress_tx.send(ScanProgress::Error {
                        path: path.clone(),
                        message: e.to_string(),
                    });
                    0
                }
            };
            files_scanned += 1;
            total_bytes += size;
            entries.push(RawFileEntry {
                path,
                size,
                is_dir: false,
            });
        }

        if (files_scanned + dirs_scanned) % PROGRESS_INTERVAL == 0 {
            let _ = progress_tx.send(ScanProgress::Progress {
                files_scanned,
                dirs_scanned,
                total_bytes,
            });
        }
    }

    let elapsed_ms = start.elapsed().as_millis() as u64;
    tracing::info!(
        "Scan completed: {} files, {} dirs, {:.2} GB in {} ms",
        files_scanned,
        dirs_scanned,
        total_bytes as f64 / 1_073_741_824.0,
        elapsed_ms
    );
    let _ = progress_tx.send(ScanProgress::Completed {
        total_files: files_scanned,
        total_dirs: dirs_scanned,
        total_bytes,
        elapsed_ms,
    });

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn collects_files_and_dirs_below_root() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("a.bin"), vec![0u8; 300]).unwrap();
        fs::write(dir.path().join("sub").join("b.txt"), vec![0u8; 120]).unwrap();

        let (tx, rx) = mpsc::channel();
        let mut entries = scan_walkdir(dir.path(), tx).unwrap();
        entries.sort_by(|a, b| a.path.cmp(&b.path));

        assert_eq!(entries.len(), 3);
        let a = entries.iter().find(|e| e.path.ends_with("a.bin")).unwrap();
        assert_eq!(a.size, 300);
        assert!(!a.is_dir);
        let sub = entries.iter().find(|e| e.path.ends_with("sub")).unwrap();
        assert!(sub.is_dir);
        assert_eq!(sub.size, 0);

        let progress: Vec<ScanProgress> = rx.try_iter().collect();
        assert!(matches!(progress.first(), Some(ScanProgress::Started { .. })));
        assert!(matches!(
            progress.last(),
            Some(ScanProgress::Completed { total_files: 2, total_dirs: 1, total_bytes: 420, .. })
        ));
    }

    #[test]
    fn scan_rejects_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        let (tx, _rx) = mpsc::channel();
        assert!(crate::scanner::scan(&dir.path().join("missing"), tx).is_err());
    }
}
