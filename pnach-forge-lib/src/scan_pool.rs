//! Concurrent scanning of many cheat files.
//!
//! Paths are queued on a bounded async-channel. Each worker task pulls
//! paths, parses the file on the blocking thread pool and keeps its own
//! outcomes. The outcomes are joined once the queue is drained.

use std::path::PathBuf;

use tokio::task::JoinSet;

use crate::error::ScanError;
use crate::scanner::{ScannedFile, scan_file};

/// A scanned path and what came of it.
pub type ScanOutcome = (PathBuf, Result<ScannedFile, ScanError>);

/// Scan `paths` with up to `workers` concurrent tasks.
///
/// Every path yields exactly one outcome. Outcomes come back in completion
/// order, not in the order of `paths`.
pub async fn scan_paths(paths: Vec<PathBuf>, workers: usize) -> Vec<ScanOutcome> {
    let total = paths.len();
    let workers = workers.clamp(1, total.max(1));
    let (queue_tx, queue_rx) = async_channel::bounded::<PathBuf>(workers);

    let mut tasks = JoinSet::new();
    for _ in 0..workers {
        let queue_rx = queue_rx.clone();
        tasks.spawn(async move {
            let mut done = Vec::new();
            while let Ok(path) = queue_rx.recv().await {
                let result = scan_blocking(path.clone()).await;
                done.push((path, result));
            }
            done
        });
    }
    drop(queue_rx);

    for path in paths {
        if queue_tx.send(path).await.is_err() {
            break;
        }
    }
    // Workers stop once the queue is closed and empty.
    drop(queue_tx);

    let mut outcomes = Vec::with_capacity(total);
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(done) => outcomes.extend(done),
            Err(e) => log::warn!("Scan worker stopped early: {}", e),
        }
    }
    if outcomes.len() < total {
        log::warn!("{} of {} files were not scanned", total - outcomes.len(), total);
    }
    outcomes
}

async fn scan_blocking(path: PathBuf) -> Result<ScannedFile, ScanError> {
    tokio::task::spawn_blocking(move || scan_file(&path))
        .await
        .map_err(|e| ScanError::worker(e.to_string()))?
}
