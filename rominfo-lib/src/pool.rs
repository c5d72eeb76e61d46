//! Concurrent parsing of many files.
//!
//! Each file is decoded on tokio's blocking thread pool. A semaphore caps
//! how many run at once, and results come back over an unbounded channel
//! tagged with the index of their input so callers can restore input order.

use std::path::PathBuf;
use std::sync::Arc;

use rominfo_core::{Platform, RomInfoError, RomProperties};
use tokio::sync::{Semaphore, mpsc};
use tokio::task::JoinHandle;

use crate::registry::ParserRegistry;

/// How each file is dispatched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DispatchMode {
    /// Extension match first, then content sniffing.
    #[default]
    Path,
    /// Content only, ignoring the extension.
    Content,
}

/// Result for one input file.
#[derive(Debug)]
pub struct ParseOutcome {
    /// Position of the file in the submitted list.
    pub index: usize,
    pub path: PathBuf,
    pub result: Result<Option<(Platform, RomProperties)>, RomInfoError>,
}

/// A batch of files being parsed concurrently.
///
/// Must be started from within a tokio runtime. A failing file only
/// produces an `Err` outcome for that file; the rest of the batch runs on.
///
/// ```ignore
/// let mut pool = ParsePool::start(registry, paths, 4, DispatchMode::Path);
/// while let Some(outcome) = pool.recv().await {
///     handle(outcome);
/// }
/// ```
pub struct ParsePool {
    result_rx: mpsc::UnboundedReceiver<ParseOutcome>,
    total: usize,
    _handles: Vec<JoinHandle<()>>,
}

impl ParsePool {
    /// Submit every path, running at most `jobs` parses at a time.
    pub fn start(
        registry: Arc<ParserRegistry>,
        paths: Vec<PathBuf>,
        jobs: usize,
        mode: DispatchMode,
    ) -> Self {
        let semaphore = Arc::new(Semaphore::new(jobs.max(1)));
        let (result_tx, result_rx) = mpsc::unbounded_channel();
        let total = paths.len();

        let handles = paths
            .into_iter()
            .enumerate()
            .map(|(index, path)| {
                let registry = registry.clone();
                let semaphore = semaphore.clone();
                let result_tx = result_tx.clone();
                tokio::spawn(async move {
                    let Ok(_permit) = semaphore.acquire_owned().await else {
                        return;
                    };
                    let task_path = path.clone();
                    let joined = tokio::task::spawn_blocking(move || match mode {
                        DispatchMode::Path => registry.identify_path(&task_path),
                        DispatchMode::Content => registry.identify_contents(&task_path),
                    })
                    .await;
                    let result = joined.unwrap_or_else(|e| {
                        log::warn!("Parse task for {} failed: {}", path.display(), e);
                        Err(RomInfoError::Io(std::io::Error::other(e)))
                    });
                    // Receiver dropped means the caller stopped listening
                    let _ = result_tx.send(ParseOutcome {
                        index,
                        path,
                        result,
                    });
                })
            })
            .collect();

        // Channel closes once every task has sent its outcome
        drop(result_tx);

        Self {
            result_rx,
            total,
            _handles: handles,
        }
    }

    /// Number of files submitted.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Receive the next finished file, in completion order. Returns `None`
    /// once every file has been reported.
    pub async fn recv(&mut self) -> Option<ParseOutcome> {
        self.result_rx.recv().await
    }

    /// Wait for the whole batch and return the outcomes in input order.
    pub async fn collect_ordered(mut self) -> Vec<ParseOutcome> {
        let mut outcomes = Vec::with_capacity(self.total);
        while let Some(outcome) = self.recv().await {
            outcomes.push(outcome);
        }
        outcomes.sort_by_key(|o| o.index);
        outcomes
    }
}

#[cfg(test)]
#[path = "tests/pool_tests.rs"]
mod tests;
