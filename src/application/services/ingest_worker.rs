/// Background worker that processes queued ingestion batches off the
/// caller's thread.
///
/// Batches are processed strictly sequentially: only one batch (and within
/// it, one record) touches the reference-entity tables at a time, which is
/// what makes the find-or-create step race-free by construction.
use std::sync::Arc;

use tokio::sync::{mpsc, Mutex, RwLock};

use crate::domain::value_objects::SourceRecord;
use crate::shared::errors::{AppError, AppResult};
use crate::{log_error, log_info};

use super::ingest_service::IngestService;

/// Handle for enqueueing batches onto a running [`IngestWorker`].
#[derive(Clone)]
pub struct IngestQueue {
    sender: mpsc::Sender<Vec<SourceRecord>>,
}

impl IngestQueue {
    pub async fn enqueue(&self, records: Vec<SourceRecord>) -> AppResult<()> {
        self.sender
            .send(records)
            .await
            .map_err(|_| AppError::InternalError("Ingest worker is not running".to_string()))
    }
}

pub struct IngestWorker {
    service: Arc<IngestService>,
    receiver: Mutex<mpsc::Receiver<Vec<SourceRecord>>>,
    is_running: Arc<RwLock<bool>>,
}

impl IngestWorker {
    /// Create a worker and the queue handle that feeds it.
    pub fn new(service: Arc<IngestService>, capacity: usize) -> (Arc<Self>, IngestQueue) {
        let (sender, receiver) = mpsc::channel(capacity);
        let worker = Arc::new(Self {
            service,
            receiver: Mutex::new(receiver),
            is_running: Arc::new(RwLock::new(false)),
        });
        (worker, IngestQueue { sender })
    }

    /// Run the worker loop. Call with `tokio::spawn` to run in the
    /// background; the loop ends when all queue handles are dropped or
    /// [`stop`](IngestWorker::stop) is called.
    pub async fn run(self: Arc<Self>) {
        log_info!("Ingest worker started");

        {
            let mut running = self.is_running.write().await;
            *running = true;
        }

        let mut receiver = self.receiver.lock().await;

        loop {
            {
                let running = self.is_running.read().await;
                if !*running {
                    log_info!("Ingest worker stopped");
                    break;
                }
            }

            let records = match receiver.recv().await {
                Some(records) => records,
                None => {
                    log_info!("Ingest queue closed, worker stopping");
                    break;
                }
            };

            match self.service.run_batch(records).await {
                Ok(result) => {
                    log_info!(
                        "Batch done: {}/{} succeeded, {} failed",
                        result.succeeded,
                        result.total,
                        result.failed.len()
                    );
                }
                Err(e) => {
                    // Total failure (e.g. no connectivity), not a per-record one
                    log_error!("Batch aborted: {}", e);
                }
            }
        }
    }

    /// Stop the worker after the current batch finishes.
    pub async fn stop(&self) {
        let mut running = self.is_running.write().await;
        *running = false;
        log_info!("Ingest worker stop requested");
    }
}
