pub mod ingest_service;
pub mod ingest_worker;

pub use ingest_service::{build_plan, BatchResult, IngestService, RecordFailure};
pub use ingest_worker::{IngestQueue, IngestWorker};
