pub mod batch;
pub mod pool;

pub use batch::{validate_release, BatchReport, FileOutcome};
pub use pool::WorkerPool;
