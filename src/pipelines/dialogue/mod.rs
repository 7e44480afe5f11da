//! Dialogue corpus pipelines.
//!
//! Both pipelines read a newline-delimited JSON dump of Reddit comments,
//! keep the records that pass the quality heuristics and write
//! `(id, parent_id, text, subreddit)` tuples.
//!
//! - [Partitioned] distributes records into partitions that are filtered in parallel,
//!   output is partition-major.
//! - [Sequential] filters and writes records one by one, output follows input order.
mod config;
pub mod executor;
pub mod partition;
mod partitioned;
mod sequential;
pub mod types;

use std::fmt;

pub use config::PipelineConfig;
pub use partitioned::Partitioned;
pub use sequential::Sequential;

/// Counts reported at the end of a run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Summary {
    /// records read from the dump
    pub read: usize,
    /// records that passed the pre-filter
    pub candidates: usize,
    /// records written
    pub accepted: usize,
    /// indices of partitions that failed and were not written
    pub failed_partitions: Vec<usize>,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "read {} records, {} candidates, {} accepted",
            self.read, self.candidates, self.accepted
        )?;
        if !self.failed_partitions.is_empty() {
            write!(f, ", failed partitions: {:?}", self.failed_partitions)?;
        }
        Ok(())
    }
}
