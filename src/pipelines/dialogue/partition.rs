//! Round-robin partitioning.
//!
//! The dump is read once, sequentially. Records surviving the pre-filter are counted (starting at 1)
//! and record number `k` goes to partition `k % n`.
//! With 3 partitions, surviving records `r1, r2, r3, r4, r5` are distributed as
//!
//! ```text
//! 0: r3
//! 1: r1 r4
//! 2: r2 r5
//! ```
use log::info;

use super::types::{Candidate, RawRecord};
use crate::error::Error;

/// Partitioned candidates, along with the counts needed for reporting.
#[derive(Debug, Default)]
pub struct Partitions {
    pub parts: Vec<Vec<Candidate>>,
    /// records read
    pub read: usize,
    /// records that passed the pre-filter
    pub kept: usize,
}

/// Distributes pre-filtered records into a fixed number of partitions.
pub struct Partitioner {
    nb_partitions: usize,
    min_score: i64,
    progress_every: usize,
}

impl Partitioner {
    /// `nb_partitions` has to be at least 1.
    pub fn new(nb_partitions: usize) -> Self {
        Self {
            nb_partitions,
            min_score: 1,
            progress_every: 10_000,
        }
    }

    pub fn with_min_score(mut self, min_score: i64) -> Self {
        self.min_score = min_score;
        self
    }

    /// log progress every `progress_every` kept records (0 disables progress logging)
    pub fn with_progress_every(mut self, progress_every: usize) -> Self {
        self.progress_every = progress_every;
        self
    }

    /// Consume records and distribute them.
    ///
    /// Fails on the first record error: a malformed line aborts the whole run.
    pub fn partition<I>(&self, records: I) -> Result<Partitions, Error>
    where
        I: IntoIterator<Item = Result<RawRecord, Error>>,
    {
        if self.nb_partitions == 0 {
            return Err(Error::Configuration(
                "number of partitions must be at least 1".to_string(),
            ));
        }

        let mut partitions = Partitions {
            parts: vec![Vec::new(); self.nb_partitions],
            ..Default::default()
        };

        for record in records {
            let record = record?;
            partitions.read += 1;

            if let Some(candidate) = record.into_candidate(self.min_score) {
                partitions.kept += 1;
                let bucket = partitions.kept % self.nb_partitions;
                partitions.parts[bucket].push(candidate);

                if self.progress_every > 0 && partitions.kept % self.progress_every == 0 {
                    info!("Current status: {} records partitioned", partitions.kept);
                }
            }
        }

        info!(
            "partitioned {} records out of {} into {} partitions",
            partitions.kept, partitions.read, self.nb_partitions
        );
        Ok(partitions)
    }
}
