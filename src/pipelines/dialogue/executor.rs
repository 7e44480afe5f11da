//! Parallel filtering of partitions.
//!
//! Each partition is normalized and filtered by a single task of a bounded rayon pool.
//! Partitions share nothing but the (immutable) [QualityFilter].
//! A failing partition (error or panic) is reported with its index and does not affect the others.
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use log::{debug, error, info};
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;

use super::types::{Candidate, Utterance};
use crate::error::Error;
use crate::filtering::QualityFilter;
use crate::transformers::{Normalizer, Transform};

/// Result of a single partition.
pub type PartitionResult = Result<Vec<Utterance>, Error>;

pub struct Executor<'a> {
    filter: &'a QualityFilter<'a>,
    normalizer: Normalizer,
    workers: usize,
}

impl<'a> Executor<'a> {
    pub fn new(filter: &'a QualityFilter<'a>, workers: usize) -> Self {
        Self {
            filter,
            normalizer: Normalizer,
            workers,
        }
    }

    /// Filter every partition, returning results in partition order.
    ///
    /// Only a failure to build the worker pool is returned as an error,
    /// partition failures are returned as [Error::Worker] in their slot.
    pub fn run(&self, partitions: Vec<Vec<Candidate>>) -> Result<Vec<PartitionResult>, Error> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(self.workers)
            .build()
            .map_err(|e| Error::Configuration(format!("could not build worker pool: {}", e)))?;

        info!(
            "filtering {} partitions with {} workers",
            partitions.len(),
            self.workers
        );

        let results: Vec<PartitionResult> = pool.install(|| {
            partitions
                .into_par_iter()
                .enumerate()
                .map(|(idx, partition)| self.run_partition(idx, partition))
                .collect()
        });

        for (idx, result) in results.iter().enumerate() {
            if let Err(e) = result {
                error!("{} (partition {})", e, idx);
            }
        }

        Ok(results)
    }

    /// Normalize and filter a single partition, catching panics.
    fn run_partition(&self, idx: usize, partition: Vec<Candidate>) -> PartitionResult {
        let nb_candidates = partition.len();
        let result = panic::catch_unwind(AssertUnwindSafe(|| self.filter_partition(partition)));

        match result {
            Ok(Ok(utterances)) => {
                debug!(
                    "partition {}: kept {}/{} records",
                    idx,
                    utterances.len(),
                    nb_candidates
                );
                Ok(utterances)
            }
            Ok(Err(e)) => Err(Error::Worker {
                partition: idx,
                reason: e.to_string(),
            }),
            Err(payload) => Err(Error::Worker {
                partition: idx,
                reason: panic_reason(payload),
            }),
        }
    }

    fn filter_partition(&self, partition: Vec<Candidate>) -> PartitionResult {
        let mut utterances = Vec::new();
        for candidate in partition {
            let candidate = self.normalizer.transform_own(candidate);
            if self.filter.accept(&candidate)? {
                utterances.push(Utterance::from(candidate));
            }
        }
        Ok(utterances)
    }
}

fn panic_reason(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("panicked: {}", s)
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("panicked: {}", s)
    } else {
        "panicked".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::{Segment, Tokenizer, Vocab, WhitespaceSegmenter};

    fn candidate(id: &str, text: &str) -> Candidate {
        Candidate {
            id: id.to_string(),
            parent_id: "t3_root".to_string(),
            text: text.to_string(),
            subreddit: "test".to_string(),
            author: Some("someone".to_string()),
            score: 2,
        }
    }

    #[test]
    fn normalizes_filters_and_keeps_order() {
        let tokenizer = Tokenizer::new(Vocab::default(), Box::new(WhitespaceSegmenter));
        let filter = QualityFilter::new(&tokenizer);
        let executor = Executor::new(&filter, 2);

        let partitions = vec![
            vec![
                candidate("a", "this  reply\nis long enough"),
                candidate("b", "[deleted]"),
                candidate("c", "another reply that is kept"),
            ],
            vec![],
            vec![candidate("d", "see http://example.com for more info")],
        ];
        let results = executor.run(partitions).unwrap();

        assert_eq!(results.len(), 3);
        let first = results[0].as_ref().unwrap();
        assert_eq!(first.len(), 2);
        assert_eq!(first[0].id, "a");
        assert_eq!(first[0].text, "this reply is long enough");
        assert_eq!(first[1].id, "c");
        assert!(results[1].as_ref().unwrap().is_empty());
        assert!(results[2].as_ref().unwrap().is_empty());
    }

    /// Fails on texts containing "poison", panics on texts containing "panic".
    struct Fragile;
    impl Segment for Fragile {
        fn pieces(&self, text: &str) -> Result<Vec<String>, Error> {
            if text.contains("panic") {
                panic!("segmenter blew up");
            }
            if text.contains("poison") {
                return Err(Error::Tokenizer("cannot segment".to_string()));
            }
            WhitespaceSegmenter.pieces(text)
        }
    }

    #[test]
    fn failures_are_isolated() {
        let tokenizer = Tokenizer::new(Vocab::default(), Box::new(Fragile));
        let filter = QualityFilter::new(&tokenizer);
        let executor = Executor::new(&filter, 3);

        let partitions = vec![
            vec![candidate("a", "a perfectly fine reply")],
            vec![candidate("b", "this one contains poison somewhere")],
            vec![candidate("c", "and this one will panic for sure")],
            vec![candidate("d", "another perfectly fine reply")],
        ];
        let results = executor.run(partitions).unwrap();

        assert_eq!(results[0].as_ref().unwrap().len(), 1);
        assert!(matches!(results[1], Err(Error::Worker { partition: 1, .. })));
        assert!(matches!(results[2], Err(Error::Worker { partition: 2, .. })));
        assert_eq!(results[3].as_ref().unwrap()[0].id, "d");
    }
}
