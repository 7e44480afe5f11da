//! Pipeline parameters.
use crate::error::Error;

/// Parameters shared by the dialogue pipelines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// number of partitions
    pub partitions: usize,
    /// worker pool size, defaults to one worker per partition
    pub workers: Option<usize>,
    /// records with a lower score are dropped
    pub min_score: i64,
    /// exclusive lower token bound
    pub min_tokens: usize,
    /// exclusive upper token bound
    pub max_tokens: usize,
    /// log progress every n records
    pub progress_every: usize,
    /// run score and author checks in the quality filter
    pub has_author_field: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            partitions: 200,
            workers: None,
            min_score: 1,
            min_tokens: 3,
            max_tokens: 32,
            progress_every: 10_000,
            has_author_field: true,
        }
    }
}

impl PipelineConfig {
    pub fn workers(&self) -> usize {
        self.workers.unwrap_or(self.partitions)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.partitions == 0 {
            return Err(Error::Configuration(
                "number of partitions must be at least 1".to_string(),
            ));
        }
        if self.workers() == 0 {
            return Err(Error::Configuration(
                "number of workers must be at least 1".to_string(),
            ));
        }
        if self.min_tokens >= self.max_tokens {
            return Err(Error::Configuration(format!(
                "token bounds are inverted: min {} >= max {}",
                self.min_tokens, self.max_tokens
            )));
        }
        Ok(())
    }
}
