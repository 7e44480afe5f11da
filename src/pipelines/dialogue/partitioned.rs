//! Partitioned dialogue pipeline.
//!
//! # Processing
//! 1. The dump is read once; records passing the pre-filter (non-empty fields, minimum score)
//!    are distributed round-robin into partitions.
//! 1. Each partition is normalized and filtered by its own worker.
//! 1. Once every partition is done, results are written partition after partition.
//!
//! Output is partition-major: it does not follow input order.
use std::path::PathBuf;

use log::{info, warn};

use super::executor::Executor;
use super::partition::Partitioner;
use super::{PipelineConfig, Summary};
use crate::error::Error;
use crate::filtering::QualityFilter;
use crate::io::{DialogueWriter, RecordReader};
use crate::pipelines::pipeline::Pipeline;
use crate::tokenizer::Tokenizer;

pub struct Partitioned {
    src: PathBuf,
    dst: PathBuf,
    tokenizer: Tokenizer,
    config: PipelineConfig,
}

impl Partitioned {
    pub fn new(src: PathBuf, dst: PathBuf, tokenizer: Tokenizer, config: PipelineConfig) -> Self {
        Self {
            src,
            dst,
            tokenizer,
            config,
        }
    }
}

impl Pipeline<Summary> for Partitioned {
    fn version() -> &'static str {
        "0.1.0"
    }

    fn run(&self) -> Result<Summary, Error> {
        self.config.validate()?;
        info!("running partitioned pipeline v{} on {:?}", Self::version(), self.src);

        let records = RecordReader::from_path(&self.src)?;
        let partitions = Partitioner::new(self.config.partitions)
            .with_min_score(self.config.min_score)
            .with_progress_every(self.config.progress_every)
            .partition(records)?;

        let filter = QualityFilter::new(&self.tokenizer)
            .with_author_field(self.config.has_author_field)
            .with_min_score(self.config.min_score)
            .with_token_bounds(self.config.min_tokens, self.config.max_tokens);
        let executor = Executor::new(&filter, self.config.workers());
        let results = executor.run(partitions.parts)?;

        let mut summary = Summary {
            read: partitions.read,
            candidates: partitions.kept,
            ..Default::default()
        };

        let mut succeeded = Vec::with_capacity(results.len());
        for (idx, result) in results.into_iter().enumerate() {
            match result {
                Ok(utterances) => succeeded.push(utterances),
                Err(_) => {
                    warn!("skipping output of failed partition {}", idx);
                    summary.failed_partitions.push(idx);
                }
            }
        }

        // the destination is only touched once every partition is done
        let mut writer = DialogueWriter::from_path(&self.dst)?;
        writer.write_partitions(&succeeded)?;
        writer.flush()?;
        summary.accepted = writer.written();

        info!("{}", summary);
        Ok(summary)
    }
}
