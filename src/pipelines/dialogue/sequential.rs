//! Sequential dialogue pipeline.
//!
//! Records are pre-filtered, normalized, filtered and written one by one, in input order.
//! Output is written as the dump is read: a malformed line stops the run
//! but leaves what was already accepted in the destination.
use std::path::PathBuf;

use log::info;

use super::{PipelineConfig, Summary};
use crate::error::Error;
use crate::filtering::QualityFilter;
use crate::io::{DialogueWriter, RecordReader};
use crate::pipelines::dialogue::types::Utterance;
use crate::pipelines::pipeline::Pipeline;
use crate::tokenizer::Tokenizer;
use crate::transformers::{Normalizer, Transform};

pub struct Sequential {
    src: PathBuf,
    dst: PathBuf,
    tokenizer: Tokenizer,
    config: PipelineConfig,
}

impl Sequential {
    pub fn new(src: PathBuf, dst: PathBuf, tokenizer: Tokenizer, config: PipelineConfig) -> Self {
        Self {
            src,
            dst,
            tokenizer,
            config,
        }
    }
}

impl Pipeline<Summary> for Sequential {
    fn version() -> &'static str {
        "0.1.0"
    }

    fn run(&self) -> Result<Summary, Error> {
        self.config.validate()?;
        info!("running sequential pipeline v{} on {:?}", Self::version(), self.src);

        let filter = QualityFilter::new(&self.tokenizer)
            .with_author_field(self.config.has_author_field)
            .with_min_score(self.config.min_score)
            .with_token_bounds(self.config.min_tokens, self.config.max_tokens);
        let normalizer = Normalizer;

        let records = RecordReader::from_path(&self.src)?;
        let mut writer = DialogueWriter::from_path(&self.dst)?;
        let mut summary = Summary::default();

        for record in records {
            let record = record?;
            summary.read += 1;

            let candidate = match record.into_candidate(self.config.min_score) {
                Some(c) => c,
                None => continue,
            };
            summary.candidates += 1;

            let candidate = normalizer.transform_own(candidate);
            if !filter.accept(&candidate)? {
                continue;
            }

            writer.write(&Utterance::from(candidate))?;
            if self.config.progress_every > 0 && writer.written() % self.config.progress_every == 0
            {
                info!("Current status: {} records written", writer.written());
            }
        }
        writer.flush()?;
        summary.accepted = writer.written();

        info!("{}", summary);
        Ok(summary)
    }
}
