//! # dialcorpus
//!
//! Builds a tab-separated dialogue corpus from a Reddit comment dump.
//!
//! ```sh
//! RUST_LOG=info dialcorpus RC_2015-01.jsonl dialogues.tsv \
//!     --vocab tokenizer_model/vocab.txt \
//!     --subword-model tokenizer_model/tokenizer.json
//! ```
use dialcorpus::error::Error;
use dialcorpus::pipelines::{Partitioned, Pipeline, Sequential};
use dialcorpus::tokenizer::Tokenizer;
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Dialcorpus::from_args();
    debug!("cli args\n{:#?}", opt);

    let config = opt.config();
    config.validate()?;

    // missing tokenizer files are reported before touching the dump
    let tokenizer = Tokenizer::from_paths(&opt.vocab, &opt.subword_model)?;

    let summary = if opt.sequential {
        Sequential::new(opt.src, opt.dst, tokenizer, config).run()?
    } else {
        Partitioned::new(opt.src, opt.dst, tokenizer, config).run()?
    };

    if !summary.failed_partitions.is_empty() {
        error!(
            "{} partition(s) failed and were not written",
            summary.failed_partitions.len()
        );
        return Err(Error::Custom(format!(
            "failed partitions: {:?}",
            summary.failed_partitions
        )));
    }

    Ok(())
}
