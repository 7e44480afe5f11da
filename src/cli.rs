//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use dialcorpus::pipelines::PipelineConfig;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
/// Pipeline command and parameters.
///
/// ```sh
/// dialcorpus 0.1.0
/// dialogue corpus extraction tool.
///
/// USAGE:
///     dialcorpus [FLAGS] [OPTIONS] <src> <dst>
///
/// FLAGS:
///     -h, --help          Prints help information
///         --sequential    process records one by one, keeping input order
///         --text-only     skip score and author checks in the quality filter
///     -V, --version       Prints version information
///
/// ARGS:
///     <src>    newline-delimited json dump (optionally gzipped)
///     <dst>    tab-separated dialogue destination
/// ```
#[structopt(name = "dialcorpus", about = "dialogue corpus extraction tool.")]
pub struct Dialcorpus {
    #[structopt(
        parse(from_os_str),
        help = "newline-delimited json dump (optionally gzipped)"
    )]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "tab-separated dialogue destination")]
    pub dst: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "vocab",
        help = "Path to the vocabulary file",
        default_value = "tokenizer_model/vocab.txt"
    )]
    pub vocab: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "subword-model",
        help = "Path to the sub-word model: a HuggingFace tokenizer.json. SentencePiece .model files (e.g. tokenizer_model/sentencepiece.bpe.model) need a build with --features sentencepiece",
        default_value = "tokenizer_model/tokenizer.json"
    )]
    pub subword_model: PathBuf,
    #[structopt(
        short = "n",
        long = "partitions",
        help = "number of partitions",
        default_value = "200"
    )]
    pub partitions: usize,
    #[structopt(
        short = "w",
        long = "workers",
        help = "number of workers. Default is one per partition."
    )]
    pub workers: Option<usize>,
    #[structopt(long = "min-score", help = "minimum score", default_value = "1")]
    pub min_score: i64,
    #[structopt(
        long = "min-tokens",
        help = "exclusive lower bound on token count",
        default_value = "3"
    )]
    pub min_tokens: usize,
    #[structopt(
        long = "max-tokens",
        help = "exclusive upper bound on token count",
        default_value = "32"
    )]
    pub max_tokens: usize,
    #[structopt(
        long = "progress-every",
        help = "log progress every n records",
        default_value = "10000"
    )]
    pub progress_every: usize,
    #[structopt(
        long = "text-only",
        help = "skip score and author checks in the quality filter"
    )]
    pub text_only: bool,
    #[structopt(
        long = "sequential",
        help = "process records one by one, keeping input order"
    )]
    pub sequential: bool,
}

impl Dialcorpus {
    pub fn config(&self) -> PipelineConfig {
        PipelineConfig {
            partitions: self.partitions,
            workers: self.workers,
            min_score: self.min_score,
            min_tokens: self.min_tokens,
            max_tokens: self.max_tokens,
            progress_every: self.progress_every,
            has_author_field: !self.text_only,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let opt = Dialcorpus::from_iter(&["dialcorpus", "in.jsonl", "out.tsv"]);
        assert_eq!(opt.config(), PipelineConfig::default());
        assert_eq!(opt.vocab, PathBuf::from("tokenizer_model/vocab.txt"));
        assert!(!opt.sequential);
    }

    #[test]
    fn options() {
        let opt = Dialcorpus::from_iter(&[
            "dialcorpus",
            "in.jsonl.gz",
            "out.tsv",
            "-n",
            "8",
            "-w",
            "4",
            "--text-only",
            "--max-tokens",
            "64",
        ]);
        let config = opt.config();
        assert_eq!(config.partitions, 8);
        assert_eq!(config.workers(), 4);
        assert_eq!(config.max_tokens, 64);
        assert!(!config.has_author_field);
    }
}
