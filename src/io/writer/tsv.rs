//! Tab-separated dialogue writer.
use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::{QuoteStyle, Terminator, WriterBuilder};
use log::info;

use crate::error::Error;
use crate::pipelines::dialogue::types::Utterance;

/// Writes utterances as `id\tparent_id\ttext\tsubreddit\n` lines, without header nor quoting.
pub struct DialogueWriter<W: Write> {
    inner: csv::Writer<W>,
    written: usize,
}

impl DialogueWriter<File> {
    /// Create (or truncate) the destination file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        info!("writing dialogues to {:?}", path.as_ref());
        let file = File::create(path)?;
        Ok(Self::new(file))
    }
}

impl<W: Write> DialogueWriter<W> {
    pub fn new(writer: W) -> Self {
        let inner = WriterBuilder::new()
            .delimiter(b'\t')
            .quote_style(QuoteStyle::Never)
            .terminator(Terminator::Any(b'\n'))
            .has_headers(false)
            .from_writer(writer);

        Self { inner, written: 0 }
    }

    pub fn write(&mut self, utterance: &Utterance) -> Result<(), Error> {
        self.inner.write_record([
            &utterance.id,
            &utterance.parent_id,
            &utterance.text,
            &utterance.subreddit,
        ])?;
        self.written += 1;
        Ok(())
    }

    /// Write partitions one after the other, keeping the order within each partition.
    pub fn write_partitions(&mut self, partitions: &[Vec<Utterance>]) -> Result<(), Error> {
        for utterance in partitions.iter().flatten() {
            self.write(utterance)?;
        }
        Ok(())
    }

    /// number of utterances written so far
    pub fn written(&self) -> usize {
        self.written
    }

    pub fn flush(&mut self) -> Result<(), Error> {
        self.inner.flush()?;
        Ok(())
    }

    /// Flush and get the underlying writer back.
    pub fn into_inner(self) -> Result<W, Error> {
        self.inner.into_inner().map_err(|e| {
            Error::Io(std::io::Error::new(e.error().kind(), e.error().to_string()))
        })
    }
}
