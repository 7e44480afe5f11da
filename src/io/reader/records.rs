//! Newline-delimited JSON record reader.
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use log::debug;

use crate::error::Error;
use crate::pipelines::dialogue::types::RawRecord;

/// Iterates over the records of a newline-delimited JSON dump.
///
/// Invalid UTF-8 sequences are dropped, blank lines are skipped.
/// A line that is not a valid record yields an [Error::Parse] carrying its (1-based) line number.
pub struct RecordReader<R> {
    reader: R,
    buf: Vec<u8>,
    line: usize,
}

impl RecordReader<Box<dyn BufRead>> {
    /// Open a dump, decompressing it if its name ends with `.gz`.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let file = File::open(path)?;

        let gzipped = path.extension().map_or(false, |ext| ext == "gz");
        let reader: Box<dyn BufRead> = if gzipped {
            debug!("reading {:?} as a gzipped dump", path);
            // dumps may be made of several gzip members
            Box::new(BufReader::new(MultiGzDecoder::new(file)))
        } else {
            Box::new(BufReader::new(file))
        };

        Ok(Self::new(reader))
    }
}

impl<R: BufRead> RecordReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            line: 0,
        }
    }
}

impl<R: BufRead> Iterator for RecordReader<R> {
    type Item = Result<RawRecord, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buf.clear();
            match self.reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => return None,
                Ok(_) => self.line += 1,
                Err(e) => return Some(Err(e.into())),
            }

            let line: String = self.buf.utf8_chunks().map(|chunk| chunk.valid()).collect();
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            return Some(serde_json::from_str(line).map_err(|source| Error::Parse {
                line: self.line,
                source,
            }));
        }
    }
}
