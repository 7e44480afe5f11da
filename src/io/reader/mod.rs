//! Input readers.
mod records;

pub use records::RecordReader;
