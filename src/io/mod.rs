/*!
# IO utilities

Reading of newline-delimited JSON dumps and writing of tab-separated dialogue files.
!*/
pub mod reader;
pub mod writer;

pub use reader::RecordReader;
pub use writer::DialogueWriter;
