//! Error enum
use std::fmt;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    /// Missing tokenizer resources or invalid run parameters.
    Configuration(String),
    /// Invalid JSON on a given (1-based) input line.
    Parse {
        line: usize,
        source: serde_json::Error,
    },
    Tokenizer(String),
    /// Failure while filtering a single partition.
    Worker {
        partition: usize,
        reason: String,
    },
    Csv(csv::Error),
    Custom(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {}", e),
            Error::Configuration(msg) => write!(f, "configuration error: {}", msg),
            Error::Parse { line, source } => write!(f, "invalid json on line {}: {}", line, source),
            Error::Tokenizer(msg) => write!(f, "tokenizer error: {}", msg),
            Error::Worker { partition, reason } => {
                write!(f, "partition {} failed: {}", partition, reason)
            }
            Error::Csv(e) => write!(f, "csv error: {}", e),
            Error::Custom(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Error {
        Error::Csv(e)
    }
}

impl From<tokenizers::Error> for Error {
    fn from(e: tokenizers::Error) -> Error {
        Error::Tokenizer(e.to_string())
    }
}

#[cfg(feature = "sentencepiece")]
impl From<sentencepiece::SentencePieceError> for Error {
    fn from(e: sentencepiece::SentencePieceError) -> Error {
        Error::Tokenizer(e.to_string())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}
