//! Vocabulary loading.
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::Error;

/// Placeholder for empty vocabulary lines, so that line indices stay aligned with ids.
pub const OCCUPY_TOKEN: &str = "[Occupy]";

/// Fixed vocabulary: one token per line, line index is the token id.
///
/// Only the first tab-separated field of each line is kept.
/// When a token appears several times, the last id wins.
#[derive(Debug, Clone, Default)]
pub struct Vocab {
    ids: HashMap<String, u32>,
    tokens: Vec<String>,
}

impl Vocab {
    /// Load a vocabulary file.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        if !path.is_file() {
            return Err(Error::Configuration(format!(
                "Can't find a vocabulary file at path {:?}",
                path
            )));
        }
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let lines = reader.lines().collect::<Result<Vec<String>, _>>()?;
        Ok(lines.iter().map(String::as_str).collect())
    }

    /// number of distinct tokens
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.ids.contains_key(token)
    }

    pub fn id(&self, token: &str) -> Option<u32> {
        self.ids.get(token).copied()
    }

    pub fn token(&self, id: u32) -> Option<&str> {
        self.tokens.get(id as usize).map(String::as_str)
    }
}

impl<'a> FromIterator<&'a str> for Vocab {
    fn from_iter<I: IntoIterator<Item = &'a str>>(lines: I) -> Self {
        let mut vocab = Vocab::default();
        for (idx, line) in lines.into_iter().enumerate() {
            let token = line.trim_end().split('\t').next().unwrap_or_default().trim();
            let token = if token.is_empty() { OCCUPY_TOKEN } else { token };

            vocab.ids.insert(token.to_string(), idx as u32);
            vocab.tokens.push(token.to_string());
        }
        vocab
    }
}
