//! Body normalization.
//!
//! Bodies are turned into a single line:
//! leading/trailing whitespace is trimmed, line breaks (and tabs, which would break the tab-separated output)
//! become spaces, and runs of spaces are collapsed into one.
//!
//! ```text
//! "  This   is\na reply  "
//! ```
//!
//! becomes
//!
//! ```text
//! "This is a reply"
//! ```
use crate::pipelines::dialogue::types::Candidate;

use super::Transform;

/// Normalize a raw body. Idempotent.
pub fn normalize(raw: &str) -> String {
    let mut normalized = String::with_capacity(raw.len());
    let mut after_space = false;

    for c in raw.trim().chars() {
        let c = match c {
            '\n' | '\r' | '\t' => ' ',
            c => c,
        };

        if c == ' ' {
            if after_space {
                continue;
            }
            after_space = true;
        } else {
            after_space = false;
        }
        normalized.push(c);
    }

    normalized
}

/// Normalizes the text of a [Candidate].
#[derive(Debug, Default, Clone, Copy)]
pub struct Normalizer;

impl Transform<Candidate> for Normalizer {
    fn transform_own(&self, mut candidate: Candidate) -> Candidate {
        candidate.text = normalize(&candidate.text);
        candidate
    }
}
