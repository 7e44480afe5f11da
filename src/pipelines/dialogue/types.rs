//! Records flowing through the dialogue pipelines.
use serde::Deserialize;

/// A comment/submission as found on one input line.
///
/// Every field may be missing or `null`: missing strings count as empty and a missing score as 0.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawRecord {
    pub id: Option<String>,
    pub parent_id: Option<String>,
    pub body: Option<String>,
    pub author: Option<String>,
    pub subreddit: Option<String>,
    pub score: Option<i64>,
}

impl RawRecord {
    pub fn score(&self) -> i64 {
        self.score.unwrap_or_default()
    }

    /// Cheap pre-filter.
    ///
    /// Trims identifiers and body, lowercases the community, and drops the record
    /// if any of them is empty or if its score is below `min_score`.
    pub fn into_candidate(self, min_score: i64) -> Option<Candidate> {
        let score = self.score();
        if score < min_score {
            return None;
        }

        let id = trimmed(self.id)?;
        let parent_id = trimmed(self.parent_id)?;
        let text = trimmed(self.body)?;
        let subreddit = trimmed(self.subreddit.map(|s| s.to_lowercase()))?;

        Some(Candidate {
            id,
            parent_id,
            text,
            subreddit,
            author: self.author,
            score,
        })
    }
}

fn trimmed(field: Option<String>) -> Option<String> {
    field
        .map(|f| f.trim().to_string())
        .filter(|f| !f.is_empty())
}

/// A record that went through the pre-filter.
///
/// `id`, `parent_id`, `text` and `subreddit` are never empty.
/// `author` and `score` are carried along for the author-aware quality checks.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub id: String,
    pub parent_id: String,
    pub text: String,
    pub subreddit: String,
    pub author: Option<String>,
    pub score: i64,
}

/// A normalized record that passed the quality filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utterance {
    pub id: String,
    pub parent_id: String,
    pub text: String,
    pub subreddit: String,
}

impl From<Candidate> for Utterance {
    fn from(c: Candidate) -> Self {
        Self {
            id: c.id,
            parent_id: c.parent_id,
            text: c.text,
            subreddit: c.subreddit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(line: &str) -> RawRecord {
        serde_json::from_str(line).unwrap()
    }

    #[test]
    fn deserialize_full() {
        let r = raw(r#"{"id":"a1","parent_id":"t1_a0","body":"hi","author":"u","subreddit":"AskReddit","score":5,"gilded":0}"#);
        assert_eq!(r.id.as_deref(), Some("a1"));
        assert_eq!(r.score(), 5);
    }

    #[test]
    fn deserialize_missing_and_null() {
        let r = raw(r#"{"id":"a1","parent_id":null,"body":"hi"}"#);
        assert_eq!(r.parent_id, None);
        assert_eq!(r.author, None);
        assert_eq!(r.score(), 0);
    }

    #[test]
    fn candidate_fields() {
        let r = raw(r#"{"id":" a1 ","parent_id":"t1_a0","body":"  hello there \n","author":"u","subreddit":" AskReddit ","score":1}"#);
        let c = r.into_candidate(1).unwrap();
        assert_eq!(c.id, "a1");
        assert_eq!(c.text, "hello there");
        assert_eq!(c.subreddit, "askreddit");
        assert_eq!(c.author.as_deref(), Some("u"));
    }

    #[test]
    fn prefilter_drops() {
        let base = r#"{"id":"a1","parent_id":"t1_a0","body":"hello","subreddit":"x","score":1}"#;
        assert!(raw(base).into_candidate(1).is_some());

        let low_score = r#"{"id":"a1","parent_id":"t1_a0","body":"hello","subreddit":"x","score":0}"#;
        assert!(raw(low_score).into_candidate(1).is_none());

        let blank_body = r#"{"id":"a1","parent_id":"t1_a0","body":" \n ","subreddit":"x","score":3}"#;
        assert!(raw(blank_body).into_candidate(1).is_none());

        let no_parent = r#"{"id":"a1","body":"hello","subreddit":"x","score":3}"#;
        assert!(raw(no_parent).into_candidate(1).is_none());

        let empty_sub = r#"{"id":"a1","parent_id":"t1_a0","body":"hello","subreddit":"","score":3}"#;
        assert!(raw(empty_sub).into_candidate(1).is_none());
    }
}
