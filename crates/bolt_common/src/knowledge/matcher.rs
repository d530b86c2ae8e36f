//! Offline Matcher
//!
//! Substring-overlap scoring used when the online backend is unreachable.
//! Deterministic and dependency-free; not a semantic search.
//!
//! Scoring per entry, over lower-cased text:
//! - +3 for each query word found in the topic
//! - +1 for each query word found in the information
//! - +2 per distinct topic word when more than one distinct word hits the topic
//!
//! The best entry is returned only when its score exceeds `SCORE_FLOOR`.

use super::schema::KnowledgeEntry;
use std::collections::HashSet;

/// Points for a query word found in the topic
pub const TOPIC_WORD_WEIGHT: u32 = 3;

/// Points for a query word found in the information
pub const INFORMATION_WORD_WEIGHT: u32 = 1;

/// Per-word bonus when several distinct query words hit the topic
pub const TOPIC_OVERLAP_BONUS: u32 = 2;

/// A match must score strictly above this
pub const SCORE_FLOOR: u32 = 2;

/// Query tokens must be longer than this many characters
const MAX_IGNORED_WORD_CHARS: usize = 2;

/// An entry together with its score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMatch<'a> {
    pub entry: &'a KnowledgeEntry,
    pub score: u32,
}

/// Lower-cased whitespace tokens longer than two characters
pub fn query_words(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .filter(|w| w.chars().count() > MAX_IGNORED_WORD_CHARS)
        .map(str::to_string)
        .collect()
}

/// Score one entry against already tokenized query words
pub fn score_entry(words: &[String], entry: &KnowledgeEntry) -> u32 {
    let topic = entry.topic.to_lowercase();
    let information = entry.information.to_lowercase();

    let mut score = 0;
    for word in words {
        if topic.contains(word.as_str()) {
            score += TOPIC_WORD_WEIGHT;
        }
        if information.contains(word.as_str()) {
            score += INFORMATION_WORD_WEIGHT;
        }
    }

    let words_in_topic = words
        .iter()
        .filter(|w| topic.contains(w.as_str()))
        .map(String::as_str)
        .collect::<HashSet<_>>()
        .len() as u32;
    if words_in_topic > 1 {
        score += words_in_topic * TOPIC_OVERLAP_BONUS;
    }

    score
}

/// Best-scoring entry with its score, or `None` when no entry clears the floor.
/// Ties keep the earliest entry.
pub fn find_best_match_scored<'a>(
    query: &str,
    entries: &'a [KnowledgeEntry],
) -> Option<ScoredMatch<'a>> {
    let words = query_words(query);
    if words.is_empty() {
        return None;
    }

    let mut best: Option<ScoredMatch<'a>> = None;
    let mut max_score = 0;
    for entry in entries {
        let score = score_entry(&words, entry);
        if score > max_score {
            max_score = score;
            best = Some(ScoredMatch { entry, score });
        }
    }

    best.filter(|m| m.score > SCORE_FLOOR)
}

/// Best-matching entry for `query`, or `None` when nothing is confident enough
pub fn find_best_match<'a>(query: &str, entries: &'a [KnowledgeEntry]) -> Option<&'a KnowledgeEntry> {
    find_best_match_scored(query, entries).map(|m| m.entry)
}
