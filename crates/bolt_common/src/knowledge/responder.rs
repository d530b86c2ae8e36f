//! Offline replies
//!
//! Turns a matcher result into the text shown to the user when the online
//! backend is unavailable.

use super::matcher::find_best_match_scored;
use super::schema::KnowledgeEntry;

/// Reply used when no entry clears the score floor
pub const OFFLINE_FALLBACK_MESSAGE: &str = "I'm sorry, I couldn't find an answer in my local knowledge base. Please connect to the internet for full conversational capabilities.";

/// Reply to one offline question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfflineReply {
    /// Text shown to the user
    pub text: String,
    /// Id of the matched entry, `None` for the fallback message
    pub matched_id: Option<String>,
    /// Score of the matched entry, 0 for the fallback message
    pub score: u32,
}

impl OfflineReply {
    pub fn is_fallback(&self) -> bool {
        self.matched_id.is_none()
    }
}

/// Answer `query` from `entries`. Blank questions get no reply.
pub fn offline_reply(query: &str, entries: &[KnowledgeEntry]) -> Option<OfflineReply> {
    if query.trim().is_empty() {
        return None;
    }

    let reply = match find_best_match_scored(query, entries) {
        Some(m) => OfflineReply {
            text: m.entry.information.clone(),
            matched_id: Some(m.entry.id.clone()),
            score: m.score,
        },
        None => OfflineReply {
            text: OFFLINE_FALLBACK_MESSAGE.to_string(),
            matched_id: None,
            score: 0,
        },
    };
    Some(reply)
}
