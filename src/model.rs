//! Core data type: [`Post`].
//!
//! A post is an immutable value: a short title plus a body, stamped with a
//! stable id and a creation time when it enters the system. The id is the
//! display identity (list positions shift on every publish); the text alone
//! decides equality.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub title: String,
    pub body: String,
}

impl Post {
    /// Build a post from raw title/body text. Surrounding whitespace is
    /// trimmed; empty input is the caller's problem (the add form guards it,
    /// the store does not).
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        let title = title.into();
        let body = body.into();
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            title: title.trim().to_string(),
            body: body.trim().to_string(),
        }
    }

    /// Value copy with a fresh id and timestamp. Promoting an archived post
    /// must not alias archive storage, so the live feed gets its own entry.
    pub fn duplicate(&self) -> Self {
        Self::new(self.title.as_str(), self.body.as_str())
    }

    /// The text searched by the store filter: title and body joined by a
    /// single space, lowercased.
    pub fn haystack(&self) -> String {
        format!("{} {}", self.title, self.body).to_lowercase()
    }

    /// Case-insensitive substring match. `needle_lower` must already be
    /// lowercased; the store does that once per query, not once per post.
    pub fn matches(&self, needle_lower: &str) -> bool {
        self.haystack().contains(needle_lower)
    }
}

/// Equality is textual: two posts with the same title and body compare equal
/// even when created independently (and therefore carry different ids).
impl PartialEq for Post {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title && self.body == other.body
    }
}

impl Eq for Post {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_whitespace() {
        let post = Post::new("  Hot Syntax  ", "\nDeploy bandwidth\n");
        assert_eq!(post.title, "Hot Syntax");
        assert_eq!(post.body, "Deploy bandwidth");
    }

    #[test]
    fn equality_is_structural() {
        let a = Post::new("Hot Syntax", "Deploy bandwidth");
        let b = Post::new("Hot Syntax", "Deploy bandwidth");
        assert_ne!(a.id, b.id);
        assert_eq!(a, b);
    }

    #[test]
    fn duplicate_copies_text_with_fresh_identity() {
        let original = Post::new("Virtual Driver", "Parse matrix");
        let copy = original.duplicate();
        assert_eq!(copy, original);
        assert_ne!(copy.id, original.id);
    }

    #[test]
    fn matches_is_case_insensitive_over_title_and_body() {
        let post = Post::new("Virtual Driver", "Parse matrix");
        assert!(post.matches("matrix"));
        assert!(post.matches("virtual d"));
        // Straddles the title/body boundary via the joining space.
        assert!(post.matches("driver parse"));
        assert!(!post.matches("bandwidth"));
    }
}
