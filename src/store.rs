//! # PostStore: single source of truth for the live feed
//!
//! The store owns the canonical post list and the current search query, and
//! derives the filtered view everything downstream renders. All mutation is
//! funneled through three operations (`add_post`, `clear_posts`,
//! `set_search_query`); reads go through [`PostStore::snapshot`].
//!
//! ## Derived filtering
//!
//! `visible_posts` keeps a post iff the query is empty, or the lowercased
//! `"{title} {body}"` contains the lowercased query as a substring. The
//! recomputation is cached behind an invalidation key, the
//! `(posts revision, query)` tuple, and skipped whenever neither input
//! changed. With an empty query the visible view is the *same allocation*
//! as the post list (`Arc` identity, not a copy), so consumers that watch
//! `visible_posts` can tell that nothing changed. The list runs into the
//! thousands once archive entries are bulk-promoted.
//!
//! Mutations never touch a `Post` in place; each add/clear swaps in a new
//! `Arc<Vec<Post>>`, so snapshots handed out earlier stay valid.

use std::sync::Arc;

use crate::model::Post;

/// Read-only view of store state at a point in time.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// The filtered feed, newest first. With an empty query this is the full
    /// list (same allocation).
    pub visible_posts: Arc<Vec<Post>>,
    /// Unfiltered post count.
    pub total_posts: usize,
    pub search_query: String,
}

#[derive(Debug)]
struct DerivedView {
    /// Invalidation key: posts revision + the query the view was built for.
    key: (u64, String),
    visible: Arc<Vec<Post>>,
}

#[derive(Debug)]
pub struct PostStore {
    posts: Arc<Vec<Post>>,
    search_query: String,
    /// Bumped on every change to `posts`; half of the derivation key.
    revision: u64,
    derived: DerivedView,
}

impl PostStore {
    pub fn new(seed: Vec<Post>) -> Self {
        let posts = Arc::new(seed);
        let derived = DerivedView {
            key: (0, String::new()),
            visible: Arc::clone(&posts),
        };
        Self {
            posts,
            search_query: String::new(),
            revision: 0,
            derived,
        }
    }

    /// Prepend a post. No precondition: the add form validates before
    /// calling, the store itself accepts anything. Returns true (the state
    /// always changes).
    pub fn add_post(&mut self, post: Post) -> bool {
        let mut next = Vec::with_capacity(self.posts.len() + 1);
        next.push(post);
        next.extend(self.posts.iter().cloned());
        self.posts = Arc::new(next);
        self.revision += 1;
        self.recompute();
        true
    }

    /// Reset to an empty feed. Idempotent; returns false when there was
    /// nothing to clear.
    pub fn clear_posts(&mut self) -> bool {
        if self.posts.is_empty() {
            return false;
        }
        self.posts = Arc::new(Vec::new());
        self.revision += 1;
        self.recompute();
        true
    }

    /// Replace the search query. No validation. Returns false when the query
    /// is unchanged, in which case the derived view (and its allocation) is
    /// reused as-is.
    pub fn set_search_query(&mut self, query: &str) -> bool {
        if query == self.search_query {
            return false;
        }
        self.search_query = query.to_string();
        self.recompute();
        true
    }

    /// Current state, fully consistent with the latest mutation: the derived
    /// view is recomputed inside the mutating call, so there is no staleness
    /// window between a write and the next read.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            visible_posts: Arc::clone(&self.derived.visible),
            total_posts: self.posts.len(),
            search_query: self.search_query.clone(),
        }
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    fn recompute(&mut self) {
        let key = (self.revision, self.search_query.clone());
        if self.derived.key == key {
            return;
        }
        self.derived.visible = if self.search_query.is_empty() {
            Arc::clone(&self.posts)
        } else {
            let needle = self.search_query.to_lowercase();
            Arc::new(
                self.posts
                    .iter()
                    .filter(|post| post.matches(&needle))
                    .cloned()
                    .collect(),
            )
        };
        self.derived.key = key;
    }
}

impl Default for PostStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
