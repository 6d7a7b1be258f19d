//! The post archive: a large, fixed, session-scoped batch of synthetic
//! posts the user can promote into the live feed one at a time.
//!
//! The batch (10,000 entries by default) is generated lazily, exactly once
//! per [`Archive`] value; the visibility toggle flips a flag and nothing
//! else. Generation is tied to the value's lifetime, not to any display
//! cycle.

use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::context::PostContext;
use crate::error::{AblogError, Result};
use crate::generator;
use crate::model::Post;

pub struct Archive {
    batch: OnceCell<Arc<Vec<Post>>>,
    size: usize,
    shown: bool,
}

impl Archive {
    /// An archive of `size` entries. Nothing is generated until the batch is
    /// first read.
    pub fn new(size: usize) -> Self {
        Self {
            batch: OnceCell::new(),
            size,
            shown: false,
        }
    }

    /// Flip visibility; returns the new state. Hidden -> Visible -> Hidden,
    /// for the whole session.
    pub fn toggle(&mut self) -> bool {
        self.shown = !self.shown;
        self.shown
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    /// The archived posts, generating them on first access.
    pub fn batch(&self) -> &Arc<Vec<Post>> {
        self.batch
            .get_or_init(|| Arc::new(generator::sample_posts(self.size)))
    }

    /// Copy the 1-based `index`-th archived post into the live feed. The
    /// promoted entry is a fresh value (new id, new timestamp); the archive
    /// itself never changes.
    pub fn promote(&self, index: usize, posts: &PostContext) -> Result<Post> {
        let source = index
            .checked_sub(1)
            .and_then(|i| self.batch().get(i))
            .ok_or(AblogError::ArchiveEntryNotFound(index))?;
        let copy = source.duplicate();
        posts.add_post(copy.clone());
        Ok(copy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::PostStore;

    #[test]
    fn batch_is_generated_once_across_toggles() {
        let mut archive = Archive::new(50);
        let first = Arc::clone(archive.batch());
        for _ in 0..5 {
            archive.toggle();
        }
        let after = archive.batch();
        assert!(Arc::ptr_eq(&first, after));
        assert_eq!(after.len(), 50);
        assert_eq!(first.as_slice(), after.as_slice());
    }

    #[test]
    fn toggle_alternates_from_hidden() {
        let mut archive = Archive::new(1);
        assert!(!archive.is_shown());
        assert!(archive.toggle());
        assert!(!archive.toggle());
        assert!(archive.toggle());
    }

    #[test]
    fn promote_copies_into_the_live_feed() {
        let archive = Archive::new(3);
        let posts = PostContext::new(PostStore::new(Vec::new()));

        let promoted = archive.promote(2, &posts).unwrap();
        let snap = posts.snapshot();
        assert_eq!(snap.total_posts, 1);
        assert_eq!(snap.visible_posts[0], promoted);

        // Same text as the archived source, but a distinct entry.
        let source = &archive.batch()[1];
        assert_eq!(&snap.visible_posts[0], source);
        assert_ne!(snap.visible_posts[0].id, source.id);
        // The archive batch itself is untouched.
        assert_eq!(archive.batch().len(), 3);
    }

    #[test]
    fn promote_rejects_out_of_range_indexes() {
        let archive = Archive::new(2);
        let posts = PostContext::new(PostStore::new(Vec::new()));
        assert!(matches!(
            archive.promote(0, &posts),
            Err(AblogError::ArchiveEntryNotFound(0))
        ));
        assert!(matches!(
            archive.promote(3, &posts),
            Err(AblogError::ArchiveEntryNotFound(3))
        ));
        assert_eq!(posts.snapshot().total_posts, 0);
    }
}
