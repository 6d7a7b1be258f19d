//! Shared-state mediation: [`PostContext`] and [`Provider`].
//!
//! Instead of an ambient lookup, consumers receive an explicit handle. The
//! handle funnels every mutation through the store's operations and
//! broadcasts a fresh [`Snapshot`] to subscribers after each effective
//! change (one the store reported as a change), so consumers only re-render
//! when the state they read actually moved.
//!
//! [`Provider`] models the provisioning scope: it is the one place contexts
//! are installed, and asking it for a context that was never installed fails
//! immediately with an error naming what is missing.

use std::sync::{Arc, RwLock};

use crate::error::{AblogError, Result};
use crate::model::Post;
use crate::store::{PostStore, Snapshot};

type Subscriber = Box<dyn Fn(&Snapshot) + Send + Sync>;

/// Cloneable handle to the shared post store. Clones refer to the same
/// state and the same subscriber list.
#[derive(Clone)]
pub struct PostContext {
    store: Arc<RwLock<PostStore>>,
    subscribers: Arc<RwLock<Vec<Subscriber>>>,
}

impl std::fmt::Debug for PostContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostContext").finish_non_exhaustive()
    }
}

impl PostContext {
    pub fn new(store: PostStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            subscribers: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn add_post(&self, post: Post) {
        let changed = self.store.write().unwrap().add_post(post);
        if changed {
            self.notify();
        }
    }

    pub fn clear_posts(&self) {
        let changed = self.store.write().unwrap().clear_posts();
        if changed {
            self.notify();
        }
    }

    pub fn set_search_query(&self, query: &str) {
        let changed = self.store.write().unwrap().set_search_query(query);
        if changed {
            self.notify();
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        self.store.read().unwrap().snapshot()
    }

    /// Register a change listener. The callback observes the snapshot taken
    /// after the triggering mutation completed, derived view included;
    /// subscribers never see a half-applied update.
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn(&Snapshot) + Send + Sync + 'static,
    {
        self.subscribers.write().unwrap().push(Box::new(callback));
    }

    fn notify(&self) {
        // The write lock is released before callbacks run; a subscriber may
        // read the context again without deadlocking.
        let snapshot = self.snapshot();
        for subscriber in self.subscribers.read().unwrap().iter() {
            subscriber(&snapshot);
        }
    }
}

/// Explicit provisioning scope for shared contexts.
#[derive(Default)]
pub struct Provider {
    posts: Option<PostContext>,
}

impl Provider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn provide_posts(&mut self, context: PostContext) {
        self.posts = Some(context);
    }

    /// The post context, or a loud failure when used outside the scope that
    /// installed one.
    pub fn posts(&self) -> Result<&PostContext> {
        self.posts
            .as_ref()
            .ok_or(AblogError::ContextMissing("PostContext"))
    }
}
