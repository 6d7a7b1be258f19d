//! # ablog Architecture
//!
//! ablog is a **UI-agnostic micro-blog sandbox library** with a terminal
//! client on top. The interesting part is the state model, not the screen:
//! a single in-memory store of posts with a derived, memoized search view,
//! explicit shared-state mediation, and a lazily generated archive pool.
//!
//! ## Layers
//!
//! ```text
//! CLI layer (main.rs + bin-local args/print/styles)
//!   - reads lines, formats output; the only place that knows about the
//!     terminal
//! API layer (api.rs)
//!   - thin facade; resolves contexts via the Provider, returns structured
//!     Result types
//! Command layer (commands/*.rs)
//!   - business logic per operation, no I/O assumptions
//! State layer (store.rs, context.rs, archive.rs)
//!   - PostStore: canonical posts + search query + memoized filtered view
//!   - PostContext: shared handle that broadcasts snapshots to subscribers
//!   - Archive: once-generated batch of promotable posts
//! ```
//!
//! ## State-sharing contract
//!
//! All session state is owned by [`store::PostStore`] and reached through
//! [`context::PostContext`]; consumers never hold a mutable alias. Mutation
//! happens synchronously inside whatever handler triggered it, the derived
//! view is recomputed before anyone can observe the change, and subscribers
//! are then notified with the fresh [`store::Snapshot`]. A consumer running
//! outside the scope that provided the context gets an immediate error, not
//! an empty render.
//!
//! ## Module overview
//!
//! - [`api`]: the facade, entry point for all operations
//! - [`commands`]: business logic for each command
//! - [`store`]: the post store and its snapshot type
//! - [`context`]: shared-state handle, subscriptions, and the Provider
//! - [`archive`]: the lazily generated archive batch
//! - [`generator`]: synthetic post generator
//! - [`model`]: the `Post` value type
//! - [`config`]: session defaults in `.ablog/config.json`
//! - [`error`]: error types

pub mod api;
pub mod archive;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod generator;
pub mod model;
pub mod store;
