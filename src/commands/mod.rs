//! Business logic for each session command. Command functions operate on
//! the shared contexts and return structured [`CmdResult`] values; nothing
//! in here writes to the terminal.

use crate::config::BlogConfig;
use crate::model::Post;

pub mod add;
pub mod archive;
pub mod clear;
pub mod config;
pub mod list;
pub mod search;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A post paired with its 1-based position in whatever listing produced it.
#[derive(Debug, Clone)]
pub struct DisplayPost {
    pub index: usize,
    pub post: Post,
}

/// Assigns 1-based display indexes. The list order is the canonical order
/// (newest first), so no sorting happens here.
pub fn index_posts(posts: &[Post]) -> Vec<DisplayPost> {
    posts
        .iter()
        .enumerate()
        .map(|(i, post)| DisplayPost {
            index: i + 1,
            post: post.clone(),
        })
        .collect()
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_posts: Vec<Post>,
    pub listed_posts: Vec<DisplayPost>,
    pub config: Option<BlogConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_posts(mut self, posts: Vec<DisplayPost>) -> Self {
        self.listed_posts = posts;
        self
    }

    pub fn with_config(mut self, config: BlogConfig) -> Self {
        self.config = Some(config);
        self
    }
}
