use crate::commands::{CmdMessage, CmdResult};
use crate::context::PostContext;
use crate::error::Result;
use crate::model::Post;

/// Publish a post to the top of the feed. The store enforces no
/// precondition here; the add form guards against empty input before
/// calling.
pub fn run(posts: &PostContext, title: &str, body: &str) -> Result<CmdResult> {
    let post = Post::new(title, body);
    posts.add_post(post.clone());

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Post published: {}",
        post.title
    )));
    result.affected_posts.push(post);
    Ok(result)
}
