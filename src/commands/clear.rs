use crate::commands::{CmdMessage, CmdResult};
use crate::context::PostContext;
use crate::error::Result;

/// Empty the feed. Safe to repeat; a second clear is a quiet no-op at the
/// store level.
pub fn run(posts: &PostContext) -> Result<CmdResult> {
    posts.clear_posts();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("All posts cleared."));
    Ok(result)
}
