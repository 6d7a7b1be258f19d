use crate::archive::Archive;
use crate::commands::{index_posts, CmdMessage, CmdResult};
use crate::context::PostContext;
use crate::error::Result;

/// Flip archive visibility. When the panel becomes visible the batch is
/// listed (generating it on the very first show); hiding it lists nothing.
pub fn toggle(archive: &mut Archive) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if archive.toggle() {
        let batch = archive.batch();
        result = result.with_listed_posts(index_posts(batch));
        result.add_message(CmdMessage::info(format!(
            "Showing {} archived posts.",
            batch.len()
        )));
    } else {
        result.add_message(CmdMessage::info("Archive hidden."));
    }
    Ok(result)
}

/// Promote the selected archived post into the live feed as a new post.
pub fn promote(archive: &Archive, posts: &PostContext, index: usize) -> Result<CmdResult> {
    let promoted = archive.promote(index, posts)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Archived post added as new post: {}",
        promoted.title
    )));
    result.affected_posts.push(promoted);
    Ok(result)
}
