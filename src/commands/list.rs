use crate::commands::{index_posts, CmdMessage, CmdResult};
use crate::context::PostContext;
use crate::error::Result;

/// List the visible feed: the filtered view when a search is active, the
/// whole feed otherwise.
pub fn run(posts: &PostContext) -> Result<CmdResult> {
    let snapshot = posts.snapshot();
    let mut result =
        CmdResult::default().with_listed_posts(index_posts(&snapshot.visible_posts));
    if !snapshot.search_query.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "Filtering by '{}' ('search' with no term shows everything).",
            snapshot.search_query
        )));
    }
    Ok(result)
}
