use crate::commands::{index_posts, CmdMessage, CmdResult};
use crate::context::PostContext;
use crate::error::Result;

/// Set the search query and return the filtered feed. An empty term resets
/// the filter.
pub fn run(posts: &PostContext, term: &str) -> Result<CmdResult> {
    posts.set_search_query(term);
    let snapshot = posts.snapshot();

    let mut result =
        CmdResult::default().with_listed_posts(index_posts(&snapshot.visible_posts));
    if !term.is_empty() && result.listed_posts.is_empty() {
        result.add_message(CmdMessage::info(format!("No posts match '{}'.", term)));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Post;
    use crate::store::PostStore;

    fn seeded() -> PostContext {
        PostContext::new(PostStore::new(vec![
            Post::new("Hot Syntax", "Deploy bandwidth"),
            Post::new("Virtual Driver", "Parse matrix"),
        ]))
    }

    #[test]
    fn lists_only_matching_posts() {
        let posts = seeded();
        let result = run(&posts, "matrix").unwrap();
        assert_eq!(result.listed_posts.len(), 1);
        assert_eq!(result.listed_posts[0].index, 1);
        assert_eq!(result.listed_posts[0].post.title, "Virtual Driver");
    }

    #[test]
    fn empty_term_resets_the_filter() {
        let posts = seeded();
        run(&posts, "matrix").unwrap();
        let result = run(&posts, "").unwrap();
        assert_eq!(result.listed_posts.len(), 2);
        assert_eq!(posts.snapshot().search_query, "");
    }

    #[test]
    fn reports_when_nothing_matches() {
        let posts = seeded();
        let result = run(&posts, "nonexistent").unwrap();
        assert!(result.listed_posts.is_empty());
        assert_eq!(result.messages.len(), 1);
    }
}
