use super::prelude::*;

/// Replaces the body of a comment.
///
/// The editor is always recorded, even if it is the creator.
pub fn update_comment<R>(repo: &R, comment_id: &str, editor_id: &Id, body: String) -> Result<Comment>
where
    R: CommentRepo,
{
    if super::is_empty_body(&body) {
        return Err(Error::EmptyComment);
    }
    let mut comment = repo.load_comment(comment_id)?;
    if comment.is_deleted() {
        return Err(Error::CommentDeleted);
    }
    comment.edit(body, editor_id.clone(), Timestamp::now());
    log::info!("Updating comment {} by {}", comment.id, editor_id);
    repo.update_comment(&comment)?;
    Ok(comment)
}
