use super::prelude::*;

#[rustfmt::skip]
#[derive(Debug, Clone)]
pub struct NewComment {
    pub thread_id  : Id,
    pub creator_id : Id,
    pub body       : String,
}

pub fn create_comment<R>(repo: &R, new_comment: NewComment) -> Result<Comment>
where
    R: CommentRepo + ThreadRepo,
{
    let NewComment {
        thread_id,
        creator_id,
        body,
    } = new_comment;
    if super::is_empty_body(&body) {
        return Err(Error::EmptyComment);
    }
    let thread = repo.get_thread(thread_id.as_str())?;
    if thread.is_closed() {
        return Err(Error::ThreadClosed);
    }
    if let Some(latest) = repo.latest_comment_of_thread(thread.id.as_str())? {
        if latest.body == body {
            log::debug!(
                "Rejecting double post of user {} in thread {}",
                creator_id,
                thread.id
            );
            return Err(Error::DoublePost);
        }
    }
    let comment = Comment {
        id: Id::new(),
        thread_id: thread.id,
        creator_id,
        editor_id: None,
        body,
        state: CommentState::Active,
        created_at: Timestamp::now(),
        updated_at: None,
    };
    log::info!(
        "Creating comment {} in thread {}",
        comment.id,
        comment.thread_id
    );
    repo.create_comment(comment.clone())?;
    Ok(comment)
}
