use super::*;

impl CommentRepo for DbConnection {
    fn create_comment(&self, comment: Comment) -> Result<()> {
        create_comment(&mut self.state.borrow_mut(), comment)
    }
    fn update_comment(&self, comment: &Comment) -> Result<()> {
        update_comment(&mut self.state.borrow_mut(), comment)
    }
    fn load_comment(&self, id: &str) -> Result<Comment> {
        load_comment(&self.state.borrow(), id)
    }
    fn load_comments_of_thread(&self, thread_id: &str) -> Result<Vec<Comment>> {
        Ok(load_comments_of_thread(&self.state.borrow(), thread_id))
    }
    fn latest_comment_of_thread(&self, thread_id: &str) -> Result<Option<Comment>> {
        Ok(latest_comment_of_thread(&self.state.borrow(), thread_id))
    }
}

impl CommentRepo for DbReadOnly<'_> {
    fn create_comment(&self, _comment: Comment) -> Result<()> {
        Err(read_only_error())
    }
    fn update_comment(&self, _comment: &Comment) -> Result<()> {
        Err(read_only_error())
    }
    fn load_comment(&self, id: &str) -> Result<Comment> {
        load_comment(&self.state, id)
    }
    fn load_comments_of_thread(&self, thread_id: &str) -> Result<Vec<Comment>> {
        Ok(load_comments_of_thread(&self.state, thread_id))
    }
    fn latest_comment_of_thread(&self, thread_id: &str) -> Result<Option<Comment>> {
        Ok(latest_comment_of_thread(&self.state, thread_id))
    }
}

fn create_comment(state: &mut State, comment: Comment) -> Result<()> {
    if state.comments.iter().any(|c| c.id == comment.id) {
        return Err(repo::Error::AlreadyExists);
    }
    if !state.threads.iter().any(|t| t.id == comment.thread_id) {
        log::warn!(
            "Cannot create comment {} in unknown thread {}",
            comment.id,
            comment.thread_id
        );
        return Err(repo::Error::NotFound);
    }
    state.comments.push(comment);
    Ok(())
}

fn update_comment(state: &mut State, comment: &Comment) -> Result<()> {
    let stored = state
        .comments
        .iter_mut()
        .find(|c| c.id == comment.id)
        .ok_or(repo::Error::NotFound)?;
    debug_assert_eq!(stored.thread_id, comment.thread_id);
    debug_assert_eq!(stored.creator_id, comment.creator_id);
    *stored = comment.clone();
    Ok(())
}

fn load_comment(state: &State, id: &str) -> Result<Comment> {
    state
        .comments
        .iter()
        .find(|c| c.id.as_str() == id)
        .cloned()
        .ok_or(repo::Error::NotFound)
}

fn comments_of_thread<'s>(
    state: &'s State,
    thread_id: &'s str,
) -> impl DoubleEndedIterator<Item = &'s Comment> + 's {
    state
        .comments
        .iter()
        .filter(move |c| c.thread_id.as_str() == thread_id)
}

fn load_comments_of_thread(state: &State, thread_id: &str) -> Vec<Comment> {
    comments_of_thread(state, thread_id).cloned().collect()
}

fn latest_comment_of_thread(state: &State, thread_id: &str) -> Option<Comment> {
    comments_of_thread(state, thread_id).next_back().cloned()
}
