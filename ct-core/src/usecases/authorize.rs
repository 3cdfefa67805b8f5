use super::prelude::*;
use crate::authorization::{self, Action, Target, ThreadSettings};

/// The loaded subjects of a permitted comment action.
#[rustfmt::skip]
#[derive(Debug, Clone)]
pub struct AuthorizedAction {
    pub user    : User,
    pub thread  : Thread,
    pub comment : Option<Comment>,
}

/// What a comment action refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionSubject<'a> {
    /// Id of the thread for `new` and `create`
    Thread(&'a str),
    /// Id of an existing comment for all other actions
    Comment(&'a str),
}

/// Loads the thread, the comment and the user and checks
/// if the user is allowed to perform the action.
///
/// Unknown users are treated like anonymous users.
pub fn authorize_comment_action<R>(
    repo: &R,
    settings: &ThreadSettings,
    action: Action,
    user_id: Option<&str>,
    subject: ActionSubject<'_>,
) -> Result<AuthorizedAction>
where
    R: CommentRepo + ThreadRepo + UserRepo,
{
    let (thread, comment) = match subject {
        ActionSubject::Thread(thread_id) => (repo.get_thread(thread_id)?, None),
        ActionSubject::Comment(comment_id) => {
            let comment = repo.load_comment(comment_id)?;
            (repo.get_thread(comment.thread_id.as_str())?, Some(comment))
        }
    };
    let latest_comment_id = if comment.is_some() {
        repo.latest_comment_of_thread(thread.id.as_str())?
            .map(|c| c.id)
    } else {
        None
    };
    let user = match user_id {
        Some(id) => repo.try_get_user(id)?,
        None => None,
    };
    let target = Target {
        thread: &thread,
        comment: comment.as_ref(),
        latest_comment_id: latest_comment_id.as_ref(),
    };
    if let Err(denial) = authorization::authorize(settings, action, user.as_ref(), target) {
        log::debug!(
            "Denied {action} in thread {} for {}: {denial}",
            thread.id,
            user_id.unwrap_or("anonymous")
        );
        return Err(denial.into());
    }
    let Some(user) = user else {
        // Every permitted action requires a user
        return Err(authorization::Denial::Unauthenticated.into());
    };
    Ok(AuthorizedAction {
        user,
        thread,
        comment,
    })
}
