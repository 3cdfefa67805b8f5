//! Pure decision procedures: given a user and a thread (and possibly a
//! comment) decide whether an action is permitted.
//!
//! Nothing in here has side effects. The callers are expected to check
//! the decision *before* touching any state.

pub mod comment;
pub mod settings;
pub mod thread;

pub use self::{comment::*, settings::*, thread::*};

use ct_entities::user::User;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Denial {
    #[error("not signed in")]
    Unauthenticated,
    #[error("missing read permission")]
    NoReadPermission,
    #[error("the thread is closed")]
    ThreadClosed,
    #[error("no comment given")]
    MissingComment,
    #[error("the comment belongs to another thread")]
    ForeignComment,
    #[error("the comment has been deleted")]
    CommentDeleted,
    #[error("comments cannot be voted on by their creator")]
    OwnComment,
    #[error("voting is disabled")]
    VotingDisabled,
    #[error("neither the creator nor a permitted moderator")]
    NotPermitted,
}

pub type Result<T> = std::result::Result<T, Denial>;

/// Every action requires a signed in user with read permission.
fn authorize_reader(user: Option<&User>) -> Result<&User> {
    let user = user.ok_or(Denial::Unauthenticated)?;
    if !user.capabilities.read {
        return Err(Denial::NoReadPermission);
    }
    Ok(user)
}
