use crate::{authorization::Denial, repositories};
use ct_entities::comment::StateTransitionError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Empty comment")]
    EmptyComment,
    #[error("Duplicate comment detected; slow down")]
    DoublePost,
    #[error("This comment has already been deleted")]
    AlreadyDeleted,
    #[error("This comment is not deleted")]
    NotDeleted,
    #[error("This comment has been deleted")]
    CommentDeleted,
    #[error("This thread is closed")]
    ThreadClosed,
    #[error("This thread has already been closed")]
    AlreadyClosed,
    #[error("This thread is not closed")]
    NotClosed,
    #[error("This is not allowed: {0}")]
    Forbidden(#[from] Denial),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl Error {
    /// Validation errors are reported back to the user
    /// alongside the submitted comment.
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::EmptyComment
                | Self::DoublePost
                | Self::AlreadyDeleted
                | Self::NotDeleted
                | Self::CommentDeleted
                | Self::ThreadClosed
                | Self::AlreadyClosed
                | Self::NotClosed
        )
    }

    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Repo(repositories::Error::NotFound))
    }
}

impl From<StateTransitionError> for Error {
    fn from(from: StateTransitionError) -> Self {
        match from {
            StateTransitionError::AlreadyDeleted => Self::AlreadyDeleted,
            StateTransitionError::NotDeleted => Self::NotDeleted,
        }
    }
}
