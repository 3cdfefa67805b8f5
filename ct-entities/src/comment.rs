use thiserror::Error;

use crate::{id::*, time::*};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id         : Id,
    pub thread_id  : Id,
    pub creator_id : Id,
    /// The last user who edited, deleted or undeleted the comment
    pub editor_id  : Option<Id>,
    pub body       : String,
    pub state      : CommentState,
    pub created_at : Timestamp,
    pub updated_at : Option<Timestamp>,
}

/// Soft-delete state of a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommentState {
    #[default]
    Active,
    Deleted {
        at: Timestamp,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StateTransitionError {
    #[error("The comment has already been deleted")]
    AlreadyDeleted,
    #[error("The comment has not been deleted")]
    NotDeleted,
}

impl Comment {
    pub fn is_deleted(&self) -> bool {
        matches!(self.state, CommentState::Deleted { .. })
    }

    pub fn is_created_by(&self, user_id: &Id) -> bool {
        &self.creator_id == user_id
    }

    pub fn edit(&mut self, body: String, editor_id: Id, at: Timestamp) {
        self.body = body;
        self.editor_id = Some(editor_id);
        self.updated_at = Some(at);
    }

    pub fn delete_by(
        &mut self,
        editor_id: Id,
        at: Timestamp,
    ) -> Result<(), StateTransitionError> {
        if self.is_deleted() {
            return Err(StateTransitionError::AlreadyDeleted);
        }
        self.state = CommentState::Deleted { at };
        self.editor_id = Some(editor_id);
        self.updated_at = Some(at);
        Ok(())
    }

    pub fn undelete_by(
        &mut self,
        editor_id: Id,
        at: Timestamp,
    ) -> Result<(), StateTransitionError> {
        if !self.is_deleted() {
            return Err(StateTransitionError::NotDeleted);
        }
        self.state = CommentState::Active;
        self.editor_id = Some(editor_id);
        self.updated_at = Some(at);
        Ok(())
    }
}
