use crate::{id::Id, time::Timestamp};

/// A commentable subject.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thread {
    pub id         : Id,
    /// Reference to the commented application record, e.g. `post/42`
    pub subject    : String,
    pub created_at : Timestamp,
    pub closed_at  : Option<Timestamp>,
    pub closed_by  : Option<Id>,
}

impl Thread {
    pub fn is_open(&self) -> bool {
        self.closed_at.is_none()
    }

    pub fn is_closed(&self) -> bool {
        !self.is_open()
    }

    /// Returns `false` if the thread has already been closed.
    pub fn close(&mut self, by: Id, at: Timestamp) -> bool {
        if self.is_closed() {
            return false;
        }
        self.closed_at = Some(at);
        self.closed_by = Some(by);
        true
    }

    /// Returns `false` if the thread is open.
    pub fn reopen(&mut self) -> bool {
        if self.is_open() {
            return false;
        }
        self.closed_at = None;
        self.closed_by = None;
        true
    }
}
