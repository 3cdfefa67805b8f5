//! In-memory storage of comment threads.
//!
//! Readers share the current state. A writer gets exclusive access
//! and works on a private copy of the state that replaces the shared
//! state only if the whole transaction succeeds.

use ct_core::{entities::*, repositories as repo, usecases as uc};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::{cell::RefCell, sync::Arc};

mod repo_impl;

#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
struct State {
    threads       : Vec<Thread>,
    // Ordered by creation
    comments      : Vec<Comment>,
    users         : Vec<User>,
    subscriptions : Vec<Subscription>,
    votes         : Vec<Vote>,
}

type SharedState = Arc<RwLock<State>>;

pub struct DbReadOnly<'a> {
    state: RwLockReadGuard<'a, State>,
}

impl<'a> DbReadOnly<'a> {
    fn new(state: &'a SharedState) -> Self {
        Self {
            state: state.read(),
        }
    }
}

pub struct DbReadWrite<'a> {
    state: RwLockWriteGuard<'a, State>,
}

/// Staged changes of a single transaction.
pub struct DbConnection {
    state: RefCell<State>,
}

impl DbConnection {
    fn new(state: State) -> Self {
        Self {
            state: RefCell::new(state),
        }
    }
}

impl<'a> DbReadWrite<'a> {
    fn new(state: &'a SharedState) -> Self {
        Self {
            state: state.write(),
        }
    }

    /// Runs `f` on a copy of the current state.
    ///
    /// All changes are committed if `f` succeeds and discarded otherwise.
    pub fn transaction<T, F, E>(&mut self, f: F) -> Result<T, uc::Error>
    where
        F: FnOnce(&DbConnection) -> Result<T, E>,
        E: Into<uc::Error>,
    {
        let conn = DbConnection::new(self.state.clone());
        match f(&conn) {
            Ok(res) => {
                *self.state = conn.state.into_inner();
                Ok(res)
            }
            Err(err) => {
                let err = err.into();
                log::debug!("Rolling back transaction: {err}");
                Err(err)
            }
        }
    }
}

#[derive(Clone, Default)]
pub struct Connections {
    // Only a single writer is admitted at a time while
    // multiple readers can access the state concurrently.
    state: SharedState,
}

impl Connections {
    pub fn init() -> Self {
        log::info!("Initializing in-memory database");
        Self::default()
    }

    pub fn shared(&self) -> DbReadOnly<'_> {
        DbReadOnly::new(&self.state)
    }

    pub fn exclusive(&self) -> DbReadWrite<'_> {
        DbReadWrite::new(&self.state)
    }
}

fn read_only_error() -> repo::Error {
    repo::Error::Other(anyhow::anyhow!("Write access on a read-only connection"))
}
