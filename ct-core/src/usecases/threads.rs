use super::prelude::*;
use crate::authorization::{authorize_thread_action, ThreadAction};

pub fn create_thread<R>(repo: &R, subject: String) -> Result<Thread>
where
    R: ThreadRepo,
{
    let thread = Thread {
        id: Id::new(),
        subject,
        created_at: Timestamp::now(),
        closed_at: None,
        closed_by: None,
    };
    log::info!("Creating thread {} for '{}'", thread.id, thread.subject);
    repo.create_thread(thread.clone())?;
    Ok(thread)
}

pub fn close_thread<R>(repo: &R, thread_id: &str, user: &User) -> Result<Thread>
where
    R: ThreadRepo,
{
    let mut thread = repo.get_thread(thread_id)?;
    authorize_thread_action(ThreadAction::Close, Some(user), &thread)?;
    if !thread.close(user.id.clone(), Timestamp::now()) {
        return Err(Error::AlreadyClosed);
    }
    log::info!("Closing thread {} by {}", thread.id, user.id);
    repo.update_thread(&thread)?;
    Ok(thread)
}

pub fn reopen_thread<R>(repo: &R, thread_id: &str, user: &User) -> Result<Thread>
where
    R: ThreadRepo,
{
    let mut thread = repo.get_thread(thread_id)?;
    authorize_thread_action(ThreadAction::Reopen, Some(user), &thread)?;
    if !thread.reopen() {
        return Err(Error::NotClosed);
    }
    log::info!("Reopening thread {} by {}", thread.id, user.id);
    repo.update_thread(&thread)?;
    Ok(thread)
}
