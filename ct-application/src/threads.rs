use super::*;
use ct_core::repositories::UserRepo;

pub fn create_thread(connections: &inmem::Connections, subject: String) -> Result<Thread> {
    Ok(connections
        .exclusive()
        .transaction(|conn| usecases::create_thread(conn, subject))?)
}

pub fn close_thread(
    connections: &inmem::Connections,
    user_id: Option<&str>,
    thread_id: &str,
) -> Result<Thread> {
    Ok(connections.exclusive().transaction(|conn| {
        let user = load_signed_in_user(conn, user_id)?;
        usecases::close_thread(conn, thread_id, &user)
    })?)
}

pub fn reopen_thread(
    connections: &inmem::Connections,
    user_id: Option<&str>,
    thread_id: &str,
) -> Result<Thread> {
    Ok(connections.exclusive().transaction(|conn| {
        let user = load_signed_in_user(conn, user_id)?;
        usecases::reopen_thread(conn, thread_id, &user)
    })?)
}

pub fn subscribe_to_thread(
    connections: &inmem::Connections,
    user_id: Option<&str>,
    thread_id: &str,
) -> Result<bool> {
    Ok(connections.exclusive().transaction(|conn| {
        let user = load_signed_in_user(conn, user_id)?;
        usecases::subscribe_to_thread(conn, thread_id, &user)
    })?)
}

pub fn unsubscribe_from_thread(
    connections: &inmem::Connections,
    user_id: Option<&str>,
    thread_id: &str,
) -> Result<bool> {
    Ok(connections.exclusive().transaction(|conn| {
        let user = load_signed_in_user(conn, user_id)?;
        usecases::unsubscribe_from_thread(conn, thread_id, &user)
    })?)
}

pub fn load_thread_comments(
    connections: &inmem::Connections,
    thread_id: &str,
) -> Result<Vec<usecases::CommentWithVotes>> {
    Ok(usecases::load_thread_comments(
        &connections.shared(),
        thread_id,
    )?)
}

fn load_signed_in_user<R>(
    repo: &R,
    user_id: Option<&str>,
) -> std::result::Result<User, usecases::Error>
where
    R: UserRepo,
{
    let user = match user_id {
        Some(id) => repo.try_get_user(id)?,
        None => None,
    };
    user.ok_or_else(|| authorization::Denial::Unauthenticated.into())
}
