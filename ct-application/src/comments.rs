use super::*;
use authorization::{Action, ThreadSettings};
use ct_core::gateways::notify::{NotificationEvent, NotificationGateway};
use usecases::ActionSubject;

/// Checks if the user is allowed to write a new comment.
pub fn new_comment(
    connections: &inmem::Connections,
    settings: &ThreadSettings,
    user_id: Option<&str>,
    thread_id: &str,
) -> Result<Thread> {
    let authorized = usecases::authorize_comment_action(
        &connections.shared(),
        settings,
        Action::New,
        user_id,
        ActionSubject::Thread(thread_id),
    )?;
    Ok(authorized.thread)
}

pub fn create_comment(
    connections: &inmem::Connections,
    notify: &dyn NotificationGateway,
    settings: &ThreadSettings,
    user_id: Option<&str>,
    thread_id: &str,
    body: String,
) -> Result<Comment> {
    let (thread, comment, creator) = connections.exclusive().transaction(|conn| {
        let usecases::AuthorizedAction { user, thread, .. } = usecases::authorize_comment_action(
            conn,
            settings,
            Action::Create,
            user_id,
            ActionSubject::Thread(thread_id),
        )?;
        let new_comment = usecases::NewComment {
            thread_id: thread.id.clone(),
            creator_id: user.id.clone(),
            body,
        };
        let comment = usecases::create_comment(conn, new_comment).map_err(|err| {
            if err.is_validation() {
                debug!("Rejected new comment of {}: {err}", user.id);
            } else {
                warn!("Failed to create comment: {err}");
            }
            err
        })?;
        Ok::<_, usecases::Error>((thread, comment, user))
    })?;

    // Send subscription e-mails
    if let Err(err) = notify_comment_created(connections, notify, &thread, &comment, &creator) {
        error!(
            "Failed to send notifications for new comment {}: {err}",
            comment.id
        );
    }

    Ok(comment)
}

fn notify_comment_created(
    connections: &inmem::Connections,
    notify: &dyn NotificationGateway,
    thread: &Thread,
    comment: &Comment,
    creator: &User,
) -> Result<()> {
    let email_addresses = {
        let conn = connections.shared();
        usecases::comment_notification_recipients(&conn, thread.id.as_str(), &creator.id)?
    };
    if email_addresses.is_empty() {
        debug!("No one to notify about new comment {}", comment.id);
        return Ok(());
    }
    notify.notify(NotificationEvent::CommentCreated {
        thread,
        comment,
        creator,
        email_addresses: &email_addresses,
    });
    Ok(())
}

/// Checks if the user is allowed to edit the comment.
pub fn edit_comment(
    connections: &inmem::Connections,
    settings: &ThreadSettings,
    user_id: Option<&str>,
    comment_id: &str,
) -> Result<Comment> {
    let authorized = usecases::authorize_comment_action(
        &connections.shared(),
        settings,
        Action::Edit,
        user_id,
        ActionSubject::Comment(comment_id),
    )?;
    authorized
        .comment
        .ok_or_else(|| anyhow::anyhow!("Missing comment {comment_id}").into())
}

pub fn update_comment(
    connections: &inmem::Connections,
    settings: &ThreadSettings,
    user_id: Option<&str>,
    comment_id: &str,
    body: String,
) -> Result<Comment> {
    Ok(connections.exclusive().transaction(|conn| {
        let authorized = usecases::authorize_comment_action(
            conn,
            settings,
            Action::Update,
            user_id,
            ActionSubject::Comment(comment_id),
        )?;
        usecases::update_comment(conn, comment_id, &authorized.user.id, body)
    })?)
}

pub fn delete_comment(
    connections: &inmem::Connections,
    settings: &ThreadSettings,
    user_id: Option<&str>,
    comment_id: &str,
) -> Result<Comment> {
    Ok(connections.exclusive().transaction(|conn| {
        let authorized = usecases::authorize_comment_action(
            conn,
            settings,
            Action::Delete,
            user_id,
            ActionSubject::Comment(comment_id),
        )?;
        usecases::delete_comment(conn, comment_id, &authorized.user.id)
    })?)
}

pub fn undelete_comment(
    connections: &inmem::Connections,
    settings: &ThreadSettings,
    user_id: Option<&str>,
    comment_id: &str,
) -> Result<Comment> {
    Ok(connections.exclusive().transaction(|conn| {
        let authorized = usecases::authorize_comment_action(
            conn,
            settings,
            Action::Undelete,
            user_id,
            ActionSubject::Comment(comment_id),
        )?;
        usecases::undelete_comment(conn, comment_id, &authorized.user.id)
    })?)
}

/// Upvotes, downvotes or unvotes a comment.
///
/// Returns the comment together with its current votes.
pub fn vote_comment(
    connections: &inmem::Connections,
    settings: &ThreadSettings,
    user_id: Option<&str>,
    comment_id: &str,
    action: Action,
) -> Result<usecases::CommentWithVotes> {
    debug_assert!(action.is_vote());
    Ok(connections.exclusive().transaction(|conn| {
        use ct_core::repositories::VoteLedger as _;
        let usecases::AuthorizedAction { user, comment, .. } =
            usecases::authorize_comment_action(
                conn,
                settings,
                action,
                user_id,
                ActionSubject::Comment(comment_id),
            )?;
        let changed = match action {
            Action::Upvote => usecases::upvote_comment(conn, comment_id, &user.id)?,
            Action::Downvote => usecases::downvote_comment(conn, comment_id, &user.id)?,
            _ => usecases::unvote_comment(conn, comment_id, &user.id)?,
        };
        if !changed {
            debug!("Vote of {} on comment {comment_id} unchanged", user.id);
        }
        let comment = comment.ok_or(ct_core::repositories::Error::NotFound)?;
        let votes = conn.tally(comment_id)?;
        Ok::<_, usecases::Error>(usecases::CommentWithVotes { comment, votes })
    })?)
}
