use super::prelude::*;

/// E-mail addresses of all subscribers of a thread except
/// the creator of the new comment.
pub fn comment_notification_recipients<R>(
    repo: &R,
    thread_id: &str,
    creator_id: &Id,
) -> Result<Vec<EmailAddress>>
where
    R: SubscriptionRepo + UserRepo,
{
    let subscriber_ids = repo.subscriber_ids_of_thread(thread_id)?;
    let recipient_ids: Vec<_> = subscriber_ids
        .iter()
        .filter(|id| *id != creator_id)
        .map(Id::as_str)
        .collect();
    if recipient_ids.is_empty() {
        return Ok(vec![]);
    }
    let recipients = repo
        .get_users(&recipient_ids)?
        .into_iter()
        .map(|u| {
            let display_name = u.name;
            let email = u.email;
            if display_name.is_empty() || email.display_name().is_some() {
                email
            } else {
                email.with_display_name(display_name)
            }
        })
        .collect();
    Ok(recipients)
}
