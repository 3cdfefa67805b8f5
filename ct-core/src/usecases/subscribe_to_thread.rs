use super::prelude::*;
use crate::authorization::{authorize_thread_action, ThreadAction};

/// Returns `false` if the user has already been subscribed.
pub fn subscribe_to_thread<R>(repo: &R, thread_id: &str, user: &User) -> Result<bool>
where
    R: ThreadRepo + SubscriptionRepo,
{
    let thread = repo.get_thread(thread_id)?;
    authorize_thread_action(ThreadAction::Subscribe, Some(user), &thread)?;
    let subscription = Subscription {
        thread_id: thread.id,
        user_id: user.id.clone(),
    };
    let subscribed = repo.subscribe(&subscription)?;
    if subscribed {
        log::info!("User {} subscribed to thread {}", user.id, thread_id);
    }
    Ok(subscribed)
}

/// Returns `false` if the user has not been subscribed.
pub fn unsubscribe_from_thread<R>(repo: &R, thread_id: &str, user: &User) -> Result<bool>
where
    R: ThreadRepo + SubscriptionRepo,
{
    let thread = repo.get_thread(thread_id)?;
    authorize_thread_action(ThreadAction::Unsubscribe, Some(user), &thread)?;
    let subscription = Subscription {
        thread_id: thread.id,
        user_id: user.id.clone(),
    };
    let unsubscribed = repo.unsubscribe(&subscription)?;
    if unsubscribed {
        log::info!("User {} unsubscribed from thread {}", user.id, thread_id);
    }
    Ok(unsubscribed)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use crate::authorization::Denial;
    use ct_entities::builders::*;

    fn mock_db(thread: Thread) -> MockDb {
        let db = MockDb::default();
        db.threads.borrow_mut().push(thread);
        db
    }

    #[test]
    fn subscribe_once() {
        let db = mock_db(Thread::build().id("thread").finish());
        let reader = User::build().role(Role::Reader).finish();
        assert!(subscribe_to_thread(&db, "thread", &reader).unwrap());
        assert!(!subscribe_to_thread(&db, "thread", &reader).unwrap());
        assert_eq!(
            vec![reader.id.clone()],
            db.subscriber_ids_of_thread("thread").unwrap()
        );
        assert!(unsubscribe_from_thread(&db, "thread", &reader).unwrap());
        assert!(!unsubscribe_from_thread(&db, "thread", &reader).unwrap());
        assert!(db.subscriptions.borrow().is_empty());
    }

    #[test]
    fn guests_cannot_subscribe() {
        let db = mock_db(Thread::build().id("thread").finish());
        let guest = User::build().finish();
        assert!(matches!(
            subscribe_to_thread(&db, "thread", &guest),
            Err(Error::Forbidden(Denial::NoReadPermission))
        ));
        assert!(db.subscriptions.borrow().is_empty());
    }

    #[test]
    fn leave_closed_thread() {
        let db = mock_db(Thread::build().id("thread").finish());
        let reader = User::build().role(Role::Reader).finish();
        subscribe_to_thread(&db, "thread", &reader).unwrap();
        db.threads.borrow_mut()[0].closed_at = Some(Timestamp::now());
        assert!(matches!(
            subscribe_to_thread(&db, "thread", &User::build().role(Role::Reader).finish()),
            Err(Error::Forbidden(Denial::ThreadClosed))
        ));
        assert!(unsubscribe_from_thread(&db, "thread", &reader).unwrap());
    }
}
