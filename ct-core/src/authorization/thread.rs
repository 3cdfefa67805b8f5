use super::*;
use ct_entities::thread::Thread;
use strum::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ThreadAction {
    Close,
    Reopen,
    Subscribe,
    Unsubscribe,
}

pub fn authorize_thread_action(
    action: ThreadAction,
    user: Option<&User>,
    thread: &Thread,
) -> Result<()> {
    let user = authorize_reader(user)?;
    match action {
        ThreadAction::Close | ThreadAction::Reopen => {
            if !user.capabilities.is_moderator() {
                return Err(Denial::NotPermitted);
            }
        }
        ThreadAction::Subscribe => {
            if thread.is_closed() {
                return Err(Denial::ThreadClosed);
            }
        }
        // Leaving a closed thread is always possible
        ThreadAction::Unsubscribe => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ct_entities::{builders::*, user::*};

    #[test]
    fn only_moderators_close_threads() {
        let thread = Thread::build().finish();
        let reader = User::build().role(Role::Reader).finish();
        let moderator = User::build().role(Role::Moderator).finish();
        assert_eq!(
            Err(Denial::NotPermitted),
            authorize_thread_action(ThreadAction::Close, Some(&reader), &thread)
        );
        assert!(authorize_thread_action(ThreadAction::Close, Some(&moderator), &thread).is_ok());
    }

    #[test]
    fn moderators_without_read_permission_cannot_close_threads() {
        let thread = Thread::build().finish();
        let user = User::build().can_edit(true).is_admin(true).finish();
        assert_eq!(
            Err(Denial::NoReadPermission),
            authorize_thread_action(ThreadAction::Reopen, Some(&user), &thread)
        );
    }

    #[test]
    fn subscribe_to_open_threads_only() {
        let open = Thread::build().finish();
        let closed = Thread::build().closed().finish();
        let reader = User::build().role(Role::Reader).finish();
        assert!(authorize_thread_action(ThreadAction::Subscribe, Some(&reader), &open).is_ok());
        assert_eq!(
            Err(Denial::ThreadClosed),
            authorize_thread_action(ThreadAction::Subscribe, Some(&reader), &closed)
        );
        assert!(authorize_thread_action(ThreadAction::Unsubscribe, Some(&reader), &closed).is_ok());
        assert_eq!(
            Err(Denial::Unauthenticated),
            authorize_thread_action(ThreadAction::Subscribe, None, &open)
        );
    }
}
