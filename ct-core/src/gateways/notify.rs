use ct_entities::{comment::Comment, email::EmailAddress, thread::Thread, user::User};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationType {
    CommentCreated,
}

#[derive(Debug)]
pub enum NotificationEvent<'a> {
    CommentCreated {
        thread: &'a Thread,
        comment: &'a Comment,
        creator: &'a User,
        email_addresses: &'a [EmailAddress],
    },
}

impl NotificationEvent<'_> {
    pub const fn kind(&self) -> NotificationType {
        match self {
            Self::CommentCreated { .. } => NotificationType::CommentCreated,
        }
    }
}

pub trait NotificationGateway {
    fn notify(&self, event: NotificationEvent);
}
