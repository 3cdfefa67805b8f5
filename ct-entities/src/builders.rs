pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{comment_builder::*, thread_builder::*, user_builder::*};

pub mod user_builder {

    use super::*;
    use crate::{email::*, id::*, user::*};

    #[derive(Debug)]
    pub struct UserBuild {
        user: User,
    }

    impl UserBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.user.id = id.into();
            self.user.email = EmailAddress::new_unchecked(format!("{id}@example.com"));
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.user.name = name.into();
            self
        }
        pub fn email(mut self, email: &str) -> Self {
            self.user.email = EmailAddress::new_unchecked(email.into());
            self
        }
        pub fn role(mut self, role: Role) -> Self {
            self.user.capabilities = role.into();
            self
        }
        pub fn can_read(mut self, can_read: bool) -> Self {
            self.user.capabilities.read = can_read;
            self
        }
        pub fn can_edit(mut self, can_edit: bool) -> Self {
            self.user.capabilities.edit = can_edit;
            self
        }
        pub fn is_admin(mut self, is_admin: bool) -> Self {
            self.user.capabilities.admin = is_admin;
            self
        }
        pub fn finish(self) -> User {
            self.user
        }
    }

    impl Builder for User {
        type Build = UserBuild;
        fn build() -> UserBuild {
            let id = Id::new();
            UserBuild {
                user: User {
                    email: EmailAddress::new_unchecked(format!("{id}@example.com")),
                    id,
                    name: "".into(),
                    capabilities: Capabilities::none(),
                },
            }
        }
    }
}

pub mod thread_builder {

    use super::*;
    use crate::{id::*, thread::*, time::*};

    #[derive(Debug)]
    pub struct ThreadBuild {
        thread: Thread,
    }

    impl ThreadBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.thread.id = id.into();
            self
        }
        pub fn subject(mut self, subject: &str) -> Self {
            self.thread.subject = subject.into();
            self
        }
        pub fn closed(mut self) -> Self {
            self.thread.closed_at = Some(Timestamp::now());
            self
        }
        pub fn finish(self) -> Thread {
            self.thread
        }
    }

    impl Builder for Thread {
        type Build = ThreadBuild;
        fn build() -> ThreadBuild {
            ThreadBuild {
                thread: Thread {
                    id: Id::new(),
                    subject: "".into(),
                    created_at: Timestamp::now(),
                    closed_at: None,
                    closed_by: None,
                },
            }
        }
    }
}

pub mod comment_builder {

    use super::*;
    use crate::{comment::*, id::*, time::*};

    #[derive(Debug)]
    pub struct CommentBuild {
        comment: Comment,
    }

    impl CommentBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.comment.id = id.into();
            self
        }
        pub fn thread(mut self, thread_id: &str) -> Self {
            self.comment.thread_id = thread_id.into();
            self
        }
        pub fn creator(mut self, creator_id: &str) -> Self {
            self.comment.creator_id = creator_id.into();
            self
        }
        pub fn body(mut self, body: &str) -> Self {
            self.comment.body = body.into();
            self
        }
        pub fn deleted_by(mut self, editor_id: &str) -> Self {
            self.comment.state = CommentState::Deleted {
                at: Timestamp::now(),
            };
            self.comment.editor_id = Some(editor_id.into());
            self
        }
        pub fn finish(self) -> Comment {
            self.comment
        }
    }

    impl Builder for Comment {
        type Build = CommentBuild;
        fn build() -> CommentBuild {
            CommentBuild {
                comment: Comment {
                    id: Id::new(),
                    thread_id: Id::default(),
                    creator_id: Id::default(),
                    editor_id: None,
                    body: "".into(),
                    state: CommentState::Active,
                    created_at: Timestamp::now(),
                    updated_at: None,
                },
            }
        }
    }
}
