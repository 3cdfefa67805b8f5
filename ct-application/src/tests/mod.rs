
pub mod prelude {
    use std::cell::RefCell;

    pub use ct_core::{
        authorization::{self, Action, ThreadSettings},
        entities::*,
        gateways::notify::{NotificationEvent, NotificationGateway},
        repositories::{Error as RepoError, *},
        usecases,
    };
    pub use ct_entities::builders::*;

    pub use crate::{error::AppError, inmem, prelude as flows};

    /// Records the recipients of every notification.
    #[derive(Default)]
    pub struct DummyNotifyGW {
        pub comments_created: RefCell<Vec<Vec<EmailAddress>>>,
    }

    impl DummyNotifyGW {
        pub fn count(&self) -> usize {
            self.comments_created.borrow().len()
        }
    }

    impl NotificationGateway for DummyNotifyGW {
        fn notify(&self, event: NotificationEvent) {
            match event {
                NotificationEvent::CommentCreated {
                    email_addresses, ..
                } => self
                    .comments_created
                    .borrow_mut()
                    .push(email_addresses.to_vec()),
            }
        }
    }

    pub struct BackendFixture {
        pub db_connections: inmem::Connections,
        pub notify: DummyNotifyGW,
        pub settings: ThreadSettings,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            Self {
                db_connections: inmem::Connections::init(),
                notify: DummyNotifyGW::default(),
                settings: ThreadSettings::default(),
            }
        }

        pub fn controller(&self) -> flows::CommentsController<'_> {
            flows::CommentsController::new(&self.db_connections, &self.notify, &self.settings)
        }

        pub fn create_thread(&self) -> Id {
            flows::create_thread(&self.db_connections, "post/1".into())
                .unwrap()
                .id
        }

        pub fn create_user(&self, id: &str, capabilities: Capabilities) -> Id {
            let mut user = User::build().id(id).finish();
            user.capabilities = capabilities;
            flows::create_user(&self.db_connections, &user).unwrap();
            user.id
        }

        pub fn set_capabilities(&self, user_id: &Id, capabilities: Capabilities) {
            flows::change_user_capabilities(&self.db_connections, user_id.as_str(), capabilities)
                .unwrap();
        }

        /// Stores a comment without any checks.
        pub fn create_comment(&self, thread_id: &Id, creator_id: &Id, body: &str) -> Id {
            let comment = Comment::build()
                .thread(thread_id.as_str())
                .creator(creator_id.as_str())
                .body(body)
                .finish();
            let id = comment.id.clone();
            self.db_connections
                .exclusive()
                .transaction(|conn| conn.create_comment(comment))
                .unwrap();
            id
        }

        pub fn subscribe(&self, thread_id: &Id, user_id: &Id) {
            self.db_connections
                .exclusive()
                .transaction(|conn| {
                    conn.subscribe(&Subscription {
                        thread_id: thread_id.clone(),
                        user_id: user_id.clone(),
                    })
                })
                .unwrap();
        }

        pub fn load_comment(&self, id: &Id) -> Comment {
            self.db_connections
                .shared()
                .load_comment(id.as_str())
                .unwrap()
        }

        pub fn count_comments(&self, thread_id: &Id) -> usize {
            self.db_connections
                .shared()
                .count_comments_of_thread(thread_id.as_str())
                .unwrap()
        }

        pub fn tally(&self, comment_id: &Id) -> VoteTally {
            self.db_connections
                .shared()
                .tally(comment_id.as_str())
                .unwrap()
        }

        /// Bypasses authorization like a direct model update.
        pub fn delete_comment_by(&self, comment_id: &Id, user_id: &Id) {
            self.db_connections
                .exclusive()
                .transaction(|conn| usecases::delete_comment(conn, comment_id.as_str(), user_id))
                .unwrap();
        }

        /// Bypasses authorization like a direct model update.
        pub fn undelete_comment_by(&self, comment_id: &Id, user_id: &Id) {
            self.db_connections
                .exclusive()
                .transaction(|conn| {
                    usecases::undelete_comment(conn, comment_id.as_str(), user_id)
                })
                .unwrap();
        }
    }

    pub const NONE: Capabilities = Capabilities::none();

    pub const READ: Capabilities = Capabilities {
        read: true,
        edit: false,
        admin: false,
    };

    pub const READ_EDIT: Capabilities = Capabilities {
        read: true,
        edit: true,
        admin: false,
    };

    pub const READ_ADMIN: Capabilities = Capabilities {
        read: true,
        edit: false,
        admin: true,
    };

    pub const ALL: Capabilities = Capabilities {
        read: true,
        edit: true,
        admin: true,
    };
}
