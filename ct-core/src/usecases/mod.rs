mod authorize;
mod comment_notification_recipients;
mod create_comment;
mod delete_comment;
mod error;
mod load_thread_comments;
mod subscribe_to_thread;
mod threads;
mod update_comment;
mod vote_comment;


pub use self::{
    authorize::*, comment_notification_recipients::*, create_comment::*, delete_comment::*,
    error::Error, load_thread_comments::*, subscribe_to_thread::*, threads::*,
    update_comment::*, vote_comment::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{db::*, entities::*, repositories::*};
}

fn is_empty_body(body: &str) -> bool {
    body.trim().is_empty()
}
