// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait CommentRepo {
    fn create_comment(&self, comment: Comment) -> Result<()>;
    fn update_comment(&self, comment: &Comment) -> Result<()>;

    // Including deleted comments
    fn load_comment(&self, id: &str) -> Result<Comment>;

    // Ordered by creation, including deleted comments
    fn load_comments_of_thread(&self, thread_id: &str) -> Result<Vec<Comment>>;

    fn latest_comment_of_thread(&self, thread_id: &str) -> Result<Option<Comment>> {
        Ok(self.load_comments_of_thread(thread_id)?.pop())
    }

    fn count_comments_of_thread(&self, thread_id: &str) -> Result<usize> {
        Ok(self.load_comments_of_thread(thread_id)?.len())
    }
}

pub trait ThreadRepo {
    fn create_thread(&self, thread: Thread) -> Result<()>;
    fn update_thread(&self, thread: &Thread) -> Result<()>;
    fn get_thread(&self, id: &str) -> Result<Thread>;
}

pub trait UserRepo {
    fn create_user(&self, user: &User) -> Result<()>;
    fn update_user(&self, user: &User) -> Result<()>;

    fn get_user(&self, id: &str) -> Result<User>;
    fn try_get_user(&self, id: &str) -> Result<Option<User>>;
    // Unknown ids are skipped
    fn get_users(&self, ids: &[&str]) -> Result<Vec<User>>;
}

pub trait SubscriptionRepo {
    // Ok(false) => already subscribed
    fn subscribe(&self, subscription: &Subscription) -> Result<bool>;
    // Ok(false) => not subscribed
    fn unsubscribe(&self, subscription: &Subscription) -> Result<bool>;
    fn subscriber_ids_of_thread(&self, thread_id: &str) -> Result<Vec<Id>>;
}

/// Per-user up and down votes on comments.
///
/// A user holds at most one vote per comment. Casting the opposite
/// vote replaces the previous one, casting the same vote again
/// does not change anything.
pub trait VoteLedger {
    // Ok(false) => the same vote already existed
    fn cast_vote(&self, vote: &Vote) -> Result<bool>;
    // Ok(false) => there was no vote to clear
    fn clear_vote(&self, comment_id: &str, user_id: &str) -> Result<bool>;
    fn vote_of(&self, comment_id: &str, user_id: &str) -> Result<Option<VoteDirection>>;
    fn tally(&self, comment_id: &str) -> Result<VoteTally>;
}
