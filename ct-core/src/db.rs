use crate::repositories::*;

/// All repositories that are required by the use cases.
pub trait Db: CommentRepo + ThreadRepo + UserRepo + SubscriptionRepo + VoteLedger {}

impl<T> Db for T where T: CommentRepo + ThreadRepo + UserRepo + SubscriptionRepo + VoteLedger {}
