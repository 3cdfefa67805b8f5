use crate::id::Id;

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Subscription {
    pub thread_id : Id,
    pub user_id   : Id,
}
