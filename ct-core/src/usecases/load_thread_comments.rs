use super::prelude::*;

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentWithVotes {
    pub comment : Comment,
    pub votes   : VoteTally,
}

/// All comments of a thread in the order they have been created,
/// including deleted ones.
pub fn load_thread_comments<R>(repo: &R, thread_id: &str) -> Result<Vec<CommentWithVotes>>
where
    R: ThreadRepo + CommentRepo + VoteLedger,
{
    let thread = repo.get_thread(thread_id)?;
    let comments = repo.load_comments_of_thread(thread.id.as_str())?;
    log::debug!("Loaded {} comments of thread {}", comments.len(), thread.id);
    comments
        .into_iter()
        .map(|comment| {
            let votes = repo.tally(comment.id.as_str())?;
            Ok(CommentWithVotes { comment, votes })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use ct_entities::builders::*;

    #[test]
    fn load_comments_with_votes() {
        let db = MockDb::default();
        db.threads
            .borrow_mut()
            .push(Thread::build().id("thread").finish());
        db.comments.borrow_mut().extend([
            Comment::build().id("a").thread("thread").finish(),
            Comment::build().id("other").thread("other").finish(),
            Comment::build()
                .id("b")
                .thread("thread")
                .deleted_by("mod")
                .finish(),
        ]);
        db.cast_vote(&Vote {
            comment_id: "a".into(),
            user_id: "user".into(),
            direction: VoteDirection::Down,
        })
        .unwrap();

        let comments = load_thread_comments(&db, "thread").unwrap();
        assert_eq!(2, comments.len());
        assert_eq!("a", comments[0].comment.id.as_str());
        assert_eq!(VoteTally { up: 0, down: 1 }, comments[0].votes);
        assert_eq!("b", comments[1].comment.id.as_str());
        assert!(comments[1].votes.is_empty());
    }

    #[test]
    fn load_comments_of_missing_thread() {
        let db = MockDb::default();
        assert!(load_thread_comments(&db, "thread")
            .unwrap_err()
            .is_not_found());
    }
}
