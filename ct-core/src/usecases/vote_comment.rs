use super::prelude::*;

/// Returns `true` if the vote of the user has changed.
pub fn upvote_comment<R>(repo: &R, comment_id: &str, user_id: &Id) -> Result<bool>
where
    R: CommentRepo + VoteLedger,
{
    vote_comment(repo, comment_id, user_id, Some(VoteDirection::Up))
}

/// Returns `true` if the vote of the user has changed.
pub fn downvote_comment<R>(repo: &R, comment_id: &str, user_id: &Id) -> Result<bool>
where
    R: CommentRepo + VoteLedger,
{
    vote_comment(repo, comment_id, user_id, Some(VoteDirection::Down))
}

/// Returns `true` if a vote has been removed.
pub fn unvote_comment<R>(repo: &R, comment_id: &str, user_id: &Id) -> Result<bool>
where
    R: CommentRepo + VoteLedger,
{
    vote_comment(repo, comment_id, user_id, None)
}

fn vote_comment<R>(
    repo: &R,
    comment_id: &str,
    user_id: &Id,
    direction: Option<VoteDirection>,
) -> Result<bool>
where
    R: CommentRepo + VoteLedger,
{
    let comment = repo.load_comment(comment_id)?;
    if comment.is_deleted() {
        return Err(Error::CommentDeleted);
    }
    let changed = match direction {
        Some(direction) => {
            let vote = Vote {
                comment_id: comment.id,
                user_id: user_id.clone(),
                direction,
            };
            repo.cast_vote(&vote)?
        }
        None => repo.clear_vote(comment.id.as_str(), user_id.as_str())?,
    };
    if changed {
        log::debug!(
            "Vote of {} on comment {} changed to {:?}",
            user_id,
            comment_id,
            direction
        );
    }
    Ok(changed)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use ct_entities::builders::*;

    fn mock_db() -> MockDb {
        let db = MockDb::default();
        db.comments
            .borrow_mut()
            .push(Comment::build().id("comment").creator("creator").finish());
        db
    }

    #[test]
    fn votes_are_idempotent() {
        let db = mock_db();
        let user = Id::from("user");
        assert!(upvote_comment(&db, "comment", &user).unwrap());
        assert!(!upvote_comment(&db, "comment", &user).unwrap());
        assert_eq!(VoteTally { up: 1, down: 0 }, db.tally("comment").unwrap());
    }

    #[test]
    fn opposite_vote_replaces_previous_vote() {
        let db = mock_db();
        let user = Id::from("user");
        upvote_comment(&db, "comment", &user).unwrap();
        assert!(downvote_comment(&db, "comment", &user).unwrap());
        assert_eq!(VoteTally { up: 0, down: 1 }, db.tally("comment").unwrap());
        assert_eq!(
            Some(VoteDirection::Down),
            db.vote_of("comment", "user").unwrap()
        );
    }

    #[test]
    fn unvote() {
        let db = mock_db();
        let user = Id::from("user");
        assert!(!unvote_comment(&db, "comment", &user).unwrap());
        upvote_comment(&db, "comment", &user).unwrap();
        upvote_comment(&db, "comment", &"other".into()).unwrap();
        assert!(unvote_comment(&db, "comment", &user).unwrap());
        assert!(!unvote_comment(&db, "comment", &user).unwrap());
        assert_eq!(VoteTally { up: 1, down: 0 }, db.tally("comment").unwrap());
    }

    #[test]
    fn no_votes_on_deleted_comments() {
        let db = MockDb::default();
        db.comments
            .borrow_mut()
            .push(Comment::build().id("comment").deleted_by("creator").finish());
        let err = upvote_comment(&db, "comment", &"user".into()).unwrap_err();
        assert!(matches!(err, Error::CommentDeleted));
        assert!(db.votes.borrow().is_empty());
    }
}
