use super::prelude::*;

pub fn delete_comment<R>(repo: &R, comment_id: &str, user_id: &Id) -> Result<Comment>
where
    R: CommentRepo,
{
    let mut comment = repo.load_comment(comment_id)?;
    comment.delete_by(user_id.clone(), Timestamp::now())?;
    log::info!("Deleting comment {} by {}", comment.id, user_id);
    repo.update_comment(&comment)?;
    Ok(comment)
}

pub fn undelete_comment<R>(repo: &R, comment_id: &str, user_id: &Id) -> Result<Comment>
where
    R: CommentRepo,
{
    let mut comment = repo.load_comment(comment_id)?;
    comment.undelete_by(user_id.clone(), Timestamp::now())?;
    log::info!("Restoring comment {} by {}", comment.id, user_id);
    repo.update_comment(&comment)?;
    Ok(comment)
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
    fn delete_and_undelete() {
        let db = mock_db();
        let moderator = Id::from("moderator");
        let deleted = delete_comment(&db, "comment", &moderator).unwrap();
        assert!(deleted.is_deleted());
        assert_eq!(Some(moderator.clone()), deleted.editor_id);
        assert!(db.comments.borrow()[0].is_deleted());

        let creator = Id::from("creator");
        let restored = undelete_comment(&db, "comment", &creator).unwrap();
        assert!(!restored.is_deleted());
        assert_eq!(Some(creator), restored.editor_id);
        assert!(!db.comments.borrow()[0].is_deleted());
    }

    #[test]
    fn delete_twice() {
        let db = mock_db();
        delete_comment(&db, "comment", &"creator".into()).unwrap();
        let err = delete_comment(&db, "comment", &"moderator".into()).unwrap_err();
        assert!(matches!(err, Error::AlreadyDeleted));
        assert!(err.is_validation());
        assert_eq!(
            Some(Id::from("creator")),
            db.comments.borrow()[0].editor_id
        );
    }

    #[test]
    fn undelete_active_comment() {
        let db = mock_db();
        let err = undelete_comment(&db, "comment", &"creator".into()).unwrap_err();
        assert!(matches!(err, Error::NotDeleted));
        assert!(db.comments.borrow()[0].editor_id.is_none());
    }

    #[test]
    fn delete_missing_comment() {
        let db = MockDb::default();
        assert!(delete_comment(&db, "comment", &"creator".into())
            .unwrap_err()
            .is_not_found());
    }
}
