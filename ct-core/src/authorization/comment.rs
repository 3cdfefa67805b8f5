use super::*;
use ct_entities::{comment::Comment, id::Id, thread::Thread};
use strum::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Action {
    New,
    Create,
    Edit,
    Update,
    Delete,
    Undelete,
    Upvote,
    Downvote,
    Unvote,
}

impl Action {
    pub const fn requires_comment(self) -> bool {
        !matches!(self, Self::New | Self::Create)
    }

    pub const fn is_vote(self) -> bool {
        matches!(self, Self::Upvote | Self::Downvote | Self::Unvote)
    }
}

/// The thread and optionally the comment an action is performed on.
#[derive(Debug, Clone, Copy)]
pub struct Target<'a> {
    pub thread: &'a Thread,
    pub comment: Option<&'a Comment>,
    /// Id of the most recent comment in the thread
    pub latest_comment_id: Option<&'a Id>,
}

impl<'a> Target<'a> {
    pub const fn thread(thread: &'a Thread) -> Self {
        Self {
            thread,
            comment: None,
            latest_comment_id: None,
        }
    }

    pub const fn comment(
        thread: &'a Thread,
        comment: &'a Comment,
        latest_comment_id: Option<&'a Id>,
    ) -> Self {
        Self {
            thread,
            comment: Some(comment),
            latest_comment_id,
        }
    }

    fn is_latest_comment(&self) -> bool {
        match (self.comment, self.latest_comment_id) {
            (Some(comment), Some(latest_id)) => &comment.id == latest_id,
            _ => false,
        }
    }
}

pub fn can_perform(
    settings: &ThreadSettings,
    action: Action,
    user: Option<&User>,
    target: Target<'_>,
) -> bool {
    authorize(settings, action, user, target).is_ok()
}

pub fn authorize(
    settings: &ThreadSettings,
    action: Action,
    user: Option<&User>,
    target: Target<'_>,
) -> Result<()> {
    let user = authorize_reader(user)?;
    let Target { thread, .. } = target;
    // Moderators may still edit and delete comments of closed threads
    let ensure_open = || {
        if thread.is_closed() {
            Err(Denial::ThreadClosed)
        } else {
            Ok(())
        }
    };
    if !action.requires_comment() {
        return ensure_open();
    }
    let comment = target.comment.ok_or(Denial::MissingComment)?;
    if comment.thread_id != thread.id {
        return Err(Denial::ForeignComment);
    }
    let is_creator = comment.is_created_by(&user.id);
    let is_moderator = user.capabilities.is_moderator();
    match action {
        Action::New | Action::Create => unreachable!("no comment required"),
        Action::Edit | Action::Update => {
            if comment.is_deleted() {
                return Err(Denial::CommentDeleted);
            }
            if is_moderator && settings.moderator_permissions.can_edit() {
                return Ok(());
            }
            if is_creator && settings.comment_editing.permits(target.is_latest_comment()) {
                return ensure_open();
            }
            Err(Denial::NotPermitted)
        }
        Action::Delete | Action::Undelete => {
            if is_moderator && settings.moderator_permissions.can_delete() {
                return Ok(());
            }
            if !is_creator || !settings.comment_deletion.permits(target.is_latest_comment()) {
                return Err(Denial::NotPermitted);
            }
            ensure_open()?;
            // A comment that has been deleted by a moderator
            // cannot be restored by its creator.
            if action == Action::Undelete
                && comment.is_deleted()
                && comment.editor_id.as_ref() != Some(&comment.creator_id)
            {
                return Err(Denial::NotPermitted);
            }
            Ok(())
        }
        Action::Upvote | Action::Downvote | Action::Unvote => {
            match (settings.comment_voting, action) {
                (CommentVoting::Disabled, _) | (CommentVoting::Likes, Action::Downvote) => {
                    return Err(Denial::VotingDisabled);
                }
                _ => {}
            }
            ensure_open()?;
            if comment.is_deleted() {
                return Err(Denial::CommentDeleted);
            }
            if is_creator {
                return Err(Denial::OwnComment);
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ct_entities::{builders::*, user::*};

    const ALL_ACTIONS: [Action; 9] = [
        Action::New,
        Action::Create,
        Action::Edit,
        Action::Update,
        Action::Delete,
        Action::Undelete,
        Action::Upvote,
        Action::Downvote,
        Action::Unvote,
    ];

    struct Fixture {
        thread: Thread,
        comment: Comment,
        creator: User,
    }

    impl Fixture {
        fn new() -> Self {
            let thread = Thread::build().id("thread").finish();
            let creator = User::build().id("creator").finish();
            let comment = Comment::build()
                .id("comment")
                .thread("thread")
                .creator("creator")
                .body("Something")
                .finish();
            Self {
                thread,
                comment,
                creator,
            }
        }

        fn target(&self) -> Target<'_> {
            Target::comment(&self.thread, &self.comment, Some(&self.comment.id))
        }

        fn authorize(&self, action: Action, user: &User) -> Result<()> {
            authorize(&ThreadSettings::default(), action, Some(user), self.target())
        }
    }

    #[test]
    fn deny_everything_without_user() {
        let f = Fixture::new();
        for action in ALL_ACTIONS {
            assert_eq!(
                Err(Denial::Unauthenticated),
                authorize(&ThreadSettings::default(), action, None, f.target())
            );
        }
    }

    #[test]
    fn deny_everything_without_read_permission() {
        let f = Fixture::new();
        let users = [
            f.creator.clone(),
            User::build().can_edit(true).finish(),
            User::build().is_admin(true).finish(),
            User::build().can_edit(true).is_admin(true).finish(),
        ];
        for user in &users {
            for action in ALL_ACTIONS {
                assert_eq!(Err(Denial::NoReadPermission), f.authorize(action, user));
            }
        }
    }

    #[test]
    fn readers_may_create_in_open_threads() {
        let mut f = Fixture::new();
        let reader = User::build().role(Role::Reader).finish();
        assert!(f.authorize(Action::New, &reader).is_ok());
        assert!(f.authorize(Action::Create, &reader).is_ok());
        f.thread.closed_at = Some(ct_entities::time::Timestamp::now());
        let admin = User::build().role(Role::Admin).finish();
        assert_eq!(Err(Denial::ThreadClosed), f.authorize(Action::Create, &admin));
        assert_eq!(Err(Denial::ThreadClosed), f.authorize(Action::New, &reader));
    }

    #[test]
    fn moderators_may_change_comments_of_closed_threads() {
        let mut f = Fixture::new();
        f.creator.capabilities.read = true;
        f.thread.closed_at = Some(ct_entities::time::Timestamp::now());
        let admin = User::build().role(Role::Admin).finish();
        for action in [Action::Edit, Action::Update, Action::Delete, Action::Undelete] {
            assert!(f.authorize(action, &admin).is_ok());
            assert_eq!(Err(Denial::ThreadClosed), f.authorize(action, &f.creator));
        }
        let reader = User::build().role(Role::Reader).finish();
        assert_eq!(Err(Denial::ThreadClosed), f.authorize(Action::Upvote, &reader));
    }

    #[test]
    fn creator_may_edit_own_comment() {
        let mut f = Fixture::new();
        f.creator.capabilities.read = true;
        assert!(f.authorize(Action::Edit, &f.creator).is_ok());
        assert!(f.authorize(Action::Update, &f.creator).is_ok());
    }

    #[test]
    fn others_edit_only_as_moderator() {
        let f = Fixture::new();
        let reader = User::build().role(Role::Reader).finish();
        assert_eq!(Err(Denial::NotPermitted), f.authorize(Action::Update, &reader));
        let editor = User::build().can_read(true).can_edit(true).finish();
        assert!(f.authorize(Action::Update, &editor).is_ok());
        let admin = User::build().can_read(true).is_admin(true).finish();
        assert!(f.authorize(Action::Update, &admin).is_ok());
    }

    #[test]
    fn moderators_may_not_edit_if_restricted_to_deletion() {
        let f = Fixture::new();
        let settings = ThreadSettings {
            moderator_permissions: ModeratorPermissions::Delete,
            ..Default::default()
        };
        let moderator = User::build().role(Role::Moderator).finish();
        assert_eq!(
            Err(Denial::NotPermitted),
            authorize(&settings, Action::Update, Some(&moderator), f.target())
        );
        assert!(authorize(&settings, Action::Delete, Some(&moderator), f.target()).is_ok());
    }

    #[test]
    fn edit_only_latest_comment() {
        let mut f = Fixture::new();
        f.creator.capabilities.read = true;
        let settings = ThreadSettings {
            comment_editing: CreatorPermission::Latest,
            ..Default::default()
        };
        let latest = Id::from("newer");
        let target = Target::comment(&f.thread, &f.comment, Some(&latest));
        assert_eq!(
            Err(Denial::NotPermitted),
            authorize(&settings, Action::Edit, Some(&f.creator), target)
        );
        assert!(authorize(&settings, Action::Edit, Some(&f.creator), f.target()).is_ok());
    }

    #[test]
    fn deleted_comments_cannot_be_edited() {
        let mut f = Fixture::new();
        f.comment = Comment::build()
            .id("comment")
            .thread("thread")
            .creator("creator")
            .deleted_by("creator")
            .finish();
        let admin = User::build().role(Role::Admin).finish();
        assert_eq!(Err(Denial::CommentDeleted), f.authorize(Action::Edit, &admin));
    }

    #[test]
    fn delete_and_undelete_own_comment() {
        let mut f = Fixture::new();
        f.creator.capabilities.read = true;
        assert!(f.authorize(Action::Delete, &f.creator).is_ok());
        f.comment.delete_by("creator".into(), ct_entities::time::Timestamp::now()).unwrap();
        assert!(f.authorize(Action::Undelete, &f.creator).is_ok());
    }

    #[test]
    fn creator_cannot_undelete_comment_deleted_by_moderator() {
        let mut f = Fixture::new();
        f.creator.capabilities.read = true;
        f.comment.delete_by("moderator".into(), ct_entities::time::Timestamp::now()).unwrap();
        assert_eq!(Err(Denial::NotPermitted), f.authorize(Action::Undelete, &f.creator));
        let moderator = User::build().id("moderator").role(Role::Moderator).finish();
        assert!(f.authorize(Action::Undelete, &moderator).is_ok());
    }

    #[test]
    fn others_delete_only_as_moderator() {
        let f = Fixture::new();
        let reader = User::build().role(Role::Reader).finish();
        assert_eq!(Err(Denial::NotPermitted), f.authorize(Action::Delete, &reader));
        let editor = User::build().can_read(true).can_edit(true).finish();
        assert!(f.authorize(Action::Delete, &editor).is_ok());
        let settings = ThreadSettings {
            moderator_permissions: ModeratorPermissions::None,
            ..Default::default()
        };
        assert_eq!(
            Err(Denial::NotPermitted),
            authorize(&settings, Action::Delete, Some(&editor), f.target())
        );
    }

    #[test]
    fn creator_may_not_vote_on_own_comment() {
        let mut f = Fixture::new();
        f.creator.capabilities.read = true;
        for action in [Action::Upvote, Action::Downvote, Action::Unvote] {
            assert_eq!(Err(Denial::OwnComment), f.authorize(action, &f.creator));
        }
    }

    #[test]
    fn readers_may_vote() {
        let f = Fixture::new();
        let reader = User::build().role(Role::Reader).finish();
        for action in [Action::Upvote, Action::Downvote, Action::Unvote] {
            assert!(f.authorize(action, &reader).is_ok());
        }
    }

    #[test]
    fn voting_settings() {
        let f = Fixture::new();
        let reader = User::build().role(Role::Reader).finish();
        let likes = ThreadSettings {
            comment_voting: CommentVoting::Likes,
            ..Default::default()
        };
        assert!(authorize(&likes, Action::Upvote, Some(&reader), f.target()).is_ok());
        assert_eq!(
            Err(Denial::VotingDisabled),
            authorize(&likes, Action::Downvote, Some(&reader), f.target())
        );
        let disabled = ThreadSettings {
            comment_voting: CommentVoting::Disabled,
            ..Default::default()
        };
        assert!(!can_perform(&disabled, Action::Upvote, Some(&reader), f.target()));
    }

    #[test]
    fn comment_actions_require_a_matching_comment() {
        let f = Fixture::new();
        let admin = User::build().role(Role::Admin).finish();
        let settings = ThreadSettings::default();
        assert_eq!(
            Err(Denial::MissingComment),
            authorize(&settings, Action::Edit, Some(&admin), Target::thread(&f.thread))
        );
        let other_thread = Thread::build().id("other").finish();
        let target = Target::comment(&other_thread, &f.comment, None);
        assert_eq!(
            Err(Denial::ForeignComment),
            authorize(&settings, Action::Delete, Some(&admin), target)
        );
    }

    #[test]
    fn parse_actions() {
        assert_eq!(Ok(Action::Undelete), "undelete".parse());
        assert_eq!("downvote", Action::Downvote.to_string());
        assert!(Action::Unvote.is_vote());
        assert!(!Action::Create.requires_comment());
    }
}
