/// Who besides moderators may edit or delete a comment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CreatorPermission {
    /// The creator of any comment
    #[default]
    Any,
    /// The creator of the most recent comment in the thread
    Latest,
    /// Nobody
    Never,
}

impl CreatorPermission {
    pub fn permits(self, is_latest_comment: bool) -> bool {
        match self {
            Self::Any => true,
            Self::Latest => is_latest_comment,
            Self::Never => false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModeratorPermissions {
    /// Edit and delete comments of other users
    #[default]
    Edit,
    /// Only delete comments of other users
    Delete,
    None,
}

impl ModeratorPermissions {
    pub fn can_edit(self) -> bool {
        matches!(self, Self::Edit)
    }

    pub fn can_delete(self) -> bool {
        matches!(self, Self::Edit | Self::Delete)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CommentVoting {
    Disabled,
    /// Only upvotes
    Likes,
    #[default]
    UpDown,
}

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThreadSettings {
    pub comment_editing       : CreatorPermission,
    pub comment_deletion      : CreatorPermission,
    pub moderator_permissions : ModeratorPermissions,
    pub comment_voting        : CommentVoting,
}
