use strum::{Display, EnumString};

use crate::{email::EmailAddress, id::Id};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id           : Id,
    pub name         : String,
    pub email        : EmailAddress,
    pub capabilities : Capabilities,
}

/// What a user is allowed to do with comment threads.
///
/// The flags are independent of each other: neither `edit` nor `admin`
/// imply `read`.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Capabilities {
    pub read  : bool,
    pub edit  : bool,
    pub admin : bool,
}

impl Capabilities {
    pub const fn none() -> Self {
        Self {
            read: false,
            edit: false,
            admin: false,
        }
    }

    pub fn is_moderator(&self) -> bool {
        self.edit || self.admin
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, EnumString, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Role {
    #[default]
    Guest,
    Reader,
    Moderator,
    Admin,
}

impl From<Role> for Capabilities {
    fn from(from: Role) -> Self {
        match from {
            Role::Guest => Capabilities::none(),
            Role::Reader => Capabilities {
                read: true,
                ..Capabilities::none()
            },
            Role::Moderator => Capabilities {
                read: true,
                edit: true,
                admin: false,
            },
            Role::Admin => Capabilities {
                read: true,
                edit: true,
                admin: true,
            },
        }
    }
}
