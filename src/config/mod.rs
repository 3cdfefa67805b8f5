use anyhow::{anyhow, Result};
use ct_core::{
    authorization::{CommentVoting, CreatorPermission, ModeratorPermissions, ThreadSettings},
    gateways::notify::NotificationType,
};
use std::{
    collections::HashSet,
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "comment-threads.toml";

const ENV_NAME_EMAIL_DIR: &str = "COMMENT_THREADS_EMAIL_DIR";

pub struct Config {
    pub threads: ThreadSettings,
    pub notifications: Notifications,
    pub email: Email,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(dir) = env::var(ENV_NAME_EMAIL_DIR) {
            log::info!("Storing e-mails as JSON files in {dir}");
            cfg.email.gateway = Some(EmailGateway::EmailToJsonFile { dir: dir.into() });
        }
        Ok(cfg)
    }
}

pub struct Notifications {
    pub notify_on: HashSet<NotificationType>,
}

pub struct Email {
    pub gateway: Option<EmailGateway>,
}

#[derive(Clone)]
pub enum EmailGateway {
    /// For local testing purposes
    EmailToJsonFile {
        /// File system directory for writing emails into JSON files.
        dir: PathBuf,
    },
}

impl From<raw::CreatorPermission> for CreatorPermission {
    fn from(from: raw::CreatorPermission) -> Self {
        match from {
            raw::CreatorPermission::Any => Self::Any,
            raw::CreatorPermission::Latest => Self::Latest,
            raw::CreatorPermission::Never => Self::Never,
        }
    }
}

impl From<raw::ModeratorPermissions> for ModeratorPermissions {
    fn from(from: raw::ModeratorPermissions) -> Self {
        match from {
            raw::ModeratorPermissions::Edit => Self::Edit,
            raw::ModeratorPermissions::Delete => Self::Delete,
            raw::ModeratorPermissions::None => Self::None,
        }
    }
}

impl From<raw::CommentVoting> for CommentVoting {
    fn from(from: raw::CommentVoting) -> Self {
        match from {
            raw::CommentVoting::Disabled => Self::Disabled,
            raw::CommentVoting::Likes => Self::Likes,
            raw::CommentVoting::UpDown => Self::UpDown,
        }
    }
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            threads,
            notifications,
            email,
            gateway,
        } = from;

        let raw::Threads {
            comment_editing,
            comment_deletion,
            moderator_permissions,
            comment_voting,
        } = threads.unwrap_or_default();

        let threads = ThreadSettings {
            comment_editing: comment_editing.map(Into::into).unwrap_or_default(),
            comment_deletion: comment_deletion.map(Into::into).unwrap_or_default(),
            moderator_permissions: moderator_permissions.map(Into::into).unwrap_or_default(),
            comment_voting: comment_voting.map(Into::into).unwrap_or_default(),
        };

        let raw::Notifications { comment_created } = notifications.unwrap_or_default();
        let mut notify_on = HashSet::new();
        if comment_created {
            notify_on.insert(NotificationType::CommentCreated);
        }
        let notifications = Notifications { notify_on };

        let email_gateway = match email.and_then(|m| m.gateway) {
            Some(gw_name) => {
                let toml_name = toml::Value::try_from(&gw_name)?;
                let gateway = gateway.unwrap_or_default();

                let gw = match gw_name {
                    raw::EmailGateway::EmailToJsonFile => {
                        let raw::EmailToJsonFile { dir } =
                            gateway.email_to_json_file.ok_or_else(|| {
                                anyhow!("Missing {toml_name} gateway configuration")
                            })?;

                        log::info!("Use JSON file email gateway ({})", dir.display());
                        EmailGateway::EmailToJsonFile { dir }
                    }
                };
                Some(gw)
            }
            None => None,
        };

        let email = Email {
            gateway: email_gateway,
        };

        Ok(Self {
            threads,
            notifications,
            email,
        })
    }
}
