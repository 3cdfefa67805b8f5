use ct_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

mod comment;
mod subscription;
mod thread;
mod user;
mod vote;

type Result<T> = std::result::Result<T, repo::Error>;
