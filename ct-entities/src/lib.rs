#![deny(missing_debug_implementations)]

//! # ct-entities
//!
//! Reusable, agnostic domain entities for comment threads.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod comment;
pub mod email;
pub mod id;
pub mod subscription;
pub mod thread;
pub mod time;
pub mod user;
pub mod vote;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
