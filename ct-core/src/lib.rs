//! # ct-core
//!
//! Business rules of comment threads: who may do what ([`authorization`]),
//! what happens when they do it ([`usecases`]) and the ports to the outside
//! world ([`repositories`], [`gateways`]).

pub mod authorization;
pub mod db;
pub mod gateways;
pub mod repositories;
pub mod usecases;

pub mod entities {
    pub use ct_entities::{
        comment::*, email::*, id::*, subscription::*, thread::*, time::*, user::*, vote::*,
    };
}
