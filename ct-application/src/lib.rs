#[macro_use]
extern crate log;

mod comments;
mod controller;
mod threads;
mod users;

pub mod prelude {
    pub use super::{comments::*, controller::*, threads::*, users::*};
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use ct_core::{authorization, entities::*, usecases};

#[cfg(test)]
pub(crate) mod tests;

pub mod inmem {
    pub use ct_db_inmem::Connections;
}
