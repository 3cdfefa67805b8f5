pub mod email;
pub mod notify;
