pub mod email;
pub mod notify;
pub mod user_communication;
