pub use ct_core::gateways::email::EmailGateway;

pub mod send_to_json_file;
