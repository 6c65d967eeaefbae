//! HTTP protocol layer module
//!
//! Response builders shared by every endpoint, decoupled from the lookup logic.

pub mod response;

// Re-export commonly used builders
pub use response::{
    build_options_response, error_response, json_response, set_server_name,
};
