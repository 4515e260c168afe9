pub mod hook_config;
pub mod permit_entry;
pub mod transfer_policy;

pub use hook_config::*;
pub use permit_entry::*;
pub use transfer_policy::*;
