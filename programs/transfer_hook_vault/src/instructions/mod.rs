pub mod init_extra_account_meta;
pub mod initialize;
pub mod mint_token;
pub mod permit_operations;
pub mod transfer_hook;

pub use init_extra_account_meta::*;
pub use initialize::*;
pub use mint_token::*;
pub use permit_operations::*;
pub use transfer_hook::*;
