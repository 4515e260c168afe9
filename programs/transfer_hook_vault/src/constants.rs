use anchor_lang::prelude::*;

#[constant]
pub const CONFIG_SEED: &[u8] = b"config";

/// Permit entries live at `[PERMIT_SEED, mint, user]`.
#[constant]
pub const PERMIT_SEED: &[u8] = b"whitelist";

/// Fixed by the SPL transfer hook interface.
pub const EXTRA_ACCOUNT_METAS_SEED: &[u8] = b"extra-account-metas";

/// Indexes into the `Execute` account list.
pub const MINT_INDEX: u8 = 1;
pub const DESTINATION_TOKEN_INDEX: u8 = 2;
pub const OWNER_INDEX: u8 = 3;

/// Offset of the owner field inside an SPL token account.
pub const TOKEN_ACCOUNT_OWNER_OFFSET: u8 = 32;
