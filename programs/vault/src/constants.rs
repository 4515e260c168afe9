use anchor_lang::prelude::*;

#[constant]
pub const VAULT_STATE_SEED: &[u8] = b"vault_state";

/// PDA that owns the vault token account and signs withdrawals.
#[constant]
pub const VAULT_AUTH_SEED: &[u8] = b"vault";
