use anchor_lang::prelude::*;

/// One vault per mint, seeded by `[VAULT_STATE_SEED, mint]`.
#[account]
#[derive(InitSpace, Debug)]
pub struct VaultState {
    pub mint: Pubkey,
    pub owner: Pubkey,
    pub vault_bump: u8,
    pub state_bump: u8,
}
