use anchor_lang::prelude::*;

/// Program-wide settings written once by `initialize`.
#[account]
#[derive(InitSpace, Debug)]
pub struct HookConfig {
    pub admin: Pubkey,
    pub bump: u8,
}
