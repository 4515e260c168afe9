#![allow(unexpected_cfgs)]
#![allow(deprecated)]

use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;

pub use constants::*;
pub use instructions::*;
pub use state::*;

declare_id!("6Ttxuh7AqpLQMkVS9xCAu6ncbsyFmq8f3EZVhskoQ3m4");

#[program]
pub mod vault {
    use super::*;

    pub fn initialize(ctx: Context<InitializeVault>, owner: Pubkey) -> Result<()> {
        ctx.accounts.initialize(owner, &ctx.bumps)
    }

    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        ctx.accounts.deposit(amount)
    }

    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        ctx.accounts.withdraw(amount)
    }
}
