use anchor_lang::prelude::*;

use crate::{constants::CONFIG_SEED, state::HookConfig};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init,
        payer = admin,
        space = 8 + HookConfig::INIT_SPACE,
        seeds = [CONFIG_SEED],
        bump
    )]
    pub config: Account<'info, HookConfig>,

    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    pub fn initialize(&mut self, bumps: InitializeBumps) -> Result<()> {
        self.config.set_inner(HookConfig {
            admin: self.admin.key(),
            bump: bumps.config,
        });

        msg!("Hook admin set to {}", self.config.admin);
        Ok(())
    }
}
