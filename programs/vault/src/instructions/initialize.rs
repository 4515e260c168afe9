use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface},
};

use crate::{
    constants::{VAULT_AUTH_SEED, VAULT_STATE_SEED},
    error::VaultError,
    state::VaultState,
};

#[derive(Accounts)]
pub struct InitializeVault<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        constraint = token_program.key() == anchor_spl::token_2022::ID
            @ VaultError::InvalidTokenProgram,
        constraint = *mint.to_account_info().owner == token_program.key()
            @ VaultError::InvalidTokenProgram,
    )]
    pub mint: InterfaceAccount<'info, Mint>,

    /// CHECK: PDA authority over the vault ATA, holds no data
    #[account(
        seeds = [VAULT_AUTH_SEED, mint.key().as_ref()],
        bump
    )]
    pub vault_authority: UncheckedAccount<'info>,

    #[account(
        init,
        payer = payer,
        space = 8 + VaultState::INIT_SPACE,
        seeds = [VAULT_STATE_SEED, mint.key().as_ref()],
        bump
    )]
    pub vault_state: Account<'info, VaultState>,

    #[account(
        init,
        payer = payer,
        associated_token::mint = mint,
        associated_token::authority = vault_authority,
        associated_token::token_program = token_program,
    )]
    pub vault_ata: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> InitializeVault<'info> {
    pub fn initialize(&mut self, owner: Pubkey, bumps: &InitializeVaultBumps) -> Result<()> {
        self.vault_state.set_inner(VaultState {
            mint: self.mint.key(),
            owner,
            vault_bump: bumps.vault_authority,
            state_bump: bumps.vault_state,
        });

        msg!(
            "Vault for mint {} opened, owner {}, token account {}",
            self.mint.key(),
            owner,
            self.vault_ata.key()
        );
        Ok(())
    }
}
