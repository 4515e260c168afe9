use anchor_lang::prelude::*;
use anchor_spl::{
    token_2022::spl_token_2022::onchain::invoke_transfer_checked,
    token_interface::{Mint, TokenAccount, TokenInterface},
};

use crate::{
    constants::{VAULT_AUTH_SEED, VAULT_STATE_SEED},
    error::VaultError,
    state::VaultState,
};

/// User → vault ATA
#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        seeds = [VAULT_STATE_SEED, mint.key().as_ref()],
        bump = vault_state.state_bump,
        has_one = mint
    )]
    pub vault_state: Account<'info, VaultState>,

    #[account(
        constraint = token_program.key() == anchor_spl::token_2022::ID
            @ VaultError::InvalidTokenProgram,
        constraint = *mint.to_account_info().owner == token_program.key()
            @ VaultError::InvalidTokenProgram,
    )]
    pub mint: InterfaceAccount<'info, Mint>,

    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = user,
        associated_token::token_program = token_program,
    )]
    pub user_ata: InterfaceAccount<'info, TokenAccount>,

    /// CHECK: PDA authority
    #[account(
        seeds = [VAULT_AUTH_SEED, mint.key().as_ref()],
        bump = vault_state.vault_bump
    )]
    pub vault_authority: UncheckedAccount<'info>,

    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = vault_authority,
        associated_token::token_program = token_program,
    )]
    pub vault_ata: InterfaceAccount<'info, TokenAccount>,

    /// CHECK: Token-2022 checks it against the mint's transfer hook extension
    #[account(executable)]
    pub transfer_hook_program: UncheckedAccount<'info>,

    /// CHECK: ExtraAccountMetaList PDA of the hook program (["extra-account-metas", mint])
    pub extra_account_meta_list: UncheckedAccount<'info>,

    /// CHECK: permit entry of the hook program (["whitelist", mint, user])
    pub source_permit: UncheckedAccount<'info>,

    /// CHECK: permit entry of the hook program (["whitelist", mint, vault_authority])
    pub destination_permit: UncheckedAccount<'info>,

    pub token_program: Interface<'info, TokenInterface>,
}

impl<'info> Deposit<'info> {
    pub fn deposit(&mut self, amount: u64) -> Result<()> {
        require!(amount > 0, VaultError::InvalidAmountZero);

        // Token-2022 resolves the hook's accounts out of this list
        invoke_transfer_checked(
            &self.token_program.key(),
            self.user_ata.to_account_info(),
            self.mint.to_account_info(),
            self.vault_ata.to_account_info(),
            self.user.to_account_info(),
            &[
                self.transfer_hook_program.to_account_info(),
                self.extra_account_meta_list.to_account_info(),
                self.source_permit.to_account_info(),
                self.destination_permit.to_account_info(),
            ],
            amount,
            self.mint.decimals,
            &[],
        )?;

        msg!("Deposited {} into vault {}", amount, self.vault_ata.key());
        Ok(())
    }
}
