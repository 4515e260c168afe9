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

/// Vault ATA → owner
#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(
        mut,
        address = vault_state.owner @ VaultError::Unauthorized
    )]
    pub owner: Signer<'info>,

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

    /// CHECK: PDA signer
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

    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = owner,
        associated_token::token_program = token_program,
    )]
    pub owner_ata: InterfaceAccount<'info, TokenAccount>,

    /// CHECK: Token-2022 checks it against the mint's transfer hook extension
    #[account(executable)]
    pub transfer_hook_program: UncheckedAccount<'info>,

    /// CHECK: ExtraAccountMetaList PDA of the hook program
    pub extra_account_meta_list: UncheckedAccount<'info>,

    /// CHECK: permit entry of the hook program (["whitelist", mint, vault_authority])
    pub source_permit: UncheckedAccount<'info>,

    /// CHECK: permit entry of the hook program (["whitelist", mint, owner])
    pub destination_permit: UncheckedAccount<'info>,

    pub token_program: Interface<'info, TokenInterface>,
}

impl<'info> Withdraw<'info> {
    pub fn withdraw(&mut self, amount: u64) -> Result<()> {
        require!(amount > 0, VaultError::InvalidAmountZero);
        require!(
            self.vault_ata.amount >= amount,
            VaultError::InsufficientVaultBalance
        );

        let mint_key = self.mint.key();
        let seeds: &[&[u8]] = &[
            VAULT_AUTH_SEED,
            mint_key.as_ref(),
            &[self.vault_state.vault_bump],
        ];

        invoke_transfer_checked(
            &self.token_program.key(),
            self.vault_ata.to_account_info(),
            self.mint.to_account_info(),
            self.owner_ata.to_account_info(),
            self.vault_authority.to_account_info(),
            &[
                self.transfer_hook_program.to_account_info(),
                self.extra_account_meta_list.to_account_info(),
                self.source_permit.to_account_info(),
                self.destination_permit.to_account_info(),
            ],
            amount,
            self.mint.decimals,
            &[seeds],
        )?;

        msg!("Withdrew {} from vault {}", amount, self.vault_ata.key());
        Ok(())
    }
}
