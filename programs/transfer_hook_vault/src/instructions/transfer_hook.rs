use std::cell::RefMut;

use anchor_lang::prelude::*;
use anchor_spl::{
    token_2022::spl_token_2022::{
        extension::{
            transfer_hook::TransferHookAccount, BaseStateWithExtensionsMut,
            PodStateWithExtensionsMut,
        },
        pod::PodAccount,
    },
    token_interface::{Mint, TokenAccount},
};

use crate::{
    constants::{EXTRA_ACCOUNT_METAS_SEED, PERMIT_SEED},
    error::HookError,
    state::{PermitEntry, TransferPolicy},
};

/// Account order is fixed by the SPL `Execute` instruction: source, mint,
/// destination, owner, validation account, then the extra metas.
#[derive(Accounts)]
pub struct TransferHook<'info> {
    #[account(
        token::mint = mint,
        token::authority = owner,
    )]
    pub source_token: InterfaceAccount<'info, TokenAccount>,

    pub mint: InterfaceAccount<'info, Mint>,

    #[account(token::mint = mint)]
    pub destination_token: InterfaceAccount<'info, TokenAccount>,

    /// CHECK: source token account owner, can be SystemAccount or PDA owned by another program
    pub owner: UncheckedAccount<'info>,

    /// CHECK: ExtraAccountMetaList Account
    #[account(
        seeds = [EXTRA_ACCOUNT_METAS_SEED, mint.key().as_ref()],
        bump
    )]
    pub extra_account_meta_list: UncheckedAccount<'info>,

    /// CHECK: may not exist yet, read through PermitEntry::load_or_default
    #[account(
        seeds = [PERMIT_SEED, mint.key().as_ref(), owner.key().as_ref()],
        bump
    )]
    pub source_permit: UncheckedAccount<'info>,

    /// CHECK: may not exist yet, read through PermitEntry::load_or_default
    #[account(
        seeds = [PERMIT_SEED, mint.key().as_ref(), destination_token.owner.as_ref()],
        bump
    )]
    pub destination_permit: UncheckedAccount<'info>,
}

impl<'info> TransferHook<'info> {
    pub fn transfer_hook(&mut self, amount: u64) -> Result<()> {
        self.check_is_transferring()?;

        // Seeds pin both entries to (mint, owner), so only the flags are read
        let source = PermitEntry::load_or_default(&self.source_permit.to_account_info())?;
        let destination =
            PermitEntry::load_or_default(&self.destination_permit.to_account_info())?;

        TransferPolicy::check(source.status(), destination.status())?;

        msg!(
            "Transfer allowed: {} tokens from {} to {}",
            amount,
            self.owner.key(),
            self.destination_token.owner
        );
        Ok(())
    }

    /// Checks that Token-2022 is the caller, i.e. the source account is in
    /// the middle of a transfer.
    fn check_is_transferring(&mut self) -> Result<()> {
        let source_token_info = self.source_token.to_account_info();
        let mut account_data_ref: RefMut<&mut [u8]> = source_token_info.try_borrow_mut_data()?;

        // TokenAccount is a POD type, so the extensions are read in place
        let mut account = PodStateWithExtensionsMut::<PodAccount>::unpack(*account_data_ref)?;
        let account_extension = account.get_extension_mut::<TransferHookAccount>()?;

        require!(
            bool::from(account_extension.transferring),
            HookError::NotTransferring
        );

        Ok(())
    }
}
