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

use spl_discriminator::SplDiscriminate;
use spl_tlv_account_resolution::state::ExtraAccountMetaList;
use spl_transfer_hook_interface::instruction::{
    ExecuteInstruction, InitializeExtraAccountMetaListInstruction,
};

declare_id!("H7N63tnhQaS6VJb3bAoqGwycD55cNV5Nn8qpNG4EPESd");

#[program]
pub mod transfer_hook_vault {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        msg!("Greetings from: {:?}", ctx.program_id);
        ctx.accounts.initialize(ctx.bumps)
    }

    pub fn init_mint(
        ctx: Context<CreateMint>,
        decimals: u8,
        mint_authority: Pubkey,
    ) -> Result<()> {
        ctx.accounts.create_mint(decimals, mint_authority)
    }

    pub fn add_whitelisted_account(ctx: Context<PermitOperations>, user: Pubkey) -> Result<()> {
        ctx.accounts.add_whitelisted_account(user, ctx.bumps)
    }

    pub fn remove_whitelisted_account(
        ctx: Context<PermitOperations>,
        user: Pubkey,
    ) -> Result<()> {
        ctx.accounts.remove_whitelisted_account(user, ctx.bumps)
    }

    pub fn add_restricted_account(ctx: Context<PermitOperations>, user: Pubkey) -> Result<()> {
        ctx.accounts.add_restricted_account(user, ctx.bumps)
    }

    pub fn remove_restricted_account(ctx: Context<PermitOperations>, user: Pubkey) -> Result<()> {
        ctx.accounts.remove_restricted_account(user, ctx.bumps)
    }

    pub fn close_permit_entry(ctx: Context<ClosePermitEntry>, user: Pubkey) -> Result<()> {
        ctx.accounts.close_permit_entry(user)
    }

    #[instruction(discriminator = InitializeExtraAccountMetaListInstruction::SPL_DISCRIMINATOR_SLICE)]
    pub fn initialize_transfer_hook(ctx: Context<InitializeExtraAccountMetaList>) -> Result<()> {
        let extra_account_metas = InitializeExtraAccountMetaList::extra_account_metas()?;

        ExtraAccountMetaList::init::<ExecuteInstruction>(
            &mut ctx.accounts.extra_account_meta_list.try_borrow_mut_data()?,
            &extra_account_metas,
        )?;

        msg!(
            "Extra account metas registered for mint {}",
            ctx.accounts.mint.key()
        );
        Ok(())
    }

    #[instruction(discriminator = ExecuteInstruction::SPL_DISCRIMINATOR_SLICE)]
    pub fn transfer_hook(ctx: Context<TransferHook>, amount: u64) -> Result<()> {
        ctx.accounts.transfer_hook(amount)
    }
}
