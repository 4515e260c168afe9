use anchor_lang::prelude::*;
use anchor_spl::token_interface::Mint;

use crate::{
    constants::{CONFIG_SEED, PERMIT_SEED},
    error::HookError,
    state::{HookConfig, PermitEntry},
};

#[derive(Accounts)]
#[instruction(user: Pubkey)]
pub struct PermitOperations<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump,
        has_one = admin @ HookError::Unauthorized,
    )]
    pub config: Account<'info, HookConfig>,

    pub mint: InterfaceAccount<'info, Mint>,

    // Entry for each (mint, user) pair - created on the first operation touching it
    #[account(
        init_if_needed,
        payer = admin,
        space = 8 + PermitEntry::INIT_SPACE,
        seeds = [PERMIT_SEED, mint.key().as_ref(), user.as_ref()],
        bump,
    )]
    pub permit_entry: Account<'info, PermitEntry>,

    pub system_program: Program<'info, System>,
}

impl<'info> PermitOperations<'info> {
    pub fn add_whitelisted_account(
        &mut self,
        user: Pubkey,
        bumps: PermitOperationsBumps,
    ) -> Result<()> {
        self.bind(user, bumps);
        self.permit_entry.is_whitelisted = true;
        self.log_state();
        Ok(())
    }

    pub fn remove_whitelisted_account(
        &mut self,
        user: Pubkey,
        bumps: PermitOperationsBumps,
    ) -> Result<()> {
        self.bind(user, bumps);
        self.permit_entry.is_whitelisted = false;
        self.log_state();
        Ok(())
    }

    pub fn add_restricted_account(
        &mut self,
        user: Pubkey,
        bumps: PermitOperationsBumps,
    ) -> Result<()> {
        self.bind(user, bumps);
        self.permit_entry.is_restricted = true;
        self.log_state();
        Ok(())
    }

    pub fn remove_restricted_account(
        &mut self,
        user: Pubkey,
        bumps: PermitOperationsBumps,
    ) -> Result<()> {
        self.bind(user, bumps);
        self.permit_entry.is_restricted = false;
        self.log_state();
        Ok(())
    }

    /// Fills the identity fields; a no-op on entries that already exist.
    fn bind(&mut self, user: Pubkey, bumps: PermitOperationsBumps) {
        let entry = &mut self.permit_entry;
        entry.mint = self.mint.key();
        entry.user = user;
        entry.bump = bumps.permit_entry;
    }

    fn log_state(&self) {
        msg!(
            "Permit for {} on mint {}: whitelisted={}, restricted={}",
            self.permit_entry.user,
            self.permit_entry.mint,
            self.permit_entry.is_whitelisted,
            self.permit_entry.is_restricted
        );
    }
}

#[derive(Accounts)]
#[instruction(user: Pubkey)]
pub struct ClosePermitEntry<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump,
        has_one = admin @ HookError::Unauthorized,
    )]
    pub config: Account<'info, HookConfig>,

    pub mint: InterfaceAccount<'info, Mint>,

    #[account(
        mut,
        seeds = [PERMIT_SEED, mint.key().as_ref(), user.as_ref()],
        bump = permit_entry.bump,
        close = admin,
    )]
    pub permit_entry: Account<'info, PermitEntry>,
}

impl<'info> ClosePermitEntry<'info> {
    pub fn close_permit_entry(&mut self, user: Pubkey) -> Result<()> {
        // Closing the account drops every flag the user had for this mint
        msg!("Permit for {} on mint {} closed", user, self.mint.key());
        Ok(())
    }
}
