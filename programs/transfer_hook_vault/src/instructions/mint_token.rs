use anchor_lang::prelude::*;
use anchor_lang::solana_program::program::invoke;
use anchor_spl::{
    token_2022::spl_token_2022::{
        extension::{
            transfer_hook::instruction::initialize as initialize_transfer_hook, ExtensionType,
        },
        instruction as token_instruction,
        state::Mint as MintState,
    },
    token_interface::TokenInterface,
};

#[derive(Accounts)]
pub struct CreateMint<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(mut)]
    pub mint: Signer<'info>,

    pub system_program: Program<'info, System>,
    pub token_program: Interface<'info, TokenInterface>,
}

impl<'info> CreateMint<'info> {
    pub fn create_mint(&mut self, decimals: u8, mint_authority: Pubkey) -> Result<()> {
        let size =
            ExtensionType::try_calculate_account_len::<MintState>(&[ExtensionType::TransferHook])?;
        let lamports = Rent::get()?.minimum_balance(size);

        anchor_lang::system_program::create_account(
            CpiContext::new(
                self.system_program.to_account_info(),
                anchor_lang::system_program::CreateAccount {
                    from: self.payer.to_account_info(),
                    to: self.mint.to_account_info(),
                },
            ),
            lamports,
            size as u64,
            &self.token_program.key(),
        )?;

        // The extension has to be initialized before the mint itself
        invoke(
            &initialize_transfer_hook(
                &self.token_program.key(),
                &self.mint.key(),
                Some(self.payer.key()),
                Some(crate::ID),
            )?,
            &[
                self.token_program.to_account_info(),
                self.mint.to_account_info(),
            ],
        )?;

        invoke(
            &token_instruction::initialize_mint2(
                &self.token_program.key(),
                &self.mint.key(),
                &mint_authority,
                None,
                decimals,
            )?,
            &[
                self.token_program.to_account_info(),
                self.mint.to_account_info(),
            ],
        )?;

        msg!(
            "Mint {} created with transfer hook {} ({} decimals, authority {})",
            self.mint.key(),
            crate::ID,
            decimals,
            mint_authority
        );
        Ok(())
    }
}
