use anchor_lang::prelude::*;
use anchor_spl::token_interface::Mint;
use spl_tlv_account_resolution::{account::ExtraAccountMeta, seeds::Seed, state::ExtraAccountMetaList};

use crate::constants::{
    DESTINATION_TOKEN_INDEX, EXTRA_ACCOUNT_METAS_SEED, MINT_INDEX, OWNER_INDEX, PERMIT_SEED,
    TOKEN_ACCOUNT_OWNER_OFFSET,
};

#[derive(Accounts)]
pub struct InitializeExtraAccountMetaList<'info> {
    #[account(mut)]
    payer: Signer<'info>,

    /// CHECK: ExtraAccountMetaList Account, must use these seeds
    #[account(
        init,
        seeds = [EXTRA_ACCOUNT_METAS_SEED, mint.key().as_ref()],
        bump,
        space = ExtraAccountMetaList::size_of(
            InitializeExtraAccountMetaList::extra_account_metas()?.len()
        )?,
        payer = payer
    )]
    pub extra_account_meta_list: AccountInfo<'info>,
    pub mint: InterfaceAccount<'info, Mint>,
    pub system_program: Program<'info, System>,
}

impl<'info> InitializeExtraAccountMetaList<'info> {
    /// Accounts Token-2022 appends to every `Execute` call: the permit entries
    /// of the source owner and of the destination owner.
    pub fn extra_account_metas() -> Result<Vec<ExtraAccountMeta>> {
        let source_permit_seeds = [
            Seed::Literal {
                bytes: PERMIT_SEED.to_vec(),
            },
            Seed::AccountKey { index: MINT_INDEX },
            Seed::AccountKey { index: OWNER_INDEX },
        ];

        // The destination owner is only known from the token account data
        let destination_permit_seeds = [
            Seed::Literal {
                bytes: PERMIT_SEED.to_vec(),
            },
            Seed::AccountKey { index: MINT_INDEX },
            Seed::AccountData {
                account_index: DESTINATION_TOKEN_INDEX,
                data_index: TOKEN_ACCOUNT_OWNER_OFFSET,
                length: 32,
            },
        ];

        Ok(vec![
            ExtraAccountMeta::new_with_seeds(&source_permit_seeds, false, false)?,
            ExtraAccountMeta::new_with_seeds(&destination_permit_seeds, false, false)?,
        ])
    }
}
