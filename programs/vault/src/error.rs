use anchor_lang::prelude::*;

#[error_code]
pub enum VaultError {
    #[msg("Amount must be greater than zero")]
    InvalidAmountZero,
    #[msg("Mint and token program must both be Token-2022")]
    InvalidTokenProgram,
    #[msg("Only the vault owner can withdraw")]
    Unauthorized,
    #[msg("Vault balance is lower than the requested amount")]
    InsufficientVaultBalance,
}
