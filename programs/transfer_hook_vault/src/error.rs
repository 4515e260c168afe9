use anchor_lang::prelude::*;

#[error_code]
pub enum HookError {
    #[msg("Only the hook admin can manage permits")]
    Unauthorized,
    #[msg("TransferHook: Not transferring")]
    NotTransferring,
    #[msg("Destination is restricted and the source is not whitelisted")]
    DestinationRestricted,
    #[msg("Source is restricted and the destination is not whitelisted")]
    SourceRestricted,
}
