use anchor_lang::prelude::*;

use crate::{error::HookError, state::PermitStatus};

/// Decides whether a transfer between two owners may go through.
///
/// A restricted owner can only exchange tokens with a whitelisted
/// counterparty. Owners carrying neither flag transfer freely.
pub struct TransferPolicy;

impl TransferPolicy {
    pub fn check(source: PermitStatus, destination: PermitStatus) -> Result<()> {
        if destination.restricted && !source.whitelisted {
            return err!(HookError::DestinationRestricted);
        }
        if source.restricted && !destination.whitelisted {
            return err!(HookError::SourceRestricted);
        }
        Ok(())
    }
}
