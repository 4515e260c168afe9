use anchor_lang::prelude::*;

// One PDA per (mint, user); stores the flags consumed by the hook and the bump so we don't recompute it
#[account]
#[derive(InitSpace, Debug, Default)]
pub struct PermitEntry {
    pub mint: Pubkey,
    pub user: Pubkey,
    pub is_whitelisted: bool,
    pub is_restricted: bool,
    pub bump: u8,
}

impl PermitEntry {
    /// Reads the entry behind `info`, treating an account that was never
    /// created (no data, not owned by this program) as an empty permit.
    pub fn load_or_default(info: &AccountInfo) -> Result<Self> {
        if info.owner != &crate::ID || info.data_is_empty() {
            return Ok(Self::default());
        }

        let data = info.try_borrow_data()?;
        PermitEntry::try_deserialize(&mut &data[..])
    }

    pub fn status(&self) -> PermitStatus {
        PermitStatus {
            whitelisted: self.is_whitelisted,
            restricted: self.is_restricted,
        }
    }
}

/// The two flags the transfer policy looks at.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PermitStatus {
    pub whitelisted: bool,
    pub restricted: bool,
}

impl PermitStatus {
    pub const NONE: Self = Self {
        whitelisted: false,
        restricted: false,
    };
}
