use anchor_lang::prelude::*;

use crate::errors::HelloError;

/// Upper bound on `HelloState::message`, in bytes (not chars)
pub const MAX_MESSAGE_BYTES: usize = 64;

/// Hello record: one per authority, stored at `find_hello_address(authority)`
#[account]
#[derive(Default, Debug, PartialEq)]
pub struct HelloState {
    /// The wallet allowed to write this record
    pub authority: Pubkey,
    /// Last message written, at most MAX_MESSAGE_BYTES bytes
    pub message: String,
    /// Cluster unix timestamp of the last successful write
    pub updated_at: i64,
}

impl HelloState {
    pub const SPACE: usize = 8 +     // discriminator
        32 +                         // authority
        4 + MAX_MESSAGE_BYTES +      // message (u32 length prefix + bytes)
        8;                           // updated_at
    // Total: 116 bytes

    /// A zeroed record has no authority yet.
    pub fn is_initialized(&self) -> bool {
        self.authority != Pubkey::default()
    }

    /// Apply a write from `authority` at cluster time `now`.
    ///
    /// Every check runs before the first field is touched, so an `Err` leaves
    /// the record exactly as it was. `updated_at` never moves backwards even
    /// if `now` does.
    pub fn apply_write(&mut self, authority: &Pubkey, message: String, now: i64) -> Result<()> {
        if self.is_initialized() {
            require_keys_eq!(self.authority, *authority, HelloError::Unauthorized);
        }
        // the handler checks this first; repeated so the transition holds on its own
        require!(
            message.len() <= MAX_MESSAGE_BYTES,
            HelloError::MessageTooLong
        );

        self.authority = *authority;
        self.message = message;
        self.updated_at = self.updated_at.max(now);

        Ok(())
    }
}
