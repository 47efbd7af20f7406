use anchor_lang::prelude::*;

/// Program error codes. Variant order fixes the numeric codes (6000, 6001, ...)
/// that clients match on, so new variants go at the end.
#[error_code]
pub enum HelloError {
    #[msg("Authority did not sign or does not own this record")]
    Unauthorized,
    #[msg("Message exceeds 64 bytes")]
    MessageTooLong,
    #[msg("Record account is not the address derived for this authority")]
    AddressMismatch,
}
