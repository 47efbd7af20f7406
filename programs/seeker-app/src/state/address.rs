use anchor_lang::prelude::*;

/// Namespace tag for hello record addresses
pub const HELLO_SEED: &[u8] = b"hello";

/// Derive the hello record address and bump for `authority`.
/// seeds = [HELLO_SEED, authority]
pub fn find_hello_address(program_id: &Pubkey, authority: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[HELLO_SEED, authority.as_ref()], program_id)
}
