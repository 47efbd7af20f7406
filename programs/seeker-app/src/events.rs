use anchor_lang::prelude::*;

/// Emitted after every successful `hello_write`
#[event]
pub struct HelloEvent {
    pub authority: Pubkey,
    pub message: String,
    pub updated_at: i64,
}
