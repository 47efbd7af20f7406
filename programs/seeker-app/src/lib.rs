use anchor_lang::prelude::*;

pub mod errors;
pub mod events;
pub mod instructions;
#[cfg(not(target_os = "solana"))]
pub mod sdk;
pub mod state;

use instructions::*;

declare_id!("8p7ZHdKM6psXb1wZkMyZdbxBa8yV5DXd5pSdh9WnSFyY");

#[program]
pub mod seeker_app {
    use super::*;

    /// Write `message` into the caller's hello record, creating it on first use
    pub fn hello_write(ctx: Context<HelloWrite>, message: String) -> Result<()> {
        instructions::hello_write::handler(ctx, message)
    }
}
