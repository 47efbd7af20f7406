//! Off-chain helpers for building `hello_write` instructions and decoding
//! fetched hello records. Everything takes the program id explicitly so
//! callers can target any deployment.

use anchor_lang::{AccountDeserialize, InstructionData, ToAccountMetas};
use solana_program::instruction::Instruction;
use solana_program::pubkey::Pubkey;
use solana_program::system_program;

use crate::state::{find_hello_address, HelloState};

/// Build `hello_write(message)` against the record derived for `authority`.
pub fn hello_write_instruction(program_id: &Pubkey, authority: &Pubkey, message: &str) -> Instruction {
    let (hello_state, _) = find_hello_address(program_id, authority);
    hello_write_instruction_for_record(program_id, authority, &hello_state, message)
}

/// Build `hello_write(message)` against an explicit record account.
pub fn hello_write_instruction_for_record(
    program_id: &Pubkey,
    authority: &Pubkey,
    hello_state: &Pubkey,
    message: &str,
) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: crate::accounts::HelloWrite {
            authority: *authority,
            hello_state: *hello_state,
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: crate::instruction::HelloWrite {
            message: message.to_string(),
        }
        .data(),
    }
}

/// Decode raw account data fetched from the cluster.
pub fn decode_hello_state(data: &[u8]) -> anchor_lang::Result<HelloState> {
    HelloState::try_deserialize(&mut &data[..])
}
