use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Allocate, Assign, CreateAccount, Transfer};

use crate::errors::HelloError;
use crate::events::HelloEvent;
use crate::state::{find_hello_address, HelloState, HELLO_SEED, MAX_MESSAGE_BYTES};

#[derive(Accounts)]
pub struct HelloWrite<'info> {
    /// CHECK: must sign and be writable (it pays for the first allocation).
    /// Anchor checks `mut` before `signer`, so both map to Unauthorized.
    #[account(mut @ HelloError::Unauthorized, signer @ HelloError::Unauthorized)]
    pub authority: UncheckedAccount<'info>,

    /// CHECK: address, owner and layout are validated in the handler
    #[account(mut)]
    pub hello_state: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<HelloWrite>, message: String) -> Result<()> {
    let program_id = ctx.program_id;
    let accounts = ctx.accounts;
    let authority = accounts.authority.key();

    let (expected, bump) = find_hello_address(program_id, &authority);
    require_keys_eq!(
        accounts.hello_state.key(),
        expected,
        HelloError::AddressMismatch
    );
    require!(
        message.len() <= MAX_MESSAGE_BYTES,
        HelloError::MessageTooLong
    );

    let clock = Clock::get()?;

    let created = accounts.allocate_if_needed(program_id, bump)?;
    let mut hello_state = if created {
        HelloState::default()
    } else {
        accounts.load()?
    };
    hello_state.apply_write(&authority, message, clock.unix_timestamp)?;
    accounts.store(&hello_state)?;

    emit!(HelloEvent {
        authority,
        message: hello_state.message.clone(),
        updated_at: hello_state.updated_at,
    });

    msg!(
        "SEEKER: {} record for {} ({} bytes)",
        if created { "Created" } else { "Updated" },
        authority,
        hello_state.message.len()
    );

    Ok(())
}

impl<'info> HelloWrite<'info> {
    /// Allocate the record account on first write. Returns `true` if it was
    /// created by this call.
    fn allocate_if_needed(&self, program_id: &Pubkey, bump: u8) -> Result<bool> {
        let hello_state = self.hello_state.to_account_info();
        if hello_state.owner == program_id {
            return Ok(false);
        }
        require_keys_eq!(
            *hello_state.owner,
            solana_program::system_program::ID,
            anchor_lang::error::ErrorCode::AccountOwnedByWrongProgram
        );

        let authority = self.authority.key();
        let signer_seeds: &[&[&[u8]]] = &[&[HELLO_SEED, authority.as_ref(), &[bump]]];
        let space = HelloState::SPACE as u64;
        let rent_exempt = Rent::get()?.minimum_balance(HelloState::SPACE);
        let system = self.system_program.to_account_info();

        let current = hello_state.lamports();
        if current == 0 {
            system_program::create_account(
                CpiContext::new_with_signer(
                    system,
                    CreateAccount {
                        from: self.authority.to_account_info(),
                        to: hello_state,
                    },
                    signer_seeds,
                ),
                rent_exempt,
                space,
                program_id,
            )?;
            return Ok(true);
        }

        // Someone already sent lamports to the address, so create_account
        // would fail. Top up, then allocate and assign separately.
        let top_up = rent_exempt.saturating_sub(current);
        if top_up > 0 {
            system_program::transfer(
                CpiContext::new(
                    system.clone(),
                    Transfer {
                        from: self.authority.to_account_info(),
                        to: hello_state.clone(),
                    },
                ),
                top_up,
            )?;
        }
        system_program::allocate(
            CpiContext::new_with_signer(
                system.clone(),
                Allocate {
                    account_to_allocate: hello_state.clone(),
                },
                signer_seeds,
            ),
            space,
        )?;
        system_program::assign(
            CpiContext::new_with_signer(
                system,
                Assign {
                    account_to_assign: hello_state,
                },
                signer_seeds,
            ),
            program_id,
        )?;

        Ok(true)
    }

    fn load(&self) -> Result<HelloState> {
        let data = self.hello_state.try_borrow_data()?;
        HelloState::try_deserialize(&mut &data[..])
    }

    /// Overwrite the whole account with `hello_state`, zeroing any bytes left
    /// over from a longer previous message.
    fn store(&self, hello_state: &HelloState) -> Result<()> {
        let mut data = self.hello_state.try_borrow_mut_data()?;
        data.fill(0);
        hello_state.try_serialize(&mut &mut data[..])
    }
}
