use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::constants::LOTTERY_SEED;
use crate::events::DonationReceived;
use crate::state::LotteryState;

/// Accounts required to donate to the pool. Open to any caller.
#[derive(Accounts)]
pub struct Donate<'info> {
    /// The donor funding the pool.
    #[account(mut)]
    pub donor: Signer<'info>,

    /// The singleton lottery state account; receives the donation.
    #[account(
        mut,
        seeds = [LOTTERY_SEED],
        bump = lottery.bump,
    )]
    pub lottery: Box<Account<'info, LotteryState>>,

    /// System program for the transfer.
    pub system_program: Program<'info, System>,
}

/// Accepts a donation unconditionally: no entry is recorded, no stats
/// are touched and no access check applies. The amount joins the pool
/// for the current round's draw.
pub fn process_donate(ctx: Context<Donate>, amount: u64) -> Result<()> {
    ctx.accounts.lottery.credit_donation(amount)?;

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.donor.to_account_info(),
                to: ctx.accounts.lottery.to_account_info(),
            },
        ),
        amount,
    )?;

    emit!(DonationReceived {
        donor: ctx.accounts.donor.key(),
        amount,
    });

    msg!("Donation of {} lamports accepted", amount);
    Ok(())
}
