use anchor_lang::prelude::*;
use switchboard_on_demand::accounts::RandomnessAccountData;

use crate::constants::LOTTERY_SEED;
use crate::error::LotteryError;
use crate::state::LotteryState;

/// Accounts required to commit a randomness account for the next draw.
///
/// Committing before the oracle reveals pins the draw to entropy that
/// neither the authority nor any participant can predict or bias.
#[derive(Accounts)]
pub struct CommitDraw<'info> {
    /// The lottery authority paying transaction fees.
    #[account(mut)]
    pub authority: Signer<'info>,

    /// The singleton lottery state account.
    #[account(
        mut,
        seeds = [LOTTERY_SEED],
        bump = lottery.bump,
    )]
    pub lottery: Box<Account<'info, LotteryState>>,

    /// Randomness account from Switchboard.
    /// CHECK: The account's data is validated manually within the handler.
    pub randomness_account_data: UncheckedAccount<'info>,

    /// System program.
    pub system_program: Program<'info, System>,
}

pub fn process_commit_draw(ctx: Context<CommitDraw>) -> Result<()> {
    let clock = Clock::get()?;
    let lottery = &mut ctx.accounts.lottery;
    lottery.ensure_authority(&ctx.accounts.authority.key())?;

    let randomness_data =
        RandomnessAccountData::parse(ctx.accounts.randomness_account_data.data.borrow())
            .map_err(|_| LotteryError::IncorrectRandomnessAccount)?;

    // only accept a seed from the immediately previous slot: anything
    // older may already have been revealed
    if randomness_data.seed_slot != clock.slot - 1 {
        return Err(LotteryError::RandomnessAlreadyRevealed.into());
    }

    lottery.randomness_account = ctx.accounts.randomness_account_data.key();

    msg!("Randomness committed for round {}", lottery.round);
    Ok(())
}
