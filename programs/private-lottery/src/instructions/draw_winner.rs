use anchor_lang::prelude::*;
use switchboard_on_demand::accounts::RandomnessAccountData;

use crate::constants::{LOTTERY_SEED, STATS_SEED, WINNER_SEED};
use crate::error::LotteryError;
use crate::events::{RoundReset, WinnerSelected};
use crate::state::{LotteryState, ParticipantStats, WinnerRecord};

/// Accounts required to draw the current round's winner.
///
/// The winner is only known once the revealed randomness is read inside
/// the instruction, so the winner's wallet and stats accounts cannot be
/// named statically. The caller passes them as remaining accounts, both
/// writable: the winner's wallet first-class, and the winner's stats PDA
/// (`[b"stats", lottery, winner]`). The handler verifies both keys
/// against the selected entry before touching them.
#[derive(Accounts)]
pub struct DrawWinner<'info> {
    /// The lottery authority; receives the pool remainder.
    #[account(mut)]
    pub authority: Signer<'info>,

    /// The singleton lottery state account; the pool is paid out of it.
    #[account(
        mut,
        seeds = [LOTTERY_SEED],
        bump = lottery.bump,
    )]
    pub lottery: Box<Account<'info, LotteryState>>,

    /// Permanent record of this draw, one PDA per round number.
    #[account(
        init,
        payer = authority,
        space = 8 + WinnerRecord::INIT_SPACE,
        seeds = [WINNER_SEED, lottery.key().as_ref(), lottery.round.to_le_bytes().as_ref()],
        bump
    )]
    pub winner_record: Account<'info, WinnerRecord>,

    /// The randomness oracle account committed via `commit_draw`.
    /// CHECK: The account's data is validated manually within the handler.
    pub randomness_account_data: UncheckedAccount<'info>,

    /// System program for record-account creation.
    pub system_program: Program<'info, System>,
}

/// Settles the current round.
///
/// Steps:
/// 1. Verify the caller is the authority and the committed randomness
///    account was passed.
/// 2. Read the revealed value and map it onto the entry ledger.
/// 3. Pay 80% of the pool to the winner and the remainder to the
///    authority, straight out of the state account.
/// 4. Write the round's `WinnerRecord` and flag the winner's stats.
/// 5. Reset the round: ledger cleared, pool zeroed, round incremented.
///
/// Any failure aborts the whole transaction, so a half-paid draw cannot
/// be observed.
pub fn process_draw_winner<'info>(
    ctx: Context<'_, '_, 'info, 'info, DrawWinner<'info>>,
) -> Result<()> {
    let clock = Clock::get()?;
    let authority_key = ctx.accounts.authority.key();
    ctx.accounts.lottery.ensure_authority(&authority_key)?;

    if ctx.accounts.randomness_account_data.key() != ctx.accounts.lottery.randomness_account {
        return Err(LotteryError::IncorrectRandomnessAccount.into());
    }

    let randomness_data =
        RandomnessAccountData::parse(ctx.accounts.randomness_account_data.data.borrow())
            .map_err(|_| LotteryError::IncorrectRandomnessAccount)?;
    let revealed = randomness_data
        .get_value(&clock)
        .map_err(|_| LotteryError::RandomnessNotResolved)?;

    let drawn_round = ctx.accounts.lottery.round;
    let lottery_key = ctx.accounts.lottery.key();
    let index = ctx.accounts.lottery.winner_index(revealed.as_ref())?;

    msg!("Entries: {}", ctx.accounts.lottery.entry_count());
    msg!("Winning slot: {}", index);

    let outcome = ctx.accounts.lottery.apply_draw(index)?;

    // locate the winner's wallet and stats among the remaining accounts
    let winner_wallet = ctx
        .remaining_accounts
        .iter()
        .find(|info| info.key() == outcome.winner)
        .ok_or(LotteryError::MissingWinnerAccount)?;

    let (stats_key, _) = Pubkey::find_program_address(
        &[STATS_SEED, lottery_key.as_ref(), outcome.winner.as_ref()],
        &crate::ID,
    );
    let stats_info = ctx
        .remaining_accounts
        .iter()
        .find(|info| info.key() == stats_key)
        .ok_or(LotteryError::MissingWinnerAccount)?;

    // pay out of the pot held by the state account
    let lottery_info = ctx.accounts.lottery.to_account_info();
    **lottery_info.try_borrow_mut_lamports()? -= outcome.prize + outcome.authority_cut;
    **winner_wallet.try_borrow_mut_lamports()? += outcome.prize;
    **ctx.accounts.authority.try_borrow_mut_lamports()? += outcome.authority_cut;

    let mut stats: Account<ParticipantStats> = Account::try_from(stats_info)?;
    stats.record_win();
    stats.exit(&crate::ID)?;

    let record = &mut ctx.accounts.winner_record;
    record.bump = ctx.bumps.winner_record;
    record.round = drawn_round;
    record.winner = outcome.winner;
    record.prize = outcome.prize;
    record.winning_handle = outcome.winning_handle;
    record.drawn_at = clock.unix_timestamp;

    emit!(WinnerSelected {
        winner: outcome.winner,
        prize: outcome.prize,
        round: drawn_round,
    });
    emit!(RoundReset {
        round: ctx.accounts.lottery.round,
    });

    msg!(
        "Round {} winner {} paid {} lamports, authority {}",
        drawn_round,
        outcome.winner,
        outcome.prize,
        outcome.authority_cut
    );
    Ok(())
}
