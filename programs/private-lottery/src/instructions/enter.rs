use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::constants::{LOTTERY_SEED, STATS_SEED};
use crate::events::EntryRecorded;
use crate::state::{LotteryState, ParticipantStats};

/// Accounts required to enter the current round.
///
/// The participant's lifetime stats account is created on their first
/// entry and updated in place afterwards.
#[derive(Accounts)]
pub struct EnterLottery<'info> {
    /// The participant paying for the entry.
    #[account(mut)]
    pub player: Signer<'info>,

    /// The singleton lottery state account; also receives the payment.
    #[account(
        mut,
        seeds = [LOTTERY_SEED],
        bump = lottery.bump,
    )]
    pub lottery: Box<Account<'info, LotteryState>>,

    /// The participant's lifetime counters. Survives round resets.
    #[account(
        init_if_needed,
        payer = player,
        space = 8 + ParticipantStats::INIT_SPACE,
        seeds = [STATS_SEED, lottery.key().as_ref(), player.key().as_ref()],
        bump
    )]
    pub stats: Account<'info, ParticipantStats>,

    /// System program for the payment transfer.
    pub system_program: Program<'info, System>,
}

/// Records an entry for the caller.
///
/// `number_handle` is the ciphertext handle of the chosen number and
/// `input_proof` the attestation produced alongside it; both come from
/// the external confidentiality layer, which is trusted to have
/// validated the proof. The program stores the handle untouched.
///
/// `amount` is the attached payment. Anything at or above the entry fee
/// is accepted and the whole amount joins the pool; overpayment is not
/// refunded.
pub fn process_enter_lottery(
    ctx: Context<EnterLottery>,
    number_handle: [u8; 32],
    _input_proof: Vec<u8>,
    amount: u64,
) -> Result<()> {
    let clock = Clock::get()?;

    // preconditions checked before any funds move
    ctx.accounts.lottery.register_entry(
        ctx.accounts.player.key(),
        number_handle,
        amount,
        clock.unix_timestamp,
    )?;

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.player.to_account_info(),
                to: ctx.accounts.lottery.to_account_info(),
            },
        ),
        amount,
    )?;

    let stats = &mut ctx.accounts.stats;
    if stats.participant == Pubkey::default() {
        stats.bump = ctx.bumps.stats;
        stats.participant = ctx.accounts.player.key();
    }
    stats.record_entry();

    emit!(EntryRecorded {
        participant: ctx.accounts.player.key(),
        round: ctx.accounts.lottery.round,
        timestamp: clock.unix_timestamp,
    });

    msg!(
        "Entry {} recorded for round {}",
        ctx.accounts.lottery.entry_count(),
        ctx.accounts.lottery.round
    );
    Ok(())
}
