use anchor_lang::prelude::*;

use crate::constants::LOTTERY_SEED;
use crate::state::LotteryState;

/// Accounts required to initialize the lottery.
///
/// The payer becomes the authority: the only wallet allowed to draw,
/// change settings or sweep funds.
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// The account paying for state-account creation; becomes the
    /// lottery authority.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The singleton lottery state account.
    #[account(
        init,
        payer = payer,
        space = 8 + LotteryState::INIT_SPACE,
        seeds = [LOTTERY_SEED],
        bump
    )]
    pub lottery: Box<Account<'info, LotteryState>>,

    /// System program for account creation.
    pub system_program: Program<'info, System>,
}

pub fn process_initialize(ctx: Context<Initialize>, entry_fee: u64) -> Result<()> {
    let lottery = &mut ctx.accounts.lottery;
    lottery.bump = ctx.bumps.lottery;
    lottery.authority = ctx.accounts.payer.key();
    lottery.entry_fee = entry_fee;
    lottery.active = true;
    lottery.round = 1;
    lottery.prize_pool = 0;
    lottery.randomness_account = Pubkey::default();
    lottery.last_winner = Pubkey::default();
    lottery.last_prize = 0;
    lottery.entries = Vec::new();

    msg!("Lottery initialized, entry fee {} lamports", entry_fee);
    Ok(())
}
