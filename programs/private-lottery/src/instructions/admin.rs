use anchor_lang::prelude::*;

use crate::constants::LOTTERY_SEED;
use crate::events::{EntryFeeChanged, LotteryStatusChanged};
use crate::state::LotteryState;

/// Accounts shared by the authority-gated setting updates.
#[derive(Accounts)]
pub struct AdminUpdate<'info> {
    /// The lottery authority.
    pub authority: Signer<'info>,

    /// The singleton lottery state account.
    #[account(
        mut,
        seeds = [LOTTERY_SEED],
        bump = lottery.bump,
    )]
    pub lottery: Box<Account<'info, LotteryState>>,
}

/// Accounts required for the emergency fund sweep.
#[derive(Accounts)]
pub struct EmergencyWithdraw<'info> {
    /// The lottery authority; receives the swept funds.
    #[account(mut)]
    pub authority: Signer<'info>,

    /// The singleton lottery state account holding the funds.
    #[account(
        mut,
        seeds = [LOTTERY_SEED],
        bump = lottery.bump,
    )]
    pub lottery: Box<Account<'info, LotteryState>>,
}

/// Toggles whether new entries are accepted. Nothing else changes: the
/// ledger, pool and round survive deactivation untouched.
pub fn process_set_active(ctx: Context<AdminUpdate>, active: bool) -> Result<()> {
    ctx.accounts
        .lottery
        .ensure_authority(&ctx.accounts.authority.key())?;
    ctx.accounts.lottery.active = active;

    emit!(LotteryStatusChanged { active });
    msg!("Lottery active: {}", active);
    Ok(())
}

/// Updates the entry fee. Takes effect for subsequent entries in the
/// same round; already-collected payments are not revisited.
pub fn process_set_entry_fee(ctx: Context<AdminUpdate>, entry_fee: u64) -> Result<()> {
    ctx.accounts
        .lottery
        .ensure_authority(&ctx.accounts.authority.key())?;
    ctx.accounts.lottery.entry_fee = entry_fee;

    emit!(EntryFeeChanged { entry_fee });
    msg!("Entry fee set to {} lamports", entry_fee);
    Ok(())
}

/// Sweeps every lamport above the state account's rent-exempt floor to
/// the authority. The held balance can exceed the tracked pool when raw
/// transfers were credited outside the program; the sweep recovers those
/// too. A pure fund recovery: the ledger and round counter are left
/// untouched.
pub fn process_emergency_withdraw(ctx: Context<EmergencyWithdraw>) -> Result<()> {
    ctx.accounts
        .lottery
        .ensure_authority(&ctx.accounts.authority.key())?;

    let lottery_info = ctx.accounts.lottery.to_account_info();
    let rent_floor = Rent::get()?.minimum_balance(lottery_info.data_len());
    let held = lottery_info.lamports().saturating_sub(rent_floor);

    **lottery_info.try_borrow_mut_lamports()? -= held;
    **ctx.accounts.authority.try_borrow_mut_lamports()? += held;

    ctx.accounts.lottery.sweep_pool();

    msg!("Emergency withdraw: {} lamports", held);
    Ok(())
}
