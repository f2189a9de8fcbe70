//! A round-based lottery whose entries carry encrypted number choices.
//!
//! Participants pay an entry fee and submit a ciphertext handle produced
//! by the confidentiality layer; the program never sees the chosen
//! numbers. The authority commits a randomness account, then settles the
//! draw: 80% of the pool to the winner, 20% to the authority, and the
//! round resets. Winner history and per-participant stats live in their
//! own PDAs and survive resets.

#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;
use instructions::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;

declare_id!("ESbuo8KtzDEyV7Az3pnvrmnaXRhL3mbGpuyumwhwmbn7");

#[program]
pub mod private_lottery {
    use super::*;

    /// Creates the lottery state account; the payer becomes the
    /// authority.
    pub fn initialize(ctx: Context<Initialize>, entry_fee: u64) -> Result<()> {
        process_initialize(ctx, entry_fee)
    }

    /// Records a fee-paying entry carrying an opaque encrypted choice.
    pub fn enter_lottery(
        ctx: Context<EnterLottery>,
        number_handle: [u8; 32],
        input_proof: Vec<u8>,
        amount: u64,
    ) -> Result<()> {
        process_enter_lottery(ctx, number_handle, input_proof, amount)
    }

    /// Commits an unrevealed randomness account for the upcoming draw.
    pub fn commit_draw(ctx: Context<CommitDraw>) -> Result<()> {
        process_commit_draw(ctx)
    }

    /// Pays out the current round and resets it for the next one.
    pub fn draw_winner<'info>(
        ctx: Context<'_, '_, 'info, 'info, DrawWinner<'info>>,
    ) -> Result<()> {
        process_draw_winner(ctx)
    }

    /// Toggles whether entries are accepted.
    pub fn set_active(ctx: Context<AdminUpdate>, active: bool) -> Result<()> {
        process_set_active(ctx, active)
    }

    /// Changes the entry fee for subsequent entries.
    pub fn set_entry_fee(ctx: Context<AdminUpdate>, entry_fee: u64) -> Result<()> {
        process_set_entry_fee(ctx, entry_fee)
    }

    /// Sweeps all held funds to the authority without resetting the round.
    pub fn emergency_withdraw(ctx: Context<EmergencyWithdraw>) -> Result<()> {
        process_emergency_withdraw(ctx)
    }

    /// Accepts a donation into the pool from any caller.
    pub fn donate(ctx: Context<Donate>, amount: u64) -> Result<()> {
        process_donate(ctx, amount)
    }
}
