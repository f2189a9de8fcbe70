//! Events emitted on successful state changes. Failed instructions
//! revert without emitting anything.

use anchor_lang::prelude::*;

/// A participant's entry was recorded in the current round's ledger.
#[event]
pub struct EntryRecorded {
    pub participant: Pubkey,
    pub round: u64,
    pub timestamp: i64,
}

/// A draw completed: the winner received their share of the pool and
/// the authority the remainder.
#[event]
pub struct WinnerSelected {
    pub winner: Pubkey,
    pub prize: u64,
    pub round: u64,
}

/// Round state was cleared after a draw; `round` is the new round number.
#[event]
pub struct RoundReset {
    pub round: u64,
}

/// The authority toggled whether entries are accepted.
#[event]
pub struct LotteryStatusChanged {
    pub active: bool,
}

/// The authority changed the entry fee for subsequent entries.
#[event]
pub struct EntryFeeChanged {
    pub entry_fee: u64,
}

/// Funds were donated to the pool outside of an entry.
#[event]
pub struct DonationReceived {
    pub donor: Pubkey,
    pub amount: u64,
}
