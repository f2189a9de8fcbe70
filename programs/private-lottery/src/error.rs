//! Custom error types returned by the program's instructions.
//!
//! The taxonomy is flat and synchronous: authorization failures
//! (`NotAuthorized`), state failures (inactive lottery, empty or full
//! ledger, randomness lifecycle) and validation failures (underpaid
//! entry, zero amounts, missing winner accounts). Every failure rejects
//! the whole transaction; nothing is retried and no partial state
//! change survives.

use anchor_lang::prelude::*;

#[error_code]
pub enum LotteryError {
    #[msg("Only the lottery authority may perform this action")]
    NotAuthorized,

    #[msg("Lottery is not accepting entries")]
    LotteryInactive,

    #[msg("No entries in the current round")]
    NoEntries,

    #[msg("Entry ledger is full for this round")]
    LotteryFull,

    #[msg("Randomness account does not match the committed one")]
    IncorrectRandomnessAccount,

    #[msg("Randomness has already been revealed")]
    RandomnessAlreadyRevealed,

    #[msg("Randomness is not yet resolved")]
    RandomnessNotResolved,

    #[msg("Payment is below the entry fee")]
    InsufficientFee,

    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    #[msg("Winner wallet or stats account missing from remaining accounts")]
    MissingWinnerAccount,

    #[msg("Winner index is out of range of the entry ledger")]
    InvalidWinnerIndex,
}
