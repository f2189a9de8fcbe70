use anchor_lang::prelude::*;

use crate::constants::{BPS_DENOMINATOR, MAX_ENTRIES, WINNER_SHARE_BPS};
use crate::error::LotteryError;

/// One participant's submission for the current round.
///
/// The chosen number is carried as an opaque ciphertext handle produced by
/// the confidentiality layer; the program stores and forwards it but never
/// interprets it.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, InitSpace)]
pub struct Entry {
    /// Wallet that paid for this entry.
    pub participant: Pubkey,

    /// Handle of the encrypted chosen number.
    pub number_handle: [u8; 32],

    /// Unix timestamp at submission.
    pub entered_at: i64,
}

/// Everything a completed draw needs to settle: who won, the exact split
/// of the pool and the winning entry's ciphertext handle (decryption of
/// the chosen number stays deferred to the confidentiality layer).
#[derive(Debug)]
pub struct DrawOutcome {
    pub winner: Pubkey,
    pub prize: u64,
    pub authority_cut: u64,
    pub winning_handle: [u8; 32],
}

/// The singleton lottery state account.
///
/// The account also holds the pooled lamports on top of its rent-exempt
/// balance; `prize_pool` tracks the portion accumulated through entries
/// and donations. Raw transfers credited outside the program are not
/// tracked here and are only recovered by the emergency sweep.
#[account]
#[derive(InitSpace)]
pub struct LotteryState {
    /// The bump seed used for deriving the PDA address of this account.
    pub bump: u8,

    /// The authority allowed to draw and to change lottery settings.
    pub authority: Pubkey,

    /// Minimum payment (in lamports) required per entry.
    pub entry_fee: u64,

    /// Whether new entries are currently accepted.
    pub active: bool,

    /// The current round number, starting at 1. Increments by exactly one
    /// per successful draw.
    pub round: u64,

    /// Lamports accumulated for the current round's prize.
    pub prize_pool: u64,

    /// The randomness oracle account committed for the upcoming draw.
    /// Defaults to `Pubkey::default()` until `commit_draw` runs.
    pub randomness_account: Pubkey,

    /// Winner of the most recent draw, for quick lookup. The full history
    /// lives in per-round `WinnerRecord` accounts.
    pub last_winner: Pubkey,

    /// Prize paid by the most recent draw.
    pub last_prize: u64,

    /// The current round's entry ledger, cleared in bulk at draw time.
    #[max_len(MAX_ENTRIES)]
    pub entries: Vec<Entry>,
}

impl LotteryState {
    /// Rejects callers other than the stored authority.
    pub fn ensure_authority(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(self.authority, *caller, LotteryError::NotAuthorized);
        Ok(())
    }

    /// Appends an entry and credits the whole payment to the pool.
    /// Overpayment above the fee is retained, not refunded.
    pub fn register_entry(
        &mut self,
        participant: Pubkey,
        number_handle: [u8; 32],
        amount: u64,
        now: i64,
    ) -> Result<()> {
        require!(self.active, LotteryError::LotteryInactive);
        require!(amount >= self.entry_fee, LotteryError::InsufficientFee);
        require!(self.entries.len() < MAX_ENTRIES, LotteryError::LotteryFull);

        self.entries.push(Entry {
            participant,
            number_handle,
            entered_at: now,
        });
        self.prize_pool += amount;
        Ok(())
    }

    /// Maps revealed randomness onto the entry ledger. A participant with
    /// N entries occupies N slots and has N chances.
    pub fn winner_index(&self, revealed: &[u8]) -> Result<u64> {
        require!(!self.entries.is_empty(), LotteryError::NoEntries);

        let mut seed = [0u8; 8];
        let take = revealed.len().min(8);
        seed[..take].copy_from_slice(&revealed[..take]);
        Ok(u64::from_le_bytes(seed) % self.entries.len() as u64)
    }

    /// Splits the pool into (winner prize, authority cut). The prize is
    /// floored at `WINNER_SHARE_BPS`; the cut is the exact complement, so
    /// the two always sum to the pool.
    pub fn split_pool(&self) -> (u64, u64) {
        let prize = (self.prize_pool as u128 * WINNER_SHARE_BPS as u128
            / BPS_DENOMINATOR as u128) as u64;
        (prize, self.prize_pool - prize)
    }

    /// Settles the draw against the ledger slot at `index` and resets the
    /// round: entries cleared, pool zeroed, round incremented, committed
    /// randomness consumed. Per-participant stats and past winner records
    /// are not part of the reset.
    pub fn apply_draw(&mut self, index: u64) -> Result<DrawOutcome> {
        require!(!self.entries.is_empty(), LotteryError::NoEntries);
        require!(
            (index as usize) < self.entries.len(),
            LotteryError::InvalidWinnerIndex
        );

        let entry = &self.entries[index as usize];
        let (prize, authority_cut) = self.split_pool();
        let outcome = DrawOutcome {
            winner: entry.participant,
            prize,
            authority_cut,
            winning_handle: entry.number_handle,
        };

        self.last_winner = outcome.winner;
        self.last_prize = outcome.prize;
        self.entries.clear();
        self.prize_pool = 0;
        self.round += 1;
        self.randomness_account = Pubkey::default();
        Ok(outcome)
    }

    /// Credits a donation to the pool. Anyone may donate; nothing besides
    /// the pool changes.
    pub fn credit_donation(&mut self, amount: u64) -> Result<()> {
        require!(amount > 0, LotteryError::ZeroAmount);
        self.prize_pool += amount;
        Ok(())
    }

    /// Zeroes the tracked pool after an emergency sweep. Entries and the
    /// round counter deliberately survive: the sweep is a pure fund
    /// recovery, not a round reset.
    pub fn sweep_pool(&mut self) {
        self.prize_pool = 0;
    }

    /// Number of entries in the current round.
    pub fn entry_count(&self) -> u64 {
        self.entries.len() as u64
    }

    /// Number of current-round entries submitted by `participant`.
    pub fn entries_for(&self, participant: &Pubkey) -> u64 {
        self.entries
            .iter()
            .filter(|e| e.participant == *participant)
            .count() as u64
    }
}

/// Lifetime counters for one participant. Never cleared by a draw or an
/// emergency sweep; only the round-scoped ledger resets.
#[account]
#[derive(InitSpace)]
pub struct ParticipantStats {
    pub bump: u8,
    pub participant: Pubkey,
    /// Total entries across all rounds. Monotonically non-decreasing.
    pub entries: u64,
    /// True once the participant has won any draw.
    pub has_won: bool,
}

impl ParticipantStats {
    pub fn record_entry(&mut self) {
        self.entries += 1;
    }

    pub fn record_win(&mut self) {
        self.has_won = true;
    }
}

/// Permanent record of one past draw, stored in its own PDA keyed by the
/// round number. Written once at draw time and never mutated.
#[account]
#[derive(InitSpace)]
pub struct WinnerRecord {
    pub bump: u8,
    pub round: u64,
    pub winner: Pubkey,
    pub prize: u64,
    /// Handle of the winning entry's encrypted number; decryption is
    /// deferred to the confidentiality layer.
    pub winning_handle: [u8; 32],
    pub drawn_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handle(tag: u8) -> [u8; 32] {
        [tag; 32]
    }

    fn fresh_lottery(authority: Pubkey, entry_fee: u64) -> LotteryState {
        LotteryState {
            bump: 255,
            authority,
            entry_fee,
            active: true,
            round: 1,
            prize_pool: 0,
            randomness_account: Pubkey::default(),
            last_winner: Pubkey::default(),
            last_prize: 0,
            entries: Vec::new(),
        }
    }

    fn revealed(raw: u64) -> [u8; 32] {
        let mut bytes = [0u8; 32];
        bytes[..8].copy_from_slice(&raw.to_le_bytes());
        bytes
    }

    #[test]
    fn entry_records_whole_payment() {
        let mut lottery = fresh_lottery(Pubkey::new_unique(), 1_000);
        let alice = Pubkey::new_unique();

        lottery.register_entry(alice, handle(1), 2_500, 10).unwrap();

        assert_eq!(lottery.entry_count(), 1);
        assert_eq!(lottery.prize_pool, 2_500);
        assert_eq!(lottery.entries[0].participant, alice);
        assert_eq!(lottery.entries[0].entered_at, 10);
    }

    #[test]
    fn entry_below_fee_is_rejected_without_side_effects() {
        let mut lottery = fresh_lottery(Pubkey::new_unique(), 1_000);

        let err = lottery
            .register_entry(Pubkey::new_unique(), handle(1), 999, 10)
            .unwrap_err();

        assert_eq!(err, LotteryError::InsufficientFee.into());
        assert_eq!(lottery.entry_count(), 0);
        assert_eq!(lottery.prize_pool, 0);
    }

    #[test]
    fn entry_rejected_while_inactive() {
        let mut lottery = fresh_lottery(Pubkey::new_unique(), 1_000);
        lottery.active = false;

        let err = lottery
            .register_entry(Pubkey::new_unique(), handle(1), 5_000, 10)
            .unwrap_err();

        assert_eq!(err, LotteryError::LotteryInactive.into());
        assert_eq!(lottery.entry_count(), 0);
        assert_eq!(lottery.prize_pool, 0);
    }

    #[test]
    fn entry_rejected_when_ledger_full() {
        let mut lottery = fresh_lottery(Pubkey::new_unique(), 0);
        for i in 0..MAX_ENTRIES {
            lottery
                .register_entry(Pubkey::new_unique(), handle(i as u8), 1, 10)
                .unwrap();
        }

        let err = lottery
            .register_entry(Pubkey::new_unique(), handle(99), 1, 10)
            .unwrap_err();

        assert_eq!(err, LotteryError::LotteryFull.into());
        assert_eq!(lottery.entry_count(), MAX_ENTRIES as u64);
    }

    #[test]
    fn raising_the_fee_applies_to_subsequent_entries() {
        let mut lottery = fresh_lottery(Pubkey::new_unique(), 1_000);
        let bob = Pubkey::new_unique();

        lottery.register_entry(bob, handle(1), 1_000, 10).unwrap();
        lottery.entry_fee = 2_000;

        let err = lottery.register_entry(bob, handle(2), 1_000, 11).unwrap_err();
        assert_eq!(err, LotteryError::InsufficientFee.into());
        // the already-collected payment is not retroactively affected
        assert_eq!(lottery.prize_pool, 1_000);
        assert_eq!(lottery.entry_count(), 1);
    }

    #[test]
    fn split_is_exact_and_complementary() {
        let mut lottery = fresh_lottery(Pubkey::new_unique(), 0);

        for pool in [3_000_000u64, 1, 999, 10_000, u64::from(u32::MAX)] {
            lottery.prize_pool = pool;
            let (prize, cut) = lottery.split_pool();
            assert_eq!(prize, pool * 80 / 100);
            assert_eq!(prize + cut, pool);
        }

        lottery.prize_pool = 3_000_000;
        let (prize, cut) = lottery.split_pool();
        assert_eq!(prize, 2_400_000);
        assert_eq!(cut, 600_000);
    }

    #[test]
    fn draw_clears_round_state() {
        let mut lottery = fresh_lottery(Pubkey::new_unique(), 1_000);
        let alice = Pubkey::new_unique();
        lottery.register_entry(alice, handle(7), 5_000, 10).unwrap();
        lottery.randomness_account = Pubkey::new_unique();

        let outcome = lottery.apply_draw(0).unwrap();

        assert_eq!(outcome.winner, alice);
        assert_eq!(outcome.prize, 4_000);
        assert_eq!(outcome.authority_cut, 1_000);
        assert_eq!(outcome.winning_handle, handle(7));

        assert_eq!(lottery.entry_count(), 0);
        assert_eq!(lottery.prize_pool, 0);
        assert_eq!(lottery.round, 2);
        assert_eq!(lottery.last_winner, alice);
        assert_eq!(lottery.last_prize, 4_000);
        assert_eq!(lottery.randomness_account, Pubkey::default());
    }

    #[test]
    fn draw_with_no_entries_is_rejected() {
        let mut lottery = fresh_lottery(Pubkey::new_unique(), 1_000);
        lottery.prize_pool = 123;

        assert_eq!(
            lottery.winner_index(&revealed(5)).unwrap_err(),
            LotteryError::NoEntries.into()
        );
        assert_eq!(lottery.apply_draw(0).unwrap_err(), LotteryError::NoEntries.into());

        assert_eq!(lottery.round, 1);
        assert_eq!(lottery.prize_pool, 123);
    }

    #[test]
    fn draw_index_out_of_range_is_rejected() {
        let mut lottery = fresh_lottery(Pubkey::new_unique(), 0);
        lottery
            .register_entry(Pubkey::new_unique(), handle(1), 5, 10)
            .unwrap();

        let err = lottery.apply_draw(1).unwrap_err();

        assert_eq!(err, LotteryError::InvalidWinnerIndex.into());
        assert_eq!(lottery.entry_count(), 1);
        assert_eq!(lottery.prize_pool, 5);
        assert_eq!(lottery.round, 1);
    }

    #[test]
    fn winner_index_wraps_by_entry_count() {
        let mut lottery = fresh_lottery(Pubkey::new_unique(), 0);
        for i in 0..3 {
            lottery
                .register_entry(Pubkey::new_unique(), handle(i), 1, 10)
                .unwrap();
        }

        assert_eq!(lottery.winner_index(&revealed(0)).unwrap(), 0);
        assert_eq!(lottery.winner_index(&revealed(7)).unwrap(), 1);
        assert_eq!(lottery.winner_index(&revealed(300)).unwrap(), 0);
        // short reveals are zero-padded rather than rejected
        assert_eq!(lottery.winner_index(&[2u8]).unwrap(), 2);
    }

    #[test]
    fn repeat_entries_occupy_multiple_slots() {
        let mut lottery = fresh_lottery(Pubkey::new_unique(), 0);
        let alice = Pubkey::new_unique();
        let bob = Pubkey::new_unique();

        lottery.register_entry(alice, handle(1), 1, 10).unwrap();
        lottery.register_entry(alice, handle(2), 1, 11).unwrap();
        lottery.register_entry(bob, handle(3), 1, 12).unwrap();

        assert_eq!(lottery.entries_for(&alice), 2);
        assert_eq!(lottery.entries_for(&bob), 1);
        assert_eq!(lottery.apply_draw(1).unwrap().winner, alice);
    }

    #[test]
    fn participant_stats_survive_draws() {
        let mut lottery = fresh_lottery(Pubkey::new_unique(), 0);
        let alice = Pubkey::new_unique();
        let mut stats = ParticipantStats {
            bump: 254,
            participant: alice,
            entries: 0,
            has_won: false,
        };

        for round in 0..3u8 {
            lottery.register_entry(alice, handle(round), 100, 10).unwrap();
            stats.record_entry();
            lottery.apply_draw(0).unwrap();
        }
        stats.record_win();

        // the draws reset the ledger three times; the lifetime counters
        // kept counting
        assert_eq!(stats.entries, 3);
        assert!(stats.has_won);
        assert_eq!(lottery.round, 4);
        assert_eq!(lottery.entry_count(), 0);
    }

    #[test]
    fn authority_gate_rejects_strangers() {
        let authority = Pubkey::new_unique();
        let lottery = fresh_lottery(authority, 1_000);

        assert!(lottery.ensure_authority(&authority).is_ok());
        assert_eq!(
            lottery.ensure_authority(&Pubkey::new_unique()).unwrap_err(),
            LotteryError::NotAuthorized.into()
        );
    }

    #[test]
    fn donations_credit_the_pool_without_entries() {
        let mut lottery = fresh_lottery(Pubkey::new_unique(), 1_000);

        lottery.credit_donation(777).unwrap();

        assert_eq!(lottery.prize_pool, 777);
        assert_eq!(lottery.entry_count(), 0);

        assert_eq!(
            lottery.credit_donation(0).unwrap_err(),
            LotteryError::ZeroAmount.into()
        );
        assert_eq!(lottery.prize_pool, 777);
    }

    #[test]
    fn sweep_zeroes_pool_but_keeps_round_state() {
        let mut lottery = fresh_lottery(Pubkey::new_unique(), 1_000);
        lottery
            .register_entry(Pubkey::new_unique(), handle(1), 1_000, 10)
            .unwrap();

        lottery.sweep_pool();

        assert_eq!(lottery.prize_pool, 0);
        assert_eq!(lottery.entry_count(), 1);
        assert_eq!(lottery.round, 1);
    }
}
