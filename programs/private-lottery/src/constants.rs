//! Program-wide constants: PDA seeds, payout split and ledger bounds.

/// Seed of the singleton lottery state PDA.
pub const LOTTERY_SEED: &[u8] = b"lottery";

/// Seed prefix of per-participant stats PDAs.
pub const STATS_SEED: &[u8] = b"stats";

/// Seed prefix of per-round winner record PDAs.
pub const WINNER_SEED: &[u8] = b"winner";

/// Maximum entries held in the ledger for one round. The ledger lives
/// inside the state account, so it has to fit the allocated space.
pub const MAX_ENTRIES: usize = 64;

/// Winner's share of the pool, in basis points.
pub const WINNER_SHARE_BPS: u64 = 8_000;

/// Basis-point denominator. `WINNER_SHARE_BPS` and the authority's
/// complement must sum to this.
pub const BPS_DENOMINATOR: u64 = 10_000;
