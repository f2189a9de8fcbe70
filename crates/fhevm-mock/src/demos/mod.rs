//! Self-contained walkthroughs of the encrypted-computation patterns the
//! lottery program builds on. Each module holds one small state machine
//! plus the tests that double as its usage guide.

pub mod access_control;
pub mod anti_patterns;
pub mod comparisons;
pub mod counter;
pub mod storage;
pub mod user_decrypt;
