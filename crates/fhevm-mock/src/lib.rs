//! Plaintext-backed mock of a confidential-computing runtime.
//!
//! The example programs' test suites run against this crate instead of a
//! live coprocessor.
//!
//! On a real deployment, ciphertext handles are produced by an external
//! coprocessor and the plaintexts never leave it. Here the "coprocessor"
//! is an in-memory table: handles look and behave like the real thing
//! (opaque 32-byte identifiers, access-controlled decryption, homomorphic
//! operations returning fresh handles) while the values sit in plain
//! `u64`s so tests can assert on them.
//!
//! The `demos` module hosts the teaching walkthroughs that used to ship
//! as individual example contracts: an encrypted counter, encrypted
//! per-user storage, access-control and comparison demos, the deferred
//! user-decryption flow, and a collection of anti-patterns whose tests
//! prove the runtime rejects them.

pub mod demos;
pub mod handle;
pub mod runtime;

pub use handle::Handle;
pub use runtime::{InputProof, MockError, MockRuntime};
