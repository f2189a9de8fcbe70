//! Mistakes the runtime is built to catch.
//!
//! Each function below does the wrong thing on purpose; the tests pin
//! down exactly how it fails.

use solana_program::pubkey::Pubkey;

use crate::{Handle, MockError, MockRuntime};

/// Reading a ciphertext without ever granting the reader an allowance.
/// Encrypting a value does not make it readable, not even by its author.
pub fn decrypt_without_allowance(rt: &mut MockRuntime, who: Pubkey) -> Result<u64, MockError> {
    let handle = rt.trivial_encrypt(123);
    rt.decrypt_for(handle, who)
}

/// Submitting someone else's input proof as your own. The attestation
/// binds handle and signer together, so replaying it fails.
pub fn reuse_proof_for_other_signer(
    rt: &mut MockRuntime,
    victim: Pubkey,
    attacker: Pubkey,
) -> Result<Handle, MockError> {
    let (_, proof) = rt.encrypt_input(50, victim);
    rt.verify_input(&proof, attacker)
}

/// Feeding a handle minted by a different runtime into an operation.
/// Handles are only meaningful to the runtime that issued them.
pub fn operate_on_foreign_handle(rt: &mut MockRuntime) -> Result<Handle, MockError> {
    let mut other = MockRuntime::with_seed(9999);
    let foreign = other.trivial_encrypt(1);
    let local = rt.trivial_encrypt(2);
    rt.add(foreign, local)
}
