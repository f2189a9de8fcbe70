//! Per-user encrypted storage with proof-checked deposits.
//!
//! Each wallet deposits one ciphertext the runtime verified came from
//! that wallet, and only that wallet can read it back. Updating a slot
//! that was never written is a state error, not an access error.

use std::collections::HashMap;

use solana_program::pubkey::Pubkey;
use thiserror::Error;

use crate::{Handle, InputProof, MockError, MockRuntime};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("no value stored for this address")]
    MissingValue,
    #[error(transparent)]
    Runtime(#[from] MockError),
}

#[derive(Default)]
pub struct EncryptedStore {
    slots: HashMap<Pubkey, Handle>,
}

impl EncryptedStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts a client ciphertext after checking its proof, then grants
    /// the depositor read access to their own slot.
    pub fn put(
        &mut self,
        rt: &mut MockRuntime,
        owner: Pubkey,
        proof: &InputProof,
    ) -> Result<(), StoreError> {
        let handle = rt.verify_input(proof, owner)?;
        rt.allow(handle, owner)?;
        self.slots.insert(owner, handle);
        Ok(())
    }

    /// Replaces an existing slot. Requires a prior `put`; writing first
    /// and updating later is the contract this store enforces.
    pub fn update(
        &mut self,
        rt: &mut MockRuntime,
        owner: Pubkey,
        proof: &InputProof,
    ) -> Result<(), StoreError> {
        if !self.slots.contains_key(&owner) {
            return Err(StoreError::MissingValue);
        }
        self.put(rt, owner, proof)
    }

    pub fn read(&self, owner: Pubkey) -> Result<Handle, StoreError> {
        self.slots.get(&owner).copied().ok_or(StoreError::MissingValue)
    }

    /// Decrypts `owner`'s slot for `viewer`, subject to the runtime ACL.
    pub fn reveal(
        &self,
        rt: &MockRuntime,
        owner: Pubkey,
        viewer: Pubkey,
    ) -> Result<u64, StoreError> {
        let handle = self.read(owner)?;
        Ok(rt.decrypt_for(handle, viewer)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_wallet_reads_only_its_own_slot() {
        let mut rt = MockRuntime::new();
        let mut store = EncryptedStore::new();
        let alice = Pubkey::new_unique();
        let bob = Pubkey::new_unique();

        let (_, alice_proof) = rt.encrypt_input(1111, alice);
        let (_, bob_proof) = rt.encrypt_input(2222, bob);
        store.put(&mut rt, alice, &alice_proof).unwrap();
        store.put(&mut rt, bob, &bob_proof).unwrap();

        assert_eq!(store.reveal(&rt, alice, alice), Ok(1111));
        assert_eq!(store.reveal(&rt, bob, bob), Ok(2222));
        assert_eq!(
            store.reveal(&rt, alice, bob),
            Err(StoreError::Runtime(MockError::AccessDenied))
        );
    }

    #[test]
    fn update_requires_an_existing_slot() {
        let mut rt = MockRuntime::new();
        let mut store = EncryptedStore::new();
        let alice = Pubkey::new_unique();
        let (_, proof) = rt.encrypt_input(5, alice);

        assert_eq!(store.update(&mut rt, alice, &proof), Err(StoreError::MissingValue));

        store.put(&mut rt, alice, &proof).unwrap();
        let (_, second) = rt.encrypt_input(6, alice);
        store.update(&mut rt, alice, &second).unwrap();

        assert_eq!(store.reveal(&rt, alice, alice), Ok(6));
    }

    #[test]
    fn a_stolen_proof_is_rejected() {
        let mut rt = MockRuntime::new();
        let mut store = EncryptedStore::new();
        let alice = Pubkey::new_unique();
        let mallory = Pubkey::new_unique();

        let (_, alice_proof) = rt.encrypt_input(1111, alice);
        assert_eq!(
            store.put(&mut rt, mallory, &alice_proof),
            Err(StoreError::Runtime(MockError::InvalidProof))
        );
    }
}
