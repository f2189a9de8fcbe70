//! Encrypted counter: the smallest useful encrypted state machine.
//!
//! Every mutation produces a fresh handle, so the owner's allowance has
//! to be re-granted after each operation.

use solana_program::pubkey::Pubkey;

use crate::{Handle, MockError, MockRuntime};

pub struct EncryptedCounter {
    owner: Pubkey,
    value: Handle,
}

impl EncryptedCounter {
    /// Starts the counter at an encrypted zero the owner may decrypt.
    pub fn initialize(rt: &mut MockRuntime, owner: Pubkey) -> Result<Self, MockError> {
        let value = rt.trivial_encrypt(0);
        rt.allow(value, owner)?;
        Ok(Self { owner, value })
    }

    pub fn value(&self) -> Handle {
        self.value
    }

    pub fn increment(&mut self, rt: &mut MockRuntime, amount: u64) -> Result<(), MockError> {
        let delta = rt.trivial_encrypt(amount);
        self.value = rt.add(self.value, delta)?;
        // add() minted a new handle; the old allowance does not carry over.
        rt.allow(self.value, self.owner)
    }

    pub fn decrement(&mut self, rt: &mut MockRuntime, amount: u64) -> Result<(), MockError> {
        let delta = rt.trivial_encrypt(amount);
        self.value = rt.sub(self.value, delta)?;
        rt.allow(self.value, self.owner)
    }

    /// Decrypts the current count for `who`, subject to the ACL.
    pub fn reveal(&self, rt: &MockRuntime, who: Pubkey) -> Result<u64, MockError> {
        rt.decrypt_for(self.value, who)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_tracks_the_count_through_mutations() {
        let mut rt = MockRuntime::new();
        let owner = Pubkey::new_unique();
        let mut counter = EncryptedCounter::initialize(&mut rt, owner).unwrap();

        counter.increment(&mut rt, 5).unwrap();
        counter.increment(&mut rt, 3).unwrap();
        counter.decrement(&mut rt, 2).unwrap();

        assert_eq!(counter.reveal(&rt, owner), Ok(6));
    }

    #[test]
    fn strangers_cannot_read_the_count() {
        let mut rt = MockRuntime::new();
        let owner = Pubkey::new_unique();
        let stranger = Pubkey::new_unique();
        let mut counter = EncryptedCounter::initialize(&mut rt, owner).unwrap();
        counter.increment(&mut rt, 1).unwrap();

        assert_eq!(counter.reveal(&rt, stranger), Err(MockError::AccessDenied));
    }

    #[test]
    fn decrement_below_zero_wraps() {
        let mut rt = MockRuntime::new();
        let owner = Pubkey::new_unique();
        let mut counter = EncryptedCounter::initialize(&mut rt, owner).unwrap();

        counter.decrement(&mut rt, 1).unwrap();

        assert_eq!(counter.reveal(&rt, owner), Ok(u64::MAX));
    }
}
