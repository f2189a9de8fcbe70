//! Deferred user decryption, split into a request and a fulfillment.
//!
//! A request is recorded on one step and fulfilled on a later one, the
//! way a relayer answers decryption requests off-chain. The allowance is
//! checked at request time and again when the relayer decrypts.

use solana_program::pubkey::Pubkey;

use crate::{Handle, MockError, MockRuntime};

pub struct UserDecryption {
    handle: Handle,
    requester: Pubkey,
    revealed: Option<u64>,
}

impl UserDecryption {
    /// Records a decryption request. Rejected up front when the
    /// requester holds no allowance on the handle.
    pub fn request(
        rt: &MockRuntime,
        handle: Handle,
        requester: Pubkey,
    ) -> Result<Self, MockError> {
        if !rt.is_allowed(handle, requester) {
            return Err(MockError::AccessDenied);
        }
        Ok(Self {
            handle,
            requester,
            revealed: None,
        })
    }

    /// The relayer step: decrypts and caches the plaintext.
    pub fn fulfill(&mut self, rt: &MockRuntime) -> Result<u64, MockError> {
        let value = rt.decrypt_for(self.handle, self.requester)?;
        self.revealed = Some(value);
        Ok(value)
    }

    pub fn revealed(&self) -> Option<u64> {
        self.revealed
    }

    pub fn requester(&self) -> Pubkey {
        self.requester
    }
}
