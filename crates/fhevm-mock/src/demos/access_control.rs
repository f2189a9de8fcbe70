//! Sharing an encrypted value through grants and revocations.
//!
//! The owner grants and revokes viewers at will; the runtime ACL is the
//! single source of truth for who can decrypt.

use solana_program::pubkey::Pubkey;
use thiserror::Error;

use crate::{Handle, MockError, MockRuntime};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccessError {
    #[error("cannot grant to the default address")]
    InvalidGrantee,
    #[error(transparent)]
    Runtime(#[from] MockError),
}

pub struct SharedValue {
    owner: Pubkey,
    handle: Handle,
}

impl SharedValue {
    pub fn create(rt: &mut MockRuntime, owner: Pubkey, value: u64) -> Result<Self, AccessError> {
        let handle = rt.trivial_encrypt(value);
        rt.allow(handle, owner)?;
        Ok(Self { owner, handle })
    }

    pub fn handle(&self) -> Handle {
        self.handle
    }

    pub fn grant(&self, rt: &mut MockRuntime, grantee: Pubkey) -> Result<(), AccessError> {
        if grantee == Pubkey::default() {
            return Err(AccessError::InvalidGrantee);
        }
        Ok(rt.allow(self.handle, grantee)?)
    }

    pub fn revoke(&self, rt: &mut MockRuntime, grantee: Pubkey) -> Result<(), AccessError> {
        Ok(rt.revoke(self.handle, grantee)?)
    }

    pub fn can_view(&self, rt: &MockRuntime, who: Pubkey) -> bool {
        rt.is_allowed(self.handle, who)
    }

    pub fn owner(&self) -> Pubkey {
        self.owner
    }
}
