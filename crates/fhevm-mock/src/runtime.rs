use std::collections::{HashMap, HashSet};

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use sha3::{Digest, Keccak256};
use solana_program::pubkey::Pubkey;
use thiserror::Error;

use crate::handle::Handle;

/// Failures surfaced by the mock runtime. The real coprocessor rejects
/// the same three ways: an operand nobody registered, a decryption the
/// ACL does not cover, and an input attestation that does not match its
/// signer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MockError {
    #[error("handle is unknown to the runtime")]
    UnknownHandle,
    #[error("address is not allowed to decrypt this handle")]
    AccessDenied,
    #[error("input proof failed verification")]
    InvalidProof,
}

/// Attestation accompanying a client-encrypted input, binding the
/// ciphertext handle to the wallet that produced it. Programs ingest
/// foreign handles through [`MockRuntime::verify_input`] only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputProof {
    handle: Handle,
    signer: Pubkey,
    attestation: [u8; 32],
}

impl InputProof {
    pub fn handle(&self) -> Handle {
        self.handle
    }

    pub fn signer(&self) -> Pubkey {
        self.signer
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(96);
        out.extend_from_slice(self.handle.as_bytes());
        out.extend_from_slice(self.signer.as_ref());
        out.extend_from_slice(&self.attestation);
        out
    }
}

fn attest(handle: Handle, signer: Pubkey) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(b"fhevm-mock:proof");
    hasher.update(handle.as_bytes());
    hasher.update(signer.as_ref());
    hasher.finalize().into()
}

/// The mock coprocessor: a handle table, an ACL and a seeded RNG.
///
/// Deterministic for a given seed, so tests can replay scenarios.
pub struct MockRuntime {
    values: HashMap<Handle, u64>,
    acl: HashMap<Handle, HashSet<Pubkey>>,
    nonce: u64,
    rng: ChaCha20Rng,
}

impl Default for MockRuntime {
    fn default() -> Self {
        Self::new()
    }
}

impl MockRuntime {
    pub fn new() -> Self {
        Self::with_seed(0xF1E0)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            values: HashMap::new(),
            acl: HashMap::new(),
            nonce: 0,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Handles are Keccak-derived from a domain tag, an insertion counter
    /// and fresh salt: distinct insertions never collide and the handle
    /// bytes reveal nothing about the plaintext.
    fn next_handle(&mut self) -> Handle {
        let mut salt = [0u8; 16];
        self.rng.fill_bytes(&mut salt);

        let mut hasher = Keccak256::new();
        hasher.update(b"fhevm-mock:handle");
        hasher.update(self.nonce.to_le_bytes());
        hasher.update(salt);
        self.nonce += 1;
        Handle(hasher.finalize().into())
    }

    fn insert(&mut self, value: u64) -> Handle {
        let handle = self.next_handle();
        self.values.insert(handle, value);
        self.acl.entry(handle).or_default();
        handle
    }

    fn plaintext(&self, handle: Handle) -> Result<u64, MockError> {
        self.values.get(&handle).copied().ok_or(MockError::UnknownHandle)
    }

    /// Encrypts a publicly known constant. The value still needs an
    /// allowance before anyone can decrypt it back.
    pub fn trivial_encrypt(&mut self, value: u64) -> Handle {
        self.insert(value)
    }

    /// Client-side encryption: returns the handle and the attestation a
    /// program will later verify before accepting the handle.
    pub fn encrypt_input(&mut self, value: u64, signer: Pubkey) -> (Handle, InputProof) {
        let handle = self.insert(value);
        let attestation = attest(handle, signer);
        (
            handle,
            InputProof {
                handle,
                signer,
                attestation,
            },
        )
    }

    /// Checks that `proof` attests `signer`'s ownership of its handle.
    pub fn verify_input(&self, proof: &InputProof, signer: Pubkey) -> Result<Handle, MockError> {
        if proof.signer != signer || proof.attestation != attest(proof.handle, proof.signer) {
            return Err(MockError::InvalidProof);
        }
        if !self.values.contains_key(&proof.handle) {
            return Err(MockError::UnknownHandle);
        }
        Ok(proof.handle)
    }

    /// Homomorphic addition, wrapping at 64 bits like the real euint64.
    pub fn add(&mut self, lhs: Handle, rhs: Handle) -> Result<Handle, MockError> {
        let value = self.plaintext(lhs)?.wrapping_add(self.plaintext(rhs)?);
        Ok(self.insert(value))
    }

    /// Homomorphic subtraction, wrapping at 64 bits.
    pub fn sub(&mut self, lhs: Handle, rhs: Handle) -> Result<Handle, MockError> {
        let value = self.plaintext(lhs)?.wrapping_sub(self.plaintext(rhs)?);
        Ok(self.insert(value))
    }

    pub fn eq(&mut self, lhs: Handle, rhs: Handle) -> Result<Handle, MockError> {
        let value = self.plaintext(lhs)? == self.plaintext(rhs)?;
        Ok(self.insert(value as u64))
    }

    pub fn ne(&mut self, lhs: Handle, rhs: Handle) -> Result<Handle, MockError> {
        let value = self.plaintext(lhs)? != self.plaintext(rhs)?;
        Ok(self.insert(value as u64))
    }

    pub fn lt(&mut self, lhs: Handle, rhs: Handle) -> Result<Handle, MockError> {
        let value = self.plaintext(lhs)? < self.plaintext(rhs)?;
        Ok(self.insert(value as u64))
    }

    pub fn le(&mut self, lhs: Handle, rhs: Handle) -> Result<Handle, MockError> {
        let value = self.plaintext(lhs)? <= self.plaintext(rhs)?;
        Ok(self.insert(value as u64))
    }

    pub fn gt(&mut self, lhs: Handle, rhs: Handle) -> Result<Handle, MockError> {
        let value = self.plaintext(lhs)? > self.plaintext(rhs)?;
        Ok(self.insert(value as u64))
    }

    pub fn ge(&mut self, lhs: Handle, rhs: Handle) -> Result<Handle, MockError> {
        let value = self.plaintext(lhs)? >= self.plaintext(rhs)?;
        Ok(self.insert(value as u64))
    }

    /// Branchless choice: returns a handle to `a`'s value when `cond`
    /// is non-zero, `b`'s otherwise.
    pub fn select(&mut self, cond: Handle, a: Handle, b: Handle) -> Result<Handle, MockError> {
        let picked = if self.plaintext(cond)? != 0 {
            self.plaintext(a)?
        } else {
            self.plaintext(b)?
        };
        Ok(self.insert(picked))
    }

    /// Encrypted random value in `[0, upper)`; `upper == 0` yields an
    /// encrypted zero.
    pub fn rand_bounded(&mut self, upper: u64) -> Handle {
        let value = if upper == 0 {
            0
        } else {
            self.rng.next_u64() % upper
        };
        self.insert(value)
    }

    /// Raw oracle-style entropy, the shape a randomness account reveals.
    pub fn reveal_randomness(&mut self) -> [u8; 32] {
        let mut bytes = [0u8; 32];
        self.rng.fill_bytes(&mut bytes);
        bytes
    }

    /// Grants `who` permanent decryption rights on `handle`.
    pub fn allow(&mut self, handle: Handle, who: Pubkey) -> Result<(), MockError> {
        self.acl
            .get_mut(&handle)
            .ok_or(MockError::UnknownHandle)?
            .insert(who);
        Ok(())
    }

    /// Withdraws `who`'s decryption rights on `handle`.
    pub fn revoke(&mut self, handle: Handle, who: Pubkey) -> Result<(), MockError> {
        self.acl
            .get_mut(&handle)
            .ok_or(MockError::UnknownHandle)?
            .remove(&who);
        Ok(())
    }

    pub fn is_allowed(&self, handle: Handle, who: Pubkey) -> bool {
        self.acl
            .get(&handle)
            .map(|holders| holders.contains(&who))
            .unwrap_or(false)
    }

    /// User decryption: hands the plaintext to `who` if, and only if,
    /// the ACL covers them.
    pub fn decrypt_for(&self, handle: Handle, who: Pubkey) -> Result<u64, MockError> {
        let value = self.plaintext(handle)?;
        if !self.is_allowed(handle, who) {
            return Err(MockError::AccessDenied);
        }
        Ok(value)
    }
}
