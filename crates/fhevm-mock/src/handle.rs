use std::fmt;

/// Opaque identifier of an encrypted value.
///
/// A handle says nothing about the plaintext behind it; equality of
/// handles only means "the same ciphertext", never "the same value".
/// Two encryptions of the same number yield distinct handles.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle(pub [u8; 32]);

impl Handle {
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn to_bytes(self) -> [u8; 32] {
        self.0
    }
}

impl From<[u8; 32]> for Handle {
    fn from(bytes: [u8; 32]) -> Self {
        Handle(bytes)
    }
}

impl From<Handle> for [u8; 32] {
    fn from(handle: Handle) -> Self {
        handle.0
    }
}

impl fmt::Debug for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handle({}..)", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}
