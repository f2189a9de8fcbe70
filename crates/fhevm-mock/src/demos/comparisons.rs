//! Comparing two ciphertexts without decrypting the operands.
//!
//! The results are themselves encrypted booleans; the viewer only learns
//! the ordering, never the values.

use solana_program::pubkey::Pubkey;

use crate::{Handle, MockError, MockRuntime};

pub struct Comparison {
    pub eq: Handle,
    pub lt: Handle,
    pub gt: Handle,
}

/// Runs the three order checks on `lhs` vs `rhs` and lets `viewer`
/// decrypt the verdicts.
pub fn compare(
    rt: &mut MockRuntime,
    lhs: Handle,
    rhs: Handle,
    viewer: Pubkey,
) -> Result<Comparison, MockError> {
    let eq = rt.eq(lhs, rhs)?;
    let lt = rt.lt(lhs, rhs)?;
    let gt = rt.gt(lhs, rhs)?;
    for handle in [eq, lt, gt] {
        rt.allow(handle, viewer)?;
    }
    Ok(Comparison { eq, lt, gt })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdicts(rt: &MockRuntime, cmp: &Comparison, viewer: Pubkey) -> (u64, u64, u64) {
        (
            rt.decrypt_for(cmp.eq, viewer).unwrap(),
            rt.decrypt_for(cmp.lt, viewer).unwrap(),
            rt.decrypt_for(cmp.gt, viewer).unwrap(),
        )
    }

    #[test]
    fn ordering_is_reported_without_exposing_operands() {
        let mut rt = MockRuntime::new();
        let viewer = Pubkey::new_unique();
        let small = rt.trivial_encrypt(10);
        let large = rt.trivial_encrypt(20);

        let cmp = compare(&mut rt, small, large, viewer).unwrap();
        assert_eq!(verdicts(&rt, &cmp, viewer), (0, 1, 0));

        // The verdicts are visible, the operands still are not.
        assert_eq!(rt.decrypt_for(small, viewer), Err(MockError::AccessDenied));
        assert_eq!(rt.decrypt_for(large, viewer), Err(MockError::AccessDenied));
    }

    #[test]
    fn equal_operands_compare_equal() {
        let mut rt = MockRuntime::new();
        let viewer = Pubkey::new_unique();
        let a = rt.trivial_encrypt(7);
        let b = rt.trivial_encrypt(7);

        let cmp = compare(&mut rt, a, b, viewer).unwrap();
        assert_eq!(verdicts(&rt, &cmp, viewer), (1, 0, 0));
    }

    #[test]
    fn select_builds_an_encrypted_max() {
        let mut rt = MockRuntime::new();
        let viewer = Pubkey::new_unique();
        let a = rt.trivial_encrypt(42);
        let b = rt.trivial_encrypt(17);

        let a_is_larger = rt.gt(a, b).unwrap();
        let max = rt.select(a_is_larger, a, b).unwrap();
        rt.allow(max, viewer).unwrap();

        assert_eq!(rt.decrypt_for(max, viewer), Ok(42));
    }
}
