//! Derivation of the traversal step size from the shared secret.

use fastrand::Rng;

pub const MIN_STRIDE: u32 = 1;
pub const MAX_STRIDE: u32 = 10;

/// Derives the pixel-grid step size from the shared secret.
///
/// The hide and reveal sides each derive the stride independently, so the
/// same secret must map to the same step on both, bit-for-bit and across
/// platforms. WyRand is seeded directly with the secret and one full-range
/// value is drawn; the generator is pinned by the regression test below
/// rather than left to whatever a standard library default happens to be.
pub fn stride_of(secret: u64) -> u32 {
    let mut rng = Rng::with_seed(secret);
    (rng.u64(..) % u64::from(MAX_STRIDE)) as u32 + MIN_STRIDE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_secret_yields_same_stride() {
        for secret in [1, 2, 5, 42, 1337, 99999] {
            assert_eq!(stride_of(secret), stride_of(secret));
        }
    }

    #[test]
    fn stride_stays_within_bounds() {
        for secret in 1..=1000 {
            let stride = stride_of(secret);
            assert!(
                (MIN_STRIDE..=MAX_STRIDE).contains(&stride),
                "stride {stride} for secret {secret}"
            );
        }
    }

    /// Images hidden by older releases must stay readable, so the seeded
    /// generator output is pinned against silent algorithm drift.
    #[test]
    fn stride_values_are_pinned() {
        assert_eq!(stride_of(1), 5);
        assert_eq!(stride_of(2), 7);
        assert_eq!(stride_of(5), 3);
        assert_eq!(stride_of(13), 2);
        assert_eq!(stride_of(42), 1);
        assert_eq!(stride_of(4242), 10);
    }
}
