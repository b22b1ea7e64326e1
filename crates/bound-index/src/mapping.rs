//! Pure index-mapping functions for each boundary condition.
//!
//! These functions consult no state, so callers that already hold a
//! [`BoundaryMode`](crate::BoundaryMode) can use them directly. Both accept any
//! `isize`, including `isize::MIN`, without overflowing.

/// Folds `i` into `[0, period)` using the non-negative modulo.
///
/// Negative indices count back from the end of the period, so `-1` folds to
/// `period - 1`.
#[inline]
fn fold(i: isize, period: usize) -> usize {
    if i >= 0 {
        i.unsigned_abs() % period
    } else {
        // `i + 1` cannot overflow for negative `i`, and its magnitude is `-i - 1`.
        period - (i + 1).unsigned_abs() % period - 1
    }
}

#[inline]
#[track_caller]
fn check_extent(m: usize) {
    assert!(m > 0, "boundary extent must be positive");
    assert!(
        isize::try_from(m).is_ok(),
        "boundary extent must not exceed isize::MAX, got {m}"
    );
}

/// Maps `i` into `[0, m)` treating the axis as cyclic.
///
/// The result is congruent to `i` modulo `m`.
///
/// # Panics
///
/// Panics if `m` is zero or greater than `isize::MAX`.
///
/// # Examples
///
/// ```
/// use bound_index::wrap_circulant;
///
/// assert_eq!(wrap_circulant(-1, 4), 3);
/// assert_eq!(wrap_circulant(4, 4), 0);
/// assert_eq!(wrap_circulant(-5, 4), 3);
/// ```
#[must_use]
#[inline]
#[track_caller]
pub fn wrap_circulant(i: isize, m: usize) -> usize {
    check_extent(m);
    fold(i, m)
}

/// Maps `i` into `[0, m)` by mirroring at both edges.
///
/// The edge elements are repeated, so the access pattern has period `2m`:
/// for `m = 4`, indices `-2, -1, 0, 1, 2, 3, 4, 5` map to
/// `1, 0, 0, 1, 2, 3, 3, 2`.
///
/// # Panics
///
/// Panics if `m` is zero or greater than `isize::MAX`.
///
/// # Examples
///
/// ```
/// use bound_index::wrap_neumann;
///
/// assert_eq!(wrap_neumann(-1, 4), 0);
/// assert_eq!(wrap_neumann(4, 4), 3);
/// assert_eq!(wrap_neumann(8, 4), 0);
/// ```
#[must_use]
#[inline]
#[track_caller]
pub fn wrap_neumann(i: isize, m: usize) -> usize {
    check_extent(m);
    // `m <= isize::MAX`, so `2 * m` fits in `usize`.
    let period = m * 2;
    let j = fold(i, period);
    if j >= m { period - j - 1 } else { j }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod circulant {
        use super::*;

        #[test]
        fn test_examples_len4() {
            assert_eq!(wrap_circulant(-1, 4), 3);
            assert_eq!(wrap_circulant(4, 4), 0);
            assert_eq!(wrap_circulant(7, 4), 3);
            assert_eq!(wrap_circulant(-5, 4), 3);
        }

        #[test]
        fn test_sequence_len4() {
            let expected = [2, 3, 0, 1, 2, 3, 0, 1, 2, 3];
            for (i, expected) in (-2..8).zip(expected) {
                assert_eq!(wrap_circulant(i, 4), expected, "i = {i}");
            }
        }

        #[test]
        fn test_exact_multiples() {
            for k in -3..=3 {
                assert_eq!(wrap_circulant(k * 5, 5), 0);
                assert_eq!(wrap_circulant(k * 5 - 1, 5), 4);
            }
        }

        #[test]
        fn test_len1() {
            for i in -8..=8 {
                assert_eq!(wrap_circulant(i, 1), 0);
            }
        }

        #[test]
        fn test_extreme_indices() {
            // isize::MIN = -2^(N-1), a multiple of every power of two
            assert_eq!(wrap_circulant(isize::MIN, 4), 0);
            assert_eq!(wrap_circulant(isize::MAX, 4), 3);
            assert_eq!(wrap_circulant(isize::MIN, 3), wrap_circulant(isize::MIN + 3, 3));

            let max = isize::MAX.unsigned_abs();
            assert_eq!(wrap_circulant(isize::MAX, max), 0);
            assert_eq!(wrap_circulant(-1, max), max - 1);
            assert_eq!(wrap_circulant(isize::MIN, max), max - 1);
        }

        #[test]
        #[should_panic(expected = "boundary extent must be positive")]
        fn test_rejects_zero_extent() {
            let _ = wrap_circulant(3, 0);
        }

        #[test]
        #[should_panic(expected = "boundary extent must not exceed isize::MAX")]
        fn test_rejects_huge_extent() {
            let _ = wrap_circulant(3, usize::MAX);
        }
    }

    mod neumann {
        use super::*;

        #[test]
        fn test_examples_len4() {
            assert_eq!(wrap_neumann(-1, 4), 0);
            assert_eq!(wrap_neumann(4, 4), 3);
            assert_eq!(wrap_neumann(-2, 4), 1);
            assert_eq!(wrap_neumann(5, 4), 2);
        }

        #[test]
        fn test_sequence_len4() {
            let expected = [2, 1, 0, 0, 1, 2, 3, 3, 2, 1, 0, 0, 1];
            for (i, expected) in (-3..10).zip(expected) {
                assert_eq!(wrap_neumann(i, 4), expected, "i = {i}");
            }
        }

        #[test]
        fn test_period_boundaries() {
            // Either side of every multiple of 2m
            for k in -3..=3 {
                let base = k * 8;
                assert_eq!(wrap_neumann(base, 4), 0);
                assert_eq!(wrap_neumann(base - 1, 4), 0);
                assert_eq!(wrap_neumann(base + 4, 4), 3);
                assert_eq!(wrap_neumann(base + 3, 4), 3);
            }
        }

        #[test]
        fn test_len1_len2() {
            for i in -8..=8 {
                assert_eq!(wrap_neumann(i, 1), 0);
            }

            let expected_len2 = [0, 1, 1, 0, 0, 1, 1, 0, 0];
            for (i, expected) in (-4..=4).zip(expected_len2) {
                assert_eq!(wrap_neumann(i, 2), expected, "i = {i}");
            }
        }

        #[test]
        fn test_extreme_indices() {
            assert_eq!(wrap_neumann(isize::MIN, 4), 0);
            assert_eq!(wrap_neumann(isize::MAX, 4), 0);

            let max = isize::MAX.unsigned_abs();
            assert_eq!(wrap_neumann(isize::MAX, max), max - 1);
            assert_eq!(wrap_neumann(-1, max), 0);
            assert_eq!(wrap_neumann(isize::MIN, max), max - 1);
        }

        #[test]
        #[should_panic(expected = "boundary extent must be positive")]
        fn test_rejects_zero_extent() {
            let _ = wrap_neumann(-1, 0);
        }
    }

    mod properties {
        use proptest::prelude::*;

        use super::*;

        fn extent() -> impl Strategy<Value = usize> {
            prop_oneof![1usize..=16, 1usize..=100_000]
        }

        fn index() -> impl Strategy<Value = isize> {
            prop_oneof![-64isize..=64, -1_000_000isize..=1_000_000]
        }

        proptest! {
            #[test]
            fn circulant_in_range_and_congruent(i in index(), m in extent()) {
                let j = wrap_circulant(i, m);
                prop_assert!(j < m);
                let m_signed = isize::try_from(m).unwrap();
                let j_signed = isize::try_from(j).unwrap();
                prop_assert_eq!((i - j_signed).rem_euclid(m_signed), 0);
            }

            #[test]
            fn neumann_in_range(i in any::<isize>(), m in extent()) {
                prop_assert!(wrap_neumann(i, m) < m);
            }

            #[test]
            fn identity_inside_range(m in extent(), offset in any::<usize>()) {
                let i = offset % m;
                let i_signed = isize::try_from(i).unwrap();
                prop_assert_eq!(wrap_circulant(i_signed, m), i);
                prop_assert_eq!(wrap_neumann(i_signed, m), i);
            }

            #[test]
            fn circulant_periodic(i in index(), m in extent()) {
                let m_signed = isize::try_from(m).unwrap();
                prop_assert_eq!(wrap_circulant(i + m_signed, m), wrap_circulant(i, m));
            }

            #[test]
            fn neumann_periodic(i in index(), m in extent()) {
                let period = isize::try_from(2 * m).unwrap();
                prop_assert_eq!(wrap_neumann(i + period, m), wrap_neumann(i, m));
            }

            #[test]
            fn neumann_mirrors_at_zero(i in index(), m in extent()) {
                prop_assert_eq!(wrap_neumann(-1 - i, m), wrap_neumann(i, m));
            }

            #[test]
            fn circulant_matches_rem_euclid(i in any::<isize>(), m in extent()) {
                let m_signed = isize::try_from(m).unwrap();
                let expected = usize::try_from(i.rem_euclid(m_signed)).unwrap();
                prop_assert_eq!(wrap_circulant(i, m), expected);
            }
        }
    }
}
