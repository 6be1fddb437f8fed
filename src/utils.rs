use rand::Rng;

/// Scalar validity predicate backing the Vec2/Mat22 validity checks:
/// finite and not NaN.
#[inline]
pub fn is_valid_f64(x: f64) -> bool {
    x.is_finite()
}

/// Random number in [-1, 1]
#[inline]
pub fn random_unit(rng: &mut impl Rng) -> f64 {
    rng.gen_range(-1.0..=1.0)
}

#[inline]
pub fn random_range(rng: &mut impl Rng, lo: f64, hi: f64) -> f64 {
    rng.gen_range(lo..=hi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn is_valid_f64_contract() {
        assert!(is_valid_f64(0.0));
        assert!(is_valid_f64(-1.5e300));
        assert!(!is_valid_f64(f64::NAN));
        assert!(!is_valid_f64(f64::INFINITY));
        assert!(!is_valid_f64(f64::NEG_INFINITY));
    }

    #[test]
    fn random_unit_is_bounded() {
        let mut rng = StdRng::seed_from_u64(123);
        for _ in 0..10_000 {
            let v = random_unit(&mut rng);
            assert!(v >= -1.0 && v <= 1.0, "random_unit out of bounds: {v}");
        }
    }

    #[test]
    fn random_range_is_bounded_and_inclusive() {
        let mut rng = StdRng::seed_from_u64(456);
        let lo = -2.0;
        let hi = 3.25;
        for _ in 0..10_000 {
            let v = random_range(&mut rng, lo, hi);
            assert!(v >= lo && v <= hi, "random_range out of bounds: {v}");
        }
        // Degenerate interval should always return the endpoint.
        for _ in 0..100 {
            let v = random_range(&mut rng, 7.0, 7.0);
            assert_eq!(v, 7.0);
        }
    }
}
