//! Machine precision estimate.

/// Smallest `eps` such that `1.0 + eps` is distinguishable from `1.0`.
///
/// Found by repeated halving, so it reports the epsilon of the arithmetic
/// actually in use rather than a hard-coded constant.
pub fn machine_epsilon() -> f64 {
    let mut eps = 1.0_f64;
    while 1.0 + eps > 1.0 {
        eps /= 2.0;
    }
    eps * 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_machine_epsilon_matches_ieee() {
        assert_eq!(machine_epsilon(), f64::EPSILON);
    }

    #[test]
    fn test_machine_epsilon_is_resolvable() {
        let eps = machine_epsilon();
        assert!(1.0 + eps > 1.0);
        assert_eq!(1.0 + eps / 2.0, 1.0);
    }
}
