use crate::domain::model::Reduction;

pub fn digit_sum(mut n: u64) -> u64 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Repeatedly sums decimal digits until the value is below 10, keeping every step.
pub fn reduce(n: u64) -> Reduction {
    let mut steps = vec![n];
    let mut current = n;
    while current >= 10 {
        current = digit_sum(current);
        steps.push(current);
    }
    Reduction::from_steps(steps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_sum() {
        assert_eq!(digit_sum(0), 0);
        assert_eq!(digit_sum(7), 7);
        assert_eq!(digit_sum(2024), 8);
        assert_eq!(digit_sum(u64::MAX), 87);
    }

    #[test]
    fn test_reduce_zero() {
        let r = reduce(0);
        assert_eq!(r.steps(), &[0]);
        assert_eq!(r.final_digit(), 0);
    }

    #[test]
    fn test_reduce_records_every_step() {
        assert_eq!(reduce(35).steps(), &[35, 8]);
        assert_eq!(reduce(99).steps(), &[99, 18, 9]);
        assert_eq!(reduce(199).steps(), &[199, 19, 10, 1]);
    }

    #[test]
    fn test_single_digits_reduce_to_themselves() {
        for n in 0..10 {
            let r = reduce(n);
            assert_eq!(r.steps(), &[n]);
            assert_eq!(r.initial(), n);
        }
    }

    #[test]
    fn test_final_digit_is_single_digit_and_idempotent() {
        for n in (0..5000).chain([u64::MAX, u64::MAX / 3, 1_000_000_007]) {
            let r = reduce(n);
            assert!(r.final_digit() <= 9);
            assert_eq!(r.final_digit() == 0, n == 0);
            let again = reduce(u64::from(r.final_digit()));
            assert_eq!(again.steps(), &[u64::from(r.final_digit())]);
        }
    }
}
