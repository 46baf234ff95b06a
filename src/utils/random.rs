//! Small random generators and ranges.

use rand::distributions::Alphanumeric;
use rand::Rng;

/// Random integer between `min` and `max`, both inclusive. `min` must not
/// exceed `max`.
pub fn random_number_between(min: i64, max: i64) -> i64 {
    rand::thread_rng().gen_range(min..=max)
}

/// Random alphanumeric string whose length is drawn uniformly from
/// `min..=max`. `min` must not exceed `max`.
pub fn random_string(min: usize, max: usize) -> String {
    let mut rng = rand::thread_rng();
    let length = rng.gen_range(min..=max);
    (0..length).map(|_| rng.sample(Alphanumeric) as char).collect()
}

/// Sequential numbers from 1 up to `quantity`, inclusive.
pub fn range_from_one(quantity: u32) -> Vec<u32> {
    (1..=quantity).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_stays_in_bounds() {
        for _ in 0..100 {
            let n = random_number_between(1, 10);
            assert!((1..=10).contains(&n));
        }
    }

    #[test]
    fn degenerate_range_is_constant() {
        assert_eq!(random_number_between(7, 7), 7);
    }

    #[test]
    fn string_length_stays_in_bounds() {
        for _ in 0..50 {
            let s = random_string(5, 10);
            let len = s.chars().count();
            assert!((5..=10).contains(&len), "{s}");
            assert!(s.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn range_from_one_is_inclusive() {
        assert_eq!(range_from_one(5), vec![1, 2, 3, 4, 5]);
        assert!(range_from_one(0).is_empty());
    }
}
