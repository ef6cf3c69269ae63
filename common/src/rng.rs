use rand::prelude::{SeedableRng, StdRng};

/// A seeded rng is reproducible across runs, otherwise it is drawn from OS entropy.
pub fn create_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let mut a = create_rng(Some(42));
        let mut b = create_rng(Some(42));

        let a_values = (0..8).map(|_| a.gen::<u32>()).collect::<Vec<_>>();
        let b_values = (0..8).map(|_| b.gen::<u32>()).collect::<Vec<_>>();

        assert_eq!(a_values, b_values);
    }
}
