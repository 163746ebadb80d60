use crate::aa::{AAFramework, FrameworkError, LabelType};
use anyhow::Result;
use log::debug;
use rand::{seq::SliceRandom, Rng};
use std::collections::BTreeSet;

/// A generator of random AA frameworks with bounded numbers of arguments and attacks.
///
/// The number of arguments is drawn uniformly among the feasible values,
/// then the attacks are drawn uniformly among the couples of chosen arguments (self-attacks included).
///
/// # Example
///
/// ```
/// # use dungaf::utils::RandomFrameworkGenerator;
/// # use rand::{rngs::StdRng, SeedableRng};
/// let generator = RandomFrameworkGenerator::new(3, 5, 2, 4).unwrap();
/// let mut rng = StdRng::seed_from_u64(0);
/// let af = generator.generate(&["a", "b", "c", "d", "e", "f"], &mut rng).unwrap();
/// assert!((3..=5).contains(&af.n_arguments()));
/// assert!((2..=4).contains(&af.n_attacks()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomFrameworkGenerator {
    min_args: usize,
    max_args: usize,
    min_atts: usize,
    max_atts: usize,
}

fn invalid_configuration(msg: String) -> anyhow::Error {
    FrameworkError::InvalidConfiguration(msg).into()
}

fn ceil_sqrt(n: usize) -> usize {
    let mut root = (n as f64).sqrt() as usize;
    while root.saturating_mul(root) < n {
        root += 1;
    }
    while root > 0 && (root - 1) * (root - 1) >= n {
        root -= 1;
    }
    root
}

impl RandomFrameworkGenerator {
    /// Builds a new generator given the bounds (inclusive) on the number of arguments and attacks.
    ///
    /// An [`FrameworkError::InvalidConfiguration`] error is returned if a range is inverted,
    /// or if the minimal number of attacks cannot be reached even with the maximal number of arguments.
    pub fn new(min_args: usize, max_args: usize, min_atts: usize, max_atts: usize) -> Result<Self> {
        if min_args > max_args {
            return Err(invalid_configuration(format!(
                "the minimal number of arguments ({}) is greater than the maximal one ({})",
                min_args, max_args
            )));
        }
        if min_atts > max_atts {
            return Err(invalid_configuration(format!(
                "the minimal number of attacks ({}) is greater than the maximal one ({})",
                min_atts, max_atts
            )));
        }
        if max_args.saturating_mul(max_args) < min_atts {
            return Err(invalid_configuration(format!(
                "{} arguments cannot support {} attacks",
                max_args, min_atts
            )));
        }
        Ok(Self {
            min_args,
            max_args,
            min_atts,
            max_atts,
        })
    }

    /// Generates a random framework which arguments are taken from a pool of labels.
    ///
    /// Repeated labels in the pool are considered once.
    /// An [`FrameworkError::InvalidConfiguration`] error is returned if the pool does not contain enough distinct labels
    /// to reach the minimal number of arguments, or to support the minimal number of attacks.
    pub fn generate<T, R>(&self, pool: &[T], rng: &mut R) -> Result<AAFramework<T>>
    where
        T: LabelType,
        R: Rng + ?Sized,
    {
        let distinct = pool
            .iter()
            .collect::<BTreeSet<&T>>()
            .into_iter()
            .cloned()
            .collect::<Vec<T>>();
        if distinct.len() < self.min_args {
            return Err(invalid_configuration(format!(
                "the pool contains {} distinct labels, while at least {} arguments are required",
                distinct.len(),
                self.min_args
            )));
        }
        let max_n_args = usize::min(self.max_args, distinct.len());
        if max_n_args * max_n_args < self.min_atts {
            return Err(invalid_configuration(format!(
                "the pool contains {} distinct labels, which cannot support {} attacks",
                distinct.len(),
                self.min_atts
            )));
        }
        let min_n_args = usize::max(self.min_args, ceil_sqrt(self.min_atts));
        let n_args = rng.gen_range(min_n_args..=max_n_args);
        let max_n_atts = usize::min(self.max_atts, n_args * n_args);
        let n_atts = rng.gen_range(self.min_atts..=max_n_atts);
        debug!(
            "generating a framework with {} arguments and {} attacks",
            n_args, n_atts
        );
        let args = distinct
            .choose_multiple(rng, n_args)
            .cloned()
            .collect::<Vec<T>>();
        let attacks = if n_atts == 0 {
            vec![]
        } else {
            rand::seq::index::sample(rng, n_args * n_args, n_atts)
                .into_iter()
                .map(|i| [args[i / n_args].clone(), args[i % n_args].clone()])
                .collect::<Vec<[T; 2]>>()
        };
        AAFramework::new_with_arguments_and_attacks(args, attacks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    const POOL: [&str; 8] = ["a", "b", "c", "d", "e", "f", "g", "h"];

    fn assert_invalid(result: Result<RandomFrameworkGenerator>) {
        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<FrameworkError>(),
            Some(FrameworkError::InvalidConfiguration(_))
        ));
    }

    fn assert_invalid_generation(
        generator: RandomFrameworkGenerator,
        pool: &[&'static str],
    ) {
        let mut rng = StdRng::seed_from_u64(0);
        let err = generator.generate(pool, &mut rng).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<FrameworkError>(),
            Some(FrameworkError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_ceil_sqrt() {
        assert_eq!(
            vec![0, 1, 2, 2, 2, 3, 3, 4, 5],
            [0, 1, 2, 3, 4, 5, 9, 16, 17]
                .iter()
                .map(|n| ceil_sqrt(*n))
                .collect::<Vec<usize>>()
        );
    }

    #[test]
    fn test_inverted_arg_range() {
        assert_invalid(RandomFrameworkGenerator::new(5, 4, 5, 5));
    }

    #[test]
    fn test_inverted_att_range() {
        assert_invalid(RandomFrameworkGenerator::new(5, 5, 5, 4));
    }

    #[test]
    fn test_too_many_attacks_for_max_args() {
        assert_invalid(RandomFrameworkGenerator::new(4, 4, 17, 17));
    }

    #[test]
    fn test_pool_too_small_for_min_args() {
        let generator = RandomFrameworkGenerator::new(5, 5, 5, 5).unwrap();
        assert_invalid_generation(generator, &["a", "b", "c", "d", "d"]);
    }

    #[test]
    fn test_pool_too_small_for_min_atts() {
        let generator = RandomFrameworkGenerator::new(4, 6, 26, 26).unwrap();
        assert_invalid_generation(generator, &["a", "b", "c", "d", "d"]);
    }

    #[test]
    fn test_generation_within_bounds() {
        let generator = RandomFrameworkGenerator::new(2, 6, 3, 10).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let af = generator.generate(&POOL, &mut rng).unwrap();
            assert!((2..=6).contains(&af.n_arguments()));
            assert!((3..=10).contains(&af.n_attacks()));
            assert!(af.arguments().iter().all(|a| POOL.contains(a)));
        }
    }

    #[test]
    fn test_attacks_force_more_arguments() {
        let generator = RandomFrameworkGenerator::new(0, 8, 10, 10).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let af = generator.generate(&POOL, &mut rng).unwrap();
            assert!(af.n_arguments() >= 4);
            assert_eq!(10, af.n_attacks());
        }
    }

    #[test]
    fn test_empty_framework() {
        let generator = RandomFrameworkGenerator::new(0, 0, 0, 0).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let af = generator.generate::<&str, _>(&[], &mut rng).unwrap();
        assert_eq!(0, af.n_arguments());
        assert_eq!(0, af.n_attacks());
    }

    #[test]
    fn test_same_seed_same_framework() {
        let generator = RandomFrameworkGenerator::new(3, 8, 0, 20).unwrap();
        let af1 = generator
            .generate(&POOL, &mut StdRng::seed_from_u64(3))
            .unwrap();
        let af2 = generator
            .generate(&POOL, &mut StdRng::seed_from_u64(3))
            .unwrap();
        assert_eq!(af1, af2);
    }
}
