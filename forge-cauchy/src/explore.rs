use crate::matrix::{CauchyMatrix, synthesize};
use forge_gf256::{GaloisField, WeightTable};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Monte Carlo search over generator-vector assignments.
///
/// Each trial shuffles the full 256-element permutation and takes the first
/// k elements as X and the next m as Y, so the vectors are disjoint by
/// construction. The PRNG is seeded explicitly; a fixed seed replays the
/// same trial sequence. Trials share no state beyond the best-known matrix,
/// so the caller may stop, resume, or inspect the best between iterations.
pub struct Explorer {
    k: usize,
    m: usize,
    iterations: u64,
    completed: u64,
    rng: StdRng,
    deck: [u8; 256],
    best: Option<CauchyMatrix>,
}

impl Explorer {
    pub fn new(k: usize, m: usize, iterations: u64, seed: u64) -> Result<Self, crate::Error> {
        crate::check_shape(k, m)?;
        Ok(Explorer {
            k,
            m,
            iterations,
            completed: 0,
            rng: StdRng::seed_from_u64(seed),
            deck: std::array::from_fn(|i| i as u8),
            best: None,
        })
    }

    /// One random trial. Returns whether it improved on the best known
    /// matrix. A non-improving trial is not a failure; iteration simply
    /// continues.
    pub fn step(&mut self, field: &GaloisField, weights: &WeightTable) -> bool {
        self.deck.shuffle(&mut self.rng);
        let (x, rest) = self.deck.split_at(self.k);
        let y = &rest[..self.m];

        let candidate = synthesize(field, weights, x, y);
        self.completed += 1;

        let improved = self.best.as_ref().is_none_or(|best| candidate.weight() < best.weight());
        if improved {
            tracing::debug!(
                iteration = self.completed,
                weight = candidate.weight(),
                "explorer found a better matrix"
            );
            self.best = Some(candidate);
        }
        improved
    }

    /// Run whatever is left of the iteration budget.
    pub fn run(&mut self, field: &GaloisField, weights: &WeightTable) -> Option<&CauchyMatrix> {
        while self.completed < self.iterations {
            self.step(field, weights);
        }
        self.best()
    }

    pub fn best(&self) -> Option<&CauchyMatrix> {
        self.best.as_ref()
    }

    pub fn into_best(self) -> Option<CauchyMatrix> {
        self.best
    }

    pub fn completed(&self) -> u64 {
        self.completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forge_gf256::FAVORITE_POLY;

    fn field_and_weights() -> (GaloisField, WeightTable) {
        let field = GaloisField::new(FAVORITE_POLY).unwrap();
        let weights = WeightTable::new(&field);
        (field, weights)
    }

    #[test]
    fn best_weight_never_increases() {
        let (field, weights) = field_and_weights();
        let mut explorer = Explorer::new(10, 3, 40, 7).unwrap();

        let mut last = u32::MAX;
        for _ in 0..40 {
            explorer.step(&field, &weights);
            let weight = explorer.best().unwrap().weight();
            assert!(weight <= last);
            last = weight;
        }
        assert_eq!(40, explorer.completed());
    }

    #[test]
    fn fixed_seed_replays_the_same_search() {
        let (field, weights) = field_and_weights();

        let mut first = Explorer::new(12, 2, 25, 99).unwrap();
        let mut second = Explorer::new(12, 2, 25, 99).unwrap();
        first.run(&field, &weights);
        second.run(&field, &weights);

        assert_eq!(first.into_best(), second.into_best());
    }

    #[test]
    fn best_matrix_keeps_the_structural_invariants() {
        let (field, weights) = field_and_weights();
        let mut explorer = Explorer::new(9, 4, 10, 1).unwrap();
        let best = explorer.run(&field, &weights).unwrap();

        assert!(best.row(0).iter().all(|&v| v == 1));
        assert!(best.data().iter().all(|&v| v != 0));
    }

    #[test]
    fn empty_budget_finds_nothing() {
        let (field, weights) = field_and_weights();
        let mut explorer = Explorer::new(9, 4, 0, 1).unwrap();
        assert!(explorer.run(&field, &weights).is_none());
    }
}
