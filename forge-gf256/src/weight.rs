use crate::GaloisField;

/// XOR cost of using `x` as a multiplicative coefficient: the total number
/// of set bits across the 8 columns of its binary companion-matrix
/// expansion. Column 0 is `x` itself and each following column is the
/// previous one doubled in the field, matching how an 8-bit symbol multiply
/// decomposes into shift-and-XOR operations.
pub fn element_weight(field: &GaloisField, x: u8) -> u32 {
    let mut n = x;
    let mut ones = n.count_ones();
    for _ in 1..8 {
        n = field.mul(n, 2);
        ones += n.count_ones();
    }
    ones
}

/// Precomputed weights for all 256 elements, plus the lowest-cost-first
/// traversal order the greedy solver scans.
pub struct WeightTable {
    ones: [u8; 256],
    ranked: [u8; 256],
}

impl WeightTable {
    pub fn new(field: &GaloisField) -> Self {
        let mut ones = [0u8; 256];
        for x in 0..=255u8 {
            ones[x as usize] = element_weight(field, x) as u8;
        }

        let mut ranked: [u8; 256] = std::array::from_fn(|i| i as u8);
        // Stable, so ties keep element order.
        ranked.sort_by_key(|&x| ones[x as usize]);

        WeightTable { ones, ranked }
    }

    #[inline]
    pub fn weight(&self, x: u8) -> u32 {
        self.ones[x as usize] as u32
    }

    /// All 256 elements, ascending by weight.
    pub fn ranked(&self) -> &[u8; 256] {
        &self.ranked
    }

    /// Total weight of the first `active_cols` columns of the first `rows`
    /// rows of a row-major matrix with `k` columns. Scoring a column prefix
    /// lets callers compare partial solutions.
    pub fn matrix_weight(&self, data: &[u8], k: usize, rows: usize, active_cols: usize) -> u32 {
        let mut total = 0;
        for row in 0..rows {
            total += data[row * k..row * k + active_cols]
                .iter()
                .map(|&x| self.weight(x))
                .sum::<u32>();
        }
        total
    }
}
