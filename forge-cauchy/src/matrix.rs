use forge_gf256::{GaloisField, WeightTable};

/// An m x k encoding matrix of field elements, row-major, plus its total
/// weight. Row 0 is the all-ones vector; every m x m submatrix drawn from m
/// of the k columns is invertible as long as the generator vectors were
/// disjoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CauchyMatrix {
    k: usize,
    m: usize,
    data: Vec<u8>,
    weight: u32,
}

impl CauchyMatrix {
    pub(crate) fn from_parts(k: usize, m: usize, data: Vec<u8>, weight: u32) -> Self {
        CauchyMatrix { k, m, data, weight }
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn m(&self) -> usize {
        self.m
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.data[row * self.k + col]
    }

    pub fn row(&self, row: usize) -> &[u8] {
        &self.data[row * self.k..(row + 1) * self.k]
    }

    // Row 0 is all ones in every column, so only parity rows move.
    pub(crate) fn swap_columns(&mut self, a: usize, b: usize) {
        for row in 1..self.m {
            self.data.swap(row * self.k + a, row * self.k + b);
        }
    }
}

/// Build the normalized Cauchy matrix for generator vectors `x` (k data
/// elements) and `y` (m parity elements).
///
/// Row 0 of a Cauchy matrix can always be scaled to all ones, so it is
/// written directly rather than computed. Each remaining entry is
/// `inv(Xx ^ Yy) * (Y0 ^ Xx)`, and each remaining row is then rescaled by
/// whichever of its values minimizes the row's total weight when the row is
/// divided through by it. Scaling rows of a Cauchy matrix preserves
/// invertibility.
///
/// `x` and `y` must be disjoint; a shared element would put `inv(0)` in some
/// entry. The solvers uphold this by construction.
pub fn synthesize(field: &GaloisField, weights: &WeightTable, x: &[u8], y: &[u8]) -> CauchyMatrix {
    let k = x.len();
    let m = y.len();

    let mut data = vec![0u8; k * m];
    let mut total = weights.weight(1) * k as u32;

    data[..k].fill(1);
    for row in 1..m {
        let yc = y[row];
        for col in 0..k {
            let xc = x[col];
            let d = y[0] ^ xc;
            data[row * k + col] = field.mul(field.inv(xc ^ yc), d);
        }
    }

    for row in 1..m {
        let row_data = &mut data[row * k..(row + 1) * k];

        let mut best = u32::MAX;
        let mut best_pivot = row_data[0];
        for col in 0..k {
            let pivot = row_data[col];
            let count: u32 = row_data.iter().map(|&v| weights.weight(field.div(v, pivot))).sum();
            if count < best {
                best = count;
                best_pivot = pivot;
            }
        }

        for v in row_data.iter_mut() {
            *v = field.div(*v, best_pivot);
        }
        total += best;
    }

    CauchyMatrix::from_parts(k, m, data, total)
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

    // Gauss-Jordan over the field; singular iff some column has no pivot.
    fn is_nonsingular(field: &GaloisField, mut a: Vec<Vec<u8>>) -> bool {
        let n = a.len();
        for col in 0..n {
            let Some(pivot_row) = (col..n).find(|&r| a[r][col] != 0) else {
                return false;
            };
            a.swap(col, pivot_row);

            let pivot = a[col][col];
            let pivot_row = a[col].clone();
            for (r, row) in a.iter_mut().enumerate() {
                if r == col || row[col] == 0 {
                    continue;
                }
                let factor = field.div(row[col], pivot);
                for c in col..n {
                    row[c] ^= field.mul(pivot_row[c], factor);
                }
            }
        }
        true
    }

    #[test]
    fn row_zero_is_all_ones() {
        let (field, weights) = field_and_weights();
        let matrix = synthesize(&field, &weights, &[1, 2, 3, 4, 5], &[0, 6, 7]);

        assert!(matrix.row(0).iter().all(|&v| v == 1));
    }

    #[test]
    fn every_square_submatrix_is_invertible() {
        let (field, weights) = field_and_weights();
        let matrix = synthesize(&field, &weights, &[1, 2, 3, 4, 5], &[0, 6, 7]);

        let (k, m) = (matrix.k(), matrix.m());
        for a in 0..k {
            for b in a + 1..k {
                for c in b + 1..k {
                    let cols = [a, b, c];
                    let square: Vec<Vec<u8>> = (0..m)
                        .map(|row| cols.iter().map(|&col| matrix.get(row, col)).collect())
                        .collect();
                    assert!(is_nonsingular(&field, square), "columns {cols:?} are singular");
                }
            }
        }
    }

    #[test]
    fn reported_weight_matches_entries() {
        let (field, weights) = field_and_weights();
        let matrix = synthesize(&field, &weights, &[1, 2, 3, 4, 5, 8, 9], &[0, 6, 7]);

        let recount = weights.matrix_weight(matrix.data(), matrix.k(), matrix.m(), matrix.k());
        assert_eq!(recount, matrix.weight());
    }

    #[test]
    fn entries_are_nonzero_for_disjoint_generators() {
        let (field, weights) = field_and_weights();
        let x = [1u8, 2, 3, 4, 5, 8, 9, 10];
        let y = [0u8, 6, 7];
        let matrix = synthesize(&field, &weights, &x, &y);

        // Disjoint X and Y keep every Xx ^ Yy and Y0 ^ Xx nonzero, so no
        // entry can collapse to the zero element.
        assert!(matrix.data().iter().all(|&v| v != 0));
    }
}
