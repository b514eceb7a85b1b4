use crate::matrix::CauchyMatrix;
use forge_gf256::WeightTable;

/// Canonicalize a matrix by selection-sorting its columns ascending by the
/// weight of their parity entries. Row 0 is all ones in every column and is
/// neither counted nor moved. Total matrix weight is invariant under the
/// permutation, and a sorted matrix sorts to itself.
pub fn sort_columns_by_weight(weights: &WeightTable, matrix: &mut CauchyMatrix) {
    let k = matrix.k();
    let m = matrix.m();

    let mut counts: Vec<u32> = (0..k)
        .map(|col| (1..m).map(|row| weights.weight(matrix.get(row, col))).sum())
        .collect();

    for col in 0..k {
        let mut smallest = counts[col];
        let mut best_col = col;
        for z in col + 1..k {
            if counts[z] < smallest {
                smallest = counts[z];
                best_col = z;
            }
        }

        counts[best_col] = counts[col];
        counts[col] = smallest;
        if best_col != col {
            matrix.swap_columns(col, best_col);
        }
    }
}
