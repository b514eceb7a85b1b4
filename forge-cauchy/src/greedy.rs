use crate::matrix::CauchyMatrix;
use forge_gf256::{GaloisField, WeightTable};

/// Build generator vectors from scratch, one greedy choice at a time, and
/// return the resulting normalized matrix.
///
/// The seed fixes X0 = 1 and Y0 = 0. Each parity row y takes the cheapest
/// unused first-column value `a` from the ranked element list and solves the
/// row-normalization constraint `a * (X0 ^ G) = X0 ^ Y0` for its generator
/// G. Each remaining data column then tries every unused element, scores
/// its weight contribution across all parity rows, and commits the minimum
/// (ties fall to the lowest element value, which is scanned first).
///
/// Choices are never revisited; this is a one-shot construction, not an
/// optimal search.
pub fn solve_greedy(
    field: &GaloisField,
    weights: &WeightTable,
    k: usize,
    m: usize,
) -> Result<CauchyMatrix, crate::Error> {
    crate::check_shape(k, m)?;

    let x0 = 1u8;
    let y0 = 0u8;
    let x0y0 = x0 ^ y0;

    let mut seen = [false; 256];
    seen[x0 as usize] = true;
    seen[y0 as usize] = true;

    let mut ys = vec![0u8; m];
    ys[0] = y0;

    let mut data = vec![0u8; k * m];
    data[..k].fill(1);

    for row in 1..m {
        // Element 0 ranks first but solves no constraint; skip it.
        let placed = weights.ranked().iter().filter(|&&a| a != 0).find_map(|&a| {
            // a * (X0 ^ G) = X0 ^ Y0  =>  G = (X0 ^ Y0 ^ a * X0) / a
            let g = field.div(x0y0 ^ field.mul(a, x0), a);
            (!seen[g as usize]).then_some((a, g))
        });
        let Some((a, g)) = placed else {
            return Err(crate::Error::Exhausted { row });
        };

        seen[g as usize] = true;
        ys[row] = g;
        data[row * k] = a;
    }

    for col in 1..k {
        let mut best = u32::MAX;
        let mut best_b = 0u8;

        for b in 0..=255u8 {
            if seen[b as usize] {
                continue;
            }
            let mut ones = 0;
            for row in 1..m {
                ones += weights.weight(field.div(b ^ y0, ys[row] ^ b));
            }
            if ones < best {
                best = ones;
                best_b = b;
            }
        }

        seen[best_b as usize] = true;
        for row in 1..m {
            data[row * k + col] = field.div(best_b ^ y0, ys[row] ^ best_b);
        }
    }

    let weight = weights.matrix_weight(&data, k, m, k);
    tracing::debug!(k, m, weight, "greedy solve complete");

    Ok(CauchyMatrix::from_parts(k, m, data, weight))
}
