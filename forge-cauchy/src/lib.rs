pub mod explore;
pub mod greedy;
pub mod matrix;
pub mod reorder;

pub use explore::Explorer;
pub use greedy::solve_greedy;
pub use matrix::{CauchyMatrix, synthesize};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid code shape k={k} m={m}: need k >= 1, m >= 1 and k + m <= 256")]
    Shape { k: usize, m: usize },
    #[error("no unused generator element satisfies the constraint for parity row {row}")]
    Exhausted { row: usize },
}

pub(crate) fn check_shape(k: usize, m: usize) -> Result<(), Error> {
    if k == 0 || m == 0 || k + m > 256 {
        return Err(Error::Shape { k, m });
    }
    Ok(())
}
