//! Population standard deviation of a numeric sequence, computed two ways.
//!
//! [`std_loops`] walks the sequence with explicit loops and running sums,
//! [`std_builtin`] composes the same statistic from sum and count reductions.
//! Both return the same value within floating-point tolerance.
//!
//! ```rust
//! let x = [2., 4., 4., 4., 5., 5., 7., 9.];
//! assert_eq!(dispersion::std_loops(&x).unwrap(), 2.);
//! assert_eq!(dispersion::std_builtin(&x).unwrap(), 2.);
//! ```
//!
//! Variance is always the population variance (divide by N, not N-1).

pub mod builtin;
pub mod error;
pub mod loops;
mod util;

pub use builtin::{mean_builtin, std_builtin, variance_builtin};
pub use error::{DispersionError, Result};
pub use loops::{mean_loops, std_loops, variance_loops};

const EMPTY_MEAN: &str = "mean of an empty sequence is undefined";

fn ensure_nonempty(x: &[f64], strategy: &str) -> Result<()> {
    if x.is_empty() {
        log::warn!("{}: rejecting empty sequence", strategy);
        return Err(DispersionError::InvalidArgument(EMPTY_MEAN));
    }
    Ok(())
}
