//! Reduction-based: mean and variance built from sum and count.
use super::error::Result;
use super::util;

pub fn mean_builtin(x: &[f64]) -> Result<f64> {
    super::ensure_nonempty(x, "builtin")?;
    Ok(util::mean(x))
}

/// Population variance, the mean of the squared deviations
pub fn variance_builtin(x: &[f64]) -> Result<f64> {
    let m = mean_builtin(x)?;
    Ok(util::squared_deviations(x, m).sum::<f64>() / util::count(x))
}

/// Population standard deviation using the `sum` and `count` reductions.
///
/// Same contract as [`std_loops`](crate::std_loops).
pub fn std_builtin(x: &[f64]) -> Result<f64> {
    let sd = variance_builtin(x)?.sqrt();
    log::debug!("std_builtin: n = {}, sd = {}", x.len(), sd);
    Ok(sd)
}
