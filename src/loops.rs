//! Explicit accumulation: every sum is a hand-written loop.
use super::error::Result;

/// Mean via an explicit running sum and count.
pub fn mean_loops(x: &[f64]) -> Result<f64> {
    super::ensure_nonempty(x, "loops")?;
    let mut total = 0f64;
    let mut n = 0usize;
    for &v in x {
        total += v;
        n += 1;
    }
    Ok(total / n as f64)
}

/// Population variance:
/// $$ \frac{1}{N} \sum^N_i (x_i - \bar{x})^2 $$
pub fn variance_loops(x: &[f64]) -> Result<f64> {
    let m = mean_loops(x)?;
    let mut sq_total = 0f64;
    let mut n = 0usize;
    for &v in x {
        let dev = v - m;
        sq_total += dev * dev;
        n += 1;
    }
    Ok(sq_total / n as f64)
}

/// Population standard deviation using loops.
///
/// Fails with `InvalidArgument` on an empty sequence,
/// a single element gives `0.0`.
pub fn std_loops(x: &[f64]) -> Result<f64> {
    let sd = variance_loops(x)?.sqrt();
    log::debug!("std_loops: n = {}, sd = {}", x.len(), sd);
    Ok(sd)
}
