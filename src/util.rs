/// Sum of all elements
pub fn sum(x: &[f64]) -> f64 {
    x.iter().sum::<f64>()
}

/// Number of elements, as a float divisor
pub fn count(x: &[f64]) -> f64 {
    x.len() as f64
}

/// Calculate the mean of a vector.
/// No emptiness check, callers guard against `0/0`.
pub fn mean(x: &[f64]) -> f64 {
    sum(x) / count(x)
}

/// Squared deviations of each element from `m`
pub fn squared_deviations(x: &[f64], m: f64) -> impl Iterator<Item = f64> + '_ {
    x.iter().map(move |v| (v - m).powi(2))
}
