/// Returns the Euclidean norm of `v`, scaling by the largest magnitude first.
///
/// Squaring the raw components overflows above roughly `1e154` and
/// underflows to zero below roughly `1e-162`; the scaled sum stays in
/// `[1, len]`, so the result is finite and non-zero for every finite,
/// non-zero input. Any NaN component yields NaN.
#[must_use]
pub fn scaled_norm(v: &[f64]) -> f64 {
    if v.iter().any(|x| x.is_nan()) {
        return f64::NAN;
    }
    let scale = max_abs(v);
    if scale <= 0.0 || scale.is_infinite() {
        return scale;
    }
    let sum: f64 = v
        .iter()
        .map(|x| {
            let s = x / scale;
            s * s
        })
        .sum();
    scale * sum.sqrt()
}

/// Returns the largest absolute component of `v`, or `0.0` if it is empty.
///
/// NaN components are ignored.
#[must_use]
pub fn max_abs(v: &[f64]) -> f64 {
    v.iter().fold(0.0_f64, |m, x| m.max(x.abs()))
}
