//! Bernstein polynomials.

/// Binomial coefficient `C(n, k)` as a float. Returns 0 for `k > n`.
pub fn binomial(n: usize, k: usize) -> f64 {
    if k > n {
        return 0.0;
    }
    let k = k.min(n - k);
    let mut c = 1u64;
    for i in 0..k {
        // Exact at every step: the running product is always C(n, i + 1).
        c = c * (n - i) as u64 / (i + 1) as u64;
    }
    c as f64
}

/// The Bernstein polynomial `B(n, k, t) = C(n, k) (1 - t)^(n - k) t^k`.
///
/// At `t = 0` every term but `k = 0` vanishes exactly, and at `t = 1` every
/// term but `k = n`, so a Bezier curve hits its end control points without
/// rounding error.
pub fn bernstein(n: usize, k: usize, t: f64) -> f64 {
    if k > n {
        return 0.0;
    }
    binomial(n, k) * (1.0 - t).powi((n - k) as i32) * t.powi(k as i32)
}
