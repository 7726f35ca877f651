//! Closed-form sums over consecutive integers, used to aggregate pixel
//! coordinates of a run without visiting each pixel.
//!
//! All arithmetic is done in `i64`: the sum of squares has a cubic
//! intermediate term that overflows 32 bits once `x + w` passes ~1024.

/// Sum of the integers in `[x, x + w)`.
pub fn range_sum(x: i64, w: i64) -> i64 {
    // One of w and (2x + w - 1) is always even, so the division is exact.
    w * (2 * x + w - 1) / 2
}

/// Sum of the squares of the integers in `[x, x + w)`.
///
/// With `S(n) = n(n + 1)(2n + 1) / 6`, this is `S(x + w - 1) - S(x - 1)`.
pub fn range_sum_sq(x: i64, w: i64) -> i64 {
    let y = x + w;
    let rs = y * (y - 1) * (2 * y - 1) - x * (x - 1) * (2 * x - 1);
    rs / 6
}
