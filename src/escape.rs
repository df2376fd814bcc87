//! The escape-time test.  A point `c` is iterated under `v = v*v + c`
//! from `v = 0`; how quickly its orbit leaves the circle of radius two
//! decides how bright the pixel is.

use num::Complex;

/// The magnitude past which an orbit is known to diverge.
pub const ESCAPE_RADIUS: f64 = 2.0;

/// Returns `Some(n)` if the orbit of `c` leaves the escape radius on
/// step `n` (the first step is 1), or `None` if it is still inside
/// after `limit` steps.
pub fn escape_time(c: Complex<f64>, limit: u32) -> Option<u32> {
    let mut v: Complex<f64> = Complex { re: 0.0, im: 0.0 };
    for n in 1..=limit {
        v = v * v + c;
        if v.norm() > ESCAPE_RADIUS {
            return Some(n);
        }
    }
    None
}

/// The grayscale intensity of `c`.  Points that never escape are
/// black.  Points that escape on step `n` get `255 - threshold * n`,
/// reduced modulo 256: once `threshold * n` passes 255 the value wraps
/// around to the top of the range instead of saturating at zero.  The
/// banding this produces is part of the expected picture.
pub fn intensity(c: Complex<f64>, limit: u32, threshold: u32) -> u8 {
    match escape_time(c, limit) {
        None => 0,
        Some(n) => {
            // Wrapping u64 arithmetic is exact modulo 2^64, hence modulo 256.
            let falloff = u64::from(threshold).wrapping_mul(u64::from(n));
            255u8.wrapping_sub(falloff as u8)
        }
    }
}
