use crate::math::color::Color;

/// Euclidean distance between two colors in 16-bit RGB space
///
/// Channels are widened to the 16-bit range before differencing, and the
/// differences are taken in signed arithmetic so the metric is symmetric.
/// Alpha is not part of the metric.
pub fn euclidean(a: Color, b: Color) -> f64 {
    let a = a.widen();
    let b = b.widen();

    let dr = b.r as f64 - a.r as f64;
    let dg = b.g as f64 - a.g as f64;
    let db = b.b as f64 - a.b as f64;

    db.mul_add(db, dr.mul_add(dr, dg * dg)).sqrt()
}
