use nalgebra as na;

pub(crate) type Point2 = na::Point2<f64>;

pub(crate) fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Point at fraction `t` along the segment from `from` to `to`.
#[inline(always)]
pub(crate) fn lerp(from: &Point2, to: &Point2, t: f64) -> Point2 {
    *from + (*to - *from) * t
}
