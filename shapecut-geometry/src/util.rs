// MIT/Apache2 License

use num_traits::Float;

/// Tell whether `a` and `b` are within `epsilon` of each other.
#[inline]
pub(crate) fn approximately<Num: Float>(a: Num, b: Num, epsilon: Num) -> bool {
    (a - b).abs() <= epsilon
}

/// Real cube root that preserves the sign of its input.
#[inline]
pub(crate) fn real_cbrt<Num: Float>(v: Num) -> Num {
    let third = Num::one() / (Num::one() + Num::one() + Num::one());
    if v < Num::zero() {
        -(-v).powf(third)
    } else {
        v.powf(third)
    }
}
