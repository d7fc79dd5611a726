// MIT/Apache2 License

//! Real roots of the cubic polynomial describing the height of a Bezier segment above a horizontal line.
//!
//! The coefficients are classified with a ladder of tolerance tests before any root is computed. Inputs near a
//! rung of that ladder (a discriminant within the relative tolerance of zero, or a segment lying along the line) are a
//! known imprecise region: the root set may be empty or slightly off, and no error is reported for it.

use crate::{
    util::{approximately, real_cbrt},
    Roots, Tolerance,
};
use core::f64::consts::TAU;

/// The shape of the polynomial `d t³ + a t² + b t + c`, chosen by testing the leading coefficients against a
/// tolerance in a fixed order.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Polynomial {
    /// The segment runs parallel to the line. Either it never meets it or it lies along it; in both cases no
    /// roots are reported.
    Constant,
    /// `b t + c`.
    Linear { b: f64, c: f64 },
    /// `a t² + b t + c`.
    Quadratic { a: f64, b: f64, c: f64 },
    /// The monic cubic `t³ + a t² + b t + c`, already divided through by its leading coefficient.
    Cubic { a: f64, b: f64, c: f64 },
}

impl Polynomial {
    /// Derive the polynomial from the Y coordinates of a segment's start point, two control points and end
    /// point, translated so that the reference line is `y = 0`.
    #[must_use]
    pub fn from_bezier(ys: [f64; 4], tolerance: Tolerance) -> Polynomial {
        let [pa, pb, pc, pd] = ys;

        let d = -pa + 3.0 * pb - 3.0 * pc + pd;
        let a = 3.0 * pa - 6.0 * pb + 3.0 * pc;
        let b = -3.0 * pa + 3.0 * pb;
        let c = pa;

        match (tolerance.is_zero(d), tolerance.is_zero(a), tolerance.is_zero(b)) {
            (true, true, true) => Polynomial::Constant,
            (true, true, false) => Polynomial::Linear { b, c },
            (true, false, _) => Polynomial::Quadratic { a, b, c },
            (false, _, _) => Polynomial::Cubic {
                a: a / d,
                b: b / d,
                c: c / d,
            },
        }
    }

    /// Every real root of the polynomial, over the whole real line.
    #[must_use]
    pub fn roots(self, tolerance: Tolerance) -> Roots {
        match self {
            Polynomial::Constant => Roots::Empty,
            Polynomial::Linear { b, c } => Roots::One(-c / b),
            Polynomial::Quadratic { a, b, c } => {
                let to_sqrt = b * b - 4.0 * a * c;
                if to_sqrt < 0.0 {
                    return Roots::Empty;
                }

                // a tangent touch yields the same root twice, which keeps the crossing parity even
                let q = to_sqrt.sqrt();
                let a2 = 2.0 * a;
                Roots::Two((q - b) / a2, (-b - q) / a2)
            }
            Polynomial::Cubic { a, b, c } => cubic_roots(a, b, c, tolerance),
        }
    }
}

/// Solve the monic cubic `t³ + a t² + b t + c` through its depressed form `x³ + p x + q`.
fn cubic_roots(a: f64, b: f64, c: f64, tolerance: Tolerance) -> Roots {
    let shift = a / 3.0;

    let p = (3.0 * b - a * a) / 3.0;
    let p3 = p / 3.0;
    let q = (2.0 * a * a * a - 9.0 * a * b + 27.0 * c) / 27.0;
    let q2 = q / 2.0;
    let discriminant = q2 * q2 + p3 * p3 * p3;
    // measured against its own terms, which shrink with the sixth power of the root spacing
    let scale = q2 * q2 + (p3 * p3 * p3).abs();
    let repeated = approximately(discriminant, 0.0, tolerance.into_inner() * scale);

    if discriminant < 0.0 && !repeated {
        // three distinct real roots
        let mp3 = -p3;
        let r = (mp3 * mp3 * mp3).sqrt();
        let cos_phi = (-q / (2.0 * r)).max(-1.0).min(1.0);
        let phi = cos_phi.acos();
        let t1 = 2.0 * real_cbrt(r);

        Roots::Three(
            t1 * (phi / 3.0).cos() - shift,
            t1 * ((phi + TAU) / 3.0).cos() - shift,
            t1 * ((phi + 2.0 * TAU) / 3.0).cos() - shift,
        )
    } else if repeated {
        // a simple root and a double root, the double root reported twice
        let u1 = -real_cbrt(q2);
        Roots::Three(2.0 * u1 - shift, -u1 - shift, -u1 - shift)
    } else {
        let sd = discriminant.sqrt();
        let u1 = real_cbrt(-q2 + sd);
        let v1 = real_cbrt(q2 + sd);
        Roots::One(u1 - v1 - shift)
    }
}

/// The parameters `t` in `[0, 1]` at which a segment with the given (translated) Y coordinates crosses `y = 0`.
#[must_use]
#[inline]
pub fn unit_roots(ys: [f64; 4], tolerance: Tolerance) -> Roots {
    Polynomial::from_bezier(ys, tolerance)
        .roots(tolerance)
        .within_unit_interval()
}
