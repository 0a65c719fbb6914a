//! Floating-point assertions shared by the unit and integration tests of every magneto crate.

use crate::{Real, Vector3};

#[inline]
pub fn f64_to_ordered_u64(x: f64) -> u64 {
    let bits = x.to_bits();
    if bits & 0x8000_0000_0000_0000 != 0 {
        !bits
    } else {
        bits | 0x8000_0000_0000_0000
    }
}

#[inline]
pub fn ulp_diff(a: f64, b: f64) -> u64 {
    let ua = f64_to_ordered_u64(a);
    let ub = f64_to_ordered_u64(b);
    ua.abs_diff(ub)
}

#[track_caller]
pub fn assert_ulp_le(a: f64, b: f64, max_ulp: u64, ctx: &str) {
    if a == 0.0 && b == 0.0 {
        return;
    }
    assert!(
        a.is_finite() && b.is_finite(),
        "non-finite value in {}",
        ctx
    );
    let d = ulp_diff(a, b);
    assert!(
        d <= max_ulp,
        "{}: ULP={} exceeds {}, a={} (0x{:016x}) b={} (0x{:016x})",
        ctx,
        d,
        max_ulp,
        a,
        a.to_bits(),
        b,
        b.to_bits()
    );
}

/// Absolute-tolerance check in either precision.
#[track_caller]
pub fn assert_close<T: Real>(actual: T, expected: T, tolerance: f64, ctx: &str) {
    let (a, e) = (actual.to_f64(), expected.to_f64());
    assert!(a.is_finite(), "non-finite value in {}: {}", ctx, a);
    assert!(
        (a - e).abs() <= tolerance,
        "{}: |{} - {}| = {:e} exceeds {:e}",
        ctx,
        a,
        e,
        (a - e).abs(),
        tolerance
    );
}

#[track_caller]
pub fn assert_vec_close<T: Real>(actual: Vector3<T>, expected: Vector3<T>, tolerance: f64, ctx: &str) {
    for i in 0..3 {
        assert_close(
            actual[i],
            expected[i],
            tolerance,
            &format!("{} [component {}]", ctx, i),
        );
    }
}

#[macro_export]
macro_rules! assert_ulp_lt {
    ($a:expr, $b:expr, $max_ulp:expr) => {
        $crate::test_helpers::assert_ulp_le(
            $a,
            $b,
            $max_ulp,
            &format!(
                "ULP check failed: {} vs {} (max_ulp={})",
                stringify!($a),
                stringify!($b),
                $max_ulp
            ),
        )
    };
    ($a:expr, $b:expr, $max_ulp:expr, $($arg:tt)*) => {
        $crate::test_helpers::assert_ulp_le($a, $b, $max_ulp, &format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ulp_diff_across_zero() {
        assert_eq!(ulp_diff(1.0, 1.0), 0);
        assert_eq!(ulp_diff(1.0, f64::from_bits(1.0_f64.to_bits() + 3)), 3);
        assert_eq!(ulp_diff(-0.0, 0.0), 1);
    }

    #[test]
    fn test_assert_close_passes_both_precisions() {
        assert_close(1.0_f64, 1.0 + 1e-10, 1e-9, "f64");
        assert_close(1.0_f32, 1.000_01, 1e-4, "f32");
        assert_vec_close(Vector3::new(1.0, 2.0, 3.0), Vector3::new(1.0, 2.0, 3.0), 0.0, "exact");
    }

    #[test]
    #[should_panic(expected = "exceeds")]
    fn test_assert_close_fails() {
        assert_close(1.0_f64, 1.1, 1e-3, "too far");
    }

    #[test]
    fn test_ulp_macro() {
        crate::assert_ulp_lt!(0.1 + 0.2, 0.3, 1);
        crate::assert_ulp_lt!(2.0_f64.sqrt() * 2.0_f64.sqrt(), 2.0, 1, "sqrt squared");
    }
}
