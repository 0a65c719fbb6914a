//! Gauss-normalized associated Legendre functions and their θ-derivatives.
//!
//! Values are produced one order `m` at a time, walking down a column of increasing degree `n`.
//! [`LegendreDiagonal`] carries `P(m,m)` from one order to the next and
//! [`LegendreColumn`] runs the three-term recurrence for `n > m`:
//!
//! ```text
//! P(m,m)  = sinθ P(m-1,m-1)
//! dP(m,m) = sinθ dP(m-1,m-1) + cosθ P(m-1,m-1)
//! P(n,m)  = cosθ P(n-1,m) - K(n,m) P(n-2,m)
//! dP(n,m) = cosθ dP(n-1,m) - sinθ P(n-1,m) - K(n,m) dP(n-2,m)
//! ```
//!
//! with `P(0,0) = 1`. Only the two previous degrees are kept, so a full evaluation to degree
//! `N` needs constant memory.
//!
//! ```
//! use magneto_field::legendre::LegendreDiagonal;
//!
//! let theta = 0.7_f64;
//! let (sin_t, cos_t) = theta.sin_cos();
//!
//! let p20 = LegendreDiagonal::new(sin_t, cos_t)
//!     .column(2)
//!     .find(|term| term.n == 2)
//!     .unwrap();
//! assert!((p20.p - (cos_t * cos_t - 1.0 / 3.0)).abs() < 1e-15);
//! ```

use magneto_core::Real;

/// `K(n,m) = ((n-1)² - m²) / ((2n-1)(2n-3))` for `n > 1`, zero otherwise.
#[inline]
pub fn recurrence_k<T: Real>(n: usize, m: usize) -> T {
    if n <= 1 {
        return T::ZERO;
    }
    let n = n as f64;
    let m = m as f64;
    T::from_f64(((n - 1.0) * (n - 1.0) - m * m) / ((2.0 * n - 1.0) * (2.0 * n - 3.0)))
}

/// `P(n,m)` and `dP(n,m)/dθ` for one term.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendreTerm<T> {
    pub n: usize,
    pub m: usize,
    pub p: T,
    pub dp: T,
}

/// `P(m,m)` and its derivative for the current order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendreDiagonal<T> {
    sin_theta: T,
    cos_theta: T,
    m: usize,
    p: T,
    dp: T,
}

impl<T: Real> LegendreDiagonal<T> {
    /// Starts at `P(0,0) = 1`.
    pub fn new(sin_theta: T, cos_theta: T) -> Self {
        Self {
            sin_theta,
            cos_theta,
            m: 0,
            p: T::ONE,
            dp: T::ZERO,
        }
    }

    #[inline]
    pub fn order(&self) -> usize {
        self.m
    }

    #[inline]
    pub fn p(&self) -> T {
        self.p
    }

    #[inline]
    pub fn dp(&self) -> T {
        self.dp
    }

    /// Moves to `P(m+1, m+1)`.
    #[inline]
    pub fn advance(&mut self) {
        let p = self.sin_theta * self.p;
        let dp = self.sin_theta * self.dp + self.cos_theta * self.p;
        self.p = p;
        self.dp = dp;
        self.m += 1;
    }

    /// Terms of the current order for degrees `max(m, 1)..=nm_max`.
    pub fn column(&self, nm_max: usize) -> LegendreColumn<T> {
        LegendreColumn {
            sin_theta: self.sin_theta,
            cos_theta: self.cos_theta,
            m: self.m,
            n: self.m.max(1),
            nm_max,
            prev: (self.p, self.dp),
            prev2: (T::ZERO, T::ZERO),
        }
    }
}

/// Iterator over one order `m`, yielding `P(n,m)` for increasing `n`.
///
/// For `m ≥ 1` the first item is the diagonal term itself. For `m = 0` the column starts at
/// `n = 1`, since `P(0,0)` does not contribute to the field.
#[derive(Debug, Clone)]
pub struct LegendreColumn<T> {
    sin_theta: T,
    cos_theta: T,
    m: usize,
    n: usize,
    nm_max: usize,
    /// `(P, dP)` at degree `n - 1`
    prev: (T, T),
    /// `(P, dP)` at degree `n - 2`
    prev2: (T, T),
}

impl<T: Real> Iterator for LegendreColumn<T> {
    type Item = LegendreTerm<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.n > self.nm_max {
            return None;
        }

        let n = self.n;
        let (p, dp) = if n == self.m {
            self.prev
        } else {
            let k: T = recurrence_k(n, self.m);
            let (p1, dp1) = self.prev;
            let (p2, dp2) = self.prev2;
            let p = self.cos_theta * p1 - k * p2;
            let dp = self.cos_theta * dp1 - self.sin_theta * p1 - k * dp2;
            self.prev2 = self.prev;
            self.prev = (p, dp);
            (p, dp)
        };

        self.n += 1;
        Some(LegendreTerm {
            n,
            m: self.m,
            p,
            dp,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.nm_max + 1).saturating_sub(self.n);
        (remaining, Some(remaining))
    }
}

impl<T: Real> ExactSizeIterator for LegendreColumn<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use magneto_core::test_helpers::assert_close;

    fn table(theta: f64, nm_max: usize) -> Vec<LegendreTerm<f64>> {
        let (s, c) = theta.sin_cos();
        let mut diagonal = LegendreDiagonal::new(s, c);
        let mut terms = Vec::new();
        for _ in 0..=nm_max {
            terms.extend(diagonal.column(nm_max));
            diagonal.advance();
        }
        terms
    }

    fn term(terms: &[LegendreTerm<f64>], n: usize, m: usize) -> LegendreTerm<f64> {
        *terms
            .iter()
            .find(|t| t.n == n && t.m == m)
            .unwrap_or_else(|| panic!("missing ({}, {})", n, m))
    }

    #[test]
    fn test_recurrence_k() {
        assert_eq!(recurrence_k::<f64>(0, 0), 0.0);
        assert_eq!(recurrence_k::<f64>(1, 0), 0.0);
        assert_eq!(recurrence_k::<f64>(1, 1), 0.0);
        assert_close(recurrence_k::<f64>(2, 0), 1.0 / 3.0, 1e-16, "K(2,0)");
        assert_close(recurrence_k::<f64>(3, 1), 3.0 / 15.0, 1e-16, "K(3,1)");
        assert_eq!(recurrence_k::<f64>(4, 3), 0.0);
    }

    #[test]
    fn test_closed_forms() {
        for theta in [0.0, 0.1, 0.7, 1.2, std::f64::consts::FRAC_PI_2, 2.5, std::f64::consts::PI] {
            let (s, c) = theta.sin_cos();
            let terms = table(theta, 3);

            let ctx = format!("theta={}", theta);
            assert_close(term(&terms, 1, 0).p, c, 1e-15, &ctx);
            assert_close(term(&terms, 1, 0).dp, -s, 1e-15, &ctx);
            assert_close(term(&terms, 1, 1).p, s, 1e-15, &ctx);
            assert_close(term(&terms, 1, 1).dp, c, 1e-15, &ctx);
            assert_close(term(&terms, 2, 0).p, c * c - 1.0 / 3.0, 1e-15, &ctx);
            assert_close(term(&terms, 2, 0).dp, -2.0 * s * c, 1e-15, &ctx);
            assert_close(term(&terms, 2, 1).p, s * c, 1e-15, &ctx);
            assert_close(term(&terms, 2, 2).p, s * s, 1e-15, &ctx);
            assert_close(term(&terms, 2, 2).dp, 2.0 * s * c, 1e-15, &ctx);
            assert_close(term(&terms, 3, 3).p, s * s * s, 1e-15, &ctx);
            assert_close(term(&terms, 3, 0).p, c * c * c - 0.6 * c, 1e-15, &ctx);
        }
    }

    #[test]
    fn test_derivative_matches_finite_difference() {
        let h = 1e-6;
        let theta = 0.9;
        let lo = table(theta - h, 6);
        let hi = table(theta + h, 6);
        let mid = table(theta, 6);

        for t in &mid {
            let numeric = (term(&hi, t.n, t.m).p - term(&lo, t.n, t.m).p) / (2.0 * h);
            assert_close(t.dp, numeric, 1e-8, &format!("dP({}, {})", t.n, t.m));
        }
    }

    #[test]
    fn test_column_layout() {
        let diagonal = LegendreDiagonal::new(0.5_f64, 0.75_f64.sqrt());
        let degrees: Vec<usize> = diagonal.column(4).map(|t| t.n).collect();
        assert_eq!(degrees, vec![1, 2, 3, 4]);

        let mut diagonal = diagonal;
        diagonal.advance();
        diagonal.advance();
        assert_eq!(diagonal.order(), 2);
        let column = diagonal.column(4);
        assert_eq!(column.len(), 3);
        let degrees: Vec<usize> = column.map(|t| t.n).collect();
        assert_eq!(degrees, vec![2, 3, 4]);

        for _ in 0..3 {
            diagonal.advance();
        }
        assert_eq!(diagonal.column(4).count(), 0);
    }

    #[test]
    fn test_term_count_matches_coefficient_layout() {
        for nm_max in 1..=12 {
            assert_eq!(table(0.3, nm_max).len(), crate::coefficient_count(nm_max));
        }
    }

    #[test]
    fn test_poles() {
        let north = table(0.0, 12);
        for t in north.iter().filter(|t| t.m >= 1) {
            assert_eq!(t.p, 0.0, "P({}, {}) at pole", t.n, t.m);
        }
        assert_eq!(term(&north, 1, 1).dp, 1.0);
    }

    #[test]
    fn test_single_precision_agrees() {
        let theta = 1.1_f64;
        let (s, c) = theta.sin_cos();
        let mut d64 = LegendreDiagonal::new(s, c);
        let mut d32 = LegendreDiagonal::new(s as f32, c as f32);
        for _ in 0..=12 {
            for (a, b) in d64.column(12).zip(d32.column(12)) {
                assert_close(b.p, a.p as f32, 1e-5, "P");
                assert_close(b.dp, a.dp as f32, 1e-5, "dP");
            }
            d64.advance();
            d32.advance();
        }
    }
}
