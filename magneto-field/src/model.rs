//! Gauss-coefficient model container.
//!
//! A [`GeomagneticModel`] is a sequence of coefficient sets ([`ModelEpoch`]) spaced `interval`
//! years apart from `epoch`, plus a secular-variation set used as the rate of change after the
//! last one. The model is built once and only borrowed by the evaluator.
//!
//! # Coefficient layout
//!
//! Every table stores the `(n, m)` terms for `1 ≤ n ≤ N`, `0 ≤ m ≤ n` in one flat vector:
//!
//! | n \ m | 0 | 1 | 2 | 3 |
//! |-------|---|---|---|---|
//! | 1 | 0 | 1 | | |
//! | 2 | 2 | 3 | 4 | |
//! | 3 | 5 | 6 | 7 | 8 |
//!
//! given by [`coefficient_index`]. A table of degree `N` has [`coefficient_count`]`(N)` entries.

use magneto_core::Real;
use magneto_time::DecimalYear;

use crate::{FieldError, FieldResult};

/// Flat index of the `(n, m)` term: `n(n+1)/2 + m - 1`. Valid for `n ≥ 1`, `m ≤ n`.
///
/// ```
/// use magneto_field::{coefficient_count, coefficient_index};
///
/// assert_eq!(coefficient_index(1, 0), 0);
/// assert_eq!(coefficient_index(12, 12), coefficient_count(12) - 1);
/// ```
#[inline]
pub const fn coefficient_index(n: usize, m: usize) -> usize {
    n * (n + 1) / 2 + m - 1
}

/// Number of `(n, m)` terms up to degree `nm_max`: `N(N+3)/2`.
#[inline]
pub const fn coefficient_count(nm_max: usize) -> usize {
    nm_max * (nm_max + 3) / 2
}

/// One `(g, h)` pair, Gauss-normalized, in nanotesla (or nT/year for rates).
///
/// `h` is zero for `m = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaussCoefficient<T> {
    pub g: T,
    pub h: T,
}

impl<T: Real> GaussCoefficient<T> {
    #[inline]
    pub fn new(g: T, h: T) -> Self {
        Self { g, h }
    }

    /// `self + rate * t`
    #[inline]
    pub fn advance(&self, rate: &Self, t: T) -> Self {
        Self::new(self.g + t * rate.g, self.h + t * rate.h)
    }
}

/// One time-tagged coefficient table in [`coefficient_index`] order.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModelEpoch<T> {
    coefficients: Vec<GaussCoefficient<T>>,
}

impl<T: Real> ModelEpoch<T> {
    pub fn new(coefficients: Vec<GaussCoefficient<T>>) -> Self {
        Self { coefficients }
    }

    /// Coefficient of the `(n, m)` term. Panics if the term is outside the table.
    #[inline]
    pub fn get(&self, n: usize, m: usize) -> GaussCoefficient<T> {
        self.coefficients[coefficient_index(n, m)]
    }

    pub fn coefficients(&self) -> &[GaussCoefficient<T>] {
        &self.coefficients
    }

    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }
}

impl<T: Real> From<Vec<GaussCoefficient<T>>> for ModelEpoch<T> {
    fn from(coefficients: Vec<GaussCoefficient<T>>) -> Self {
        Self::new(coefficients)
    }
}

/// A complete spherical-harmonic field model.
///
/// Construction through [`new`](Self::new) checks every layout invariant, so the evaluator can
/// index the tables without bounds failures. Deserialization goes through the same checks.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "RawGeomagneticModel<T>",
        bound(deserialize = "T: Real + serde::Deserialize<'de>")
    )
)]
pub struct GeomagneticModel<T> {
    name: String,
    epoch: DecimalYear<T>,
    nm_max: usize,
    interval: T,
    epochs: Vec<ModelEpoch<T>>,
    secular: ModelEpoch<T>,
    reference_radius: T,
}

/// Unchecked wire form of [`GeomagneticModel`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGeomagneticModel<T> {
    name: String,
    epoch: DecimalYear<T>,
    nm_max: usize,
    interval: T,
    epochs: Vec<ModelEpoch<T>>,
    secular: ModelEpoch<T>,
    reference_radius: T,
}

#[cfg(feature = "serde")]
impl<T: Real> TryFrom<RawGeomagneticModel<T>> for GeomagneticModel<T> {
    type Error = FieldError;

    fn try_from(raw: RawGeomagneticModel<T>) -> FieldResult<Self> {
        Self::new(raw.epoch, raw.nm_max, raw.interval, raw.epochs, raw.secular)?
            .with_name(raw.name)
            .with_reference_radius(raw.reference_radius)
    }
}

impl<T: Real> GeomagneticModel<T> {
    /// Builds a model, checking that:
    ///
    /// - `nm_max ≥ 1` and there is at least one epoch;
    /// - every epoch and the secular table have [`coefficient_count`]`(nm_max)` entries;
    /// - `interval` is positive and finite;
    /// - `epoch` and every coefficient are finite.
    ///
    /// The reference radius defaults to the WGS84 semi-major axis; see
    /// [`with_reference_radius`](Self::with_reference_radius).
    pub fn new(
        epoch: DecimalYear<T>,
        nm_max: usize,
        interval: T,
        epochs: Vec<ModelEpoch<T>>,
        secular: ModelEpoch<T>,
    ) -> FieldResult<Self> {
        if nm_max < 1 {
            return Err(FieldError::invalid_model("maximum degree must be at least 1"));
        }
        if epochs.is_empty() {
            return Err(FieldError::invalid_model("model has no coefficient epochs"));
        }
        if !epoch.year.is_finite() {
            return Err(FieldError::invalid_model("model epoch is not finite"));
        }
        if !(interval.is_finite() && interval > T::ZERO) {
            return Err(FieldError::invalid_model(format!(
                "epoch interval must be positive and finite, got {}",
                interval
            )));
        }

        let expected = coefficient_count(nm_max);
        let tables = epochs
            .iter()
            .enumerate()
            .map(|(i, e)| (format!("epoch {}", i), e))
            .chain(std::iter::once(("secular table".to_string(), &secular)));

        for (label, table) in tables {
            if table.len() != expected {
                return Err(FieldError::invalid_model(format!(
                    "{} has {} coefficients, degree {} needs {}",
                    label,
                    table.len(),
                    nm_max,
                    expected
                )));
            }
            if let Some(pos) = table
                .coefficients()
                .iter()
                .position(|c| !(c.g.is_finite() && c.h.is_finite()))
            {
                return Err(FieldError::invalid_model(format!(
                    "{} has a non-finite coefficient at index {}",
                    label, pos
                )));
            }
        }

        Ok(Self {
            name: String::new(),
            epoch,
            nm_max,
            interval,
            epochs,
            secular,
            reference_radius: T::from_f64(magneto_core::constants::WGS84_SEMI_MAJOR_AXIS),
        })
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Replaces the reference radius `a` in `ρ = a / r`. Must be positive and finite.
    pub fn with_reference_radius(mut self, radius: T) -> FieldResult<Self> {
        if !(radius.is_finite() && radius > T::ZERO) {
            return Err(FieldError::invalid_model(format!(
                "reference radius must be positive and finite, got {}",
                radius
            )));
        }
        self.reference_radius = radius;
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn epoch(&self) -> DecimalYear<T> {
        self.epoch
    }

    /// Maximum degree and order.
    pub fn nm_max(&self) -> usize {
        self.nm_max
    }

    /// Years between consecutive epochs.
    pub fn interval(&self) -> T {
        self.interval
    }

    pub fn epochs(&self) -> &[ModelEpoch<T>] {
        &self.epochs
    }

    pub fn num_epochs(&self) -> usize {
        self.epochs.len()
    }

    pub fn secular(&self) -> &ModelEpoch<T> {
        &self.secular
    }

    pub fn reference_radius(&self) -> T {
        self.reference_radius
    }

    pub fn coefficient_count(&self) -> usize {
        coefficient_count(self.nm_max)
    }

    /// Sub-epoch covering `t` and the time offset into it, in years.
    ///
    /// The index is `floor((t - epoch) / interval)` clamped to the available epochs, so times
    /// before the first epoch extrapolate backwards from it and times after the last use the
    /// secular table.
    ///
    /// ```
    /// use magneto_field::wmm::wmm2020;
    /// use magneto_time::DecimalYear;
    ///
    /// let model = wmm2020::<f64>()?;
    /// let (i, dt) = model.select_epoch(DecimalYear::new(2023.25));
    /// assert_eq!(i, 0);
    /// assert_eq!(dt, 3.25);
    /// # Ok::<(), magneto_field::FieldError>(())
    /// ```
    pub fn select_epoch(&self, t: DecimalYear<T>) -> (usize, T) {
        let elapsed = t.years_since(self.epoch.year);
        let steps = (elapsed / self.interval).floor();

        let last = self.epochs.len() - 1;
        let index = if steps.is_finite() && steps > T::ZERO {
            if steps >= T::from_usize(last) {
                last
            } else {
                steps.to_f64() as usize
            }
        } else {
            0
        };

        let start = self.epoch.year + T::from_usize(index) * self.interval;
        (index, t.year - start)
    }

    /// Coefficient of `(n, m)` at `t` years into sub-epoch `i_epoch`.
    ///
    /// The rate is the slope to the next epoch, or the secular table for the last one. An
    /// `i_epoch` past the end is treated as the last epoch.
    ///
    /// # Panics
    ///
    /// If `n` is zero or greater than [`nm_max`](Self::nm_max). `m ≤ n` is the caller's
    /// responsibility; a larger `m` reads a term of the next degree.
    #[inline]
    pub fn coefficient_at(&self, i_epoch: usize, t: T, n: usize, m: usize) -> GaussCoefficient<T> {
        let last = self.epochs.len() - 1;
        let i = i_epoch.min(last);
        let idx = coefficient_index(n, m);
        let current = self.epochs[i].coefficients[idx];

        let rate = if i < last {
            let next = self.epochs[i + 1].coefficients[idx];
            GaussCoefficient::new(
                (next.g - current.g) / self.interval,
                (next.h - current.h) / self.interval,
            )
        } else {
            self.secular.coefficients[idx]
        };

        current.advance(&rate, t)
    }
}
