//! Spherical-harmonic synthesis of the main field.
//!
//! The potential of an internal field of degree `N` is
//!
//! ```text
//! V(r, θ, φ) = a Σn Σm (a/r)^(n+1) (g(n,m) cos mφ + h(n,m) sin mφ) P(n,m)(cos θ)
//! ```
//!
//! and `B = -∇V`. [`eval_spherical_expansion`] sums the three gradient components in the
//! geocentric spherical frame; [`rotate_to_ned`] tilts them into the geodetic North-East-Down
//! frame. [`eval_field`] runs the whole pipeline from a geodetic position and a decimal year.
//!
//! # Example
//!
//! ```
//! use magneto_core::GeodeticCoords;
//! use magneto_field::{eval_field, wmm::wmm2020};
//! use magneto_time::DecimalYear;
//!
//! let model = wmm2020::<f64>()?;
//! let state = eval_field(&model, DecimalYear::new(2020.0), GeodeticCoords::new(0.0, 120.0, 0.0));
//!
//! assert!((state.north() - 39624.3).abs() < 0.1);
//! assert!((state.inclination - (-15.42)).abs() < 0.01);
//! # Ok::<(), magneto_field::FieldError>(())
//! ```

use magneto_core::{GeodeticCoords, MagnetoError, Real, SphericalCoords, Vector3};
use magneto_time::{DecimalYear, TimeError};

use crate::legendre::LegendreDiagonal;
use crate::{FieldResult, FieldState, GeomagneticModel};

/// Field components in the geocentric spherical frame, in nanotesla.
///
/// `theta` points along increasing colatitude (southward) and `phi` along increasing longitude
/// (eastward).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SphericalVector<T> {
    pub radial: T,
    pub theta: T,
    pub phi: T,
}

impl<T: Real> SphericalVector<T> {
    pub fn new(radial: T, theta: T, phi: T) -> Self {
        Self { radial, theta, phi }
    }

    pub fn magnitude(&self) -> T {
        self.radial.hypot(self.theta).hypot(self.phi)
    }
}

/// Sums the expansion of `model` at `position`, `t` years into sub-epoch `i_epoch`.
///
/// Returns the zero vector for a non-positive or non-finite radius. At the geographic poles
/// (`sin θ = 0`) the longitudinal component is left undivided, which leaves it at zero since
/// every `m ≥ 1` term vanishes there.
pub fn eval_spherical_expansion<T: Real>(
    model: &GeomagneticModel<T>,
    i_epoch: usize,
    t: T,
    position: &SphericalCoords<T>,
) -> SphericalVector<T> {
    if !(position.radius > T::ZERO && position.radius.is_finite()) {
        return SphericalVector::default();
    }

    let nm_max = model.nm_max();
    let rho = model.reference_radius() / position.radius;

    // (a/r)^(n+2)
    let mut rho_powers = Vec::with_capacity(nm_max + 1);
    let mut power = rho * rho;
    for _ in 0..=nm_max {
        rho_powers.push(power);
        power *= rho;
    }

    let (sin_theta, cos_theta) = position.colatitude().to_radians().sin_cos();
    let phi = position.azimuth.to_radians();

    let mut b = SphericalVector::default();
    let mut diagonal = LegendreDiagonal::new(sin_theta, cos_theta);

    for m in 0..=nm_max {
        let order = T::from_usize(m);
        let (sin_mphi, cos_mphi) = (order * phi).sin_cos();

        for term in diagonal.column(nm_max) {
            let c = model.coefficient_at(i_epoch, t, term.n, m);
            let scale = rho_powers[term.n];
            let in_phase = c.g * cos_mphi + c.h * sin_mphi;
            let quadrature = c.h * cos_mphi - c.g * sin_mphi;

            b.radial += scale * T::from_usize(term.n + 1) * in_phase * term.p;
            b.theta -= scale * in_phase * term.dp;
            b.phi -= scale * order * quadrature * term.p;
        }

        diagonal.advance();
    }

    if sin_theta != T::ZERO {
        b.phi /= sin_theta;
    }

    b
}

/// Rotates a geocentric spherical field vector into geodetic North-East-Down.
///
/// Latitudes are in degrees; the tilt is `ε = geodetic_latitude - geocentric_latitude`.
pub fn rotate_to_ned<T: Real>(
    b: &SphericalVector<T>,
    geodetic_latitude: T,
    geocentric_latitude: T,
) -> Vector3<T> {
    let (sin_eps, cos_eps) = (geodetic_latitude - geocentric_latitude)
        .to_radians()
        .sin_cos();

    Vector3::new(
        -b.theta * cos_eps - b.radial * sin_eps,
        b.phi,
        b.theta * sin_eps - b.radial * cos_eps,
    )
}

/// Field vector (North, East, Down) in nanotesla at `position` and time `t`.
///
/// The sub-epoch is picked by [`GeomagneticModel::select_epoch`]. Never fails; positions that
/// cannot be converted yield the zero vector.
pub fn eval_field_ned<T: Real>(
    model: &GeomagneticModel<T>,
    t: DecimalYear<T>,
    position: GeodeticCoords<T>,
) -> Vector3<T> {
    let spherical = position.to_spherical();
    if spherical.radius <= T::ZERO {
        return Vector3::zeros();
    }

    let (i_epoch, dt) = model.select_epoch(t);
    let b = eval_spherical_expansion(model, i_epoch, dt, &spherical);
    rotate_to_ned(&b, position.latitude, spherical.polar)
}

/// Full field state at `position` and time `t`.
///
/// Inputs are not validated; see [`try_eval_field`] for a checked variant.
pub fn eval_field<T: Real>(
    model: &GeomagneticModel<T>,
    t: DecimalYear<T>,
    position: GeodeticCoords<T>,
) -> FieldState<T> {
    FieldState::from_ned(eval_field_ned(model, t, position))
}

/// [`eval_field`] after checking that `t` and `position` are valid.
///
/// ```
/// use magneto_core::GeodeticCoords;
/// use magneto_field::{try_eval_field, wmm::wmm2020};
/// use magneto_time::DecimalYear;
///
/// let model = wmm2020::<f64>()?;
/// let site = GeodeticCoords::new(45.0, -75.0, 0.0);
///
/// assert!(try_eval_field(&model, DecimalYear::new(2021.0), site).is_ok());
/// assert!(try_eval_field(&model, DecimalYear::default(), site).is_err());
/// # Ok::<(), magneto_field::FieldError>(())
/// ```
pub fn try_eval_field<T: Real>(
    model: &GeomagneticModel<T>,
    t: DecimalYear<T>,
    position: GeodeticCoords<T>,
) -> FieldResult<FieldState<T>> {
    if !t.is_valid() {
        return Err(TimeError::InvalidDate.into());
    }
    if !position.is_valid() {
        let message = format!("invalid position: {}", position);
        return Err(MagnetoError::invalid_coordinate(message).into());
    }
    Ok(eval_field(model, t, position))
}

impl<T: Real> GeomagneticModel<T> {
    /// Shorthand for [`eval_field`].
    pub fn field_at(&self, t: DecimalYear<T>, position: GeodeticCoords<T>) -> FieldState<T> {
        eval_field(self, t, position)
    }
}
