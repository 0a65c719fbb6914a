//! Bundled World Magnetic Model coefficients.

use magneto_core::Real;

use crate::cof::parse_cof;
use crate::{FieldResult, GeomagneticModel};

/// WMM2020 coefficient file, valid 2020.0 to 2025.0.
pub const WMM2020_COF: &str = include_str!("../data/WMM2020.COF");

/// The WMM2020 main field and secular variation, degree 12.
///
/// ```
/// use magneto_field::wmm::wmm2020;
///
/// let model = wmm2020::<f32>()?;
/// assert_eq!(model.name(), "WMM-2020");
/// assert_eq!(model.nm_max(), 12);
/// assert_eq!(model.epoch().year, 2020.0);
/// # Ok::<(), magneto_field::FieldError>(())
/// ```
pub fn wmm2020<T: Real>() -> FieldResult<GeomagneticModel<T>> {
    parse_cof(WMM2020_COF)
}
