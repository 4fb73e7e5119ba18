//! Error types for the clear-sky radiation library.

use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Lowest accepted station elevation in meters (shore of the Dead Sea is about -430 m).
pub const MIN_ELEVATION: f64 = -500.0;

/// Highest accepted station elevation in meters.
pub const MAX_ELEVATION: f64 = 9000.0;

/// Longest accepted averaging period in seconds (one day).
pub const MAX_AVERAGING_PERIOD: f64 = 86_400.0;

/// Upper bound for near-surface vapor pressure in kPa.
pub const MAX_VAPOR_PRESSURE: f64 = 10.0;

/// Errors that can occur while estimating clear-sky radiation.
///
/// Every variant describes input that was rejected before any computation took place;
/// the formulas themselves are total over validated input.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid latitude value (must be between -90 and +90 degrees).
    InvalidLatitude {
        /// The invalid latitude value provided.
        value: f64,
    },
    /// Invalid longitude value (must be between -180 and +180 degrees).
    InvalidLongitude {
        /// The invalid longitude value provided.
        value: f64,
    },
    /// Station elevation outside the physically plausible range.
    InvalidElevation {
        /// The invalid elevation value provided, in meters.
        value: f64,
    },
    /// Turbidity coefficient outside (0, 1].
    InvalidTurbidity {
        /// The invalid turbidity coefficient provided.
        value: f64,
    },
    /// Vapor pressure outside [0, 10] kPa.
    InvalidVaporPressure {
        /// The invalid vapor pressure provided, in kPa.
        value: f64,
    },
    /// Averaging period outside (0, 86400] seconds.
    InvalidAveragingPeriod {
        /// The invalid averaging period provided, in seconds.
        value: f64,
    },
    /// UTC offset of 24 hours or more in magnitude.
    InvalidUtcOffset {
        /// The invalid offset provided, in hours.
        value: f64,
    },
    /// Date/time that cannot be resolved to a day of year and hour.
    InvalidDateTime {
        /// Description of the date/time constraint violation.
        message: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLatitude { value } => {
                write!(
                    f,
                    "invalid latitude {value}° (must be between -90° and +90°)"
                )
            }
            Self::InvalidLongitude { value } => {
                write!(
                    f,
                    "invalid longitude {value}° (must be between -180° and +180°)"
                )
            }
            Self::InvalidElevation { value } => {
                write!(
                    f,
                    "invalid elevation {value} m (must be between {MIN_ELEVATION} m and {MAX_ELEVATION} m)"
                )
            }
            Self::InvalidTurbidity { value } => {
                write!(
                    f,
                    "invalid turbidity coefficient {value} (must be in (0, 1])"
                )
            }
            Self::InvalidVaporPressure { value } => {
                write!(
                    f,
                    "invalid vapor pressure {value} kPa (must be between 0 and {MAX_VAPOR_PRESSURE} kPa)"
                )
            }
            Self::InvalidAveragingPeriod { value } => {
                write!(
                    f,
                    "invalid averaging period {value} s (must be in (0, {MAX_AVERAGING_PERIOD}] s)"
                )
            }
            Self::InvalidUtcOffset { value } => {
                write!(f, "invalid UTC offset {value} h (must be within ±24 h)")
            }
            Self::InvalidDateTime { message } => {
                write!(f, "invalid date/time: {message}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Creates an invalid latitude error.
    #[must_use]
    pub const fn invalid_latitude(value: f64) -> Self {
        Self::InvalidLatitude { value }
    }

    /// Creates an invalid longitude error.
    #[must_use]
    pub const fn invalid_longitude(value: f64) -> Self {
        Self::InvalidLongitude { value }
    }

    /// Creates an invalid elevation error.
    #[must_use]
    pub const fn invalid_elevation(value: f64) -> Self {
        Self::InvalidElevation { value }
    }

    /// Creates an invalid turbidity error.
    #[must_use]
    pub const fn invalid_turbidity(value: f64) -> Self {
        Self::InvalidTurbidity { value }
    }

    /// Creates an invalid vapor pressure error.
    #[must_use]
    pub const fn invalid_vapor_pressure(value: f64) -> Self {
        Self::InvalidVaporPressure { value }
    }

    /// Creates an invalid averaging period error.
    #[must_use]
    pub const fn invalid_averaging_period(value: f64) -> Self {
        Self::InvalidAveragingPeriod { value }
    }

    /// Creates an invalid UTC offset error.
    #[must_use]
    pub const fn invalid_utc_offset(value: f64) -> Self {
        Self::InvalidUtcOffset { value }
    }

    /// Creates an invalid date/time error.
    #[must_use]
    pub const fn invalid_datetime(message: &'static str) -> Self {
        Self::InvalidDateTime { message }
    }

    /// Whether this error reports rejected input.
    ///
    /// Always `true`: callers that funnel everything into a single
    /// "invalid input" category can rely on it.
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidLatitude { .. }
                | Self::InvalidLongitude { .. }
                | Self::InvalidElevation { .. }
                | Self::InvalidTurbidity { .. }
                | Self::InvalidVaporPressure { .. }
                | Self::InvalidAveragingPeriod { .. }
                | Self::InvalidUtcOffset { .. }
                | Self::InvalidDateTime { .. }
        )
    }
}

/// Validates latitude is within the valid range (-90 to +90 degrees).
///
/// # Errors
/// Returns `InvalidLatitude` if latitude is outside -90 to +90 degrees.
pub fn check_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::invalid_latitude(latitude));
    }
    Ok(())
}

/// Validates longitude is within the valid range (-180 to +180 degrees).
///
/// # Errors
/// Returns `InvalidLongitude` if longitude is outside -180 to +180 degrees.
pub fn check_longitude(longitude: f64) -> Result<()> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(Error::invalid_longitude(longitude));
    }
    Ok(())
}

/// Validates both latitude and longitude are within valid ranges.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
pub fn check_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    check_latitude(latitude)?;
    check_longitude(longitude)?;
    Ok(())
}

/// Validates station elevation against [`MIN_ELEVATION`] and [`MAX_ELEVATION`].
///
/// # Errors
/// Returns `InvalidElevation` for out-of-range or non-finite elevations.
pub fn check_elevation(elevation: f64) -> Result<()> {
    if !(MIN_ELEVATION..=MAX_ELEVATION).contains(&elevation) {
        return Err(Error::invalid_elevation(elevation));
    }
    Ok(())
}

/// Validates the ASCE turbidity coefficient `Kt`.
///
/// # Errors
/// Returns `InvalidTurbidity` unless `0 < turbidity <= 1`.
pub fn check_turbidity(turbidity: f64) -> Result<()> {
    if !turbidity.is_finite() || turbidity <= 0.0 || turbidity > 1.0 {
        return Err(Error::invalid_turbidity(turbidity));
    }
    Ok(())
}

/// Validates near-surface vapor pressure in kPa.
///
/// # Errors
/// Returns `InvalidVaporPressure` if outside 0 to [`MAX_VAPOR_PRESSURE`] kPa.
pub fn check_vapor_pressure(vapor_pressure: f64) -> Result<()> {
    if !(0.0..=MAX_VAPOR_PRESSURE).contains(&vapor_pressure) {
        return Err(Error::invalid_vapor_pressure(vapor_pressure));
    }
    Ok(())
}

/// Validates an averaging period in seconds.
///
/// # Errors
/// Returns `InvalidAveragingPeriod` unless `0 < seconds <= 86400`.
pub fn check_averaging_period(seconds: f64) -> Result<()> {
    if !seconds.is_finite() || seconds <= 0.0 || seconds > MAX_AVERAGING_PERIOD {
        return Err(Error::invalid_averaging_period(seconds));
    }
    Ok(())
}

/// Validates a UTC offset in hours.
///
/// # Errors
/// Returns `InvalidUtcOffset` if the offset is not strictly within ±24 hours.
pub fn check_utc_offset(hours: f64) -> Result<()> {
    if !hours.is_finite() || hours <= -24.0 || hours >= 24.0 {
        return Err(Error::invalid_utc_offset(hours));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latitude_validation() {
        assert!(check_latitude(0.0).is_ok());
        assert!(check_latitude(90.0).is_ok());
        assert!(check_latitude(-90.0).is_ok());
        assert!(check_latitude(45.5).is_ok());

        assert!(check_latitude(91.0).is_err());
        assert!(check_latitude(-91.0).is_err());
        assert!(check_latitude(f64::NAN).is_err());
        assert!(check_latitude(f64::INFINITY).is_err());
    }

    #[test]
    fn test_longitude_validation() {
        assert!(check_longitude(0.0).is_ok());
        assert!(check_longitude(180.0).is_ok());
        assert!(check_longitude(-180.0).is_ok());
        assert!(check_longitude(9.5).is_ok());

        assert!(check_longitude(181.0).is_err());
        assert!(check_longitude(-181.0).is_err());
        assert!(check_longitude(f64::NAN).is_err());
        assert!(check_longitude(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_elevation_validation() {
        assert!(check_elevation(0.0).is_ok());
        assert!(check_elevation(-430.0).is_ok());
        assert!(check_elevation(8848.0).is_ok());
        assert!(check_elevation(MIN_ELEVATION).is_ok());
        assert!(check_elevation(MAX_ELEVATION).is_ok());

        assert!(check_elevation(-501.0).is_err());
        assert!(check_elevation(9001.0).is_err());
        assert!(check_elevation(f64::NAN).is_err());
    }

    #[test]
    fn test_turbidity_validation() {
        assert!(check_turbidity(1.0).is_ok());
        assert!(check_turbidity(0.5).is_ok());
        assert!(check_turbidity(0.01).is_ok());

        assert!(check_turbidity(0.0).is_err());
        assert!(check_turbidity(-0.2).is_err());
        assert!(check_turbidity(1.01).is_err());
        assert!(check_turbidity(f64::NAN).is_err());
    }

    #[test]
    fn test_vapor_pressure_validation() {
        assert!(check_vapor_pressure(0.0).is_ok());
        assert!(check_vapor_pressure(1.2).is_ok());
        assert!(check_vapor_pressure(-0.1).is_err());
        assert!(check_vapor_pressure(12.0).is_err());
    }

    #[test]
    fn test_averaging_period_validation() {
        assert!(check_averaging_period(1.0).is_ok());
        assert!(check_averaging_period(3600.0).is_ok());
        assert!(check_averaging_period(86_400.0).is_ok());

        assert!(check_averaging_period(0.0).is_err());
        assert!(check_averaging_period(-60.0).is_err());
        assert!(check_averaging_period(86_401.0).is_err());
        assert!(check_averaging_period(f64::INFINITY).is_err());
    }

    #[test]
    fn test_utc_offset_validation() {
        assert!(check_utc_offset(0.0).is_ok());
        assert!(check_utc_offset(5.5).is_ok());
        assert!(check_utc_offset(-12.0).is_ok());
        assert!(check_utc_offset(14.0).is_ok());

        assert!(check_utc_offset(24.0).is_err());
        assert!(check_utc_offset(-24.0).is_err());
        assert!(check_utc_offset(f64::NAN).is_err());
    }

    #[test]
    fn test_every_error_is_invalid_input() {
        let errors = [
            Error::invalid_latitude(95.0),
            Error::invalid_longitude(200.0),
            Error::invalid_elevation(-1000.0),
            Error::invalid_turbidity(0.0),
            Error::invalid_vapor_pressure(-1.0),
            Error::invalid_averaging_period(0.0),
            Error::invalid_utc_offset(30.0),
            Error::invalid_datetime("hour must be between 0 and 23"),
        ];
        assert!(errors.iter().all(Error::is_invalid_input));
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_error_display() {
        let err = Error::invalid_latitude(95.0);
        assert_eq!(
            err.to_string(),
            "invalid latitude 95° (must be between -90° and +90°)"
        );

        let err = Error::invalid_turbidity(0.0);
        assert_eq!(
            err.to_string(),
            "invalid turbidity coefficient 0 (must be in (0, 1])"
        );

        let err = Error::invalid_elevation(-600.0);
        assert_eq!(
            err.to_string(),
            "invalid elevation -600 m (must be between -500 m and 9000 m)"
        );

        let err = Error::invalid_datetime("month must be between 1 and 12");
        assert_eq!(
            err.to_string(),
            "invalid date/time: month must be between 1 and 12"
        );
    }
}
