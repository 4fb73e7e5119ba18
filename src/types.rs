//! Core data types for clear-sky radiation calculations.

use crate::Result;
use crate::error::{check_coordinates, check_elevation, check_turbidity, check_vapor_pressure};
use crate::math::{FRAC_PI_2, radians_to_degrees};

/// Turbidity coefficient of clean air (ASCE-EWRI 2005, eq. D.2).
pub const CLEAN_AIR_TURBIDITY: f64 = 1.0;

/// Vapor pressure in kPa used when none is supplied.
pub const STANDARD_VAPOR_PRESSURE: f64 = 1.0;

/// Geographic position of a measuring station.
///
/// # Example
/// ```
/// # use asce_clearsky::GeoPosition;
/// let milan = GeoPosition::new(45.46, 9.19, 120.0).unwrap();
/// assert_eq!(milan.latitude(), 45.46);
/// assert!(GeoPosition::new(91.0, 0.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPosition {
    /// Latitude in degrees, positive northwards
    latitude: f64,
    /// Longitude in degrees, positive eastwards
    longitude: f64,
    /// Elevation above mean sea level in meters
    elevation: f64,
}

impl GeoPosition {
    /// Creates a validated position.
    ///
    /// # Errors
    /// Returns `InvalidLatitude`, `InvalidLongitude` or `InvalidElevation`.
    pub fn new(latitude: f64, longitude: f64, elevation: f64) -> Result<Self> {
        check_coordinates(latitude, longitude)?;
        check_elevation(elevation)?;
        Ok(Self {
            latitude,
            longitude,
            elevation,
        })
    }

    /// Gets the latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Gets the longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Gets the elevation in meters.
    #[must_use]
    pub const fn elevation(&self) -> f64 {
        self.elevation
    }
}

/// Atmospheric state for the detailed ASCE clear-sky model.
///
/// # Example
/// ```
/// # use asce_clearsky::AtmosphericParameters;
/// let standard = AtmosphericParameters::standard();
/// assert_eq!(standard.turbidity(), 1.0);
/// assert_eq!(standard.vapor_pressure(), 1.0);
///
/// // Hazy, humid conditions
/// let hazy = AtmosphericParameters::new(0.6, 2.5).unwrap();
/// assert_eq!(hazy.turbidity(), 0.6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtmosphericParameters {
    /// Turbidity coefficient Kt, (0, 1]; 1 is clean air, 0.5 extremely turbid
    turbidity: f64,
    /// Actual vapor pressure in kPa
    vapor_pressure: f64,
}

impl AtmosphericParameters {
    /// Creates validated atmospheric parameters.
    ///
    /// # Errors
    /// Returns `InvalidTurbidity` or `InvalidVaporPressure` for out-of-range values.
    pub fn new(turbidity: f64, vapor_pressure: f64) -> Result<Self> {
        check_turbidity(turbidity)?;
        check_vapor_pressure(vapor_pressure)?;
        Ok(Self {
            turbidity,
            vapor_pressure,
        })
    }

    /// Clean air with a moderate vapor pressure of 1 kPa.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            turbidity: CLEAN_AIR_TURBIDITY,
            vapor_pressure: STANDARD_VAPOR_PRESSURE,
        }
    }

    /// Gets the turbidity coefficient Kt.
    #[must_use]
    pub const fn turbidity(&self) -> f64 {
        self.turbidity
    }

    /// Gets the vapor pressure in kPa.
    #[must_use]
    pub const fn vapor_pressure(&self) -> f64 {
        self.vapor_pressure
    }
}

impl Default for AtmosphericParameters {
    fn default() -> Self {
        Self::standard()
    }
}

/// Transmissivity model applied to extraterrestrial radiation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ClearSkyModel {
    /// ASCE-EWRI (2005) eq. 47: τ = 0.75 + 2·10⁻⁵·z, no atmospheric inputs
    #[default]
    Simplified,
    /// ASCE-EWRI (2005) appendix D: beam and diffuse indices from pressure,
    /// turbidity and precipitable water
    Detailed(AtmosphericParameters),
}

impl ClearSkyModel {
    /// Detailed model with the given turbidity and the standard vapor pressure.
    ///
    /// # Errors
    /// Returns `InvalidTurbidity` unless `0 < turbidity <= 1`.
    pub fn with_turbidity(turbidity: f64) -> Result<Self> {
        Ok(Self::Detailed(AtmosphericParameters::new(
            turbidity,
            STANDARD_VAPOR_PRESSURE,
        )?))
    }
}

/// Sun position and orbital factors for one instant and place.
///
/// Angles are stored in radians; degree accessors are provided for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarGeometry {
    pub(crate) day_of_year: u32,
    pub(crate) day_angle: f64,
    pub(crate) declination: f64,
    /// Minutes
    pub(crate) equation_of_time: f64,
    /// Hours, [0, 24)
    pub(crate) solar_time: f64,
    pub(crate) hour_angle: f64,
    pub(crate) latitude: f64,
    pub(crate) cos_zenith: f64,
    pub(crate) zenith_angle: f64,
    pub(crate) inverse_relative_distance: f64,
}

impl SolarGeometry {
    /// Gets the day of year (1-366).
    #[must_use]
    pub const fn day_of_year(&self) -> u32 {
        self.day_of_year
    }

    /// Gets the day angle 2πJ/365 in radians.
    #[must_use]
    pub const fn day_angle(&self) -> f64 {
        self.day_angle
    }

    /// Gets the solar declination in radians.
    #[must_use]
    pub const fn declination(&self) -> f64 {
        self.declination
    }

    /// Gets the equation of time in minutes (true minus mean solar time).
    #[must_use]
    pub const fn equation_of_time(&self) -> f64 {
        self.equation_of_time
    }

    /// Gets the apparent solar time in hours, 0 to < 24.
    #[must_use]
    pub const fn solar_time(&self) -> f64 {
        self.solar_time
    }

    /// Gets the hour angle in radians, [-π, π), negative before solar noon.
    #[must_use]
    pub const fn hour_angle(&self) -> f64 {
        self.hour_angle
    }

    /// Gets the latitude the geometry was computed for, in radians.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Gets the cosine of the zenith angle, clamped to [-1, 1].
    #[must_use]
    pub const fn cos_zenith(&self) -> f64 {
        self.cos_zenith
    }

    /// Gets the zenith angle in radians, [0, π].
    #[must_use]
    pub const fn zenith_angle(&self) -> f64 {
        self.zenith_angle
    }

    /// Gets the zenith angle in degrees.
    #[must_use]
    pub const fn zenith_angle_degrees(&self) -> f64 {
        radians_to_degrees(self.zenith_angle)
    }

    /// Gets the elevation angle of the sun above the horizon in radians.
    #[must_use]
    pub fn elevation_angle(&self) -> f64 {
        FRAC_PI_2 - self.zenith_angle
    }

    /// Gets the inverse relative Earth-Sun distance factor dr.
    #[must_use]
    pub const fn inverse_relative_distance(&self) -> f64 {
        self.inverse_relative_distance
    }

    /// Checks if the sun is above the horizon.
    #[must_use]
    pub fn is_sun_up(&self) -> bool {
        self.zenith_angle < FRAC_PI_2 && self.cos_zenith > 0.0
    }
}

/// Clear-sky estimate returned to callers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiationEstimate {
    /// Global clear-sky radiation, W/m²
    value: f64,
    /// Extraterrestrial radiation on a horizontal plane, W/m²
    extraterrestrial: f64,
    /// Fraction of `extraterrestrial` reaching the ground
    transmissivity: f64,
}

impl RadiationEstimate {
    pub(crate) fn new(extraterrestrial: f64, transmissivity: f64) -> Self {
        let value = extraterrestrial * transmissivity;
        Self {
            value: if value > 0.0 { value } else { 0.0 },
            extraterrestrial,
            transmissivity,
        }
    }

    /// Gets the estimated global clear-sky radiation in W/m² (never negative).
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Gets the extraterrestrial radiation the estimate was derived from, in W/m².
    #[must_use]
    pub const fn extraterrestrial(&self) -> f64 {
        self.extraterrestrial
    }

    /// Gets the transmissivity applied to the extraterrestrial radiation.
    #[must_use]
    pub const fn transmissivity(&self) -> f64 {
        self.transmissivity
    }
}
