//! Solar geometry from day of year, clock time and station coordinates.
//!
//! Follows the closed-form approximations of ASCE-EWRI (2005), *The ASCE
//! Standardized Reference Evapotranspiration Equation*: eq. 23 (inverse relative
//! distance), eq. 24 (declination), eqs. 55-58 (solar time angle and seasonal
//! correction) and eq. 59 (sunset hour angle).
//!
//! All angles are in radians unless a name says otherwise. Longitudes are
//! positive eastwards, so the ASCE "degrees west of Greenwich" convention is
//! folded into [`solar_time`].

use crate::error::check_coordinates;
use crate::math::{
    PI, acos_clamped, cos, degrees_to_radians, normalize_degrees_signed, sin, tan, wrap_0_to,
};
use crate::time::TimeInstant;
use crate::{Result, SolarGeometry};
#[cfg(feature = "chrono")]
use crate::{Error, math::floor, time::SECONDS_PER_HOUR};
#[cfg(feature = "chrono")]
use chrono::{DateTime, TimeDelta, TimeZone};

/// Length of the year used by the day angle (eqs. 23-24).
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Amplitude of the declination wave, about the obliquity of the ecliptic (eq. 24).
const DECLINATION_AMPLITUDE: f64 = 0.409;

/// Phase of the declination wave (eq. 24).
const DECLINATION_PHASE: f64 = 1.39;

/// Amplitude of the inverse squared Earth-Sun distance (eq. 23).
const ECCENTRICITY_AMPLITUDE: f64 = 0.033;

/// Day of year at which the seasonal correction angle is zero (eq. 58).
const SEASONAL_CORRECTION_ORIGIN: f64 = 81.0;

/// Period of the seasonal correction angle in days (eq. 58).
const SEASONAL_CORRECTION_PERIOD: f64 = 364.0;

/// Earth rotation rate.
const DEGREES_PER_HOUR: f64 = 15.0;

const MINUTES_PER_HOUR: f64 = 60.0;

/// Location-independent part of the solar geometry at one instant.
///
/// Compute once with [`time_dependent_parts`] and reuse it through
/// [`solar_geometry_with_time_dependent_parts`] when sweeping many stations
/// at the same local time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeDependentParts {
    day_of_year: u32,
    day_angle: f64,
    declination: f64,
    equation_of_time: f64,
    inverse_relative_distance: f64,
    local_hours: f64,
    utc_offset_hours: f64,
}

impl TimeDependentParts {
    /// Gets the day of year.
    #[must_use]
    pub const fn day_of_year(&self) -> u32 {
        self.day_of_year
    }

    /// Gets the solar declination in radians.
    #[must_use]
    pub const fn declination(&self) -> f64 {
        self.declination
    }

    /// Gets the equation of time in minutes.
    #[must_use]
    pub const fn equation_of_time(&self) -> f64 {
        self.equation_of_time
    }
}

/// Day angle 2πJ/365 in radians.
#[must_use]
pub fn day_angle(day_of_year: u32) -> f64 {
    2.0 * PI * f64::from(day_of_year) / DAYS_PER_YEAR
}

/// Solar declination in radians (eq. 24).
///
/// # Example
/// ```
/// # use asce_clearsky::geometry::solar_declination;
/// // Northern summer solstice: close to +23.4°
/// assert!((solar_declination(172).to_degrees() - 23.43).abs() < 0.05);
/// ```
#[must_use]
pub fn solar_declination(day_of_year: u32) -> f64 {
    DECLINATION_AMPLITUDE * sin(day_angle(day_of_year) - DECLINATION_PHASE)
}

/// Inverse relative Earth-Sun distance dr (eq. 23), about 1.033 in early January.
#[must_use]
pub fn inverse_relative_distance(day_of_year: u32) -> f64 {
    1.0 + ECCENTRICITY_AMPLITUDE * cos(day_angle(day_of_year))
}

/// Equation of time in minutes (seasonal correction Sc of eqs. 57-58).
///
/// Positive values mean the sundial runs ahead of mean solar time.
#[must_use]
pub fn equation_of_time(day_of_year: u32) -> f64 {
    let b = 2.0 * PI * (f64::from(day_of_year) - SEASONAL_CORRECTION_ORIGIN)
        / SEASONAL_CORRECTION_PERIOD;
    let hours = 0.1645 * sin(2.0 * b) - 0.1255 * cos(b) - 0.025 * sin(b);
    hours * MINUTES_PER_HOUR
}

/// Apparent solar time in hours, wrapped into [0, 24).
///
/// # Arguments
/// * `local_hours` - Local clock time in hours
/// * `longitude` - Station longitude in degrees, positive eastwards
/// * `utc_offset_hours` - Offset of the local clock from UTC; its meridian is `15 × offset`
/// * `equation_of_time` - Equation of time in minutes
#[must_use]
pub fn solar_time(
    local_hours: f64,
    longitude: f64,
    utc_offset_hours: f64,
    equation_of_time: f64,
) -> f64 {
    let meridian_offset = normalize_degrees_signed(longitude - DEGREES_PER_HOUR * utc_offset_hours);
    wrap_0_to(
        local_hours + meridian_offset / DEGREES_PER_HOUR + equation_of_time / MINUTES_PER_HOUR,
        24.0,
    )
}

/// Hour angle in radians, [-π, π): negative in the morning, zero at solar noon.
#[must_use]
pub fn hour_angle(solar_time: f64) -> f64 {
    PI / 12.0 * (wrap_0_to(solar_time, 24.0) - 12.0)
}

/// Cosine of the zenith angle, clamped to [-1, 1].
///
/// `latitude`, `declination` and `hour_angle` are in radians.
#[must_use]
pub fn cos_zenith(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    let cos_z = sin(latitude) * sin(declination)
        + cos(latitude) * cos(declination) * cos(hour_angle);
    cos_z.clamp(-1.0, 1.0)
}

/// Zenith angle in radians, [0, π].
#[must_use]
pub fn zenith_angle(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    acos_clamped(cos_zenith(latitude, declination, hour_angle))
}

/// Sunset hour angle ωs in radians, [0, π] (eq. 59).
///
/// Polar day yields π (the sun never sets) and polar night yields 0.
#[must_use]
pub fn sunset_hour_angle(latitude: f64, declination: f64) -> f64 {
    acos_clamped(-tan(latitude) * tan(declination))
}

/// Local clock time, in hours, at which the sun crosses the meridian.
///
/// Departs from 12:00 by the longitude offset from the time-zone meridian
/// and by the equation of time.
///
/// # Example
/// ```
/// # use asce_clearsky::geometry::solar_noon_local_hours;
/// // On the zone meridian the offset is the equation of time alone:
/// // early November the sun culminates about 16 minutes early.
/// let noon = solar_noon_local_hours(307, 15.0, 1.0);
/// assert!((noon - (12.0 - 16.3 / 60.0)).abs() < 0.01);
/// ```
#[must_use]
pub fn solar_noon_local_hours(day_of_year: u32, longitude: f64, utc_offset_hours: f64) -> f64 {
    let meridian_offset = normalize_degrees_signed(longitude - DEGREES_PER_HOUR * utc_offset_hours);
    12.0 - meridian_offset / DEGREES_PER_HOUR - equation_of_time(day_of_year) / MINUTES_PER_HOUR
}

/// Computes the location-independent geometry terms for an instant.
#[must_use]
pub fn time_dependent_parts(instant: &TimeInstant) -> TimeDependentParts {
    let day_of_year = instant.day_of_year();
    TimeDependentParts {
        day_of_year,
        day_angle: day_angle(day_of_year),
        declination: solar_declination(day_of_year),
        equation_of_time: equation_of_time(day_of_year),
        inverse_relative_distance: inverse_relative_distance(day_of_year),
        local_hours: instant.local_hours(),
        utc_offset_hours: instant.utc_offset_hours(),
    }
}

/// Completes the solar geometry for a station from precomputed time terms.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
pub fn solar_geometry_with_time_dependent_parts(
    latitude: f64,
    longitude: f64,
    parts: &TimeDependentParts,
) -> Result<SolarGeometry> {
    check_coordinates(latitude, longitude)?;

    let solar_time = solar_time(
        parts.local_hours,
        longitude,
        parts.utc_offset_hours,
        parts.equation_of_time,
    );
    let hour_angle = hour_angle(solar_time);
    let latitude_rad = degrees_to_radians(latitude);
    let cos_zenith = cos_zenith(latitude_rad, parts.declination, hour_angle);

    Ok(SolarGeometry {
        day_of_year: parts.day_of_year,
        day_angle: parts.day_angle,
        declination: parts.declination,
        equation_of_time: parts.equation_of_time,
        solar_time,
        hour_angle,
        latitude: latitude_rad,
        cos_zenith,
        zenith_angle: acos_clamped(cos_zenith),
        inverse_relative_distance: parts.inverse_relative_distance,
    })
}

/// Computes the solar geometry for a numeric instant.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
///
/// # Example
/// ```
/// use asce_clearsky::{geometry, time::TimeInstant};
///
/// let instant = TimeInstant::new(2019, 6, 21, 13, 0, 0.0, 2.0).unwrap();
/// let geometry = geometry::solar_geometry_from_instant(&instant, 45.0, 9.0).unwrap();
/// assert!(geometry.is_sun_up());
/// assert!(geometry.zenith_angle_degrees() < 25.0);
/// ```
pub fn solar_geometry_from_instant(
    instant: &TimeInstant,
    latitude: f64,
    longitude: f64,
) -> Result<SolarGeometry> {
    solar_geometry_with_time_dependent_parts(latitude, longitude, &time_dependent_parts(instant))
}

/// Computes the solar geometry for a timezone-aware date and time.
///
/// Day of year and clock time are taken in the datetime's own time zone.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
///
/// # Example
/// ```rust
/// # #[cfg(feature = "chrono")] {
/// use asce_clearsky::geometry;
/// use chrono::{DateTime, FixedOffset};
///
/// let datetime = "2019-03-21T12:00:00+00:00".parse::<DateTime<FixedOffset>>().unwrap();
/// let geometry = geometry::solar_geometry(datetime, 0.0, 0.0).unwrap();
/// assert!(geometry.zenith_angle_degrees() < 2.5);
/// # }
/// ```
#[cfg(feature = "chrono")]
#[allow(clippy::needless_pass_by_value)]
pub fn solar_geometry<Tz: TimeZone>(
    datetime: DateTime<Tz>,
    latitude: f64,
    longitude: f64,
) -> Result<SolarGeometry> {
    let instant = TimeInstant::from_datetime(&datetime);
    let geometry = solar_geometry_from_instant(&instant, latitude, longitude)?;
    log::trace!(
        "solar geometry day={} lat={latitude} lon={longitude}: solar_time={:.4}h zenith={:.4}rad",
        geometry.day_of_year,
        geometry.solar_time,
        geometry.zenith_angle
    );
    Ok(geometry)
}

/// Finds solar noon on the local date of `datetime`.
///
/// The UTC offset in force at `datetime` is used for the whole day.
///
/// # Errors
/// Returns `InvalidLongitude` for an out-of-range longitude and `InvalidDateTime`
/// if solar noon cannot be represented.
#[cfg(feature = "chrono")]
#[allow(clippy::needless_pass_by_value)]
pub fn solar_noon<Tz: TimeZone>(datetime: DateTime<Tz>, longitude: f64) -> Result<DateTime<Tz>> {
    crate::error::check_longitude(longitude)?;

    let instant = TimeInstant::from_datetime(&datetime);
    let noon = solar_noon_local_hours(
        instant.day_of_year(),
        longitude,
        instant.utc_offset_hours(),
    );
    let millis = floor((noon - instant.local_hours()) * SECONDS_PER_HOUR * 1000.0 + 0.5) as i64;

    TimeDelta::try_milliseconds(millis)
        .and_then(|delta| datetime.checked_add_signed(delta))
        .ok_or(Error::invalid_datetime(
            "solar noon is outside the representable date range",
        ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::FRAC_PI_2;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_declination_extremes() {
        // June solstice: day angle minus phase is almost exactly π/2
        assert!((solar_declination(172) - DECLINATION_AMPLITUDE).abs() < 1e-4);
        assert!((solar_declination(355) + DECLINATION_AMPLITUDE).abs() < 1e-3);
        // Equinoxes close to zero
        assert!(solar_declination(80).abs() < 0.01);
        assert!(solar_declination(266).abs() < 0.02);

        for day in 1..=366 {
            assert!(solar_declination(day).abs() <= DECLINATION_AMPLITUDE);
        }
    }

    #[test]
    fn test_inverse_relative_distance() {
        assert!((inverse_relative_distance(365) - 1.033).abs() < 1e-6);
        assert!(inverse_relative_distance(1) > 1.032);
        assert!((inverse_relative_distance(183) - 0.967).abs() < 1e-4);
    }

    #[test]
    fn test_equation_of_time_range() {
        // Mid-February minimum and early-November maximum
        assert!((equation_of_time(43) + 14.6).abs() < 0.2);
        assert!((equation_of_time(307) - 16.3).abs() < 0.2);

        for day in 1..=366 {
            let eot = equation_of_time(day);
            assert!((-17.0..=17.0).contains(&eot), "day {day}: {eot}");
        }
    }

    #[test]
    fn test_solar_time_longitude_offset() {
        // On the zone meridian only the equation of time shifts the clock
        assert!((solar_time(12.0, 15.0, 1.0, 0.0) - 12.0).abs() < EPSILON);
        // 9°E in UTC+1 lies 6° west of the meridian: 24 minutes behind
        assert!((solar_time(12.0, 9.0, 1.0, 0.0) - 11.6).abs() < EPSILON);
        assert!((solar_time(12.0, 9.0, 1.0, 6.0) - 11.7).abs() < EPSILON);
        // Samoa: UTC+13 at 172°W is 7° west of its wrapped meridian
        assert!((solar_time(12.0, -172.0, 13.0, 0.0) - (12.0 - 7.0 / 15.0)).abs() < 1e-9);
        // Wraps around midnight
        assert!((solar_time(0.1, -15.0, 0.0, 0.0) - 23.1).abs() < 1e-9);
    }

    #[test]
    fn test_hour_angle_sign() {
        assert_eq!(hour_angle(12.0), 0.0);
        assert!((hour_angle(9.0) + PI / 4.0).abs() < EPSILON);
        assert!((hour_angle(15.0) - PI / 4.0).abs() < EPSILON);
        assert!((hour_angle(0.0) + PI).abs() < EPSILON);
        assert!(hour_angle(23.999) < PI);
    }

    #[test]
    fn test_zenith_overhead_and_horizon() {
        assert!(zenith_angle(0.0, 0.0, 0.0).abs() < EPSILON);
        assert!((zenith_angle(0.0, 0.0, FRAC_PI_2) - FRAC_PI_2).abs() < EPSILON);
        assert!((zenith_angle(0.0, 0.0, PI) - PI).abs() < EPSILON);
    }

    #[test]
    fn test_zenith_at_poles() {
        let declination = solar_declination(172);
        for step in 0..=48 {
            let omega = -PI + f64::from(step) * PI / 24.0;
            let north = zenith_angle(FRAC_PI_2, declination, omega);
            let south = zenith_angle(-FRAC_PI_2, declination, omega);
            assert!((north - (FRAC_PI_2 - declination)).abs() < 1e-9);
            assert!((south - (FRAC_PI_2 + declination)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_sunset_hour_angle() {
        // Equator: twelve hours of daylight year round
        assert!((sunset_hour_angle(0.0, 0.3) - FRAC_PI_2).abs() < EPSILON);
        // Polar day and polar night
        let lat = degrees_to_radians(80.0);
        assert_eq!(sunset_hour_angle(lat, 0.4), PI);
        assert_eq!(sunset_hour_angle(lat, -0.4), 0.0);
        assert!(sunset_hour_angle(FRAC_PI_2, 0.0).is_finite());
    }

    #[test]
    fn test_geometry_validation() {
        let instant = TimeInstant::from_utc(2019, 6, 21, 12, 0, 0.0).unwrap();
        assert!(solar_geometry_from_instant(&instant, 91.0, 0.0).is_err());
        assert!(solar_geometry_from_instant(&instant, 0.0, -181.0).is_err());
        assert!(solar_geometry_from_instant(&instant, f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_split_api_matches_direct_call() {
        let instant = TimeInstant::new(2019, 7, 1, 10, 30, 0.0, 2.0).unwrap();
        let parts = time_dependent_parts(&instant);
        assert_eq!(parts.day_of_year(), 182);

        for &(lat, lon) in &[(45.0, 9.0), (-33.9, 18.4), (64.1, -21.9)] {
            let direct = solar_geometry_from_instant(&instant, lat, lon).unwrap();
            let split = solar_geometry_with_time_dependent_parts(lat, lon, &parts).unwrap();
            assert_eq!(direct, split);
        }
    }

    #[test]
    fn test_solar_noon_hour_angle_is_zero() {
        let noon = solar_noon_local_hours(172, 9.0, 2.0);
        let solar = solar_time(noon, 9.0, 2.0, equation_of_time(172));
        assert!(hour_angle(solar).abs() < 1e-9);
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_solar_noon_datetime() {
        use chrono::{DateTime, FixedOffset, Timelike};

        let datetime = "2019-06-21T08:00:00+02:00"
            .parse::<DateTime<FixedOffset>>()
            .unwrap();
        let noon = solar_noon(datetime, 9.0).unwrap();
        // 9°E in CEST culminates at 13:24 mean time; the sun lags 1.5 minutes at the solstice
        assert_eq!(noon.hour(), 13);
        assert_eq!(noon.minute(), 25, "{noon}");
        assert_eq!(noon.second(), 30, "{noon}");

        let geometry = solar_geometry(noon, 45.0, 9.0).unwrap();
        assert!(geometry.hour_angle().abs() < 1e-5);
    }
}
