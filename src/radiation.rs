//! Clear-sky global radiation after ASCE-EWRI (2005).
//!
//! Extraterrestrial radiation on a horizontal surface (eqs. 21 and 48) is
//! reduced by a transmissivity, either the simplified elevation-only form
//! (eq. 47) or the beam and diffuse indices of appendix D (eqs. D.1-D.7).
//!
//! Results are irradiances in W/m². Instantaneous estimates use the sun
//! position at the given instant; period estimates average over an interval
//! that starts at the given instant, as station loggers time-stamp their means.

#![allow(clippy::suboptimal_flops)]

use crate::error::{check_averaging_period, check_elevation};
use crate::geometry::sunset_hour_angle;
use crate::math::{FRAC_PI_2, PI, cos, exp, powf, sin};
use crate::time::{SECONDS_PER_HOUR, TimeInstant};
use crate::{
    AtmosphericParameters, ClearSkyModel, GeoPosition, RadiationEstimate, Result, SolarGeometry,
};
#[cfg(feature = "chrono")]
use crate::{Error, geometry::solar_geometry, math::floor};
#[cfg(feature = "chrono")]
use chrono::{DateTime, TimeDelta, TimeZone};

/// Solar constant Gsc = 4.92 MJ m⁻² h⁻¹ expressed in W/m² (eq. 21, about 1366.7).
pub const SOLAR_CONSTANT: f64 = 4.92e6 / SECONDS_PER_HOUR;

/// Sea-level transmissivity of the simplified model (eq. 47).
pub const SIMPLIFIED_SEA_LEVEL_TRANSMISSIVITY: f64 = 0.75;

/// Transmissivity gain per meter of elevation in the simplified model (eq. 47).
pub const SIMPLIFIED_TRANSMISSIVITY_GRADIENT: f64 = 2.0e-5;

/// Mean sea-level pressure in kPa (eq. 34).
pub const SEA_LEVEL_PRESSURE: f64 = 101.3;

/// Beam index below which the diffuse index switches branch (eq. D.7).
///
/// Eq. D.7 is discontinuous here: just above the threshold Kb + Kd is about
/// 0.446, below the 0.453 reached just under it. Above the threshold the
/// transmissivity is held at [`TRANSMISSIVITY_AT_BEAM_THRESHOLD`] until the upper
/// branch catches up (Kb ≈ 0.161), so radiation never drops as the sun rises.
const BEAM_INDEX_THRESHOLD: f64 = 0.15;

/// Kb + Kd of the lower eq. D.7 branch at [`BEAM_INDEX_THRESHOLD`].
const TRANSMISSIVITY_AT_BEAM_THRESHOLD: f64 =
    BEAM_INDEX_THRESHOLD + 0.18 + 0.82 * BEAM_INDEX_THRESHOLD;

/// Extraterrestrial radiation on a horizontal plane at the instant of `geometry`, W/m².
///
/// Zero whenever the sun is at or below the horizon.
#[must_use]
pub fn extraterrestrial_radiation(geometry: &SolarGeometry) -> f64 {
    if geometry.zenith_angle() >= FRAC_PI_2 || geometry.cos_zenith() <= 0.0 {
        return 0.0;
    }
    SOLAR_CONSTANT * geometry.inverse_relative_distance() * geometry.cos_zenith()
}

/// Mean extraterrestrial radiation over a period centred on `geometry`, W/m².
///
/// Integrates eq. 48 between the hour angles half a period before and after
/// the geometry's hour angle, both limited to the sunrise/sunset angles, and
/// divides by the period length. A period spanning solar midnight is split at
/// ±π so polar-day means stay continuous.
///
/// # Errors
/// Returns `InvalidAveragingPeriod` unless `0 < averaging_period <= 86400` seconds.
pub fn extraterrestrial_radiation_over_period(
    geometry: &SolarGeometry,
    averaging_period: f64,
) -> Result<f64> {
    check_averaging_period(averaging_period)?;

    let period_hours = averaging_period / SECONDS_PER_HOUR;
    let half_width = PI * period_hours / 24.0;
    let latitude = geometry.latitude();
    let declination = geometry.declination();
    let sunset = sunset_hour_angle(latitude, declination);
    let integrate = |start: f64, end: f64| {
        let end = end.clamp(-sunset, sunset);
        let start = start.clamp(-sunset, sunset).min(end);
        (end - start) * sin(latitude) * sin(declination)
            + cos(latitude) * cos(declination) * (sin(end) - sin(start))
    };

    // Periods across solar midnight continue on the other side of ±π
    let start = geometry.hour_angle() - half_width;
    let end = geometry.hour_angle() + half_width;
    let mut integral = integrate(start.max(-PI), end.min(PI));
    if end > PI {
        integral += integrate(-PI, end - 2.0 * PI);
    }
    if start < -PI {
        integral += integrate(start + 2.0 * PI, PI);
    }

    let ra = 12.0 / PI * SOLAR_CONSTANT * geometry.inverse_relative_distance() * integral
        / period_hours;

    Ok(if ra > 0.0 { ra } else { 0.0 })
}

/// Atmospheric pressure in kPa at `elevation` meters (eq. 34).
#[must_use]
pub fn atmospheric_pressure(elevation: f64) -> f64 {
    SEA_LEVEL_PRESSURE * powf((293.0 - 0.0065 * elevation) / 293.0, 5.26)
}

/// Precipitable water in mm from vapor pressure and air pressure, both kPa (eq. D.3).
#[must_use]
pub fn precipitable_water(vapor_pressure: f64, pressure: f64) -> f64 {
    0.14 * vapor_pressure * pressure + 2.1
}

/// Transmissivity of the simplified model: 0.75 + 2·10⁻⁵·z (eq. 47).
#[must_use]
pub fn simplified_transmissivity(elevation: f64) -> f64 {
    SIMPLIFIED_SEA_LEVEL_TRANSMISSIVITY + SIMPLIFIED_TRANSMISSIVITY_GRADIENT * elevation
}

/// Transmissivity Kb + Kd of the appendix D model.
///
/// `sin_sun_elevation` is the sine of the sun's angle above the horizon; at or
/// below the horizon the result is zero. The result is continuous and
/// non-decreasing in the sun elevation (see [`BEAM_INDEX_THRESHOLD`]).
#[must_use]
pub fn detailed_transmissivity(
    elevation: f64,
    atmosphere: &AtmosphericParameters,
    sin_sun_elevation: f64,
) -> f64 {
    if sin_sun_elevation <= 0.0 {
        return 0.0;
    }

    let pressure = atmospheric_pressure(elevation);
    let water = precipitable_water(atmosphere.vapor_pressure(), pressure);
    let beam = 0.98
        * exp(-0.00146 * pressure / (atmosphere.turbidity() * sin_sun_elevation)
            - 0.075 * powf(water / sin_sun_elevation, 0.4));
    if beam < BEAM_INDEX_THRESHOLD {
        return beam + 0.18 + 0.82 * beam;
    }

    let diffuse = 0.35 - 0.36 * beam;
    (beam + diffuse).max(TRANSMISSIVITY_AT_BEAM_THRESHOLD)
}

/// Transmissivity of `model` for the given elevation and sun elevation sine.
#[must_use]
pub fn transmissivity(model: &ClearSkyModel, elevation: f64, sin_sun_elevation: f64) -> f64 {
    match model {
        ClearSkyModel::Simplified => simplified_transmissivity(elevation),
        ClearSkyModel::Detailed(atmosphere) => {
            detailed_transmissivity(elevation, atmosphere, sin_sun_elevation)
        }
    }
}

/// Instantaneous clear-sky radiation for precomputed geometry.
///
/// # Errors
/// Returns `InvalidElevation` for an implausible station elevation.
pub fn clear_sky_radiation(
    geometry: &SolarGeometry,
    elevation: f64,
    model: &ClearSkyModel,
) -> Result<RadiationEstimate> {
    check_elevation(elevation)?;

    let ra = extraterrestrial_radiation(geometry);
    let tau = transmissivity(model, elevation, geometry.cos_zenith());
    Ok(RadiationEstimate::new(ra, tau))
}

/// Clear-sky radiation averaged over a period centred on `geometry`.
///
/// The detailed model is evaluated at the period-mean sun elevation,
/// sin β = Ra / (Gsc · dr).
///
/// # Errors
/// Returns `InvalidElevation` or `InvalidAveragingPeriod`.
pub fn clear_sky_radiation_over_period(
    geometry: &SolarGeometry,
    averaging_period: f64,
    elevation: f64,
    model: &ClearSkyModel,
) -> Result<RadiationEstimate> {
    check_elevation(elevation)?;

    let ra = extraterrestrial_radiation_over_period(geometry, averaging_period)?;
    let mean_sin_elevation = ra / (SOLAR_CONSTANT * geometry.inverse_relative_distance());
    let tau = transmissivity(model, elevation, mean_sin_elevation);
    Ok(RadiationEstimate::new(ra, tau))
}

/// Instantaneous clear-sky radiation for a numeric instant and station.
///
/// # Errors
/// Never fails for a validated [`GeoPosition`]; the `Result` mirrors the other entry points.
///
/// # Example
/// ```
/// use asce_clearsky::{radiation, time::TimeInstant, ClearSkyModel, GeoPosition};
///
/// let station = GeoPosition::new(45.0, 9.0, 120.0).unwrap();
/// let midnight = TimeInstant::new(2019, 6, 21, 0, 0, 0.0, 2.0).unwrap();
/// let estimate =
///     radiation::estimate_from_instant(&midnight, &station, &ClearSkyModel::Simplified).unwrap();
/// assert_eq!(estimate.value(), 0.0);
/// ```
pub fn estimate_from_instant(
    instant: &TimeInstant,
    position: &GeoPosition,
    model: &ClearSkyModel,
) -> Result<RadiationEstimate> {
    let geometry = crate::geometry::solar_geometry_from_instant(
        instant,
        position.latitude(),
        position.longitude(),
    )?;
    clear_sky_radiation(&geometry, position.elevation(), model)
}

/// Estimates clear-sky global radiation at an instant.
///
/// Without a turbidity coefficient the simplified model (eq. 47) is used, which
/// has no atmospheric inputs. Supplying one selects the appendix D model with
/// that `Kt` and the standard vapor pressure.
///
/// # Arguments
/// * `datetime` - Timezone-aware date and time
/// * `latitude` - Station latitude in degrees (-90 to +90)
/// * `longitude` - Station longitude in degrees (-180 to +180)
/// * `elevation` - Station elevation in meters above sea level
/// * `turbidity` - Optional turbidity coefficient `Kt` in (0, 1]
///
/// # Errors
/// Returns an invalid-input error for out-of-range coordinates, elevation or turbidity.
///
/// # Example
/// ```rust
/// # #[cfg(feature = "chrono")] {
/// use asce_clearsky::radiation;
/// use chrono::{DateTime, FixedOffset};
///
/// let datetime = "2019-06-21T13:25:00+02:00".parse::<DateTime<FixedOffset>>().unwrap();
/// let estimate = radiation::estimate_clear_sky_radiation(datetime, 45.0, 9.0, 120.0, None).unwrap();
/// assert!(estimate.value() > 900.0 && estimate.value() < 1000.0);
///
/// let hazy = radiation::estimate_clear_sky_radiation(datetime, 45.0, 9.0, 120.0, Some(0.5)).unwrap();
/// assert!(hazy.value() < estimate.value());
/// # }
/// ```
#[cfg(feature = "chrono")]
pub fn estimate_clear_sky_radiation<Tz: TimeZone>(
    datetime: DateTime<Tz>,
    latitude: f64,
    longitude: f64,
    elevation: f64,
    turbidity: Option<f64>,
) -> Result<RadiationEstimate> {
    let model = match turbidity {
        Some(kt) => ClearSkyModel::with_turbidity(kt)?,
        None => ClearSkyModel::Simplified,
    };
    estimate_clear_sky_radiation_with_model(datetime, latitude, longitude, elevation, &model)
}

/// Estimates clear-sky global radiation at an instant with an explicit model.
///
/// # Errors
/// Returns an invalid-input error for out-of-range coordinates or elevation.
#[cfg(feature = "chrono")]
pub fn estimate_clear_sky_radiation_with_model<Tz: TimeZone>(
    datetime: DateTime<Tz>,
    latitude: f64,
    longitude: f64,
    elevation: f64,
    model: &ClearSkyModel,
) -> Result<RadiationEstimate> {
    check_elevation(elevation)?;
    let geometry = solar_geometry(datetime, latitude, longitude)?;
    let estimate = clear_sky_radiation(&geometry, elevation, model)?;
    log::debug!(
        "clear-sky estimate lat={latitude} lon={longitude} z={elevation}m: {:.2} W/m² (Ra={:.2}, tau={:.4})",
        estimate.value(),
        estimate.extraterrestrial(),
        estimate.transmissivity()
    );
    Ok(estimate)
}

/// Estimates mean clear-sky radiation over the period starting at `datetime`.
///
/// # Arguments
/// * `datetime` - Start of the averaging period
/// * `averaging_period` - Period length in seconds, (0, 86400]
/// * `latitude`, `longitude`, `elevation` - Station position
/// * `model` - Transmissivity model
///
/// # Errors
/// Returns an invalid-input error for out-of-range arguments, or `InvalidDateTime`
/// if the period midpoint cannot be represented.
#[cfg(feature = "chrono")]
pub fn estimate_clear_sky_radiation_over_period<Tz: TimeZone>(
    datetime: DateTime<Tz>,
    averaging_period: f64,
    latitude: f64,
    longitude: f64,
    elevation: f64,
    model: &ClearSkyModel,
) -> Result<RadiationEstimate> {
    check_averaging_period(averaging_period)?;
    check_elevation(elevation)?;

    let half_period_millis = floor(averaging_period * 500.0 + 0.5) as i64;
    let midpoint = TimeDelta::try_milliseconds(half_period_millis)
        .and_then(|half| datetime.checked_add_signed(half))
        .ok_or(Error::invalid_datetime(
            "averaging period midpoint is outside the representable date range",
        ))?;
    let geometry = solar_geometry(midpoint, latitude, longitude)?;
    let estimate = clear_sky_radiation_over_period(&geometry, averaging_period, elevation, model)?;
    log::debug!(
        "clear-sky mean over {averaging_period}s lat={latitude} lon={longitude}: {:.2} W/m²",
        estimate.value()
    );
    Ok(estimate)
}

/// Generates a regular series of period-mean clear-sky estimates.
///
/// Each element covers `step_seconds` starting at its timestamp, so the series
/// can be compared directly with logger means of the same interval. The
/// iterator stops early if a timestamp leaves chrono's representable range.
///
/// # Errors
/// Returns `InvalidAveragingPeriod` unless `0 < step_seconds <= 86400`.
///
/// # Example
/// ```rust
/// # #[cfg(feature = "chrono")] {
/// use asce_clearsky::{radiation, ClearSkyModel, GeoPosition};
/// use chrono::{DateTime, Utc};
///
/// let start = "2019-03-08T00:00:00Z".parse::<DateTime<Utc>>().unwrap();
/// let station = GeoPosition::new(45.5, 9.5, 0.0).unwrap();
/// let hourly: Vec<_> =
///     radiation::clear_sky_series(start, 3600, 24, station, ClearSkyModel::Simplified)
///         .unwrap()
///         .collect();
/// assert_eq!(hourly.len(), 24);
/// assert_eq!(hourly[0].1.value(), 0.0);
/// assert!(hourly[11].1.value() > 400.0);
/// # }
/// ```
#[cfg(feature = "chrono")]
pub fn clear_sky_series<Tz: TimeZone>(
    start: DateTime<Tz>,
    step_seconds: u32,
    count: usize,
    position: GeoPosition,
    model: ClearSkyModel,
) -> Result<impl Iterator<Item = (DateTime<Tz>, RadiationEstimate)>> {
    let period = f64::from(step_seconds);
    check_averaging_period(period)?;
    let step = TimeDelta::try_seconds(i64::from(step_seconds))
        .ok_or(Error::invalid_averaging_period(period))?;

    Ok((0..count).map_while(move |i| {
        let Some(timestamp) = i32::try_from(i)
            .ok()
            .and_then(|i| step.checked_mul(i))
            .and_then(|offset| start.clone().checked_add_signed(offset))
        else {
            log::debug!("clear-sky series stopped after {i} of {count} steps: timestamp out of range");
            return None;
        };
        match estimate_clear_sky_radiation_over_period(
            timestamp.clone(),
            period,
            position.latitude(),
            position.longitude(),
            position.elevation(),
            &model,
        ) {
            Ok(estimate) => Some((timestamp, estimate)),
            Err(error) => {
                log::debug!("clear-sky series stopped after {i} of {count} steps: {error}");
                None
            }
        }
    }))
}
