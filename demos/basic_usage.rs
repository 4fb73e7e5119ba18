//! Basic clear-sky radiation estimate example.

use asce_clearsky::{AtmosphericParameters, ClearSkyModel, geometry, radiation};
use chrono::{DateTime, FixedOffset, TimeZone, Utc};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Example 1: Milan around solar noon on the June solstice, local summer time
    let datetime_fixed = "2019-06-21T13:25:00+02:00".parse::<DateTime<FixedOffset>>()?;

    // Example 2: Same moment using UTC
    let datetime_utc = Utc.with_ymd_and_hms(2019, 6, 21, 11, 25, 0).unwrap();
    let latitude = 45.46;
    let longitude = 9.19;
    let elevation = 120.0; // meters

    let geometry = geometry::solar_geometry(datetime_fixed, latitude, longitude)?;
    println!("Solar geometry for Milan on June 21, 2019 at 13:25 CEST:");
    println!("  Day of year: {}", geometry.day_of_year());
    println!("  Declination: {:.3}°", geometry.declination().to_degrees());
    println!("  Equation of time: {:.2} min", geometry.equation_of_time());
    println!("  Solar time: {:.3} h", geometry.solar_time());
    println!("  Zenith angle: {:.3}°", geometry.zenith_angle_degrees());

    // Simplified model: elevation is the only atmospheric input
    let simplified =
        radiation::estimate_clear_sky_radiation(datetime_fixed, latitude, longitude, elevation, None)?;
    let same_moment =
        radiation::estimate_clear_sky_radiation(datetime_utc, latitude, longitude, elevation, None)?;

    println!("\nSimplified model (τ = 0.75 + 2e-5·z):");
    println!("  Extraterrestrial: {:.1} W/m²", simplified.extraterrestrial());
    println!("  Transmissivity: {:.4}", simplified.transmissivity());
    println!("  Clear-sky radiation: {:.1} W/m²", simplified.value());
    println!(
        "  Identical in UTC: {}",
        simplified.value() == same_moment.value()
    );

    // Detailed model for a range of turbidities
    println!("\nDetailed model (vapor pressure 1 kPa):");
    for kt in [1.0, 0.8, 0.6, 0.5] {
        let estimate = radiation::estimate_clear_sky_radiation(
            datetime_fixed,
            latitude,
            longitude,
            elevation,
            Some(kt),
        )?;
        println!("  Kt = {kt:.1}: {:.1} W/m²", estimate.value());
    }

    // Humid air through an explicit model
    let humid = ClearSkyModel::Detailed(AtmosphericParameters::new(1.0, 3.0)?);
    let estimate = radiation::estimate_clear_sky_radiation_with_model(
        datetime_fixed,
        latitude,
        longitude,
        elevation,
        &humid,
    )?;
    println!("  Kt = 1.0, ea = 3 kPa: {:.1} W/m²", estimate.value());

    let noon = geometry::solar_noon(datetime_fixed, longitude)?;
    println!("\nSolar noon: {noon}");

    Ok(())
}
