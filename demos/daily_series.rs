//! Daily clear-sky curve at logger resolution, as used to screen pyranometer data.

use asce_clearsky::{ClearSkyModel, GeoPosition, radiation};
use chrono::TimeZone;
use chrono_tz::Europe::Rome;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let station = GeoPosition::new(46.5, 11.35, 262.0)?; // Bolzano
    let model = ClearSkyModel::with_turbidity(0.95)?;
    let start = Rome
        .with_ymd_and_hms(2019, 7, 15, 0, 0, 0)
        .single()
        .ok_or("ambiguous local midnight")?;

    println!("Hourly clear-sky means for Bolzano, {}", start.date_naive());
    println!("{:<28} {:>10} {:>10}", "period start", "Ra W/m²", "Rso W/m²");

    let mut daily_sum = 0.0;
    for (timestamp, estimate) in radiation::clear_sky_series(start, 3600, 24, station, model)? {
        daily_sum += estimate.value();
        if estimate.extraterrestrial() > 0.0 {
            println!(
                "{:<28} {:>10.1} {:>10.1}",
                timestamp.to_rfc3339(),
                estimate.extraterrestrial(),
                estimate.value()
            );
        }
    }

    // Hourly means in W/m² summed over a day give Wh/m²
    println!("\nDaily clear-sky total: {:.2} MJ/m²", daily_sum * 3600.0 / 1e6);

    let daily = radiation::estimate_clear_sky_radiation_over_period(
        start,
        86_400.0,
        station.latitude(),
        station.longitude(),
        station.elevation(),
        &model,
    )?;
    println!("Daily mean from one call: {:.1} W/m²", daily.value());

    Ok(())
}
