//! Example demonstrating usage without chrono.
//!
//! This shows how to use the library in no_std environments where
//! users handle their own time conversions.

use asce_clearsky::{
    ClearSkyModel, GeoPosition, radiation, solar_geometry_with_time_dependent_parts,
    time::TimeInstant, time_dependent_parts,
};

fn main() {
    // Example: 2019-06-21 13:25:00 local time, UTC+2
    // Milan: 45.46°N, 9.19°E

    println!("Clear-sky radiation without chrono\n");

    let instant = TimeInstant::new(
        2019, // year
        6,    // month
        21,   // day
        13,   // hour (local)
        25,   // minute
        0.0,  // second
        2.0,  // UTC offset (hours)
    )
    .expect("Valid date");

    println!("Day of year: {}", instant.day_of_year());
    println!("Local time: {:.4} h\n", instant.local_hours());

    let station = GeoPosition::new(45.46, 9.19, 120.0).expect("Valid coordinates");

    let simplified = radiation::estimate_from_instant(&instant, &station, &ClearSkyModel::Simplified)
        .expect("Valid station");
    let detailed = radiation::estimate_from_instant(
        &instant,
        &station,
        &ClearSkyModel::with_turbidity(0.8).expect("Valid turbidity"),
    )
    .expect("Valid station");

    println!("Simplified model: {:.1} W/m²", simplified.value());
    println!("Detailed model (Kt = 0.8): {:.1} W/m²", detailed.value());

    // Example: Using pre-computed time-dependent parts for coordinate sweeps
    println!("\nCoordinate sweep example (3 stations, same local time):");

    let parts = time_dependent_parts(&instant);

    let stations = [
        ("Milan", 45.46, 9.19, 120.0),
        ("Bolzano", 46.5, 11.35, 262.0),
        ("Zermatt", 46.02, 7.75, 1620.0),
    ];

    for (name, lat, lon, elevation) in &stations {
        let geometry =
            solar_geometry_with_time_dependent_parts(*lat, *lon, &parts).expect("Valid coordinates");
        let estimate = radiation::clear_sky_radiation(&geometry, *elevation, &ClearSkyModel::Simplified)
            .expect("Valid elevation");

        println!(
            "  {} - Zenith: {:.1}°, Clear-sky: {:.1} W/m²",
            name,
            geometry.zenith_angle_degrees(),
            estimate.value()
        );
    }
}
