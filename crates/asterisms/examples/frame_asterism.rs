//! Frame the Big Dipper: mean center vs. smallest enclosing disk.
//!
//! Purpose
//! - Show the gap between the naive RA/Dec average and the center of the
//!   smallest field of view that holds every star.
//! - Positions are approximate J2000 coordinates.

use asterisms::sky::{circumcenter, mean_center, Gnomonic, PlateCarree, Star};

fn main() {
    let dipper = vec![
        Star::from_sexagesimal("Dubhe", (11.0, 3.0, 43.7), (61.0, 45.0, 3.7)),
        Star::from_sexagesimal("Merak", (11.0, 1.0, 50.5), (56.0, 22.0, 57.0)),
        Star::from_sexagesimal("Phecda", (11.0, 53.0, 49.8), (53.0, 41.0, 41.1)),
        Star::from_sexagesimal("Megrez", (12.0, 15.0, 25.6), (57.0, 1.0, 57.4)),
        Star::from_sexagesimal("Alioth", (12.0, 54.0, 1.7), (55.0, 57.0, 35.4)),
        Star::from_sexagesimal("Mizar", (13.0, 23.0, 55.5), (54.0, 55.0, 31.3)),
        Star::from_sexagesimal("Alkaid", (13.0, 47.0, 32.4), (49.0, 18.0, 47.8)),
    ];

    let mean = mean_center(&dipper).expect("non-empty");
    println!("mean center        {mean}");

    let flat = circumcenter(&dipper, &PlateCarree).expect("plate carree disk");
    println!(
        "plate carree disk  {} radius {:.3}°",
        flat.center,
        flat.radius.degrees()
    );

    let tan = Gnomonic::about(&dipper).expect("tangent point");
    let disk = circumcenter(&dipper, &tan).expect("gnomonic disk");
    println!(
        "gnomonic disk      {} radius {:.3}°",
        disk.center,
        disk.radius.degrees()
    );
}
