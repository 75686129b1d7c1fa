//! District-level consumption breakdown.

use rand::Rng;

use super::types::DistrictConsumption;

/// Districts covered by the breakdown, in display order.
pub const DISTRICTS: [&str; 15] = [
    "Chennai",
    "Coimbatore",
    "Madurai",
    "Tiruchirappalli",
    "Salem",
    "Tirunelveli",
    "Thoothukudi",
    "Thanjavur",
    "Dindigul",
    "Kanchipuram",
    "Vellore",
    "Erode",
    "Theni",
    "Namakkal",
    "Pudukkottai",
];

/// Draws a consumption summary for every district.
///
/// Consumption is 1000-5000 MW, growth -3.0 to +7.0 % at one decimal, and the
/// renewable share 0-35 %, all uniform and rounded.
pub fn generate_district_data<R: Rng + ?Sized>(rng: &mut R) -> Vec<DistrictConsumption> {
    DISTRICTS
        .iter()
        .map(|&name| DistrictConsumption {
            name,
            consumption: (1000.0 + rng.random::<f64>() * 4000.0).round(),
            growth: ((rng.random::<f64>() * 10.0 - 3.0) * 10.0).round() / 10.0,
            renewable: (rng.random::<f64>() * 35.0).round(),
        })
        .collect()
}
