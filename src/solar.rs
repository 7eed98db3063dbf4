//! Solar geometry helpers
use crate::prelude::SpaceTimePoint;

/// Earth axial tilt, in degrees
const OBLIQUITY_DDEG: f64 = 23.44;

/// Returns the solar declination (in radians) for given day of year,
/// using the cosine approximation.
pub(crate) fn declination_rad(day_of_year: f64) -> f64 {
    let angle = (360.0 / 365.0 * (day_of_year + 10.0)).to_radians();
    -OBLIQUITY_DDEG.to_radians() * angle.cos()
}

/// Returns the local solar hour angle (in radians) for given UTC hours and longitude.
/// Zero at local solar noon.
pub(crate) fn hour_angle_rad(utc_hours: f64, longitude_ddeg: f64) -> f64 {
    let local_hours = utc_hours + longitude_ddeg / 15.0;
    (15.0 * (local_hours - 12.0)).to_radians()
}

/// Returns cos(χ), χ being the solar zenith angle at this [SpaceTimePoint].
/// Negative values mean the sun is below the horizon.
pub(crate) fn cos_zenith_angle(point: &SpaceTimePoint) -> f64 {
    let lat = point.latitude_ddeg().to_radians();
    let decl = declination_rad(point.epoch.day_of_year());
    let h = hour_angle_rad(point.utc_hours(), point.longitude_ddeg());
    lat.sin() * decl.sin() + lat.cos() * decl.cos() * h.cos()
}
