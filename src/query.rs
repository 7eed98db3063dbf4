//! Raw queries and the space-time points they describe
use crate::prelude::{Epoch, Error, ParsingError, Point};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Field names, in protocol order.
pub(crate) const FIELDS: [&str; 9] = [
    "year",
    "month",
    "day",
    "hour",
    "minute",
    "latitude",
    "longitude",
    "altitude",
    "terminate",
];

/// [Query] as read from the input stream, prior to any calendar validation.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Query {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub hour: i32,
    pub minute: i32,

    /// Latitude in decimal degrees
    pub latitude_ddeg: f64,

    /// Longitude in decimal degrees
    pub longitude_ddeg: f64,

    /// Altitude above mean sea level, in kilometers
    pub altitude_km: f64,
}

fn parse_int(field: &'static str, content: &str) -> Result<i32, ParsingError> {
    content
        .trim()
        .parse::<i32>()
        .map_err(|_| ParsingError::Integer {
            field,
            content: content.to_string(),
        })
}

fn parse_float(field: &'static str, content: &str) -> Result<f64, ParsingError> {
    content
        .trim()
        .parse::<f64>()
        .map_err(|_| ParsingError::Float {
            field,
            content: content.to_string(),
        })
}

impl Query {
    /// Parses a [Query] from its 8 textual fields, in protocol order:
    /// year, month, day, hour, minute, latitude, longitude, altitude.
    pub fn from_fields(fields: &[&str; 8]) -> Result<Self, ParsingError> {
        Ok(Self {
            year: parse_int(FIELDS[0], fields[0])?,
            month: parse_int(FIELDS[1], fields[1])?,
            day: parse_int(FIELDS[2], fields[2])?,
            hour: parse_int(FIELDS[3], fields[3])?,
            minute: parse_int(FIELDS[4], fields[4])?,
            latitude_ddeg: parse_float(FIELDS[5], fields[5])?,
            longitude_ddeg: parse_float(FIELDS[6], fields[6])?,
            altitude_km: parse_float(FIELDS[7], fields[7])?,
        })
    }

    /// Builds the UTC [Epoch] described by this [Query].
    /// Fails when the date time fields do not describe a valid Gregorian date.
    pub fn epoch(&self) -> Result<Epoch, Error> {
        let invalid = || {
            Error::InvalidDatetime(format!(
                "{:04}-{:02}-{:02}T{:02}:{:02}",
                self.year, self.month, self.day, self.hour, self.minute
            ))
        };

        let month = u8::try_from(self.month).map_err(|_| invalid())?;
        let day = u8::try_from(self.day).map_err(|_| invalid())?;
        let hour = u8::try_from(self.hour).map_err(|_| invalid())?;
        let minute = u8::try_from(self.minute).map_err(|_| invalid())?;

        Epoch::maybe_from_gregorian_utc(self.year, month, day, hour, minute, 0, 0)
            .map_err(|_| invalid())
    }

    /// Converts this [Query] to a [SpaceTimePoint]. Coordinates are not range checked.
    pub fn space_time_point(&self) -> Result<SpaceTimePoint, Error> {
        Ok(SpaceTimePoint {
            epoch: self.epoch()?,
            location: Point::new(self.longitude_ddeg, self.latitude_ddeg),
            altitude_km: self.altitude_km,
        })
    }
}

/// [SpaceTimePoint] at which a model is evaluated.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpaceTimePoint {
    /// Instant, expressed in [hifitime::TimeScale::UTC]
    pub epoch: Epoch,

    /// Location, x being the longitude and y the latitude (both in decimal degrees)
    pub location: Point<f64>,

    /// Altitude above mean sea level, in kilometers
    pub altitude_km: f64,
}

impl SpaceTimePoint {
    /// Returns latitude in decimal degrees
    pub fn latitude_ddeg(&self) -> f64 {
        self.location.y()
    }

    /// Returns longitude in decimal degrees
    pub fn longitude_ddeg(&self) -> f64 {
        self.location.x()
    }

    /// Returns decimal hours elapsed since UTC midnight
    pub fn utc_hours(&self) -> f64 {
        let (_, _, _, hh, mm, ss, ns) = self.epoch.to_gregorian_utc();
        hh as f64 + mm as f64 / 60.0 + (ss as f64 + ns as f64 * 1.0E-9) / 3600.0
    }
}
