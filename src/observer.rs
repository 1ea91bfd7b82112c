//! Ground observer location
use dms_coordinates::DMS;
use map_3d::{deg2rad, geodetic2ecef, Ellipsoid};

use crate::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// [ObserverLocation] describes a ground observer, in geodetic
/// coordinates referenced to the WGS84 ellipsoid.
#[derive(Default, Copy, Debug, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObserverLocation {
    /// Latitude, in decimal degrees
    pub latitude_ddeg: f64,
    /// Longitude, in decimal degrees
    pub longitude_ddeg: f64,
    /// Altitude above the ellipsoid, in meters
    #[cfg_attr(feature = "serde", serde(default))]
    pub altitude_m: f64,
}

impl From<(f64, f64, f64)> for ObserverLocation {
    fn from(geo: (f64, f64, f64)) -> Self {
        Self::new(geo.0, geo.1, geo.2)
    }
}

impl From<ObserverLocation> for (f64, f64, f64) {
    fn from(val: ObserverLocation) -> Self {
        (val.latitude_ddeg, val.longitude_ddeg, val.altitude_m)
    }
}

impl ObserverLocation {
    /// Builds a new [ObserverLocation] from latitude and longitude
    /// in decimal degrees, and altitude in meters.
    pub fn new(latitude_ddeg: f64, longitude_ddeg: f64, altitude_m: f64) -> Self {
        Self {
            latitude_ddeg,
            longitude_ddeg,
            altitude_m,
        }
    }
    /// Latitude in radians
    pub fn latitude_rad(&self) -> f64 {
        deg2rad(self.latitude_ddeg)
    }
    /// Longitude in radians
    pub fn longitude_rad(&self) -> f64 {
        deg2rad(self.longitude_ddeg)
    }
    /// Converts Self to ECEF WGS84 coordinates, in meters
    pub fn to_ecef_wgs84(&self) -> (f64, f64, f64) {
        geodetic2ecef(
            self.latitude_rad(),
            self.longitude_rad(),
            self.altitude_m,
            Ellipsoid::WGS84,
        )
    }
    /// Verifies these coordinates are usable.
    pub fn validate(&self) -> Result<(), Error> {
        let (lat, lon) = (self.latitude_ddeg, self.longitude_ddeg);
        if !lat.is_finite() || !lon.is_finite() || !self.altitude_m.is_finite() {
            return Err(Error::InvalidObserver {
                latitude: lat,
                longitude: lon,
            });
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(Error::InvalidObserver {
                latitude: lat,
                longitude: lon,
            });
        }
        Ok(())
    }
}

impl std::fmt::Display for ObserverLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} {} {:.1}m",
            DMS::from_ddeg_latitude(self.latitude_ddeg),
            DMS::from_ddeg_longitude(self.longitude_ddeg),
            self.altitude_m
        )
    }
}
