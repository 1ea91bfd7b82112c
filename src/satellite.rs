//! Named orbiting object
use hifitime::Epoch;
use map_3d::{ecef2geodetic, rad2deg, Ellipsoid};

use crate::{geometry::ObjectPosition, propagator::Propagator, Error};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Point of the Earth surface right below the object
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SubSatellitePoint {
    pub epoch: Epoch,
    /// Latitude, in decimal degrees
    pub latitude_ddeg: f64,
    /// Longitude, in decimal degrees
    pub longitude_ddeg: f64,
    /// Altitude above the ellipsoid, in km
    pub altitude_km: f64,
}

impl From<ObjectPosition> for SubSatellitePoint {
    fn from(position: ObjectPosition) -> Self {
        let (x_km, y_km, z_km) = position.ecef_km;
        let (lat, lon, alt_m) = ecef2geodetic(
            x_km * 1.0E3,
            y_km * 1.0E3,
            z_km * 1.0E3,
            Ellipsoid::WGS84,
        );
        Self {
            epoch: position.epoch,
            latitude_ddeg: rad2deg(lat),
            longitude_ddeg: rad2deg(lon),
            altitude_km: alt_m * 1.0E-3,
        }
    }
}

/// [Satellite] is a named object, modeled by a [Propagator].
/// It is itself a [Propagator], so it can be directly scanned.
#[derive(Debug, Clone)]
pub struct Satellite<P: Propagator> {
    name: String,
    norad_id: Option<u64>,
    propagator: P,
    latest: Option<SubSatellitePoint>,
}

impl<P: Propagator> Satellite<P> {
    /// Builds a new [Satellite]
    pub fn new(name: &str, propagator: P) -> Self {
        Self {
            name: name.to_string(),
            norad_id: None,
            propagator,
            latest: None,
        }
    }
    /// Copies and returns [Satellite] with NORAD catalog number
    pub fn with_norad_id(mut self, norad_id: u64) -> Self {
        self.norad_id = Some(norad_id);
        self
    }
    /// Satellite name
    pub fn name(&self) -> &str {
        &self.name
    }
    /// NORAD catalog number, if known
    pub fn norad_id(&self) -> Option<u64> {
        self.norad_id
    }
    /// Latest [SubSatellitePoint], see [Self::update]
    pub fn latest_position(&self) -> Option<&SubSatellitePoint> {
        self.latest.as_ref()
    }
    /// Propagates to `t` and stores the resulting [SubSatellitePoint]
    pub fn update(&mut self, t: Epoch) -> Result<&SubSatellitePoint, Error> {
        let position = self.propagator.position_at(t)?;
        Ok(self.latest.insert(SubSatellitePoint::from(position)))
    }
}

impl<P: Propagator> Propagator for Satellite<P> {
    fn position_at(&mut self, t: Epoch) -> Result<ObjectPosition, Error> {
        self.propagator.position_at(t)
    }
}

impl<P: Propagator> std::fmt::Display for Satellite<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.norad_id {
            Some(id) => write!(f, "{} ({})", self.name, id),
            None => write!(f, "{}", self.name),
        }
    }
}
