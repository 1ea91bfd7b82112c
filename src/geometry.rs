//! Topocentric geometry: where does the observer see the object.
use hifitime::Epoch;
use map_3d::{ecef2aer, rad2deg, Ellipsoid};

use crate::observer::ObserverLocation;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Object position, expressed in km in the Earth centered
/// Earth fixed frame (WGS84).
#[derive(Copy, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObjectPosition {
    /// [Epoch] of this position
    pub epoch: Epoch,
    /// ECEF coordinates, in km
    pub ecef_km: (f64, f64, f64),
}

impl ObjectPosition {
    /// Builds new [ObjectPosition] from ECEF coordinates in km.
    pub fn from_ecef_km(epoch: Epoch, ecef_km: (f64, f64, f64)) -> Self {
        Self { epoch, ecef_km }
    }
    /// Distance to the Earth center, in km
    pub fn radius_km(&self) -> f64 {
        let (x, y, z) = self.ecef_km;
        (x.powi(2) + y.powi(2) + z.powi(2)).sqrt()
    }
}

/// Angles under which an object is seen by the observer.
#[derive(Default, Copy, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LookAngle {
    /// Azimuth angle, in radians, clockwise from North
    pub azimuth: f64,
    /// Elevation angle above local horizontal plane, in radians.
    /// Negative when the object is below the horizon.
    pub elevation: f64,
    /// Slant range, in km
    pub range_km: f64,
}

impl LookAngle {
    /// Azimuth angle in degrees
    pub fn azimuth_deg(&self) -> f64 {
        rad2deg(self.azimuth)
    }
    /// Elevation angle in degrees
    pub fn elevation_deg(&self) -> f64 {
        rad2deg(self.elevation)
    }
    /// True if the object is strictly above the horizon
    pub fn is_above_horizon(&self) -> bool {
        self.elevation > 0.0
    }
}

/// [ObserverGeometry] turns an [ObjectPosition] into [LookAngle]
/// for a given [ObserverLocation].
pub trait ObserverGeometry {
    fn look_angle(&self, position: &ObjectPosition, observer: &ObserverLocation) -> LookAngle;
}

/// [Topocentric] is the standard [ObserverGeometry]: South East Zenith
/// projection over the WGS84 ellipsoid. Refraction is not accounted for.
#[derive(Default, Copy, Debug, Clone, PartialEq)]
pub struct Topocentric;

impl ObserverGeometry for Topocentric {
    fn look_angle(&self, position: &ObjectPosition, observer: &ObserverLocation) -> LookAngle {
        let (x_km, y_km, z_km) = position.ecef_km;
        let (azimuth, elevation, range_m) = ecef2aer(
            x_km * 1.0E3,
            y_km * 1.0E3,
            z_km * 1.0E3,
            observer.latitude_rad(),
            observer.longitude_rad(),
            observer.altitude_m,
            Ellipsoid::WGS84,
        );
        LookAngle {
            azimuth,
            elevation,
            range_km: range_m * 1.0E-3,
        }
    }
}

impl std::fmt::Display for LookAngle {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "az={:.2}° el={:.2}° range={:.3}km",
            self.azimuth_deg(),
            self.elevation_deg(),
            self.range_km
        )
    }
}
