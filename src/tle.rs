//! Two Line Elements propagation, using the SGP4 model.
use std::f64::consts::TAU;

use hifitime::Epoch;
use sgp4::{Constants, Elements, MinutesSinceEpoch};

use crate::{geometry::ObjectPosition, propagator::Propagator, Error};

/// J2000 epoch in Julian days
const J2000_JD: f64 = 2451545.0;

/// Seconds per day
const DAY_S: f64 = 86400.0;

/// Julian year, in days
const JULIAN_YEAR_DAYS: f64 = 365.25;

/// Greenwich Mean Sidereal Time (IAU-82 model), in radians.
/// UT1 is approximated by UTC.
pub(crate) fn gmst82(t: Epoch) -> f64 {
    let jd = t.to_jde_utc_days();
    let centuries = (jd - J2000_JD) / 36525.0;

    // whole days since J2000 are whole turns: only the day fraction remains
    let g = 67310.54841
        + (8640184.812866 + (0.093104 + (-6.2e-6) * centuries) * centuries) * centuries;

    (jd.fract() + g / DAY_S).rem_euclid(1.0) * TAU
}

/// Julian years elapsed since J2000 (UTC)
fn years_since_j2000(t: Epoch) -> f64 {
    (t.to_jde_utc_days() - J2000_JD) / JULIAN_YEAR_DAYS
}

/// [TlePropagator] propagates Two Line Elements with SGP4.
/// Positions are rotated from TEME to Earth fixed by the mean sidereal time,
/// polar motion is neglected.
pub struct TlePropagator {
    elements: Elements,
    constants: Constants,
}

impl TlePropagator {
    /// Builds a new [TlePropagator] from both TLE lines,
    /// and the optional title line.
    pub fn from_tle(name: Option<&str>, line1: &str, line2: &str) -> Result<Self, Error> {
        let elements = Elements::from_tle(
            name.map(|s| s.trim().to_string()),
            line1.trim().as_bytes(),
            line2.trim().as_bytes(),
        )
        .map_err(|e| Error::Tle(format!("{:?}", e)))?;
        Self::from_elements(elements)
    }
    /// Builds a new [TlePropagator] from parsed [Elements]
    pub fn from_elements(elements: Elements) -> Result<Self, Error> {
        let constants =
            Constants::from_elements(&elements).map_err(|e| Error::Tle(format!("{:?}", e)))?;
        Ok(Self {
            elements,
            constants,
        })
    }
    /// Object name, as described in the title line
    pub fn name(&self) -> Option<&str> {
        self.elements.object_name.as_deref()
    }
    /// NORAD catalog number
    pub fn norad_id(&self) -> u64 {
        self.elements.norad_id
    }
    /// Mean motion, in revolutions per day
    pub fn revs_per_day(&self) -> f64 {
        self.elements.mean_motion
    }
    /// Elapsed time since TLE epoch, in minutes
    fn minutes_since_epoch(&self, t: Epoch) -> f64 {
        (years_since_j2000(t) - self.elements.epoch()) * JULIAN_YEAR_DAYS * 1440.0
    }
}

impl Propagator for TlePropagator {
    fn position_at(&mut self, t: Epoch) -> Result<ObjectPosition, Error> {
        let prediction = self
            .constants
            .propagate(MinutesSinceEpoch(self.minutes_since_epoch(t)))
            .map_err(|e| Error::Propagation {
                epoch: t,
                reason: format!("{:?}", e),
            })?;

        let [x, y, z] = prediction.position;
        let (sin_g, cos_g) = gmst82(t).sin_cos();

        // TEME → pseudo Earth fixed
        let ecef_km = (cos_g * x + sin_g * y, -sin_g * x + cos_g * y, z);

        Ok(ObjectPosition::from_ecef_km(t, ecef_km))
    }
}

impl std::fmt::Debug for TlePropagator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("TlePropagator")
            .field("name", &self.name())
            .field("norad_id", &self.norad_id())
            .finish()
    }
}
