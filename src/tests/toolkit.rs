//! Deterministic propagators and elevation profiles
use crate::prelude::*;
use std::f64::consts::PI;
use std::str::FromStr;

/// Reference epoch used throughout the tests
pub fn t0() -> Epoch {
    Epoch::from_str("2020-06-01T00:00:00 UTC").unwrap()
}

/// Observer standing at (0°, 0°, 0m): local zenith is ECEF +X
/// and local East is ECEF +Y, which makes placing objects easy.
pub fn equatorial_observer() -> ObserverLocation {
    ObserverLocation::new(0.0, 0.0, 0.0)
}

/// Elevation profile: a single rise then fall of the object,
/// following a half sine wave. Object is 10° below the horizon otherwise.
#[derive(Debug, Clone, Copy)]
pub struct Bump {
    pub start: Epoch,
    pub duration_s: f64,
    pub peak_deg: f64,
}

impl Bump {
    pub fn new(start: Epoch, duration_s: f64, peak_deg: f64) -> Self {
        Self {
            start,
            duration_s,
            peak_deg,
        }
    }
    /// End of the bump
    pub fn end(&self) -> Epoch {
        self.start + Duration::from_seconds(self.duration_s)
    }
    /// Elevation at `t`, in degrees
    pub fn elevation_deg(&self, t: Epoch) -> f64 {
        let dt = (t - self.start).to_seconds();
        if dt >= 0.0 && dt <= self.duration_s {
            self.peak_deg * (PI * dt / self.duration_s).sin()
        } else {
            -10.0
        }
    }
    /// Elevation at `t`, in radians
    pub fn elevation_rad(&self, t: Epoch) -> f64 {
        self.elevation_deg(t).to_radians()
    }
}

/// Object position seen from [equatorial_observer] at this elevation,
/// 1000 km away, due East.
pub fn position_at_elevation(t: Epoch, elevation_deg: f64) -> ObjectPosition {
    let (x0, y0, z0) = equatorial_observer().to_ecef_wgs84();
    let (sin_e, cos_e) = elevation_deg.to_radians().sin_cos();
    let distance_m = 1.0E6;
    let (x, y, z) = (x0 + distance_m * sin_e, y0 + distance_m * cos_e, z0);
    ObjectPosition::from_ecef_km(t, (x * 1.0E-3, y * 1.0E-3, z * 1.0E-3))
}

/// [Propagator] moving the object along a series of [Bump]s,
/// as seen from [equatorial_observer]. Records every epoch it was asked for.
#[derive(Debug, Clone, Default)]
pub struct BumpPropagator {
    pub bumps: Vec<Bump>,
    pub requests: Vec<Epoch>,
}

impl BumpPropagator {
    pub fn new(bumps: &[Bump]) -> Self {
        Self {
            bumps: bumps.to_vec(),
            requests: Vec::new(),
        }
    }
    fn elevation_deg(&self, t: Epoch) -> f64 {
        self.bumps
            .iter()
            .map(|bump| bump.elevation_deg(t))
            .fold(-10.0, f64::max)
    }
}

impl Propagator for BumpPropagator {
    fn position_at(&mut self, t: Epoch) -> Result<ObjectPosition, Error> {
        self.requests.push(t);
        Ok(position_at_elevation(t, self.elevation_deg(t)))
    }
}

/// [Propagator] keeping the object at constant elevation
#[derive(Debug, Clone, Copy)]
pub struct FixedElevation(pub f64);

impl Propagator for FixedElevation {
    fn position_at(&mut self, t: Epoch) -> Result<ObjectPosition, Error> {
        Ok(position_at_elevation(t, self.0))
    }
}

/// [Propagator] keeping the object at a fixed ECEF position
#[derive(Debug, Clone, Copy)]
pub struct FixedPosition(pub (f64, f64, f64));

impl Propagator for FixedPosition {
    fn position_at(&mut self, t: Epoch) -> Result<ObjectPosition, Error> {
        Ok(ObjectPosition::from_ecef_km(t, self.0))
    }
}

/// [Propagator] that can no longer propagate past `decay`
#[derive(Debug, Clone)]
pub struct DecayingPropagator {
    pub inner: BumpPropagator,
    pub decay: Epoch,
}

impl Propagator for DecayingPropagator {
    fn position_at(&mut self, t: Epoch) -> Result<ObjectPosition, Error> {
        if t >= self.decay {
            Err(Error::Propagation {
                epoch: t,
                reason: "orbit decayed".to_string(),
            })
        } else {
            self.inner.position_at(t)
        }
    }
}

/// Asserts two values are within `tolerance`
pub fn assert_close(value: f64, expected: f64, tolerance: f64, descriptor: &str) {
    assert!(
        (value - expected).abs() <= tolerance,
        "{}: got {}, expecting {} (±{})",
        descriptor,
        value,
        expected,
        tolerance
    );
}

/// Asserts two epochs are within `tolerance_s` seconds
pub fn assert_epoch_close(value: Epoch, expected: Epoch, tolerance_s: f64, descriptor: &str) {
    let dt = (value - expected).to_seconds().abs();
    assert!(
        dt <= tolerance_s,
        "{}: got {}, expecting {} (±{}s)",
        descriptor,
        value,
        expected,
        tolerance_s
    );
}

/// Elevation crossing zero at `crossing`, with `slope` rad/s
pub fn linear_elevation(crossing: Epoch, slope: f64) -> impl Fn(Epoch) -> Result<f64, Error> {
    move |t: Epoch| Ok((t - crossing).to_seconds() * slope)
}
