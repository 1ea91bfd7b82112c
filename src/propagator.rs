//! Orbital propagation capability and elevation sampling.
use hifitime::{Duration, Epoch, TimeSeries};

use crate::{
    cfg::ScanConfig,
    crossing::find_crossing,
    geometry::{LookAngle, ObjectPosition, ObserverGeometry},
    observer::ObserverLocation,
    pass::PassList,
    peak::find_peak_elevation,
    scanner::scan_elevation,
    Error,
};

/// [Propagator] models a single orbiting object.
/// Implementations must be deterministic: the same [Epoch]
/// always results in the same [ObjectPosition].
/// A [Propagator] is exclusively borrowed for an entire scan.
pub trait Propagator {
    /// Returns the object position at this [Epoch], or
    /// [Error::Propagation] when the model cannot provide one.
    fn position_at(&mut self, t: Epoch) -> Result<ObjectPosition, Error>;
}

impl<P: Propagator + ?Sized> Propagator for &mut P {
    fn position_at(&mut self, t: Epoch) -> Result<ObjectPosition, Error> {
        (**self).position_at(t)
    }
}

impl<P: Propagator + ?Sized> Propagator for Box<P> {
    fn position_at(&mut self, t: Epoch) -> Result<ObjectPosition, Error> {
        (**self).position_at(t)
    }
}

/// [Sampler] binds a [Propagator] and an [ObserverGeometry] to one
/// [ObserverLocation], which is all the pass prediction engine needs.
pub struct Sampler<'a, P: Propagator, G: ObserverGeometry> {
    observer: &'a ObserverLocation,
    propagator: &'a mut P,
    geometry: &'a G,
}

impl<'a, P: Propagator, G: ObserverGeometry> Sampler<'a, P, G> {
    pub fn new(observer: &'a ObserverLocation, propagator: &'a mut P, geometry: &'a G) -> Self {
        Self {
            observer,
            propagator,
            geometry,
        }
    }

    /// [LookAngle] at this [Epoch]
    pub fn look_angle(&mut self, t: Epoch) -> Result<LookAngle, Error> {
        let position = self.propagator.position_at(t)?;
        Ok(self.geometry.look_angle(&position, self.observer))
    }

    /// Elevation angle (in radians) at this [Epoch]
    pub fn elevation(&mut self, t: Epoch) -> Result<f64, Error> {
        let elevation = self.look_angle(t)?.elevation;
        #[cfg(feature = "log")]
        trace!("{} - elevation {:.6} rad", t, elevation);
        Ok(elevation)
    }

    /// Refines the horizon crossing that happened between `time1` and `time2`.
    /// See [find_crossing].
    pub fn find_crossing(
        &mut self,
        time1: Epoch,
        time2: Epoch,
        rising: bool,
    ) -> Result<Epoch, Error> {
        let mut elevation = |t: Epoch| self.elevation(t);
        find_crossing(&mut elevation, time1, time2, rising)
    }

    /// Peak elevation (in radians) reached between `aos` and `los`.
    /// See [find_peak_elevation].
    pub fn find_peak_elevation(&mut self, aos: Epoch, los: Epoch) -> Result<f64, Error> {
        let mut elevation = |t: Epoch| self.elevation(t);
        find_peak_elevation(&mut elevation, aos, los)
    }

    /// Scans the search window described by [ScanConfig].
    /// See [scan_elevation].
    pub fn scan(&mut self, cfg: &ScanConfig) -> Result<PassList, Error> {
        let mut elevation = |t: Epoch| self.elevation(t);
        scan_elevation(&mut elevation, cfg)
    }

    /// Samples [LookAngle]s from `aos` to `los` (both included) every `step`,
    /// typically to draw a pass on a sky plot.
    pub fn track(
        &mut self,
        aos: Epoch,
        los: Epoch,
        step: Duration,
    ) -> Result<Vec<(Epoch, LookAngle)>, Error> {
        if step <= Duration::ZERO {
            return Err(Error::InvalidSampleStep(step.to_seconds()));
        }
        TimeSeries::inclusive(aos, los, step)
            .map(|t| Ok((t, self.look_angle(t)?)))
            .collect()
    }
}
