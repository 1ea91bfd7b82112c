//! Pass predictor: repeated searches for one observer.
use hifitime::Epoch;

use crate::{
    cfg::PredictorConfig,
    geometry::{ObserverGeometry, Topocentric},
    observer::ObserverLocation,
    pass::PassList,
    propagator::Propagator,
    scanner::scan,
    Error,
};

/// [PassPredictor] searches the upcoming passes over one observer.
/// It holds no state across searches other than its configuration,
/// so it can be invoked periodically, for any number of objects.
#[derive(Debug, Clone, Default)]
pub struct PassPredictor<G: ObserverGeometry = Topocentric> {
    cfg: PredictorConfig,
    geometry: G,
}

impl PassPredictor<Topocentric> {
    /// Builds a new [PassPredictor] using [Topocentric] geometry
    pub fn new(cfg: PredictorConfig) -> Self {
        Self {
            cfg,
            geometry: Topocentric,
        }
    }
}

impl<G: ObserverGeometry> PassPredictor<G> {
    /// Builds a new [PassPredictor] with custom [ObserverGeometry]
    pub fn with_geometry(cfg: PredictorConfig, geometry: G) -> Self {
        Self { cfg, geometry }
    }
    /// Returns current [PredictorConfig]
    pub fn config(&self) -> &PredictorConfig {
        &self.cfg
    }
    /// Returns current [ObserverLocation]
    pub fn observer(&self) -> &ObserverLocation {
        &self.cfg.observer
    }
    /// Updates the observer location
    pub fn set_observer(&mut self, observer: ObserverLocation) {
        self.cfg.observer = observer;
    }
    /// Updates the minimal elevation (in degrees)
    pub fn set_min_elevation(&mut self, min_elevation_deg: f64) {
        self.cfg.min_elevation_deg = min_elevation_deg;
    }
    /// Searches all passes from `now`, over the configured search window.
    pub fn predict<P: Propagator>(&self, propagator: &mut P, now: Epoch) -> Result<PassList, Error> {
        self.cfg.validate()?;
        let scan_cfg = self.cfg.scan_config(now);
        scan(&self.cfg.observer, propagator, &self.geometry, &scan_cfg)
    }
    /// Searches all passes from the system time.
    pub fn predict_now<P: Propagator>(&self, propagator: &mut P) -> Result<PassList, Error> {
        let now = Epoch::now()?;
        self.predict(propagator, now)
    }
}
