use hifitime::{Duration, Epoch};
use map_3d::deg2rad;

use crate::{
    constants::{DEFAULT_MIN_ELEVATION_DEG, DEFAULT_SAMPLE_STEP_S, DEFAULT_SEARCH_WINDOW_DAYS},
    observer::ObserverLocation,
    Error,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

fn default_sample_step() -> f64 {
    DEFAULT_SAMPLE_STEP_S
}

fn default_min_elevation() -> f64 {
    DEFAULT_MIN_ELEVATION_DEG
}

fn default_search_window() -> f64 {
    DEFAULT_SEARCH_WINDOW_DAYS
}

fn validate_sampling(sample_step_s: f64, min_elevation_deg: f64) -> Result<(), Error> {
    if !sample_step_s.is_finite() || sample_step_s <= 0.0 {
        return Err(Error::InvalidSampleStep(sample_step_s));
    }
    // below time resolution: the scan would never advance
    if Duration::from_seconds(sample_step_s) <= Duration::ZERO {
        return Err(Error::InvalidSampleStep(sample_step_s));
    }
    if !min_elevation_deg.is_finite() || !(-90.0..=90.0).contains(&min_elevation_deg) {
        return Err(Error::InvalidMinimumElevation(min_elevation_deg));
    }
    Ok(())
}

/// [ScanConfig] describes one pass search.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScanConfig {
    /// Start of the search window
    pub search_start: Epoch,
    /// End of the search window
    pub search_end: Epoch,
    /// Coarse sampling step, in seconds.
    /// Passes shorter than this step may not be detected.
    #[cfg_attr(feature = "serde", serde(default = "default_sample_step"))]
    pub sample_step_s: f64,
    /// Passes that do not reach this elevation (in degrees) are dropped.
    #[cfg_attr(feature = "serde", serde(default = "default_min_elevation"))]
    pub min_elevation_deg: f64,
}

impl ScanConfig {
    /// Builds a new [ScanConfig] over [search_start, search_end],
    /// with default sampling step and minimal elevation.
    pub fn new(search_start: Epoch, search_end: Epoch) -> Self {
        Self {
            search_start,
            search_end,
            sample_step_s: default_sample_step(),
            min_elevation_deg: default_min_elevation(),
        }
    }
    /// Builds a new [ScanConfig] starting at `search_start` and lasting `length`.
    pub fn from_duration(search_start: Epoch, length: Duration) -> Self {
        Self::new(search_start, search_start + length)
    }
    /// Copies and returns [ScanConfig] with desired sampling step (in seconds)
    pub fn with_sample_step(&self, sample_step_s: f64) -> Self {
        let mut s = *self;
        s.sample_step_s = sample_step_s;
        s
    }
    /// Copies and returns [ScanConfig] with desired minimal elevation (in degrees)
    pub fn with_min_elevation(&self, min_elevation_deg: f64) -> Self {
        let mut s = *self;
        s.min_elevation_deg = min_elevation_deg;
        s
    }
    /// Sampling step as [Duration]
    pub fn sample_step(&self) -> Duration {
        Duration::from_seconds(self.sample_step_s)
    }
    /// Minimal elevation, in radians
    pub fn min_elevation_rad(&self) -> f64 {
        deg2rad(self.min_elevation_deg)
    }
    /// Search window length
    pub fn window(&self) -> Duration {
        self.search_end - self.search_start
    }
    /// Verifies this search can be performed.
    pub fn validate(&self) -> Result<(), Error> {
        if self.search_end <= self.search_start {
            return Err(Error::DegenerateWindow {
                start: self.search_start,
                end: self.search_end,
            });
        }
        validate_sampling(self.sample_step_s, self.min_elevation_deg)
    }
}

/// [PredictorConfig] describes a [crate::predictor::PassPredictor] setup:
/// one observer and how passes are searched for.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PredictorConfig {
    /// Ground observer
    pub observer: ObserverLocation,
    /// Coarse sampling step, in seconds
    #[cfg_attr(feature = "serde", serde(default = "default_sample_step"))]
    pub sample_step_s: f64,
    /// Minimal peak elevation, in degrees
    #[cfg_attr(feature = "serde", serde(default = "default_min_elevation"))]
    pub min_elevation_deg: f64,
    /// How far ahead we search, in days
    #[cfg_attr(feature = "serde", serde(default = "default_search_window"))]
    pub search_window_days: f64,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            observer: ObserverLocation::default(),
            sample_step_s: default_sample_step(),
            min_elevation_deg: default_min_elevation(),
            search_window_days: default_search_window(),
        }
    }
}

impl PredictorConfig {
    /// Builds a default [PredictorConfig] for this [ObserverLocation]
    pub fn new(observer: ObserverLocation) -> Self {
        Self {
            observer,
            ..Default::default()
        }
    }
    /// Copies and returns [PredictorConfig] with desired sampling step (in seconds)
    pub fn with_sample_step(&self, sample_step_s: f64) -> Self {
        let mut s = *self;
        s.sample_step_s = sample_step_s;
        s
    }
    /// Copies and returns [PredictorConfig] with desired minimal elevation (in degrees)
    pub fn with_min_elevation(&self, min_elevation_deg: f64) -> Self {
        let mut s = *self;
        s.min_elevation_deg = min_elevation_deg;
        s
    }
    /// Copies and returns [PredictorConfig] with desired search window (in days)
    pub fn with_search_window(&self, days: f64) -> Self {
        let mut s = *self;
        s.search_window_days = days;
        s
    }
    /// [ScanConfig] for a search starting at `t`
    pub fn scan_config(&self, t: Epoch) -> ScanConfig {
        ScanConfig::from_duration(t, Duration::from_days(self.search_window_days))
            .with_sample_step(self.sample_step_s)
            .with_min_elevation(self.min_elevation_deg)
    }
    /// Verifies this setup is usable.
    pub fn validate(&self) -> Result<(), Error> {
        self.observer.validate()?;
        validate_sampling(self.sample_step_s, self.min_elevation_deg)
    }
}
