#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

/*
 * Pass prediction for ground observers.
 * This crate is shipped under the MPL-2.0 License.
 *
 * The engine scans a search window for horizon crossings (AOS / LOS),
 * refines them to the second and locates each pass's peak elevation.
 * Orbital dynamics and observer geometry are external collaborators,
 * see the propagator and geometry modules.
 */

#[cfg(feature = "log")]
#[macro_use]
extern crate log;

pub mod cfg;
pub mod crossing;
pub mod geometry;
pub mod observer;
pub mod pass;
pub mod peak;
pub mod predictor;
pub mod propagator;
pub mod satellite;
pub mod scanner;

mod constants;
mod error;

#[cfg(feature = "tle")]
#[cfg_attr(docsrs, doc(cfg(feature = "tle")))]
pub mod tle;

#[cfg(test)]
mod tests;

pub use error::Error;

/// Package to include all basic structures
pub mod prelude {
    // export
    pub use crate::{
        cfg::{PredictorConfig, ScanConfig},
        error::Error,
        geometry::{LookAngle, ObjectPosition, ObserverGeometry, Topocentric},
        observer::ObserverLocation,
        pass::{PassList, PassRecord},
        predictor::PassPredictor,
        propagator::{Propagator, Sampler},
        satellite::{Satellite, SubSatellitePoint},
        scanner::{scan, scan_elevation},
    };

    #[cfg(feature = "tle")]
    #[cfg_attr(docsrs, doc(cfg(feature = "tle")))]
    pub use crate::tle::TlePropagator;

    // pub re-export
    pub use hifitime::{Duration, Epoch, TimeScale, TimeSeries};
}
