use hifitime::{Epoch, HifitimeError};
use thiserror::Error;

/// Errors that may rise when predicting passes
#[derive(Error, Debug)]
pub enum Error {
    /// The propagator could not provide a position at this [Epoch].
    /// The scan is aborted, no partial result is returned.
    #[error("propagation failure at {epoch}: {reason}")]
    Propagation { epoch: Epoch, reason: String },
    /// Search window is empty or reversed
    #[error("degenerate search window: {start} → {end}")]
    DegenerateWindow { start: Epoch, end: Epoch },
    /// Sampling step must be a positive number of seconds
    #[error("invalid sample step: {0} s")]
    InvalidSampleStep(f64),
    /// Minimal elevation must be expressed in degrees, within [-90°, 90°]
    #[error("invalid minimum elevation: {0}°")]
    InvalidMinimumElevation(f64),
    /// Observer coordinates are not valid geodetic coordinates
    #[error("invalid observer coordinates: ({latitude}°, {longitude}°)")]
    InvalidObserver { latitude: f64, longitude: f64 },
    /// Two Line Elements could not be parsed or initialized
    #[cfg(feature = "tle")]
    #[error("tle error: {0}")]
    Tle(String),
    /// System clock could not be read
    #[error("system time error: {0}")]
    SystemTime(#[from] HifitimeError),
}
