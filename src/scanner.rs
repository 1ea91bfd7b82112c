//! Horizon scanner: pass search over a time window.
use hifitime::Epoch;

use crate::{
    cfg::ScanConfig,
    constants::pass_skip,
    crossing::find_crossing,
    geometry::ObserverGeometry,
    observer::ObserverLocation,
    pass::{PassList, PassRecord},
    peak::find_peak_elevation,
    propagator::{Propagator, Sampler},
    Error,
};

/// Scanner state
#[derive(Debug, Clone, Copy, PartialEq)]
enum ScanState {
    /// Object is below the horizon
    Idle,
    /// Object is above the horizon, since `aos`
    Tracking { aos: Epoch },
}

impl ScanState {
    /// Object just rose above the horizon
    fn is_rising_edge(&self, elevation: f64) -> bool {
        matches!(self, Self::Idle) && elevation > 0.0
    }
    /// Object just went below the horizon: returns the pending AOS
    fn falling_edge(&self, elevation: f64) -> Option<Epoch> {
        match self {
            Self::Tracking { aos } if elevation < 0.0 => Some(*aos),
            _ => None,
        }
    }
}

/// Searches all passes of the object modeled by [Propagator], as seen by
/// this [ObserverLocation], within the [ScanConfig] window.
/// Any propagation failure aborts the search.
pub fn scan<P: Propagator, G: ObserverGeometry>(
    observer: &ObserverLocation,
    propagator: &mut P,
    geometry: &G,
    cfg: &ScanConfig,
) -> Result<PassList, Error> {
    observer.validate()?;
    Sampler::new(observer, propagator, geometry).scan(cfg)
}

/// Closes a pass: refines its peak elevation and
/// stores it if it reached the minimal elevation.
/// Refined AOS and LOS never exceed the search window `end`.
fn close_pass<F>(
    elevation: &mut F,
    aos: Epoch,
    los: Epoch,
    end: Epoch,
    min_elevation_rad: f64,
    passes: &mut PassList,
) -> Result<(), Error>
where
    F: FnMut(Epoch) -> Result<f64, Error>,
{
    // whole second rounding may step past a fractional window end
    let aos = if aos > end { end } else { aos };
    let los = if los > end { end } else { los };

    // pass shorter than refinement resolution
    let los = if los < aos { aos } else { los };

    let peak_elevation = find_peak_elevation(elevation, aos, los)?;

    if peak_elevation >= min_elevation_rad {
        #[cfg(feature = "log")]
        debug!("{} → {} - new pass", aos, los);
        passes.push(PassRecord {
            aos,
            los,
            peak_elevation,
        });
    } else {
        #[cfg(feature = "log")]
        debug!("{} → {} - pass too low: dropped", aos, los);
    }
    Ok(())
}

/// Searches all passes within the [ScanConfig] window, for any
/// `elevation` function returning the elevation angle (radians) at given [Epoch].
///
/// The window is sampled every [ScanConfig::sample_step], and every
/// 30 minutes right after a pass ended. Passes that fit within one of these
/// intervals are not detected. The search window end is never sampled:
/// a pass still in progress at that point ends there.
pub fn scan_elevation<F>(elevation: &mut F, cfg: &ScanConfig) -> Result<PassList, Error>
where
    F: FnMut(Epoch) -> Result<f64, Error>,
{
    cfg.validate()?;

    let (start, end) = (cfg.search_start, cfg.search_end);
    let (step, skip) = (cfg.sample_step(), pass_skip());
    let min_elevation_rad = cfg.min_elevation_rad();

    let mut passes = PassList::with_capacity(16);
    let mut state = ScanState::Idle;

    let mut previous = start;
    let mut current = start;

    while current < end {
        let e = elevation(current)?;
        let mut end_of_pass = false;

        if state.is_rising_edge(e) {
            let aos = if current == start {
                // already up
                start
            } else {
                find_crossing(elevation, previous, current, true)?
            };
            state = ScanState::Tracking { aos };
        } else if let Some(aos) = state.falling_edge(e) {
            let los = find_crossing(elevation, previous, current, false)?;
            close_pass(elevation, aos, los, end, min_elevation_rad, &mut passes)?;
            state = ScanState::Idle;
            end_of_pass = true;
        }

        previous = current;
        current = current + if end_of_pass { skip } else { step };

        if current > end {
            current = end;
        }
    }

    if let ScanState::Tracking { aos } = state {
        // still up at the end of the window
        close_pass(elevation, aos, end, end, min_elevation_rad, &mut passes)?;
    }

    #[cfg(feature = "log")]
    debug!("{} → {} - {} pass(es)", start, end, passes.len());

    Ok(passes)
}
