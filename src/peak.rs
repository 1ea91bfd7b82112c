//! Peak elevation refinement
use hifitime::{Duration, Epoch};

use crate::{
    constants::{MAX_PEAK_ROUNDS, PEAK_SUBDIVISIONS},
    Error,
};

/// Returns the peak elevation angle (radians) reached between `aos` and `los`.
///
/// Elevation must be unimodal within [aos, los]: it rises then falls
/// exactly once, which is what a single pass looks like. This is not verified.
///
/// The bracket is walked forward in 9 steps until the elevation stops
/// increasing, then narrowed down to the two steps surrounding the peak.
/// This repeats until the walk was performed with a step of one second or less.
pub fn find_peak_elevation<F>(elevation: &mut F, aos: Epoch, los: Epoch) -> Result<f64, Error>
where
    F: FnMut(Epoch) -> Result<f64, Error>,
{
    if los <= aos {
        return elevation(aos);
    }

    let mut peak = f64::NEG_INFINITY;

    let (mut time1, mut time2) = (aos, los);
    let mut step_s = (time2 - time1).to_seconds() / PEAK_SUBDIVISIONS;

    for _ in 0..MAX_PEAK_ROUNDS {
        let step = Duration::from_seconds(step_s);

        let mut t = time1;
        let mut running = f64::NEG_INFINITY;

        loop {
            let e = elevation(t)?;
            if e <= running {
                // went past the peak
                break;
            }
            running = e;
            if t >= time2 {
                break;
            }
            t = t + step;
            if t > time2 {
                t = time2;
            }
        }

        peak = peak.max(running);

        if step_s <= 1.0 {
            break;
        }

        // peak lies within [t - 2 step, t]
        time2 = t;
        time1 = t - Duration::from_seconds(2.0 * step_s);
        if time1 < aos {
            time1 = aos;
        }
        step_s = (time2 - time1).to_seconds() / PEAK_SUBDIVISIONS;
    }

    #[cfg(feature = "log")]
    debug!("{} → {} - peak elevation {:.6} rad", aos, los, peak);

    Ok(peak)
}
