//! Horizon crossing refinement (AOS / LOS determination).
use hifitime::{Duration, Epoch};

use crate::{
    constants::{MAX_BISECTIONS, MAX_SECOND_CORRECTIONS},
    Error,
};

/// Middle of the [time1, time2] interval
pub(crate) fn midpoint(time1: Epoch, time2: Epoch) -> Epoch {
    time1 + Duration::from_seconds((time2 - time1).to_seconds() / 2.0)
}

/// Refines the instant the object crossed the horizon, between `time1`
/// and `time2`. The elevation must have opposite signs at both ends.
/// `rising` selects the crossing direction: negative to positive elevation
/// (AOS), or positive to negative (LOS).
///
/// The crossing is first bisected down to a sub-second interval, then
/// corrected one whole second at a time. The returned [Epoch] is a whole
/// second, the last (LOS) or first (AOS) one where the object is above
/// the horizon: its neighbour one second outside the pass is below.
/// When iteration caps are exhausted, the best estimate is returned.
///
/// `elevation` returns the elevation angle (radians) at given [Epoch].
/// Its errors (propagation failures) are forwarded untouched.
pub fn find_crossing<F>(
    elevation: &mut F,
    time1: Epoch,
    time2: Epoch,
    rising: bool,
) -> Result<Epoch, Error>
where
    F: FnMut(Epoch) -> Result<f64, Error>,
{
    let one_s = Duration::from_seconds(1.0);

    // towards the inside of the pass
    let inward = if rising { one_s } else { -one_s };

    // rising: time1 below, time2 above
    // falling: time1 above, time2 below
    let (mut time1, mut time2) = (time1, time2);
    let mut middle = midpoint(time1, time2);

    for _ in 0..MAX_BISECTIONS {
        let above = elevation(middle)? >= 0.0;
        if above == rising {
            time2 = middle;
        } else {
            time1 = middle;
        }
        if time2 - time1 < one_s {
            break;
        }
        middle = midpoint(time1, time2);
    }

    let mut candidate = middle.floor(one_s) + inward;

    for _ in 0..MAX_SECOND_CORRECTIONS {
        if elevation(candidate)? >= 0.0 {
            let outward = candidate - inward;
            if elevation(outward)? < 0.0 {
                #[cfg(feature = "log")]
                debug!(
                    "{} - {} refined",
                    candidate,
                    if rising { "aos" } else { "los" }
                );
                return Ok(candidate);
            }
            candidate = outward;
        } else {
            candidate = candidate + inward;
        }
    }

    #[cfg(feature = "log")]
    warn!(
        "{} - {} refinement did not converge",
        candidate,
        if rising { "aos" } else { "los" }
    );

    Ok(candidate)
}
