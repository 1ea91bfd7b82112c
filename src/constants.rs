use hifitime::Duration;

/// Default coarse sampling step, in seconds
pub(crate) const DEFAULT_SAMPLE_STEP_S: f64 = 180.0;

/// Default minimal peak elevation for a pass to be reported, in degrees
pub(crate) const DEFAULT_MIN_ELEVATION_DEG: f64 = 5.0;

/// Default search window length, in days
pub(crate) const DEFAULT_SEARCH_WINDOW_DAYS: f64 = 5.0;

/// Time skipped right after a pass has ended.
/// An object cannot rise again that soon on a low orbit.
pub(crate) fn pass_skip() -> Duration {
    Duration::from_seconds(30.0 * 60.0)
}

/// Crossing refinement: max. number of bisections
pub(crate) const MAX_BISECTIONS: usize = 16;

/// Crossing refinement: max. number of whole second corrections
pub(crate) const MAX_SECOND_CORRECTIONS: usize = 6;

/// Peak refinement: number of steps per bracket
pub(crate) const PEAK_SUBDIVISIONS: f64 = 9.0;

/// Peak refinement: max. number of narrowing rounds
pub(crate) const MAX_PEAK_ROUNDS: usize = 32;
