//! Predicted passes
use hifitime::{Duration, Epoch};
use itertools::Itertools;
use map_3d::rad2deg;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// [PassRecord] describes one pass of the object above the horizon.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PassRecord {
    /// Acquisition of signal: object rises above the horizon
    pub aos: Epoch,
    /// Loss of signal: object sets below the horizon
    pub los: Epoch,
    /// Highest elevation reached during this pass, in radians
    pub peak_elevation: f64,
}

impl PassRecord {
    /// Pass duration
    pub fn duration(&self) -> Duration {
        self.los - self.aos
    }
    /// Human readable duration, with one second resolution:
    /// "4m 12s", or "42s" when shorter than one minute.
    pub fn duration_label(&self) -> String {
        let total_s = self.duration().to_seconds().max(0.0).floor() as u64;
        let (minutes, seconds) = (total_s / 60, total_s % 60);
        if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }
    /// Peak elevation, in degrees
    pub fn peak_elevation_deg(&self) -> f64 {
        rad2deg(self.peak_elevation)
    }
    /// True if the object is above the horizon at `t`, within this pass
    pub fn contains(&self, t: Epoch) -> bool {
        t >= self.aos && t <= self.los
    }
    /// Remaining time until AOS, or [Duration::ZERO] when
    /// this pass has already started.
    pub fn time_until(&self, t: Epoch) -> Duration {
        if t >= self.aos {
            Duration::ZERO
        } else {
            self.aos - t
        }
    }
}

fn format_epoch(t: Epoch) -> String {
    let (y, m, d, hh, mm, ss, _) = t.to_gregorian_utc();
    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
        y, m, d, hh, mm, ss
    )
}

impl std::fmt::Display for PassRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} → {} ({}) peak {:.1}°",
            format_epoch(self.aos),
            format_epoch(self.los),
            self.duration_label(),
            self.peak_elevation_deg()
        )
    }
}

/// [PassList] is the result of a pass search: passes
/// sorted by AOS, that do not overlap.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PassList(Vec<PassRecord>);

impl PassList {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }
    pub(crate) fn push(&mut self, pass: PassRecord) {
        self.0.push(pass);
    }
    /// Number of passes
    pub fn len(&self) -> usize {
        self.0.len()
    }
    /// True if no pass was found
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Returns an Iterator over all passes, in chronological order
    pub fn iter(&self) -> std::slice::Iter<'_, PassRecord> {
        self.0.iter()
    }
    /// Returns first pass
    pub fn first(&self) -> Option<&PassRecord> {
        self.0.first()
    }
    /// Returns last pass
    pub fn last(&self) -> Option<&PassRecord> {
        self.0.last()
    }
    /// Returns the pass in progress at `t`, or the following one.
    pub fn next_pass(&self, t: Epoch) -> Option<&PassRecord> {
        self.0.iter().find(|pass| pass.los > t)
    }
    /// Returns the pass in progress at `t`, if any.
    pub fn ongoing(&self, t: Epoch) -> Option<&PassRecord> {
        self.0.iter().find(|pass| pass.contains(t))
    }
    /// True if passes are sorted by AOS and do not overlap
    pub fn is_chronological(&self) -> bool {
        self.0.iter().all(|pass| pass.aos <= pass.los)
            && self
                .0
                .iter()
                .tuple_windows()
                .all(|(prev, next)| prev.los <= next.aos)
    }
}

impl std::ops::Index<usize> for PassList {
    type Output = PassRecord;
    fn index(&self, index: usize) -> &PassRecord {
        &self.0[index]
    }
}

impl IntoIterator for PassList {
    type Item = PassRecord;
    type IntoIter = std::vec::IntoIter<PassRecord>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a PassList {
    type Item = &'a PassRecord;
    type IntoIter = std::slice::Iter<'a, PassRecord>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<PassList> for Vec<PassRecord> {
    fn from(list: PassList) -> Self {
        list.0
    }
}

/*
 * Pass table
 */
impl std::fmt::Display for PassList {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(
            f,
            "{:<20} {:<20} {:>9} {:>9}",
            "AOS", "LOS", "Duration", "Peak Elev"
        )?;
        for pass in self.0.iter() {
            writeln!(
                f,
                "{:<20} {:<20} {:>9} {:>9.1}",
                format_epoch(pass.aos),
                format_epoch(pass.los),
                pass.duration_label(),
                pass.peak_elevation_deg()
            )?;
        }
        Ok(())
    }
}
