//! Observed surface-pressure fixes used to bound VortexSynth's uncertainty.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The maximum number of active pressure observations considered per
/// volume (spec §3).
pub const MAX_PRESSURE_OBSERVATIONS: usize = 101;

/// A single surface-pressure observation, e.g. from a MADIS feed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PressureData {
    pub latitude: f32,
    pub longitude: f32,
    pub pressure_mb: f32,
    pub time_epoch_millis: i64,
}

/// A bounded collection of [`PressureData`] observations.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PressureList {
    observations: Vec<PressureData>,
}

impl PressureList {
    /// An empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an observation, evicting the oldest entry if the list is at
    /// capacity ([`MAX_PRESSURE_OBSERVATIONS`]).
    pub fn push(&mut self, observation: PressureData) {
        if self.observations.len() >= MAX_PRESSURE_OBSERVATIONS {
            self.observations.remove(0);
        }
        self.observations.push(observation);
    }

    /// All active observations.
    pub fn observations(&self) -> &[PressureData] {
        &self.observations
    }

    /// The observation nearest `(latitude, longitude)` by simple planar
    /// distance in degrees, used to seed VortexSynth's boundary pressure.
    pub fn nearest(&self, latitude: f32, longitude: f32) -> Option<&PressureData> {
        self.observations.iter().min_by(|a, b| {
            let da = (a.latitude - latitude).hypot(a.longitude - longitude);
            let db = (b.latitude - latitude).hypot(b.longitude - longitude);
            da.partial_cmp(&db).unwrap()
        })
    }
}
