//! The analysis-facing radar volume model.
//!
//! This is distinct from [`crate::data`], which models the NEXRAD Archive II
//! wire format. `RadarVolume` exposes only the fields the analytical
//! pipeline (`vortrac-process`) reads, at the granularity it reads them —
//! adapting a decoded [`crate::data::Scan`] into a `RadarVolume` is the
//! CappiBuilder/controller's job, not this crate's.

use std::fmt::Debug;

#[cfg(feature = "chrono")]
use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::sentinel::MISSING;

/// A single ray within a [`VolumeSweep`]: an azimuth/elevation pair and its
/// Doppler velocity gates.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VolumeRay {
    azimuth_degrees: f32,
    elevation_degrees: f32,
    velocity_gates: Vec<f32>,
}

impl VolumeRay {
    /// Creates a new ray. `velocity_gates` should use [`crate::sentinel::MISSING`]
    /// for gates without a valid Doppler return.
    pub fn new(azimuth_degrees: f32, elevation_degrees: f32, velocity_gates: Vec<f32>) -> Self {
        Self {
            azimuth_degrees,
            elevation_degrees,
            velocity_gates,
        }
    }

    /// Azimuth angle in degrees from north, clockwise.
    pub fn azimuth_degrees(&self) -> f32 {
        self.azimuth_degrees
    }

    /// Elevation angle in degrees above the horizon.
    pub fn elevation_degrees(&self) -> f32 {
        self.elevation_degrees
    }

    /// Doppler velocity gates in order of increasing range, in m/s.
    pub fn velocity_gates(&self) -> &[f32] {
        &self.velocity_gates
    }

    /// The velocity gate nearest the given range in meters, or [`MISSING`]
    /// if `range_m` falls outside the ray or the nearest gate is invalid.
    pub fn velocity_at_range(&self, range_m: f32, first_gate_m: f32, gate_spacing_m: f32) -> f32 {
        if gate_spacing_m <= 0.0 {
            return MISSING;
        }
        let index = ((range_m - first_gate_m) / gate_spacing_m).round();
        if index < 0.0 {
            return MISSING;
        }
        match self.velocity_gates.get(index as usize) {
            Some(value) => *value,
            None => MISSING,
        }
    }
}

/// A single elevation sweep within a [`RadarVolume`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VolumeSweep {
    elevation_degrees: f32,
    unambiguous_range_km: f32,
    gate_count: u16,
    gate_spacing_m: f32,
    first_gate_range_m: f32,
    rays: Vec<VolumeRay>,
}

impl VolumeSweep {
    /// Creates a new sweep from its geometry and constituent rays.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        elevation_degrees: f32,
        unambiguous_range_km: f32,
        gate_count: u16,
        gate_spacing_m: f32,
        first_gate_range_m: f32,
        rays: Vec<VolumeRay>,
    ) -> Self {
        Self {
            elevation_degrees,
            unambiguous_range_km,
            gate_count,
            gate_spacing_m,
            first_gate_range_m,
            rays,
        }
    }

    /// Nominal elevation angle of this sweep in degrees.
    pub fn elevation_degrees(&self) -> f32 {
        self.elevation_degrees
    }

    /// The maximum range, in km, at which this sweep's velocity gates are
    /// not range-folded.
    pub fn unambiguous_range_km(&self) -> f32 {
        self.unambiguous_range_km
    }

    /// Number of velocity gates per ray.
    pub fn gate_count(&self) -> u16 {
        self.gate_count
    }

    /// Range spacing between consecutive velocity gates, in meters.
    pub fn gate_spacing_m(&self) -> f32 {
        self.gate_spacing_m
    }

    /// Range to the first velocity gate, in meters.
    pub fn first_gate_range_m(&self) -> f32 {
        self.first_gate_range_m
    }

    /// The rays comprising this sweep, ordered by azimuth.
    pub fn rays(&self) -> &[VolumeRay] {
        &self.rays
    }
}

/// A complete radar volume: the unit of work for one pipeline pass.
///
/// Consumed read-only by every pipeline stage — no stage mutates a
/// `RadarVolume` (spec §5).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RadarVolume {
    time_epoch_millis: i64,
    radar_latitude: f32,
    radar_longitude: f32,
    radar_altitude_m: f32,
    sweeps: Vec<VolumeSweep>,
}

impl RadarVolume {
    /// Creates a new radar volume.
    pub fn new(
        time_epoch_millis: i64,
        radar_latitude: f32,
        radar_longitude: f32,
        radar_altitude_m: f32,
        sweeps: Vec<VolumeSweep>,
    ) -> Self {
        Self {
            time_epoch_millis,
            radar_latitude,
            radar_longitude,
            radar_altitude_m,
            sweeps,
        }
    }

    /// Volume collection time as a UNIX epoch timestamp in milliseconds.
    pub fn time_epoch_millis(&self) -> i64 {
        self.time_epoch_millis
    }

    /// Volume collection time.
    #[cfg(feature = "chrono")]
    pub fn time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.time_epoch_millis)
    }

    /// Radar site latitude in degrees.
    pub fn radar_latitude(&self) -> f32 {
        self.radar_latitude
    }

    /// Radar site longitude in degrees.
    pub fn radar_longitude(&self) -> f32 {
        self.radar_longitude
    }

    /// Radar site altitude above sea level in meters.
    pub fn radar_altitude_m(&self) -> f32 {
        self.radar_altitude_m
    }

    /// The elevation sweeps comprising this volume.
    pub fn sweeps(&self) -> &[VolumeSweep] {
        &self.sweeps
    }

    /// The largest unambiguous range across all sweeps, in km. Used by
    /// Preprocess to decide whether a candidate center is within radar
    /// range.
    pub fn max_unambiguous_range_km(&self) -> f32 {
        self.sweeps
            .iter()
            .map(|sweep| sweep.unambiguous_range_km())
            .fold(0.0, f32::max)
    }

    /// Sweeps at or below the given elevation angle, used by HVVP which
    /// only considers low-elevation gates.
    pub fn sweeps_at_or_below(&self, elevation_degrees: f32) -> impl Iterator<Item = &VolumeSweep> {
        self.sweeps
            .iter()
            .filter(move |sweep| sweep.elevation_degrees() <= elevation_degrees)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_unambiguous_range_is_largest_sweep() {
        let volume = RadarVolume::new(
            0,
            25.0,
            -80.0,
            10.0,
            vec![
                VolumeSweep::new(0.5, 230.0, 10, 250.0, 2125.0, vec![]),
                VolumeSweep::new(1.5, 460.0, 10, 250.0, 2125.0, vec![]),
            ],
        );
        assert_eq!(volume.max_unambiguous_range_km(), 460.0);
    }

    #[test]
    fn sweeps_at_or_below_filters_by_elevation() {
        let volume = RadarVolume::new(
            0,
            25.0,
            -80.0,
            10.0,
            vec![
                VolumeSweep::new(0.5, 230.0, 10, 250.0, 2125.0, vec![]),
                VolumeSweep::new(4.5, 230.0, 10, 250.0, 2125.0, vec![]),
                VolumeSweep::new(6.0, 230.0, 10, 250.0, 2125.0, vec![]),
            ],
        );
        let low: Vec<_> = volume.sweeps_at_or_below(5.0).collect();
        assert_eq!(low.len(), 2);
    }

    #[test]
    fn velocity_at_range_missing_outside_ray() {
        let ray = VolumeRay::new(10.0, 0.5, vec![1.0, 2.0, MISSING]);
        assert_eq!(ray.velocity_at_range(2125.0, 2125.0, 250.0), 1.0);
        assert_eq!(ray.velocity_at_range(2375.0, 2125.0, 250.0), 2.0);
        assert_eq!(ray.velocity_at_range(2625.0, 2125.0, 250.0), MISSING);
        assert_eq!(ray.velocity_at_range(100.0, 2125.0, 250.0), MISSING);
    }
}
