//! Run configuration.
//!
//! `Configuration` is an immutable snapshot of the recognized options for
//! one run, captured once at pipeline construction (spec §9 "Global
//! configuration") and handed to every stage by reference instead of the
//! donor project's `Configuration` pointer plus section-name strings.
//! Parsing the XML document described in spec §6 is `vortrac-cli`'s job;
//! this module only defines the in-memory shape and the geometry/closure
//! enums it's built from.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The ring geometry assumption used by the GBVTD solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Geometry {
    /// Ground-Based Velocity Track Display.
    Gbvtd,
    /// Ground-based Velocity Track Display, generalized variant.
    Gvtd,
}

/// Whether GBVTDRing assumes zero mean line-of-sight wind or subtracts an
/// HVVP-estimated environmental wind before fitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Closure {
    /// Assume the mean line-of-sight wind component is zero.
    Original,
    /// Subtract the HVVP-estimated environmental wind before fitting.
    Hvvp,
}

/// *vortex* configuration section: the initial storm vitals.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VortexConfig {
    pub initial_latitude: f32,
    pub initial_longitude: f32,
    pub storm_speed_ms: f32,
    pub storm_direction_degrees: f32,
    pub observation_epoch_millis: i64,
}

/// *radar* configuration section: the fixed radar site.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RadarConfig {
    pub latitude: f32,
    pub longitude: f32,
    pub altitude_m: f32,
    pub start_epoch_millis: i64,
    pub format: String,
}

/// *cappi* configuration section.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CappiConfig {
    pub z_grid_spacing_km: f32,
}

/// Per-wavenumber azimuthal data-gap tolerance, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GapTolerance {
    pub wavenumber: u8,
    pub max_gap_degrees: f32,
}

/// *vtd* configuration section.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VtdConfig {
    pub bottom_level_km: f32,
    pub top_level_km: f32,
    pub inner_radius_km: f32,
    pub outer_radius_km: f32,
    pub ring_width_km: f32,
    pub max_wavenumber: u8,
    pub gap_tolerances: Vec<GapTolerance>,
    pub geometry: Geometry,
    pub closure: Closure,
}

impl VtdConfig {
    /// The configured gap tolerance for `wavenumber`, or `None` if
    /// unconfigured for that wavenumber.
    pub fn gap_tolerance_degrees(&self, wavenumber: u8) -> Option<f32> {
        self.gap_tolerances
            .iter()
            .find(|g| g.wavenumber == wavenumber)
            .map(|g| g.max_gap_degrees)
    }
}

/// *center* configuration section: CenterFinder search parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CenterConfig {
    pub inner_radius_km: f32,
    pub outer_radius_km: f32,
    pub bottom_level_km: f32,
    pub top_level_km: f32,
    pub max_iterations: u32,
    pub convergence_tolerance: f32,
    pub ring_count: u32,
}

/// *choosecenter* configuration section: CenterChooser heuristics.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChooseCenterConfig {
    pub averaging_interval_volumes: u32,
    pub std_dev_multiplier: f32,
    pub start_epoch_millis: i64,
    /// Analytic-mode override: when set, CenterChooser adopts this center
    /// directly instead of running the mean/std exclusion and cross-volume
    /// smoothing steps (spec §4.3 step 5). Open Question 1 resolves to a
    /// single source of truth here rather than a separate radar-local
    /// config file; see DESIGN.md.
    pub force_center: Option<(f32, f32)>,
}

/// *pressure* configuration section.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PressureConfig {
    pub rapid_change_rate_mb_per_hr: f32,
    pub averaging_interval_volumes: u32,
    pub default_boundary_pressure_mb: f32,
}

/// *qc* configuration section: quality-control thresholds applied ahead of
/// the core pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct QcConfig {
    pub min_valid_gate_fraction: f32,
}

/// An immutable snapshot of the recognized configuration options for one
/// run, organized by section (spec §3).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Configuration {
    pub vortex: VortexConfig,
    pub radar: RadarConfig,
    pub cappi: CappiConfig,
    pub vtd: VtdConfig,
    pub center: CenterConfig,
    pub choosecenter: ChooseCenterConfig,
    pub pressure: PressureConfig,
    pub qc: QcConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Configuration {
        Configuration {
            vortex: VortexConfig {
                initial_latitude: 25.0,
                initial_longitude: -75.0,
                storm_speed_ms: 10.0,
                storm_direction_degrees: 270.0,
                observation_epoch_millis: 0,
            },
            radar: RadarConfig {
                latitude: 25.0,
                longitude: -75.5,
                altitude_m: 10.0,
                start_epoch_millis: 0,
                format: "archive2".into(),
            },
            cappi: CappiConfig {
                z_grid_spacing_km: 1.0,
            },
            vtd: VtdConfig {
                bottom_level_km: 1.0,
                top_level_km: 8.0,
                inner_radius_km: 5.0,
                outer_radius_km: 60.0,
                ring_width_km: 1.0,
                max_wavenumber: 2,
                gap_tolerances: vec![GapTolerance {
                    wavenumber: 1,
                    max_gap_degrees: 90.0,
                }],
                geometry: Geometry::Gbvtd,
                closure: Closure::Original,
            },
            center: CenterConfig {
                inner_radius_km: 5.0,
                outer_radius_km: 60.0,
                bottom_level_km: 1.0,
                top_level_km: 8.0,
                max_iterations: 125,
                convergence_tolerance: 1e-4,
                ring_count: 10,
            },
            choosecenter: ChooseCenterConfig {
                averaging_interval_volumes: 6,
                std_dev_multiplier: 2.0,
                start_epoch_millis: 0,
                force_center: None,
            },
            pressure: PressureConfig {
                rapid_change_rate_mb_per_hr: 5.0,
                averaging_interval_volumes: 6,
                default_boundary_pressure_mb: 1013.0,
            },
            qc: QcConfig {
                min_valid_gate_fraction: 0.5,
            },
        }
    }

    #[test]
    fn gap_tolerance_lookup() {
        let config = sample();
        assert_eq!(config.vtd.gap_tolerance_degrees(1), Some(90.0));
        assert_eq!(config.vtd.gap_tolerance_degrees(2), None);
    }
}
