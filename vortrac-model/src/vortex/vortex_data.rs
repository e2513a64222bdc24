//! Per-volume analysis result.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::sentinel::MISSING;
use crate::vortex::coefficient::{Coefficient, CoefficientKind};

/// Default capacity for the per-volume height dimension (spec §3).
pub const MAX_LEVELS: usize = 15;
/// Default capacity for the per-level ring dimension (spec §3).
pub const MAX_RADII: usize = 30;
/// Maximum [`Coefficient`]s recorded for a single (level, ring) via
/// [`VortexData::set_coefficients`] (spec §3). A ring's GBVTD fit emits
/// `2 + 4*wavenumber` coefficients (`gbvtd::column_count`); spec §4.4
/// bounds the configured wavenumber to `{1, 2}`, so this covers up to
/// wavenumber 3 with headroom.
pub const MAX_WAVENUM: usize = 16;

/// Per-level analysis statistics, one entry per analyzed height.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LevelData {
    pub altitude_km: f32,
    pub center_latitude: f32,
    pub center_longitude: f32,
    pub rmw_km: f32,
    pub rmw_uncertainty_km: f32,
    pub max_tangential_wind_ms: f32,
    pub center_std_dev_km: f32,
    pub converging_center_count: u32,
}

impl LevelData {
    /// A level with every field set to the sentinel.
    pub fn missing() -> Self {
        Self {
            altitude_km: MISSING,
            center_latitude: MISSING,
            center_longitude: MISSING,
            rmw_km: MISSING,
            rmw_uncertainty_km: MISSING,
            max_tangential_wind_ms: MISSING,
            center_std_dev_km: MISSING,
            converging_center_count: 0,
        }
    }
}

/// The complete per-volume VORTRAC result (spec §3 "VortexData").
///
/// Field layout is grounded on
/// `original_source/src/DataObjects/VortexData.cpp`: per-level arrays
/// indexed by height, a flattened `(level, ring, wavenumber)` coefficient
/// table, and scalar pressure fields. Arrays are `Vec`-backed rather than
/// the donor's fixed-size C arrays, but bounded by [`MAX_LEVELS`] /
/// [`MAX_RADII`] / [`MAX_WAVENUM`] — [`VortexData::push_level`] and
/// [`VortexData::set_coefficient`] enforce the bound.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VortexData {
    time_epoch_millis: i64,
    levels: Vec<LevelData>,
    /// Flattened `(level, ring)` coefficient table; each entry is the set of
    /// coefficients fit for that (level, ring).
    coefficients: Vec<Vec<Coefficient>>,
    pub central_pressure_mb: f32,
    pub central_pressure_uncertainty_mb: f32,
    pub pressure_deficit_mb: f32,
    pub pressure_deficit_uncertainty_mb: f32,
    pub mean_rmw_km: f32,
    pub max_valid_radius_km: f32,
}

impl VortexData {
    /// Creates an empty result for the given volume time with every scalar
    /// field at the sentinel, matching the donor's default constructor.
    pub fn new(time_epoch_millis: i64) -> Self {
        Self {
            time_epoch_millis,
            levels: Vec::new(),
            coefficients: Vec::new(),
            central_pressure_mb: MISSING,
            central_pressure_uncertainty_mb: MISSING,
            pressure_deficit_mb: MISSING,
            pressure_deficit_uncertainty_mb: MISSING,
            mean_rmw_km: MISSING,
            max_valid_radius_km: MISSING,
        }
    }

    /// This result's volume time as a UNIX epoch timestamp in milliseconds.
    pub fn time_epoch_millis(&self) -> i64 {
        self.time_epoch_millis
    }

    /// Appends a level, enforcing [`MAX_LEVELS`] and the "heights strictly
    /// increasing" invariant (spec §3).
    ///
    /// # Panics
    ///
    /// Panics if the capacity is exceeded or `level.altitude_km` does not
    /// exceed the previous level's altitude.
    pub fn push_level(&mut self, level: LevelData) {
        assert!(
            self.levels.len() < MAX_LEVELS,
            "VortexData level capacity ({MAX_LEVELS}) exceeded"
        );
        if let Some(last) = self.levels.last() {
            assert!(
                level.altitude_km > last.altitude_km,
                "levels must be appended in strictly increasing altitude order"
            );
        }
        self.levels.push(level);
        self.coefficients.push(Vec::new());
    }

    /// The per-level statistics, ordered by increasing altitude.
    pub fn levels(&self) -> &[LevelData] {
        &self.levels
    }

    /// The index of the level whose altitude is closest to `height_km`, or
    /// `None` if no levels have been recorded. Mirrors
    /// `VortexData::getHeightIndex`.
    pub fn height_index(&self, height_km: f32) -> Option<usize> {
        self.levels
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| {
                (a.altitude_km - height_km)
                    .abs()
                    .partial_cmp(&(b.altitude_km - height_km).abs())
                    .unwrap()
            })
            .map(|(index, _)| index)
    }

    /// Records a ring's fitted coefficients at the given level index.
    ///
    /// # Panics
    ///
    /// Panics if `level` is out of range or the ring already holds
    /// [`MAX_RADII`] coefficients' worth of rings, or if more than
    /// [`MAX_WAVENUM`] coefficients are recorded for one (level, ring).
    pub fn set_coefficients(&mut self, level: usize, coefficients: Vec<Coefficient>) {
        assert!(coefficients.len() <= MAX_WAVENUM, "too many coefficients for one ring");
        assert!(
            self.coefficients[level].len() / MAX_WAVENUM.max(1) < MAX_RADII,
            "VortexData ring capacity ({MAX_RADII}) exceeded at level {level}"
        );
        self.coefficients[level].extend(coefficients);
    }

    /// Looks up a coefficient by level index, ring radius, and parameter
    /// kind. Mirrors the donor's `getCoefficient(lev, rad, parameter)`
    /// overload, keyed on radius rather than ring index since rings are not
    /// stored as a fixed-stride array here.
    pub fn coefficient(
        &self,
        level: usize,
        radius_km: f32,
        parameter: CoefficientKind,
    ) -> Option<Coefficient> {
        self.coefficients.get(level)?.iter().find(|c| {
            c.parameter == parameter && (c.radius_km - radius_km).abs() < f32::EPSILON
        }).copied()
    }

    /// Looks up a coefficient by height in km rather than level index,
    /// mirroring the donor's `getCoefficient(height, rad, parameter)`
    /// overload.
    pub fn coefficient_at_height(
        &self,
        height_km: f32,
        radius_km: f32,
        parameter: CoefficientKind,
    ) -> Option<Coefficient> {
        let level = self.height_index(height_km)?;
        self.coefficient(level, radius_km, parameter)
    }

    /// All coefficients recorded for the given level, across all rings.
    pub fn coefficients_at_level(&self, level: usize) -> &[Coefficient] {
        self.coefficients
            .get(level)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl PartialOrd for VortexData {
    /// Orders purely by volume time, matching the donor's `operator<`/`>`.
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.time_epoch_millis.partial_cmp(&other.time_epoch_millis)
    }
}
