//! The Cappi (Constant-Altitude Plan-Position Indicator) gridded wind field.
//!
//! A `Cappi` is a single horizontal slice of radar-derived `(u, v, w)` wind
//! at a fixed height above the radar, built by the external CappiBuilder
//! collaborator (spec §6) and consumed by `vortrac-process`. Geometry is
//! shared across the three component grids via one [`GridSpec`].

use crate::field::{CartesianGrid, GridSpec};
use crate::sentinel::MISSING;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single constant-altitude gridded wind field.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cappi {
    z_km: f32,
    radar_latitude: f32,
    radar_longitude: f32,
    u: CartesianGrid<f32>,
    v: CartesianGrid<f32>,
    w: CartesianGrid<f32>,
}

impl Cappi {
    /// Creates a new Cappi layer. The three grids must share `spec`'s
    /// geometry; `u`, `v`, and `w` values are in m/s with
    /// [`crate::sentinel::MISSING`] for cells with no valid wind estimate.
    pub fn new(
        z_km: f32,
        radar_latitude: f32,
        radar_longitude: f32,
        spec: &GridSpec,
        u: Vec<f32>,
        v: Vec<f32>,
        w: Vec<f32>,
    ) -> Self {
        Self {
            z_km,
            radar_latitude,
            radar_longitude,
            u: CartesianGrid::from_spec(spec, u),
            v: CartesianGrid::from_spec(spec, v),
            w: CartesianGrid::from_spec(spec, w),
        }
    }

    /// Height of this layer above the radar, in km.
    pub fn z_km(&self) -> f32 {
        self.z_km
    }

    /// Eastward wind component grid, m/s.
    pub fn u(&self) -> &CartesianGrid<f32> {
        &self.u
    }

    /// Northward wind component grid, m/s.
    pub fn v(&self) -> &CartesianGrid<f32> {
        &self.v
    }

    /// Vertical wind component grid, m/s.
    pub fn w(&self) -> &CartesianGrid<f32> {
        &self.w
    }

    /// Bilinearly-unweighted nearest-cell lookup of (u, v) at a world
    /// position in meters relative to the radar. Returns
    /// `(MISSING, MISSING)` if the position falls outside the grid.
    pub fn wind_at(&self, x_m: f32, y_m: f32) -> (f32, f32) {
        match self.u.world_to_pixel(x_m, y_m) {
            Some((px, py)) => (*self.u.get(px, py), *self.v.get(px, py)),
            None => (MISSING, MISSING),
        }
    }

    /// Converts a latitude/longitude offset from the radar into Cartesian
    /// (x east, y north) meters, using a flat-earth approximation valid to
    /// roughly 500 km (spec §4.1): `1° lat ≈ 111 km`, longitude scaled by
    /// `cos(lat)`.
    pub fn latlon_to_xy(&self, latitude: f32, longitude: f32) -> (f32, f32) {
        latlon_to_xy(self.radar_latitude, self.radar_longitude, latitude, longitude)
    }

    /// Inverse of [`Cappi::latlon_to_xy`].
    pub fn xy_to_latlon(&self, x_m: f32, y_m: f32) -> (f32, f32) {
        xy_to_latlon(self.radar_latitude, self.radar_longitude, x_m, y_m)
    }
}

const KM_PER_DEGREE_LAT: f32 = 111.0;

/// Converts a `(latitude, longitude)` pair into meters east/north of
/// `(radar_latitude, radar_longitude)` under the flat-earth approximation
/// shared by Preprocess, Cappi, and GBVTDRing.
pub fn latlon_to_xy(
    radar_latitude: f32,
    radar_longitude: f32,
    latitude: f32,
    longitude: f32,
) -> (f32, f32) {
    let lat_rad = radar_latitude.to_radians();
    let dx_km = (longitude - radar_longitude) * KM_PER_DEGREE_LAT * lat_rad.cos();
    let dy_km = (latitude - radar_latitude) * KM_PER_DEGREE_LAT;
    (dx_km * 1000.0, dy_km * 1000.0)
}

/// Inverse of [`latlon_to_xy`].
pub fn xy_to_latlon(radar_latitude: f32, radar_longitude: f32, x_m: f32, y_m: f32) -> (f32, f32) {
    let lat_rad = radar_latitude.to_radians();
    let dlat = (y_m / 1000.0) / KM_PER_DEGREE_LAT;
    let dlon = (x_m / 1000.0) / (KM_PER_DEGREE_LAT * lat_rad.cos());
    (radar_latitude + dlat, radar_longitude + dlon)
}
