//! CappiBuilder: the interface boundary to the external collaborator that
//! produces a Cartesian gridded wind field from a dealiased radar volume
//! (spec §2's component table: "external collaborator; spec covers only
//! its interface").
//!
//! True multi-Doppler (or VAD/GVAD) wind synthesis is out of scope here —
//! this module defines the trait the rest of the pipeline depends on, plus
//! a single-Doppler placeholder good enough to exercise the controller
//! end-to-end without a real synthesis collaborator wired in.

use vortrac_model::cappi::Cappi;
use vortrac_model::config::CappiConfig;
use vortrac_model::field::GridSpec;
use vortrac_model::sentinel::{is_missing, MISSING};
use vortrac_model::volume::RadarVolume;

/// Produces one [`Cappi`] per analysis height from a [`RadarVolume`].
pub trait CappiBuilder {
    /// Builds a gridded wind field at each height in `levels_km` (meters
    /// above the radar), in ascending order.
    fn build(&self, volume: &RadarVolume, levels_km: &[f32], config: &CappiConfig) -> Vec<(f32, Cappi)>;
}

/// A single-Doppler placeholder: assigns each grid cell the nearest
/// velocity gate at the nearest-elevation sweep for a given height, and
/// treats that scalar Doppler return as if it were the full wind vector's
/// projection onto both the east and north axes (physically incorrect for
/// a real storm, but sufficient to drive the rest of the pipeline in the
/// absence of a true multi-Doppler synthesis collaborator). Real
/// deployments supply their own [`CappiBuilder`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleDopplerPlaceholderBuilder {
    pub grid_width: usize,
    pub grid_height: usize,
    pub cell_size_m: f32,
}

impl CappiBuilder for SingleDopplerPlaceholderBuilder {
    fn build(&self, volume: &RadarVolume, levels_km: &[f32], _config: &CappiConfig) -> Vec<(f32, Cappi)> {
        let spec = GridSpec::centered(self.grid_width, self.grid_height, self.cell_size_m);

        levels_km
            .iter()
            .map(|&z_km| {
                let (u, v, w) = self.fill_level(volume, z_km, &spec);
                (
                    z_km,
                    Cappi::new(z_km, volume.radar_latitude(), volume.radar_longitude(), &spec, u, v, w),
                )
            })
            .collect()
    }
}

impl SingleDopplerPlaceholderBuilder {
    fn fill_level(&self, volume: &RadarVolume, z_km: f32, spec: &GridSpec) -> (Vec<f32>, Vec<f32>, Vec<f32>) {
        let pixel_count = spec.pixel_count();
        let mut u = vec![MISSING; pixel_count];
        let mut v = vec![MISSING; pixel_count];
        let w = vec![MISSING; pixel_count];

        let sweep = match nearest_sweep_for_height(volume, z_km) {
            Some(sweep) => sweep,
            None => return (u, v, w),
        };

        for y in 0..self.grid_height {
            for x in 0..self.grid_width {
                let (x_m, y_m) = pixel_to_world(spec, x, y);
                let range_m = (x_m as f64).hypot(y_m as f64) as f32;
                let azimuth_deg = (x_m as f64).atan2(y_m as f64).to_degrees() as f32;
                let azimuth_deg = if azimuth_deg < 0.0 { azimuth_deg + 360.0 } else { azimuth_deg };

                if let Some(ray) = nearest_ray(sweep, azimuth_deg) {
                    let velocity = ray.velocity_at_range(range_m, sweep.first_gate_range_m(), sweep.gate_spacing_m());
                    if !is_missing(velocity) {
                        let index = y * self.grid_width + x;
                        let azimuth_rad = azimuth_deg.to_radians();
                        u[index] = velocity * azimuth_rad.sin();
                        v[index] = velocity * azimuth_rad.cos();
                    }
                }
            }
        }

        (u, v, w)
    }
}

/// Center of the pixel at `(x, y)` in meters from the radar, matching
/// [`vortrac_model::field::CartesianGrid::pixel_to_world`]'s convention.
fn pixel_to_world(spec: &GridSpec, x: usize, y: usize) -> (f32, f32) {
    (
        spec.origin_xy_m.0 + (x as f32 + 0.5) * spec.pixel_size_m,
        spec.origin_xy_m.1 - (y as f32 + 0.5) * spec.pixel_size_m,
    )
}

fn nearest_sweep_for_height(volume: &RadarVolume, z_km: f32) -> Option<&vortrac_model::volume::VolumeSweep> {
    volume.sweeps().iter().min_by(|a, b| {
        let height_a = implied_height_km(a.elevation_degrees(), 50.0);
        let height_b = implied_height_km(b.elevation_degrees(), 50.0);
        (height_a - z_km).abs().partial_cmp(&(height_b - z_km).abs()).unwrap()
    })
}

fn implied_height_km(elevation_degrees: f32, range_km: f32) -> f32 {
    range_km * elevation_degrees.to_radians().sin()
}

fn nearest_ray(sweep: &vortrac_model::volume::VolumeSweep, azimuth_deg: f32) -> Option<&vortrac_model::volume::VolumeRay> {
    sweep.rays().iter().min_by(|a, b| {
        let da = angular_distance(a.azimuth_degrees(), azimuth_deg);
        let db = angular_distance(b.azimuth_degrees(), azimuth_deg);
        da.partial_cmp(&db).unwrap()
    })
}

fn angular_distance(a_deg: f32, b_deg: f32) -> f32 {
    let diff = (a_deg - b_deg).rem_euclid(360.0);
    diff.min(360.0 - diff)
}
