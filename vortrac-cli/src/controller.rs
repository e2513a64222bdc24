//! The per-volume pipeline driver (spec §5's sequential-with-suspension-
//! points model): Preprocess → CappiBuilder → CenterFinder → CenterChooser
//! → GBVTDRing/HVVP → VortexSynth, writing one [`VortexData`]/[`SimplexData`]
//! pair per successfully analyzed volume.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::{info, warn};
use vortrac_model::config::{Closure, Configuration};
use vortrac_model::sentinel::MISSING;
use vortrac_model::vortex::{CoefficientKind, LevelData, PressureList, SimplexList, VortexData, VortexList};
use vortrac_model::volume::RadarVolume;
use vortrac_process::cappi_builder::{CappiBuilder, SingleDopplerPlaceholderBuilder};
use vortrac_process::preprocess::{preprocess, check_within_range, PriorResult};
use vortrac_process::result::{Error, Result};
use vortrac_process::vortex_synth::{synth_level, RingVt};
use vortrac_process::{center_chooser, center_finder, gbvtd, hvvp};

/// Runs the pipeline over one volume, appending a result to `vortex_list`/
/// `simplex_list` on success. A volume with zero converging centers across
/// every ring and level records its simplex search in `simplex_list` but
/// skips the `vortex_list` append entirely, returning
/// [`Error::NoConvergence`] (spec §7).
pub fn run_volume(
    config: &Configuration,
    volume: &RadarVolume,
    vortex_list: &mut VortexList,
    simplex_list: &mut SimplexList,
    pressure_observations: &PressureList,
    abort: &Arc<AtomicBool>,
) -> Result<()> {
    check_abort(abort)?;

    let prior = vortex_list.most_recent().and_then(|last| {
        let level = last.levels().first()?;
        Some(PriorResult {
            time_epoch_millis: last.time_epoch_millis(),
            latitude: level.center_latitude,
            longitude: level.center_longitude,
        })
    });

    let guess = preprocess(&config.vortex, &config.radar, prior, volume)?;
    check_within_range(volume, &config.radar, &guess, config.vortex.storm_speed_ms)?;

    check_abort(abort)?;

    let levels_km = analysis_levels(&config.center);
    let builder = SingleDopplerPlaceholderBuilder {
        grid_width: 400,
        grid_height: 400,
        cell_size_m: (config.center.outer_radius_km * 1000.0 / 150.0).max(250.0),
    };
    let cappi_layers = builder.build(volume, &levels_km, &config.cappi);

    check_abort(abort)?;

    let (xc_km, yc_km) = flat_earth_km(&config.radar, guess.latitude, guess.longitude);
    let simplex = center_finder::find_centers(
        volume.time_epoch_millis(),
        &cappi_layers,
        (xc_km as f64, yc_km as f64),
        &config.center,
        config.vtd.max_wavenumber,
        gap_tolerance_fraction(&config.vtd),
    );

    if simplex.candidates().iter().all(|c| !c.converged) {
        warn!("volume {} produced no converging ring", volume.time_epoch_millis());
        simplex_list.append(simplex);
        // Spec §7: a whole-volume NoConvergence skips the VortexList
        // append step entirely, unlike a per-ring/per-level failure, which
        // is instead recorded as a sentinel inside an appended VortexData.
        return Err(Error::NoConvergence);
    }

    check_abort(abort)?;

    let priors = vortex_list.most_recent().cloned();
    let extrapolated_prior = |level: usize| -> Option<center_chooser::PriorCenter> {
        let vortex = priors.as_ref()?;
        let data = vortex.levels().get(level)?;
        let (x, y) = flat_earth_km(&config.radar, data.center_latitude, data.center_longitude);
        Some(center_chooser::PriorCenter { x_km: x, y_km: y })
    };
    let chosen = center_chooser::choose_centers(
        &simplex,
        &config.choosecenter,
        cappi_layers.len(),
        vortex_list.entries().len() as u32,
        extrapolated_prior,
    );

    let mut result = VortexData::new(volume.time_epoch_millis());

    for (pushed_index, center) in chosen.iter().enumerate() {
        check_abort(abort)?;
        let (altitude_km, cappi) = &cappi_layers[center.level];

        let rings_km = center_finder::ring_radii_km(&config.center);
        let mut ring_vts = Vec::new();
        let mut ring_coefficients = Vec::new();

        let hvvp_profile = if config.vtd.closure == Closure::Hvvp {
            hvvp::estimate(volume, center.x_km as f64, center.y_km as f64, None).ok()
        } else {
            None
        };

        for radius_km_f64 in &rings_km {
            let radius_km = *radius_km_f64 as f32;
            let samples =
                gbvtd::ring_samples_from_cappi(cappi, center.x_km as f64, center.y_km as f64, *radius_km_f64, 72);
            let samples: Vec<_> = samples
                .into_iter()
                .filter(|s| !vortrac_model::sentinel::is_missing(s.velocity_ms))
                .collect();

            let adjusted = if let Some(profile) = &hvvp_profile {
                match nearest_layer(profile, *altitude_km) {
                    Some(layer) => gbvtd::subtract_environmental_wind(&samples, layer.ue_ms, layer.ve_ms),
                    None => samples,
                }
            } else {
                samples
            };

            if let Ok(fit) = gbvtd::fit_ring(
                center.level,
                center.x_km as f64,
                center.y_km as f64,
                radius_km as f64,
                config.vtd.max_wavenumber,
                &adjusted,
            ) {
                let vt_c0 = gbvtd::coefficient_value(&fit, CoefficientKind::VtC0);
                ring_vts.push(RingVt {
                    radius_km,
                    vt_c0,
                    std_error: (fit.sse / adjusted.len().max(1) as f64).sqrt() as f32,
                });
                ring_coefficients.push(fit.coefficients);
            }
        }

        let (center_latitude, center_longitude) = flat_earth_to_latlon(&config.radar, center.x_km, center.y_km);
        let boundary_pressure_mb = pressure_observations
            .nearest(center_latitude, center_longitude)
            .map(|observation| observation.pressure_mb)
            .unwrap_or(config.pressure.default_boundary_pressure_mb);

        let synth = synth_level(
            &ring_vts,
            config.radar.latitude,
            boundary_pressure_mb,
            hvvp_profile.map(|p| p.av_vm_sin_variance).unwrap_or(0.0),
        );

        result.push_level(level_data(*altitude_km, center, &ring_vts, synth.as_ref(), &config.radar));
        for coefficients in ring_coefficients {
            result.set_coefficients(pushed_index, coefficients);
        }

        if let Some(synth) = synth {
            result.central_pressure_mb = synth.central_pressure_mb;
            result.central_pressure_uncertainty_mb = synth.central_pressure_uncertainty_mb;
            result.pressure_deficit_mb = synth.pressure_deficit_mb;
            result.mean_rmw_km = synth.rmw_km;
        }
    }

    simplex_list.append(simplex);
    vortex_list.append(result);
    Ok(())
}

fn nearest_layer(profile: &hvvp::HvvpProfile, altitude_km: f32) -> Option<&hvvp::HvvpLayer> {
    profile
        .layers
        .iter()
        .min_by(|a, b| (a.altitude_km - altitude_km).abs().partial_cmp(&(b.altitude_km - altitude_km).abs()).unwrap())
}

fn check_abort(abort: &Arc<AtomicBool>) -> Result<()> {
    if abort.load(Ordering::SeqCst) {
        Err(Error::Aborted)
    } else {
        Ok(())
    }
}

fn analysis_levels(center: &vortrac_model::config::CenterConfig) -> Vec<f32> {
    let mut levels = Vec::new();
    let mut z = center.bottom_level_km;
    while z <= center.top_level_km + f32::EPSILON {
        levels.push(z);
        z += 1.0;
    }
    levels
}

fn gap_tolerance_fraction(vtd: &vortrac_model::config::VtdConfig) -> f32 {
    vtd.gap_tolerance_degrees(1).unwrap_or(90.0) / 360.0
}

fn flat_earth_km(radar: &vortrac_model::config::RadarConfig, latitude: f32, longitude: f32) -> (f32, f32) {
    let (x_m, y_m) = vortrac_model::cappi::latlon_to_xy(radar.latitude, radar.longitude, latitude, longitude);
    (x_m / 1000.0, y_m / 1000.0)
}

fn level_data(
    altitude_km: f32,
    center: &center_chooser::ChosenCenter,
    rings: &[RingVt],
    synth: Option<&vortrac_process::vortex_synth::LevelSynthResult>,
    radar: &vortrac_model::config::RadarConfig,
) -> LevelData {
    let (latitude, longitude) = flat_earth_to_latlon(radar, center.x_km, center.y_km);
    let max_vt = synth
        .map(|s| s.max_tangential_wind_ms)
        .unwrap_or_else(|| rings.iter().map(|r| r.vt_c0).fold(0.0_f32, f32::max));
    LevelData {
        altitude_km,
        center_latitude: latitude,
        center_longitude: longitude,
        rmw_km: synth.map(|s| s.rmw_km).unwrap_or(MISSING),
        rmw_uncertainty_km: synth.map(|s| s.rmw_uncertainty_km).unwrap_or(MISSING),
        max_tangential_wind_ms: max_vt,
        center_std_dev_km: center.std_dev_km,
        converging_center_count: center.converging_count,
    }
}

fn flat_earth_to_latlon(radar: &vortrac_model::config::RadarConfig, x_km: f32, y_km: f32) -> (f32, f32) {
    vortrac_model::cappi::xy_to_latlon(radar.latitude, radar.longitude, x_km * 1000.0, y_km * 1000.0)
}

/// Shared abort flag, flipped by the controller's Ctrl-C handler; checked
/// by [`run_volume`] at each suspension point (spec §5).
pub fn new_abort_flag() -> Arc<AtomicBool> {
    Arc::new(AtomicBool::new(false))
}

pub async fn watch_for_interrupt(abort: Arc<AtomicBool>) {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("interrupt received; will stop before the next volume");
        abort.store(true, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vortrac_model::config::{
        CappiConfig, CenterConfig, ChooseCenterConfig, GapTolerance, Geometry, PressureConfig, QcConfig, RadarConfig,
        VortexConfig, VtdConfig,
    };

    fn sample_config() -> Configuration {
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
                longitude: -75.0,
                altitude_m: 10.0,
                start_epoch_millis: 0,
                format: "archive2".into(),
            },
            cappi: CappiConfig { z_grid_spacing_km: 1.0 },
            vtd: VtdConfig {
                bottom_level_km: 1.0,
                top_level_km: 2.0,
                inner_radius_km: 5.0,
                outer_radius_km: 15.0,
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
                outer_radius_km: 15.0,
                bottom_level_km: 1.0,
                top_level_km: 2.0,
                max_iterations: 20,
                convergence_tolerance: 1e-3,
                ring_count: 2,
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
            qc: QcConfig { min_valid_gate_fraction: 0.5 },
        }
    }

    /// Scenario S5 (spec §8): a volume whose Cappi is entirely missing
    /// values (here, a volume with no sweeps at all, so the placeholder
    /// CappiBuilder produces an all-missing grid) yields zero converging
    /// rings. The simplex search is still recorded, but the volume is not
    /// appended to the VortexList (spec §7: NoConvergence skips the
    /// append step).
    #[test]
    fn s5_no_convergence_skips_vortex_list_append() {
        let config = sample_config();
        let volume = RadarVolume::new(0, 25.0, -75.0, 10.0, vec![]);

        let mut vortex_list = VortexList::new();
        let mut simplex_list = SimplexList::new();
        let pressure_observations = PressureList::new();
        let abort = new_abort_flag();

        let result = run_volume(
            &config,
            &volume,
            &mut vortex_list,
            &mut simplex_list,
            &pressure_observations,
            &abort,
        );

        assert!(matches!(result, Err(Error::NoConvergence)));
        assert!(vortex_list.entries().is_empty());
        assert_eq!(simplex_list.entries().len(), 1);
    }
}
