//! CenterFinder: per-level, per-ring downhill simplex search (spec §4.2).

use vortrac_model::cappi::Cappi;
use vortrac_model::config::CenterConfig;
use vortrac_model::sentinel::is_missing;
use vortrac_model::vortex::{SimplexCandidate, SimplexData};

use crate::gbvtd::{fit_ring, ring_samples_from_cappi};
use crate::simplex::minimize;

/// Number of azimuth samples taken around each candidate ring. Chosen so
/// rings at the configured minimum radius still resolve individual
/// azimuthal gaps at typical radar beamwidth.
const RING_AZIMUTH_SAMPLES: usize = 72;

/// The initial simplex step size, in km (spec §4.2).
const INITIAL_SIMPLEX_DELTA_KM: f64 = 1.0;

/// Runs the per-level, per-ring simplex search described in spec §4.2,
/// returning one [`SimplexData`] covering every analyzed level and ring at
/// `time_epoch_millis`.
///
/// `initial_guess_km` is the `(x, y)` starting point (radar-relative
/// meters, converted to km internally) shared by every ring's simplex; the
/// per-ring fit is otherwise independent, so an implementation MAY
/// parallelize this loop over rings (spec §5) — this one does when built
/// with the `parallel` feature.
pub fn find_centers(
    time_epoch_millis: i64,
    cappi_layers: &[(f32, Cappi)],
    initial_guess_km: (f64, f64),
    center_config: &CenterConfig,
    max_wavenumber: u8,
    gap_tolerance_fraction: f32,
) -> SimplexData {
    let mut data = SimplexData::new(time_epoch_millis);

    for (level, (altitude_km, cappi)) in cappi_layers.iter().enumerate() {
        if *altitude_km < center_config.bottom_level_km || *altitude_km > center_config.top_level_km {
            continue;
        }

        let radii = ring_radii_km(center_config);

        #[cfg(feature = "parallel")]
        let candidates: Vec<SimplexCandidate> = {
            use rayon::prelude::*;
            radii
                .par_iter()
                .map(|&radius_km| {
                    search_ring(
                        level,
                        cappi,
                        radius_km,
                        initial_guess_km,
                        center_config,
                        max_wavenumber,
                        gap_tolerance_fraction,
                    )
                })
                .collect()
        };

        #[cfg(not(feature = "parallel"))]
        let candidates: Vec<SimplexCandidate> = radii
            .iter()
            .map(|&radius_km| {
                search_ring(
                    level,
                    cappi,
                    radius_km,
                    initial_guess_km,
                    center_config,
                    max_wavenumber,
                    gap_tolerance_fraction,
                )
            })
            .collect();

        for candidate in candidates {
            data.push(candidate);
        }
    }

    data
}

/// The ring radii a volume's `CenterFinder` search covers, evenly spaced
/// between the configured inner and outer radius (spec §4.2). Exposed so
/// the controller can re-derive the same radii when fitting final
/// coefficients at the chosen centers.
pub fn ring_radii_km(center_config: &CenterConfig) -> Vec<f64> {
    let span = (center_config.outer_radius_km - center_config.inner_radius_km) as f64;
    let count = center_config.ring_count.max(1) as f64;
    let step = span / count;
    (0..=center_config.ring_count)
        .map(|i| center_config.inner_radius_km as f64 + i as f64 * step)
        .collect()
}

fn search_ring(
    level: usize,
    cappi: &Cappi,
    radius_km: f64,
    initial_guess_km: (f64, f64),
    center_config: &CenterConfig,
    max_wavenumber: u8,
    gap_tolerance_fraction: f32,
) -> SimplexCandidate {
    let order = (max_wavenumber + 1).min(3);

    let objective = |x_km: f64, y_km: f64| -> f64 {
        let samples = ring_samples_from_cappi(cappi, x_km, y_km, radius_km, RING_AZIMUTH_SAMPLES);
        let valid: Vec<_> = samples
            .iter()
            .copied()
            .filter(|s| !is_missing(s.velocity_ms))
            .collect();

        let coverage = valid.len() as f32 / RING_AZIMUTH_SAMPLES as f32;
        if coverage < gap_tolerance_fraction {
            return f64::INFINITY;
        }

        match fit_ring(level, x_km, y_km, radius_km, order, &valid) {
            Ok(fit) => (fit.sse / valid.len().max(1) as f64).sqrt(),
            Err(_) => f64::INFINITY,
        }
    };

    let result = minimize(
        objective,
        initial_guess_km.0,
        initial_guess_km.1,
        INITIAL_SIMPLEX_DELTA_KM,
        center_config.convergence_tolerance as f64,
        center_config.max_iterations,
    );

    let max_vt = if result.value.is_finite() {
        let samples = ring_samples_from_cappi(cappi, result.x, result.y, radius_km, RING_AZIMUTH_SAMPLES);
        let valid: Vec<_> = samples
            .iter()
            .copied()
            .filter(|s| !is_missing(s.velocity_ms))
            .collect();
        fit_ring(level, result.x, result.y, radius_km, order, &valid)
            .map(|fit| crate::gbvtd::coefficient_value(&fit, vortrac_model::vortex::CoefficientKind::VtC0))
            .unwrap_or(vortrac_model::sentinel::MISSING)
    } else {
        vortrac_model::sentinel::MISSING
    };

    SimplexCandidate {
        level,
        radius_km: radius_km as f32,
        x_km: result.x as f32,
        y_km: result.y as f32,
        std_dev: result.value as f32,
        max_tangential_wind_ms: max_vt,
        converged: result.converged,
    }
}
