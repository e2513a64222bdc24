//! VortexSynth: RMW identification, Rankine-decay extrapolation, and
//! gradient-wind pressure integration (spec §4.6).

use crate::preprocess::coriolis_parameter;

/// Sea-level air density used by the gradient-wind integration, kg/m^3.
/// The donor project treats this as effectively constant across the
/// shallow altitude range the core integrates over; no configuration
/// option exposes it.
const AIR_DENSITY_KG_M3: f64 = 1.15;
const PASCALS_PER_MILLIBAR: f64 = 100.0;
const PRESSURE_INTEGRATION_STEPS: usize = 400;

/// One ring's `VTC0` (mean tangential wind) and its least-squares standard
/// error, the inputs VortexSynth needs per level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingVt {
    pub radius_km: f32,
    pub vt_c0: f32,
    pub std_error: f32,
}

/// One level's synthesized vortex vitals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelSynthResult {
    pub rmw_km: f32,
    pub rmw_uncertainty_km: f32,
    pub max_tangential_wind_ms: f32,
    pub central_pressure_mb: f32,
    pub pressure_deficit_mb: f32,
    pub central_pressure_uncertainty_mb: f32,
    /// The modified-Rankine decay exponent fit from the outer three rings
    /// (spec §4.6 step 3); callers extrapolating `VT` beyond the
    /// outermost analyzed ring use this with [`rankine_decay`].
    pub rankine_alpha: f32,
}

/// Modified-Rankine decay: `VT(r) = VTmax * (RMW/r)^alpha`, valid for
/// `r > RMW` (spec §4.6 step 3).
pub fn rankine_decay(r_km: f32, rmw_km: f32, vt_max: f32, alpha: f32) -> f32 {
    if r_km <= 0.0 {
        return vt_max;
    }
    vt_max * (rmw_km / r_km).powf(alpha)
}

/// Synthesizes one level's vitals from its per-ring `VTC0` profile.
///
/// `boundary_pressure_mb` is the reference pressure at the outermost ring
/// (spec §4.6 step 4's nearest-MADIS-observation or configured default).
/// `hvvp_variance` contributes to the uncertainty estimate only under the
/// HVVP closure (spec §4.6 step 5); pass `0.0` under the `original`
/// closure.
pub fn synth_level(
    rings: &[RingVt],
    radar_latitude_degrees: f32,
    boundary_pressure_mb: f32,
    hvvp_variance: f32,
) -> Option<LevelSynthResult> {
    if rings.len() < 2 {
        return None;
    }
    let mut sorted: Vec<RingVt> = rings.to_vec();
    sorted.sort_by(|a, b| a.radius_km.partial_cmp(&b.radius_km).unwrap());

    let (rmw_km, vt_max, rmw_uncertainty_km) = identify_rmw(&sorted);
    let alpha = rankine_alpha(&sorted, rmw_km, vt_max);

    let r_out_km = sorted.last().unwrap().radius_km;
    let r_inner_km = sorted.first().unwrap().radius_km;

    let f = coriolis_parameter(radar_latitude_degrees);
    let vt_at = |r_km: f32| -> f64 {
        if r_km >= r_inner_km {
            interpolate_vt(&sorted, r_km) as f64
        } else if r_km <= 0.0 {
            0.0
        } else {
            // Solid-body core below the innermost analyzed ring, scaled to
            // match the profile at r_inner.
            (interpolate_vt(&sorted, r_inner_km) as f64) * (r_km / r_inner_km) as f64
        }
    };

    let boundary_pa = boundary_pressure_mb as f64 * PASCALS_PER_MILLIBAR;
    let central_pa = integrate_gradient_wind(r_out_km as f64, boundary_pa, f, &vt_at);
    let central_pressure_mb = (central_pa / PASCALS_PER_MILLIBAR) as f32;
    let pressure_deficit_mb = boundary_pressure_mb - central_pressure_mb;

    let coefficient_variance: f32 = sorted.iter().map(|r| r.std_error.powi(2)).sum::<f32>() / sorted.len() as f32;
    let central_pressure_uncertainty_mb = (coefficient_variance + hvvp_variance).sqrt();

    Some(LevelSynthResult {
        rmw_km,
        rmw_uncertainty_km,
        max_tangential_wind_ms: vt_max,
        central_pressure_mb,
        pressure_deficit_mb,
        central_pressure_uncertainty_mb,
        rankine_alpha: alpha,
    })
}

/// Finds the ring of maximum `VTC0` and parabolically interpolates between
/// it and its two neighbors for sub-ring RMW precision (spec §4.6 step 2).
fn identify_rmw(sorted: &[RingVt]) -> (f32, f32, f32) {
    let (max_index, max_ring) = sorted
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.vt_c0.partial_cmp(&b.vt_c0).unwrap())
        .unwrap();

    if max_index == 0 || max_index == sorted.len() - 1 {
        return (max_ring.radius_km, max_ring.vt_c0, sorted[1].radius_km - sorted[0].radius_km);
    }

    let (r0, v0) = (sorted[max_index - 1].radius_km as f64, sorted[max_index - 1].vt_c0 as f64);
    let (r1, v1) = (sorted[max_index].radius_km as f64, sorted[max_index].vt_c0 as f64);
    let (r2, v2) = (sorted[max_index + 1].radius_km as f64, sorted[max_index + 1].vt_c0 as f64);

    // Parabola through three points via Lagrange vertex formula.
    let denom = v0 - 2.0 * v1 + v2;
    if denom.abs() < f64::EPSILON {
        return (r1 as f32, v1 as f32, (r2 - r0) as f32 / 2.0);
    }
    let offset = 0.5 * (v0 - v2) / denom;
    let rmw = r1 + offset * (r2 - r0) / 2.0;
    let vmax = v1 - 0.25 * (v0 - v2) * offset;

    (rmw as f32, vmax as f32, ((r2 - r0) / 2.0) as f32)
}

/// Fits the modified-Rankine decay exponent `alpha` from the outermost
/// three rings via a log-log linear regression of `VT/VTmax` against
/// `RMW/r` (spec §4.6 step 3).
fn rankine_alpha(sorted: &[RingVt], rmw_km: f32, vt_max: f32) -> f32 {
    let outer = &sorted[sorted.len().saturating_sub(3)..];
    if outer.len() < 2 || vt_max <= 0.0 || rmw_km <= 0.0 {
        return 0.5;
    }

    let points: Vec<(f64, f64)> = outer
        .iter()
        .filter(|r| r.radius_km > 0.0 && r.vt_c0 > 0.0)
        .map(|r| {
            let x = ((rmw_km / r.radius_km) as f64).ln();
            let y = ((r.vt_c0 / vt_max) as f64).ln();
            (x, y)
        })
        .collect();

    if points.len() < 2 {
        return 0.5;
    }

    let n = points.len() as f64;
    let sum_x: f64 = points.iter().map(|(x, _)| x).sum();
    let sum_y: f64 = points.iter().map(|(_, y)| y).sum();
    let sum_xx: f64 = points.iter().map(|(x, _)| x * x).sum();
    let sum_xy: f64 = points.iter().map(|(x, y)| x * y).sum();

    let denom = n * sum_xx - sum_x * sum_x;
    if denom.abs() < f64::EPSILON {
        return 0.5;
    }
    ((n * sum_xy - sum_x * sum_y) / denom) as f32
}

/// Linear interpolation of `VTC0` between the two rings bracketing `r_km`.
fn interpolate_vt(sorted: &[RingVt], r_km: f32) -> f32 {
    if r_km <= sorted[0].radius_km {
        return sorted[0].vt_c0;
    }
    if r_km >= sorted[sorted.len() - 1].radius_km {
        return sorted[sorted.len() - 1].vt_c0;
    }
    for window in sorted.windows(2) {
        let (a, b) = (window[0], window[1]);
        if r_km >= a.radius_km && r_km <= b.radius_km {
            let span = b.radius_km - a.radius_km;
            if span.abs() < f32::EPSILON {
                return a.vt_c0;
            }
            let t = (r_km - a.radius_km) / span;
            return a.vt_c0 + t * (b.vt_c0 - a.vt_c0);
        }
    }
    sorted[sorted.len() - 1].vt_c0
}

/// Trapezoidal inward integration of `dP/dr = rho*VT^2/r + rho*f*VT` from
/// `r_out_km` to the center, returning the central pressure in Pa (spec
/// §4.6 step 4).
fn integrate_gradient_wind(r_out_km: f64, boundary_pa: f64, coriolis: f64, vt_at: &impl Fn(f32) -> f64) -> f64 {
    let steps = PRESSURE_INTEGRATION_STEPS;
    let dr_km = r_out_km / steps as f64;
    let mut pressure_pa = boundary_pa;

    let gradient = |r_km: f64| -> f64 {
        if r_km <= 0.0 {
            return 0.0;
        }
        let r_m = r_km * 1000.0;
        let vt = vt_at(r_km as f32);
        AIR_DENSITY_KG_M3 * vt * vt / r_m + AIR_DENSITY_KG_M3 * coriolis * vt
    };

    for i in 0..steps {
        let r_a = r_out_km - i as f64 * dr_km;
        let r_b = r_out_km - (i + 1) as f64 * dr_km;
        let avg_gradient = 0.5 * (gradient(r_a) + gradient(r_b));
        // dP/dr is in Pa/m; dr here is in km, so convert to meters.
        pressure_pa -= avg_gradient * (dr_km * 1000.0);
    }

    pressure_pa
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(radius_km: f32, vt_c0: f32) -> RingVt {
        RingVt {
            radius_km,
            vt_c0,
            std_error: 0.5,
        }
    }

    #[test]
    fn identifies_rmw_at_peak_ring() {
        let rings = vec![ring(10.0, 20.0), ring(20.0, 40.0), ring(30.0, 25.0), ring(40.0, 15.0)];
        let result = synth_level(&rings, 25.0, 1013.0, 0.0).unwrap();
        assert!((result.rmw_km - 20.0).abs() < 5.0);
        assert!(result.max_tangential_wind_ms >= 40.0);
    }

    #[test]
    fn central_pressure_is_below_boundary_for_cyclonic_profile() {
        let rings = vec![ring(10.0, 20.0), ring(20.0, 40.0), ring(30.0, 25.0), ring(40.0, 15.0)];
        let result = synth_level(&rings, 25.0, 1013.0, 0.0).unwrap();
        assert!(result.central_pressure_mb < 1013.0);
        assert!(result.pressure_deficit_mb > 0.0);
    }

    #[test]
    fn too_few_rings_returns_none() {
        let rings = vec![ring(10.0, 20.0)];
        assert!(synth_level(&rings, 25.0, 1013.0, 0.0).is_none());
    }
}
