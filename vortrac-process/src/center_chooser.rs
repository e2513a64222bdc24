//! CenterChooser: per-level center selection and cross-volume smoothing
//! (spec §4.3).

use vortrac_model::config::ChooseCenterConfig;
use vortrac_model::vortex::{SimplexCandidate, SimplexData};

/// One level's chosen center, ready to be written into a `VortexData`
/// record by the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChosenCenter {
    pub level: usize,
    pub x_km: f32,
    pub y_km: f32,
    pub converging_count: u32,
    /// `sqrt(std_x^2 + std_y^2)` of the surviving candidate set, the
    /// per-level center uncertainty the controller writes into `LevelData`.
    pub std_dev_km: f32,
}

/// A prior level's center, used for cross-volume smoothing (step 4).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriorCenter {
    pub x_km: f32,
    pub y_km: f32,
}

/// Runs the per-level selection of spec §4.3 over one volume's
/// [`SimplexData`], returning one [`ChosenCenter`] per level that has at
/// least one converging ring.
///
/// `prior_count` is the number of past volumes available for cross-volume
/// smoothing (spec §4.3 step 4's `count(prior results) >= volSpan/2`);
/// `extrapolated_prior` supplies the motion-extrapolated prior center for
/// the level being chosen, when one exists.
pub fn choose_centers(
    simplex: &SimplexData,
    config: &ChooseCenterConfig,
    levels: usize,
    prior_count: u32,
    extrapolated_prior: impl Fn(usize) -> Option<PriorCenter>,
) -> Vec<ChosenCenter> {
    (0..levels)
        .filter_map(|level| choose_level(simplex, config, level, prior_count, &extrapolated_prior))
        .collect()
}

fn choose_level(
    simplex: &SimplexData,
    config: &ChooseCenterConfig,
    level: usize,
    prior_count: u32,
    extrapolated_prior: &impl Fn(usize) -> Option<PriorCenter>,
) -> Option<ChosenCenter> {
    let converging: Vec<&SimplexCandidate> = simplex
        .candidates_at_level(level)
        .filter(|c| c.converged)
        .collect();

    if converging.is_empty() {
        return None;
    }

    if let Some((x, y)) = config.force_center {
        return Some(ChosenCenter {
            level,
            x_km: x,
            y_km: y,
            converging_count: converging.len() as u32,
            std_dev_km: 0.0,
        });
    }

    let (mean_x, mean_y) = mean_xy(&converging);
    let (std_x, std_y) = std_xy(&converging, mean_x, mean_y);

    let within_bounds: Vec<&SimplexCandidate> = converging
        .iter()
        .copied()
        .filter(|c| {
            let dx = (c.x_km - mean_x).abs();
            let dy = (c.y_km - mean_y).abs();
            dx <= config.std_dev_multiplier * std_x.max(f32::EPSILON)
                && dy <= config.std_dev_multiplier * std_y.max(f32::EPSILON)
        })
        .collect();

    let surviving: Vec<&SimplexCandidate> = if within_bounds.is_empty() {
        converging.clone()
    } else {
        within_bounds
    };

    let (mut x, mut y) = mean_xy(&surviving);
    let (surviving_std_x, surviving_std_y) = std_xy(&surviving, x, y);

    let half_span = (config.averaging_interval_volumes / 2).max(1);
    if prior_count >= half_span {
        if let Some(prior) = extrapolated_prior(level) {
            let candidate_std = surviving_std_x.hypot(surviving_std_y).max(f32::EPSILON);
            // Weighted average favoring the lower-variance estimate; the
            // prior is treated as an exact reference (zero variance) when
            // this volume's spread collapses to zero.
            let weight_prior = candidate_std / (candidate_std + 1.0);
            let weight_candidate = 1.0 - weight_prior;
            x = weight_candidate * x + weight_prior * prior.x_km;
            y = weight_candidate * y + weight_prior * prior.y_km;
        }
    }

    Some(ChosenCenter {
        level,
        x_km: x,
        y_km: y,
        converging_count: converging.len() as u32,
        std_dev_km: surviving_std_x.hypot(surviving_std_y),
    })
}

fn mean_xy(candidates: &[&SimplexCandidate]) -> (f32, f32) {
    let n = candidates.len().max(1) as f32;
    let sum_x: f32 = candidates.iter().map(|c| c.x_km).sum();
    let sum_y: f32 = candidates.iter().map(|c| c.y_km).sum();
    (sum_x / n, sum_y / n)
}

fn std_xy(candidates: &[&SimplexCandidate], mean_x: f32, mean_y: f32) -> (f32, f32) {
    let n = candidates.len().max(1) as f32;
    let var_x: f32 = candidates.iter().map(|c| (c.x_km - mean_x).powi(2)).sum::<f32>() / n;
    let var_y: f32 = candidates.iter().map(|c| (c.y_km - mean_y).powi(2)).sum::<f32>() / n;
    (var_x.sqrt(), var_y.sqrt())
}
