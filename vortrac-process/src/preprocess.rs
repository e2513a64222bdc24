//! Preprocess: initial-guess extrapolation for the next volume (spec §4.1).

use vortrac_model::cappi::latlon_to_xy;
use vortrac_model::config::{RadarConfig, VortexConfig};
use vortrac_model::volume::RadarVolume;

use crate::result::{Error, Result};

const EARTH_ROTATION_RAD_PER_S: f64 = 7.2921159e-5;
const SECONDS_PER_HOUR: i64 = 3_600;
const MAX_FORWARD_EXTRAPOLATION_S: i64 = 6 * SECONDS_PER_HOUR;
const MAX_RANGE_FROM_RADAR_KM: f32 = 500.0;
const LOST_THRESHOLD_KM: f32 = 150.0;
const WARN_THRESHOLD_KM: f32 = 75.0;
const RANGE_BUFFER_KM: f32 = 5.0;

/// The `(lat, lon)` starting point a volume's `CenterFinder` search should
/// use, plus the bookkeeping needed to warn on large drift.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InitialGuess {
    pub latitude: f32,
    pub longitude: f32,
    /// Distance in km between this guess and the configured-position-only
    /// extrapolation, used for the 75/150 km warning/rejection bands.
    pub drift_from_configured_km: f32,
}

/// A prior successful result, the minimal slice of `VortexData` Preprocess
/// needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriorResult {
    pub time_epoch_millis: i64,
    pub latitude: f32,
    pub longitude: f32,
}

/// Runs spec §4.1's extrapolation and rejection logic for one volume.
pub fn preprocess(
    vortex_config: &VortexConfig,
    radar_config: &RadarConfig,
    prior: Option<PriorResult>,
    volume: &RadarVolume,
) -> Result<InitialGuess> {
    let volume_time = volume.time_epoch_millis();
    let obs_time = vortex_config.observation_epoch_millis;

    let elapsed_from_obs_s = (volume_time - obs_time) as f64 / 1000.0;
    if elapsed_from_obs_s < 0.0 || elapsed_from_obs_s > MAX_FORWARD_EXTRAPOLATION_S as f64 {
        return Err(Error::TimeOutOfRange {
            volume_epoch_millis: volume_time,
            obs_epoch_millis: obs_time,
        });
    }

    let configured_guess = extrapolate(
        vortex_config.initial_latitude,
        vortex_config.initial_longitude,
        vortex_config.storm_speed_ms,
        vortex_config.storm_direction_degrees,
        elapsed_from_obs_s,
        radar_config,
    );

    let (latitude, longitude) = match prior {
        None if elapsed_from_obs_s.abs() < 15.0 * 60.0 => {
            (vortex_config.initial_latitude, vortex_config.initial_longitude)
        }
        None => configured_guess,
        Some(prior) => {
            let elapsed_from_prior_s = (volume_time - prior.time_epoch_millis) as f64 / 1000.0;
            if elapsed_from_prior_s < 0.0 || elapsed_from_prior_s > MAX_FORWARD_EXTRAPOLATION_S as f64 {
                return Err(Error::TimeOutOfRange {
                    volume_epoch_millis: volume_time,
                    obs_epoch_millis: prior.time_epoch_millis,
                });
            }
            extrapolate(
                prior.latitude,
                prior.longitude,
                vortex_config.storm_speed_ms,
                vortex_config.storm_direction_degrees,
                elapsed_from_prior_s,
                radar_config,
            )
        }
    };

    let drift_from_configured_km = haversine_like_km(
        radar_config,
        latitude,
        longitude,
        configured_guess.0,
        configured_guess.1,
    );

    if drift_from_configured_km > LOST_THRESHOLD_KM {
        return Err(Error::DistanceError {
            distance_km: drift_from_configured_km,
        });
    }

    let range_from_radar_km = haversine_like_km(radar_config, latitude, longitude, radar_config.latitude, radar_config.longitude);
    if range_from_radar_km > MAX_RANGE_FROM_RADAR_KM {
        return Err(Error::BeyondRadar { eta_seconds: None });
    }

    if drift_from_configured_km > WARN_THRESHOLD_KM {
        log::warn!(
            "initial guess drifted {drift_from_configured_km:.1}km from the configured-position extrapolation"
        );
    }

    Ok(InitialGuess {
        latitude,
        longitude,
        drift_from_configured_km,
    })
}

/// Returns [`Error::BeyondRadar`] with an ETA if `guess` falls outside
/// every sweep's unambiguous range plus a 5 km buffer.
pub fn check_within_range(volume: &RadarVolume, radar_config: &RadarConfig, guess: &InitialGuess, storm_speed_ms: f32) -> Result<()> {
    let range_km = haversine_like_km(radar_config, guess.latitude, guess.longitude, radar_config.latitude, radar_config.longitude);
    let max_range = volume.max_unambiguous_range_km() + RANGE_BUFFER_KM;

    if range_km <= max_range {
        return Ok(());
    }

    let eta_seconds = if storm_speed_ms > f32::EPSILON {
        Some((range_km - max_range) * 1000.0 / storm_speed_ms)
    } else {
        None
    };
    Err(Error::BeyondRadar { eta_seconds })
}

fn extrapolate(
    lat: f32,
    lon: f32,
    speed_ms: f32,
    direction_degrees: f32,
    elapsed_s: f64,
    radar_config: &RadarConfig,
) -> (f32, f32) {
    let direction_rad = (direction_degrees as f64).to_radians();
    let distance_m = speed_ms as f64 * elapsed_s;
    let dx_m = (distance_m * direction_rad.sin()) as f32;
    let dy_m = (distance_m * direction_rad.cos()) as f32;

    let (x0, y0) = latlon_to_xy(radar_config.latitude, radar_config.longitude, lat, lon);
    vortrac_model::cappi::xy_to_latlon(radar_config.latitude, radar_config.longitude, x0 + dx_m, y0 + dy_m)
}

fn haversine_like_km(radar_config: &RadarConfig, lat_a: f32, lon_a: f32, lat_b: f32, lon_b: f32) -> f32 {
    let (xa, ya) = latlon_to_xy(radar_config.latitude, radar_config.longitude, lat_a, lon_a);
    let (xb, yb) = latlon_to_xy(radar_config.latitude, radar_config.longitude, lat_b, lon_b);
    ((xa - xb).powi(2) + (ya - yb).powi(2)).sqrt() / 1000.0
}

/// Earth's rotation rate, exposed for `VortexSynth`'s Coriolis parameter
/// `f = 2*Omega*sin(lat)`.
pub fn coriolis_parameter(latitude_degrees: f32) -> f64 {
    2.0 * EARTH_ROTATION_RAD_PER_S * (latitude_degrees as f64).to_radians().sin()
}
